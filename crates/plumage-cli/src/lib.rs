//! CLI logic for the Plumage diagram generator.
//!
//! This module contains the core CLI logic: configuration loading, source
//! discovery, and the scan/render/write pipeline.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use walkdir::WalkDir;

use plumage::{DiagramBuilder, PlumageError, config::ScanConfig};

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    entity_count: usize,
    unit_count: usize,
}

impl RunSummary {
    /// Number of entities in the completed registry.
    pub fn entity_count(&self) -> usize {
        self.entity_count
    }

    /// Number of source files discovered under the root.
    pub fn unit_count(&self) -> usize {
        self.unit_count
    }
}

/// Run the Plumage CLI application
///
/// This function discovers source files under the root, processes them
/// through the Plumage pipeline, and writes the resulting PlantUML
/// document to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `PlumageError` for:
/// - Configuration loading errors
/// - Output-file write errors
///
/// Individual source files are handled best-effort: unreadable files are
/// skipped with a warning and undecodable byte sequences are replaced, so
/// a damaged source tree still produces a diagram.
pub fn run(args: &Args) -> Result<RunSummary, PlumageError> {
    info!(
        root = args.root,
        output_path = args.output;
        "Generating diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Discover source files
    let unit_paths = find_source_files(Path::new(&args.root), app_config.scan());
    debug!(unit_count = unit_paths.len(); "Source files discovered");

    // Read units with best-effort decoding
    let mut units = Vec::with_capacity(unit_paths.len());
    for path in &unit_paths {
        match fs::read(path) {
            Ok(bytes) => units.push(String::from_utf8_lossy(&bytes).into_owned()),
            Err(err) => {
                warn!(
                    path = path.display().to_string(),
                    error = err.to_string();
                    "Skipping unreadable file"
                );
            }
        }
    }

    // Process units using the DiagramBuilder API
    let builder = DiagramBuilder::new(app_config);
    let registry = builder.scan(&units);
    let document = builder.render(&registry);

    // Write output file
    fs::write(&args.output, document)?;

    info!(output_file = args.output; "Diagram exported successfully");

    Ok(RunSummary {
        entity_count: registry.len(),
        unit_count: unit_paths.len(),
    })
}

/// Recursively collect source files under `root` whose extension matches
/// the scan configuration, in sorted order.
///
/// Sorting keeps the unit order, and with it registry collision outcomes
/// and edge order, reproducible across runs.
fn find_source_files(root: &Path, scan: &ScanConfig) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| scan.matches_extension(ext))
        })
        .collect();

    files.sort();
    files
}
