//! Error types for Plumage operations.
//!
//! This module provides the main error type [`PlumageError`]. The error
//! surface is deliberately small: extraction, registry building,
//! resolution, and rendering are all best-effort and infallible, so only
//! the surrounding concerns (reading input, loading configuration,
//! writing output) can fail.

use std::io;

use thiserror::Error;

/// The main error type for Plumage operations.
#[derive(Debug, Error)]
pub enum PlumageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
