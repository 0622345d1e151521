//! Error adapter for converting PlumageError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. The
//! library errors carry no source spans (the pipeline is best-effort and
//! never fails on input), so the adapter only attaches error codes and
//! message formatting.

use std::{error::Error, fmt};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use plumage::PlumageError;

/// Adapter for [`PlumageError`] variants.
///
/// Wraps an error reference and implements [`MietteDiagnostic`] to enable
/// rich error formatting in the CLI.
pub struct ErrorAdapter<'a>(pub &'a PlumageError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            PlumageError::Io(_) => "plumage::io",
            PlumageError::Config(_) => "plumage::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            PlumageError::Config(_) => {
                Some(Box::new("check the TOML configuration file") as Box<dyn fmt::Display>)
            }
            PlumageError::Io(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
