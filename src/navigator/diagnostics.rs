//! Out-of-band reporting for paths that fail to parse.
//!
//! The resolver never returns parse errors to its caller; it hands them to a
//! `Diagnostics` sink and carries on with an empty record.

use std::cell::RefCell;

use crate::path::PathError;

/// Receives parse failures seen by the resolver.
pub trait Diagnostics {
    fn parse_failed(&self, path: &str, error: &PathError);
}

/// Logs parse failures with `tracing` at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn parse_failed(&self, path: &str, error: &PathError) {
        tracing::error!(path, %error, "failed to parse object path");
    }
}

/// Keeps parse failures in memory, formatted as `"<path>: <error>"`.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    messages: RefCell<Vec<String>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    /// Removes and returns all recorded messages.
    pub fn take(&self) -> Vec<String> {
        self.messages.take()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn parse_failed(&self, path: &str, error: &PathError) {
        self.messages.borrow_mut().push(format!("{}: {}", path, error));
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn parse_failed(&self, path: &str, error: &PathError) {
        (**self).parse_failed(path, error)
    }
}
