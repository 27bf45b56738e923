//! Error types for object path parsing.

use std::fmt;
use thiserror::Error;

/// Which bracketed index a parse error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexField {
    Level,
    Actor,
    Component,
}

impl fmt::Display for IndexField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IndexField::Level => "level",
            IndexField::Actor => "actor",
            IndexField::Component => "component",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while parsing an object path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// An index buffer held something other than decimal digits, or overflowed.
    #[error("Failed to parse {field} index: {text}")]
    InvalidIndex { field: IndexField, text: String },

    /// World, level or actor name (or a component step name) was empty.
    #[error("Missing required path components")]
    MissingComponents,

    /// A component name was committed without its index, or vice versa.
    #[error("Component names and indices must be the same length ({names} names, {indices} indices)")]
    ComponentCountMismatch { names: usize, indices: usize },
}
