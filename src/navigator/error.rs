//! Caller errors raised by the resolver.

use thiserror::Error;

/// A path whose component chain does not fit the lookup it was passed to.
///
/// These indicate a bug in the caller rather than a missing object, so they
/// are returned as errors instead of `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigatorError {
    #[error("Only one component layer should be specified (found {found})")]
    ExpectedSingleComponent { found: usize },

    #[error("At least one component layer should be specified")]
    MissingComponentChain,
}
