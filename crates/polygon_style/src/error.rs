use polygon_layout::ResolveError;
use thiserror::Error;

/// Style generation failures.
///
/// Malformed property values never end up here; they fall back to theme
/// defaults instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("component id must not be empty")]
    InvalidComponentId,

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
