//! Top-level error type.

use tabgen_core::{FaceError, LayoutError, MirrorError, ParseError, PlacementError, ResolveError};
use thiserror::Error;

/// Top-level error type for finger-joint generation.
#[derive(Debug, Error)]
pub enum TabGenError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Mirror(#[from] MirrorError),

    #[error(transparent)]
    Face(#[from] FaceError),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error("Invalid options: {reason}")]
    InvalidOptions { reason: String },

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
