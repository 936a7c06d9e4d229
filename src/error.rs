//! Error type shared by the sampler, shapes and renderer
//!
//! Every failure here is a validation failure raised before the first
//! point of a call is emitted. Nothing is retried or swallowed.

use thiserror::Error;

use crate::geom::SpaceId;

/// Errors that can occur while configuring a renderer or sampling a shape
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrawError {
    #[error("step size must be greater than 0 (got {0})")]
    InvalidConfiguration(f64),

    #[error("cannot combine points from different spaces ({left} and {right})")]
    IncompatibleSpace { left: SpaceId, right: SpaceId },

    #[error("invalid block face `{0}`, use up, down, north, south, east or west")]
    InvalidFace(String),

    #[error("cannot normalize a zero-length vector")]
    DivideByZero,
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, DrawError>;
