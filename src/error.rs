//! Error type for configuration loading and validation.
//!
//! The flocking kernel itself never fails; only building a [`Mindset`]
//! from caller input can.
//!
//! [`Mindset`]: crate::mindset::Mindset

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// `maximum_movement` was below zero.
    #[error("maximum movement must be non-negative, got {0}")]
    NegativeMovement(f32),

    /// A mindset field was NaN or infinite.
    #[error("mindset field `{field}` must be finite")]
    NonFinite { field: &'static str },

    #[error("failed to read mindset file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse mindset")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
