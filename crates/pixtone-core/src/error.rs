//! Error types for pixtone-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Parameter validation happens before any pixel is touched, so an
//! `Err` always leaves the image unmodified.

use thiserror::Error;

/// pixtone core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// A numeric input fell outside its documented domain
    #[error("{name} out of range: {value} is not in [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl Error {
    /// Build an [`Error::OutOfRange`] for an integer parameter.
    pub fn out_of_range(name: &'static str, value: i64, min: i64, max: i64) -> Self {
        Error::OutOfRange {
            name,
            value: value as f64,
            min: min as f64,
            max: max as f64,
        }
    }
}

/// Result type alias for pixtone core operations
pub type Result<T> = std::result::Result<T, Error>;
