//! Error types for pixtone-color

use thiserror::Error;

/// Errors that can occur during color adjustment
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixtone_core::Error),

    /// An adjustment parameter fell outside its documented range
    #[error("{name} out of range: {value} is not in [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;

/// Fail with [`ColorError::OutOfRange`] unless `min <= value <= max`.
pub(crate) fn check_range(name: &'static str, value: i32, min: i32, max: i32) -> ColorResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ColorError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}
