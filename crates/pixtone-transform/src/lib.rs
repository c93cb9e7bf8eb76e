//! pixtone-transform - Geometric transformations for pixtone
//!
//! This crate provides whole-image geometry operations. Each takes a
//! borrowed [`pixtone_core::Pix`] and returns a new one:
//!
//! - Orthogonal rotations (90, 180, 270 degrees)
//! - Horizontal, vertical and combined flips
//! - Bicubic resizing with optional aspect preservation
//! - Tiling onto a larger or smaller canvas

mod error;
pub mod rotate;
pub mod scale;
pub mod tile;

pub use error::{TransformError, TransformResult};
pub use rotate::{FlipMode, flip, flip_lr, flip_tb, rotate_90, rotate_180, rotate_orth};
pub use scale::resize;
pub use tile::tile;
