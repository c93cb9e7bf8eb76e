//! pixtone Core - image container, pixel codec and traversal
//!
//! This crate provides the pieces every other pixtone crate builds on:
//!
//! - [`Pix`] / [`PixMut`] - The image container (immutable / mutable)
//! - [`color`] - Packed-pixel codec and the RGB <-> HSL model
//! - [`walk`] - Column-major pixel traversal with progress reporting
//! - [`Error`] / [`Result`] - Shared error type

pub mod color;
pub mod error;
pub mod pix;
pub mod walk;

pub use color::{Hsl, Hsla, Rgba, get_hsla, hsl_to_rgb, pack, rgb_to_hsl, unpack};
pub use error::{Error, Result};
pub use pix::{ImageFormat, Pix, PixMut};
pub use walk::{LogProgress, NoProgress, Progress, run_pass, walk_pixels};
