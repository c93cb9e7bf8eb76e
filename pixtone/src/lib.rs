//! pixtone - Per-pixel color adjustments for truecolor images
//!
//! # Overview
//!
//! pixtone loads a PNG or JPEG, runs any number of in-place color
//! adjustments over it and writes it back out:
//!
//! - Hue rotation, saturation, selective desaturation, brightness-to-alpha
//! - Brightness, contrast and colorize filters
//! - Flips, quarter-turn rotations, bicubic resizing, tiling
//!
//! The individual crates are re-exported as modules; [`Editor`] chains
//! them behind a single error type.
//!
//! # Example
//!
//! ```
//! use pixtone::{Editor, Pix, pack};
//!
//! let pix = Pix::new_filled(4, 4, pack(255, 0, 0, 0)).unwrap();
//! let out = Editor::from_pix(pix)
//!     .hue_shift(120)
//!     .saturation(-100)
//!     .unwrap()
//!     .into_pix();
//! assert_eq!(out.get_rgba(0, 0), Some((255, 255, 255, 0)));
//! ```

mod editor;

// Re-export core types (primary data structures used everywhere)
pub use pixtone_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixtone_color as adjust;
pub use pixtone_io as io;
pub use pixtone_transform as transform;

pub use editor::{Editor, EditorError, EditorResult};
