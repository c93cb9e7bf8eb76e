//! pixtone Color - Per-pixel color adjustments
//!
//! This crate provides the in-place color operations of pixtone:
//!
//! - **Hue rotation** ([`hue`]): Rotate hue by whole degrees
//! - **Saturation** ([`saturation`](mod@saturation)): Gray-resistant boost and linear fade
//! - **Selective desaturation** ([`decolorize`](mod@decolorize)): Channel-mixer grayscale
//! - **Brightness to alpha** ([`alpha`]): Brightness becomes transparency
//! - **Channel filters** ([`enhance`]): Brightness, contrast and colorize curves
//!
//! Every operation mutates a [`pixtone_core::PixMut`] and has a
//! `_with_progress` variant accepting a [`pixtone_core::Progress`] receiver.
//! Parameters are validated before the first pixel is touched.

pub mod alpha;
pub mod decolorize;
pub mod enhance;
pub mod error;
pub mod hue;
pub mod saturation;

// Re-export core types
pub use pixtone_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

pub use hue::{hue_shift, hue_shift_pixel, hue_shift_with_progress, normalize_degrees};

pub use saturation::{
    SATURATION_MAX, SATURATION_MIN, saturate_pixel, saturation, saturation_curve,
    saturation_with_progress,
};

pub use decolorize::{
    DecolorizeWeights, decolorize, decolorize_pixel, decolorize_with_progress, weighted_gray,
};

pub use alpha::{
    brightness_to_alpha, brightness_to_alpha_pixel, brightness_to_alpha_with_progress,
};

pub use enhance::{
    TrcLut, brightness, brightness_with_progress, colorize, colorize_with_progress, contrast,
    contrast_trc, contrast_with_progress, identity_trc, offset_trc, trc_map_general,
};
