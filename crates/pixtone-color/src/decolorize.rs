//! Selective-color desaturation
//!
//! Converts to grayscale the way a channel mixer does: every pixel is split
//! into an achromatic floor plus at most one secondary color (cyan, magenta
//! or yellow) plus at most one primary (red, green or blue), and each
//! colored part contributes to the gray level with its own weight.
//!
//! ```text
//! (r, g, b) = floor + secondary + primary
//! gray      = floor + secondary * w_secondary + primary * w_primary
//! ```
//!
//! Weights are percentages in [-200, 300]; the result is clamped to
//! [0, 255] and rounded to the nearest level. Alpha is preserved.

use crate::error::{ColorResult, check_range};
use pixtone_core::color;
use pixtone_core::{NoProgress, PixMut, Progress, run_pass};

const OP: &str = "decolorize";

/// Smallest accepted weight, in percent.
pub const WEIGHT_MIN: i32 = -200;
/// Largest accepted weight, in percent.
pub const WEIGHT_MAX: i32 = 300;

/// Per-color contribution to the gray level, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecolorizeWeights {
    pub red: i32,
    pub yellow: i32,
    pub green: i32,
    pub cyan: i32,
    pub blue: i32,
    pub magenta: i32,
}

impl Default for DecolorizeWeights {
    /// The common black-and-white preset: 40/60/40/60/20/80.
    fn default() -> Self {
        Self {
            red: 40,
            yellow: 60,
            green: 40,
            cyan: 60,
            blue: 20,
            magenta: 80,
        }
    }
}

impl DecolorizeWeights {
    /// Create weights in red, yellow, green, cyan, blue, magenta order.
    pub fn new(red: i32, yellow: i32, green: i32, cyan: i32, blue: i32, magenta: i32) -> Self {
        Self {
            red,
            yellow,
            green,
            cyan,
            blue,
            magenta,
        }
    }

    /// Check every weight against [-200, 300].
    ///
    /// # Errors
    ///
    /// Returns [`crate::ColorError::OutOfRange`] naming the first offending
    /// weight.
    pub fn validate(&self) -> ColorResult<()> {
        for (name, value) in [
            ("red", self.red),
            ("yellow", self.yellow),
            ("green", self.green),
            ("cyan", self.cyan),
            ("blue", self.blue),
            ("magenta", self.magenta),
        ] {
            check_range(name, value, WEIGHT_MIN, WEIGHT_MAX)?;
        }
        Ok(())
    }
}

/// Gray level of an RGB triple under `weights`, in [0, 255].
pub fn weighted_gray(r: u8, g: u8, b: u8, weights: &DecolorizeWeights) -> u8 {
    let w = |v: i32| v as f64 / 100.0;

    let (mut r, mut g, mut b) = (r as i32, g as i32, b as i32);
    let floor = r.min(g).min(b);
    r -= floor;
    g -= floor;
    b -= floor;

    // At least one channel is zero now; red is checked first, then green
    let mut gray = floor as f64;
    if r == 0 {
        let cyan = g.min(b);
        g -= cyan;
        b -= cyan;
        gray += cyan as f64 * w(weights.cyan) + g as f64 * w(weights.green) + b as f64 * w(weights.blue);
    } else if g == 0 {
        let magenta = r.min(b);
        r -= magenta;
        b -= magenta;
        gray += magenta as f64 * w(weights.magenta)
            + r as f64 * w(weights.red)
            + b as f64 * w(weights.blue);
    } else {
        let yellow = r.min(g);
        r -= yellow;
        g -= yellow;
        gray += yellow as f64 * w(weights.yellow)
            + r as f64 * w(weights.red)
            + g as f64 * w(weights.green);
    }

    gray.clamp(0.0, 255.0).round() as u8
}

/// Decolorize one packed pixel, keeping its alpha.
pub fn decolorize_pixel(pixel: u32, weights: &DecolorizeWeights) -> u32 {
    let c = color::unpack(pixel);
    let gray = weighted_gray(c.r, c.g, c.b, weights);
    color::pack(gray, gray, gray, c.a)
}

/// Convert every pixel to a weighted gray.
///
/// # Errors
///
/// Returns [`crate::ColorError::OutOfRange`] if any weight is outside
/// [-200, 300]; the image is not touched.
///
/// # Example
///
/// ```
/// use pixtone_color::{DecolorizeWeights, decolorize};
/// use pixtone_core::{Pix, color};
///
/// let mut pm = Pix::new_filled(2, 2, color::pack(255, 0, 0, 5)).unwrap().into_mut();
/// decolorize(&mut pm, &DecolorizeWeights::default()).unwrap();
/// assert_eq!(pm.get_pixel(1, 1), Some(color::pack(102, 102, 102, 5)));
/// ```
pub fn decolorize(pm: &mut PixMut, weights: &DecolorizeWeights) -> ColorResult<()> {
    decolorize_with_progress(pm, weights, &mut NoProgress)
}

/// [`decolorize`] reporting to `progress`.
pub fn decolorize_with_progress(
    pm: &mut PixMut,
    weights: &DecolorizeWeights,
    progress: &mut dyn Progress,
) -> ColorResult<()> {
    weights.validate()?;
    run_pass(pm, OP, progress, |_, _, pixel| decolorize_pixel(pixel, weights));
    Ok(())
}
