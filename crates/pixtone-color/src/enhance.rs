//! Linear channel filters
//!
//! Brightness, contrast and colorize as tone reproduction curves (TRC):
//! each filter builds a 256-entry lookup table per channel and maps every
//! pixel through it. Alpha is preserved except by [`colorize`], which can
//! also shift it.

use crate::error::{ColorResult, check_range};
use pixtone_core::color::{self, ALPHA_MAX};
use pixtone_core::{NoProgress, PixMut, Progress, run_pass};

/// A 256-entry lookup table for tone reproduction curve mapping.
///
/// Maps input channel values [0..255] to output values [0..255].
pub type TrcLut = [u8; 256];

/// Identity lookup table.
pub fn identity_trc() -> TrcLut {
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = i as u8;
    }
    lut
}

/// Generate an additive TRC: `out = clamp(in + offset)`.
///
/// # Errors
///
/// Returns [`crate::ColorError::OutOfRange`] if `offset` is outside
/// [-255, 255].
pub fn offset_trc(name: &'static str, offset: i32) -> ColorResult<TrcLut> {
    check_range(name, offset, -255, 255)?;
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = (i as i32 + offset).clamp(0, 255) as u8;
    }
    Ok(lut)
}

/// Generate a contrast TRC.
///
/// `level` in [-100, 100]; positive values spread channels away from the
/// midpoint, -100 collapses everything to mid gray.
/// `out = ((in / 255 - 0.5) * ((100 + level) / 100)^2 + 0.5) * 255`,
/// clamped and truncated. Evaluated around the 127.5 midpoint so that
/// level 0 maps every value to itself.
///
/// # Errors
///
/// Returns [`crate::ColorError::OutOfRange`] if `level` is outside
/// [-100, 100].
pub fn contrast_trc(level: i32) -> ColorResult<TrcLut> {
    check_range("contrast", level, -100, 100)?;
    let factor = ((100.0 + level as f64) / 100.0).powi(2);
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let v = (i as f64 - 127.5) * factor + 127.5;
        *entry = v.clamp(0.0, 255.0) as u8;
    }
    Ok(lut)
}

/// Map the color channels of every pixel through per-channel tables.
pub fn trc_map_general(
    pm: &mut PixMut,
    op: &str,
    progress: &mut dyn Progress,
    lut_r: &TrcLut,
    lut_g: &TrcLut,
    lut_b: &TrcLut,
) {
    run_pass(pm, op, progress, |_, _, pixel| {
        let c = color::unpack(pixel);
        color::pack(
            lut_r[c.r as usize],
            lut_g[c.g as usize],
            lut_b[c.b as usize],
            c.a,
        )
    });
}

/// Shift the brightness of every channel by `level` in [-255, 255].
///
/// # Errors
///
/// Returns [`crate::ColorError::OutOfRange`] if `level` is out of range;
/// the image is not touched.
pub fn brightness(pm: &mut PixMut, level: i32) -> ColorResult<()> {
    brightness_with_progress(pm, level, &mut NoProgress)
}

/// [`brightness`] reporting to `progress`.
pub fn brightness_with_progress(
    pm: &mut PixMut,
    level: i32,
    progress: &mut dyn Progress,
) -> ColorResult<()> {
    let lut = offset_trc("brightness", level)?;
    trc_map_general(pm, "brightness", progress, &lut, &lut, &lut);
    Ok(())
}

/// Change contrast by `level` in [-100, 100]; see [`contrast_trc`].
///
/// # Errors
///
/// Returns [`crate::ColorError::OutOfRange`] if `level` is out of range;
/// the image is not touched.
pub fn contrast(pm: &mut PixMut, level: i32) -> ColorResult<()> {
    contrast_with_progress(pm, level, &mut NoProgress)
}

/// [`contrast`] reporting to `progress`.
pub fn contrast_with_progress(
    pm: &mut PixMut,
    level: i32,
    progress: &mut dyn Progress,
) -> ColorResult<()> {
    let lut = contrast_trc(level)?;
    trc_map_general(pm, "contrast", progress, &lut, &lut, &lut);
    Ok(())
}

/// Add a color (and an inverted-alpha offset) to every pixel.
///
/// `red`, `green`, `blue` in [-255, 255]; `alpha` in [-127, 127] is added to
/// the inverted alpha, so positive values make the image more transparent.
/// All results are clamped.
///
/// # Errors
///
/// Returns [`crate::ColorError::OutOfRange`] naming the first offending
/// component; the image is not touched.
pub fn colorize(pm: &mut PixMut, red: i32, green: i32, blue: i32, alpha: i32) -> ColorResult<()> {
    colorize_with_progress(pm, red, green, blue, alpha, &mut NoProgress)
}

/// [`colorize`] reporting to `progress`.
pub fn colorize_with_progress(
    pm: &mut PixMut,
    red: i32,
    green: i32,
    blue: i32,
    alpha: i32,
    progress: &mut dyn Progress,
) -> ColorResult<()> {
    let lut_r = offset_trc("red", red)?;
    let lut_g = offset_trc("green", green)?;
    let lut_b = offset_trc("blue", blue)?;
    let max_alpha = ALPHA_MAX as i32;
    check_range("alpha", alpha, -max_alpha, max_alpha)?;

    run_pass(pm, "colorize", progress, |_, _, pixel| {
        let c = color::unpack(pixel);
        let a = (c.a as i32 + alpha).clamp(0, max_alpha) as u8;
        color::pack(lut_r[c.r as usize], lut_g[c.g as usize], lut_b[c.b as usize], a)
    });
    if alpha != 0 {
        pm.set_spp(4);
    }
    Ok(())
}
