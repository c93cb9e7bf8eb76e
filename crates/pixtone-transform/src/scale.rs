//! Bicubic resizing
//!
//! Every output pixel samples a 4x4 neighborhood of the source with the
//! Keys cubic convolution kernel (a = -0.5). Pixel centers are aligned, so
//! resizing to the source size is the identity. Samples outside the source
//! are clamped to the nearest edge pixel. All four channels, alpha
//! included, are interpolated independently.

use crate::rotate::new_like;
use crate::{TransformError, TransformResult};
use pixtone_core::{Pix, color};

/// Free parameter of the Keys kernel
const KEYS_A: f64 = -0.5;

/// Keys cubic convolution kernel
fn cubic_weight(t: f64) -> f64 {
    let t = t.abs();
    if t <= 1.0 {
        ((KEYS_A + 2.0) * t - (KEYS_A + 3.0)) * t * t + 1.0
    } else if t < 2.0 {
        ((KEYS_A * t - 5.0 * KEYS_A) * t + 8.0 * KEYS_A) * t - 4.0 * KEYS_A
    } else {
        0.0
    }
}

/// Source taps and weights for one output coordinate
#[derive(Debug, Clone, Copy)]
struct Taps {
    index: [u32; 4],
    weight: [f64; 4],
}

fn taps_for_axis(src_len: u32, dst_len: u32) -> Vec<Taps> {
    let ratio = src_len as f64 / dst_len as f64;
    let last = src_len as i64 - 1;
    (0..dst_len)
        .map(|o| {
            let center = (o as f64 + 0.5) * ratio - 0.5;
            let base = center.floor();
            let frac = center - base;
            let mut taps = Taps {
                index: [0; 4],
                weight: [0.0; 4],
            };
            for k in 0..4 {
                let offset = k as i64 - 1;
                taps.index[k] = (base as i64 + offset).clamp(0, last) as u32;
                taps.weight[k] = cubic_weight(frac - offset as f64);
            }
            taps
        })
        .collect()
}

/// Resolve a requested size, filling a 0 dimension from the aspect ratio
fn target_size(pix: &Pix, width: u32, height: u32) -> TransformResult<(u32, u32)> {
    let (sw, sh) = (pix.width() as f64, pix.height() as f64);
    match (width, height) {
        (0, 0) => Err(TransformError::InvalidParameters(
            "width and height cannot both be 0".to_string(),
        )),
        (0, h) => Ok((((sw * h as f64 / sh).round() as u32).max(1), h)),
        (w, 0) => Ok((w, ((sh * w as f64 / sw).round() as u32).max(1))),
        (w, h) => Ok((w, h)),
    }
}

/// Resize an image with bicubic interpolation
///
/// # Arguments
/// * `pix` - Input image
/// * `width` - Target width (0 to maintain aspect ratio)
/// * `height` - Target height (0 to maintain aspect ratio)
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if both dimensions are 0.
pub fn resize(pix: &Pix, width: u32, height: u32) -> TransformResult<Pix> {
    let (dw, dh) = target_size(pix, width, height)?;
    let x_taps = taps_for_axis(pix.width(), dw);
    let y_taps = taps_for_axis(pix.height(), dh);
    let mut out_mut = new_like(pix, dw, dh)?;

    for (oy, ty) in y_taps.iter().enumerate() {
        for (ox, tx) in x_taps.iter().enumerate() {
            let mut acc = [0.0f64; 4];
            for j in 0..4 {
                let wy = ty.weight[j];
                if wy == 0.0 {
                    continue;
                }
                for i in 0..4 {
                    let w = wy * tx.weight[i];
                    if w == 0.0 {
                        continue;
                    }
                    let c = color::unpack(pix.get_pixel_unchecked(tx.index[i], ty.index[j]));
                    acc[0] += w * c.r as f64;
                    acc[1] += w * c.g as f64;
                    acc[2] += w * c.b as f64;
                    acc[3] += w * c.a as f64;
                }
            }
            let ch = |v: f64, max: u8| v.round().clamp(0.0, max as f64) as u8;
            let pixel = color::pack(
                ch(acc[0], 255),
                ch(acc[1], 255),
                ch(acc[2], 255),
                ch(acc[3], color::ALPHA_MAX),
            );
            out_mut.set_pixel_unchecked(ox as u32, oy as u32, pixel);
        }
    }

    Ok(out_mut.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixtone_core::color::pack;

    #[test]
    fn test_kernel() {
        assert_eq!(cubic_weight(0.0), 1.0);
        assert_eq!(cubic_weight(1.0), 0.0);
        assert_eq!(cubic_weight(-2.0), 0.0);
        assert_eq!(cubic_weight(3.5), 0.0);
        // Weights of any phase sum to one
        for frac in [0.0, 0.1, 0.25, 0.5, 0.9] {
            let sum: f64 = (-1..3).map(|k| cubic_weight(frac - k as f64)).sum();
            assert!((sum - 1.0).abs() < 1e-12, "frac = {frac}");
        }
    }

    #[test]
    fn test_same_size_is_identity() {
        let pix = Pix::from_fn(7, 5, |x, y| pack(x as u8 * 30, y as u8 * 40, 99, (x + y) as u8)).unwrap();
        let out = resize(&pix, 7, 5).unwrap();
        assert!(pix.equals(&out));
    }

    #[test]
    fn test_flat_image_stays_flat() {
        let p = pack(12, 200, 77, 40);
        let pix = Pix::new_filled(6, 4, p).unwrap();
        for (w, h) in [(13, 9), (3, 2), (1, 1)] {
            let out = resize(&pix, w, h).unwrap();
            assert_eq!((out.width(), out.height()), (w, h));
            assert!(out.data().iter().all(|&q| q == p));
        }
    }

    #[test]
    fn test_aspect_ratio() {
        let pix = Pix::new(200, 100).unwrap();
        let out = resize(&pix, 50, 0).unwrap();
        assert_eq!((out.width(), out.height()), (50, 25));
        let out = resize(&pix, 0, 10).unwrap();
        assert_eq!((out.width(), out.height()), (20, 10));
        let out = resize(&Pix::new(1, 100).unwrap(), 0, 10).unwrap();
        assert_eq!(out.width(), 1);
    }

    #[test]
    fn test_both_zero_rejected() {
        let pix = Pix::new(4, 4).unwrap();
        assert!(matches!(
            resize(&pix, 0, 0),
            Err(TransformError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_upscale_overshoot_is_clamped() {
        // A hard edge makes the negative lobes ring past the channel range
        let pix = Pix::from_fn(4, 1, |x, _| if x < 2 { pack(0, 0, 0, 0) } else { pack(255, 255, 255, 0) })
            .unwrap();
        let out = resize(&pix, 16, 1).unwrap();
        let first = color::unpack(out.get_pixel(0, 0).unwrap());
        let last = color::unpack(out.get_pixel(15, 0).unwrap());
        assert_eq!(first.r, 0);
        assert_eq!(last.r, 255);
    }
}
