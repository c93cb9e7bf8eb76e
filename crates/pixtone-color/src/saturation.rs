//! Saturation adjustment
//!
//! Two curves, chosen by the sign of the amount:
//!
//! - `amount >= 0`: `s += (amount / 20) * (255 - s) * (s / 255)` on a 0..255
//!   scale. The push toward full saturation shrinks as `s` approaches 0, so
//!   nearly gray pixels barely pick up color.
//! - `amount < 0`: `s += (amount / 100) * s`, a linear fade toward gray.
//!
//! Unlike [`crate::hue_shift`], an amount of 0 still runs the full pass,
//! and the HSL round trip may move channels by one level.

use crate::error::{ColorResult, check_range};
use pixtone_core::color;
use pixtone_core::{NoProgress, PixMut, Progress, run_pass};

const OP: &str = "saturation";

/// Smallest accepted saturation amount.
pub const SATURATION_MIN: i32 = -100;
/// Largest accepted saturation amount.
pub const SATURATION_MAX: i32 = 100;

/// Apply the saturation curve to a normalized saturation `s`.
///
/// `amount` is assumed to be validated; the result is clamped to [0, 1].
pub fn saturation_curve(s: f64, amount: i32) -> f64 {
    let s255 = s * 255.0;
    let adjusted = if amount >= 0 {
        let scale = amount as f64 / 20.0;
        let gray_factor = s255 / 255.0;
        let interval = 255.0 - s255;
        s255 + scale * interval * gray_factor
    } else {
        let scale = amount as f64 / 100.0;
        s255 + scale * s255
    };
    (adjusted / 255.0).clamp(0.0, 1.0)
}

/// Adjust the saturation of one packed pixel, keeping hue, lightness and alpha.
pub fn saturate_pixel(pixel: u32, amount: i32) -> u32 {
    let mut hsla = color::get_hsla(pixel);
    hsla.s = saturation_curve(hsla.s, amount);
    hsla.to_pixel()
}

/// Adjust the saturation of every pixel.
///
/// # Errors
///
/// Returns [`crate::ColorError::OutOfRange`] if `amount` is outside
/// [-100, 100]; the image is not touched.
pub fn saturation(pm: &mut PixMut, amount: i32) -> ColorResult<()> {
    saturation_with_progress(pm, amount, &mut NoProgress)
}

/// [`saturation`] reporting to `progress`.
pub fn saturation_with_progress(
    pm: &mut PixMut,
    amount: i32,
    progress: &mut dyn Progress,
) -> ColorResult<()> {
    check_range("saturation", amount, SATURATION_MIN, SATURATION_MAX)?;
    run_pass(pm, OP, progress, |_, _, pixel| saturate_pixel(pixel, amount));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorError;
    use pixtone_core::Pix;
    use pixtone_core::color::pack;

    #[test]
    fn test_curve_fixed_points() {
        // Fully gray and fully saturated stay put on the positive branch
        assert_eq!(saturation_curve(0.0, 100), 0.0);
        assert_eq!(saturation_curve(1.0, 100), 1.0);
        assert!((saturation_curve(0.4, 0) - 0.4).abs() < 1e-12);
        assert_eq!(saturation_curve(0.8, -100), 0.0);
    }

    #[test]
    fn test_curve_gray_resistance() {
        let near_gray = saturation_curve(0.02, 100) - 0.02;
        let mid = saturation_curve(0.5, 100) - 0.5;
        assert!(near_gray < mid, "{near_gray} >= {mid}");
    }

    #[test]
    fn test_curve_monotonic_in_amount() {
        for s in [0.0, 0.05, 0.3, 0.5, 0.77, 1.0] {
            let mut prev = saturation_curve(s, 0);
            for amount in 1..=100 {
                let next = saturation_curve(s, amount);
                assert!(next >= prev, "s={s} amount={amount}");
                prev = next;
            }
            let mut prev = saturation_curve(s, 0);
            for amount in (-100..0).rev() {
                let next = saturation_curve(s, amount);
                assert!(next <= prev, "s={s} amount={amount}");
                prev = next;
            }
        }
    }

    #[test]
    fn test_saturate_pixel_examples() {
        assert_eq!(saturate_pixel(pack(200, 100, 50, 0), 100), pack(200, 66, 0, 0));
        assert_eq!(saturate_pixel(pack(200, 100, 50, 9), -100), pack(200, 200, 200, 9));
        assert_eq!(saturate_pixel(pack(120, 130, 125, 0), 50), pack(96, 130, 113, 0));
    }

    #[test]
    fn test_out_of_range_leaves_image() {
        let pix = Pix::from_fn(4, 4, |x, y| pack(x as u8 * 60, 10, y as u8 * 60, 0)).unwrap();
        let mut pm = pix.to_mut();
        for amount in [101, -101, i32::MAX] {
            assert!(matches!(
                saturation(&mut pm, amount),
                Err(ColorError::OutOfRange {
                    name: "saturation",
                    ..
                })
            ));
        }
        assert_eq!(pm.data(), pix.data());
    }
}
