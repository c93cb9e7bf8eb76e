//! Hue rotation
//!
//! Rotates the hue of every pixel by a whole number of degrees, keeping
//! saturation, lightness and alpha.

use pixtone_core::color;
use pixtone_core::{NoProgress, PixMut, Progress, run_pass};

const OP: &str = "hue_shift";

/// Reduce a degree offset into [0, 360).
///
/// Any `i32` is accepted: `-90` becomes `270`, `725` becomes `5`.
pub fn normalize_degrees(degrees: i32) -> u32 {
    let rem = degrees % 360;
    if rem < 0 {
        360 - rem.unsigned_abs()
    } else {
        rem as u32
    }
}

/// Rotate the hue of one packed pixel by `shift` turns, `0.0 <= shift < 1.0`.
///
/// The hue wraps at most once since both the hue and the shift are below
/// one full turn. Achromatic pixels keep their gray level.
pub fn hue_shift_pixel(pixel: u32, shift: f64) -> u32 {
    let mut hsla = color::get_hsla(pixel);
    hsla.h += shift;
    if hsla.h > 1.0 {
        hsla.h -= 1.0;
    }
    hsla.to_pixel()
}

/// Rotate the hue of every pixel by `degrees`.
///
/// A rotation that reduces to 0 (including multiples of 360) leaves the
/// image byte-for-byte unchanged; no pass is run at all.
///
/// # Example
///
/// ```
/// use pixtone_color::hue_shift;
/// use pixtone_core::{Pix, color};
///
/// let mut pm = Pix::new_filled(1, 1, color::pack(255, 0, 0, 0)).unwrap().into_mut();
/// hue_shift(&mut pm, 120);
/// assert_eq!(pm.get_pixel(0, 0), Some(color::pack(0, 255, 0, 0)));
/// ```
pub fn hue_shift(pm: &mut PixMut, degrees: i32) {
    hue_shift_with_progress(pm, degrees, &mut NoProgress);
}

/// [`hue_shift`] reporting to `progress`.
pub fn hue_shift_with_progress(pm: &mut PixMut, degrees: i32, progress: &mut dyn Progress) {
    let reduced = normalize_degrees(degrees);
    if reduced == 0 {
        progress.skip(OP);
        return;
    }

    let shift = reduced as f64 / 360.0;
    run_pass(pm, OP, progress, |_, _, pixel| hue_shift_pixel(pixel, shift));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixtone_core::Pix;
    use pixtone_core::color::pack;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0), 0);
        assert_eq!(normalize_degrees(360), 0);
        assert_eq!(normalize_degrees(-360), 0);
        assert_eq!(normalize_degrees(-90), 270);
        assert_eq!(normalize_degrees(725), 5);
        assert_eq!(normalize_degrees(-725), 355);
        assert_eq!(normalize_degrees(i32::MIN), 232);
    }

    #[test]
    fn test_hue_shift_pixel_primaries() {
        let third = 120.0 / 360.0;
        assert_eq!(hue_shift_pixel(pack(255, 0, 0, 0), third), pack(0, 255, 0, 0));
        assert_eq!(hue_shift_pixel(pack(0, 255, 0, 0), third), pack(0, 0, 255, 0));
        assert_eq!(hue_shift_pixel(pack(0, 0, 255, 0), third), pack(255, 0, 0, 0));
    }

    #[test]
    fn test_hue_shift_pixel_keeps_alpha_and_gray() {
        assert_eq!(hue_shift_pixel(pack(255, 255, 255, 90), 0.5), pack(255, 255, 255, 90));
        assert_eq!(hue_shift_pixel(pack(77, 77, 77, 3), 0.25), pack(77, 77, 77, 3));
        assert_eq!(color::alpha(hue_shift_pixel(pack(255, 0, 0, 64), 0.5)), 64);
    }

    #[derive(Default)]
    struct Count {
        skips: usize,
        advances: usize,
    }

    impl Progress for Count {
        fn skip(&mut self, _op: &str) {
            self.skips += 1;
        }
        fn advance(&mut self, _percent: u32) {
            self.advances += 1;
        }
    }

    #[test]
    fn test_zero_shift_skips_pass() {
        let pix = Pix::from_fn(5, 5, |x, y| pack(x as u8 * 50, y as u8 * 50, 17, 0)).unwrap();
        for degrees in [0, 360, -720] {
            let mut pm = pix.to_mut();
            let mut count = Count::default();
            hue_shift_with_progress(&mut pm, degrees, &mut count);
            assert_eq!(count.skips, 1);
            assert_eq!(count.advances, 0);
            assert!(pix.equals(&pm.into()));
        }
    }

    #[test]
    fn test_negative_equals_complement() {
        let pix = Pix::from_fn(8, 8, |x, y| pack(x as u8 * 30, y as u8 * 30, 200, 0)).unwrap();
        let mut a = pix.to_mut();
        let mut b = pix.to_mut();
        hue_shift(&mut a, -90);
        hue_shift(&mut b, 270);
        assert_eq!(a.data(), b.data());
    }
}
