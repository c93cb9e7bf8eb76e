//! Brightness-to-alpha conversion
//!
//! Turns an opaque image into a black overlay whose transparency follows
//! the brightness of the original: white becomes fully transparent, black
//! stays opaque. Pixels that already carry any transparency are left as
//! they are. The conversion is lossy and cannot be undone.

use pixtone_core::color::{self, ALPHA_MAX};
use pixtone_core::{NoProgress, PixMut, Progress, run_pass};

const OP: &str = "brightness_to_alpha";

/// Convert one packed pixel.
///
/// Opaque pixels become black with inverted alpha
/// `trunc(((r + g + b) / 765 * 255) / 255 * 127)`; translucent pixels are
/// returned unchanged.
pub fn brightness_to_alpha_pixel(pixel: u32) -> u32 {
    let c = color::unpack(pixel);
    if !c.is_opaque() {
        return pixel;
    }

    let sum = c.r as f64 + c.g as f64 + c.b as f64;
    let gray = sum / 765.0 * 255.0;
    let alpha = (gray / 255.0 * ALPHA_MAX as f64) as u8;
    color::pack(0, 0, 0, alpha)
}

/// Replace brightness with transparency across the whole image.
///
/// The image is marked as carrying alpha so encoders keep the channel.
pub fn brightness_to_alpha(pm: &mut PixMut) {
    brightness_to_alpha_with_progress(pm, &mut NoProgress);
}

/// [`brightness_to_alpha`] reporting to `progress`.
pub fn brightness_to_alpha_with_progress(pm: &mut PixMut, progress: &mut dyn Progress) {
    run_pass(pm, OP, progress, |_, _, pixel| brightness_to_alpha_pixel(pixel));
    pm.set_spp(4);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixtone_core::Pix;
    use pixtone_core::color::pack;

    #[test]
    fn test_white_becomes_transparent_black() {
        assert_eq!(brightness_to_alpha_pixel(pack(255, 255, 255, 0)), pack(0, 0, 0, 127));
    }

    #[test]
    fn test_black_stays_opaque() {
        assert_eq!(brightness_to_alpha_pixel(pack(0, 0, 0, 0)), pack(0, 0, 0, 0));
    }

    #[test]
    fn test_mid_tones_truncate() {
        assert_eq!(brightness_to_alpha_pixel(pack(128, 128, 128, 0)), pack(0, 0, 0, 63));
        assert_eq!(brightness_to_alpha_pixel(pack(100, 150, 200, 0)), pack(0, 0, 0, 74));
    }

    #[test]
    fn test_translucent_untouched() {
        for a in [1, 64, 127] {
            let p = pack(10, 20, 30, a);
            assert_eq!(brightness_to_alpha_pixel(p), p);
        }
    }

    #[test]
    fn test_image_marked_with_alpha() {
        let mut pm = Pix::new_filled(3, 3, pack(255, 255, 255, 0)).unwrap().into_mut();
        assert!(!pm.has_alpha());
        brightness_to_alpha(&mut pm);
        assert!(pm.has_alpha());
        assert!(pm.data().iter().all(|&p| p == pack(0, 0, 0, 127)));
    }
}
