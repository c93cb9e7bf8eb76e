//! Tiling

use crate::TransformResult;
use crate::rotate::new_like;
use pixtone_core::Pix;

/// Fill a new `width` x `height` canvas by repeating `pix` from the origin.
///
/// Tiles that cross the right or bottom edge are cut off. The result keeps
/// the source metadata.
pub fn tile(pix: &Pix, width: u32, height: u32) -> TransformResult<Pix> {
    let (sw, sh) = (pix.width(), pix.height());
    let mut out_mut = new_like(pix, width, height)?;

    for y in 0..height {
        let sy = y % sh;
        for x in 0..width {
            out_mut.set_pixel_unchecked(x, y, pix.get_pixel_unchecked(x % sw, sy));
        }
    }

    Ok(out_mut.into())
}
