//! Orthogonal rotations and flips
//!
//! All operations are exact pixel permutations: no interpolation, alpha and
//! metadata carried over unchanged.

use crate::TransformResult;
use pixtone_core::{Pix, PixMut};

/// Mirror axis for [`flip`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipMode {
    /// Left-right mirror
    Horizontal,
    /// Top-bottom mirror
    Vertical,
    /// Both axes, same as a 180 degree rotation
    Both,
}

/// Flip an image along one or both axes
pub fn flip(pix: &Pix, mode: FlipMode) -> TransformResult<Pix> {
    match mode {
        FlipMode::Horizontal => flip_lr(pix),
        FlipMode::Vertical => flip_tb(pix),
        FlipMode::Both => rotate_180(pix),
    }
}

/// Rotate an image by 90-degree increments
///
/// `quads` is the number of clockwise quarter turns; any value is reduced
/// modulo 4.
pub fn rotate_orth(pix: &Pix, quads: u32) -> TransformResult<Pix> {
    match quads % 4 {
        0 => Ok(pix.deep_clone()),
        1 => rotate_90(pix, true),
        2 => rotate_180(pix),
        3 => rotate_90(pix, false),
        _ => unreachable!(),
    }
}

/// Rotate an image 90 degrees
///
/// # Arguments
/// * `pix` - Input image
/// * `clockwise` - If true, rotate clockwise; otherwise counterclockwise
pub fn rotate_90(pix: &Pix, clockwise: bool) -> TransformResult<Pix> {
    let w = pix.width();
    let h = pix.height();

    // Output dimensions are swapped
    let mut out_mut = new_like(pix, h, w)?;

    for y in 0..h {
        for x in 0..w {
            let val = pix.get_pixel_unchecked(x, y);
            let (nx, ny) = if clockwise {
                (h - 1 - y, x)
            } else {
                (y, w - 1 - x)
            };
            out_mut.set_pixel_unchecked(nx, ny, val);
        }
    }

    Ok(out_mut.into())
}

/// Rotate an image 180 degrees
pub fn rotate_180(pix: &Pix) -> TransformResult<Pix> {
    let mut out_mut = pix.to_mut();
    // Row-major storage: reversing the buffer reverses both axes
    out_mut.data_mut().reverse();
    Ok(out_mut.into())
}

/// Flip an image left-right (horizontal mirror)
pub fn flip_lr(pix: &Pix) -> TransformResult<Pix> {
    let mut out_mut = pix.to_mut();
    let w = pix.width() as usize;
    for row in out_mut.data_mut().chunks_exact_mut(w) {
        row.reverse();
    }
    Ok(out_mut.into())
}

/// Flip an image top-bottom (vertical mirror)
pub fn flip_tb(pix: &Pix) -> TransformResult<Pix> {
    let w = pix.width();
    let h = pix.height();
    let mut out_mut = new_like(pix, w, h)?;

    for y in 0..h {
        let ny = h - 1 - y;
        for x in 0..w {
            out_mut.set_pixel_unchecked(x, ny, pix.get_pixel_unchecked(x, y));
        }
    }

    Ok(out_mut.into())
}

/// Blank output image carrying `pix`'s metadata
pub(crate) fn new_like(pix: &Pix, width: u32, height: u32) -> TransformResult<PixMut> {
    let mut out = Pix::new(width, height)?.into_mut();
    out.copy_metadata_from(pix);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixtone_core::color::pack;

    fn numbered(w: u32, h: u32) -> Pix {
        Pix::from_fn(w, h, |x, y| y * w + x).unwrap()
    }

    #[test]
    fn test_rotate_90_cw() {
        // 0 1 2      3 0
        // 3 4 5  ->  4 1
        //            5 2
        let pix = numbered(3, 2);
        let r = rotate_90(&pix, true).unwrap();
        assert_eq!((r.width(), r.height()), (2, 3));
        assert_eq!(r.data(), &[3, 0, 4, 1, 5, 2]);
    }

    #[test]
    fn test_rotate_90_ccw() {
        let pix = numbered(3, 2);
        let r = rotate_90(&pix, false).unwrap();
        assert_eq!(r.data(), &[2, 5, 1, 4, 0, 3]);
    }

    #[test]
    fn test_rotate_cw_then_ccw() {
        let pix = numbered(5, 3);
        let r = rotate_90(&rotate_90(&pix, true).unwrap(), false).unwrap();
        assert!(pix.equals(&r));
    }

    #[test]
    fn test_flips() {
        let pix = numbered(3, 2);
        assert_eq!(flip(&pix, FlipMode::Horizontal).unwrap().data(), &[2, 1, 0, 5, 4, 3]);
        assert_eq!(flip(&pix, FlipMode::Vertical).unwrap().data(), &[3, 4, 5, 0, 1, 2]);
        assert_eq!(flip(&pix, FlipMode::Both).unwrap().data(), &[5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_rotate_orth_reduces() {
        let pix = numbered(4, 3);
        assert!(rotate_orth(&pix, 4).unwrap().equals(&pix));
        assert!(rotate_orth(&pix, 5).unwrap().equals(&rotate_90(&pix, true).unwrap()));
        assert!(rotate_orth(&pix, 3).unwrap().equals(&rotate_90(&pix, false).unwrap()));
    }

    #[test]
    fn test_metadata_kept() {
        let mut pm = Pix::new_filled(2, 3, pack(1, 2, 3, 50)).unwrap().into_mut();
        pm.set_spp(4);
        let pix: Pix = pm.into();
        assert!(rotate_90(&pix, true).unwrap().has_alpha());
        assert!(flip_tb(&pix).unwrap().has_alpha());
        assert!(flip_lr(&pix).unwrap().has_alpha());
    }
}
