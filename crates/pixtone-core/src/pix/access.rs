//! Pixel access functions
//!
//! Getting and setting individual packed pixels. Checked variants return
//! `Option`/`Result`; the `_unchecked` variants panic on out-of-range
//! coordinates and are meant for loops already bounded by the image size.

use super::{Pix, PixMut};
use crate::color;
use crate::error::{Error, Result};

#[inline]
fn index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

impl Pix {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[index(self.width(), x, y)]
    }

    /// Get RGBA values at (x, y); alpha uses the inverted 7-bit convention.
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.get_pixel(x, y).map(|p| color::unpack(p).into())
    }
}

impl PixMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[index(self.width(), x, y)]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        if y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height() as usize,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let i = index(self.width(), x, y);
        self.data_mut()[i] = val;
    }

    /// Set an RGBA pixel at (x, y); alpha uses the inverted 7-bit convention.
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        self.set_pixel(x, y, color::pack(r, g, b, a))
    }

    /// Set every pixel to `val`.
    pub fn fill(&mut self, val: u32) {
        self.data_mut().fill(val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip() {
        let mut pm = Pix::new(5, 4).unwrap().try_into_mut().unwrap();
        pm.set_rgba(4, 3, 10, 20, 30, 64).unwrap();
        let pix: Pix = pm.into();
        assert_eq!(pix.get_rgba(4, 3), Some((10, 20, 30, 64)));
        assert_eq!(pix.get_rgba(0, 0), Some((0, 0, 0, 0)));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut pm = Pix::new(2, 2).unwrap().try_into_mut().unwrap();
        assert_eq!(pm.get_pixel(2, 0), None);
        assert!(matches!(
            pm.set_pixel(0, 5, 1),
            Err(Error::IndexOutOfBounds { index: 5, len: 2 })
        ));
    }

    #[test]
    fn test_layout_is_row_major() {
        let mut pm = Pix::new(3, 2).unwrap().try_into_mut().unwrap();
        pm.set_pixel(1, 1, 7).unwrap();
        assert_eq!(pm.data()[4], 7);
    }

    #[test]
    fn test_fill() {
        let mut pm = Pix::new(3, 3).unwrap().try_into_mut().unwrap();
        pm.fill(0x00ab_cdef);
        assert!(pm.data().iter().all(|&p| p == 0x00ab_cdef));
    }
}
