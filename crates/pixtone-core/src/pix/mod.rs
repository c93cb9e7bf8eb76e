//! PIX - The main image container
//!
//! `Pix` holds a truecolor raster of packed 32-bit pixels. Every pixel is
//! `alpha << 24 | red << 16 | green << 8 | blue`, where alpha is a 7-bit
//! inverted opacity (0 = opaque, 127 = fully transparent). See
//! [`crate::color`] for the codec.
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `PixMut` via [`Pix::try_into_mut`]
//! or [`Pix::to_mut`], then convert back with `Into<Pix>`.
//! All color adjustments take `&mut PixMut`, so exclusive access to the
//! raster for the duration of a pass is enforced at compile time.

mod access;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format (image was built in memory)
    #[default]
    Unknown,
    /// PNG format
    Png,
    /// JFIF JPEG format
    Jpeg,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    /// Guess the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Self::Png,
            "jpg" | "jpeg" | "jpe" => Self::Jpeg,
            _ => Self::Unknown,
        }
    }
}

/// Internal PIX data
#[derive(Debug, Clone)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples per pixel (3 for RGB, 4 when the alpha channel is meaningful)
    spp: u32,
    /// Input file format
    informat: ImageFormat,
    /// Packed pixels, row-major
    data: Vec<u32>,
}

impl PixData {
    fn new(width: u32, height: u32, fill: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })?;

        Ok(PixData {
            width,
            height,
            spp: 3,
            informat: ImageFormat::Unknown,
            data: vec![fill; len],
        })
    }
}

/// PIX - Main image container
///
/// # Examples
///
/// ```
/// use pixtone_core::{Pix, color};
///
/// // A new image is opaque black
/// let pix = Pix::new(640, 480).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.get_pixel(0, 0), Some(color::pack(0, 0, 0, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new opaque black image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, 0)
    }

    /// Create a new image with every pixel set to `pixel`.
    pub fn new_filled(width: u32, height: u32, pixel: u32) -> Result<Self> {
        Ok(Pix {
            inner: Arc::new(PixData::new(width, height, pixel)?),
        })
    }

    /// Create a new image by evaluating `f(x, y)` for every coordinate.
    ///
    /// ```
    /// use pixtone_core::{Pix, color};
    ///
    /// let pix = Pix::from_fn(4, 2, |x, _| color::pack(x as u8 * 60, 0, 0, 0)).unwrap();
    /// assert_eq!(pix.get_rgba(3, 1), Some((180, 0, 0, 0)));
    /// ```
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> u32,
    {
        let mut data = PixData::new(width, height, 0)?;
        for y in 0..height {
            let row = y as usize * width as usize;
            for x in 0..width {
                data.data[row + x as usize] = f(x, y);
            }
        }
        Ok(Pix {
            inner: Arc::new(data),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the samples per pixel.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    /// Whether the alpha channel carries information worth keeping on output.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.inner.spp == 4
    }

    /// Get the input file format.
    #[inline]
    pub fn informat(&self) -> ImageFormat {
        self.inner.informat
    }

    /// Get raw access to the packed pixels (row-major).
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of references to the underlying raster.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check whether two images have the same dimensions.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }

    /// Check whether two images hold identical pixels (alpha included).
    pub fn equals(&self, other: &Pix) -> bool {
        self.sizes_equal(other) && self.data() == other.data()
    }

    /// Create a deep copy with its own raster.
    pub fn deep_clone(&self) -> Self {
        Pix {
            inner: Arc::new(self.inner.as_ref().clone()),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Create a mutable copy of this PIX.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: self.inner.as_ref().clone(),
        }
    }

    /// Take mutable ownership, copying only when the raster is shared.
    pub fn into_mut(self) -> PixMut {
        match self.try_into_mut() {
            Ok(pm) => pm,
            Err(shared) => shared.to_mut(),
        }
    }
}

/// Mutable PIX
///
/// Allows modification of image data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get samples per pixel.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    /// Whether the alpha channel carries information worth keeping on output.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.inner.spp == 4
    }

    /// Get the input file format.
    #[inline]
    pub fn informat(&self) -> ImageFormat {
        self.inner.informat
    }

    /// Set samples per pixel (3 or 4).
    pub fn set_spp(&mut self, spp: u32) {
        debug_assert!(spp == 3 || spp == 4, "spp must be 3 or 4, got {spp}");
        self.inner.spp = spp;
    }

    /// Set the input file format.
    pub fn set_informat(&mut self, format: ImageFormat) {
        self.inner.informat = format;
    }

    /// Copy spp and input format from another image.
    pub fn copy_metadata_from(&mut self, src: &Pix) {
        self.inner.spp = src.spp();
        self.inner.informat = src.informat();
    }

    /// Get raw access to the packed pixels (row-major).
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the packed pixels (row-major).
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }
}

impl From<PixMut> for Pix {
    fn from(pm: PixMut) -> Self {
        Pix {
            inner: Arc::new(pm.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            Pix::new(0, 10),
            Err(Error::InvalidDimension {
                width: 0,
                height: 10
            })
        ));
        assert!(Pix::new(10, 0).is_err());
    }

    #[test]
    fn test_new_is_opaque_black() {
        let pix = Pix::new(3, 2).unwrap();
        assert!(pix.data().iter().all(|&p| p == 0));
        assert_eq!(pix.spp(), 3);
        assert!(!pix.has_alpha());
        assert_eq!(pix.informat(), ImageFormat::Unknown);
    }

    #[test]
    fn test_try_into_mut_shared_fails() {
        let pix = Pix::new(2, 2).unwrap();
        let other = pix.clone();
        assert_eq!(pix.ref_count(), 2);
        let pix = pix.try_into_mut().unwrap_err();
        drop(other);
        assert!(pix.try_into_mut().is_ok());
    }

    #[test]
    fn test_into_mut_copies_shared_raster() {
        let pix = Pix::new_filled(2, 2, 0x00ff_0000).unwrap();
        let keep = pix.clone();
        let mut pm = pix.into_mut();
        pm.data_mut()[0] = 0;
        assert_eq!(keep.data()[0], 0x00ff_0000);
    }

    #[test]
    fn test_deep_clone_equals() {
        let pix = Pix::from_fn(4, 3, |x, y| x * 10 + y).unwrap();
        let copy = pix.deep_clone();
        assert!(pix.equals(&copy));
        assert_eq!(copy.ref_count(), 1);
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(ImageFormat::Png.extension(), "png");
        assert_eq!(ImageFormat::from_extension("JPEG"), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_extension("bmp"), ImageFormat::Unknown);
    }
}
