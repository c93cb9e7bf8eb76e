//! Chained image editing
//!
//! [`Editor`] owns one image and applies operations by value, so a whole
//! load-adjust-save pipeline reads as one expression. Fallible steps return
//! [`EditorResult`]; every crate error converts into [`EditorError`].

use pixtone_color::{ColorError, DecolorizeWeights};
use pixtone_core::{ImageFormat, LogProgress, NoProgress, Pix, Progress};
use pixtone_io::{IoError, JpegOptions};
use pixtone_transform::{FlipMode, TransformError};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

/// Errors from any stage of an editing pipeline
#[derive(Debug, Error)]
pub enum EditorError {
    /// Core library error
    #[error(transparent)]
    Core(#[from] pixtone_core::Error),

    /// Color adjustment error
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Geometry error
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Load or save error
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;

/// An image plus the settings used to process it
#[derive(Debug, Clone)]
pub struct Editor {
    pix: Pix,
    verbose: bool,
}

impl Editor {
    /// Load an image file; the format is detected from its content.
    pub fn open<P: AsRef<Path>>(path: P) -> EditorResult<Self> {
        Ok(Self::from_pix(pixtone_io::read_image(path)?))
    }

    /// Decode an image held in memory.
    pub fn from_memory(data: &[u8]) -> EditorResult<Self> {
        Ok(Self::from_pix(pixtone_io::read_image_mem(data)?))
    }

    /// Wrap an existing image.
    pub fn from_pix(pix: Pix) -> Self {
        Self {
            pix,
            verbose: false,
        }
    }

    /// Report each pass through the `log` facade.
    pub fn verbose(mut self, on: bool) -> Self {
        self.verbose = on;
        self
    }

    /// Current image width.
    pub fn width(&self) -> u32 {
        self.pix.width()
    }

    /// Current image height.
    pub fn height(&self) -> u32 {
        self.pix.height()
    }

    /// Borrow the current image.
    pub fn pix(&self) -> &Pix {
        &self.pix
    }

    /// Finish editing and take the image.
    pub fn into_pix(self) -> Pix {
        self.pix
    }

    fn progress(&self) -> Box<dyn Progress> {
        if self.verbose {
            Box::new(LogProgress)
        } else {
            Box::new(NoProgress)
        }
    }

    /// Run an in-place adjustment on the owned raster.
    fn adjust<F>(mut self, f: F) -> EditorResult<Self>
    where
        F: FnOnce(&mut pixtone_core::PixMut, &mut dyn Progress) -> Result<(), ColorError>,
    {
        let mut progress = self.progress();
        let mut pm = self.pix.into_mut();
        let result = f(&mut pm, progress.as_mut());
        self.pix = pm.into();
        result?;
        Ok(self)
    }

    /// Replace the image with a transformed copy.
    fn reshape<F>(mut self, f: F) -> EditorResult<Self>
    where
        F: FnOnce(&Pix) -> Result<Pix, TransformError>,
    {
        self.pix = f(&self.pix)?;
        Ok(self)
    }

    /// Rotate hue by `degrees`; any value is accepted.
    pub fn hue_shift(self, degrees: i32) -> Self {
        let mut progress = self.progress();
        let mut pm = self.pix.into_mut();
        pixtone_color::hue_shift_with_progress(&mut pm, degrees, progress.as_mut());
        Self {
            pix: pm.into(),
            verbose: self.verbose,
        }
    }

    /// Adjust saturation by `amount` in [-100, 100].
    pub fn saturation(self, amount: i32) -> EditorResult<Self> {
        self.adjust(|pm, p| pixtone_color::saturation_with_progress(pm, amount, p))
    }

    /// Convert to grayscale with per-color weights.
    pub fn decolorize(self, weights: &DecolorizeWeights) -> EditorResult<Self> {
        self.adjust(|pm, p| pixtone_color::decolorize_with_progress(pm, weights, p))
    }

    /// Replace brightness with transparency.
    pub fn brightness_to_alpha(self) -> Self {
        let mut progress = self.progress();
        let mut pm = self.pix.into_mut();
        pixtone_color::brightness_to_alpha_with_progress(&mut pm, progress.as_mut());
        Self {
            pix: pm.into(),
            verbose: self.verbose,
        }
    }

    /// Shift every channel by `level` in [-255, 255].
    pub fn brightness(self, level: i32) -> EditorResult<Self> {
        self.adjust(|pm, p| pixtone_color::brightness_with_progress(pm, level, p))
    }

    /// Change contrast by `level` in [-100, 100].
    pub fn contrast(self, level: i32) -> EditorResult<Self> {
        self.adjust(|pm, p| pixtone_color::contrast_with_progress(pm, level, p))
    }

    /// Add a color and an inverted-alpha offset.
    pub fn colorize(self, red: i32, green: i32, blue: i32, alpha: i32) -> EditorResult<Self> {
        self.adjust(|pm, p| pixtone_color::colorize_with_progress(pm, red, green, blue, alpha, p))
    }

    /// Mirror the image.
    pub fn flip(self, mode: FlipMode) -> EditorResult<Self> {
        self.reshape(|pix| pixtone_transform::flip(pix, mode))
    }

    /// Rotate by a quarter turn.
    pub fn rotate_90(self, clockwise: bool) -> EditorResult<Self> {
        self.reshape(|pix| pixtone_transform::rotate_90(pix, clockwise))
    }

    /// Resize with bicubic interpolation; 0 in one dimension keeps aspect.
    pub fn resize(self, width: u32, height: u32) -> EditorResult<Self> {
        self.reshape(|pix| pixtone_transform::resize(pix, width, height))
    }

    /// Repeat the image over a `width` x `height` canvas.
    pub fn tile(self, width: u32, height: u32) -> EditorResult<Self> {
        self.reshape(|pix| pixtone_transform::tile(pix, width, height))
    }

    /// Encode to memory in `format`.
    pub fn encode(&self, format: ImageFormat) -> EditorResult<Vec<u8>> {
        Ok(pixtone_io::write_image_mem(&self.pix, format)?)
    }

    /// Save to `path`, choosing the format from its extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> EditorResult<()> {
        let format = pixtone_io::format_from_path(&path)?;
        pixtone_io::write_image(&self.pix, path, format)?;
        Ok(())
    }

    /// Save as JPEG with explicit options.
    pub fn save_jpeg<P: AsRef<Path>>(&self, path: P, options: &JpegOptions) -> EditorResult<()> {
        let file = File::create(path).map_err(IoError::from)?;
        pixtone_io::write_jpeg(&self.pix, BufWriter::new(file), options)?;
        Ok(())
    }
}
