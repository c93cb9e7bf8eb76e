//! pixtone-io - Image I/O for pixtone
//!
//! Reads PNG and JPEG into a [`Pix`] and writes a [`Pix`] back out.
//! The format of an input is detected from its magic bytes, never from the
//! file name. Each format sits behind a Cargo feature (`png-format`,
//! `jpeg`), both enabled by default; a disabled format reports
//! [`IoError::UnsupportedFormat`].

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes, format_from_path};
#[cfg(feature = "jpeg")]
pub use jpeg::{JpegOptions, flatten_onto_white, read_jpeg, write_jpeg};
#[cfg(feature = "png-format")]
pub use self::png::{read_png, write_png};
pub use pixtone_core::ImageFormat;

use pixtone_core::Pix;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file path
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let data = std::fs::read(path)?;
    read_image_mem(&data)
}

/// Read an image from memory
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    let format = detect_format_from_bytes(data)?;

    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => self::png::read_png(Cursor::new(data)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(Cursor::new(data)),
        _ => Err(IoError::UnsupportedFormat(format!("{:?}", format))),
    }
}

/// Write an image to a file path
///
/// JPEG output uses [`JpegOptions::default`].
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_format(pix, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Write an image to memory
pub fn write_image_mem(pix: &Pix, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_format(pix, &mut buffer, format)?;
    Ok(buffer)
}

/// Write an image in a specific format to a writer
pub fn write_image_format<W: Write>(pix: &Pix, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => self::png::write_png(pix, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(pix, writer, &JpegOptions::default()),
        _ => {
            let _ = (pix, writer);
            Err(IoError::UnsupportedFormat(format!("{:?}", format)))
        }
    }
}
