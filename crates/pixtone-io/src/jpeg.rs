//! JPEG image format support
//!
//! Reads JPEG images with `jpeg-decoder` and writes baseline JFIF with
//! `jpeg-encoder`. JPEG has no alpha channel: on export every pixel is
//! first flattened onto an opaque white background.

use crate::{IoError, IoResult};
use jpeg_decoder::PixelFormat;
use jpeg_encoder::{ColorType, Encoder};
use pixtone_core::{ImageFormat, Pix, color};
use std::io::{BufReader, Read, Write};

/// Options for JPEG writing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegOptions {
    /// Encoder quality, 1 (smallest) to 100 (best)
    pub quality: u8,
}

impl Default for JpegOptions {
    fn default() -> Self {
        Self { quality: 75 }
    }
}

impl JpegOptions {
    /// Options with the given quality.
    pub fn with_quality(quality: u8) -> Self {
        Self { quality }
    }
}

/// Composite one pixel over opaque white.
///
/// With opacity `o = (127 - a) / 127`, each channel becomes
/// `round(c * o + 255 * (1 - o))`. Opaque pixels are unchanged and fully
/// transparent ones become white.
pub fn flatten_onto_white(pixel: u32) -> (u8, u8, u8) {
    let c = color::unpack(pixel);
    let max = color::ALPHA_MAX as f64;
    let opacity = (max - c.a as f64) / max;
    let blend = |v: u8| (v as f64 * opacity + 255.0 * (1.0 - opacity)).round() as u8;
    (blend(c.r), blend(c.g), blend(c.b))
}

/// Read a JPEG image from a reader.
///
/// Grayscale, 16-bit grayscale and CMYK sources are converted to RGB; the
/// result always has `spp == 3`.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Pix> {
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(reader));
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG info".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let samples = match info.pixel_format {
        PixelFormat::L8 => 1,
        PixelFormat::L16 => 2,
        PixelFormat::RGB24 => 3,
        PixelFormat::CMYK32 => 4,
    };
    let expected = width as usize * height as usize * samples;
    if pixels.len() < expected {
        return Err(IoError::InvalidData(format!(
            "JPEG data too short: {} bytes, expected {}",
            pixels.len(),
            expected
        )));
    }

    let mut pix_mut = Pix::new(width, height)?.into_mut();
    pix_mut.set_informat(ImageFormat::Jpeg);

    for y in 0..height {
        for x in 0..width {
            let idx = (y as usize * width as usize + x as usize) * samples;
            let px = &pixels[idx..idx + samples];
            let (r, g, b) = match info.pixel_format {
                PixelFormat::L8 => (px[0], px[0], px[0]),
                // High byte first
                PixelFormat::L16 => (px[0], px[0], px[0]),
                PixelFormat::RGB24 => (px[0], px[1], px[2]),
                PixelFormat::CMYK32 => cmyk_to_rgb(px[0], px[1], px[2], px[3]),
            };
            pix_mut.set_pixel_unchecked(x, y, color::pack(r, g, b, color::ALPHA_OPAQUE));
        }
    }

    Ok(pix_mut.into())
}

fn cmyk_to_rgb(c: u8, m: u8, y: u8, k: u8) -> (u8, u8, u8) {
    let k = 1.0 - k as f32 / 255.0;
    let ch = |v: u8| ((1.0 - v as f32 / 255.0) * k * 255.0) as u8;
    (ch(c), ch(m), ch(y))
}

/// Write a JPEG image, flattening alpha onto white first.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if the quality is outside 1..=100 or
/// either dimension exceeds 65535, the JPEG limit.
pub fn write_jpeg<W: Write>(pix: &Pix, writer: W, options: &JpegOptions) -> IoResult<()> {
    if !(1..=100).contains(&options.quality) {
        return Err(IoError::EncodeError(format!(
            "JPEG quality {} not in 1..=100",
            options.quality
        )));
    }

    let width = pix.width();
    let height = pix.height();
    let (w16, h16) = match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(IoError::EncodeError(format!(
                "image {}x{} exceeds the JPEG size limit",
                width, height
            )));
        }
    };

    let mut data = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = flatten_onto_white(pix.get_pixel_unchecked(x, y));
            data.extend_from_slice(&[r, g, b]);
        }
    }

    let encoder = Encoder::new(writer, options.quality);
    encoder
        .encode(&data, w16, h16, ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_flatten_onto_white() {
        assert_eq!(flatten_onto_white(color::pack(10, 20, 30, 0)), (10, 20, 30));
        assert_eq!(flatten_onto_white(color::pack(10, 20, 30, 127)), (255, 255, 255));
        // o = 64/127: 0 * o + 255 * 63/127 = 126.496...
        assert_eq!(flatten_onto_white(color::pack(0, 255, 0, 63)), (126, 255, 126));
    }

    #[test]
    fn test_cmyk_to_rgb() {
        assert_eq!(cmyk_to_rgb(0, 0, 0, 0), (255, 255, 255));
        assert_eq!(cmyk_to_rgb(0, 0, 0, 255), (0, 0, 0));
        assert_eq!(cmyk_to_rgb(255, 0, 0, 0), (0, 255, 255));
    }

    #[test]
    fn test_jpeg_roundtrip_flat_color() {
        let pix = Pix::new_filled(16, 16, color::pack(200, 60, 90, 0)).unwrap();
        let mut buffer = Vec::new();
        write_jpeg(&pix, &mut buffer, &JpegOptions::with_quality(95)).unwrap();

        let pix2 = read_jpeg(Cursor::new(buffer)).unwrap();
        assert_eq!(pix2.width(), 16);
        assert_eq!(pix2.height(), 16);
        assert_eq!(pix2.informat(), ImageFormat::Jpeg);
        let c = color::unpack(pix2.get_pixel(8, 8).unwrap());
        assert!(c.r.abs_diff(200) <= 6, "{c:?}");
        assert!(c.g.abs_diff(60) <= 6, "{c:?}");
        assert!(c.b.abs_diff(90) <= 6, "{c:?}");
        assert_eq!(c.a, 0);
    }

    #[test]
    fn test_transparent_exports_white() {
        let pix = Pix::new_filled(8, 8, color::pack(0, 0, 0, 127)).unwrap();
        let mut buffer = Vec::new();
        write_jpeg(&pix, &mut buffer, &JpegOptions::default()).unwrap();
        let pix2 = read_jpeg(Cursor::new(buffer)).unwrap();
        let c = color::unpack(pix2.get_pixel(4, 4).unwrap());
        assert!(c.r >= 250 && c.g >= 250 && c.b >= 250, "{c:?}");
    }

    #[test]
    fn test_invalid_quality() {
        let pix = Pix::new(2, 2).unwrap();
        let mut buffer = Vec::new();
        assert!(matches!(
            write_jpeg(&pix, &mut buffer, &JpegOptions::with_quality(0)),
            Err(IoError::EncodeError(_))
        ));
        assert!(write_jpeg(&pix, &mut buffer, &JpegOptions::with_quality(101)).is_err());
    }

    #[test]
    fn test_oversized_rejected() {
        let pix = Pix::new(65536, 1).unwrap();
        let mut buffer = Vec::new();
        assert!(matches!(
            write_jpeg(&pix, &mut buffer, &JpegOptions::default()),
            Err(IoError::EncodeError(_))
        ));
    }
}
