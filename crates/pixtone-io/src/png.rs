//! PNG image format support
//!
//! Every PNG is decoded to 8-bit RGB(A): palettes and low bit depths are
//! expanded, 16-bit samples are stripped to their high byte. PNG stores
//! 8-bit straight alpha (255 = opaque) while a pixel carries 7-bit inverted
//! alpha (0 = opaque), so the channel is mapped on the way in and out.
//! The mapping is exact for every 7-bit value.

use crate::{IoError, IoResult};
use pixtone_core::{ImageFormat, Pix, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Map 8-bit PNG alpha to 7-bit inverted alpha.
#[inline]
pub fn alpha_from_png(a8: u8) -> u8 {
    color::ALPHA_MAX - (a8 >> 1)
}

/// Map 7-bit inverted alpha to 8-bit PNG alpha.
#[inline]
pub fn alpha_to_png(a7: u8) -> u8 {
    let a7 = a7 & color::ALPHA_MAX;
    255 - ((a7 << 1) + (a7 >> 6))
}

/// Read a PNG image
///
/// Images with an alpha channel (RGBA, gray + alpha, or a palette with a
/// transparency chunk) come back with `spp == 4`.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            bit_depth
        )));
    }
    let (samples, spp) = match color_type {
        ColorType::Grayscale => (1, 3),
        ColorType::GrayscaleAlpha => (2, 4),
        ColorType::Rgb => (3, 3),
        ColorType::Rgba => (4, 4),
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG was not expanded".to_string(),
            ));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut pix_mut = Pix::new(width, height)?.into_mut();
    pix_mut.set_spp(spp);
    pix_mut.set_informat(ImageFormat::Png);

    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        for x in 0..width {
            let px = &data[row_start + x as usize * samples..][..samples];
            let (r, g, b, a8) = match samples {
                1 => (px[0], px[0], px[0], 255),
                2 => (px[0], px[0], px[0], px[1]),
                3 => (px[0], px[1], px[2], 255),
                _ => (px[0], px[1], px[2], px[3]),
            };
            pix_mut.set_pixel_unchecked(x, y, color::pack(r, g, b, alpha_from_png(a8)));
        }
    }

    Ok(pix_mut.into())
}

/// Write a PNG image
///
/// Writes 8-bit RGBA when the image carries alpha (`spp == 4`), else 8-bit
/// RGB with the alpha bits ignored.
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let width = pix.width();
    let height = pix.height();

    let (color_type, samples) = if pix.has_alpha() {
        (ColorType::Rgba, 4)
    } else {
        (ColorType::Rgb, 3)
    };

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let bytes_per_row = width as usize * samples;
    let mut data = vec![0u8; bytes_per_row * height as usize];

    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        for x in 0..width {
            let c = color::unpack(pix.get_pixel_unchecked(x, y));
            let idx = row_start + x as usize * samples;
            data[idx] = c.r;
            data[idx + 1] = c.g;
            data[idx + 2] = c.b;
            if samples == 4 {
                data[idx + 3] = alpha_to_png(c.a);
            }
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
