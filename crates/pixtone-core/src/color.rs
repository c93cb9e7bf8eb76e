//! Packed-pixel codec and the RGB <-> HSL color model.
//!
//! # Pixel format
//!
//! 32-bit pixels are stored as `0x7ARRGGBB`: a 7-bit alpha in bits 24..30,
//! then red, green and blue bytes. Alpha is *inverted*: 0 is fully opaque
//! and [`ALPHA_MAX`] (127) is fully transparent.
//!
//! # HSL
//!
//! Hue, saturation and lightness are normalized to [0.0, 1.0]; hue is a
//! fraction of a full turn. Lightness here is the largest normalized
//! channel, and the inverse conversion truncates each channel toward zero,
//! so `rgb -> hsl -> rgb` may drift by at most one level per channel.

use crate::error::{Error, Result};

/// Shift amounts for extracting color channels
pub const ALPHA_SHIFT: u32 = 24;
pub const RED_SHIFT: u32 = 16;
pub const GREEN_SHIFT: u32 = 8;
pub const BLUE_SHIFT: u32 = 0;

/// Mask of the 7 alpha bits inside a packed pixel.
pub const ALPHA_MASK: u32 = 0x7F00_0000;

/// Inverted alpha of a fully transparent pixel.
pub const ALPHA_MAX: u8 = 127;

/// Inverted alpha of a fully opaque pixel.
pub const ALPHA_OPAQUE: u8 = 0;

/// Unpacked 8-bit channels of a pixel.
///
/// `a` keeps the inverted 7-bit convention of the packed pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create from channel values.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack back into a 32-bit pixel.
    #[inline]
    pub fn pack(self) -> u32 {
        pack(self.r, self.g, self.b, self.a)
    }

    /// Whether the pixel has no transparency at all.
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == ALPHA_OPAQUE
    }

    /// Convert the color part to HSL. Alpha is not consulted.
    pub fn to_hsl(self) -> Hsl {
        hsl_from_rgb8(self.r, self.g, self.b)
    }
}

impl From<Rgba> for (u8, u8, u8, u8) {
    fn from(c: Rgba) -> Self {
        (c.r, c.g, c.b, c.a)
    }
}

/// Normalized hue / saturation / lightness.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL color.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert to 8-bit RGB, truncating each channel toward zero.
    ///
    /// Components are expected to be in [0.0, 1.0]; use [`hsl_to_rgb`] for
    /// untrusted input.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        let Hsl { h, s, l } = self;
        debug_assert!((0.0..=1.0).contains(&h), "hue {h} outside [0, 1]");

        if s == 0.0 {
            let v = to_byte(l);
            return (v, v, v);
        }

        // h == 1.0 would give sector 6; it is the same color as sector 5 at f == 1
        let h6 = h * 6.0;
        let sector = (h6.floor() as i32).min(5);
        let f = h6 - sector as f64;
        let c1 = l * (1.0 - s);
        let c2 = l * (1.0 - s * f);
        let c3 = l * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector {
            0 => (l, c3, c1),
            1 => (c2, l, c1),
            2 => (c1, l, c3),
            3 => (c1, c2, l),
            4 => (c3, c1, l),
            5 => (l, c1, c2),
            _ => unreachable!("hue sector {sector} for h = {h}"),
        };

        (to_byte(r), to_byte(g), to_byte(b))
    }

    /// Attach an inverted alpha value.
    pub fn with_alpha(self, a: u8) -> Hsla {
        Hsla {
            h: self.h,
            s: self.s,
            l: self.l,
            a,
        }
    }
}

/// HSL plus the raw inverted alpha carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: u8,
}

impl Hsla {
    /// The color part.
    pub fn hsl(self) -> Hsl {
        Hsl::new(self.h, self.s, self.l)
    }

    /// Convert back to a packed pixel with the carried alpha.
    pub fn to_pixel(self) -> u32 {
        let (r, g, b) = self.hsl().to_rgb();
        pack(r, g, b, self.a)
    }
}

/// Scale a normalized channel to [0, 255], truncating toward zero.
#[inline]
fn to_byte(v: f64) -> u8 {
    (v * 255.0) as u8
}

/// Extract red component from a packed pixel.
#[inline]
pub fn red(pixel: u32) -> u8 {
    ((pixel >> RED_SHIFT) & 0xff) as u8
}

/// Extract green component from a packed pixel.
#[inline]
pub fn green(pixel: u32) -> u8 {
    ((pixel >> GREEN_SHIFT) & 0xff) as u8
}

/// Extract blue component from a packed pixel.
#[inline]
pub fn blue(pixel: u32) -> u8 {
    ((pixel >> BLUE_SHIFT) & 0xff) as u8
}

/// Extract the inverted 7-bit alpha from a packed pixel.
#[inline]
pub fn alpha(pixel: u32) -> u8 {
    ((pixel & ALPHA_MASK) >> ALPHA_SHIFT) as u8
}

/// Split a packed pixel into its channels. Lossless.
#[inline]
pub fn unpack(pixel: u32) -> Rgba {
    Rgba {
        r: red(pixel),
        g: green(pixel),
        b: blue(pixel),
        a: alpha(pixel),
    }
}

/// Compose a packed pixel. Alpha is masked to 7 bits.
#[inline]
pub fn pack(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (((a as u32) << ALPHA_SHIFT) & ALPHA_MASK)
        | ((r as u32) << RED_SHIFT)
        | ((g as u32) << GREEN_SHIFT)
        | ((b as u32) << BLUE_SHIFT)
}

/// Convert RGB to HSL.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] naming the channel if any input is outside
/// [0, 255].
pub fn rgb_to_hsl(r: i32, g: i32, b: i32) -> Result<Hsl> {
    let r = channel("red", r)?;
    let g = channel("green", g)?;
    let b = channel("blue", b)?;
    Ok(hsl_from_rgb8(r, g, b))
}

fn channel(name: &'static str, v: i32) -> Result<u8> {
    u8::try_from(v).map_err(|_| Error::out_of_range(name, v.into(), 0, 255))
}

fn hsl_from_rgb8(r: u8, g: u8, b: u8) -> Hsl {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = max;

    if delta == 0.0 {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let s = delta / max;
    let dist = |c: f64| ((max - c) / 6.0 + delta / 2.0) / delta;
    let (dr, dg, db) = (dist(r), dist(g), dist(b));

    // Ties resolve red first, then green
    let mut h = if r == max {
        db - dg
    } else if g == max {
        1.0 / 3.0 + dr - db
    } else {
        2.0 / 3.0 + dg - dr
    };

    if h < 0.0 {
        h += 1.0;
    }
    if h > 1.0 {
        h -= 1.0;
    }

    Hsl { h, s, l }
}

/// Convert HSL to 8-bit RGB, truncating each channel toward zero.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if any component is outside [0.0, 1.0]
/// (NaN included).
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Result<(u8, u8, u8)> {
    for (name, v) in [("hue", h), ("saturation", s), ("lightness", l)] {
        if !(0.0..=1.0).contains(&v) {
            return Err(Error::OutOfRange {
                name,
                value: v,
                min: 0.0,
                max: 1.0,
            });
        }
    }
    Ok(Hsl { h, s, l }.to_rgb())
}

/// Decode a packed pixel straight to HSL plus its raw inverted alpha.
pub fn get_hsla(pixel: u32) -> Hsla {
    let c = unpack(pixel);
    c.to_hsl().with_alpha(c.a)
}
