//! pixtone-test - Regression test harness for pixtone
//!
//! Every `tests/*_reg.rs` file in the workspace drives its checks through a
//! [`RegParams`], which numbers each comparison, collects failures instead
//! of panicking on the first one, and reports them all in
//! [`RegParams::cleanup`]. Two modes are supported:
//!
//! - **Compare**: Run every comparison (default)
//! - **Display**: Additionally write intermediate images to `tests/regout`
//!   for visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use pixtone_test::RegParams;
//!
//! let mut rp = RegParams::new("hue");
//! rp.compare_values(255.0, red as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use pixtone_core::{Pix, color};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixtone-test is at crates/pixtone-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// The 2x2 reference image: red, green on the top row; blue, white below.
pub fn primaries_2x2() -> TestResult<Pix> {
    let pixels = [
        color::pack(255, 0, 0, 0),
        color::pack(0, 255, 0, 0),
        color::pack(0, 0, 255, 0),
        color::pack(255, 255, 255, 0),
    ];
    Ok(Pix::from_fn(2, 2, |x, y| pixels[(y * 2 + x) as usize])?)
}

/// Opaque ramp: red grows with x, green with y, blue fixed at 128.
pub fn rgb_ramp(width: u32, height: u32) -> TestResult<Pix> {
    let step = |v: u32, n: u32| if n > 1 { (v * 255 / (n - 1)) as u8 } else { 0 };
    Ok(Pix::from_fn(width, height, |x, y| {
        color::pack(step(x, width), step(y, height), 128, 0)
    })?)
}

/// Opaque sweep through saturated and muted colors.
///
/// Hue varies along x, the gray floor along y, so every row mixes pure
/// primaries, secondaries and desaturated tones.
pub fn color_sweep(width: u32, height: u32) -> TestResult<Pix> {
    Ok(Pix::from_fn(width, height, |x, y| {
        let h = if width > 1 { x as f64 / width as f64 } else { 0.0 };
        let s = 1.0 - 0.8 * (y as f64 / height.max(1) as f64);
        color::Hsl::new(h, s, 0.9).with_alpha(0).to_pixel()
    })?)
}

/// Copy of `pix` with every pixel's inverted alpha set to `alpha`.
pub fn with_alpha(pix: &Pix, alpha: u8) -> Pix {
    let mut pm = pix.to_mut();
    for p in pm.data_mut() {
        let c = color::unpack(*p);
        *p = color::pack(c.r, c.g, c.b, alpha);
    }
    pm.set_spp(4);
    pm.into()
}
