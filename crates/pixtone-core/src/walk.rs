//! Pixel traversal with progress reporting
//!
//! Every color adjustment is a per-pixel function `(x, y, pixel) -> pixel`
//! driven by [`walk_pixels`]. The traversal order is column-outer,
//! row-inner: all rows of column 0, then all rows of column 1, and so on.
//! Each coordinate is visited exactly once, so a transform always sees the
//! value the pixel had before the pass.
//!
//! Progress is reported through the [`Progress`] trait, once per 10% of
//! completed columns. Reporting is a diagnostic side channel: the default
//! [`NoProgress`] ignores everything and [`LogProgress`] forwards to the
//! `log` facade.

use crate::pix::PixMut;

/// Number of progress buckets per pass (10%, 20%, ..., 100%).
pub const PROGRESS_BUCKETS: u32 = 10;

/// Receiver for traversal diagnostics.
///
/// All methods default to no-ops so implementors only override what they
/// care about.
pub trait Progress {
    /// An operation is about to run a pass.
    fn begin(&mut self, _op: &str) {}

    /// An operation decided that a pass would not change anything.
    fn skip(&mut self, _op: &str) {}

    /// A pass crossed a progress bucket; `percent` is 10, 20, ..., 100.
    fn advance(&mut self, _percent: u32) {}

    /// An operation finished its pass.
    fn done(&mut self, _op: &str) {}
}

/// Progress receiver that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {}

/// Progress receiver that writes to the `log` facade.
///
/// Begin/skip/done lines go to `info`, bucket markers to `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl Progress for LogProgress {
    fn begin(&mut self, op: &str) {
        log::info!("{op}: start");
    }

    fn skip(&mut self, op: &str) {
        log::info!("{op}: skipped, no change");
    }

    fn advance(&mut self, percent: u32) {
        log::debug!("{percent}%");
    }

    fn done(&mut self, op: &str) {
        log::info!("{op}: done");
    }
}

/// Rewrite every pixel of `pm` with `f(x, y, pixel)`.
///
/// Visits `for x in 0..width { for y in 0..height }` and calls
/// `progress.advance` once per bucket crossing, [`PROGRESS_BUCKETS`] times
/// per pass in total. Narrow images cross several buckets in one column;
/// each crossing is still reported once.
pub fn walk_pixels<F>(pm: &mut PixMut, progress: &mut dyn Progress, mut f: F)
where
    F: FnMut(u32, u32, u32) -> u32,
{
    let w = pm.width();
    let h = pm.height();
    let mut reported = 0;

    for x in 0..w {
        for y in 0..h {
            let pixel = pm.get_pixel_unchecked(x, y);
            pm.set_pixel_unchecked(x, y, f(x, y, pixel));
        }

        let bucket = ((x as u64 + 1) * PROGRESS_BUCKETS as u64 / w as u64) as u32;
        while reported < bucket {
            reported += 1;
            progress.advance(reported * (100 / PROGRESS_BUCKETS));
        }
    }
}

/// Run one labelled pass: `begin`, [`walk_pixels`], `done`.
pub fn run_pass<F>(pm: &mut PixMut, op: &str, progress: &mut dyn Progress, f: F)
where
    F: FnMut(u32, u32, u32) -> u32,
{
    progress.begin(op);
    walk_pixels(pm, progress, f);
    progress.done(op);
}
