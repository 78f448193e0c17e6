//! Where the run's baseline starts
//!
//! Both formulas work on the 26.6 grid with truncating division, so the
//! same inputs always land on the same 1/64 pixel.

use crate::fixed::{F26Dot6, Rect26Dot6};

/// Pen x that centers a run of `advance` on a canvas `canvas_width` wide.
///
/// `(I(width) - advance) / 2`. Side bearings are not considered; a run
/// wider than the canvas gets a negative origin. Widths past the 26.6 range
/// (2^25 pixels) saturate.
pub fn center_x(canvas_width: u32, advance: F26Dot6) -> F26Dot6 {
    (F26Dot6::from_pixels(canvas_width) - advance).halve()
}

/// Baseline y for a run whose ink box is `ink`.
///
/// `(I(height) - ink_h) / 2 + ink_h` with `ink_h = ink.max.y - ink.min.y`.
/// The origin is the baseline, not the glyph middle, so the ink height is
/// added back after halving the residual space.
pub fn center_y(canvas_height: u32, ink: &Rect26Dot6) -> F26Dot6 {
    let ink_h = ink.height();
    (F26Dot6::from_pixels(canvas_height) - ink_h).halve() + ink_h
}
