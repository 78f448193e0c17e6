//! The contracts between the drawer and whatever rasterizes glyphs
//!
//! The drawer only knows how to keep state consistent and where to put the
//! run. Parsing fonts, building sized faces, measuring and painting glyphs
//! all go through these traits, so an engine can be swapped without
//! touching the layout code.
//!
//! - [`FontRef`] - Your window into font data and its character map
//! - [`GlyphEngine`] - Loads fonts and builds rendering faces from them
//! - [`RenderingFace`] - A font at one size/hinting/dpi: measures and paints runs
//! - [`Exporter`] - Where canvases become files

use std::sync::Arc;

use crate::canvas::Canvas;
use crate::error::Result;
use crate::fixed::{F26Dot6, Point26Dot6, Rect26Dot6};
use crate::params::{Color, FaceParams};

/// Unique identifier for a glyph within a font
pub type GlyphId = u32;

/// A parsed font, immutable once loaded
///
/// ```ignore
/// struct MyFont {
///     data: Vec<u8>,
/// }
///
/// impl FontRef for MyFont {
///     fn data(&self) -> &[u8] {
///         &self.data
///     }
///
///     fn units_per_em(&self) -> u16 {
///         2048
///     }
///
///     fn glyph_id(&self, ch: char) -> Option<GlyphId> {
///         Some(42)
///     }
/// }
/// ```
pub trait FontRef: Send + Sync {
    /// Raw font bytes as they live in the file
    fn data(&self) -> &[u8];

    /// Which face of a collection these bytes describe
    fn face_index(&self) -> u32 {
        0
    }

    /// The font's internal coordinate system scale
    fn units_per_em(&self) -> u16;

    /// Returns None when the font doesn't contain this character
    fn glyph_id(&self, ch: char) -> Option<GlyphId>;
}

/// Advance and ink extent of a run laid out from `(0, 0)` on the baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunMetrics {
    /// Pen movement over the whole run
    pub advance: F26Dot6,
    /// Union of glyph ink boxes; y grows downward, so ascent is negative
    pub bounds: Rect26Dot6,
}

impl RunMetrics {
    pub const EMPTY: RunMetrics = RunMetrics {
        advance: F26Dot6::ZERO,
        bounds: Rect26Dot6::ZERO,
    };
}

/// A font bound to one set of face parameters
///
/// Faces are never mutated. A parameter change produces a new face, so a
/// face is always consistent with the parameters it was built from.
pub trait RenderingFace: Send + Sync {
    /// Pixels per em this face rasterizes at
    fn pixels_per_em(&self) -> f32;

    /// Measure `codes` from a zero origin. Pure: nothing is cached.
    fn measure_run(&self, codes: &[char]) -> RunMetrics;

    /// Paint `codes` onto `canvas` with the baseline starting at `origin`
    fn draw_run(&self, canvas: &mut Canvas, origin: Point26Dot6, color: Color, codes: &[char]);
}

/// A glyph rasterization backend
pub trait GlyphEngine: Send + Sync {
    /// Identify yourself in logs and error messages
    fn name(&self) -> &'static str;

    /// Parse font bytes, failing with a font load error for anything
    /// that is not a usable font container
    fn load_font(&self, data: Vec<u8>) -> Result<Arc<dyn FontRef>>;

    /// Derive a rendering face; rejected parameter combinations are
    /// reported as invalid face parameters
    fn build_face(
        &self,
        font: Arc<dyn FontRef>,
        params: &FaceParams,
    ) -> Result<Box<dyn RenderingFace>>;
}

/// The final step: pixels become files
pub trait Exporter: Send + Sync {
    /// Who are you?
    fn name(&self) -> &'static str;

    /// Encode the canvas as bytes
    fn export(&self, canvas: &Canvas) -> Result<Vec<u8>>;

    /// What file extension should be used?
    fn extension(&self) -> &'static str;

    /// What MIME type identifies your format?
    fn mime_type(&self) -> &'static str;
}
