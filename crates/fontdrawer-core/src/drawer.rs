//! The drawer: one font, one canvas, one run
//!
//! A [`Drawer`] owns everything a drawing session touches. Face parameters
//! and the rendering face derived from them change together or not at all;
//! content, canvas and origin are cleared independently so repeated draw
//! cycles never pick up stale state.

use std::fmt;
use std::fs;
use std::sync::Arc;

use crate::canvas::Canvas;
use crate::content::ContentBuffer;
use crate::error::{FontLoadError, Result};
use crate::fixed::{F26Dot6, Point26Dot6, Rect26Dot6};
use crate::layout;
use crate::params::{Color, DrawerConfig, FaceParams, Hinting};
use crate::traits::{FontRef, GlyphEngine, RenderingFace, RunMetrics};

/// Text layout and compositing session over a glyph engine
pub struct Drawer {
    engine: Arc<dyn GlyphEngine>,
    font: Arc<dyn FontRef>,
    params: FaceParams,
    face: Box<dyn RenderingFace>,
    content: ContentBuffer,
    canvas: Canvas,
    origin: Point26Dot6,
}

impl Drawer {
    /// Read the font at `config.font_path` and set up a blank canvas.
    ///
    /// Fails with a font load error when the file cannot be read or parsed,
    /// and with invalid face parameters when the initial face cannot be
    /// built. No drawer is returned in either case.
    pub fn open(engine: Arc<dyn GlyphEngine>, config: &DrawerConfig) -> Result<Self> {
        let path = &config.font_path;
        let data = fs::read(path).map_err(|e| FontLoadError::from_io(path, &e))?;

        log::debug!("Loaded {} bytes from {}", data.len(), path.display());
        Self::from_font_data(engine, data, config.face_params(), config.width, config.height)
    }

    /// Same as [`Drawer::open`] with the font bytes already in memory
    pub fn from_font_data(
        engine: Arc<dyn GlyphEngine>,
        data: Vec<u8>,
        params: FaceParams,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let font = engine.load_font(data)?;

        params.validate()?;
        let face = engine.build_face(font.clone(), &params)?;

        log::debug!(
            "{}: drawer ready, {}pt @ {}dpi ({} hinting), canvas {}x{}",
            engine.name(),
            params.size,
            params.dpi,
            params.hinting,
            width,
            height
        );

        Ok(Self {
            engine,
            font,
            params,
            face,
            content: ContentBuffer::new(),
            canvas: Canvas::new(width, height),
            origin: Point26Dot6::ZERO,
        })
    }

    // Face parameters

    pub fn face_params(&self) -> &FaceParams {
        &self.params
    }

    pub fn color(&self) -> Color {
        self.params.color
    }

    pub fn engine_name(&self) -> &'static str {
        self.engine.name()
    }

    pub fn font(&self) -> &dyn FontRef {
        self.font.as_ref()
    }

    /// Pixels per em of the face currently in use
    pub fn pixels_per_em(&self) -> f32 {
        self.face.pixels_per_em()
    }

    /// Switch to `candidate` parameters, rebuilding the face if needed.
    ///
    /// The new face is built before anything is replaced: on error the
    /// drawer keeps its previous parameters and face.
    pub fn set_face_params(&mut self, candidate: FaceParams) -> Result<()> {
        if !self.params.needs_rebuild(&candidate) {
            self.params = candidate;
            return Ok(());
        }

        candidate.validate()?;
        let face = self.engine.build_face(self.font.clone(), &candidate)?;

        log::debug!(
            "{}: rebuilt face {}pt -> {}pt, {} -> {} hinting, {} -> {}dpi",
            self.engine.name(),
            self.params.size,
            candidate.size,
            self.params.hinting,
            candidate.hinting,
            self.params.dpi,
            candidate.dpi
        );

        self.face = face;
        self.params = candidate;
        Ok(())
    }

    pub fn set_size(&mut self, size: f32) -> Result<()> {
        self.set_face_params(self.params.with_size(size))
    }

    pub fn set_hinting(&mut self, hinting: Hinting) -> Result<()> {
        self.set_face_params(self.params.with_hinting(hinting))
    }

    pub fn set_dpi(&mut self, dpi: f32) -> Result<()> {
        self.set_face_params(self.params.with_dpi(dpi))
    }

    /// Change size and hinting in one step
    pub fn set_face_options(&mut self, size: f32, hinting: Hinting) -> Result<()> {
        self.set_face_params(self.params.with_size(size).with_hinting(hinting))
    }

    /// New ink color for subsequent draws; the face is kept as is
    pub fn set_color(&mut self, color: Color) {
        self.params.color = color;
    }

    // Content

    pub fn append_content(&mut self, text: &str) {
        self.content.append(text);
    }

    pub fn extend_content<I: IntoIterator<Item = char>>(&mut self, codes: I) {
        self.content.extend(codes);
    }

    pub fn content(&self) -> &[char] {
        self.content.codes()
    }

    pub fn content_text(&self) -> String {
        self.content.to_text()
    }

    // Metrics

    /// Advance and ink box of the current content, measured now
    pub fn metrics(&self) -> RunMetrics {
        self.face.measure_run(self.content.codes())
    }

    /// Advance width of the current content
    pub fn measure(&self) -> F26Dot6 {
        self.metrics().advance
    }

    /// Ink box and advance of the current content
    pub fn bounds(&self) -> (Rect26Dot6, F26Dot6) {
        let metrics = self.metrics();
        (metrics.bounds, metrics.advance)
    }

    // Layout

    /// Origin x that centers the current content horizontally
    pub fn center_x(&self) -> F26Dot6 {
        layout::center_x(self.canvas.width(), self.measure())
    }

    /// Baseline y that centers the current content vertically
    pub fn center_y(&self) -> F26Dot6 {
        layout::center_y(self.canvas.height(), &self.metrics().bounds)
    }

    pub fn origin(&self) -> Point26Dot6 {
        self.origin
    }

    /// Put the next draw's baseline start at `(x, y)`
    pub fn set_position(&mut self, x: F26Dot6, y: F26Dot6) {
        self.origin = Point26Dot6::new(x, y);
    }

    /// Center the current content on both axes
    pub fn set_position_center(&mut self) {
        let metrics = self.metrics();
        self.origin = Point26Dot6::new(
            layout::center_x(self.canvas.width(), metrics.advance),
            layout::center_y(self.canvas.height(), &metrics.bounds),
        );
    }

    /// Center horizontally, baseline at `y`
    pub fn set_center_x_keep_y(&mut self, y: F26Dot6) {
        self.origin = Point26Dot6::new(self.center_x(), y);
    }

    /// Center vertically, pen starting at `x`
    pub fn set_center_y_keep_x(&mut self, x: F26Dot6) {
        self.origin = Point26Dot6::new(x, self.center_y());
    }

    // Compositing

    /// Paint the content at the origin and hand back the canvas.
    ///
    /// Pixels accumulate: drawing twice without [`Drawer::clear_canvas`]
    /// composites the run twice.
    pub fn draw(&mut self) -> &Canvas {
        log::debug!(
            "{}: drawing {} codes at ({:?}, {:?})",
            self.engine.name(),
            self.content.len(),
            self.origin.x,
            self.origin.y
        );
        self.face
            .draw_run(&mut self.canvas, self.origin, self.params.color, self.content.codes());
        &self.canvas
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }

    /// Every pixel back to transparent; content and origin stay
    pub fn clear_canvas(&mut self) {
        self.canvas.clear();
    }

    /// Empty the content; canvas and origin stay
    pub fn clear_content(&mut self) {
        self.content.clear();
    }

    /// Clear content, then canvas
    pub fn clear_all(&mut self) {
        self.clear_content();
        self.clear_canvas();
    }
}

impl fmt::Debug for Drawer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drawer")
            .field("engine", &self.engine.name())
            .field("params", &self.params)
            .field("content", &self.content)
            .field("canvas", &self.canvas.bounds())
            .field("origin", &self.origin)
            .finish()
    }
}
