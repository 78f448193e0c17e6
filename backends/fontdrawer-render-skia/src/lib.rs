//! Skia engine - glyph outlines via skrifa, coverage via tiny-skia
//!
//! The drawer hands this engine a font, a size and a run of codes. skrifa
//! turns each code into a scaled (and optionally hinted) outline, kurbo
//! measures it, and tiny-skia fills it into an anti-aliased coverage mask
//! that is composited onto the drawer's canvas.
//!
//! Faces are immutable: every face carries the pixel size and the compiled
//! hinting instance it was built with.

use std::sync::Arc;

use kurbo::{BezPath, PathEl, Shape};
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{
    DrawSettings, Engine, HintingInstance, HintingOptions, SmoothMode, Target,
};
use skrifa::{GlyphId, MetadataProvider};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use fontdrawer_core::{
    error::{FaceError, Result},
    traits::{FontRef, GlyphEngine, RenderingFace, RunMetrics},
    Canvas, Color, F26Dot6, FaceParams, Hinting, Point26Dot6, Rect26Dot6,
};
use fontdrawer_fontdb::Font;

/// Largest glyph mask, per side, the engine will allocate
const MAX_GLYPH_EXTENT: u32 = 16384;

/// tiny-skia powered glyph engine
#[derive(Debug, Clone, Copy, Default)]
pub struct SkiaEngine;

impl SkiaEngine {
    pub fn new() -> Self {
        Self
    }
}

impl GlyphEngine for SkiaEngine {
    fn name(&self) -> &'static str {
        "skia"
    }

    fn load_font(&self, data: Vec<u8>) -> Result<Arc<dyn FontRef>> {
        Ok(Arc::new(Font::from_data(data)?))
    }

    fn build_face(
        &self,
        font: Arc<dyn FontRef>,
        params: &FaceParams,
    ) -> Result<Box<dyn RenderingFace>> {
        Ok(Box::new(SkiaFace::new(font, params)?))
    }
}

/// A font bound to one pixel size and hinting mode
pub struct SkiaFace {
    font: Arc<dyn FontRef>,
    ppem: f32,
    hinting: Hinting,
    hinter: Option<HintingInstance>,
}

impl SkiaFace {
    /// Builds the face, compiling a hinting instance when hinting is on
    pub fn new(font: Arc<dyn FontRef>, params: &FaceParams) -> Result<Self> {
        params.validate()?;
        if font.units_per_em() == 0 {
            return Err(FaceError::Backend("font has zero units per em".into()).into());
        }
        let ppem = params.pixels_per_em();

        let hinter = {
            let font_ref = skrifa::FontRef::from_index(font.data(), font.face_index())
                .map_err(|e| FaceError::Backend(format!("font data unreadable: {}", e)))?;
            match hinting_target(params.hinting) {
                None => None,
                Some(target) => {
                    let options = HintingOptions {
                        engine: Engine::AutoFallback,
                        target,
                    };
                    let instance = HintingInstance::new(
                        &font_ref.outline_glyphs(),
                        Size::new(ppem),
                        LocationRef::default(),
                        options,
                    )
                    .map_err(|e| {
                        FaceError::Backend(format!(
                            "cannot hint at {}ppem ({}): {:?}",
                            ppem, params.hinting, e
                        ))
                    })?;
                    Some(instance)
                },
            }
        };

        log::debug!(
            "Skia: built face at {}ppem ({} upem), {} hinting",
            ppem,
            font.units_per_em(),
            params.hinting
        );

        Ok(Self {
            font,
            ppem,
            hinting: params.hinting,
            hinter,
        })
    }

    pub fn hinting(&self) -> Hinting {
        self.hinting
    }

    /// Outline and pen position of every code, pen starting at zero
    fn layout(&self, codes: &[char]) -> Vec<LaidGlyph> {
        let Ok(font_ref) = skrifa::FontRef::from_index(self.font.data(), self.font.face_index())
        else {
            return Vec::new();
        };
        let metrics = font_ref.glyph_metrics(Size::new(self.ppem), LocationRef::default());
        let outlines = font_ref.outline_glyphs();

        let mut pen = F26Dot6::ZERO;
        let mut laid = Vec::with_capacity(codes.len());

        for &ch in codes {
            let glyph_id = self.font.glyph_id(ch).map(GlyphId::new).unwrap_or(GlyphId::NOTDEF);

            let mut path = BezPath::new();
            if let Some(glyph) = outlines.get(glyph_id) {
                let settings = match &self.hinter {
                    Some(instance) => DrawSettings::hinted(instance, false),
                    None => DrawSettings::unhinted(Size::new(self.ppem), LocationRef::default()),
                };
                let mut path_pen = PathPen { path: &mut path };
                if let Err(e) = glyph.draw(settings, &mut path_pen) {
                    log::debug!("Skia: outline for {:?} ({:?}) failed: {:?}", ch, glyph_id, e);
                    path = BezPath::new();
                }
            }

            let advance = metrics.advance_width(glyph_id).unwrap_or(0.0);
            let mut advance = F26Dot6::from_float(advance);
            if self.hinting.is_hinted() {
                advance = advance.round();
            }

            laid.push(LaidGlyph {
                pen,
                path: (!path.elements().is_empty()).then_some(path),
            });
            pen += advance;
        }

        laid.push(LaidGlyph { pen, path: None });
        laid
    }

    /// Ink box of one outline relative to its own origin, y down
    fn ink_box(&self, path: &BezPath) -> Option<Rect26Dot6> {
        let bbox = path.bounding_box();
        if !bbox.is_finite() || bbox.width() <= 0.0 || bbox.height() <= 0.0 {
            return None;
        }
        let ink = Rect26Dot6::new(
            Point26Dot6::new(F26Dot6::from_float(bbox.x0 as f32), F26Dot6::from_float(-bbox.y1 as f32)),
            Point26Dot6::new(F26Dot6::from_float(bbox.x1 as f32), F26Dot6::from_float(-bbox.y0 as f32)),
        );
        Some(if self.hinting.is_hinted() {
            ink.pixel_aligned()
        } else {
            ink
        })
    }

    /// Rasterize `path` with its origin at device point `(gx, gy)` and
    /// composite the coverage onto `canvas`
    fn paint_glyph(&self, canvas: &mut Canvas, path: &BezPath, gx: f32, gy: f32, color: Color) {
        let bbox = path.bounding_box();
        let left = (gx as f64 + bbox.x0).floor();
        let top = (gy as f64 - bbox.y1).floor();
        let right = (gx as f64 + bbox.x1).ceil();
        let bottom = (gy as f64 - bbox.y0).ceil();

        if right <= 0.0
            || bottom <= 0.0
            || left >= canvas.width() as f64
            || top >= canvas.height() as f64
        {
            return;
        }

        let width = ((right - left) as u32).max(1);
        let height = ((bottom - top) as u32).max(1);
        if width > MAX_GLYPH_EXTENT || height > MAX_GLYPH_EXTENT {
            log::debug!("Skia: skipping {}x{} glyph mask", width, height);
            return;
        }

        let Some(skia_path) = to_skia_path(path) else {
            return;
        };
        let Some(mut pixmap) = Pixmap::new(width, height) else {
            return;
        };

        let paint = Paint {
            anti_alias: true,
            ..Default::default()
        };

        // Flip y (outlines are y-up) and move the glyph origin into the mask
        let transform = Transform::from_scale(1.0, -1.0)
            .post_translate(gx - left as f32, gy - top as f32);
        pixmap.fill_path(&skia_path, &paint, FillRule::Winding, transform, None);

        let (left, top) = (left as i32, top as i32);
        for (i, px) in pixmap.data().chunks_exact(4).enumerate() {
            let coverage = px[3];
            if coverage == 0 {
                continue;
            }
            let x = left + (i as u32 % width) as i32;
            let y = top + (i as u32 / width) as i32;
            canvas.blend_pixel(x, y, color, coverage);
        }
    }
}

impl RenderingFace for SkiaFace {
    fn pixels_per_em(&self) -> f32 {
        self.ppem
    }

    fn measure_run(&self, codes: &[char]) -> RunMetrics {
        let laid = self.layout(codes);
        let advance = laid.last().map(|g| g.pen).unwrap_or(F26Dot6::ZERO);

        let bounds = laid
            .iter()
            .filter_map(|g| {
                let ink = self.ink_box(g.path.as_ref()?)?;
                Some(ink.translate(Point26Dot6::new(g.pen, F26Dot6::ZERO)))
            })
            .fold(Rect26Dot6::ZERO, |acc, ink| acc.union(&ink));

        RunMetrics { advance, bounds }
    }

    fn draw_run(&self, canvas: &mut Canvas, origin: Point26Dot6, color: Color, codes: &[char]) {
        if color.is_transparent() {
            return;
        }
        for glyph in self.layout(codes) {
            let Some(path) = glyph.path else {
                continue;
            };
            let gx = (origin.x + glyph.pen).to_float();
            let gy = origin.y.to_float();
            self.paint_glyph(canvas, &path, gx, gy, color);
        }
    }
}

/// Vertical hinting only snaps y, which is what the light target does
fn hinting_target(hinting: Hinting) -> Option<Target> {
    let mode = match hinting {
        Hinting::None => return None,
        Hinting::Vertical => SmoothMode::Light,
        Hinting::Full => SmoothMode::Normal,
    };
    Some(Target::Smooth {
        mode,
        symmetric_rendering: true,
        preserve_linear_metrics: false,
    })
}

/// One code placed on the pen line; the trailing entry carries the total
/// advance and no outline
struct LaidGlyph {
    pen: F26Dot6,
    path: Option<BezPath>,
}

fn to_skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for element in path.elements() {
        match *element {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(ctrl, end) => {
                builder.quad_to(ctrl.x as f32, ctrl.y as f32, end.x as f32, end.y as f32)
            },
            PathEl::CurveTo(c1, c2, end) => builder.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                end.x as f32,
                end.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

/// Collects skrifa's scaled outline commands into a kurbo path
struct PathPen<'a> {
    path: &'a mut BezPath,
}

impl skrifa::outline::OutlinePen for PathPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to((x as f64, y as f64));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to((x as f64, y as f64));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.path
            .quad_to((cx0 as f64, cy0 as f64), (x as f64, y as f64));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.path.curve_to(
            (cx0 as f64, cy0 as f64),
            (cx1 as f64, cy1 as f64),
            (x as f64, y as f64),
        );
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}
