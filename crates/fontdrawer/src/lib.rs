//! fontdrawer - draw a run of text onto a fixed-size canvas
//!
//! Open a font with a canvas size, append the text, pick size, hinting and
//! color, center it (or place it), draw, and export:
//!
//! ```no_run
//! use fontdrawer::prelude::*;
//!
//! let config = DrawerConfig::new("test-fonts/DejaVuSans.ttf", 96, 64);
//! let mut drawer = fontdrawer::open(&config)?;
//!
//! drawer.append_content("HHHH");
//! drawer.set_size(96.0 / 4.0)?;
//! drawer.set_color(Color::white());
//! drawer.set_position_center();
//! drawer.draw();
//!
//! fontdrawer::export::save(&PngExporter::new(), drawer.canvas(), "out.png")?;
//! # Ok::<(), DrawerError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `render-skia`: the skrifa + tiny-skia glyph engine, and [`open`]
//! - `fontdb`: font loading and table access
//! - `export`: PNG, PPM and PGM output

pub use fontdrawer_core::{
    canvas, content, drawer, error, fixed, layout, params, traits, Canvas, Color, ContentBuffer,
    Drawer, DrawerConfig, DrawerError, F26Dot6, FaceParams, Hinting, Point26Dot6, Rect26Dot6,
    Result, RunMetrics,
};

#[cfg(feature = "fontdb")]
pub use fontdrawer_fontdb as fontdb;

#[cfg(feature = "export")]
pub use fontdrawer_export as export;

#[cfg(feature = "render-skia")]
pub use fontdrawer_render_skia as render_skia;

/// Open a drawer over the font in `config` with the default engine
#[cfg(feature = "render-skia")]
pub fn open(config: &DrawerConfig) -> Result<Drawer> {
    use std::sync::Arc;

    Drawer::open(Arc::new(render_skia::SkiaEngine::new()), config)
}

/// Common imports for typical usage
pub mod prelude {
    pub use fontdrawer_core::{
        error::{DrawerError, Result},
        traits::{Exporter, FontRef, GlyphEngine, RenderingFace},
        Canvas, Color, Drawer, DrawerConfig, F26Dot6, FaceParams, Hinting, Point26Dot6,
    };

    #[cfg(feature = "export")]
    pub use fontdrawer_export::{ExportFormat, PngExporter, PnmExporter};

    #[cfg(feature = "render-skia")]
    pub use fontdrawer_render_skia::SkiaEngine;
}
