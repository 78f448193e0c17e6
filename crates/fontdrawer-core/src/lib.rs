//! fontdrawer core: from a font and a run of text to a centered raster
//!
//! This crate keeps the state of a drawing session consistent. Everything
//! that actually touches glyph outlines lives behind the traits in
//! [`traits`], so any engine can be plugged in.
//!
//! ## The pieces
//!
//! 1. **Face parameters** - [`FaceParams`]: size, hinting, dpi and color
//! 2. **Face building** - [`GlyphEngine::build_face`], re-run on every change
//! 3. **Content** - [`ContentBuffer`]: the codes to draw, append-only
//! 4. **Metrics** - [`RenderingFace::measure_run`], recomputed on demand
//! 5. **Layout** - [`layout::center_x`] / [`layout::center_y`] set the origin
//! 6. **Compositing** - [`RenderingFace::draw_run`] paints onto a [`Canvas`]
//!
//! [`Drawer`] ties them together.
//!
//! ## Draw a centered run
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use fontdrawer_core::{Drawer, DrawerConfig, GlyphEngine, Color};
//!
//! # fn engine() -> Arc<dyn GlyphEngine> { unimplemented!() }
//! let config = DrawerConfig::new("font/NotoSansJP-Regular.otf", 96, 64);
//! let mut drawer = Drawer::open(engine(), &config)?;
//!
//! drawer.append_content("魑魅魍魎");
//! drawer.set_size(96.0 / 4.0)?;
//! drawer.set_color(Color::white());
//! drawer.set_position_center();
//!
//! let canvas = drawer.draw();
//! assert_eq!(canvas.bounds(), (96, 64));
//! # Ok::<(), fontdrawer_core::DrawerError>(())
//! ```

pub mod canvas;
pub mod content;
pub mod drawer;
pub mod error;
pub mod fixed;
pub mod layout;
pub mod params;
pub mod traits;

pub use canvas::Canvas;
pub use content::ContentBuffer;
pub use drawer::Drawer;
pub use error::{DrawerError, Result};
pub use fixed::{F26Dot6, Point26Dot6, Rect26Dot6};
pub use params::{Color, DrawerConfig, FaceParams, Hinting};
pub use traits::{Exporter, FontRef, GlyphEngine, GlyphId, RenderingFace, RunMetrics};
