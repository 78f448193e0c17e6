// this_file: backends/fontdrawer-render-skia/tests/integration.rs

//! Skia engine against a real font
//!
//! Tests that need DejaVu Sans skip themselves when test-fonts/ is absent.

use std::path::PathBuf;
use std::sync::Arc;

use fontdrawer_core::{
    Color, Drawer, DrawerError, F26Dot6, FaceParams, GlyphEngine, Hinting, Point26Dot6,
};
use fontdrawer_render_skia::SkiaEngine;

fn test_font_data() -> Option<Vec<u8>> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fonts/DejaVuSans.ttf");
    match std::fs::read(&path) {
        Ok(data) => Some(data),
        Err(_) => {
            eprintln!("skipping: {} not found", path.display());
            None
        },
    }
}

fn drawer(width: u32, height: u32, params: FaceParams) -> Option<Drawer> {
    let data = test_font_data()?;
    Some(
        Drawer::from_font_data(Arc::new(SkiaEngine::new()), data, params, width, height)
            .expect("drawer over DejaVu Sans"),
    )
}

#[test]
fn test_garbage_bytes_are_a_font_load_error() {
    let result = Drawer::from_font_data(
        Arc::new(SkiaEngine::new()),
        b"not a font at all".to_vec(),
        FaceParams::DEFAULT,
        16,
        16,
    );
    assert!(matches!(result, Err(DrawerError::FontLoad(_))));
}

#[test]
fn test_zero_size_is_rejected_and_face_kept() {
    let Some(mut drawer) = drawer(32, 32, FaceParams::DEFAULT) else {
        return;
    };
    let result = drawer.set_size(0.0);
    assert!(matches!(result, Err(DrawerError::InvalidFaceParameters(_))));
    assert_eq!(drawer.face_params().size, 12.0);
    assert_eq!(drawer.pixels_per_em(), 12.0);
}

#[test]
fn test_build_face_directly() {
    let Some(data) = test_font_data() else {
        return;
    };
    let engine = SkiaEngine::new();
    let font = engine.load_font(data).unwrap();
    let face = engine
        .build_face(font, &FaceParams::DEFAULT.with_size(24.0).with_dpi(144.0))
        .unwrap();
    assert_eq!(face.pixels_per_em(), 48.0);
}

#[test]
fn test_empty_content_measures_zero() {
    let Some(drawer) = drawer(32, 32, FaceParams::DEFAULT) else {
        return;
    };
    let metrics = drawer.metrics();
    assert_eq!(metrics.advance, F26Dot6::ZERO);
    assert!(metrics.bounds.is_empty());
}

#[test]
fn test_space_advances_without_ink() {
    let Some(mut drawer) = drawer(32, 32, FaceParams::DEFAULT) else {
        return;
    };
    drawer.append_content(" ");
    let metrics = drawer.metrics();
    assert!(metrics.advance > F26Dot6::ZERO);
    assert!(metrics.bounds.is_empty());
}

#[test]
fn test_advance_grows_with_content() {
    let Some(mut drawer) = drawer(64, 32, FaceParams::DEFAULT.with_size(16.0)) else {
        return;
    };
    drawer.append_content("H");
    let one = drawer.measure();
    drawer.append_content("H");
    let two = drawer.measure();
    assert!(one > F26Dot6::ZERO);
    // Unhinted advances are exact to the 1/64 px, so two H's are twice one
    assert!((two - one - one).abs() <= F26Dot6::from_raw(1));
}

#[test]
fn test_ink_box_sits_above_baseline() {
    let Some(mut drawer) = drawer(64, 64, FaceParams::DEFAULT.with_size(24.0)) else {
        return;
    };
    drawer.append_content("H");
    let (bounds, advance) = drawer.bounds();
    // Capital H: ink entirely above the baseline, inside its own advance
    assert!(bounds.min.y < F26Dot6::ZERO);
    assert!(bounds.max.y <= F26Dot6::ONE);
    assert!(bounds.min.x >= F26Dot6::ZERO);
    assert!(bounds.max.x <= advance);
}

#[test]
fn test_centered_run_lands_where_measured() {
    let params = FaceParams::DEFAULT.with_size(96.0 / 4.0);
    let Some(mut drawer) = drawer(96, 64, params) else {
        return;
    };
    drawer.append_content("HHHH");
    drawer.set_color(Color::white());
    drawer.set_position_center();

    let (bounds, _) = drawer.bounds();
    let origin = drawer.origin();
    let expected = bounds.translate(origin);

    let canvas = drawer.draw();
    let (x0, y0, x1, y1) = canvas.ink_bounds().expect("something was drawn");

    let near = |pixel: u32, edge: F26Dot6| (pixel as i32 - edge.to_int_round()).abs() <= 1;
    assert!(near(x0, expected.min.x), "left {} vs {:?}", x0, expected.min.x);
    assert!(near(y0, expected.min.y), "top {} vs {:?}", y0, expected.min.y);
    assert!(near(x1, expected.max.x), "right {} vs {:?}", x1, expected.max.x);
    assert!(near(y1, expected.max.y), "bottom {} vs {:?}", y1, expected.max.y);

    // Centered: margins on each side differ by no more than a couple of pixels
    let (left, right) = (x0 as i32, 96 - x1 as i32);
    let (top, bottom) = (y0 as i32, 64 - y1 as i32);
    assert!((left - right).abs() <= 3, "horizontal margins {} / {}", left, right);
    assert!((top - bottom).abs() <= 2, "vertical margins {} / {}", top, bottom);
}

#[test]
fn test_draw_uses_color() {
    let Some(mut drawer) = drawer(48, 48, FaceParams::DEFAULT.with_size(32.0)) else {
        return;
    };
    drawer.append_content("H");
    drawer.set_color(Color::rgb(255, 0, 0));
    drawer.set_position_center();
    let canvas = drawer.draw();

    let mut saw_opaque = false;
    for y in 0..48 {
        for x in 0..48 {
            let px = canvas.pixel(x, y).unwrap();
            if px.a > 0 {
                assert_eq!((px.r, px.g, px.b), (255, 0, 0));
            }
            saw_opaque |= px.a == 255;
        }
    }
    assert!(saw_opaque, "stem interiors should be fully covered");
}

#[test]
fn test_second_draw_is_superset() {
    let Some(mut drawer) = drawer(64, 32, FaceParams::DEFAULT.with_size(16.0)) else {
        return;
    };
    drawer.append_content("Hi");
    drawer.set_color(Color::rgba(255, 255, 255, 128));
    drawer.set_position_center();

    let first = drawer.draw().clone();
    let second = drawer.draw();

    for (a, b) in first.data().chunks_exact(4).zip(second.data().chunks_exact(4)) {
        assert!(b[3] >= a[3]);
    }
    assert!(second.covered_pixels() >= first.covered_pixels());
    assert_ne!(first.data(), second.data());
}

#[test]
fn test_clear_canvas_then_redraw_matches() {
    let Some(mut drawer) = drawer(64, 32, FaceParams::DEFAULT.with_size(16.0)) else {
        return;
    };
    drawer.append_content("Hi");
    drawer.set_position_center();
    let first = drawer.draw().clone();

    drawer.clear_canvas();
    assert_eq!(drawer.canvas().covered_pixels(), 0);

    let again = drawer.draw();
    assert_eq!(first.data(), again.data());
}

#[test]
fn test_unmapped_code_draws_notdef() {
    let Some(mut drawer) = drawer(48, 48, FaceParams::DEFAULT.with_size(24.0)) else {
        return;
    };
    drawer.append_content("魑");
    let metrics = drawer.metrics();
    // DejaVu has no CJK: the code falls back to glyph 0, which has an outline
    assert!(metrics.advance > F26Dot6::ZERO);
    assert!(!metrics.bounds.is_empty());
}

#[test]
fn test_run_partly_off_canvas_is_clipped() {
    let Some(mut drawer) = drawer(16, 16, FaceParams::DEFAULT.with_size(32.0)) else {
        return;
    };
    drawer.append_content("HH");
    drawer.set_position(F26Dot6::from_int(-8), F26Dot6::from_int(20));
    let canvas = drawer.draw();
    assert_eq!(canvas.bounds(), (16, 16));
    assert!(canvas.covered_pixels() > 0);
}

#[test]
fn test_hinting_modes_all_build_and_draw() {
    for hinting in [Hinting::None, Hinting::Vertical, Hinting::Full] {
        let params = FaceParams::DEFAULT.with_size(18.0).with_hinting(hinting);
        let Some(mut drawer) = drawer(64, 32, params) else {
            return;
        };
        drawer.append_content("Hxg");
        drawer.set_position_center();
        assert!(drawer.draw().covered_pixels() > 0, "{} hinting drew nothing", hinting);
    }
}

#[test]
fn test_hinted_metrics_are_pixel_aligned() {
    let params = FaceParams::DEFAULT.with_size(17.0).with_hinting(Hinting::Full);
    let Some(mut drawer) = drawer(64, 32, params) else {
        return;
    };
    drawer.append_content("Hxg");
    let (bounds, advance) = drawer.bounds();
    assert_eq!(advance.frac(), 0);
    assert_eq!(bounds.min.x.frac(), 0);
    assert_eq!(bounds.min.y.frac(), 0);
    assert_eq!(bounds.max.x.frac(), 0);
    assert_eq!(bounds.max.y.frac(), 0);
}

#[test]
fn test_switching_hinting_keeps_content_and_origin() {
    let Some(mut drawer) = drawer(64, 32, FaceParams::DEFAULT.with_size(16.0)) else {
        return;
    };
    drawer.append_content("Hi");
    drawer.set_position(F26Dot6::from_int(3), F26Dot6::from_int(20));
    drawer.set_hinting(Hinting::Vertical).unwrap();

    assert_eq!(drawer.content_text(), "Hi");
    assert_eq!(drawer.origin(), Point26Dot6::from_ints(3, 20));
    assert_eq!(drawer.face_params().hinting, Hinting::Vertical);
}

#[test]
fn test_run_longer_than_the_grid_saturates() {
    let Some(mut drawer) = drawer(64, 64, FaceParams::DEFAULT.with_size(1000.0)) else {
        return;
    };
    // 40 000 advances of ~989px overflow the 26.6 range
    drawer.append_content(&"W".repeat(40_000));

    let metrics = drawer.metrics();
    assert_eq!(metrics.advance, F26Dot6::MAX);
    assert!(metrics.bounds.max.x > metrics.bounds.min.x);

    drawer.set_position_center();
    assert!(drawer.origin().x < F26Dot6::ZERO);
    drawer.draw();
    assert_eq!(drawer.canvas().bounds(), (64, 64));
}
