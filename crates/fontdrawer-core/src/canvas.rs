//! The RGBA target every run is painted onto
//!
//! Dimensions are fixed when the canvas is created. Pixels are stored
//! row-major as straight-alpha RGBA8, which is what image encoders expect.

use crate::params::Color;

/// Fixed-size RGBA8 pixel grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// A fully transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` of the full drawable extent
    pub fn bounds(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGBA8 bytes, row-major
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let i = self.offset(x, y)?;
        let p = &self.data[i..i + 4];
        Some(Color::rgba(p[0], p[1], p[2], p[3]))
    }

    /// Overwrite one pixel. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.offset(x, y) {
            self.data[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Composite `color` at `coverage`/255 over the pixel (source-over).
    ///
    /// Out-of-bounds pixels are clipped.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: u8) {
        if coverage == 0 || color.a == 0 {
            return;
        }
        let Some(i) = self.offset(x, y) else {
            return;
        };

        // Alphas are carried on a 255 * 255 scale to keep the math integral.
        const FULL: u64 = 255 * 255;
        let src_a = color.a as u64 * coverage as u64;
        let dst = &mut self.data[i..i + 4];
        let dst_a = dst[3] as u64 * 255;
        let inv = FULL - src_a;
        let out_a = src_a + dst_a * inv / FULL;
        if out_a == 0 {
            return;
        }

        let mix = |s: u8, d: u8| -> u8 {
            let num = s as u64 * src_a + d as u64 * dst_a * inv / FULL;
            ((num + out_a / 2) / out_a).min(255) as u8
        };
        dst[0] = mix(color.r, dst[0]);
        dst[1] = mix(color.g, dst[1]);
        dst[2] = mix(color.b, dst[2]);
        dst[3] = ((out_a + 127) / 255).min(255) as u8;
    }

    /// Every pixel back to fully transparent
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Fill the whole extent with one color
    pub fn fill(&mut self, color: Color) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Smallest `(x0, y0, x1, y1)` pixel box (exclusive max) holding every
    /// non-transparent pixel, or `None` for a blank canvas.
    pub fn ink_bounds(&self) -> Option<(u32, u32, u32, u32)> {
        let mut found: Option<(u32, u32, u32, u32)> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                let i = (y as usize * self.width as usize + x as usize) * 4;
                if self.data[i + 3] == 0 {
                    continue;
                }
                found = Some(match found {
                    None => (x, y, x + 1, y + 1),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x + 1), y1.max(y + 1)),
                });
            }
        }
        found
    }

    /// Number of pixels with any alpha
    pub fn covered_pixels(&self) -> usize {
        self.data.chunks_exact(4).filter(|px| px[3] != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.bounds(), (4, 3));
        assert_eq!(canvas.data().len(), 48);
        assert_eq!(canvas.pixel(3, 2), Some(Color::TRANSPARENT));
        assert_eq!(canvas.pixel(4, 0), None);
        assert_eq!(canvas.pixel(-1, 0), None);
        assert_eq!(canvas.ink_bounds(), None);
    }

    #[test]
    fn test_set_and_clear() {
        let mut canvas = Canvas::new(4, 4);
        canvas.set_pixel(1, 2, Color::white());
        canvas.set_pixel(10, 10, Color::white());
        assert_eq!(canvas.pixel(1, 2), Some(Color::white()));
        assert_eq!(canvas.covered_pixels(), 1);
        assert_eq!(canvas.ink_bounds(), Some((1, 2, 2, 3)));

        canvas.clear();
        assert_eq!(canvas.covered_pixels(), 0);
    }

    #[test]
    fn test_blend_full_coverage_replaces() {
        let mut canvas = Canvas::new(1, 1);
        canvas.blend_pixel(0, 0, Color::rgb(10, 20, 30), 255);
        assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(10, 20, 30)));
    }

    #[test]
    fn test_blend_partial_coverage_accumulates() {
        let mut canvas = Canvas::new(1, 1);
        canvas.blend_pixel(0, 0, Color::white(), 128);
        let once = canvas.pixel(0, 0).map(|c| c.a).unwrap_or(0);
        assert!((127..=129).contains(&once));
        assert_eq!(canvas.pixel(0, 0).map(|c| c.r), Some(255));

        canvas.blend_pixel(0, 0, Color::white(), 128);
        let twice = canvas.pixel(0, 0).map(|c| c.a).unwrap_or(0);
        assert!(twice > once);
        assert!((190..=193).contains(&twice));
    }

    #[test]
    fn test_blend_over_opaque_mixes_color() {
        let mut canvas = Canvas::new(1, 1);
        canvas.fill(Color::black());
        canvas.blend_pixel(0, 0, Color::white(), 255 / 2);
        let px = canvas.pixel(0, 0).unwrap_or(Color::TRANSPARENT);
        assert_eq!(px.a, 255);
        assert!((126..=128).contains(&px.r));
    }

    #[test]
    fn test_blend_zero_coverage_is_noop() {
        let mut canvas = Canvas::new(2, 2);
        canvas.blend_pixel(0, 0, Color::white(), 0);
        canvas.blend_pixel(1, 1, Color::TRANSPARENT, 255);
        assert_eq!(canvas.covered_pixels(), 0);
    }
}
