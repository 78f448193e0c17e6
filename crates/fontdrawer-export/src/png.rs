//! PNG export format
//!
//! The canvas is already straight-alpha RGBA8, which is exactly what a PNG
//! with an alpha channel stores, so encoding is a single pass through the
//! `image` crate.

use image::{ImageBuffer, ImageEncoder, RgbaImage};

use fontdrawer_core::{
    error::{ExportError, Result},
    traits::Exporter,
    Canvas,
};

/// Encode a canvas as an RGBA PNG.
///
/// Transparent pixels stay transparent, so the text can be laid over any
/// background later.
pub fn encode_canvas_to_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let (width, height) = canvas.bounds();
    if width == 0 || height == 0 {
        return Err(ExportError::EncodingFailed(format!(
            "cannot encode an empty {}x{} canvas",
            width, height
        ))
        .into());
    }

    let img: RgbaImage = ImageBuffer::from_raw(width, height, canvas.data().to_vec())
        .ok_or_else(|| {
            ExportError::EncodingFailed("canvas buffer does not match its size".into())
        })?;

    let mut png_data = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new_with_quality(
        &mut png_data,
        image::codecs::png::CompressionType::Default,
        image::codecs::png::FilterType::Sub,
    );

    encoder
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgba8)
        .map_err(|e| ExportError::EncodingFailed(format!("PNG encoding failed: {}", e)))?;

    Ok(png_data)
}

/// PNG exporter for drawn canvases
///
/// # Examples
///
/// ```
/// use fontdrawer_core::{Canvas, Exporter};
/// use fontdrawer_export::PngExporter;
///
/// let png = PngExporter::new().export(&Canvas::new(4, 4)).unwrap();
/// assert_eq!(&png[1..4], b"PNG");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PngExporter;

impl PngExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for PngExporter {
    fn name(&self) -> &'static str {
        "png"
    }

    fn export(&self, canvas: &Canvas) -> Result<Vec<u8>> {
        encode_canvas_to_png(canvas)
    }

    fn extension(&self) -> &'static str {
        "png"
    }

    fn mime_type(&self) -> &'static str {
        "image/png"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontdrawer_core::{Color, DrawerError};

    const PNG_MAGIC: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

    #[test]
    fn test_png_exporter_creation() {
        let exporter = PngExporter::new();
        assert_eq!(exporter.name(), "png");
        assert_eq!(exporter.extension(), "png");
        assert_eq!(exporter.mime_type(), "image/png");
    }

    #[test]
    fn test_png_export_keeps_pixels() {
        let mut canvas = Canvas::new(2, 2);
        canvas.set_pixel(0, 0, Color::rgb(255, 0, 0));
        canvas.set_pixel(1, 1, Color::rgba(0, 0, 255, 128));

        let png_data = PngExporter::new().export(&canvas).unwrap();
        assert_eq!(&png_data[0..8], &PNG_MAGIC);

        let decoded = image::load_from_memory(&png_data).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.as_raw().as_slice(), canvas.data());
    }

    #[test]
    fn test_png_export_rejects_empty_canvas() {
        let result = encode_canvas_to_png(&Canvas::new(0, 8));
        assert!(matches!(result, Err(DrawerError::ExportFailed(ExportError::EncodingFailed(_)))));
    }
}
