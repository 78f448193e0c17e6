//! Export module for fontdrawer
//!
//! Turns a drawn [`Canvas`] into file bytes: PNG keeps the alpha channel,
//! the PNM formats flatten the text onto black.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use fontdrawer_core::{
    error::{ExportError, Result},
    traits::Exporter,
    Canvas,
};

pub mod png;

pub use png::PngExporter;

/// Output formats known to this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Png,
    Ppm,
    Pgm,
}

impl ExportFormat {
    /// Exporter that writes this format
    pub fn exporter(self) -> Box<dyn Exporter> {
        match self {
            ExportFormat::Png => Box::new(PngExporter::new()),
            ExportFormat::Ppm => Box::new(PnmExporter::ppm()),
            ExportFormat::Pgm => Box::new(PnmExporter::pgm()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Ppm => "ppm",
            ExportFormat::Pgm => "pgm",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "ppm" => Ok(ExportFormat::Ppm),
            "pgm" => Ok(ExportFormat::Pgm),
            other => Err(ExportError::FormatNotSupported(format!(
                "unknown format '{}' (expected png, ppm or pgm)",
                other
            ))),
        }
    }
}

/// PNM (Portable Any Map) exporter for minimal bitmap output
#[derive(Debug, Clone, Copy)]
pub struct PnmExporter {
    format: PnmFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PnmFormat {
    /// PGM - Portable Graymap
    Pgm,
    /// PPM - Portable Pixmap (color)
    Ppm,
}

impl PnmExporter {
    pub fn new(format: PnmFormat) -> Self {
        Self { format }
    }

    pub fn ppm() -> Self {
        Self::new(PnmFormat::Ppm)
    }

    pub fn pgm() -> Self {
        Self::new(PnmFormat::Pgm)
    }

    fn export_canvas(&self, canvas: &Canvas) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        let magic = match self.format {
            PnmFormat::Ppm => "P3",
            PnmFormat::Pgm => "P2",
        };
        writeln!(&mut output, "{}", magic)?; // ASCII variant
        writeln!(&mut output, "{} {}", canvas.width(), canvas.height())?;
        writeln!(&mut output, "255")?;

        for row in canvas.data().chunks_exact(canvas.width().max(1) as usize * 4) {
            for px in row.chunks_exact(4) {
                let [r, g, b] = over_black(px);
                match self.format {
                    PnmFormat::Ppm => write!(&mut output, "{} {} {} ", r, g, b)?,
                    PnmFormat::Pgm => write!(&mut output, "{} ", luminance(r, g, b))?,
                }
            }
            writeln!(&mut output)?;
        }

        Ok(output)
    }
}

impl Exporter for PnmExporter {
    fn name(&self) -> &'static str {
        self.extension()
    }

    fn export(&self, canvas: &Canvas) -> Result<Vec<u8>> {
        self.export_canvas(canvas)
    }

    fn extension(&self) -> &'static str {
        match self.format {
            PnmFormat::Pgm => "pgm",
            PnmFormat::Ppm => "ppm",
        }
    }

    fn mime_type(&self) -> &'static str {
        match self.format {
            PnmFormat::Pgm => "image/x-portable-graymap",
            PnmFormat::Ppm => "image/x-portable-pixmap",
        }
    }
}

impl Default for PnmExporter {
    fn default() -> Self {
        Self::ppm()
    }
}

/// Straight-alpha RGBA composited onto an opaque black background
fn over_black(px: &[u8]) -> [u8; 3] {
    let a = px[3] as u32;
    let scale = |c: u8| ((c as u32 * a + 127) / 255) as u8;
    [scale(px[0]), scale(px[1]), scale(px[2])]
}

fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000) as u8
}

/// Encode `canvas` with `exporter` and write it to `path`
pub fn save(exporter: &dyn Exporter, canvas: &Canvas, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = exporter.export(canvas)?;
    fs::write(path, &bytes)
        .map_err(|e| ExportError::WriteFailed(format!("{}: {}", path.display(), e)))?;
    log::debug!("{}: wrote {} bytes to {}", exporter.name(), bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontdrawer_core::{Color, DrawerError};

    fn two_by_two() -> Canvas {
        let mut canvas = Canvas::new(2, 2);
        canvas.set_pixel(0, 0, Color::rgb(255, 0, 0));
        canvas.set_pixel(1, 0, Color::rgb(0, 255, 0));
        canvas.set_pixel(0, 1, Color::rgba(255, 255, 255, 128));
        canvas
    }

    #[test]
    fn test_ppm_export() {
        let exported = PnmExporter::ppm().export(&two_by_two()).unwrap();
        let text = String::from_utf8(exported).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "P3");
        assert_eq!(lines[1], "2 2");
        assert_eq!(lines[2], "255");
        assert_eq!(lines[3].trim(), "255 0 0 0 255 0");
        // Half-covered white over black, then an untouched pixel
        assert_eq!(lines[4].trim(), "128 128 128 0 0 0");
    }

    #[test]
    fn test_pgm_export() {
        let exported = PnmExporter::pgm().export(&two_by_two()).unwrap();
        let text = String::from_utf8(exported).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "P2");
        assert_eq!(lines[1], "2 2");
        assert_eq!(lines[3].trim(), "76 149");
        assert_eq!(lines[4].trim(), "128 0");
    }

    #[test]
    fn test_extension_and_mime() {
        let ppm = PnmExporter::ppm();
        assert_eq!(ppm.extension(), "ppm");
        assert_eq!(ppm.mime_type(), "image/x-portable-pixmap");

        let pgm = PnmExporter::pgm();
        assert_eq!(pgm.extension(), "pgm");
        assert_eq!(pgm.mime_type(), "image/x-portable-graymap");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("png".parse::<ExportFormat>().unwrap(), ExportFormat::Png);
        assert_eq!("PPM".parse::<ExportFormat>().unwrap(), ExportFormat::Ppm);
        assert_eq!("pgm".parse::<ExportFormat>().unwrap(), ExportFormat::Pgm);
        assert!("svg".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Pgm.exporter().extension(), "pgm");
    }

    #[test]
    fn test_save_writes_file() {
        let path = std::env::temp_dir().join(format!("fontdrawer-save-{}.ppm", std::process::id()));
        save(&PnmExporter::ppm(), &two_by_two(), &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("P3\n2 2\n255\n"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join("fontdrawer-no-such-dir")
            .join("out.png");
        let result = save(&PngExporter::new(), &two_by_two(), &path);
        assert!(matches!(result, Err(DrawerError::ExportFailed(ExportError::WriteFailed(_)))));
    }
}
