//! Face parameters and drawer configuration
//!
//! [`FaceParams`] is the single source of truth a rendering face is derived
//! from. Defaults are spelled out in [`FaceParams::DEFAULT`] instead of being
//! patched into caller-owned structures.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::FaceError;

/// Simple RGBA color, straight (non-premultiplied) alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

/// How glyph outlines are fitted to the pixel grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hinting {
    /// Outlines are rasterized as designed
    #[default]
    None,
    /// Only vertical positions snap to the grid
    Vertical,
    /// Both axes snap to the grid
    Full,
}

impl Hinting {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Hinting::None => "none",
            Hinting::Vertical => "vertical",
            Hinting::Full => "full",
        }
    }

    pub const fn is_hinted(&self) -> bool {
        !matches!(self, Hinting::None)
    }
}

impl fmt::Display for Hinting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hinting {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Hinting::None),
            "vertical" | "light" => Ok(Hinting::Vertical),
            "full" => Ok(Hinting::Full),
            other => Err(format!(
                "unknown hinting '{}', expected none, vertical or full",
                other
            )),
        }
    }
}

/// Everything a rendering face is built from, plus the ink color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceParams {
    /// Em size in points
    pub size: f32,
    pub hinting: Hinting,
    /// Points are converted to pixels at this resolution
    pub dpi: f32,
    /// Paint source; changing it never requires a new face
    pub color: Color,
}

impl FaceParams {
    /// 12pt at 72dpi, unhinted, white ink
    pub const DEFAULT: FaceParams = FaceParams {
        size: 12.0,
        hinting: Hinting::None,
        dpi: 72.0,
        color: Color::white(),
    };

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_hinting(mut self, hinting: Hinting) -> Self {
        self.hinting = hinting;
        self
    }

    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Em size in device pixels
    pub fn pixels_per_em(&self) -> f32 {
        self.size * self.dpi / 72.0
    }

    /// Reject combinations no engine can build a face from
    pub fn validate(&self) -> std::result::Result<(), FaceError> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(FaceError::InvalidSize(self.size));
        }
        if !self.dpi.is_finite() || self.dpi <= 0.0 {
            return Err(FaceError::InvalidDpi(self.dpi));
        }
        Ok(())
    }

    /// True when moving from `self` to `other` needs a new rendering face
    pub fn needs_rebuild(&self, other: &FaceParams) -> bool {
        self.size != other.size || self.hinting != other.hinting || self.dpi != other.dpi
    }
}

impl Default for FaceParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What a [`Drawer`](crate::Drawer) is opened with
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerConfig {
    pub font_path: PathBuf,
    /// `None` selects [`FaceParams::DEFAULT`]
    pub face: Option<FaceParams>,
    pub width: u32,
    pub height: u32,
}

impl DrawerConfig {
    pub fn new(font_path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            font_path: font_path.into(),
            face: None,
            width,
            height,
        }
    }

    pub fn with_face(mut self, face: FaceParams) -> Self {
        self.face = Some(face);
        self
    }

    /// The face parameters the drawer starts from
    pub fn face_params(&self) -> FaceParams {
        self.face.unwrap_or(FaceParams::DEFAULT)
    }
}
