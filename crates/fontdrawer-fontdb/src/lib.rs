//! Font resources for fontdrawer
//!
//! A [`Font`] is read once, validated once, and kept as raw bytes.
//! Table parsers are created on demand from those bytes, which keeps the
//! type free of self-borrows and lets TTC collections pick a face by index.

use std::fs;
use std::path::Path;

use read_fonts::{FontRef as ReadFontRef, TableProvider};

use fontdrawer_core::{
    error::{FontLoadError, Result},
    traits::FontRef,
};

/// A font that's been brought into memory and checked
pub struct Font {
    data: Vec<u8>,
    face_index: u32,
    units_per_em: u16,
}

impl Font {
    /// Opens a font file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_index(path, 0)
    }

    /// Opens a specific face from a font file (for TTC collections)
    pub fn from_file_index(path: impl AsRef<Path>, face_index: u32) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| FontLoadError::from_io(path, &e))?;

        Self::from_data_index(data, face_index)
    }

    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        Self::from_data_index(data, 0)
    }

    /// Parses `data` as face `face_index`, rejecting anything that is not
    /// a font container with a usable character map
    pub fn from_data_index(data: Vec<u8>, face_index: u32) -> Result<Self> {
        let font_ref =
            ReadFontRef::from_index(&data, face_index).map_err(|_| FontLoadError::InvalidData)?;

        font_ref
            .cmap()
            .map_err(|_| FontLoadError::NotSupported("font has no cmap table".to_string()))?;

        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .map_err(|_| FontLoadError::InvalidData)?;
        let glyph_count = font_ref.maxp().ok().map(|maxp| maxp.num_glyphs());

        log::debug!(
            "Parsed font face {}: {} bytes, {} upem, {:?} glyphs",
            face_index,
            data.len(),
            units_per_em,
            glyph_count
        );

        Ok(Font {
            data,
            face_index,
            units_per_em,
        })
    }

    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    fn font_ref(&self) -> Option<ReadFontRef<'_>> {
        ReadFontRef::from_index(&self.data, self.face_index).ok()
    }

    /// Finds which glyph draws this character
    pub fn glyph_id(&self, ch: char) -> Option<u32> {
        self.font_ref()
            .and_then(|font| font.cmap().ok()?.map_codepoint(ch).map(|gid| gid.to_u32()))
    }
}

impl FontRef for Font {
    fn data(&self) -> &[u8] {
        &self.data
    }

    fn face_index(&self) -> u32 {
        self.face_index
    }

    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn glyph_id(&self, ch: char) -> Option<u32> {
        self.glyph_id(ch)
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("bytes", &self.data.len())
            .field("face_index", &self.face_index)
            .field("units_per_em", &self.units_per_em)
            .finish()
    }
}
