//! Glyph lookup.

use crate::data::Path2D;
use std::io;

mod table;
mod ttf;

pub use self::table::GlyphTable;
pub use self::ttf::TtfFont;

/// A glyph outline positioned at the pen origin, plus the distance to move the pen afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlyphOutline {
    pub path: Path2D,
    pub advance: f64,
}

/// A source of glyph outlines.
///
/// Outline paths are in device space: y grows downwards and the baseline is at y = 0.
pub trait GlyphSource {
    type GlyphId: Copy;

    /// Resolves the glyph for a character.
    fn glyph_for(&self, c: char) -> Option<Self::GlyphId>;

    fn outline_path_for(&self, glyph: Self::GlyphId) -> Path2D;

    fn advance_width_for(&self, glyph: Self::GlyphId) -> f64;

    /// Resolves a character and returns its outline and advance.
    fn outline_for(&self, c: char) -> Option<GlyphOutline> {
        let glyph = self.glyph_for(c)?;
        Some(GlyphOutline {
            path: self.outline_path_for(glyph),
            advance: self.advance_width_for(glyph),
        })
    }
}

/// Font loading errors.
#[derive(Fail, Debug)]
pub enum FontError {
    /// Failed to read the font file.
    #[fail(display = "could not read font file: {}", _0)]
    Io(#[cause] io::Error),

    /// The font data could not be parsed.
    #[fail(display = "invalid font data: {}", _0)]
    Parse(String),

    /// The point size is not a positive finite number.
    #[fail(display = "invalid font size: {}", _0)]
    InvalidSize(f64),
}

impl From<io::Error> for FontError {
    fn from(err: io::Error) -> FontError {
        FontError::Io(err)
    }
}
