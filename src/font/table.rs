use crate::data::Path2D;
use crate::font::{GlyphOutline, GlyphSource};
use fnv::FnvHashMap;
use std::iter::FromIterator;

/// An in-memory glyph source keyed by character.
///
/// Useful for hand-drawn fonts, or for caching outlines pulled from another source.
#[derive(Debug, Clone, Default)]
pub struct GlyphTable {
    glyphs: FnvHashMap<char, GlyphOutline>,
}

impl GlyphTable {
    pub fn new() -> GlyphTable {
        GlyphTable::default()
    }

    /// Copies the outlines of the given characters out of another source.
    ///
    /// Characters the source cannot resolve are left out.
    pub fn cache_from<S: GlyphSource + ?Sized>(source: &S, chars: &str) -> GlyphTable {
        let mut table = GlyphTable::new();
        for c in chars.chars() {
            if table.glyphs.contains_key(&c) {
                continue;
            }
            if let Some(outline) = source.outline_for(c) {
                table.insert(c, outline);
            }
        }
        trace!("cached {} glyphs", table.len());
        table
    }

    /// Inserts an outline, returning the previous one for the character.
    pub fn insert(&mut self, c: char, outline: GlyphOutline) -> Option<GlyphOutline> {
        self.glyphs.insert(c, outline)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl FromIterator<(char, GlyphOutline)> for GlyphTable {
    fn from_iter<I: IntoIterator<Item = (char, GlyphOutline)>>(iter: I) -> GlyphTable {
        GlyphTable {
            glyphs: iter.into_iter().collect(),
        }
    }
}

impl GlyphSource for GlyphTable {
    type GlyphId = char;

    fn glyph_for(&self, c: char) -> Option<char> {
        if self.glyphs.contains_key(&c) {
            Some(c)
        } else {
            None
        }
    }

    fn outline_path_for(&self, glyph: char) -> Path2D {
        self.glyphs
            .get(&glyph)
            .map_or_else(Path2D::new, |outline| outline.path.clone())
    }

    fn advance_width_for(&self, glyph: char) -> f64 {
        self.glyphs.get(&glyph).map_or(0., |outline| outline.advance)
    }

    fn outline_for(&self, c: char) -> Option<GlyphOutline> {
        self.glyphs.get(&c).cloned()
    }
}

#[cfg(test)]
fn bar(width: f64) -> GlyphOutline {
    use cgmath::Vector2;

    let mut path = Path2D::new();
    path.move_to(Vector2::new(0., -10.));
    path.line_to(Vector2::new(width, -10.));
    path.line_to(Vector2::new(width, 0.));
    path.close();
    GlyphOutline {
        path,
        advance: width + 1.,
    }
}

#[test]
fn lookup() {
    let table: GlyphTable = vec![('a', bar(4.)), ('b', bar(6.))].into_iter().collect();
    assert_eq!(table.len(), 2);
    assert_eq!(table.glyph_for('a'), Some('a'));
    assert_eq!(table.glyph_for('z'), None);
    assert_eq!(table.advance_width_for('b'), 7.);
    assert_eq!(table.outline_for('a'), Some(bar(4.)));
    assert!(table.outline_path_for('z').is_empty());
}

#[test]
fn cache_skips_unresolved() {
    let source: GlyphTable = vec![('x', bar(2.))].into_iter().collect();
    let cache = GlyphTable::cache_from(&source, "xxyx");
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.outline_for('x'), Some(bar(2.)));
}
