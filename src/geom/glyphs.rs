//! Text outlines.
//!
//! Glyph outlines are laid out left to right on a single baseline and merged into one path.
//! Characters without a glyph are skipped and do not move the pen.

use crate::data::{Path2D, Rect};
use crate::font::{GlyphOutline, GlyphSource};
use cgmath::Vector2;

/// Lays out `text` and merges all glyph outlines into a single path.
///
/// Returns the path moved so that its bounding box starts at (0, 0), along with that bounding box
/// in pen coordinates (where the first glyph's origin is at (0, 0)). If nothing could be drawn,
/// returns an empty path and a zero rect.
pub fn build<F>(text: &str, mut lookup: F) -> (Path2D, Rect)
where
    F: FnMut(char) -> Option<GlyphOutline>,
{
    let mut path = Path2D::new();
    let mut origin = Vector2::new(0., 0.);

    for c in text.chars() {
        match lookup(c) {
            Some(glyph) => {
                path.append(&glyph.path, origin);
                origin.x += glyph.advance;
            }
            None => trace!("no glyph for {:?}, skipping", c),
        }
    }

    if path.is_empty() {
        debug!("text {:?} produced no outline", text);
        return (Path2D::new(), Rect::zero());
    }

    let bounds = path.bounding_box();
    path.translate(-bounds.origin());
    (path, bounds)
}

/// Lays out `text` using outlines from a glyph source.
pub fn build_with_source<S: GlyphSource + ?Sized>(text: &str, source: &S) -> (Path2D, Rect) {
    build(text, |c| source.outline_for(c))
}

#[cfg(test)]
fn block(width: f64, height: f64, advance: f64) -> GlyphOutline {
    let mut path = Path2D::new();
    path.move_to(Vector2::new(0., -height));
    path.line_to(Vector2::new(width, -height));
    path.line_to(Vector2::new(width, 0.));
    path.line_to(Vector2::new(0., 0.));
    path.close();
    GlyphOutline { path, advance }
}

#[cfg(test)]
fn lookup(c: char) -> Option<GlyphOutline> {
    match c {
        'A' => Some(block(8., 10., 10.)),
        'B' => Some(block(6., 12., 7.)),
        ' ' => Some(GlyphOutline {
            path: Path2D::new(),
            advance: 5.,
        }),
        _ => None,
    }
}

#[test]
fn empty_text() {
    let (path, bounds) = build("", lookup);
    assert!(path.is_empty());
    assert_eq!(bounds, Rect::zero());
    assert!(bounds.is_degenerate());
}

#[test]
fn all_unresolved() {
    let (path, bounds) = build("???", lookup);
    assert!(path.is_empty());
    assert_eq!(bounds, Rect::zero());
}

#[test]
fn second_glyph_is_advanced() {
    let (path, bounds) = build("AB", lookup);
    assert_eq!(path.len(), 10);
    assert_eq!(bounds, Rect::new(0., -12., 16., 12.));

    // each glyph starts with its own move; the box origin shift applies to both equally
    let a_start = path.commands()[0].end_point().unwrap();
    let b_start = path.commands()[5].end_point().unwrap();
    assert_eq!(b_start.x - a_start.x, 10.);
    assert_eq!(b_start.y - a_start.y, -2.);
}

#[test]
fn path_is_relative_to_its_bounds() {
    let (path, bounds) = build("B", lookup);
    assert_eq!(bounds, Rect::new(0., -12., 6., 12.));
    assert_eq!(path.bounding_box(), Rect::new(0., 0., 6., 12.));
}

#[test]
fn unresolved_characters_do_not_advance() {
    let (with_gap, _) = build("A?B", lookup);
    let (without, _) = build("AB", lookup);
    assert_eq!(with_gap, without);

    // but resolved blank glyphs do
    let (spaced, bounds) = build("A B", lookup);
    assert_eq!(bounds.width, 21.);
    assert_ne!(spaced, without);
}

#[test]
fn glyph_source_lookup() {
    use crate::font::GlyphTable;

    let table: GlyphTable = vec![('A', block(8., 10., 10.))].into_iter().collect();
    let (path, bounds) = build_with_source("AA", &table);
    assert_eq!(bounds, Rect::new(0., -10., 18., 10.));
    assert_eq!(path.vertices().len(), 8);
}
