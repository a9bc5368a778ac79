use crate::data::{Rect, Shape};
use crate::font::GlyphSource;
use crate::geom::glyphs;
use cgmath::Vector2;
use std::ops::Deref;

/// A shape whose path is the outline of a line of text.
///
/// The frame tightly wraps the outline and starts at (0, 0). Text that produces no outline
/// (empty, or no character resolved) yields an empty path and a zero frame. An outline with no
/// area, such as a single hairline, is still kept.
#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    shape: Shape,
    text: String,
}

impl TextShape {
    pub fn new<S: GlyphSource + ?Sized>(text: &str, font: &S) -> TextShape {
        let (path, bounds) = glyphs::build_with_source(text, font);

        let mut shape = Shape::new(Rect::zero());
        if !path.is_empty() {
            shape.set_frame(bounds);
            shape.set_path(path);
            shape.set_origin(Vector2::new(0., 0.));
        }

        TextShape {
            shape,
            text: text.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Moves the shape without altering the outline.
    pub fn set_origin(&mut self, origin: Vector2<f64>) {
        self.shape.set_origin(origin);
    }
}

impl Deref for TextShape {
    type Target = Shape;

    fn deref(&self) -> &Shape {
        &self.shape
    }
}

impl From<TextShape> for Shape {
    fn from(text: TextShape) -> Shape {
        text.shape
    }
}

#[cfg(test)]
fn test_font() -> crate::font::GlyphTable {
    use crate::data::Path2D;
    use crate::font::GlyphOutline;

    // a descending stroke and a tall box, drawn y-down from the baseline
    let mut descender = Path2D::new();
    descender.move_to(Vector2::new(1., -8.));
    descender.line_to(Vector2::new(3., -8.));
    descender.line_to(Vector2::new(3., 4.));
    descender.close();

    let mut tall = Path2D::new();
    tall.move_to(Vector2::new(0., -14.));
    tall.line_to(Vector2::new(6., -14.));
    tall.line_to(Vector2::new(6., 0.));
    tall.line_to(Vector2::new(0., 0.));
    tall.close();

    vec![
        (
            'j',
            GlyphOutline {
                path: descender,
                advance: 4.,
            },
        ),
        (
            'H',
            GlyphOutline {
                path: tall,
                advance: 8.,
            },
        ),
    ]
    .into_iter()
    .collect()
}

#[test]
fn frame_wraps_outline_at_origin() {
    let text = TextShape::new("jH", &test_font());
    assert_eq!(text.text(), "jH");
    assert_eq!(text.frame(), Rect::new(0., 0., 9., 18.));
    assert_eq!(text.path().bounding_box(), text.bounds());
    assert_eq!(text.revision(), 1);
}

#[test]
fn empty_text_renders_nothing() {
    let text = TextShape::new("", &test_font());
    assert!(text.path().is_empty());
    assert!(text.frame().is_degenerate());
    assert_eq!(text.revision(), 0);

    let unresolved = TextShape::new("xyz", &test_font());
    assert!(unresolved.path().is_empty());
    assert_eq!(unresolved.frame(), Rect::zero());
}

#[test]
fn hairline_outline_is_kept() {
    use crate::data::Path2D;
    use crate::font::{GlyphOutline, GlyphTable};

    let mut rule = Path2D::new();
    rule.move_to(Vector2::new(0., -3.));
    rule.line_to(Vector2::new(10., -3.));
    let font: GlyphTable = vec![(
        '_',
        GlyphOutline {
            path: rule,
            advance: 10.,
        },
    )]
    .into_iter()
    .collect();

    let text = TextShape::new("_", &font);
    assert_eq!(text.path().len(), 2);
    assert_eq!(text.frame(), Rect::new(0., 0., 10., 0.));
    assert_eq!(text.revision(), 1);
}

#[test]
fn moving_keeps_the_outline() {
    let mut text = TextShape::new("H", &test_font());
    let path = text.path().clone();
    text.set_origin(Vector2::new(20., 30.));
    assert_eq!(text.frame(), Rect::new(20., 30., 6., 14.));
    assert_eq!(text.path(), &path);
}
