use crate::data::Path2D;
use crate::font::{FontError, GlyphOutline, GlyphSource};
use cgmath::Vector2;
use std::fs;
use std::path::Path;
use ttf_parser::{Face, GlyphId};

/// A TrueType or OpenType font at a fixed point size.
///
/// Outlines are scaled from font units to points and flipped into y-down device space, with the
/// baseline at y = 0.
#[derive(Debug, Clone)]
pub struct TtfFont {
    data: Vec<u8>,
    size: f64,
    scale: f64,
}

impl TtfFont {
    /// Loads a font from raw file contents. Only the first face of a collection is used.
    pub fn from_bytes(data: Vec<u8>, size: f64) -> Result<TtfFont, FontError> {
        if !(size > 0. && size.is_finite()) {
            return Err(FontError::InvalidSize(size));
        }

        let units_per_em = parse_face(&data)?.units_per_em();
        info!(
            "loaded font ({} bytes, {} units per em) at {}pt",
            data.len(),
            units_per_em,
            size
        );

        Ok(TtfFont {
            data,
            size,
            scale: size / f64::from(units_per_em),
        })
    }

    /// Loads a font file.
    pub fn from_file<P: AsRef<Path>>(path: P, size: f64) -> Result<TtfFont, FontError> {
        let data = fs::read(path.as_ref())?;
        TtfFont::from_bytes(data, size)
    }

    /// Returns the point size.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Returns a copy of this font at a different point size.
    pub fn with_size(&self, size: f64) -> Result<TtfFont, FontError> {
        TtfFont::from_bytes(self.data.clone(), size)
    }

    fn face(&self) -> Option<Face<'_>> {
        // already validated in from_bytes
        Face::parse(&self.data, 0).ok()
    }
}

fn parse_face(data: &[u8]) -> Result<Face<'_>, FontError> {
    Face::parse(data, 0).map_err(|err| FontError::Parse(err.to_string()))
}

impl TtfFont {
    fn outline_in(&self, face: &Face<'_>, glyph: GlyphId) -> Path2D {
        let mut sink = OutlineSink::new(self.scale);
        // glyphs without an outline (e.g. spaces) leave the path empty
        face.outline_glyph(glyph, &mut sink);
        sink.path
    }

    fn advance_in(&self, face: &Face<'_>, glyph: GlyphId) -> f64 {
        face.glyph_hor_advance(glyph)
            .map_or(0., |advance| f64::from(advance) * self.scale)
    }
}

impl GlyphSource for TtfFont {
    type GlyphId = GlyphId;

    fn glyph_for(&self, c: char) -> Option<GlyphId> {
        self.face()?.glyph_index(c)
    }

    fn outline_path_for(&self, glyph: GlyphId) -> Path2D {
        self.face()
            .map_or_else(Path2D::new, |face| self.outline_in(&face, glyph))
    }

    fn advance_width_for(&self, glyph: GlyphId) -> f64 {
        self.face().map_or(0., |face| self.advance_in(&face, glyph))
    }

    fn outline_for(&self, c: char) -> Option<GlyphOutline> {
        let face = self.face()?;
        let glyph = face.glyph_index(c)?;
        Some(GlyphOutline {
            path: self.outline_in(&face, glyph),
            advance: self.advance_in(&face, glyph),
        })
    }
}

/// Collects ttf-parser outline commands into a device-space path.
struct OutlineSink {
    path: Path2D,
    scale: f64,
}

impl OutlineSink {
    fn new(scale: f64) -> OutlineSink {
        OutlineSink {
            path: Path2D::new(),
            scale,
        }
    }

    fn point(&self, x: f32, y: f32) -> Vector2<f64> {
        Vector2::new(f64::from(x) * self.scale, -f64::from(y) * self.scale)
    }
}

impl ttf_parser::OutlineBuilder for OutlineSink {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let c = self.point(x1, y1);
        let p = self.point(x, y);
        self.path.quad_to(c, p);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let c1 = self.point(x1, y1);
        let c2 = self.point(x2, y2);
        let p = self.point(x, y);
        self.path.cubic_to(c1, c2, p);
    }

    fn close(&mut self) {
        self.path.close();
    }
}

#[cfg(test)]
fn demo_font(size: f64) -> TtfFont {
    let data = include_bytes!("testdata/demo.ttf");
    TtfFont::from_bytes(data.to_vec(), size).unwrap()
}

#[test]
fn resolves_known_glyphs() {
    let font = demo_font(10.);
    assert_eq!(font.size(), 10.);
    assert_eq!(font.glyph_for('A'), Some(GlyphId(1)));
    assert_eq!(font.glyph_for('V'), None);
    assert!(font.outline_for('V').is_none());
}

#[test]
fn advance_is_scaled_to_point_size() {
    // 540 units at 1000 units per em
    let font = demo_font(10.);
    let glyph = font.glyph_for('A').unwrap();
    assert!((font.advance_width_for(glyph) - 5.4).abs() < 1e-9);

    let large = font.with_size(100.).unwrap();
    assert!((large.advance_width_for(glyph) - 54.).abs() < 1e-9);
}

#[test]
fn outline_sits_on_the_baseline() {
    let font = demo_font(10.);
    let glyph = font.glyph_for('A').unwrap();
    let path = font.outline_path_for(glyph);
    assert!(!path.is_empty());

    // y-down: everything is at or above y = 0
    let bounds = path.bounding_box();
    assert!(bounds.max().y.abs() < 1e-9, "{:?}", bounds);
    assert!((bounds.y + 6.56).abs() < 1e-9, "{:?}", bounds);
    assert!((bounds.x - 0.06).abs() < 1e-9, "{:?}", bounds);
    assert!((bounds.width - 5.35).abs() < 1e-9, "{:?}", bounds);
}

#[test]
fn outline_for_matches_separate_lookups() {
    let font = demo_font(12.);
    let glyph = font.glyph_for('A').unwrap();
    let outline = font.outline_for('A').unwrap();
    assert_eq!(outline.path, font.outline_path_for(glyph));
    assert_eq!(outline.advance, font.advance_width_for(glyph));
}

#[test]
fn text_shape_from_font() {
    use crate::data::Rect;
    use crate::shapes::TextShape;

    let font = demo_font(10.);
    let text = TextShape::new("AV", &font);
    assert!(!text.frame().is_degenerate());
    assert_eq!(text.origin(), Vector2::new(0., 0.));
    assert_eq!(text.path().bounding_box().origin(), Vector2::new(0., 0.));

    // the second A starts one advance after the first
    let pair = TextShape::new("AA", &font);
    assert!((pair.frame().width - 10.75).abs() < 1e-9);
    assert_eq!(pair.frame().origin(), Rect::zero().origin());
}

#[test]
fn rejects_garbage() {
    match TtfFont::from_bytes(vec![0; 64], 12.) {
        Err(FontError::Parse(_)) => (),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn rejects_bad_sizes() {
    for &size in &[0., -3., std::f64::NAN, std::f64::INFINITY] {
        match TtfFont::from_bytes(Vec::new(), size) {
            Err(FontError::InvalidSize(_)) => (),
            other => panic!("expected a size error, got {:?}", other),
        }
    }
}

#[test]
fn missing_file_is_io_error() {
    match TtfFont::from_file("/nonexistent/font.ttf", 12.) {
        Err(FontError::Io(_)) => (),
        other => panic!("expected an io error, got {:?}", other),
    }
}

#[test]
fn sink_scales_and_flips() {
    use crate::data::Path2DCmd;
    use ttf_parser::OutlineBuilder;

    let mut sink = OutlineSink::new(0.5);
    sink.move_to(0., 0.);
    sink.line_to(100., 0.);
    sink.quad_to(100., 200., 0., 200.);
    sink.close();

    assert_eq!(
        sink.path.commands(),
        &[
            Path2DCmd::MoveTo(Vector2::new(0., 0.)),
            Path2DCmd::LineTo(Vector2::new(50., 0.)),
            Path2DCmd::QuadTo(Vector2::new(50., -100.), Vector2::new(0., -100.)),
            Path2DCmd::Close,
        ]
    );
}
