use crate::data::{Color, Rect, Shape};
use crate::geom::polygon;
use std::ops::Deref;

/// Number of sides of a newly created polygon.
pub const DEFAULT_SIDES: usize = 6;

/// A regular polygon inscribed in the shape's frame.
///
/// Changing the side count, phase, frame or line width rebuilds the whole path. If the new
/// configuration is degenerate (fewer than 3 sides, or a frame too small for the line width), the
/// previous path is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularPolygon {
    shape: Shape,
    sides: usize,
    phase: f64,
}

impl RegularPolygon {
    /// Creates a hexagon filling the frame.
    pub fn new(frame: Rect) -> RegularPolygon {
        RegularPolygon::with_sides(frame, DEFAULT_SIDES, 0.)
    }

    /// Creates a polygon with the given number of sides, rotated by `phase` radians.
    pub fn with_sides(frame: Rect, sides: usize, phase: f64) -> RegularPolygon {
        let mut polygon = RegularPolygon {
            shape: Shape::new(frame),
            sides,
            phase,
        };
        polygon.rebuild();
        polygon
    }

    pub fn sides(&self) -> usize {
        self.sides
    }

    /// Rotation of the first vertex in radians.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn set_sides(&mut self, sides: usize) {
        self.sides = sides;
        self.rebuild();
    }

    pub fn set_phase(&mut self, phase: f64) {
        self.phase = phase;
        self.rebuild();
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.shape.set_frame(frame);
        self.rebuild();
    }

    pub fn set_line_width(&mut self, line_width: f64) {
        self.shape.line_width = line_width;
        self.rebuild();
    }

    pub fn set_fill(&mut self, fill: Option<Color>) {
        self.shape.fill = fill;
    }

    pub fn set_stroke(&mut self, stroke: Option<Color>) {
        self.shape.stroke = stroke;
    }

    /// Regenerates the path from the current configuration.
    pub fn rebuild(&mut self) {
        let path = polygon::build(
            self.shape.bounds(),
            self.sides,
            self.phase,
            self.shape.line_width,
        );
        if path.is_empty() {
            return;
        }

        debug!(
            "rebuilt {}-gon in {:?} with phase {}",
            self.sides,
            self.shape.frame(),
            self.phase
        );
        self.shape.set_path(path);
    }
}

impl Deref for RegularPolygon {
    type Target = Shape;

    fn deref(&self) -> &Shape {
        &self.shape
    }
}

impl From<RegularPolygon> for Shape {
    fn from(polygon: RegularPolygon) -> Shape {
        polygon.shape
    }
}

#[test]
fn defaults_to_hexagon() {
    let polygon = RegularPolygon::new(Rect::new(10., 10., 40., 40.));
    assert_eq!(polygon.sides(), 6);
    assert_eq!(polygon.path().vertices().len(), 6);
    assert_eq!(polygon.revision(), 1);
}

#[test]
fn path_is_local_to_the_frame() {
    let polygon = RegularPolygon::with_sides(Rect::new(100., 200., 100., 100.), 4, 0.);
    let expected = polygon::build(Rect::new(0., 0., 100., 100.), 4, 0., 1.);
    assert_eq!(polygon.path(), &expected);
}

#[test]
fn setters_rebuild() {
    let mut polygon = RegularPolygon::new(Rect::new(0., 0., 50., 50.));

    polygon.set_sides(3);
    assert_eq!(polygon.path().vertices().len(), 3);
    assert_eq!(polygon.revision(), 2);

    polygon.set_phase(1.);
    assert_eq!(polygon.revision(), 3);
    assert_eq!(
        polygon.path(),
        &polygon::build(Rect::new(0., 0., 50., 50.), 3, 1., 1.)
    );

    polygon.set_frame(Rect::new(0., 0., 80., 20.));
    assert_eq!(polygon.revision(), 4);
    assert_eq!(
        polygon.path(),
        &polygon::build(Rect::new(0., 0., 80., 20.), 3, 1., 1.)
    );

    polygon.set_line_width(3.);
    assert_eq!(polygon.revision(), 5);
}

#[test]
fn degenerate_configuration_keeps_previous_path() {
    let mut polygon = RegularPolygon::with_sides(Rect::new(0., 0., 50., 50.), 5, 0.);
    let before = polygon.path().clone();

    polygon.set_sides(0);
    assert_eq!(polygon.sides(), 0);
    assert_eq!(polygon.path(), &before);
    assert_eq!(polygon.revision(), 1);

    polygon.set_sides(1);
    assert_eq!(polygon.path(), &before);
    polygon.set_sides(2);
    assert_eq!(polygon.path(), &before);
    assert_eq!(polygon.revision(), 1);

    polygon.set_sides(5);
    polygon.set_line_width(30.);
    assert_eq!(polygon.path(), &before);
    assert_eq!(polygon.revision(), 2);
}

#[test]
fn degenerate_at_creation_has_no_path() {
    let polygon = RegularPolygon::with_sides(Rect::new(0., 0., 1., 1.), 8, 0.);
    assert!(polygon.path().is_empty());
    assert_eq!(polygon.revision(), 0);
    let shape: Shape = polygon.into();
    assert!(shape.path().is_empty());
}
