use crate::data::{Color, Path2D, Rect};
use cgmath::Vector2;

/// Line width of newly created shapes.
pub const DEFAULT_LINE_WIDTH: f64 = 1.;

/// A 2D shape drawable.
///
/// The path is expressed in the shape's local coordinates, i.e. relative to the top left corner
/// of `frame`. Every call to [Shape::set_path] bumps the revision, which is how a host knows the
/// shape needs to be redrawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    path: Path2D,
    frame: Rect,
    revision: u64,
    pub line_width: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub hidden: bool,
}

impl Shape {
    /// Creates a new shape with an empty path.
    pub fn new(frame: Rect) -> Shape {
        Shape {
            path: Path2D::new(),
            frame,
            revision: 0,
            line_width: DEFAULT_LINE_WIDTH,
            fill: Some(Color::BLUE),
            stroke: Some(Color::PURPLE),
            hidden: false,
        }
    }

    pub fn path(&self) -> &Path2D {
        &self.path
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Returns the frame size at origin zero.
    pub fn bounds(&self) -> Rect {
        self.frame.bounds()
    }

    pub fn origin(&self) -> Vector2<f64> {
        self.frame.origin()
    }

    /// Returns the number of times the path has been replaced.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the path and marks the shape for redrawing.
    pub fn set_path(&mut self, path: Path2D) {
        self.path = path;
        self.revision += 1;
    }

    /// Sets the frame without touching the path.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// Moves the frame to the given origin without altering path coordinates.
    pub fn set_origin(&mut self, origin: Vector2<f64>) {
        self.frame = self.frame.with_origin(origin);
    }

    /// Resizes the frame to the path's bounding box while keeping the path at the same place in
    /// the parent's coordinate space.
    ///
    /// Does nothing if the path has no area.
    pub fn adjust_to_fit_path(&mut self) {
        let bounds = self.path.bounding_box();
        if bounds.is_degenerate() {
            debug!("not fitting shape to degenerate path bounds {:?}", bounds);
            return;
        }

        self.frame = Rect::new(
            self.frame.x + bounds.x,
            self.frame.y + bounds.y,
            bounds.width,
            bounds.height,
        );
        let mut path = self.path.clone();
        path.translate(-bounds.origin());
        self.set_path(path);
    }

    /// Hit-tests a point in the parent's coordinate space against the filled path.
    pub fn contains_point(&self, point: Vector2<f64>) -> bool {
        !self.hidden && self.path.contains_point(point - self.frame.origin())
    }
}

#[cfg(test)]
fn triangle() -> Path2D {
    let mut path = Path2D::new();
    path.move_to(Vector2::new(10., 20.));
    path.line_to(Vector2::new(30., 20.));
    path.line_to(Vector2::new(20., 40.));
    path.close();
    path
}

#[test]
fn set_path_bumps_revision() {
    let mut shape = Shape::new(Rect::new(0., 0., 50., 50.));
    assert_eq!(shape.revision(), 0);
    shape.set_path(triangle());
    assert_eq!(shape.revision(), 1);
    assert_eq!(shape.path(), &triangle());
}

#[test]
fn adjust_to_fit_preserves_geometry() {
    let mut shape = Shape::new(Rect::new(100., 100., 50., 50.));
    shape.set_path(triangle());
    shape.adjust_to_fit_path();

    assert_eq!(shape.frame(), Rect::new(110., 120., 20., 20.));
    assert_eq!(shape.path().bounding_box(), Rect::new(0., 0., 20., 20.));
    // the first vertex is still at (110, 120) in parent space
    assert_eq!(shape.path().vertices()[0] + shape.origin(), Vector2::new(110., 120.));
}

#[test]
fn adjust_to_fit_ignores_empty_path() {
    let frame = Rect::new(1., 2., 3., 4.);
    let mut shape = Shape::new(frame);
    shape.adjust_to_fit_path();
    assert_eq!(shape.frame(), frame);
    assert_eq!(shape.revision(), 0);
}

#[test]
fn set_origin_keeps_path() {
    let mut shape = Shape::new(Rect::new(5., 5., 10., 10.));
    shape.set_path(triangle());
    shape.set_origin(Vector2::new(0., 0.));
    assert_eq!(shape.frame(), Rect::new(0., 0., 10., 10.));
    assert_eq!(shape.path(), &triangle());
}

#[test]
fn hit_testing_uses_parent_space() {
    let mut shape = Shape::new(Rect::new(100., 0., 50., 50.));
    shape.set_path(triangle());
    assert!(shape.contains_point(Vector2::new(120., 25.)));
    assert!(!shape.contains_point(Vector2::new(20., 25.)));
    shape.hidden = true;
    assert!(!shape.contains_point(Vector2::new(120., 25.)));
}
