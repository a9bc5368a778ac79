use crate::data::Rect;
use cgmath::{Vector2, Zero};
use lyon::math::Point;
use lyon::path::builder::{FlatPathBuilder, PathBuilder};
use lyon::path::{self, PathEvent};
use std::mem;

/// Tolerance used when flattening curves to line segments.
pub const CURVE_TOLERANCE: f32 = 0.1;

/// Curve parameters closer than this to zero are treated as degenerate.
const EPSILON: f64 = 1e-12;

/// Two-dimensional path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path2D(Vec<Path2DCmd>);

/// Path2D commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Path2DCmd {
    /// Start a new subpath at a point (analogous to SVG M).
    MoveTo(Vector2<f64>),

    /// Line to a point (analogous to SVG L).
    LineTo(Vector2<f64>),

    /// Quadratic Bézier curve (analogous to SVG Q).
    QuadTo(Vector2<f64>, Vector2<f64>),

    /// Cubic bézier curve (analogous to SVG C).
    CubicTo(Vector2<f64>, Vector2<f64>, Vector2<f64>),

    /// Close the current subpath (analogous to SVG Z).
    Close,
}

impl Path2D {
    /// Creates a new empty path.
    pub fn new() -> Path2D {
        Path2D(Vec::new())
    }

    /// Returns a reference to the list of path commands.
    pub fn commands(&self) -> &[Path2DCmd] {
        &self.0
    }

    /// Returns a mutable reference to the path commands.
    pub fn commands_mut(&mut self) -> &mut Vec<Path2DCmd> {
        &mut self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn move_to(&mut self, p: Vector2<f64>) {
        self.0.push(Path2DCmd::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Vector2<f64>) {
        self.0.push(Path2DCmd::LineTo(p));
    }

    pub fn quad_to(&mut self, c: Vector2<f64>, p: Vector2<f64>) {
        self.0.push(Path2DCmd::QuadTo(c, p));
    }

    pub fn cubic_to(&mut self, c1: Vector2<f64>, c2: Vector2<f64>, p: Vector2<f64>) {
        self.0.push(Path2DCmd::CubicTo(c1, c2, p));
    }

    pub fn close(&mut self) {
        self.0.push(Path2DCmd::Close);
    }

    /// Returns the end point of every command that has one, in order.
    pub fn vertices(&self) -> Vec<Vector2<f64>> {
        self.0.iter().filter_map(|cmd| cmd.end_point()).collect()
    }

    /// Remaps all points (including control points) using the given closure.
    pub fn remap_points<F: FnMut(&mut Vector2<f64>)>(&mut self, mut f: F) {
        for cmd in &mut self.0 {
            cmd.remap_points(&mut f);
        }
    }

    /// Moves every point by the given offset.
    pub fn translate(&mut self, offset: Vector2<f64>) {
        self.remap_points(|p| *p += offset);
    }

    /// Returns a copy moved by the given offset.
    pub fn translated(&self, offset: Vector2<f64>) -> Path2D {
        let mut path = self.clone();
        path.translate(offset);
        path
    }

    /// Scales every point about the origin.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.remap_points(|p| {
            p.x *= sx;
            p.y *= sy;
        });
    }

    /// Appends all commands of another path, moved by the given offset.
    ///
    /// The appended commands keep their own structure; nothing is renormalized.
    pub fn append(&mut self, other: &Path2D, offset: Vector2<f64>) {
        self.0.reserve(other.0.len());
        for cmd in &other.0 {
            let mut cmd = *cmd;
            cmd.remap_points(&mut |p: &mut Vector2<f64>| *p += offset);
            self.0.push(cmd);
        }
    }

    /// Returns the tight bounding box of the path, including curve extrema (but not control
    /// points that lie outside the curve).
    ///
    /// Returns a zero rect for an empty path.
    pub fn bounding_box(&self) -> Rect {
        let mut bounds = Bounds::new();
        let mut current = Vector2::zero();
        let mut start = current;

        for cmd in &self.0 {
            match *cmd {
                Path2DCmd::MoveTo(p) => {
                    bounds.include(p);
                    start = p;
                    current = p;
                }
                Path2DCmd::LineTo(p) => {
                    bounds.include(p);
                    current = p;
                }
                Path2DCmd::QuadTo(c, p) => {
                    for t in quad_extrema(current, c, p) {
                        bounds.include(quad_point(current, c, p, t));
                    }
                    bounds.include(p);
                    current = p;
                }
                Path2DCmd::CubicTo(c1, c2, p) => {
                    for t in cubic_extrema(current, c1, c2, p) {
                        bounds.include(cubic_point(current, c1, c2, p, t));
                    }
                    bounds.include(p);
                    current = p;
                }
                Path2DCmd::Close => current = start,
            }
        }

        bounds.into_rect()
    }

    /// Flattens this path to vertices. Each embedded Vec is one contiguous shape separated by move
    /// commands.
    pub fn flatten_to_verts(&self) -> Vec<Vec<Vector2<f32>>> {
        let mut builder = path::default::Path::builder().flattened(CURVE_TOLERANCE);
        let mut needs_move = true;
        let mut current = Vector2::zero();
        let mut start = current;

        for command in &self.0 {
            // lyon needs an explicit move before the first drawing command of a subpath
            if needs_move && command.is_drawing() {
                builder.move_to(to_point(current));
                start = current;
            }
            needs_move = false;

            match *command {
                Path2DCmd::MoveTo(v) => {
                    builder.move_to(to_point(v));
                    start = v;
                }
                Path2DCmd::LineTo(v) => builder.line_to(to_point(v)),
                Path2DCmd::QuadTo(c, p) => builder.quadratic_bezier_to(to_point(c), to_point(p)),
                Path2DCmd::CubicTo(c1, c2, p) => {
                    builder.cubic_bezier_to(to_point(c1), to_point(c2), to_point(p))
                }
                Path2DCmd::Close => {
                    builder.close();
                    needs_move = true;
                }
            }

            current = match command.end_point() {
                Some(p) => p,
                None => start,
            };
        }

        let path = builder.build();

        let mut groups = Vec::new();
        let mut group = Vec::new();
        let mut group_start = None;

        for event in path.path_iter() {
            match event {
                PathEvent::MoveTo(p) => {
                    group_start = Some(p);
                    let old_group = mem::replace(&mut group, Vec::new());
                    if !old_group.is_empty() {
                        groups.push(old_group);
                    }
                    group.push(Vector2::new(p.x, p.y));
                }
                PathEvent::LineTo(p) => group.push(Vector2::new(p.x, p.y)),
                PathEvent::Close => {
                    if let Some(p) = group_start {
                        group.push(Vector2::new(p.x, p.y));
                        group_start = None;
                        groups.push(mem::replace(&mut group, Vec::new()));
                    }
                }
                // the flattening builder only emits moves, lines and closes
                _ => (),
            }
        }

        if !group.is_empty() {
            groups.push(group);
        }

        groups
    }

    /// Returns true if the point is inside the filled path (nonzero winding rule).
    ///
    /// Open subpaths are treated as implicitly closed, like a fill would.
    pub fn contains_point(&self, point: Vector2<f64>) -> bool {
        let point = Vector2::new(point.x as f32, point.y as f32);
        let winding: i32 = self
            .flatten_to_verts()
            .iter()
            .map(|contour| winding_number(contour, point))
            .sum();
        winding != 0
    }
}

impl From<Vec<Path2DCmd>> for Path2D {
    fn from(t: Vec<Path2DCmd>) -> Path2D {
        Path2D(t)
    }
}

impl Path2DCmd {
    /// Remaps points using the given closure.
    pub fn remap_points<F: FnMut(&mut Vector2<f64>)>(&mut self, f: &mut F) {
        match self {
            Path2DCmd::MoveTo(a) | Path2DCmd::LineTo(a) => f(a),
            Path2DCmd::QuadTo(a, b) => {
                f(a);
                f(b);
            }
            Path2DCmd::CubicTo(a, b, c) => {
                f(a);
                f(b);
                f(c);
            }
            Path2DCmd::Close => (),
        }
    }

    /// Returns the point this command ends at, if it has one.
    pub fn end_point(&self) -> Option<Vector2<f64>> {
        match *self {
            Path2DCmd::MoveTo(v)
            | Path2DCmd::LineTo(v)
            | Path2DCmd::QuadTo(_, v)
            | Path2DCmd::CubicTo(_, _, v) => Some(v),
            Path2DCmd::Close => None,
        }
    }

    fn is_drawing(&self) -> bool {
        match self {
            Path2DCmd::MoveTo(_) | Path2DCmd::Close => false,
            _ => true,
        }
    }
}

fn to_point(v: Vector2<f64>) -> Point {
    Point::new(v.x as f32, v.y as f32)
}

/// Running min/max accumulator.
struct Bounds(Option<(Vector2<f64>, Vector2<f64>)>);

impl Bounds {
    fn new() -> Bounds {
        Bounds(None)
    }

    fn include(&mut self, p: Vector2<f64>) {
        self.0 = Some(match self.0 {
            Some((min, max)) => (
                Vector2::new(min.x.min(p.x), min.y.min(p.y)),
                Vector2::new(max.x.max(p.x), max.y.max(p.y)),
            ),
            None => (p, p),
        });
    }

    fn into_rect(self) -> Rect {
        match self.0 {
            Some((min, max)) => Rect::from_corners(min, max),
            None => Rect::zero(),
        }
    }
}

fn quad_point(p0: Vector2<f64>, c: Vector2<f64>, p1: Vector2<f64>, t: f64) -> Vector2<f64> {
    let mt = 1. - t;
    p0 * (mt * mt) + c * (2. * mt * t) + p1 * (t * t)
}

fn cubic_point(
    p0: Vector2<f64>,
    c1: Vector2<f64>,
    c2: Vector2<f64>,
    p1: Vector2<f64>,
    t: f64,
) -> Vector2<f64> {
    let mt = 1. - t;
    p0 * (mt * mt * mt) + c1 * (3. * mt * mt * t) + c2 * (3. * mt * t * t) + p1 * (t * t * t)
}

fn in_open_unit(t: f64) -> bool {
    t > 0. && t < 1.
}

/// Parameters in (0, 1) where a quadratic Bézier has an extremum on either axis.
fn quad_extrema(p0: Vector2<f64>, c: Vector2<f64>, p1: Vector2<f64>) -> Vec<f64> {
    let mut ts = Vec::new();
    for &(a, b, d) in &[(p0.x, c.x, p1.x), (p0.y, c.y, p1.y)] {
        let denom = a - 2. * b + d;
        if denom.abs() > EPSILON {
            let t = (a - b) / denom;
            if in_open_unit(t) {
                ts.push(t);
            }
        }
    }
    ts
}

/// Parameters in (0, 1) where a cubic Bézier has an extremum on either axis.
fn cubic_extrema(
    p0: Vector2<f64>,
    c1: Vector2<f64>,
    c2: Vector2<f64>,
    p1: Vector2<f64>,
) -> Vec<f64> {
    let mut ts = Vec::new();
    for &(q0, q1, q2, q3) in &[(p0.x, c1.x, c2.x, p1.x), (p0.y, c1.y, c2.y, p1.y)] {
        // derivative / 3 = a t² + b t + c
        let d0 = q1 - q0;
        let d1 = q2 - q1;
        let d2 = q3 - q2;
        let a = d0 - 2. * d1 + d2;
        let b = 2. * (d1 - d0);
        let c = d0;

        if a.abs() < EPSILON {
            if b.abs() > EPSILON {
                ts.push(-c / b);
            }
            continue;
        }

        let disc = b * b - 4. * a * c;
        if disc < 0. {
            continue;
        }
        let sqrt = disc.sqrt();
        ts.push((-b + sqrt) / (2. * a));
        ts.push((-b - sqrt) / (2. * a));
    }
    ts.retain(|t| in_open_unit(*t));
    ts
}

fn winding_number(contour: &[Vector2<f32>], p: Vector2<f32>) -> i32 {
    let is_left = |a: Vector2<f32>, b: Vector2<f32>| {
        (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
    };

    let mut winding = 0;
    for i in 0..contour.len() {
        let a = contour[i];
        let b = contour[(i + 1) % contour.len()];
        if a.y <= p.y {
            if b.y > p.y && is_left(a, b) > 0. {
                winding += 1;
            }
        } else if b.y <= p.y && is_left(a, b) < 0. {
            winding -= 1;
        }
    }
    winding
}

#[cfg(test)]
fn square(x: f64, y: f64, size: f64) -> Path2D {
    let mut path = Path2D::new();
    path.move_to(Vector2::new(x, y));
    path.line_to(Vector2::new(x + size, y));
    path.line_to(Vector2::new(x + size, y + size));
    path.line_to(Vector2::new(x, y + size));
    path.close();
    path
}

#[test]
fn empty_path_has_zero_bounds() {
    let path = Path2D::new();
    assert!(path.is_empty());
    assert_eq!(path.bounding_box(), Rect::zero());
    assert!(path.flatten_to_verts().is_empty());
}

#[test]
fn line_bounds() {
    assert_eq!(square(2., 3., 4.).bounding_box(), Rect::new(2., 3., 4., 4.));
}

#[test]
fn curve_bounds_are_tight() {
    // the control point sits at y = 10, but the curve only reaches y = 5
    let mut path = Path2D::new();
    path.move_to(Vector2::new(0., 0.));
    path.quad_to(Vector2::new(5., 10.), Vector2::new(10., 0.));
    path.close();
    let bounds = path.bounding_box();
    assert!((bounds.height - 5.).abs() < 1e-9, "{:?}", bounds);
    assert!((bounds.width - 10.).abs() < 1e-9, "{:?}", bounds);

    // symmetric cubic: extremum at t = 0.5 is 0.75 of the control height
    let mut path = Path2D::new();
    path.move_to(Vector2::new(0., 0.));
    path.cubic_to(
        Vector2::new(0., -8.),
        Vector2::new(10., -8.),
        Vector2::new(10., 0.),
    );
    let bounds = path.bounding_box();
    assert!((bounds.y + 6.).abs() < 1e-9, "{:?}", bounds);
    assert!((bounds.height - 6.).abs() < 1e-9, "{:?}", bounds);
}

#[test]
fn append_offsets_without_renormalizing() {
    let mut path = square(0., 0., 1.);
    path.append(&square(0., 0., 1.), Vector2::new(3., 0.));
    assert_eq!(path.len(), 10);
    assert_eq!(path.commands()[5], Path2DCmd::MoveTo(Vector2::new(3., 0.)));
    assert_eq!(path.commands()[9], Path2DCmd::Close);
    assert_eq!(path.bounding_box(), Rect::new(0., 0., 4., 1.));
}

#[test]
fn translate_and_scale() {
    let mut path = square(1., 1., 2.);
    path.translate(Vector2::new(-1., -1.));
    path.scale(2., -1.);
    assert_eq!(path.bounding_box(), Rect::new(0., -2., 4., 2.));
}

#[test]
fn flattening_closes_contours() {
    let groups = square(0., 0., 10.).flatten_to_verts();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].first(), groups[0].last());
}

#[test]
fn nonzero_containment() {
    let path = square(0., 0., 10.);
    assert!(path.contains_point(Vector2::new(5., 5.)));
    assert!(!path.contains_point(Vector2::new(15., 5.)));
    assert!(!path.contains_point(Vector2::new(5., -1.)));
}
