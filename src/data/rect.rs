use cgmath::Vector2;

/// An axis-aligned rectangle.
///
/// Coordinates are y-down: `y` is the top edge and `y + height` the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// The zero-sized rectangle at the origin.
    pub fn zero() -> Rect {
        Rect::default()
    }

    /// Creates the smallest rectangle that contains both corner points.
    pub fn from_corners(min: Vector2<f64>, max: Vector2<f64>) -> Rect {
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn origin(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vector2<f64> {
        Vector2::new(self.width, self.height)
    }

    pub fn max(&self) -> Vector2<f64> {
        Vector2::new(self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(self.x + self.width / 2., self.y + self.height / 2.)
    }

    /// Returns the same size at origin zero (i.e. the local coordinate space of a frame).
    pub fn bounds(&self) -> Rect {
        Rect::new(0., 0., self.width, self.height)
    }

    /// Returns a copy moved to the given origin.
    pub fn with_origin(&self, origin: Vector2<f64>) -> Rect {
        Rect::new(origin.x, origin.y, self.width, self.height)
    }

    /// Shrinks all four edges by `by`. Negative values grow the rectangle.
    ///
    /// The result may have a non-positive width or height.
    pub fn inset(&self, by: f64) -> Rect {
        Rect::new(
            self.x + by,
            self.y + by,
            self.width - 2. * by,
            self.height - 2. * by,
        )
    }

    /// Returns true if the width or the height is not positive.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0. && self.height > 0.)
    }

    /// Returns true if the point lies inside or on the edge of this rectangle.
    pub fn contains(&self, point: Vector2<f64>) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x <= self.x + self.width
            && point.y <= self.y + self.height
    }

    /// Returns the smallest rectangle containing both rectangles.
    pub fn union(&self, other: &Rect) -> Rect {
        let a = self.max();
        let b = other.max();
        Rect::from_corners(
            Vector2::new(self.x.min(other.x), self.y.min(other.y)),
            Vector2::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }
}

impl From<(f64, f64, f64, f64)> for Rect {
    fn from(i: (f64, f64, f64, f64)) -> Rect {
        Rect::new(i.0, i.1, i.2, i.3)
    }
}

#[test]
fn inset_shrinks_symmetrically() {
    let rect = Rect::new(10., 20., 100., 50.).inset(5.);
    assert_eq!(rect, Rect::new(15., 25., 90., 40.));
    assert_eq!(rect.center(), Rect::new(10., 20., 100., 50.).center());

    let collapsed = Rect::new(0., 0., 10., 10.).inset(5.);
    assert!(collapsed.is_degenerate());
}

#[test]
fn union_and_contains() {
    let a = Rect::new(0., 0., 10., 10.);
    let b = Rect::new(5., -5., 10., 10.);
    let u = a.union(&b);
    assert_eq!(u, Rect::new(0., -5., 15., 15.));
    assert!(u.contains(Vector2::new(14., -4.)));
    assert!(!a.contains(Vector2::new(11., 5.)));
    assert_eq!(a.bounds(), a);
    assert_eq!(b.bounds(), Rect::new(0., 0., 10., 10.));
}
