//! Canvases and the controllers that own them.

use crate::data::{Color, Rect, Shape};
use cgmath::Vector2;

/// A drawing surface holding shapes in back-to-front order.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    frame: Rect,
    pub background: Color,
    shapes: Vec<Shape>,
}

impl Canvas {
    /// Creates an empty white canvas.
    pub fn new(frame: Rect) -> Canvas {
        Canvas {
            frame,
            background: Color::WHITE,
            shapes: Vec::new(),
        }
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Adds a shape on top of all others and returns its index.
    pub fn add<S: Into<Shape>>(&mut self, shape: S) -> usize {
        self.shapes.push(shape.into());
        self.shapes.len() - 1
    }

    /// Removes the shape at the given index.
    pub fn remove(&mut self, index: usize) -> Option<Shape> {
        if index < self.shapes.len() {
            Some(self.shapes.remove(index))
        } else {
            None
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Returns the index of the topmost visible shape containing the point.
    pub fn shape_at(&self, point: Vector2<f64>) -> Option<usize> {
        self.shapes
            .iter()
            .rposition(|shape| shape.contains_point(point))
    }
}

/// Owns the canvas of one screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewController {
    pub canvas: Canvas,
}

impl ViewController {
    /// Creates the controller with a canvas covering the given screen bounds.
    pub fn load_view(screen_bounds: Rect) -> ViewController {
        info!("loading canvas for screen bounds {:?}", screen_bounds);
        ViewController {
            canvas: Canvas::new(screen_bounds),
        }
    }
}

#[test]
fn loads_white_canvas() {
    let controller = ViewController::load_view(Rect::new(0., 0., 320., 480.));
    assert_eq!(controller.canvas.frame(), Rect::new(0., 0., 320., 480.));
    assert_eq!(controller.canvas.background, Color::WHITE);
    assert!(controller.canvas.shapes().is_empty());
}

#[test]
fn topmost_shape_wins() {
    use crate::shapes::RegularPolygon;

    let mut controller = ViewController::load_view(Rect::new(0., 0., 320., 480.));
    let canvas = &mut controller.canvas;
    let back = canvas.add(RegularPolygon::new(Rect::new(0., 0., 100., 100.)));
    let front = canvas.add(RegularPolygon::with_sides(
        Rect::new(50., 50., 100., 100.),
        4,
        0.,
    ));

    assert_eq!(canvas.shape_at(Vector2::new(20., 50.)), Some(back));
    assert_eq!(canvas.shape_at(Vector2::new(80., 75.)), Some(front));
    assert_eq!(canvas.shape_at(Vector2::new(300., 400.)), None);

    canvas.shape_mut(front).unwrap().hidden = true;
    assert_eq!(canvas.shape_at(Vector2::new(80., 75.)), Some(back));

    assert!(canvas.remove(front).is_some());
    assert!(canvas.remove(front).is_none());
    canvas.clear();
    assert!(canvas.shapes().is_empty());
}
