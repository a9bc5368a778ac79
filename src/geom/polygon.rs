//! Regular polygon paths.
//!
//! Vertices are placed on the ellipse inscribed in the rectangle. Coordinates are y-down, so
//! vertex `i` sits at `phase + i * 2π / sides` and increasing angles walk clockwise on screen,
//! starting from the rightmost point when the phase is zero.

use crate::data::{Path2D, Rect};
use cgmath::Vector2;
use std::f64::consts::PI;

/// Builds a closed regular polygon inscribed in `rect`.
///
/// The rectangle is first inset by `line_width` so a stroked outline stays inside it. Returns an
/// empty path if there are fewer than 3 sides, the phase is not finite, or nothing is left of the
/// rectangle after the inset.
pub fn build(rect: Rect, sides: usize, phase: f64, line_width: f64) -> Path2D {
    let rect = rect.inset(line_width);
    let rx = rect.width / 2.;
    let ry = rect.height / 2.;

    // NaN radii must also fall through here
    if sides < 3 || !phase.is_finite() || !(rx > 0.) || !(ry > 0.) {
        debug!(
            "skipping degenerate polygon: {} sides, phase {}, radii ({}, {})",
            sides, phase, rx, ry
        );
        return Path2D::new();
    }

    let center = rect.center();
    let delta = 2. * PI / sides as f64;
    let mut path = Path2D::new();

    for i in 0..sides {
        let angle = phase + delta * i as f64;
        let point = Vector2::new(center.x + rx * angle.cos(), center.y + ry * angle.sin());
        if i == 0 {
            path.move_to(point);
        } else {
            path.line_to(point);
        }
    }
    path.close();

    path
}

#[cfg(test)]
fn assert_close(a: Vector2<f64>, b: Vector2<f64>) {
    assert!(
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
        "{:?} != {:?}",
        a,
        b
    );
}

#[test]
fn square_in_square() {
    let path = build(Rect::new(0., 0., 100., 100.), 4, 0., 0.);
    let expected = [
        Vector2::new(100., 50.),
        Vector2::new(50., 100.),
        Vector2::new(0., 50.),
        Vector2::new(50., 0.),
    ];

    assert_eq!(path.len(), 5);
    assert_eq!(path.commands()[0], crate::data::Path2DCmd::MoveTo(path.vertices()[0]));
    assert_eq!(path.commands()[4], crate::data::Path2DCmd::Close);
    for (a, b) in path.vertices().into_iter().zip(expected.iter()) {
        assert_close(a, *b);
    }
}

#[test]
fn zero_sides_is_empty() {
    let rect = Rect::new(0., 0., 10., 10.);
    assert!(build(rect, 0, 0., 0.).is_empty());
    assert_eq!(build(rect, 0, 0., 0.), build(rect, 0, 0., 0.));
}

#[test]
fn fewer_than_three_sides_is_empty() {
    let rect = Rect::new(0., 0., 100., 100.);
    assert!(build(rect, 1, 0., 0.).is_empty());
    assert!(build(rect, 2, 0.7, 0.).is_empty());
    assert_eq!(build(rect, 3, 0., 0.).vertices().len(), 3);
}

#[test]
fn non_finite_phase_is_empty() {
    let rect = Rect::new(0., 0., 100., 100.);
    assert!(build(rect, 4, std::f64::NAN, 0.).is_empty());
    assert!(build(rect, 4, std::f64::INFINITY, 0.).is_empty());
    assert!(build(rect, 4, std::f64::NEG_INFINITY, 0.).is_empty());
}

#[test]
fn collapsed_rect_is_empty() {
    assert!(build(Rect::new(0., 0., 10., 10.), 6, 0., 5.).is_empty());
    assert!(build(Rect::new(0., 0., 0., 10.), 6, 0., 0.).is_empty());
    assert!(build(Rect::new(0., 0., 10., -3.), 6, 0., 0.).is_empty());
}

#[test]
fn vertices_lie_on_the_ellipse() {
    let rect = Rect::new(10., 20., 80., 40.);
    for sides in 3..12 {
        let path = build(rect, sides, 0.3, 0.);
        let vertices = path.vertices();
        assert_eq!(vertices.len(), sides);
        assert_eq!(path.len(), sides + 1);
        assert_eq!(path.commands().last(), Some(&crate::data::Path2DCmd::Close));

        let center = rect.center();
        for v in vertices {
            let dx = (v.x - center.x) / 40.;
            let dy = (v.y - center.y) / 20.;
            assert!((dx * dx + dy * dy - 1.).abs() < 1e-9);
        }
    }
}

#[test]
fn full_turn_phase_is_periodic() {
    let rect = Rect::new(0., 0., 30., 50.);
    let a = build(rect, 7, 0.5, 1.).vertices();
    let b = build(rect, 7, 0.5 + 2. * PI, 1.).vertices();
    for (a, b) in a.into_iter().zip(b) {
        assert_close(a, b);
    }
}

#[test]
fn stroke_stays_within_frame() {
    let rect = Rect::new(-5., 5., 60., 20.);
    for &line_width in &[0., 1., 4.5, 9.9] {
        for v in build(rect, 9, 1.1, line_width).vertices() {
            assert!(rect.contains(v), "{:?} outside {:?}", v, rect);
        }
    }
}
