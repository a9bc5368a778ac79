//! Shape colors.

/// A straight-alpha RGBA color with components in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const CLEAR: Color = Color::rgba(0., 0., 0., 0.);

    /// Opaque black.
    pub const BLACK: Color = Color::rgba(0., 0., 0., 1.);

    /// Opaque white.
    pub const WHITE: Color = Color::rgba(1., 1., 1., 1.);

    /// Default shape fill.
    pub const BLUE: Color = Color::rgba(0.196, 0.608, 0.847, 1.);

    /// Default shape stroke.
    pub const PURPLE: Color = Color::rgba(0.376, 0.341, 0.651, 1.);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Color {
        Color::rgba(r, g, b, 1.)
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Color {
        Color::rgb(r as f32 / 255., g as f32 / 255., b as f32 / 255.)
    }

    /// Returns this color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Color {
        Color { a, ..self }
    }
}

impl From<[f32; 4]> for Color {
    fn from(i: [f32; 4]) -> Color {
        Color::rgba(i[0], i[1], i[2], i[3])
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> [f32; 4] {
        [c.r, c.g, c.b, c.a]
    }
}

#[test]
fn from_rgb8_is_opaque() {
    let color = Color::from_rgb8(255, 0, 51);
    assert_eq!(color, Color::rgb(1., 0., 0.2));
    assert_eq!(<[f32; 4]>::from(color.with_alpha(0.5))[3], 0.5);
}
