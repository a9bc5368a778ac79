//! Data types and definitions.

mod color;
mod path;
mod rect;
mod shape;

pub use self::color::*;
pub use self::path::*;
pub use self::rect::*;
pub use self::shape::*;
