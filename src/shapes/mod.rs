//! Shapes that generate their own paths.
//!
//! These are plain owned values with no internal locking. Setters rebuild the path synchronously,
//! so a shape shared between threads must be wrapped in a lock by whoever shares it.

mod polygon;
mod text;

pub use self::polygon::*;
pub use self::text::*;
