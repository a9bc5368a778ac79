//! Stateless path builders.

pub mod glyphs;
pub mod polygon;
