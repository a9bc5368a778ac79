//! Path generation for creative-coding shapes: regular polygons and text outlines.
//!
//! All coordinates are y-down, as on screen.

#[macro_use]
extern crate failure_derive;
#[macro_use]
extern crate log;

pub mod canvas;
pub mod data;
pub mod font;
pub mod geom;
pub mod shapes;
