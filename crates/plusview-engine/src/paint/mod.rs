//! Paint model shared between drawables, the display list and the UI.

mod color;

pub use color::Color;
