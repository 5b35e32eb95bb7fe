//! Coordinate and geometry types shared by the engine and UI.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down

mod affine;
mod rect;
mod vec2;

pub use affine::Affine;
pub use rect::Rect;
pub use vec2::Vec2;
