//! plusview engine crate.
//!
//! Owns the host-independent pieces the image widget builds on: geometry,
//! paint, drawables and their backing bitmaps, decoding, the recorded
//! display list, and logger initialization.

pub mod coords;
pub mod decode;
pub mod graphics;
pub mod logging;
pub mod paint;
pub mod scene;
