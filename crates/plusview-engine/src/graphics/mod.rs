//! Renderable units handed to the UI: bitmaps, drawables and layer composites.
//!
//! Every handle here is a cheap `Rc` clone and compares by identity, never by
//! pixel content. Two drawables decoded from the same file are different
//! drawables.
//!
//! Single-threaded by construction: handles are `!Send` and are meant to live
//! on the UI thread that draws them.

mod bitmap;
mod drawable;
mod layers;

pub use bitmap::Bitmap;
pub use drawable::{Drawable, DrawableKind, DrawableRef, OwnerId, ShapeDrawable};
pub use image::{Rgba, RgbaImage};
pub use layers::{Layer, LayerComposite, LayerId};
