//! Detection of drawables whose backing bitmap has been released.

use plusview_engine::graphics::{Bitmap, DrawableKind, DrawableRef};

/// Returns `true` if drawing `drawable` would touch released pixels.
///
/// A bitmap drawable is invalid once its bitmap is recycled. A composite is
/// invalid if any of its direct layers is a recycled bitmap; nested
/// composites are not searched. Anything else is always valid.
pub fn is_invalidated(drawable: &DrawableRef) -> bool {
    match drawable.kind() {
        DrawableKind::Bitmap(bitmap) => bitmap.is_recycled(),
        DrawableKind::Layers(layers) => layers
            .drawables()
            .iter()
            .any(|layer| layer.as_bitmap().is_some_and(Bitmap::is_recycled)),
        DrawableKind::Shape(_) => false,
    }
}
