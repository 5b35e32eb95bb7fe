use crate::coords::{Affine, Rect};
use crate::graphics::Bitmap;
use crate::paint::Color;

/// Draw a bitmap's full pixel rect through `transform`.
///
/// `tint`, when set, is a color filter multiplied over every pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub bitmap: Bitmap,
    pub transform: Affine,
    pub tint: Option<Color>,
}

impl ImageCmd {
    /// Destination rect of the image in logical pixels (axis-aligned bounds).
    pub fn dest_rect(&self) -> Rect {
        let src = Rect::new(0.0, 0.0, self.bitmap.width() as f32, self.bitmap.height() as f32);
        self.transform.transform_rect(src)
    }
}

/// Solid rectangle, already in destination space.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

/// Renderer-agnostic draw command stream.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Image(ImageCmd),
    Rect(RectCmd),
}
