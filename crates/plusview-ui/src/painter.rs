use plusview_engine::coords::{Affine, Rect};
use plusview_engine::graphics::{DrawableKind, DrawableRef};
use plusview_engine::paint::Color;
use plusview_engine::scene::{DrawCmd, DrawList, ImageCmd, RectCmd, ZIndex};

/// Drawing surface passed to [`Widget::draw`](crate::widget::Widget::draw).
///
/// Wraps the engine's `DrawList` and turns drawables into draw commands.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        self.draw_list.push(z, DrawCmd::Rect(RectCmd { rect, color }));
    }

    /// Draws `drawable` laid out in `layout` (drawable space), mapped to the
    /// destination by `transform`.
    ///
    /// Bitmaps stretch to `layout`; shapes fill it; composites draw each
    /// layer into the same `layout`, back to front. A released bitmap is
    /// skipped rather than drawn.
    pub fn draw_drawable(
        &mut self,
        drawable: &DrawableRef,
        layout: Rect,
        transform: Affine,
        tint: Option<Color>,
    ) {
        match drawable.kind() {
            DrawableKind::Bitmap(bitmap) => {
                if bitmap.is_recycled() {
                    log::warn!("skipping draw of recycled bitmap {:?}", bitmap);
                    return;
                }
                if bitmap.width() == 0 || bitmap.height() == 0 {
                    return;
                }
                let fit = Affine::scale_non_uniform(
                    layout.width() / bitmap.width() as f32,
                    layout.height() / bitmap.height() as f32,
                )
                .then(Affine::translate(layout.origin))
                .then(transform);
                let z = self.next_z();
                self.draw_list.push(
                    z,
                    DrawCmd::Image(ImageCmd { bitmap: bitmap.clone(), transform: fit, tint }),
                );
            }
            DrawableKind::Shape(shape) => {
                self.fill_rect(transform.transform_rect(layout), shape.color);
            }
            DrawableKind::Layers(layers) => {
                for layer in layers.drawables() {
                    self.draw_drawable(&layer, layout, transform, tint);
                }
            }
        }
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a scissor region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plusview_engine::coords::Vec2;
    use plusview_engine::graphics::{Bitmap, LayerComposite, ShapeDrawable};

    #[test]
    fn bitmap_stretches_to_layout_then_transforms() {
        let mut list = DrawList::new();
        let bmp = Bitmap::solid(10, 5, [1, 2, 3, 255]);
        let d = DrawableRef::bitmap(bmp.clone());
        Painter::new(&mut list).draw_drawable(
            &d,
            Rect::new(0.0, 0.0, 20.0, 20.0),
            Affine::translate(Vec2::new(5.0, 5.0)),
            None,
        );

        let DrawCmd::Image(cmd) = &list.items()[0].cmd else { panic!("expected image") };
        assert_eq!(cmd.bitmap, bmp);
        assert_eq!(cmd.dest_rect(), Rect::new(5.0, 5.0, 20.0, 20.0));
    }

    #[test]
    fn recycled_bitmap_is_not_recorded() {
        let mut list = DrawList::new();
        let bmp = Bitmap::solid(1, 1, [0; 4]);
        bmp.recycle();
        Painter::new(&mut list).draw_drawable(
            &DrawableRef::bitmap(bmp),
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Affine::IDENTITY,
            None,
        );
        assert!(list.is_empty());
    }

    #[test]
    fn composite_draws_layers_back_to_front() {
        let mut list = DrawList::new();
        let red = Color::from_straight(1.0, 0.0, 0.0, 1.0);
        let layers = LayerComposite::new()
            .with_layer(None, DrawableRef::shape(ShapeDrawable::rect(red)))
            .with_layer(None, DrawableRef::bitmap(Bitmap::solid(2, 2, [0; 4])));
        Painter::new(&mut list).draw_drawable(
            &DrawableRef::layers(layers),
            Rect::new(0.0, 0.0, 4.0, 4.0),
            Affine::IDENTITY,
            None,
        );

        let items = list.in_paint_order();
        assert_eq!(items.len(), 2);
        assert!(matches!(&items[0].cmd, DrawCmd::Rect(r) if r.color == red));
        assert!(matches!(&items[1].cmd, DrawCmd::Image(_)));
    }
}
