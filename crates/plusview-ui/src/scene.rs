use plusview_engine::coords::{Rect, Vec2};
use plusview_engine::scene::DrawList;

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Element;

/// Frame driver: lays out a root widget in the viewport and records its draw
/// commands.
///
/// # Example
///
/// ```rust,ignore
/// let mut scene = UiScene::new();
/// let mut root = Element::new(view);
/// let draw_list = scene.frame(&mut root, Vec2::new(320.0, 240.0));
/// renderer.render(draw_list);
/// ```
#[derive(Debug, Default)]
pub struct UiScene {
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure, place and draw `root` for one frame.
    ///
    /// The root always occupies the full viewport; measuring is only a
    /// pre-pass. The returned list is valid until the next call.
    pub fn frame(&mut self, root: &mut Element, viewport: Vec2) -> &DrawList {
        self.draw_list.clear();

        // ── layout ────────────────────────────────────────────────────────
        let _ = root.measure(Constraints::loose(viewport));
        root.set_frame(Rect::new(0.0, 0.0, viewport.x, viewport.y));

        // ── draw ──────────────────────────────────────────────────────────
        let mut painter = Painter::new(&mut self.draw_list);
        root.draw(&mut painter);

        &self.draw_list
    }
}
