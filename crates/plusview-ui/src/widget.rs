use plusview_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// What the host layout and draw loop need from a component.
///
/// Each frame the host calls [`measure`](Self::measure), then assigns the
/// final frame with [`set_frame`](Self::set_frame), then calls
/// [`draw`](Self::draw). `draw` takes `&mut self` so a widget can repair its
/// own state right before painting.
pub trait Widget: 'static {
    /// Size this widget wants given the available space.
    ///
    /// Must be deterministic; the host may call it more than once per frame.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// Receives the frame assigned by layout, in logical pixels.
    ///
    /// Called every layout pass, not only when the frame actually moved.
    fn set_frame(&mut self, _frame: Rect) {}

    /// Paints into `painter`, inside the last frame passed to `set_frame`.
    fn draw(&mut self, painter: &mut Painter<'_>);
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn measure(&self, constraints: Constraints) -> Vec2 {
        self.0.measure(constraints)
    }

    #[inline]
    pub fn set_frame(&mut self, frame: Rect) {
        self.0.set_frame(frame);
    }

    #[inline]
    pub fn draw(&mut self, painter: &mut Painter<'_>) {
        self.0.draw(painter);
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}
