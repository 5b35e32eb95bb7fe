use plusview_engine::coords::Vec2;

/// Size bounds handed to [`Widget::measure`](crate::widget::Widget::measure).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Anything from zero up to `max`.
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    pub fn unbounded() -> Self {
        Self::loose(Vec2::new(f32::INFINITY, f32::INFINITY))
    }

    /// `size` clamped per axis into `[min, max]`.
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        let axis = |v: f32, lo: f32, hi: f32| v.max(lo).min(hi);
        Vec2::new(axis(size.x, self.min.x, self.max.x), axis(size.y, self.min.y, self.max.y))
    }
}
