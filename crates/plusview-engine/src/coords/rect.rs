use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Layout hands widgets their frame as left/top/right/bottom edges; use
/// [`Rect::from_ltrb`] and the edge accessors when working in that form.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Builds a rect from its four edges. Inverted edges produce a negative
    /// size; call [`normalized`](Self::normalized) if that matters.
    #[inline]
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.y
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let (l, r) = if self.size.x < 0.0 { (self.right(), self.left()) } else { (self.left(), self.right()) };
        let (t, b) = if self.size.y < 0.0 { (self.bottom(), self.top()) } else { (self.top(), self.bottom()) };
        Rect::from_ltrb(l, t, r, b)
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let l = a.left().max(b.left());
        let t = a.top().max(b.top());
        let r = a.right().min(b.right());
        let btm = a.bottom().min(b.bottom());

        if r <= l || btm <= t {
            None
        } else {
            Some(Rect::from_ltrb(l, t, r, btm))
        }
    }
}
