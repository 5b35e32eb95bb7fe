use core::ops::Mul;

use super::{Rect, Vec2};

/// 2D affine transform, stored as the first two rows of a 3×3 matrix:
///
/// ```text
/// | sx  kx  tx |
/// | ky  sy  ty |
/// ```
///
/// Points are column vectors, so `a * b` applies `b` first, then `a`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    pub sx: f32,
    pub kx: f32,
    pub tx: f32,
    pub ky: f32,
    pub sy: f32,
    pub ty: f32,
}

impl Affine {
    pub const IDENTITY: Affine = Affine { sx: 1.0, kx: 0.0, tx: 0.0, ky: 0.0, sy: 1.0, ty: 0.0 };

    #[inline]
    pub const fn scale(s: f32) -> Self {
        Self::scale_non_uniform(s, s)
    }

    #[inline]
    pub const fn scale_non_uniform(sx: f32, sy: f32) -> Self {
        Affine { sx, kx: 0.0, tx: 0.0, ky: 0.0, sy, ty: 0.0 }
    }

    #[inline]
    pub const fn translate(offset: Vec2) -> Self {
        Affine { sx: 1.0, kx: 0.0, tx: offset.x, ky: 0.0, sy: 1.0, ty: offset.y }
    }

    /// Returns a transform that applies `self`, then `next`.
    #[inline]
    #[must_use]
    pub fn then(self, next: Affine) -> Affine {
        next * self
    }

    #[inline]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    /// Horizontal and vertical scale factors, ignoring skew.
    #[inline]
    pub fn scale_factors(self) -> Vec2 {
        Vec2::new(self.sx, self.sy)
    }

    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.sx * p.x + self.kx * p.y + self.tx,
            self.ky * p.x + self.sy * p.y + self.ty,
        )
    }

    /// Axis-aligned bounding box of `rect` after transformation.
    pub fn transform_rect(self, rect: Rect) -> Rect {
        let corners = [
            self.apply(Vec2::new(rect.left(), rect.top())),
            self.apply(Vec2::new(rect.right(), rect.top())),
            self.apply(Vec2::new(rect.left(), rect.bottom())),
            self.apply(Vec2::new(rect.right(), rect.bottom())),
        ];
        let (mut l, mut t) = (f32::INFINITY, f32::INFINITY);
        let (mut r, mut b) = (f32::NEG_INFINITY, f32::NEG_INFINITY);
        for c in corners {
            l = l.min(c.x);
            t = t.min(c.y);
            r = r.max(c.x);
            b = b.max(c.y);
        }
        Rect::from_ltrb(l, t, r, b)
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Affine {
    type Output = Affine;

    fn mul(self, rhs: Affine) -> Affine {
        Affine {
            sx: self.sx * rhs.sx + self.kx * rhs.ky,
            kx: self.sx * rhs.kx + self.kx * rhs.sy,
            tx: self.sx * rhs.tx + self.kx * rhs.ty + self.tx,
            ky: self.ky * rhs.sx + self.sy * rhs.ky,
            sy: self.ky * rhs.kx + self.sy * rhs.sy,
            ty: self.ky * rhs.tx + self.sy * rhs.ty + self.ty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_leaves_points_alone() {
        let p = Vec2::new(3.0, -4.0);
        assert_eq!(Affine::IDENTITY.apply(p), p);
        assert!(Affine::default().is_identity());
    }

    #[test]
    fn then_applies_left_operand_first() {
        // scale by 2, then move right by 10
        let m = Affine::scale(2.0).then(Affine::translate(Vec2::new(10.0, 0.0)));
        assert_eq!(m.apply(Vec2::new(1.0, 1.0)), Vec2::new(12.0, 2.0));

        // move first, then scale
        let m = Affine::translate(Vec2::new(10.0, 0.0)).then(Affine::scale(2.0));
        assert_eq!(m.apply(Vec2::new(1.0, 1.0)), Vec2::new(22.0, 2.0));
    }

    #[test]
    fn transform_rect_scales_and_offsets() {
        let m = Affine::scale_non_uniform(2.0, 3.0).then(Affine::translate(Vec2::new(1.0, 1.0)));
        let out = m.transform_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(out, Rect::new(1.0, 1.0, 20.0, 30.0));
    }
}
