//! The top-crop transform, the one scale mode the host does not implement.

use plusview_engine::coords::{Affine, Rect};

/// Matrix that scales content uniformly to the width of `bounds`, top edges
/// aligned. The host clips whatever overflows at the bottom.
///
/// An unknown (or non-positive) intrinsic width yields the identity: the
/// content is drawn unscaled at the top-left.
pub fn top_crop_matrix(bounds: Rect, intrinsic_width: Option<f32>) -> Affine {
    match intrinsic_width {
        Some(width) if width > 0.0 => Affine::scale((bounds.right() - bounds.left()) / width),
        _ => Affine::IDENTITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_scale_is_view_width_over_intrinsic_width() {
        let m = top_crop_matrix(Rect::from_ltrb(10.0, 0.0, 310.0, 100.0), Some(150.0));
        assert_eq!(m.scale_factors().x, 2.0);
        assert_eq!(m.scale_factors().y, 2.0);
        assert_eq!(m, Affine::scale(2.0));
    }

    #[test]
    fn downscale() {
        let m = top_crop_matrix(Rect::from_ltrb(0.0, 0.0, 100.0, 50.0), Some(400.0));
        assert_eq!(m, Affine::scale(0.25));
    }

    #[test]
    fn unknown_width_is_identity() {
        let bounds = Rect::from_ltrb(0.0, 0.0, 100.0, 50.0);
        assert!(top_crop_matrix(bounds, None).is_identity());
        assert!(top_crop_matrix(bounds, Some(0.0)).is_identity());
    }

    #[test]
    fn top_edge_stays_anchored() {
        let m = top_crop_matrix(Rect::from_ltrb(0.0, 0.0, 200.0, 100.0), Some(100.0));
        // A 100x100 image becomes 200x200: the top row stays at y = 0 and the
        // bottom half lies outside the 100px tall frame.
        let drawn = m.transform_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(drawn.top(), 0.0);
        assert_eq!(drawn.bottom(), 200.0);
        assert_eq!(drawn.width(), 200.0);
    }
}
