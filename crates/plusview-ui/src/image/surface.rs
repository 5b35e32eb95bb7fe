//! The render surface contract and the stock adapter that implements it.

use plusview_engine::coords::{Affine, Rect, Vec2};
use plusview_engine::graphics::{DrawableRef, OwnerId};
use plusview_engine::paint::Color;

use crate::painter::Painter;

use super::scale::NativeScale;

/// What the view needs from the host that actually shows pixels.
pub trait RenderSurface {
    /// Replaces what the surface shows; `None` clears it.
    fn push(&mut self, drawable: Option<&DrawableRef>);

    /// The drawable most recently pushed.
    fn drawable(&self) -> Option<&DrawableRef>;

    /// Sets the matrix used by [`NativeScale::Matrix`].
    fn request_transform(&mut self, matrix: Affine);

    fn set_native_scale(&mut self, scale: NativeScale);

    /// Drops any pending work scheduled on behalf of `drawable` and releases
    /// its callback binding.
    fn unschedule(&mut self, drawable: &DrawableRef);

    fn set_color_filter(&mut self, tint: Option<Color>);

    /// Draws the current drawable into `bounds`.
    fn draw(&mut self, painter: &mut Painter<'_>, bounds: Rect);
}

/// Stock [`RenderSurface`]: binds the pushed drawable's callback to its
/// owner, keeps the host matrix, and implements every [`NativeScale`].
#[derive(Debug)]
pub struct ImageSurface {
    owner: OwnerId,
    drawable: Option<DrawableRef>,
    scale: NativeScale,
    matrix: Affine,
    tint: Option<Color>,
    pushes: usize,
}

impl ImageSurface {
    pub fn new() -> Self {
        Self {
            owner: OwnerId::next(),
            drawable: None,
            scale: NativeScale::FitCenter,
            matrix: Affine::IDENTITY,
            tint: None,
            pushes: 0,
        }
    }

    /// The id drawables shown by this surface are bound to.
    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    pub fn native_scale(&self) -> NativeScale {
        self.scale
    }

    pub fn matrix(&self) -> Affine {
        self.matrix
    }

    pub fn color_filter(&self) -> Option<Color> {
        self.tint
    }

    /// Number of `push` calls so far, including clears.
    pub fn push_count(&self) -> usize {
        self.pushes
    }

    /// Content-to-frame transform for a drawable of `content` size inside a
    /// frame of `frame` size (both in logical pixels, frame-local).
    pub fn draw_matrix(&self, content: Vec2, frame: Vec2) -> Affine {
        let (cw, ch) = (content.x, content.y);
        let (fw, fh) = (frame.x, frame.y);

        match self.scale {
            NativeScale::Matrix => self.matrix,
            NativeScale::FitXy => Affine::scale_non_uniform(fw / cw, fh / ch),
            NativeScale::Center => {
                Affine::translate(Vec2::new(((fw - cw) * 0.5).round(), ((fh - ch) * 0.5).round()))
            }
            NativeScale::CenterCrop => {
                let (scale, dx, dy) = if cw * fh > fw * ch {
                    let s = fh / ch;
                    (s, (fw - cw * s) * 0.5, 0.0)
                } else {
                    let s = fw / cw;
                    (s, 0.0, (fh - ch * s) * 0.5)
                };
                Affine::scale(scale).then(Affine::translate(Vec2::new(dx.round(), dy.round())))
            }
            NativeScale::CenterInside => {
                let scale = if cw <= fw && ch <= fh { 1.0 } else { (fw / cw).min(fh / ch) };
                let dx = ((fw - cw * scale) * 0.5).round();
                let dy = ((fh - ch * scale) * 0.5).round();
                Affine::scale(scale).then(Affine::translate(Vec2::new(dx, dy)))
            }
            NativeScale::FitStart | NativeScale::FitCenter | NativeScale::FitEnd => {
                let scale = (fw / cw).min(fh / ch);
                let slack = Vec2::new(fw - cw * scale, fh - ch * scale);
                let offset = match self.scale {
                    NativeScale::FitStart => Vec2::zero(),
                    NativeScale::FitCenter => slack * 0.5,
                    _ => slack,
                };
                Affine::scale(scale).then(Affine::translate(offset))
            }
        }
    }
}

impl Default for ImageSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for ImageSurface {
    fn push(&mut self, drawable: Option<&DrawableRef>) {
        self.pushes += 1;
        if self.drawable.as_ref() == drawable {
            return;
        }
        if let Some(old) = self.drawable.take()
            && old.callback() == Some(self.owner)
        {
            old.set_callback(None);
        }
        if let Some(new) = drawable {
            new.set_callback(Some(self.owner));
        }
        self.drawable = drawable.cloned();
    }

    fn drawable(&self) -> Option<&DrawableRef> {
        self.drawable.as_ref()
    }

    fn request_transform(&mut self, matrix: Affine) {
        self.matrix = matrix;
    }

    fn set_native_scale(&mut self, scale: NativeScale) {
        self.scale = scale;
    }

    fn unschedule(&mut self, drawable: &DrawableRef) {
        if drawable.callback() == Some(self.owner) {
            drawable.set_callback(None);
        }
    }

    fn set_color_filter(&mut self, tint: Option<Color>) {
        self.tint = tint;
    }

    fn draw(&mut self, painter: &mut Painter<'_>, bounds: Rect) {
        let Some(drawable) = &self.drawable else {
            return;
        };
        if bounds.is_empty() {
            return;
        }

        let frame = bounds.size;
        let (layout, transform) = match (drawable.intrinsic_width(), drawable.intrinsic_height()) {
            (Some(w), Some(h)) if w > 0.0 && h > 0.0 => {
                let content = Vec2::new(w, h);
                (Rect::new(0.0, 0.0, w, h), self.draw_matrix(content, frame))
            }
            // No natural size: stretch over the frame.
            _ => (Rect::new(0.0, 0.0, frame.x, frame.y), Affine::IDENTITY),
        };

        painter.push_clip(bounds);
        painter.draw_drawable(
            drawable,
            layout,
            transform.then(Affine::translate(bounds.origin)),
            self.tint,
        );
        painter.pop_clip();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plusview_engine::graphics::{Bitmap, ShapeDrawable};
    use plusview_engine::scene::{DrawCmd, DrawList};

    fn surface(scale: NativeScale) -> ImageSurface {
        let mut s = ImageSurface::new();
        s.set_native_scale(scale);
        s
    }

    fn dest(s: &ImageSurface, content: (f32, f32), frame: (f32, f32)) -> Rect {
        let m = s.draw_matrix(Vec2::new(content.0, content.1), Vec2::new(frame.0, frame.1));
        m.transform_rect(Rect::new(0.0, 0.0, content.0, content.1))
    }

    #[test]
    fn fit_modes() {
        let content = (200.0, 100.0);
        let frame = (100.0, 100.0);
        assert_eq!(dest(&surface(NativeScale::FitStart), content, frame), Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(dest(&surface(NativeScale::FitCenter), content, frame), Rect::new(0.0, 25.0, 100.0, 50.0));
        assert_eq!(dest(&surface(NativeScale::FitEnd), content, frame), Rect::new(0.0, 50.0, 100.0, 50.0));
        assert_eq!(dest(&surface(NativeScale::FitXy), content, frame), Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn center_modes() {
        let frame = (100.0, 100.0);
        assert_eq!(dest(&surface(NativeScale::Center), (40.0, 20.0), frame), Rect::new(30.0, 40.0, 40.0, 20.0));
        assert_eq!(
            dest(&surface(NativeScale::CenterCrop), (200.0, 100.0), frame),
            Rect::new(-50.0, 0.0, 200.0, 100.0)
        );
        assert_eq!(
            dest(&surface(NativeScale::CenterInside), (40.0, 20.0), frame),
            Rect::new(30.0, 40.0, 40.0, 20.0)
        );
        assert_eq!(
            dest(&surface(NativeScale::CenterInside), (400.0, 200.0), frame),
            Rect::new(0.0, 25.0, 100.0, 50.0)
        );
    }

    #[test]
    fn matrix_mode_uses_requested_transform() {
        let mut s = surface(NativeScale::Matrix);
        s.request_transform(Affine::scale(3.0));
        assert_eq!(dest(&s, (10.0, 10.0), (5.0, 5.0)), Rect::new(0.0, 0.0, 30.0, 30.0));
    }

    #[test]
    fn push_rebinds_callbacks() {
        let mut s = ImageSurface::new();
        let a = DrawableRef::shape(ShapeDrawable::default());
        let b = DrawableRef::shape(ShapeDrawable::default());

        s.push(Some(&a));
        assert_eq!(a.callback(), Some(s.owner()));
        s.push(Some(&b));
        assert_eq!(a.callback(), None);
        assert_eq!(b.callback(), Some(s.owner()));
        s.push(None);
        assert_eq!(b.callback(), None);
        assert!(s.drawable().is_none());
        assert_eq!(s.push_count(), 3);
    }

    #[test]
    fn unschedule_only_releases_own_binding() {
        let mut s = ImageSurface::new();
        let d = DrawableRef::shape(ShapeDrawable::default());
        let other = OwnerId::next();
        d.set_callback(Some(other));
        s.unschedule(&d);
        assert_eq!(d.callback(), Some(other));

        d.set_callback(Some(s.owner()));
        s.unschedule(&d);
        assert_eq!(d.callback(), None);
    }

    #[test]
    fn draw_offsets_by_bounds_and_clips() {
        let mut s = surface(NativeScale::FitXy);
        let bmp = Bitmap::solid(10, 10, [0; 4]);
        s.push(Some(&DrawableRef::bitmap(bmp)));

        let mut list = DrawList::new();
        let bounds = Rect::new(5.0, 6.0, 20.0, 30.0);
        s.draw(&mut Painter::new(&mut list), bounds);

        let item = &list.items()[0];
        assert_eq!(item.clip_rect, Some(bounds));
        let DrawCmd::Image(cmd) = &item.cmd else { panic!("expected image") };
        assert_eq!(cmd.dest_rect(), bounds);
    }

    #[test]
    fn shapes_fill_the_frame() {
        let mut s = ImageSurface::new();
        s.push(Some(&DrawableRef::shape(ShapeDrawable::default())));
        let mut list = DrawList::new();
        let bounds = Rect::new(0.0, 0.0, 8.0, 4.0);
        s.draw(&mut Painter::new(&mut list), bounds);
        assert!(matches!(&list.items()[0].cmd, DrawCmd::Rect(r) if r.rect == bounds));
    }
}
