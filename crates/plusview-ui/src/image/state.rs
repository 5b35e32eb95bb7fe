//! Content, default and layer-wrapper bookkeeping.

use plusview_engine::graphics::{DrawableRef, LayerId, ShapeDrawable};
use plusview_engine::paint::Color;

use super::error::ConfigError;
use super::surface::RenderSurface;

/// Tracks what was asked for, what is shown and what it is shown inside.
///
/// Something is always displayed once either a default or content has been
/// assigned: a missing content drawable is replaced by the default.
///
/// With a layer wrapper configured the wrapper is what reaches the
/// [`RenderSurface`]; the displayed drawable sits in its content layer.
#[derive(Debug, Default)]
pub struct DrawableState {
    requested: Option<DrawableRef>,
    displayed: Option<DrawableRef>,
    default: Option<DrawableRef>,
    wrapper: Option<DrawableRef>,
    content_layer: Option<LayerId>,
}

impl DrawableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The content most recently passed to [`update`](Self::update).
    pub fn requested(&self) -> Option<&DrawableRef> {
        self.requested.as_ref()
    }

    /// The content after default substitution.
    pub fn displayed(&self) -> Option<&DrawableRef> {
        self.displayed.as_ref()
    }

    pub fn default_drawable(&self) -> Option<&DrawableRef> {
        self.default.as_ref()
    }

    pub fn layer_drawable(&self) -> Option<&DrawableRef> {
        self.wrapper.as_ref()
    }

    pub fn content_layer_id(&self) -> Option<LayerId> {
        self.content_layer
    }

    /// `true` iff a default exists and the displayed drawable *is* it.
    ///
    /// Identity, not equality: a separately built drawable with the same
    /// pixels does not count.
    pub fn is_showing_default(&self) -> bool {
        match (&self.default, &self.displayed) {
            (Some(default), Some(shown)) => DrawableRef::ptr_eq(default, shown),
            _ => false,
        }
    }

    /// What the render surface is showing: the wrapper if there is one,
    /// otherwise the displayed drawable.
    pub fn surface_drawable(&self) -> Option<&DrawableRef> {
        self.wrapper.as_ref().or(self.displayed.as_ref())
    }

    /// Shows `content`, or the default if `content` is `None`.
    pub fn update(&mut self, content: Option<DrawableRef>, surface: &mut dyn RenderSurface) {
        let shown = content.clone().or_else(|| self.default.clone());
        self.requested = content;
        self.displayed = shown.clone();

        let Some(wrapper) = &self.wrapper else {
            log::debug!("showing {:?}", shown);
            surface.push(shown.as_ref());
            return;
        };

        // Layers cannot hold nothing, and a wrapper cannot hold itself.
        let slot = match shown {
            Some(d) if !DrawableRef::ptr_eq(&d, wrapper) => d,
            _ => DrawableRef::shape(ShapeDrawable::rect(Color::black())),
        };

        surface.push(None);
        match (wrapper.as_layers(), self.content_layer) {
            (Some(layers), Some(id)) => {
                if !layers.set_drawable_by_id(id, slot.clone()) {
                    log::warn!("layer wrapper has no layer with id {}", id.0);
                }
            }
            _ => log::warn!("layer wrapper is misconfigured; content not inserted"),
        }
        log::debug!("showing {:?} in layer wrapper {:?}", slot, wrapper);
        surface.push(Some(wrapper));
    }

    /// Replaces the default, releasing the old one's binding to `surface`.
    ///
    /// Returns whether the view was showing the old default (or nothing), in
    /// which case the caller should show the new default now.
    pub fn replace_default(
        &mut self,
        default: Option<DrawableRef>,
        surface: &mut dyn RenderSurface,
    ) -> bool {
        let was_default = self.is_showing_default();

        if let Some(old) = self.default.take() {
            surface.unschedule(&old);
            old.set_callback(None);
        }
        self.default = default;

        was_default || self.displayed.is_none()
    }

    /// Installs (or removes) the layer wrapper and re-shows the current
    /// content through it.
    ///
    /// Fails without changing anything if `wrapper` is set but
    /// `content_layer` is not, or if `wrapper` is not a layer composite.
    pub fn set_layer(
        &mut self,
        wrapper: Option<DrawableRef>,
        content_layer: Option<LayerId>,
        surface: &mut dyn RenderSurface,
    ) -> Result<(), ConfigError> {
        if let Some(w) = &wrapper {
            if content_layer.is_none() {
                return Err(ConfigError::MissingContentLayer);
            }
            if w.as_layers().is_none() {
                return Err(ConfigError::NotAComposite);
            }
        }

        self.wrapper = wrapper;
        self.content_layer = content_layer;
        self.update(self.requested.clone(), surface);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use plusview_engine::coords::{Affine, Rect};
    use plusview_engine::graphics::{Bitmap, DrawableKind, LayerComposite};

    use crate::image::scale::NativeScale;
    use crate::painter::Painter;

    /// Remembers every push and unschedule.
    #[derive(Default)]
    pub(crate) struct RecordingSurface {
        pub(crate) pushes: Vec<Option<DrawableRef>>,
        pub(crate) unscheduled: Vec<DrawableRef>,
        pub(crate) transforms: Vec<Affine>,
        pub(crate) scale: Option<NativeScale>,
        pub(crate) tint: Option<Color>,
    }

    impl RenderSurface for RecordingSurface {
        fn push(&mut self, drawable: Option<&DrawableRef>) {
            self.pushes.push(drawable.cloned());
        }

        fn drawable(&self) -> Option<&DrawableRef> {
            self.pushes.last().and_then(Option::as_ref)
        }

        fn request_transform(&mut self, matrix: Affine) {
            self.transforms.push(matrix);
        }

        fn set_native_scale(&mut self, scale: NativeScale) {
            self.scale = Some(scale);
        }

        fn unschedule(&mut self, drawable: &DrawableRef) {
            self.unscheduled.push(drawable.clone());
        }

        fn set_color_filter(&mut self, tint: Option<Color>) {
            self.tint = tint;
        }

        fn draw(&mut self, _painter: &mut Painter<'_>, _bounds: Rect) {}
    }

    fn bitmap() -> DrawableRef {
        DrawableRef::bitmap(Bitmap::solid(2, 2, [1, 2, 3, 255]))
    }

    fn wrapper(slot: LayerId) -> DrawableRef {
        DrawableRef::layers(
            LayerComposite::new()
                .with_layer(None, DrawableRef::shape(ShapeDrawable::default()))
                .with_layer(Some(slot), DrawableRef::shape(ShapeDrawable::default())),
        )
    }

    #[test]
    fn null_content_without_default_shows_nothing() {
        let mut s = RecordingSurface::default();
        let mut state = DrawableState::new();
        state.update(None, &mut s);
        assert!(state.displayed().is_none());
        assert_eq!(s.pushes, vec![None]);
        assert!(!state.is_showing_default());
    }

    #[test]
    fn null_content_shows_default() {
        let mut s = RecordingSurface::default();
        let mut state = DrawableState::new();
        let default = bitmap();
        assert!(state.replace_default(Some(default.clone()), &mut s));

        state.update(None, &mut s);
        assert!(state.requested().is_none());
        assert_eq!(state.displayed(), Some(&default));
        assert!(state.is_showing_default());
        assert_eq!(s.drawable(), Some(&default));
    }

    #[test]
    fn showing_default_is_by_identity() {
        let mut s = RecordingSurface::default();
        let mut state = DrawableState::new();
        let pixels = Bitmap::solid(2, 2, [0; 4]);
        state.replace_default(Some(DrawableRef::bitmap(pixels.clone())), &mut s);

        state.update(Some(DrawableRef::bitmap(pixels)), &mut s);
        assert!(!state.is_showing_default());
    }

    #[test]
    fn replacing_default_releases_the_old_one() {
        let mut s = RecordingSurface::default();
        let mut state = DrawableState::new();
        let old = bitmap();
        old.set_callback(Some(plusview_engine::graphics::OwnerId::next()));
        state.replace_default(Some(old.clone()), &mut s);
        state.update(None, &mut s);

        let wants_new = state.replace_default(Some(bitmap()), &mut s);
        assert!(wants_new);
        assert_eq!(s.unscheduled, vec![old.clone()]);
        assert_eq!(old.callback(), None);
    }

    #[test]
    fn replacing_default_under_content_keeps_content() {
        let mut s = RecordingSurface::default();
        let mut state = DrawableState::new();
        state.update(Some(bitmap()), &mut s);
        assert!(!state.replace_default(Some(bitmap()), &mut s));
    }

    #[test]
    fn wrapper_requires_content_layer() {
        let mut s = RecordingSurface::default();
        let mut state = DrawableState::new();
        for w in [wrapper(LayerId(1)), DrawableRef::layers(LayerComposite::new())] {
            assert_eq!(state.set_layer(Some(w), None, &mut s), Err(ConfigError::MissingContentLayer));
        }
        assert!(state.layer_drawable().is_none());
        assert!(s.pushes.is_empty());
    }

    #[test]
    fn wrapper_must_be_a_composite() {
        let mut s = RecordingSurface::default();
        let mut state = DrawableState::new();
        let err = state.set_layer(Some(bitmap()), Some(LayerId(1)), &mut s);
        assert_eq!(err, Err(ConfigError::NotAComposite));
    }

    #[test]
    fn content_goes_into_the_wrapper_slot() {
        let mut s = RecordingSurface::default();
        let mut state = DrawableState::new();
        let w = wrapper(LayerId(7));
        state.set_layer(Some(w.clone()), Some(LayerId(7)), &mut s).unwrap();

        let content = bitmap();
        s.pushes.clear();
        state.update(Some(content.clone()), &mut s);

        assert_eq!(s.pushes, vec![None, Some(w.clone())]);
        assert_eq!(state.displayed(), Some(&content));
        assert_eq!(state.surface_drawable(), Some(&w));
        let layers = w.as_layers().unwrap();
        assert_eq!(layers.find_drawable_by_id(LayerId(7)), Some(content));
    }

    #[test]
    fn empty_content_inserts_placeholder() {
        let mut s = RecordingSurface::default();
        let mut state = DrawableState::new();
        let w = wrapper(LayerId(7));
        state.set_layer(Some(w.clone()), Some(LayerId(7)), &mut s).unwrap();

        let slot = w.as_layers().unwrap().find_drawable_by_id(LayerId(7)).unwrap();
        assert!(matches!(slot.kind(), DrawableKind::Shape(shape) if shape.color == Color::black()));
        assert!(state.displayed().is_none());
    }

    #[test]
    fn removing_wrapper_pushes_content_directly() {
        let mut s = RecordingSurface::default();
        let mut state = DrawableState::new();
        state.set_layer(Some(wrapper(LayerId(1))), Some(LayerId(1)), &mut s).unwrap();
        let content = bitmap();
        state.update(Some(content.clone()), &mut s);

        state.set_layer(None, None, &mut s).unwrap();
        assert_eq!(s.drawable(), Some(&content));
        assert_eq!(state.surface_drawable(), Some(&content));
    }
}
