//! `ImageViewPlus`: an image widget that never draws a released bitmap.

use plusview_engine::coords::{Rect, Vec2};
use plusview_engine::graphics::{Bitmap, DrawableRef, LayerId};
use plusview_engine::paint::Color;

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Widget;

use super::attributes::ImageAttributes;
use super::error::{ConfigError, ResolveError};
use super::recycle;
use super::resolver::SourceResolver;
use super::scale::{NativeScale, ScaleMode};
use super::source::{ContentSpecifier, ResourceId, Uri};
use super::state::DrawableState;
use super::surface::{ImageSurface, RenderSurface};
use super::transform::top_crop_matrix;

/// Called after the view has fallen back to its default drawable because the
/// content's bitmap was released.
pub type DefaultListener<S> = Box<dyn FnMut(&ImageViewPlus<S>)>;

/// Image widget with a default fallback, an optional layer wrapper and a
/// top-crop scale mode.
///
/// Right before every draw the view checks whether what it shows is backed
/// by a released bitmap. If so it resets to the default drawable, clears
/// the color filter and calls the [listener](Self::set_listener); the draw
/// then goes ahead with the default.
///
/// ```rust,ignore
/// let mut view = ImageViewPlus::new(resolver);
/// view.set_default_drawable(Some(placeholder));
/// view.set_listener(|v| log::info!("fell back, showing default: {}", v.is_showing_default()));
/// view.set_image_uri(Some(Uri::parse("content://media/42")));
/// ```
pub struct ImageViewPlus<S: RenderSurface = ImageSurface> {
    surface: S,
    resolver: SourceResolver,
    state: DrawableState,
    specifier: ContentSpecifier,
    scale_mode: ScaleMode,
    color_filter: Option<Color>,
    listener: Option<DefaultListener<S>>,
    bounds: Rect,
    /// Set once an auto-reset left a released bitmap on screen.
    reset_exhausted: bool,
}

impl ImageViewPlus {
    pub fn new(resolver: SourceResolver) -> Self {
        Self::with_surface(resolver, ImageSurface::new())
    }

    /// Builds a view and applies `attrs` as [`apply_attributes`](Self::apply_attributes) does.
    pub fn with_attributes(
        attrs: &ImageAttributes,
        resolver: SourceResolver,
    ) -> Result<Self, ConfigError> {
        let mut view = Self::new(resolver);
        view.apply_attributes(attrs)?;
        Ok(view)
    }
}

impl<S: RenderSurface> ImageViewPlus<S> {
    pub fn with_surface(resolver: SourceResolver, mut surface: S) -> Self {
        let scale_mode = ScaleMode::default();
        surface.set_native_scale(scale_mode.native().unwrap_or(NativeScale::Matrix));
        Self {
            surface,
            resolver,
            state: DrawableState::new(),
            specifier: ContentSpecifier::None,
            scale_mode,
            color_filter: None,
            listener: None,
            bounds: Rect::default(),
            reset_exhausted: false,
        }
    }

    /// Applies declarative attributes in the order the host inflates them:
    /// content, scale mode, default, layer wrapper.
    ///
    /// A default that fails to load is logged and skipped, as is a wrapper
    /// resource that is missing or not a layer composite. A wrapper without
    /// a content layer is a [`ConfigError`].
    pub fn apply_attributes(&mut self, attrs: &ImageAttributes) -> Result<(), ConfigError> {
        match &attrs.src {
            ContentSpecifier::None => {}
            ContentSpecifier::Resource(id) => self.set_image_resource(*id),
            ContentSpecifier::Uri(uri) => self.set_image_uri(Some(uri.clone())),
            ContentSpecifier::Image(d) => self.set_image_drawable(Some(d.clone())),
        }

        if let Some(mode) = attrs.scale_mode {
            self.set_scale_mode(mode);
        }

        if let Some(id) = attrs.default_drawable
            && let Err(e) = self.set_default_resource(id)
        {
            log::warn!("default_drawable: {e}");
        }

        if let Some(id) = attrs.layer_drawable {
            match self.resolver.resources().drawable(id) {
                Ok(wrapper) if wrapper.as_layers().is_some() => {
                    self.set_layer_resources(Some(wrapper), attrs.content_layer)?;
                }
                Ok(_) => log::warn!("layer_drawable {} is not a layer composite; ignored", id.0),
                Err(e) => log::warn!("layer_drawable {}: {e:#}", id.0),
            }
        }

        Ok(())
    }

    // ── content ───────────────────────────────────────────────────────────

    /// Shows the drawable for resource `id`.
    ///
    /// Resolution blocks the calling thread. Setting the id already set is a
    /// no-op.
    pub fn set_image_resource(&mut self, id: ResourceId) {
        self.set_specifier(ContentSpecifier::Resource(id));
    }

    /// Shows the image at `uri`, or clears the content with `None`.
    ///
    /// `content:` and `file:` URIs are opened through the host's
    /// [`ContentAccess`](super::ContentAccess) and decoded on the calling
    /// thread; anything else is treated as a filesystem path. Setting a URI
    /// equal to the current one is a no-op.
    pub fn set_image_uri(&mut self, uri: Option<Uri>) {
        self.set_specifier(ContentSpecifier::from(uri));
    }

    /// Shows `drawable` directly. A no-op if it is the drawable already
    /// displayed (by identity).
    pub fn set_image_drawable(&mut self, drawable: Option<DrawableRef>) {
        if self.state.displayed() == drawable.as_ref() {
            return;
        }
        self.specifier = drawable.clone().map_or(ContentSpecifier::None, ContentSpecifier::Image);
        self.show(drawable);
    }

    /// Wraps `bitmap` in a new drawable and shows it.
    pub fn set_image_bitmap(&mut self, bitmap: Bitmap) {
        self.set_image_drawable(Some(DrawableRef::bitmap(bitmap)));
    }

    fn set_specifier(&mut self, specifier: ContentSpecifier) {
        if self.specifier == specifier {
            return;
        }
        self.show(None);
        self.specifier = specifier;
        self.resolve_content();
    }

    fn resolve_content(&mut self) {
        if self.state.displayed().is_some() && !self.state.is_showing_default() {
            return;
        }

        match self.resolver.resolve(&self.specifier) {
            Ok(drawable) => self.show(Some(drawable)),
            Err(ResolveError::Unspecified) => {}
            Err(e) => {
                if e.clears_specifier() {
                    self.specifier = ContentSpecifier::None;
                }
                self.show(None);
            }
        }
    }

    /// Pushes `content` (or the default in its place) to the surface.
    fn show(&mut self, content: Option<DrawableRef>) {
        self.state.update(content, &mut self.surface);
        self.reset_exhausted = false;
        self.apply_top_crop();
    }

    fn apply_top_crop(&mut self) {
        if self.scale_mode != ScaleMode::TopCrop {
            return;
        }
        if let Some(drawable) = self.state.surface_drawable() {
            let matrix = top_crop_matrix(self.bounds, drawable.intrinsic_width());
            self.surface.request_transform(matrix);
        }
    }

    // ── default & layer wrapper ───────────────────────────────────────────

    /// Sets the fallback drawable. If the view was showing the old default,
    /// or nothing, it switches to the new one right away.
    ///
    /// The content specifier is left alone: the default is only ever a
    /// stand-in for display.
    pub fn set_default_drawable(&mut self, drawable: Option<DrawableRef>) {
        if self.state.replace_default(drawable, &mut self.surface) {
            self.show(None);
        }
    }

    /// Loads the fallback drawable from the resource service.
    pub fn set_default_resource(&mut self, id: ResourceId) -> Result<(), ResolveError> {
        let drawable = self
            .resolver
            .resources()
            .drawable(id)
            .map_err(|source| ResolveError::Resource { id, source })?;
        self.set_default_drawable(Some(drawable));
        Ok(())
    }

    /// Shows content inside layer `content_layer` of `wrapper`; `None`
    /// removes the wrapper.
    ///
    /// Fails, changing nothing, if a wrapper is given without a content
    /// layer or is not a layer composite.
    pub fn set_layer_resources(
        &mut self,
        wrapper: Option<DrawableRef>,
        content_layer: Option<LayerId>,
    ) -> Result<(), ConfigError> {
        self.state.set_layer(wrapper, content_layer, &mut self.surface)?;
        self.apply_top_crop();
        Ok(())
    }

    // ── scaling & filter ──────────────────────────────────────────────────

    /// Selects how content is fitted into the view's frame. Host-native modes
    /// pass straight through; [`ScaleMode::TopCrop`] runs on the surface's
    /// matrix mode and is recomputed whenever the frame or the shown
    /// drawable changes.
    pub fn set_scale_mode(&mut self, mode: ScaleMode) {
        self.scale_mode = mode;
        self.surface.set_native_scale(mode.native().unwrap_or(NativeScale::Matrix));
        self.apply_top_crop();
    }

    pub fn set_color_filter(&mut self, tint: Color) {
        self.color_filter = Some(tint);
        self.surface.set_color_filter(self.color_filter);
    }

    pub fn clear_color_filter(&mut self) {
        self.color_filter = None;
        self.surface.set_color_filter(None);
    }

    // ── reset & draw ──────────────────────────────────────────────────────

    /// Shows the default drawable (or nothing) and clears the color filter.
    pub fn reset_to_default(&mut self) {
        self.set_image_drawable(self.state.default_drawable().cloned());
        self.clear_color_filter();
    }

    /// Whether what the surface shows is backed by a released bitmap,
    /// directly or in one of the wrapper's layers.
    pub fn is_drawable_recycled(&self) -> bool {
        self.state.surface_drawable().is_some_and(recycle::is_invalidated)
    }

    /// Resets to the default and notifies the listener.
    ///
    /// The listener only runs if the reset changed what is displayed. A
    /// released default (or wrapper layer) is warned about once; later draws
    /// log at debug level until the content changes.
    pub fn perform_auto_reset(&mut self) {
        let before = self.state.displayed().cloned();
        let exhausted = self.reset_exhausted;
        self.reset_to_default();

        if self.state.displayed() == before.as_ref() {
            if exhausted {
                log::debug!("released bitmap still shown");
            } else {
                log::warn!("released bitmap remains after reset; nothing left to fall back to");
            }
            self.reset_exhausted = true;
            return;
        }

        log::debug!("auto-reset to default drawable");
        if let Some(mut listener) = self.listener.take() {
            listener(self);
            self.listener = Some(listener);
        }
    }

    /// Records the view's frame. In top-crop mode this also recomputes the
    /// surface matrix from the new width.
    pub fn set_frame(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.apply_top_crop();
    }

    /// Pre-draw check followed by the surface draw.
    pub fn on_draw(&mut self, painter: &mut Painter<'_>) {
        if self.is_drawable_recycled() {
            if !self.reset_exhausted {
                log::warn!("content bitmap was released before draw; falling back to default");
            }
            self.perform_auto_reset();
        }
        self.surface.draw(painter, self.bounds);
    }

    // ── listener ──────────────────────────────────────────────────────────

    pub fn set_listener(&mut self, listener: impl FnMut(&ImageViewPlus<S>) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    // ── queries ───────────────────────────────────────────────────────────

    /// The content last requested, before default substitution.
    pub fn drawable(&self) -> Option<&DrawableRef> {
        self.state.requested()
    }

    /// The content actually shown: the requested drawable or the default.
    pub fn displayed_drawable(&self) -> Option<&DrawableRef> {
        self.state.displayed()
    }

    /// What the surface holds: the layer wrapper if there is one, otherwise
    /// [`displayed_drawable`](Self::displayed_drawable).
    pub fn surface_drawable(&self) -> Option<&DrawableRef> {
        self.state.surface_drawable()
    }

    pub fn default_drawable(&self) -> Option<&DrawableRef> {
        self.state.default_drawable()
    }

    pub fn layer_drawable(&self) -> Option<&DrawableRef> {
        self.state.layer_drawable()
    }

    pub fn content_layer_id(&self) -> Option<LayerId> {
        self.state.content_layer_id()
    }

    /// See [`DrawableState::is_showing_default`]; the comparison is by
    /// identity.
    pub fn is_showing_default(&self) -> bool {
        self.state.is_showing_default()
    }

    pub fn content_resource(&self) -> Option<ResourceId> {
        self.specifier.resource()
    }

    pub fn content_uri(&self) -> Option<&Uri> {
        self.specifier.uri()
    }

    pub fn specifier(&self) -> &ContentSpecifier {
        &self.specifier
    }

    pub fn scale_mode(&self) -> ScaleMode {
        self.scale_mode
    }

    pub fn color_filter(&self) -> Option<Color> {
        self.color_filter
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: RenderSurface + 'static> Widget for ImageViewPlus<S> {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let size = self
            .surface_drawable()
            .map(|d| {
                Vec2::new(d.intrinsic_width().unwrap_or(0.0), d.intrinsic_height().unwrap_or(0.0))
            })
            .unwrap_or_else(Vec2::zero);
        constraints.constrain(size)
    }

    fn set_frame(&mut self, frame: Rect) {
        ImageViewPlus::set_frame(self, frame);
    }

    fn draw(&mut self, painter: &mut Painter<'_>) {
        self.on_draw(painter);
    }
}
