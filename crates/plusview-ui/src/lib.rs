//! plusview UI: a resilient image widget on top of `plusview-engine`.
//!
//! [`ImageViewPlus`](image::ImageViewPlus) shows a content image inside its
//! frame and never draws a released bitmap: a check runs right before each
//! draw and swaps in the configured default drawable if the content's pixels
//! are gone.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use plusview_ui::prelude::*;
//!
//! let resolver = SourceResolver::new(Rc::new(resources), Rc::new(FileContentAccess));
//! let mut view = ImageViewPlus::new(resolver);
//! view.set_default_drawable(Some(placeholder));
//! view.set_scale_mode(ScaleMode::TopCrop);
//! view.set_image_uri(Some(Uri::parse("file:///tmp/photo.png")));
//!
//! let mut root = Element::new(view);
//! let draw_list = scene.frame(&mut root, Vec2::new(320.0, 240.0));
//! ```

pub mod constraints;
pub mod dsl;
pub mod image;
pub mod painter;
pub mod scene;
pub mod widget;

/// Everything needed to build and host image views.
pub mod prelude {
    pub use crate::constraints::Constraints;
    pub use crate::image::{
        ConfigError, ContentAccess, ContentSpecifier, FileContentAccess, ImageAttributes,
        ImageSurface, ImageViewPlus, NativeScale, RenderSurface, ResolveError, ResourceId,
        ResourceProvider, ResourceTable, ScaleMode, SourceResolver, Uri,
    };
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::{Element, Widget};

    pub use plusview_engine::coords::{Affine, Rect, Vec2};
    pub use plusview_engine::graphics::{
        Bitmap, DrawableRef, LayerComposite, LayerId, ShapeDrawable,
    };
    pub use plusview_engine::paint::Color;

    pub use crate::dsl::{parse_attributes, ParseError};
}
