//! Declarative attribute surface for [`ImageViewPlus`](crate::image::ImageViewPlus).
//!
//! ## Format
//!
//! ```text
//! // one widget per document
//! ImageViewPlus [src="file:///tmp/photo.png", default_drawable=12,
//!                layer_drawable=0x7f020040, content_layer=3, scale_type=top_crop]
//! ```
//!
//! | Attribute | Value |
//! |-----------|-------|
//! | `src` | resource id (number) or URI (string) |
//! | `default_drawable` | resource id |
//! | `layer_drawable` | resource id of a layer composite |
//! | `content_layer` | layer id inside `layer_drawable` |
//! | `scale_type` | mode name (`fitCenter`, `top_crop`, ...) or code 0-8 |
//!
//! ## Usage
//!
//! ```rust,ignore
//! let attrs = parse_attributes(include_str!("../ui/avatar.pvml"))?;
//! let view = ImageViewPlus::with_attributes(&attrs, resolver)?;
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Attr, Node, Value};
pub use error::{AttributeError, ParseError};
pub use parser::parse_str;

use crate::image::ImageAttributes;

/// Widget name accepted by [`parse_attributes`].
pub const IMAGE_VIEW_WIDGET: &str = "ImageViewPlus";

/// Parses an `ImageViewPlus [...]` declaration into [`ImageAttributes`].
pub fn parse_attributes(src: &str) -> Result<ImageAttributes, ParseError> {
    let node = parse_str(src)?;
    if node.widget != IMAGE_VIEW_WIDGET {
        return Err(ParseError::new(format!(
            "expected `{}`, got `{}`",
            IMAGE_VIEW_WIDGET, node.widget
        )));
    }
    Ok(ImageAttributes::from_node(&node)?)
}
