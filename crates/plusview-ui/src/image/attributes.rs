//! Construction-time attributes for [`ImageViewPlus`](super::ImageViewPlus).

use plusview_engine::graphics::LayerId;

use crate::dsl::{AttributeError, Node, Value};

use super::scale::ScaleMode;
use super::source::{ContentSpecifier, ResourceId, Uri};

/// Attributes read once when a view is built.
///
/// Every field mirrors a programmatic setter; `None` leaves the view's
/// default in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageAttributes {
    pub src: ContentSpecifier,
    pub default_drawable: Option<ResourceId>,
    pub layer_drawable: Option<ResourceId>,
    pub content_layer: Option<LayerId>,
    pub scale_mode: Option<ScaleMode>,
}

impl ImageAttributes {
    /// Reads attributes from a parsed node. Unknown keys are logged and
    /// skipped.
    pub fn from_node(node: &Node) -> Result<Self, AttributeError> {
        let mut attrs = ImageAttributes::default();

        for attr in &node.attrs {
            let key = attr.key.as_str();
            match key {
                "src" => {
                    attrs.src = match &attr.value {
                        Value::Str(s) => ContentSpecifier::Uri(Uri::parse(s.as_str())),
                        v => ContentSpecifier::Resource(resource_id(key, v)?),
                    }
                }
                "default_drawable" => attrs.default_drawable = Some(resource_id(key, &attr.value)?),
                "layer_drawable" => attrs.layer_drawable = Some(resource_id(key, &attr.value)?),
                "content_layer" => {
                    let id = attr.value.as_id().ok_or_else(|| expected(key, "a layer id"))?;
                    attrs.content_layer = Some(LayerId(id));
                }
                "scale_type" => attrs.scale_mode = Some(scale_mode(key, &attr.value)?),
                other => log::warn!("{}: ignoring unknown attribute `{}`", node.widget, other),
            }
        }

        Ok(attrs)
    }
}

fn expected(key: &str, what: &'static str) -> AttributeError {
    AttributeError { key: key.to_string(), expected: what }
}

fn resource_id(key: &str, value: &Value) -> Result<ResourceId, AttributeError> {
    value.as_id().map(ResourceId).ok_or_else(|| expected(key, "a resource id"))
}

fn scale_mode(key: &str, value: &Value) -> Result<ScaleMode, AttributeError> {
    let mode = match value {
        Value::Ident(name) | Value::Str(name) => ScaleMode::from_name(name),
        Value::Number(_) => value.as_id().and_then(|code| ScaleMode::from_code(code as i32)),
    };
    mode.ok_or_else(|| expected(key, "a scale mode name or a code from 0 to 8"))
}
