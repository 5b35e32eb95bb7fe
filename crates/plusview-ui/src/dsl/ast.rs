// ── Value ─────────────────────────────────────────────────────────────────

/// A literal attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Quoted string: `"file:///tmp/a.png"`
    Str(String),
    /// Numeric literal: `12`, `0x7f020001` or `1.5`
    Number(f64),
    /// Unquoted identifier: `top_crop`
    Ident(String),
}

impl Value {
    /// The value as a non-negative integer id, if it is one.
    pub fn as_id(&self) -> Option<u32> {
        match *self {
            Value::Number(n) if n >= 0.0 && n.fract() == 0.0 && n <= u32::MAX as f64 => {
                Some(n as u32)
            }
            _ => None,
        }
    }
}

// ── Attr ──────────────────────────────────────────────────────────────────

/// A single `key=value` entry in a node's attribute list.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

// ── Node ──────────────────────────────────────────────────────────────────

/// A widget declaration.
///
/// ```text
/// ImageViewPlus [default_drawable=12, scale_type=top_crop]
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub widget: String,
    pub attrs: Vec<Attr>,
}

impl Node {
    /// Look up an attribute by key. The last occurrence wins.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.iter().rev().find(|a| a.key == key).map(|a| &a.value)
    }
}
