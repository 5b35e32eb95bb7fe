use std::fmt;

use plusview_engine::graphics::DrawableRef;

/// Identifier understood by the host's [`ResourceProvider`](super::ResourceProvider).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ResourceId(pub u32);

// ── Uri ───────────────────────────────────────────────────────────────────

/// An opaque URI string with scheme extraction.
///
/// Compared by value. No normalization or percent-decoding is applied.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Uri(String);

impl Uri {
    pub const SCHEME_CONTENT: &'static str = "content";
    pub const SCHEME_FILE: &'static str = "file";
    pub const SCHEME_ANDROID_RESOURCE: &'static str = "android.resource";

    pub fn parse(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The scheme before the first `:`, if the URI has a syntactically valid one.
    pub fn scheme(&self) -> Option<&str> {
        let (scheme, _) = self.0.split_once(':')?;
        let mut chars = scheme.chars();
        let first = chars.next()?;
        let valid = first.is_ascii_alphabetic()
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        valid.then_some(scheme)
    }

    /// Path component of a hierarchical URI (`file:///a/b` → `/a/b`,
    /// `content://auth/x` → `/x`). Scheme-less strings are returned whole.
    pub fn path(&self) -> &str {
        let Some(scheme) = self.scheme() else {
            return &self.0;
        };
        let rest = &self.0[scheme.len() + 1..];
        let rest = rest.split(['?', '#']).next().unwrap_or_default();
        match rest.strip_prefix("//") {
            Some(after_authority) => after_authority
                .find('/')
                .map_or("", |i| &after_authority[i..]),
            None => rest,
        }
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Uri {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

// ── ContentSpecifier ──────────────────────────────────────────────────────

/// The caller's description of the content to show.
///
/// Equality is by value for resource ids and URIs and by identity for
/// drawables, matching when re-assignment is skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ContentSpecifier {
    #[default]
    None,
    Resource(ResourceId),
    Uri(Uri),
    Image(DrawableRef),
}

impl ContentSpecifier {
    pub fn resource(&self) -> Option<ResourceId> {
        match self {
            ContentSpecifier::Resource(id) => Some(*id),
            _ => None,
        }
    }

    pub fn uri(&self) -> Option<&Uri> {
        match self {
            ContentSpecifier::Uri(uri) => Some(uri),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ContentSpecifier::None)
    }
}

impl From<Option<Uri>> for ContentSpecifier {
    fn from(uri: Option<Uri>) -> Self {
        uri.map_or(ContentSpecifier::None, ContentSpecifier::Uri)
    }
}
