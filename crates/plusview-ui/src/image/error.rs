use std::fmt;

use super::source::{ResourceId, Uri};

/// Misconfiguration of an [`ImageViewPlus`](super::ImageViewPlus).
///
/// These are programming errors; the call that produced one changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A layer wrapper was supplied without the id of the layer that holds
    /// the content.
    MissingContentLayer,
    /// The drawable supplied as layer wrapper is not a layer composite.
    NotAComposite,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingContentLayer => {
                write!(f, "cannot use a layer wrapper without specifying a content layer id")
            }
            ConfigError::NotAComposite => write!(f, "layer wrapper must be a layer composite"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Why a content specifier produced no drawable.
///
/// The view recovers from all of these by showing its default drawable;
/// they only surface through logs and [`SourceResolver`](super::SourceResolver).
#[derive(Debug)]
pub enum ResolveError {
    /// Nothing to resolve.
    Unspecified,
    /// The resource service could not produce the drawable.
    Resource { id: ResourceId, source: anyhow::Error },
    /// Opening or decoding the URI failed.
    Uri { uri: Uri, source: anyhow::Error },
    /// The URI scheme is recognized but not implemented.
    UnsupportedScheme { uri: Uri },
}

impl ResolveError {
    /// Whether the failed specifier should be forgotten so the same failure
    /// is not retried.
    pub fn clears_specifier(&self) -> bool {
        matches!(self, ResolveError::Resource { .. } | ResolveError::Uri { .. })
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Unspecified => write!(f, "no content specified"),
            ResolveError::Resource { id, source } => {
                write!(f, "unable to load resource {}: {source:#}", id.0)
            }
            ResolveError::Uri { uri, source } => write!(f, "unable to open content {uri}: {source:#}"),
            ResolveError::UnsupportedScheme { uri } => {
                write!(f, "unsupported uri scheme for {uri}")
            }
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolveError::Resource { source, .. } | ResolveError::Uri { source, .. } => {
                Some(&**source)
            }
            _ => None,
        }
    }
}
