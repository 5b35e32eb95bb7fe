//! Turning content specifiers into drawables.
//!
//! Resolution is synchronous and blocking: decoding from a stream or path
//! happens inline on the calling (UI) thread. Callers who care about frame
//! latency should decode elsewhere and pass a finished drawable instead.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::rc::Rc;

use anyhow::{anyhow, bail, Context, Result};
use plusview_engine::decode;
use plusview_engine::graphics::{Bitmap, DrawableRef};

use super::error::ResolveError;
use super::source::{ContentSpecifier, ResourceId, Uri};

// ── host services ─────────────────────────────────────────────────────────

/// Host lookup of packaged drawables by id.
pub trait ResourceProvider {
    fn drawable(&self, id: ResourceId) -> Result<DrawableRef>;
}

/// Host access to URI-addressed content.
pub trait ContentAccess {
    /// Opens a byte stream for a `content:` or `file:` URI.
    fn open_input_stream(&self, uri: &Uri) -> Result<Box<dyn Read>>;

    /// Decodes an opened stream.
    fn decode_stream(&self, stream: Box<dyn Read>) -> Result<DrawableRef> {
        decode::decode_drawable(stream)
    }

    /// Decodes straight from a filesystem path; `None` on any failure.
    fn decode_from_path(&self, path: &str) -> Option<DrawableRef> {
        decode::decode_path(path)
    }
}

/// [`ContentAccess`] backed by the local filesystem.
///
/// `file:` URIs open their path. There is no content-provider registry, so
/// `content:` URIs always fail to open.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileContentAccess;

impl ContentAccess for FileContentAccess {
    fn open_input_stream(&self, uri: &Uri) -> Result<Box<dyn Read>> {
        match uri.scheme() {
            Some(Uri::SCHEME_FILE) => {
                let file = File::open(uri.path()).with_context(|| format!("opening {uri}"))?;
                Ok(Box::new(BufReader::new(file)))
            }
            _ => bail!("no content provider for {uri}"),
        }
    }
}

/// In-memory [`ResourceProvider`].
///
/// Every lookup builds a new drawable, so two lookups of the same id are
/// never identical, only equal in content.
#[derive(Default, Clone)]
pub struct ResourceTable {
    entries: HashMap<ResourceId, Rc<dyn Fn() -> DrawableRef>>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_bitmap(&mut self, id: ResourceId, bitmap: Bitmap) {
        self.insert_with(id, move || DrawableRef::bitmap(bitmap.clone()));
    }

    pub fn insert_with(&mut self, id: ResourceId, make: impl Fn() -> DrawableRef + 'static) {
        self.entries.insert(id, Rc::new(make));
    }

    pub fn with_bitmap(mut self, id: ResourceId, bitmap: Bitmap) -> Self {
        self.insert_bitmap(id, bitmap);
        self
    }

    pub fn with(mut self, id: ResourceId, make: impl Fn() -> DrawableRef + 'static) -> Self {
        self.insert_with(id, make);
        self
    }
}

impl ResourceProvider for ResourceTable {
    fn drawable(&self, id: ResourceId) -> Result<DrawableRef> {
        self.entries
            .get(&id)
            .map(|make| make())
            .ok_or_else(|| anyhow!("resource {} not found", id.0))
    }
}

// ── SourceResolver ────────────────────────────────────────────────────────

/// Resolves [`ContentSpecifier`]s through the host services.
///
/// Stateless: clearing a failed specifier is up to the caller (see
/// [`ResolveError::clears_specifier`]).
#[derive(Clone)]
pub struct SourceResolver {
    resources: Rc<dyn ResourceProvider>,
    content: Rc<dyn ContentAccess>,
}

impl SourceResolver {
    pub fn new(resources: Rc<dyn ResourceProvider>, content: Rc<dyn ContentAccess>) -> Self {
        Self { resources, content }
    }

    pub fn resources(&self) -> &dyn ResourceProvider {
        self.resources.as_ref()
    }

    pub fn resolve(&self, specifier: &ContentSpecifier) -> Result<DrawableRef, ResolveError> {
        let result = match specifier {
            ContentSpecifier::None => Err(ResolveError::Unspecified),
            ContentSpecifier::Image(d) => Ok(d.clone()),
            ContentSpecifier::Resource(id) => self
                .resources
                .drawable(*id)
                .map_err(|source| ResolveError::Resource { id: *id, source }),
            ContentSpecifier::Uri(uri) => self.resolve_uri(uri),
        };

        match &result {
            Ok(d) => log::debug!("resolved {:?} to {:?}", specifier, d),
            Err(ResolveError::Unspecified) => {}
            Err(e) => log::warn!("{e}"),
        }
        result
    }

    fn resolve_uri(&self, uri: &Uri) -> Result<DrawableRef, ResolveError> {
        match uri.scheme() {
            // Resolving these needs a reverse id lookup the host does not offer.
            Some(Uri::SCHEME_ANDROID_RESOURCE) => {
                Err(ResolveError::UnsupportedScheme { uri: uri.clone() })
            }
            Some(Uri::SCHEME_CONTENT | Uri::SCHEME_FILE) => self
                .content
                .open_input_stream(uri)
                .and_then(|stream| self.content.decode_stream(stream))
                .map_err(|source| ResolveError::Uri { uri: uri.clone(), source }),
            _ => self.content.decode_from_path(uri.as_str()).ok_or_else(|| ResolveError::Uri {
                uri: uri.clone(),
                source: anyhow!("decoding from path produced nothing"),
            }),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io::Cursor;

    const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="6" height="3"/>"#;

    /// Counts lookups; only id 1 exists.
    #[derive(Default)]
    pub(crate) struct CountingResources {
        pub(crate) calls: Cell<usize>,
    }

    impl ResourceProvider for CountingResources {
        fn drawable(&self, id: ResourceId) -> Result<DrawableRef> {
            self.calls.set(self.calls.get() + 1);
            match id {
                ResourceId(1) => Ok(DrawableRef::bitmap(Bitmap::solid(4, 4, [9, 9, 9, 255]))),
                _ => bail!("no such resource"),
            }
        }
    }

    /// Serves a fixed SVG for `content://ok/...`, fails everything else.
    pub(crate) struct FakeContent;

    impl ContentAccess for FakeContent {
        fn open_input_stream(&self, uri: &Uri) -> Result<Box<dyn Read>> {
            if uri.as_str().starts_with("content://ok/") {
                Ok(Box::new(Cursor::new(SVG.as_bytes().to_vec())))
            } else {
                bail!("cannot open {uri}")
            }
        }

        fn decode_from_path(&self, path: &str) -> Option<DrawableRef> {
            (path == "/sdcard/ok.png").then(|| DrawableRef::bitmap(Bitmap::solid(2, 2, [0; 4])))
        }
    }

    fn resolver() -> SourceResolver {
        SourceResolver::new(Rc::new(CountingResources::default()), Rc::new(FakeContent))
    }

    #[test]
    fn resource_lookup() {
        let r = resolver();
        let d = r.resolve(&ContentSpecifier::Resource(ResourceId(1))).unwrap();
        assert_eq!(d.intrinsic_width(), Some(4.0));

        let err = r.resolve(&ContentSpecifier::Resource(ResourceId(2))).unwrap_err();
        assert!(matches!(err, ResolveError::Resource { id: ResourceId(2), .. }));
        assert!(err.clears_specifier());
    }

    #[test]
    fn content_scheme_decodes_stream() {
        let d = resolver().resolve(&ContentSpecifier::Uri("content://ok/1".into())).unwrap();
        assert_eq!(d.intrinsic_width(), Some(6.0));
        assert_eq!(d.intrinsic_height(), Some(3.0));
    }

    #[test]
    fn content_scheme_open_failure() {
        let err = resolver().resolve(&ContentSpecifier::Uri("content://nope/1".into())).unwrap_err();
        assert!(matches!(err, ResolveError::Uri { .. }));
        assert!(err.clears_specifier());
    }

    #[test]
    fn plain_path_decodes_directly() {
        let r = resolver();
        assert!(r.resolve(&ContentSpecifier::Uri("/sdcard/ok.png".into())).is_ok());
        assert!(r.resolve(&ContentSpecifier::Uri("/sdcard/missing.png".into())).is_err());
    }

    #[test]
    fn android_resource_scheme_is_unsupported() {
        let err = resolver()
            .resolve(&ContentSpecifier::Uri("android.resource://pkg/drawable/x".into()))
            .unwrap_err();
        assert!(matches!(err, ResolveError::UnsupportedScheme { .. }));
        assert!(!err.clears_specifier());
    }

    #[test]
    fn direct_image_and_nothing() {
        let d = DrawableRef::bitmap(Bitmap::solid(1, 1, [0; 4]));
        assert_eq!(resolver().resolve(&ContentSpecifier::Image(d.clone())).unwrap(), d);
        assert!(matches!(
            resolver().resolve(&ContentSpecifier::None),
            Err(ResolveError::Unspecified)
        ));
    }

    #[test]
    fn resource_table_builds_fresh_drawables() {
        let table = ResourceTable::new().with_bitmap(ResourceId(3), Bitmap::solid(1, 1, [0; 4]));
        let a = table.drawable(ResourceId(3)).unwrap();
        let b = table.drawable(ResourceId(3)).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.as_bitmap(), b.as_bitmap());
        assert!(table.drawable(ResourceId(4)).is_err());
    }

    #[test]
    fn file_content_access_rejects_content_scheme() {
        assert!(FileContentAccess.open_input_stream(&Uri::parse("content://x/1")).is_err());
        assert!(FileContentAccess.open_input_stream(&Uri::parse("file:///nonexistent/x.png")).is_err());
    }
}
