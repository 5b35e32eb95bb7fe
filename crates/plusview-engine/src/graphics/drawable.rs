use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::paint::Color;

use super::{Bitmap, LayerComposite};

// ── OwnerId ───────────────────────────────────────────────────────────────

/// Identifies the view a drawable's callback is bound to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct OwnerId(u64);

impl OwnerId {
    /// Allocates a process-unique id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

// ── ShapeDrawable ─────────────────────────────────────────────────────────

/// A solid rectangle with no intrinsic size; it stretches to its bounds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeDrawable {
    pub color: Color,
}

impl ShapeDrawable {
    pub fn rect(color: Color) -> Self {
        Self { color }
    }
}

impl Default for ShapeDrawable {
    fn default() -> Self {
        Self::rect(Color::black())
    }
}

// ── Drawable ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum DrawableKind {
    /// Draws a bitmap at its pixel size.
    Bitmap(Bitmap),
    Shape(ShapeDrawable),
    /// Ordered stack of layers drawn back to front.
    Layers(LayerComposite),
}

/// A renderable unit plus the host callback slot bound to it.
#[derive(Debug)]
pub struct Drawable {
    kind: DrawableKind,
    callback: Cell<Option<OwnerId>>,
}

/// Shared handle to a [`Drawable`].
///
/// Equality is identity: two handles are equal only if they point at the same
/// drawable. Value-equal drawables built separately are never equal.
#[derive(Clone)]
pub struct DrawableRef(Rc<Drawable>);

impl DrawableRef {
    pub fn new(kind: DrawableKind) -> Self {
        Self(Rc::new(Drawable { kind, callback: Cell::new(None) }))
    }

    pub fn bitmap(bitmap: Bitmap) -> Self {
        Self::new(DrawableKind::Bitmap(bitmap))
    }

    pub fn shape(shape: ShapeDrawable) -> Self {
        Self::new(DrawableKind::Shape(shape))
    }

    pub fn layers(layers: LayerComposite) -> Self {
        Self::new(DrawableKind::Layers(layers))
    }

    #[inline]
    pub fn kind(&self) -> &DrawableKind {
        &self.0.kind
    }

    /// The bitmap this drawable draws directly, if any.
    pub fn as_bitmap(&self) -> Option<&Bitmap> {
        match &self.0.kind {
            DrawableKind::Bitmap(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_layers(&self) -> Option<&LayerComposite> {
        match &self.0.kind {
            DrawableKind::Layers(l) => Some(l),
            _ => None,
        }
    }

    /// Natural width in logical pixels; `None` when the drawable has none.
    pub fn intrinsic_width(&self) -> Option<f32> {
        match &self.0.kind {
            DrawableKind::Bitmap(b) => Some(b.width() as f32),
            DrawableKind::Shape(_) => None,
            DrawableKind::Layers(l) => l.max_intrinsic(DrawableRef::intrinsic_width),
        }
    }

    /// Natural height in logical pixels; `None` when the drawable has none.
    pub fn intrinsic_height(&self) -> Option<f32> {
        match &self.0.kind {
            DrawableKind::Bitmap(b) => Some(b.height() as f32),
            DrawableKind::Shape(_) => None,
            DrawableKind::Layers(l) => l.max_intrinsic(DrawableRef::intrinsic_height),
        }
    }

    /// Binds (or with `None`, unbinds) the view that receives this
    /// drawable's invalidation and scheduling callbacks.
    pub fn set_callback(&self, owner: Option<OwnerId>) {
        self.0.callback.set(owner);
    }

    pub fn callback(&self) -> Option<OwnerId> {
        self.0.callback.get()
    }

    #[inline]
    pub fn ptr_eq(a: &DrawableRef, b: &DrawableRef) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl PartialEq for DrawableRef {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl Eq for DrawableRef {}

impl fmt::Debug for DrawableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DrawableRef({:p}, ", Rc::as_ptr(&self.0))?;
        match &self.0.kind {
            DrawableKind::Bitmap(b) => write!(f, "{:?})", b),
            DrawableKind::Shape(s) => write!(f, "{:?})", s),
            DrawableKind::Layers(l) => write!(f, "Layers[{}])", l.layer_count()),
        }
    }
}
