use std::cell::RefCell;
use std::fmt;

use super::DrawableRef;

/// Identifier of a layer inside a [`LayerComposite`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LayerId(pub u32);

/// One entry of a composite.
#[derive(Debug, Clone)]
pub struct Layer {
    pub id: Option<LayerId>,
    pub drawable: DrawableRef,
}

/// Ordered stack of drawables composited back to front.
///
/// Layers may be replaced through a shared handle (`&self`), so a composite
/// owned elsewhere can have a single slot updated in place.
#[derive(Default)]
pub struct LayerComposite {
    layers: RefCell<Vec<Layer>>,
}

impl LayerComposite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layer(self, id: Option<LayerId>, drawable: DrawableRef) -> Self {
        self.push_layer(id, drawable);
        self
    }

    pub fn push_layer(&self, id: Option<LayerId>, drawable: DrawableRef) {
        self.layers.borrow_mut().push(Layer { id, drawable });
    }

    pub fn layer_count(&self) -> usize {
        self.layers.borrow().len()
    }

    /// Drawable at `index` (back to front).
    pub fn drawable(&self, index: usize) -> Option<DrawableRef> {
        self.layers.borrow().get(index).map(|l| l.drawable.clone())
    }

    pub fn find_index_by_id(&self, id: LayerId) -> Option<usize> {
        self.layers.borrow().iter().position(|l| l.id == Some(id))
    }

    /// Drawable of the first layer tagged `id`.
    pub fn find_drawable_by_id(&self, id: LayerId) -> Option<DrawableRef> {
        self.find_index_by_id(id).and_then(|i| self.drawable(i))
    }

    /// Replaces the drawable of the first layer tagged `id`.
    ///
    /// Returns `false` (and changes nothing) if no layer carries that id.
    pub fn set_drawable_by_id(&self, id: LayerId, drawable: DrawableRef) -> bool {
        let mut layers = self.layers.borrow_mut();
        match layers.iter_mut().find(|l| l.id == Some(id)) {
            Some(layer) => {
                layer.drawable = drawable;
                true
            }
            None => false,
        }
    }

    /// Snapshot of the layer drawables, back to front.
    pub fn drawables(&self) -> Vec<DrawableRef> {
        self.layers.borrow().iter().map(|l| l.drawable.clone()).collect()
    }

    pub(crate) fn max_intrinsic(&self, f: impl Fn(&DrawableRef) -> Option<f32>) -> Option<f32> {
        self.layers
            .borrow()
            .iter()
            .filter_map(|l| f(&l.drawable))
            .reduce(f32::max)
    }
}

impl fmt::Debug for LayerComposite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.layers.borrow().iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::ShapeDrawable;

    fn shape() -> DrawableRef {
        DrawableRef::shape(ShapeDrawable::default())
    }

    #[test]
    fn set_drawable_by_id_replaces_tagged_slot() {
        let frame = shape();
        let slot = shape();
        let composite = LayerComposite::new()
            .with_layer(None, frame.clone())
            .with_layer(Some(LayerId(7)), slot.clone());

        let content = shape();
        assert!(composite.set_drawable_by_id(LayerId(7), content.clone()));
        assert_eq!(composite.drawable(0), Some(frame));
        assert_eq!(composite.drawable(1), Some(content.clone()));
        assert_eq!(composite.find_drawable_by_id(LayerId(7)), Some(content));
        assert_eq!(composite.layer_count(), 2);
    }

    #[test]
    fn set_drawable_by_unknown_id_is_rejected() {
        let slot = shape();
        let composite = LayerComposite::new().with_layer(Some(LayerId(1)), slot.clone());
        assert!(!composite.set_drawable_by_id(LayerId(2), shape()));
        assert_eq!(composite.drawable(0), Some(slot));
        assert_eq!(composite.find_index_by_id(LayerId(2)), None);
    }
}
