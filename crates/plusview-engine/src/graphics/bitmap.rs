use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use image::RgbaImage;

/// Shared handle to decoded pixels whose owner may release them at any time.
///
/// Releasing ([`recycle`](Self::recycle)) drops the pixel buffer for every
/// clone of the handle; the dimensions stay readable so layout does not jump.
/// Drawing a released bitmap is a caller bug the UI guards against.
#[derive(Clone)]
pub struct Bitmap(Rc<BitmapInner>);

struct BitmapInner {
    width: u32,
    height: u32,
    pixels: RefCell<Option<RgbaImage>>,
}

impl Bitmap {
    pub fn new(pixels: RgbaImage) -> Self {
        Self(Rc::new(BitmapInner {
            width: pixels.width(),
            height: pixels.height(),
            pixels: RefCell::new(Some(pixels)),
        }))
    }

    /// A bitmap filled with a single straight-alpha RGBA value.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::new(RgbaImage::from_pixel(width, height, image::Rgba(rgba)))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.0.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.0.height
    }

    /// Returns `true` once the pixel buffer has been released.
    #[inline]
    pub fn is_recycled(&self) -> bool {
        self.0.pixels.borrow().is_none()
    }

    /// Releases the pixel buffer. Idempotent.
    pub fn recycle(&self) {
        if self.0.pixels.borrow_mut().take().is_some() {
            log::debug!("bitmap {}x{} recycled", self.0.width, self.0.height);
        }
    }

    /// Runs `f` against the live pixels, or returns `None` if released.
    pub fn with_pixels<R>(&self, f: impl FnOnce(&RgbaImage) -> R) -> Option<R> {
        self.0.pixels.borrow().as_ref().map(f)
    }

    #[inline]
    pub fn ptr_eq(a: &Bitmap, b: &Bitmap) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

/// Identity comparison.
impl PartialEq for Bitmap {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.0.width)
            .field("height", &self.0.height)
            .field("recycled", &self.is_recycled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recycle_is_shared_across_clones() {
        let a = Bitmap::solid(4, 2, [255, 0, 0, 255]);
        let b = a.clone();
        assert!(!b.is_recycled());
        a.recycle();
        assert!(b.is_recycled());
        assert_eq!((b.width(), b.height()), (4, 2));
        assert!(b.with_pixels(|p| p.len()).is_none());
    }

    #[test]
    fn recycle_twice_is_harmless() {
        let a = Bitmap::solid(1, 1, [0; 4]);
        a.recycle();
        a.recycle();
        assert!(a.is_recycled());
    }

    #[test]
    fn equality_is_identity() {
        let a = Bitmap::solid(1, 1, [0; 4]);
        let b = Bitmap::solid(1, 1, [0; 4]);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
