/// Stacking layer of a draw item; larger paints later.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

/// Paint-order key: `z` first, then recording order within a layer.
///
/// Field order matters, the derived `Ord` compares lexicographically.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}
