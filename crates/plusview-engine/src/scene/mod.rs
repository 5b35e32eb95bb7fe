//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - scope commands to nested clip rects

mod cmd;
mod key;
mod list;

pub use cmd::{DrawCmd, ImageCmd, RectCmd};
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
