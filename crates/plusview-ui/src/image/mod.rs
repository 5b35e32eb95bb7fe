//! The image widget and the pieces it is built from.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`scale`] | `ScaleMode` registry and its host-native counterparts |
//! | [`source`] | `ContentSpecifier`, `ResourceId`, `Uri` |
//! | [`resolver`] | host lookup traits and `SourceResolver` |
//! | [`state`] | `DrawableState`: content, default and layer wrapper |
//! | [`recycle`] | released-bitmap detection |
//! | [`transform`] | top-crop matrix |
//! | [`surface`] | `RenderSurface` contract and the `ImageSurface` adapter |
//! | [`view`] | `ImageViewPlus` |
//! | [`attributes`] | declarative construction-time attributes |

pub mod attributes;
pub mod error;
pub mod recycle;
pub mod resolver;
pub mod scale;
pub mod source;
pub mod state;
pub mod surface;
pub mod transform;
pub mod view;

pub use attributes::ImageAttributes;
pub use error::{ConfigError, ResolveError};
pub use resolver::{ContentAccess, FileContentAccess, ResourceProvider, ResourceTable, SourceResolver};
pub use scale::{NativeScale, ScaleMode};
pub use source::{ContentSpecifier, ResourceId, Uri};
pub use state::DrawableState;
pub use surface::{ImageSurface, RenderSurface};
pub use view::{DefaultListener, ImageViewPlus};
