#![allow(clippy::uninlined_format_args)]

pub mod accessibility;
pub mod age;
pub mod collapse;
pub mod comment;
pub mod header;
pub mod locale;
pub mod overlay;
pub mod renderable;
pub mod score;
pub mod theme;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use comment::CommentRecord;
pub use overlay::{ChangeOverlay, MemoryOverlay, OverlaySnapshot};
pub use renderable::{PresentationContext, RenderableComment};
