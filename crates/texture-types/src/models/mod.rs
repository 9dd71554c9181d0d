//! Core domain models for Texture Search.

mod category;
mod content;
mod query;
mod reference;
mod session;
mod texture;

pub use category::{Category, TEXTURE_CATEGORIES};
pub use content::{RawContentBlock, RawSearchItem};
pub use query::SearchQuery;
pub use reference::TrustedReference;
pub use session::SessionState;
pub use texture::{PreviewSelection, TextureCandidate, TextureRecord};
