//! # Texture Types
//!
//! Core types, wire protocol, and error definitions for Texture Search.
//!
//! - **`error`** - Typed errors for the search pipeline and client configuration
//! - **`models`** - Domain models (references, candidates, records, session state)
//! - **`protocol`** - Messages API request/response types
//!
//! ## Architecture Role
//!
//! ```text
//!            texture-types (this crate)
//!                    │
//!          ┌─────────┴─────────┐
//!          ▼                   ▼
//!   texture-client       texture-core
//!          │                   │
//!          └─────────┬─────────┘
//!                    ▼
//!             texture-search
//! ```

pub mod error;
pub mod models;
pub mod protocol;

pub use error::{ConfigError, SearchError};

pub use models::{
    Category, PreviewSelection, RawContentBlock, RawSearchItem, SearchQuery, SessionState,
    TextureCandidate, TextureRecord, TrustedReference, TEXTURE_CATEGORIES,
};
