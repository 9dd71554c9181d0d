//! Typed error definitions for Texture Search.
//!
//! All errors are serializable (for `--json` output and logs), displayable,
//! and matchable by variant.

mod config;
mod search;

pub use config::ConfigError;
pub use search::{SearchError, USER_FACING_FAILURE};
