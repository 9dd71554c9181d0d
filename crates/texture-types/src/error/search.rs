//! Search pipeline errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown to users for any failed search. Internal detail goes to logs.
pub const USER_FACING_FAILURE: &str = "Search failed. Please try again.";

/// Errors that abort a search.
///
/// Stage-2 parse problems are not represented here: they are recovered by
/// the synthesizer fallback and never reach the session.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum SearchError {
    /// Network failure or non-success HTTP status from the assistant service
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The service answered but the body was not a content-block response
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },
}

impl SearchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { message: message.into() }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse { message: message.into() }
    }

    /// The text the presentation layer may render.
    pub fn user_message(&self) -> &'static str {
        USER_FACING_FAILURE
    }
}
