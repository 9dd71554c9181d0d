//! Protocol definitions for the assistant service.
//!
//! Only the Anthropic Messages API is spoken.

pub mod claude;

pub use claude::{
    ClaudeMessage, ClaudeRole, ClaudeUsage, MessagesRequest, MessagesResponse, ToolDeclaration,
};
