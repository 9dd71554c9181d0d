use serde::Serialize;

use super::texture::TextureRecord;

/// Lifecycle of a search session. Exactly one state is active at a time.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum SessionState {
    /// No search issued yet.
    #[default]
    Idle,
    Loading,
    Success(Vec<TextureRecord>),
    /// The search completed with no usable entries.
    Empty,
    /// Holds the user-facing message only.
    Failed(String),
}

impl SessionState {
    pub fn records(&self) -> &[TextureRecord] {
        match self {
            Self::Success(records) => records,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True for the states a completed search settles in.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Empty | Self::Failed(_))
    }
}
