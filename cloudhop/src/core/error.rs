//! Typed failures of the jump computation.

use serde::Serialize;

/// Why a sequence has no jump count.
///
/// Every variant is a property of the input alone; retrying the same input
/// always yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JumpError {
    #[error("invalid length: at least one cloud is required")]
    InvalidLength,
    #[error("invalid start: the first cloud is a thundercloud")]
    InvalidStart,
    #[error("invalid element: cloud {index} is {value}, expected 0 or 1")]
    InvalidElement { index: usize, value: i64 },
    /// `index` is the thundercloud a forced single step would land on.
    #[error("unsolvable: no safe jump past cloud {}, cloud {index} is a thundercloud", .index.saturating_sub(1))]
    Unsolvable { index: usize },
}

impl JumpError {
    /// Stable snake_case tag used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            JumpError::InvalidLength => "invalid_length",
            JumpError::InvalidStart => "invalid_start",
            JumpError::InvalidElement { .. } => "invalid_element",
            JumpError::Unsolvable { .. } => "unsolvable",
        }
    }

    /// Offending cloud index, when the error points at one.
    pub fn index(&self) -> Option<usize> {
        match self {
            JumpError::InvalidLength => None,
            JumpError::InvalidStart => Some(0),
            JumpError::InvalidElement { index, .. } | JumpError::Unsolvable { index } => {
                Some(*index)
            }
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind(),
            message: self.to_string(),
            index: self.index(),
        }
    }
}

/// Serializable view of a [`JumpError`] for CLI JSON output and HTTP bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}
