//! Domain error types for Edit Review.
//!
//! These errors represent domain-level failures that can occur while loading
//! a dataset, filling in a review form or moving between entries. None of them
//! ends a session; the application layer turns them into user-facing notices.

use thiserror::Error;

/// Errors raised while turning uploaded bytes into an entry collection.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Invalid JSON file: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Expected a JSON array or object of entries, found {0}")]
    UnsupportedShape(&'static str),

    #[error("Entry #{index} is invalid: {reason}")]
    InvalidEntry { index: usize, reason: String },

    #[error("Duplicate entry uid: {0}")]
    DuplicateUid(String),

    #[error("No entries found in the uploaded file")]
    Empty,

    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
}

impl DatasetError {
    /// Malformed input is reported as an error; an empty dataset only blocks.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, DatasetError::Empty)
    }
}

/// Errors related to the per-entry review form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Select at least one issue first")]
    IssuesRequired,

    #[error("Choose accept, accept w/ revision or reject first")]
    DecisionRequired,

    #[error("Answer the section placement question first")]
    PlacementRequired,

    #[error("Check \"Other\" before describing the issue")]
    OtherNotChecked,

    #[error("A target section only applies when the placement is \"No\"")]
    TargetSectionUnavailable,

    #[error("Review already submitted; stay on this entry to revise it")]
    AlreadySubmitted,

    #[error("Review upload already in progress")]
    UploadInFlight,
}

/// Errors related to moving the current-entry pointer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Please upload a JSON file to begin")]
    NoDataset,

    #[error("Entry not found: {0}")]
    UnknownEntry(String),

    #[error("Submit the review before moving to the next entry")]
    NotSubmitted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dataset_is_not_malformed() {
        assert!(!DatasetError::Empty.is_malformed());
        assert!(DatasetError::UnsupportedShape("a number").is_malformed());
        assert!(DatasetError::DuplicateUid("0".into()).is_malformed());
    }
}
