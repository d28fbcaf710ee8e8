//! Application layer (use-cases, policies).
//!
//! Diff highlighting, the review form and navigation rules live here, free of
//! any terminal, storage or runtime concerns.

pub mod review;
