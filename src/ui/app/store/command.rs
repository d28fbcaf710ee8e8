use std::path::PathBuf;

use crate::domain::{Entry, ReviewRecord};

#[derive(Debug, Clone)]
pub enum Command {
    ReadDatasetFile {
        path: PathBuf,
    },
    /// Persist `entry`, which already carries `record` as its review.
    UploadReview {
        entry: Box<Entry>,
        record: ReviewRecord,
    },
}
