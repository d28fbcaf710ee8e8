use std::path::PathBuf;

use crate::domain::{Decision, EntryUid, IssueKind, Placement, ReviewRecord};

#[derive(Debug)]
pub enum Action {
    Dataset(DatasetAction),
    Navigation(NavigationAction),
    Review(ReviewAction),
    Async(AsyncAction),
}

#[derive(Debug)]
pub enum DatasetAction {
    /// Read a dataset from disk, then upload its bytes.
    OpenFile(PathBuf),
    /// Raw dataset bytes, from a file picker or stdin.
    Upload { source: String, bytes: Vec<u8> },
}

#[derive(Debug)]
pub enum NavigationAction {
    SelectEntry { uid: EntryUid },
    /// Only valid once the current review is submitted.
    AdvanceToNext,
    /// Reopen a submitted review on the same entry for revision.
    StayOnEntry,
}

/// Form edits. Each carries the uid it was made against; edits for an entry
/// that is no longer selected are dropped.
#[derive(Debug)]
pub enum ReviewAction {
    SetIssue {
        uid: EntryUid,
        issue: IssueKind,
        checked: bool,
    },
    ToggleIssue {
        uid: EntryUid,
        issue: IssueKind,
    },
    SetOtherText {
        uid: EntryUid,
        text: String,
    },
    ChooseDecision {
        uid: EntryUid,
        decision: Decision,
    },
    ChoosePlacement {
        uid: EntryUid,
        placement: Placement,
    },
    SetTargetSection {
        uid: EntryUid,
        text: String,
    },
    Submit {
        uid: EntryUid,
    },
}

#[derive(Debug)]
pub enum AsyncAction {
    DatasetReadFailed {
        source: String,
        error: String,
    },
    ReviewUploaded {
        uid: EntryUid,
        path: String,
        record: ReviewRecord,
        result: Result<(), String>,
    },
}
