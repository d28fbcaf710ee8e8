//! Per-entry review form.
//!
//! Questions unlock in order. The stage is derived from the answers rather
//! than stored, so it cannot drift from what the reviewer actually filled in.

use std::collections::BTreeSet;

use crate::domain::{
    Decision, EntryUid, FormError, IssueKind, Placement, ReviewRecord, other_issue_label,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormStage {
    Unanswered,
    Q1Answered,
    Q2Answered,
    Q3Answered,
    Submitted,
}

/// In-progress answers for the selected entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewForm {
    entry_uid: EntryUid,
    issues: BTreeSet<IssueKind>,
    other_text: String,
    decision: Option<Decision>,
    placement: Option<Placement>,
    target_section: Option<String>,
    uploading: bool,
    submitted: bool,
}

impl ReviewForm {
    pub fn new(entry_uid: impl Into<EntryUid>) -> Self {
        Self {
            entry_uid: entry_uid.into(),
            issues: BTreeSet::new(),
            other_text: String::new(),
            decision: None,
            placement: None,
            target_section: None,
            uploading: false,
            submitted: false,
        }
    }

    pub fn entry_uid(&self) -> &str {
        &self.entry_uid
    }

    pub fn stage(&self) -> FormStage {
        if self.submitted {
            FormStage::Submitted
        } else if self.placement.is_some() {
            FormStage::Q3Answered
        } else if self.decision.is_some() {
            FormStage::Q2Answered
        } else if self.has_issues() {
            FormStage::Q1Answered
        } else {
            FormStage::Unanswered
        }
    }

    /// Issue labels as they are stored in `q1`. A checked "other" with blank
    /// text is left out.
    pub fn selected_issues(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .issues
            .iter()
            .filter(|kind| **kind != IssueKind::Other)
            .map(|kind| kind.label().to_string())
            .collect();
        if self.issues.contains(&IssueKind::Other) && !self.other_text.trim().is_empty() {
            labels.push(other_issue_label(&self.other_text));
        }
        labels
    }

    pub fn has_issues(&self) -> bool {
        self.issues.iter().any(|kind| *kind != IssueKind::Other)
            || (self.issues.contains(&IssueKind::Other) && !self.other_text.trim().is_empty())
    }

    pub fn is_checked(&self, kind: IssueKind) -> bool {
        self.issues.contains(&kind)
    }

    pub fn other_text(&self) -> &str {
        &self.other_text
    }

    pub fn decision(&self) -> Option<Decision> {
        self.decision
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub fn target_section(&self) -> Option<&str> {
        self.target_section.as_deref()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// The decision question is only offered once an issue is selected.
    pub fn decision_available(&self) -> bool {
        self.has_issues()
    }

    pub fn placement_available(&self) -> bool {
        self.has_issues() && self.decision.is_some()
    }

    pub fn can_submit(&self) -> bool {
        self.stage() == FormStage::Q3Answered && !self.uploading
    }

    pub fn set_issue(&mut self, kind: IssueKind, checked: bool) -> Result<(), FormError> {
        self.ensure_editable()?;
        if checked {
            self.issues.insert(kind);
        } else {
            self.issues.remove(&kind);
            if kind == IssueKind::Other {
                self.other_text.clear();
            }
        }
        self.prune();
        Ok(())
    }

    pub fn toggle_issue(&mut self, kind: IssueKind) -> Result<(), FormError> {
        let checked = self.is_checked(kind);
        self.set_issue(kind, !checked)
    }

    pub fn set_other_text(&mut self, text: impl Into<String>) -> Result<(), FormError> {
        self.ensure_editable()?;
        if !self.issues.contains(&IssueKind::Other) {
            return Err(FormError::OtherNotChecked);
        }
        self.other_text = text.into();
        self.prune();
        Ok(())
    }

    pub fn choose_decision(&mut self, decision: Decision) -> Result<(), FormError> {
        self.ensure_editable()?;
        if !self.decision_available() {
            return Err(FormError::IssuesRequired);
        }
        self.decision = Some(decision);
        Ok(())
    }

    pub fn choose_placement(&mut self, placement: Placement) -> Result<(), FormError> {
        self.ensure_editable()?;
        if !self.has_issues() {
            return Err(FormError::IssuesRequired);
        }
        if self.decision.is_none() {
            return Err(FormError::DecisionRequired);
        }
        self.placement = Some(placement);
        match placement {
            Placement::No => {
                self.target_section.get_or_insert_with(String::new);
            }
            Placement::Yes => self.target_section = None,
        }
        Ok(())
    }

    pub fn set_target_section(&mut self, text: impl Into<String>) -> Result<(), FormError> {
        self.ensure_editable()?;
        if self.placement != Some(Placement::No) {
            return Err(FormError::TargetSectionUnavailable);
        }
        self.target_section = Some(text.into());
        Ok(())
    }

    /// Freeze the current answers into a record without changing the form.
    pub fn record(&self) -> Result<ReviewRecord, FormError> {
        let q1 = self.selected_issues();
        if q1.is_empty() {
            return Err(FormError::IssuesRequired);
        }
        let q2 = self.decision.ok_or(FormError::DecisionRequired)?;
        let q3 = self.placement.ok_or(FormError::PlacementRequired)?;
        let q3_section = match q3 {
            Placement::No => Some(self.target_section.clone().unwrap_or_default()),
            Placement::Yes => None,
        };
        Ok(ReviewRecord {
            q1,
            q2,
            q3,
            q3_section,
        })
    }

    /// Start a submission: returns the record to upload and locks the form
    /// until the upload settles.
    pub fn begin_submit(&mut self) -> Result<ReviewRecord, FormError> {
        self.ensure_editable()?;
        let record = self.record()?;
        self.uploading = true;
        Ok(record)
    }

    pub fn complete_submit(&mut self) {
        self.uploading = false;
        self.submitted = true;
    }

    /// Upload failed: answers stay as they were, ready for another attempt.
    pub fn fail_submit(&mut self) {
        self.uploading = false;
    }

    /// Unlock a submitted form for revision. Answers are kept.
    pub fn reopen(&mut self) {
        self.submitted = false;
    }

    fn ensure_editable(&self) -> Result<(), FormError> {
        if self.uploading {
            return Err(FormError::UploadInFlight);
        }
        if self.submitted {
            return Err(FormError::AlreadySubmitted);
        }
        Ok(())
    }

    /// Drop answers whose prerequisites no longer hold.
    fn prune(&mut self) {
        if !self.has_issues() {
            self.decision = None;
        }
        if self.decision.is_none() {
            self.placement = None;
        }
        if self.placement != Some(Placement::No) {
            self.target_section = None;
        }
    }
}
