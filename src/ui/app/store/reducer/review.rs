use super::super::super::state::{AppState, Notice, NoticeLevel};
use super::super::action::ReviewAction;
use super::super::command::Command;
use crate::application::review::ReviewForm;
use crate::domain::{EntryUid, FormError};

type FormEdit = Box<dyn FnOnce(&mut ReviewForm) -> Result<(), FormError>>;

fn edit(f: impl FnOnce(&mut ReviewForm) -> Result<(), FormError> + 'static) -> FormEdit {
    Box::new(f)
}

pub fn reduce(state: &mut AppState, action: ReviewAction) -> Vec<Command> {
    let (uid, apply): (EntryUid, FormEdit) = match action {
        ReviewAction::Submit { uid } => return submit(state, &uid),
        ReviewAction::SetIssue {
            uid,
            issue,
            checked,
        } => (uid, edit(move |form| form.set_issue(issue, checked))),
        ReviewAction::ToggleIssue { uid, issue } => {
            (uid, edit(move |form| form.toggle_issue(issue)))
        }
        ReviewAction::SetOtherText { uid, text } => {
            (uid, edit(move |form| form.set_other_text(text)))
        }
        ReviewAction::ChooseDecision { uid, decision } => {
            (uid, edit(move |form| form.choose_decision(decision)))
        }
        ReviewAction::ChoosePlacement { uid, placement } => {
            (uid, edit(move |form| form.choose_placement(placement)))
        }
        ReviewAction::SetTargetSection { uid, text } => {
            (uid, edit(move |form| form.set_target_section(text)))
        }
    };

    let Some(form) = state.session.form_for(&uid) else {
        log::debug!("Ignoring form edit for entry {uid}, which is not selected");
        return Vec::new();
    };
    match apply(form) {
        Ok(()) => {
            // A valid edit supersedes the previous complaint.
            if state
                .ui
                .notice
                .as_ref()
                .is_some_and(|n| n.level == NoticeLevel::Error)
            {
                state.ui.notice = None;
            }
        }
        Err(err) => state.set_notice(Notice::error(err.to_string())),
    }
    Vec::new()
}

fn submit(state: &mut AppState, uid: &str) -> Vec<Command> {
    let record = match state.session.form_for(uid).map(|form| form.begin_submit()) {
        Some(Ok(record)) => record,
        Some(Err(err)) => {
            state.set_notice(Notice::error(err.to_string()));
            return Vec::new();
        }
        None => {
            log::debug!("Ignoring submit for entry {uid}, which is not selected");
            return Vec::new();
        }
    };

    let Some(entry) = state.session.entries.get(uid) else {
        if let Some(form) = state.session.form_for(uid) {
            form.fail_submit();
        }
        return Vec::new();
    };
    let entry = Box::new(entry.with_review(record.clone()));

    log::info!(
        "[{}] Submitting review for entry {uid}",
        state.session.session_id
    );
    state.ui.notice = None;
    vec![Command::UploadReview { entry, record }]
}
