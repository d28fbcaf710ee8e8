use super::super::super::state::{AppState, Notice, SessionState};
use super::super::action::NavigationAction;
use super::super::command::Command;
use crate::application::review::ReviewForm;
use crate::application::review::navigation::next_uid;
use crate::domain::{EntryUid, NavigationError};

pub fn reduce(state: &mut AppState, action: NavigationAction) -> Vec<Command> {
    let (result, notice) = match action {
        NavigationAction::SelectEntry { uid } => (select_entry(&mut state.session, &uid), None),
        NavigationAction::AdvanceToNext => {
            (advance_to_next(&mut state.session).map(|_| ()), None)
        }
        NavigationAction::StayOnEntry => (
            stay_on_entry(&mut state.session),
            Some(Notice::info("You can review or revise your answers.")),
        ),
    };
    state.ui.notice = match result {
        Ok(()) => notice,
        Err(err) => Some(Notice::error(err.to_string())),
    };
    Vec::new()
}

/// Point the session at `uid`. Answers in progress for the previous entry
/// are discarded, submitted or not.
pub fn select_entry(session: &mut SessionState, uid: &str) -> Result<(), NavigationError> {
    if !session.has_dataset() {
        return Err(NavigationError::NoDataset);
    }
    if !session.entries.contains(uid) {
        return Err(NavigationError::UnknownEntry(uid.to_string()));
    }
    if session.current_uid.as_deref() == Some(uid) {
        return Ok(());
    }
    reset_to(session, uid.to_string());
    Ok(())
}

/// Move to the entry after the current one, wrapping to the first.
pub fn advance_to_next(session: &mut SessionState) -> Result<EntryUid, NavigationError> {
    let current = session
        .current_uid
        .clone()
        .ok_or(NavigationError::NoDataset)?;
    if !session.form.as_ref().is_some_and(|f| f.is_submitted()) {
        return Err(NavigationError::NotSubmitted);
    }
    let next = next_uid(&session.uids, &current)
        .cloned()
        .ok_or(NavigationError::UnknownEntry(current))?;
    reset_to(session, next.clone());
    Ok(next)
}

/// Reopen the submitted review of the current entry for revision.
pub fn stay_on_entry(session: &mut SessionState) -> Result<(), NavigationError> {
    let form = session
        .form
        .as_mut()
        .filter(|f| f.is_submitted())
        .ok_or(NavigationError::NotSubmitted)?;
    form.reopen();
    Ok(())
}

fn reset_to(session: &mut SessionState, uid: EntryUid) {
    log::debug!("[{}] Selected entry {uid}", session.session_id);
    session.form = Some(ReviewForm::new(uid.clone()));
    session.current_uid = Some(uid);
}
