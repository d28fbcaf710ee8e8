use super::super::super::state::{AppState, Notice};
use super::super::action::AsyncAction;
use super::super::command::Command;

pub fn reduce(state: &mut AppState, action: AsyncAction) -> Vec<Command> {
    match action {
        AsyncAction::DatasetReadFailed { source, error } => {
            log::warn!("Failed to read dataset {source}: {error}");
            state.set_notice(Notice::error(format!("Could not read {source}: {error}")));
        }
        AsyncAction::ReviewUploaded {
            uid,
            path,
            record,
            result,
        } => match result {
            Ok(()) => {
                // A resubmission replaces the previous record in place.
                if let Some(entry) = state.session.entries.get_mut(&uid) {
                    entry.review = Some(record);
                }
                if let Some(form) = state.session.form_for(&uid) {
                    form.complete_submit();
                }
                log::info!(
                    "[{}] Review for entry {uid} saved to {path}",
                    state.session.session_id
                );
                state.set_notice(Notice::success(format!(
                    "Review submitted and saved to {path}."
                )));
            }
            Err(error) => {
                if let Some(form) = state.session.form_for(&uid) {
                    form.fail_submit();
                }
                log::error!(
                    "[{}] Failed to save review for entry {uid}: {error}",
                    state.session.session_id
                );
                state.set_notice(Notice::error(format!(
                    "Failed to save review: {error}. Submit again to retry."
                )));
            }
        },
    }
    Vec::new()
}
