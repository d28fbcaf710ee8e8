use super::super::super::state::{AppState, Notice};
use super::super::action::DatasetAction;
use super::super::command::Command;
use crate::application::review::ReviewForm;
use crate::data::{LoadedDataset, parse_dataset};
use crate::infra::hash::hash64;

pub fn reduce(state: &mut AppState, action: DatasetAction) -> Vec<Command> {
    match action {
        DatasetAction::OpenFile(path) => vec![Command::ReadDatasetFile { path }],
        DatasetAction::Upload { source, bytes } => {
            upload(state, source, &bytes);
            Vec::new()
        }
    }
}

fn upload(state: &mut AppState, source: String, bytes: &[u8]) {
    // Same bytes again: keep the selection and any answers in progress.
    if state.session.has_dataset() && state.session.dataset_digest == Some(hash64(bytes)) {
        state.set_notice(Notice::info("This file is already loaded."));
        return;
    }

    match parse_dataset(bytes) {
        Ok(loaded) => install(state, source, loaded),
        Err(err) if err.is_malformed() => {
            log::warn!("Rejected dataset {source}: {err}");
            state.set_notice(Notice::error(err.to_string()));
        }
        Err(err) => {
            log::info!("Dataset {source} has no entries");
            state.set_notice(Notice::info(err.to_string()));
        }
    }
}

fn install(state: &mut AppState, source: String, loaded: LoadedDataset) {
    let session = &mut state.session;
    session.uids = loaded.store.uids();
    session.entries = loaded.store;
    session.current_uid = session.uids.first().cloned();
    session.form = session.current_uid.as_deref().map(ReviewForm::new);
    session.dataset_digest = Some(loaded.digest);

    log::info!(
        "[{}] Loaded {} entries from {source} (digest {:016x})",
        session.session_id,
        session.entries.len(),
        loaded.digest
    );
    session.dataset_source = Some(source);

    let count = session.entries.len();
    state.set_notice(Notice::success(format!(
        "File loaded successfully! {count} entries."
    )));
}
