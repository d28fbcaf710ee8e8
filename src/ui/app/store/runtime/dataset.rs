use std::path::PathBuf;

use super::super::super::ReviewApp;
use super::super::action::{Action, AsyncAction, DatasetAction};

pub fn read_dataset_file(app: &mut ReviewApp, path: PathBuf) {
    let source = path.display().to_string();
    let action = match std::fs::read(&path) {
        Ok(bytes) => Action::Dataset(DatasetAction::Upload { source, bytes }),
        Err(err) => Action::Async(AsyncAction::DatasetReadFailed {
            source,
            error: err.to_string(),
        }),
    };
    app.dispatch(action);
}
