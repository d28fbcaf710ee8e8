use super::super::super::ReviewApp;
use super::super::action::{Action, AsyncAction};
use crate::application::review::{ReviewExporter, review_object_path};
use crate::domain::{Entry, ReviewRecord};

pub fn upload_review(app: &mut ReviewApp, entry: Entry, record: ReviewRecord) {
    let path = review_object_path(&app.prefix, &entry.uid);
    let result = (|| -> Result<(), String> {
        let bytes = ReviewExporter::to_json_bytes(&entry)
            .map_err(|e| format!("Failed to serialize review: {e}"))?;
        log::debug!(
            "Uploading {} bytes to {} at {path}",
            bytes.len(),
            app.sink.describe()
        );
        crate::block_on(app.sink.upload(&path, bytes)).map_err(|e| e.to_string())
    })();

    app.dispatch(Action::Async(AsyncAction::ReviewUploaded {
        uid: entry.uid,
        path,
        record,
        result,
    }));
}
