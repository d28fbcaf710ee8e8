//! Root app struct.

use std::sync::Arc;

use object_store::memory::InMemory;

use super::state::AppState;
use crate::domain::Entry;
use crate::infra::sink::{ObjectStoreSink, ReviewSink};

/// One reviewer's session plus the sink submitted reviews go to.
pub struct ReviewApp {
    pub state: AppState,
    pub sink: Arc<dyn ReviewSink>,
    /// Object path prefix for uploaded reviews.
    pub prefix: String,
}

impl ReviewApp {
    pub fn new(sink: Arc<dyn ReviewSink>, prefix: impl Into<String>) -> Self {
        let state = AppState::new();
        let prefix = prefix.into();
        log::info!(
            "[{}] Session started, reviews go to {} under '{prefix}'",
            state.session.session_id,
            sink.describe()
        );
        Self {
            state,
            sink,
            prefix,
        }
    }

    /// App backed by an in-memory store, plus the store for inspection.
    pub fn new_for_test() -> (Self, Arc<InMemory>) {
        let (sink, memory) = ObjectStoreSink::in_memory();
        (Self::new(Arc::new(sink), "test"), memory)
    }

    pub fn current_entry(&self) -> Option<&Entry> {
        self.state.current_entry()
    }

    pub fn current_uid(&self) -> Option<&str> {
        self.state.session.current_uid.as_deref()
    }
}
