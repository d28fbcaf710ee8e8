use crate::application::review::ReviewForm;
use crate::data::EntryStore;
use crate::domain::{Entry, EntryUid};

/// Severity of the notice shown above the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Everything one reviewer's session owns.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Correlates log lines of one session.
    pub session_id: String,
    pub entries: EntryStore,
    /// Uids in load order.
    pub uids: Vec<EntryUid>,
    pub current_uid: Option<EntryUid>,
    /// Answers for `current_uid`; replaced whenever the selection changes.
    pub form: Option<ReviewForm>,
    /// Digest of the bytes the current dataset was parsed from.
    pub dataset_digest: Option<u64>,
    pub dataset_source: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            ..Default::default()
        }
    }

    pub fn has_dataset(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn current_entry(&self) -> Option<&Entry> {
        self.entries.get(self.current_uid.as_deref()?)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.entries.position(self.current_uid.as_deref()?)
    }

    /// Form for `uid`, if `uid` is the selected entry.
    pub fn form_for(&mut self, uid: &str) -> Option<&mut ReviewForm> {
        self.form.as_mut().filter(|form| form.entry_uid() == uid)
    }
}

/// Transient presentation state.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session: SessionState,
    pub ui: UiState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            ui: UiState::default(),
        }
    }

    pub fn current_entry(&self) -> Option<&Entry> {
        self.session.current_entry()
    }

    pub fn form(&self) -> Option<&ReviewForm> {
        self.session.form.as_ref()
    }

    /// Entry the "next" button would move to.
    pub fn next_entry(&self) -> Option<&Entry> {
        let current = self.session.current_uid.as_deref()?;
        let next = crate::application::review::navigation::next_uid(&self.session.uids, current)?;
        self.session.entries.get(next)
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.ui.notice = Some(notice);
    }
}
