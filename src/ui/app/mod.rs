//! Session state, the reducer store and the app that drives them.

mod root;
mod state;
mod store;

pub use root::ReviewApp;
pub use state::{AppState, Notice, NoticeLevel, SessionState, UiState};
pub use store::{
    Action, AsyncAction, Command, DatasetAction, NavigationAction, ReviewAction, advance_to_next,
    select_entry, stay_on_entry,
};
