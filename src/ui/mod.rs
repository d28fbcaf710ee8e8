//! UI layer: app state and store, plus the terminal front end.

pub mod app;
pub mod terminal;
