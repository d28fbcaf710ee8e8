//! Reducer-style state updates + side-effect commands.

mod action;
mod command;
mod reducer;
mod runtime;

pub use action::{Action, AsyncAction, DatasetAction, NavigationAction, ReviewAction};
pub use command::Command;
pub use reducer::navigation::{advance_to_next, select_entry, stay_on_entry};

use super::ReviewApp;

impl ReviewApp {
    pub fn dispatch(&mut self, action: Action) {
        let commands = reducer::reduce(&mut self.state, action);
        for command in commands {
            runtime::run(self, command);
        }
    }
}
