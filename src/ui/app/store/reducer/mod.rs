pub mod async_handler;
pub mod dataset;
pub mod navigation;
pub mod review;

use super::super::state::AppState;
use super::action::Action;
use super::command::Command;

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        Action::Dataset(action) => dataset::reduce(state, action),
        Action::Navigation(action) => navigation::reduce(state, action),
        Action::Review(action) => review::reduce(state, action),
        Action::Async(action) => async_handler::reduce(state, action),
    }
}
