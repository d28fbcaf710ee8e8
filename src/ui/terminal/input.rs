//! Command-line parsing for the interactive session.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::domain::{Decision, IssueKind, NavigationError, Placement};
use crate::ui::app::{Action, AppState, DatasetAction, NavigationAction, ReviewAction};

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    InvalidValue(String),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// What one typed line asks for.
#[derive(Debug)]
pub enum Input {
    /// Actions to dispatch in order.
    Dispatch(Vec<Action>),
    List,
    Show,
    Help,
    Quit,
    Nothing,
}

pub fn parse_line(line: &str, state: &AppState) -> Result<Input, InputError> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let input = match command.to_lowercase().as_str() {
        "" => Input::Nothing,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        "list" | "ls" => Input::List,
        "show" => Input::Show,
        "load" => {
            if rest.is_empty() {
                return Err(InputError::Usage("load <path>"));
            }
            dispatch(Action::Dataset(DatasetAction::OpenFile(PathBuf::from(rest))))
        }
        "select" => {
            if rest.is_empty() {
                return Err(InputError::Usage("select <uid>"));
            }
            dispatch(Action::Navigation(NavigationAction::SelectEntry {
                uid: rest.to_string(),
            }))
        }
        "next" => dispatch(Action::Navigation(NavigationAction::AdvanceToNext)),
        "stay" => dispatch(Action::Navigation(NavigationAction::StayOnEntry)),
        "toggle" => {
            if rest.is_empty() {
                return Err(InputError::Usage("toggle <issue>"));
            }
            let issue = IssueKind::from_str(rest).map_err(InputError::InvalidValue)?;
            review(ReviewAction::ToggleIssue {
                uid: current_uid(state)?,
                issue,
            })
        }
        "other" => parse_other(rest, state)?,
        "decide" => {
            let decision = Decision::from_str(rest)
                .map_err(|_| InputError::Usage("decide accept|revise|reject"))?;
            review(ReviewAction::ChooseDecision {
                uid: current_uid(state)?,
                decision,
            })
        }
        "place" => parse_place(rest, state)?,
        "section" => review(ReviewAction::SetTargetSection {
            uid: current_uid(state)?,
            text: rest.to_string(),
        }),
        "submit" => review(ReviewAction::Submit {
            uid: current_uid(state)?,
        }),
        _ => return Err(InputError::UnknownCommand(command.to_string())),
    };
    Ok(input)
}

/// `other <text>` checks "other" when needed, then sets its text.
/// A bare `other` toggles the checkbox.
fn parse_other(rest: &str, state: &AppState) -> Result<Input, InputError> {
    let uid = current_uid(state)?;
    if rest.is_empty() {
        return Ok(review(ReviewAction::ToggleIssue {
            uid,
            issue: IssueKind::Other,
        }));
    }

    let mut actions = Vec::new();
    if !state.form().is_some_and(|f| f.is_checked(IssueKind::Other)) {
        actions.push(Action::Review(ReviewAction::SetIssue {
            uid: uid.clone(),
            issue: IssueKind::Other,
            checked: true,
        }));
    }
    actions.push(Action::Review(ReviewAction::SetOtherText {
        uid,
        text: rest.to_string(),
    }));
    Ok(Input::Dispatch(actions))
}

/// `place yes`, `place no` or `place no <section>`.
fn parse_place(rest: &str, state: &AppState) -> Result<Input, InputError> {
    const USAGE: &str = "place yes | place no [section]";
    let (answer, section) = match rest.split_once(char::is_whitespace) {
        Some((answer, section)) => (answer, section.trim()),
        None => (rest, ""),
    };
    let placement = Placement::from_str(answer).map_err(|_| InputError::Usage(USAGE))?;
    if placement == Placement::Yes && !section.is_empty() {
        return Err(InputError::Usage(USAGE));
    }

    let uid = current_uid(state)?;
    let mut actions = vec![Action::Review(ReviewAction::ChoosePlacement {
        uid: uid.clone(),
        placement,
    })];
    if !section.is_empty() {
        actions.push(Action::Review(ReviewAction::SetTargetSection {
            uid,
            text: section.to_string(),
        }));
    }
    Ok(Input::Dispatch(actions))
}

fn current_uid(state: &AppState) -> Result<String, InputError> {
    state
        .session
        .current_uid
        .clone()
        .ok_or(InputError::Navigation(NavigationError::NoDataset))
}

fn dispatch(action: Action) -> Input {
    Input::Dispatch(vec![action])
}

fn review(action: ReviewAction) -> Input {
    dispatch(Action::Review(action))
}
