//! Moves a pending task to the completed list.
//!
//! This touches two files and is not atomic as a whole. The text is appended
//! to the completed list first, then the pending file is replaced (itself an
//! atomic rename for `FileStore`). Dying between the two steps leaves the task
//! in both lists rather than in neither.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TaskError};
use crate::store::{DataStore, TaskList};

use super::helpers::{load_pending, parse_position, save_pending};

pub const MISSING_NUMBER: &str = "Missing NUMBER for marking tasks as done.";

/// Completes the pending task whose load-assigned index equals `position`.
pub fn run<S: DataStore>(store: &mut S, position: Option<&str>) -> Result<CmdResult> {
    let raw = position
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or(TaskError::MissingArgument(MISSING_NUMBER))?;

    let mut result = CmdResult::default();
    let mut tasks = load_pending(store, &mut result)?;

    let found = parse_position(raw).and_then(|p| tasks.iter().position(|t| t.index == p));
    let Some(offset) = found else {
        return Err(TaskError::NotPending(raw.to_string()));
    };

    let task = tasks.remove(offset);
    store.append_line(TaskList::Completed, &task.text)?;
    save_pending(store, &tasks)?;

    result.add_message(CmdMessage::success("Marked item as done."));
    result.affected.push(task);
    Ok(result)
}
