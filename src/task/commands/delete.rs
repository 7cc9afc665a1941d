use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TaskError};
use crate::store::DataStore;

use super::helpers::{load_pending, parse_position, save_pending};

pub const MISSING_NUMBER: &str = "Missing NUMBER for deleting tasks.";

/// Deletes the task at a 1-based position of the priority-sorted listing.
/// Nothing is written unless the position is in range.
pub fn run<S: DataStore>(store: &mut S, position: Option<&str>) -> Result<CmdResult> {
    let raw = position
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or(TaskError::MissingArgument(MISSING_NUMBER))?;

    let mut result = CmdResult::default();
    let mut tasks = load_pending(store, &mut result)?;

    let offset = match parse_position(raw) {
        Some(p) if p >= 1 && p <= tasks.len() => p - 1,
        _ => return Err(TaskError::DeleteOutOfRange(raw.to_string())),
    };

    let removed = tasks.remove(offset);
    save_pending(store, &tasks)?;

    result.add_message(CmdMessage::success(format!("Deleted task #{}", raw)));
    result.affected.push(removed);
    Ok(result)
}
