use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{parse_completed, parse_pending, CompletedTask, PendingTask};
use crate::store::{DataStore, TaskList};

pub const NO_PENDING: &str = "There are no pending tasks!";
pub const NO_COMPLETED: &str = "There are no completed todos!";

/// Loads pending tasks in priority order. A missing file is not an error: it
/// yields no tasks and an info message on `result`. Tasks whose priority is
/// not a number (hand-edited files) get a warning each.
pub fn load_pending<S: DataStore>(store: &S, result: &mut CmdResult) -> Result<Vec<PendingTask>> {
    let Some(raw) = store.read(TaskList::Pending)? else {
        result.add_message(CmdMessage::info(NO_PENDING));
        return Ok(Vec::new());
    };

    let tasks = parse_pending(&raw);
    for task in tasks.iter().filter(|t| t.priority.rank().is_none()) {
        result.add_message(CmdMessage::warning(format!(
            "Task #{} has non-numeric priority \"{}\", listed last.",
            task.index, task.priority
        )));
    }
    Ok(tasks)
}

/// Loads completed tasks in file order, same missing-file handling as
/// [`load_pending`].
pub fn load_completed<S: DataStore>(
    store: &S,
    result: &mut CmdResult,
) -> Result<Vec<CompletedTask>> {
    match store.read(TaskList::Completed)? {
        Some(raw) => Ok(parse_completed(&raw)),
        None => {
            result.add_message(CmdMessage::info(NO_COMPLETED));
            Ok(Vec::new())
        }
    }
}

/// Rewrites the pending file with `tasks`, in the order given.
pub fn save_pending<S: DataStore>(store: &mut S, tasks: &[PendingTask]) -> Result<()> {
    let lines: Vec<String> = tasks.iter().map(PendingTask::to_line).collect();
    store.replace(TaskList::Pending, &lines)
}

/// Parses a 1-based position as typed by the user.
pub fn parse_position(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}
