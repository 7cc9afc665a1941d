use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TaskError};
use crate::model::{pending_line, PendingTask, Priority};
use crate::store::{DataStore, TaskList};

pub const MISSING_TEXT: &str = "Missing tasks string. Nothing added!";

/// Appends a pending task. `words` are joined with single spaces to form the
/// text, so `task add 2 hello world` and `task add 2 "hello world"` agree.
pub fn run<S: DataStore>(
    store: &mut S,
    priority: Option<&str>,
    words: &[String],
) -> Result<CmdResult> {
    let text = words.join(" ");
    let text = text.trim();
    let raw_priority = match priority {
        Some(p) if !p.trim().is_empty() && !text.is_empty() => p,
        _ => return Err(TaskError::MissingArgument(MISSING_TEXT)),
    };
    if text.contains(&['\n', '\r'][..]) {
        return Err(TaskError::MultilineText);
    }
    let priority = Priority::parse(raw_priority)?;

    store.append_line(TaskList::Pending, &pending_line(&priority, text))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added task: \"{}\" with priority {}",
        text, priority
    )));
    result.affected.push(PendingTask {
        index: 0,
        priority,
        text: text.to_string(),
    });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::store::memory::InMemoryStore;

    fn words(s: &str) -> Vec<String> {
        s.split(' ').map(String::from).collect()
    }

    #[test]
    fn appends_line() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, Some("2"), &words("hello world")).unwrap();

        assert_eq!(store.raw(TaskList::Pending), Some("2 hello world\n"));
        assert_eq!(
            result.messages[0].content,
            "Added task: \"hello world\" with priority 2"
        );
    }

    #[test]
    fn added_tasks_show_up_in_list() {
        let mut store = InMemoryStore::new();
        run(&mut store, Some("5"), &words("later")).unwrap();
        run(&mut store, Some("1"), &["first thing".to_string()]).unwrap();

        let listed = list::run(&store).unwrap();
        let pairs: Vec<_> = listed
            .pending_tasks()
            .iter()
            .map(|t| (t.priority.as_str(), t.text.as_str()))
            .collect();
        assert_eq!(pairs, vec![("1", "first thing"), ("5", "later")]);
    }

    #[test]
    fn missing_priority_or_text_writes_nothing() {
        let mut store = InMemoryStore::new();

        let err = run(&mut store, None, &[]).unwrap_err();
        assert!(matches!(err, TaskError::MissingArgument(MISSING_TEXT)));

        let err = run(&mut store, Some("3"), &[]).unwrap_err();
        assert!(matches!(err, TaskError::MissingArgument(_)));

        let err = run(&mut store, Some("3"), &["   ".to_string()]).unwrap_err();
        assert!(matches!(err, TaskError::MissingArgument(_)));

        assert_eq!(store.raw(TaskList::Pending), None);
    }

    #[test]
    fn non_numeric_priority_is_rejected() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, Some("high"), &words("do it")).unwrap_err();
        assert!(matches!(err, TaskError::InvalidPriority(p) if p == "high"));
        assert_eq!(store.raw(TaskList::Pending), None);
    }

    #[test]
    fn multiline_text_is_rejected() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, Some("1"), &["one\ntwo".to_string()]).unwrap_err();
        assert!(matches!(err, TaskError::MultilineText));
        assert_eq!(store.raw(TaskList::Pending), None);
    }

    #[test]
    fn write_failure_propagates() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let err = run(&mut store, Some("1"), &words("x")).unwrap_err();
        assert!(matches!(err, TaskError::Io(_)));
    }
}
