//! Task records and the line format they are stored in.
//!
//! Pending tasks live one per line as `<priority> <text>`, completed tasks as
//! bare text. Indexes are handed out at load time and never written back, so
//! an index only means something relative to the load that produced it.

use crate::error::{Result, TaskError};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// The priority token of a pending line, kept exactly as written.
///
/// Ordering goes by the integer value of the token. Tokens that are not
/// integers (only possible in hand-edited files, `add` rejects them) sort
/// after every numeric priority and compare equal to each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Priority(String);

impl Priority {
    /// Validates user input: the token must parse as an integer.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        raw.parse::<i64>()
            .map(|_| Priority(raw.to_string()))
            .map_err(|_| TaskError::InvalidPriority(raw.to_string()))
    }

    /// Wraps a token read back from disk without validating it.
    pub fn verbatim(raw: impl Into<String>) -> Self {
        Priority(raw.into())
    }

    pub fn rank(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingTask {
    pub index: usize,
    pub priority: Priority,
    pub text: String,
}

impl PendingTask {
    /// Serializes back to the on-disk line form.
    pub fn to_line(&self) -> String {
        pending_line(&self.priority, &self.text)
    }
}

impl fmt::Display for PendingTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} [{}]", self.index, self.text, self.priority)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedTask {
    pub index: usize,
    pub text: String,
}

impl fmt::Display for CompletedTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.index, self.text)
    }
}

pub fn pending_line(priority: &Priority, text: &str) -> String {
    if text.is_empty() {
        return priority.to_string();
    }
    format!("{} {}", priority, text)
}

fn non_blank_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.lines().filter(|line| !line.trim().is_empty())
}

/// Splits a pending line at the first whitespace run.
fn split_line(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    match line.find(char::is_whitespace) {
        Some(at) => (&line[..at], line[at..].trim_start()),
        None => (line, ""),
    }
}

/// Parses the pending file and returns its tasks in priority order, indexed
/// from 1. Equal priorities keep their file order.
pub fn parse_pending(raw: &str) -> Vec<PendingTask> {
    let mut tasks: Vec<PendingTask> = non_blank_lines(raw)
        .map(|line| {
            let (priority, text) = split_line(line);
            PendingTask {
                index: 0,
                priority: Priority::verbatim(priority),
                text: text.to_string(),
            }
        })
        .collect();

    tasks.sort_by(|a, b| a.priority.sort_cmp(&b.priority));
    for (i, task) in tasks.iter_mut().enumerate() {
        task.index = i + 1;
    }
    tasks
}

/// Parses the completed file, keeping file order.
pub fn parse_completed(raw: &str) -> Vec<CompletedTask> {
    non_blank_lines(raw)
        .enumerate()
        .map(|(i, line)| CompletedTask {
            index: i + 1,
            text: line.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parse_rejects_non_numeric() {
        assert!(Priority::parse("3").is_ok());
        assert!(Priority::parse("-2").is_ok());
        assert!(matches!(
            Priority::parse("high"),
            Err(TaskError::InvalidPriority(p)) if p == "high"
        ));
    }

    #[test]
    fn parse_pending_sorts_numerically() {
        let tasks = parse_pending("10 ten\n2 two\n1 one\n");
        let texts: Vec<_> = tasks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "ten"]);
        let indexes: Vec<_> = tasks.iter().map(|t| t.index).collect();
        assert_eq!(indexes, vec![1, 2, 3]);
    }

    #[test]
    fn equal_priorities_keep_file_order() {
        let tasks = parse_pending("2 first\n1 top\n2 second\n2 third");
        let texts: Vec<_> = tasks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn non_numeric_priorities_sort_last() {
        let tasks = parse_pending("abc odd\n5 five\nzz other\n1 one");
        let texts: Vec<_> = tasks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "five", "odd", "other"]);
        assert_eq!(tasks[2].priority.as_str(), "abc");
    }

    #[test]
    fn blank_lines_are_ignored() {
        let tasks = parse_pending("\n1 a\n\n   \n2 b\n\n");
        assert_eq!(tasks.len(), 2);
        assert_eq!(parse_completed("\nx\n\ny\n").len(), 2);
    }

    #[test]
    fn text_keeps_inner_spacing() {
        let tasks = parse_pending("3   hello   world");
        assert_eq!(tasks[0].priority.as_str(), "3");
        assert_eq!(tasks[0].text, "hello   world");
        assert_eq!(tasks[0].to_line(), "3 hello   world");
    }

    #[test]
    fn line_without_text() {
        let tasks = parse_pending("7\n");
        assert_eq!(tasks[0].priority.as_str(), "7");
        assert_eq!(tasks[0].text, "");
        assert_eq!(tasks[0].to_line(), "7");
    }

    #[test]
    fn display_formats() {
        let tasks = parse_pending("1 urgent item");
        assert_eq!(tasks[0].to_string(), "1. urgent item [1]");

        let done = parse_completed("wash the car");
        assert_eq!(done[0].to_string(), "1. wash the car");
    }
}
