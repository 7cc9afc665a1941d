use super::{appended, render_lines, DataStore, TaskList};
use crate::error::{Result, TaskError};
use std::collections::HashMap;

/// In-memory storage for tests. A list that was never written reads as
/// absent, matching a missing file.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    lists: HashMap<TaskList, String>,
    simulate_write_error: bool,
    fail_replace: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a list with raw file contents.
    pub fn with_raw(mut self, list: TaskList, raw: impl Into<String>) -> Self {
        self.lists.insert(list, raw.into());
        self
    }

    /// Makes every subsequent write fail, for exercising error paths.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Makes only `replace` fail, leaving appends working.
    pub fn set_fail_replace(&mut self, fail: bool) {
        self.fail_replace = fail;
    }

    pub fn raw(&self, list: TaskList) -> Option<&str> {
        self.lists.get(&list).map(String::as_str)
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error {
            return Err(TaskError::Io(std::io::Error::other("simulated write error")));
        }
        Ok(())
    }
}

impl DataStore for InMemoryStore {
    fn read(&self, list: TaskList) -> Result<Option<String>> {
        Ok(self.lists.get(&list).cloned())
    }

    fn append_line(&mut self, list: TaskList, line: &str) -> Result<()> {
        self.check_writable()?;
        let entry = self.lists.entry(list).or_default();
        *entry = appended(entry, line);
        Ok(())
    }

    fn replace(&mut self, list: TaskList, lines: &[String]) -> Result<()> {
        self.check_writable()?;
        if self.fail_replace {
            return Err(TaskError::Io(std::io::Error::other("simulated replace error")));
        }
        self.lists.insert(list, render_lines(lines));
        Ok(())
    }
}
