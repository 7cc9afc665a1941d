//! # API Facade
//!
//! A thin layer over `commands/*.rs` and the single entry point for every
//! task operation. It takes arguments exactly as a UI received them (options
//! and raw strings) and returns structured [`CmdResult`]s. It never prints
//! and never exits; that is the CLI's job.
//!
//! `TaskApi<S: DataStore>` is generic over storage so the same facade runs
//! against `FileStore` in the binary and `InMemoryStore` in tests.

use crate::commands;
use crate::error::Result;
use crate::store::DataStore;

pub struct TaskApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> TaskApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_task(&mut self, priority: Option<&str>, words: &[String]) -> Result<CmdResult> {
        commands::add::run(&mut self.store, priority, words)
    }

    pub fn list_tasks(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn delete_task(&mut self, position: Option<&str>) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, position)
    }

    pub fn complete_task(&mut self, position: Option<&str>) -> Result<CmdResult> {
        commands::done::run(&mut self.store, position)
    }

    pub fn report(&self) -> Result<CmdResult> {
        commands::report::run(&self.store)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use crate::store::memory::InMemoryStore;
    use crate::store::TaskList;

    fn api() -> TaskApi<InMemoryStore> {
        TaskApi::new(InMemoryStore::new())
    }

    #[test]
    fn add_then_list() {
        let mut api = api();
        api.add_task(Some("2"), &["hello world".to_string()]).unwrap();
        api.add_task(Some("1"), &["urgent item".to_string()]).unwrap();

        let result = api.list_tasks().unwrap();
        assert_eq!(result.pending_tasks()[0].text, "urgent item");
        assert!(result.completed.is_none());
    }

    #[test]
    fn delete_dispatches() {
        let mut api = api();
        api.add_task(Some("1"), &["a".to_string()]).unwrap();
        api.delete_task(Some("1")).unwrap();
        assert_eq!(api.store().raw(TaskList::Pending), Some(""));
    }

    #[test]
    fn complete_dispatches() {
        let mut api = api();
        api.add_task(Some("1"), &["a".to_string()]).unwrap();
        api.complete_task(Some("1")).unwrap();
        assert_eq!(api.store().raw(TaskList::Completed), Some("a\n"));
    }

    #[test]
    fn report_fills_both_listings() {
        let api = api();
        let result = api.report().unwrap();
        assert!(result.pending.is_some());
        assert!(result.completed.is_some());
    }

    #[test]
    fn errors_are_returned_not_printed() {
        let mut api = api();
        assert!(matches!(
            api.complete_task(None),
            Err(TaskError::MissingArgument(_))
        ));
    }
}
