use crate::model::{CompletedTask, PendingTask};
use serde::Serialize;

pub mod add;
pub mod delete;
pub mod done;
pub mod helpers;
pub mod list;
pub mod report;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back to the UI. Listings are only filled by the
/// commands that show them; `report` fills both.
#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<Vec<PendingTask>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<Vec<CompletedTask>>,
    #[serde(skip)]
    pub affected: Vec<PendingTask>,
    #[serde(skip)]
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_pending(mut self, tasks: Vec<PendingTask>) -> Self {
        self.pending = Some(tasks);
        self
    }

    pub fn with_completed(mut self, tasks: Vec<CompletedTask>) -> Self {
        self.completed = Some(tasks);
        self
    }

    pub fn pending_tasks(&self) -> &[PendingTask] {
        self.pending.as_deref().unwrap_or_default()
    }

    pub fn completed_tasks(&self) -> &[CompletedTask] {
        self.completed.as_deref().unwrap_or_default()
    }
}
