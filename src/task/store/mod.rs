//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between task logic and persistence.
//! It deals in raw file text; parsing into records lives in [`crate::model`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, two plain text files in one
//!   directory. Replacements are written to a temp file and renamed over the
//!   target.
//! - [`memory::InMemoryStore`]: no persistence, used by the command tests.
//!
//! ## Storage Format
//!
//! ```text
//! <dir>/
//! ├── task.txt        # "<priority> <text>" per line
//! └── completed.txt   # "<text>" per line
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Which of the two task files an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskList {
    Pending,
    Completed,
}

/// Abstract interface for task storage.
pub trait DataStore {
    /// Raw contents of a list.
    ///
    /// `Ok(None)` when there is nothing to read. A missing or unreadable file
    /// counts as no data, callers treat it as an empty list.
    fn read(&self, list: TaskList) -> Result<Option<String>>;

    /// Appends one line, creating the list if needed. A newline is inserted
    /// first when existing content does not end with one.
    fn append_line(&mut self, list: TaskList, line: &str) -> Result<()>;

    /// Replaces the whole list with `lines`, each newline-terminated.
    fn replace(&mut self, list: TaskList, lines: &[String]) -> Result<()>;
}

/// Joins lines the way every store writes them.
pub(crate) fn render_lines(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Appends `line` to `existing`, repairing a missing trailing newline.
pub(crate) fn appended(existing: &str, line: &str) -> String {
    let mut out = String::with_capacity(existing.len() + line.len() + 2);
    out.push_str(existing);
    if !existing.is_empty() && !existing.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(line);
    out.push('\n');
    out
}
