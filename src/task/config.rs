use std::path::{Path, PathBuf};

pub const PENDING_FILENAME: &str = "task.txt";
pub const COMPLETED_FILENAME: &str = "completed.txt";

/// Where the two task files live.
///
/// There is no config file: the directory comes from `--dir` / `TASK_DIR`
/// and otherwise defaults to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub root: PathBuf,
}

impl StorePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(dir: Option<PathBuf>) -> Self {
        let root = dir
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn pending(&self) -> PathBuf {
        self.root.join(PENDING_FILENAME)
    }

    pub fn completed(&self) -> PathBuf {
        self.root.join(COMPLETED_FILENAME)
    }
}
