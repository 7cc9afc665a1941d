use super::{render_lines, DataStore, TaskList};
use crate::config::StorePaths;
use crate::error::{Result, TaskError};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    paths: StorePaths,
}

impl FileStore {
    pub fn new(paths: StorePaths) -> Self {
        Self { paths }
    }

    fn file_for(&self, list: TaskList) -> PathBuf {
        match list {
            TaskList::Pending => self.paths.pending(),
            TaskList::Completed => self.paths.completed(),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(TaskError::Io)?;
        }
        Ok(())
    }

    fn missing_trailing_newline(path: &Path) -> bool {
        match fs::read(path) {
            Ok(bytes) => bytes.last().is_some_and(|b| *b != b'\n'),
            Err(_) => false,
        }
    }
}

impl DataStore for FileStore {
    fn read(&self, list: TaskList) -> Result<Option<String>> {
        // Unreadable counts as empty, same as absent
        Ok(fs::read_to_string(self.file_for(list)).ok())
    }

    fn append_line(&mut self, list: TaskList, line: &str) -> Result<()> {
        self.ensure_dir(self.paths.root())?;
        let path = self.file_for(list);

        let mut buf = String::with_capacity(line.len() + 2);
        if Self::missing_trailing_newline(&path) {
            buf.push('\n');
        }
        buf.push_str(line);
        buf.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(TaskError::Io)?;
        file.write_all(buf.as_bytes()).map_err(TaskError::Io)?;
        Ok(())
    }

    fn replace(&mut self, list: TaskList, lines: &[String]) -> Result<()> {
        let root = self.paths.root().to_path_buf();
        self.ensure_dir(&root)?;
        let target = self.file_for(list);

        let tmp_file = root.join(format!(".task-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, render_lines(lines)).map_err(TaskError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &target) {
            let _ = fs::remove_file(&tmp_file);
            return Err(TaskError::Io(e));
        }
        Ok(())
    }
}
