use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("{0}")]
    MissingArgument(&'static str),

    #[error("task with index #{0} does not exist. Nothing deleted.")]
    DeleteOutOfRange(String),

    #[error("no incomplete item with index #{0} exists.")]
    NotPending(String),

    #[error("priority must be a whole number, got \"{0}\". Nothing added!")]
    InvalidPriority(String),

    #[error("task text cannot span multiple lines. Nothing added!")]
    MultilineText,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TaskError>;
