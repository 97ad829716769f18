use std::path::PathBuf;

use thiserror::Error;

/// Describes the potential error conditions that might arise while
/// bootstrapping a repository.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Git is not installed or not available in PATH.")]
    GitNotFound,

    #[error("Directory {} does not exist.", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Git repository already exists in {}.", .0.display())]
    AlreadyInitialized(PathBuf),

    /// The program ran but exited unsuccessfully. `output` holds its
    /// trimmed stderr (or stdout when stderr was empty).
    #[error("{output}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },

    #[error("could not run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for gitstart operations.
pub type Result<T> = std::result::Result<T, Error>;
