use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    /// The interpreter could not create a child process.
    #[error("failed to create process for {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// A redirection target could not be opened.
    #[error("{}: {source}", .path.display())]
    Redirect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{op} failed on descriptor {fd}: {source}")]
    Descriptor {
        op: &'static str,
        fd: i32,
        #[source]
        source: nix::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ShellError {
    /// Only a failure to create a process stops the interpreter.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ShellError::Spawn { .. })
    }
}

pub type Result<T> = std::result::Result<T, ShellError>;
