use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

pub type ShellResult<T> = Result<T, ShellError>;

#[derive(Debug, Error)]
pub enum ShellError {
    /// The line source failed to produce a line.
    #[error("Error reading input: {0}")]
    ReadInput(io::Error),

    /// Standard input was closed.
    #[error("Error reading input: EOF")]
    EndOfInput,

    #[error("Error reading input")]
    Editor(#[from] ReadlineError),

    /// The redirection target could not be opened; the command is skipped.
    #[error("Error opening file: {path}: {source}")]
    Redirect {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Writing command output to the sink failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ShellError {
    /// Fatal errors end the read loop; everything else only aborts the current line.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ShellError::ReadInput(_) | ShellError::EndOfInput | ShellError::Editor(_)
        )
    }
}
