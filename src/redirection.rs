use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::process::Stdio;

use tracing::debug;

use crate::errors::{ShellError, ShellResult};

/// Where a command's standard output goes.
#[derive(Debug)]
pub enum OutputSink {
    Stdout,
    File(File),
}

impl OutputSink {
    /// Handle to attach as a child's standard output.
    pub fn stdio(&self) -> io::Result<Stdio> {
        match self {
            OutputSink::Stdout => Ok(Stdio::inherit()),
            OutputSink::File(file) => file.try_clone().map(Stdio::from),
        }
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputSink::Stdout => io::stdout().write(buf),
            OutputSink::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputSink::Stdout => io::stdout().flush(),
            OutputSink::File(file) => file.flush(),
        }
    }
}

/// Removes the first `>` / `1>` operator and its target from `tokens`,
/// opening the target for writing (created or truncated).
///
/// An operator with nothing after it is left in place as an ordinary argument.
pub fn extract_redirection(mut tokens: Vec<String>) -> ShellResult<(Vec<String>, OutputSink)> {
    let Some(i) = tokens.iter().position(|t| t == ">" || t == "1>") else {
        return Ok((tokens, OutputSink::Stdout));
    };
    if i + 1 >= tokens.len() {
        return Ok((tokens, OutputSink::Stdout));
    }

    let path = tokens.remove(i + 1);
    tokens.remove(i);
    debug!(target_file = %path, "redirecting stdout");
    let file = open_truncate(&path).map_err(|source| ShellError::Redirect { path, source })?;
    Ok((tokens, OutputSink::File(file)))
}

/// Creates or truncates a file, write-only.
fn open_truncate(path: &str) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    options.open(path)
}
