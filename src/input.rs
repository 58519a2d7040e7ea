use std::io::{self, BufRead, StdinLock, Stdout, Write};

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use crate::completion::ShellCompleter;
use crate::errors::{ShellError, ShellResult};

pub trait LineSource {
    /// Shows `prompt` and blocks for one line, returned with its trailing newline.
    fn read_line(&mut self, prompt: &str) -> ShellResult<String>;
}

/// Plain buffered reader, used when input is not a terminal.
pub struct StdinLines<R, W> {
    reader: R,
    prompt_out: W,
}

impl StdinLines<StdinLock<'static>, Stdout> {
    pub fn new() -> Self {
        Self::from_parts(io::stdin().lock(), io::stdout())
    }
}

impl Default for StdinLines<StdinLock<'static>, Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdinLines<R, W> {
    pub fn from_parts(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineSource for StdinLines<R, W> {
    fn read_line(&mut self, prompt: &str) -> ShellResult<String> {
        write!(self.prompt_out, "{}", prompt).map_err(ShellError::ReadInput)?;
        self.prompt_out.flush().map_err(ShellError::ReadInput)?;

        // Bytes that are not UTF-8 become U+FFFD instead of failing the read.
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => Err(ShellError::EndOfInput),
            Ok(_) => Ok(String::from_utf8_lossy(&line).into_owned()),
            Err(e) => Err(ShellError::ReadInput(e)),
        }
    }
}

/// Interactive line editor with history and tab completion.
pub struct EditorLines {
    editor: Editor<ShellCompleter, DefaultHistory>,
}

impl EditorLines {
    pub fn new() -> rustyline::Result<Self> {
        let mut editor = Editor::new()?;
        editor.set_helper(Some(ShellCompleter::new()));
        Ok(Self { editor })
    }
}

impl LineSource for EditorLines {
    fn read_line(&mut self, prompt: &str) -> ShellResult<String> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(line + "\n")
            }
            // Ctrl-C drops the line being edited.
            Err(ReadlineError::Interrupted) => Ok("\n".to_string()),
            Err(ReadlineError::Eof) => Err(ShellError::EndOfInput),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::fake::FakeEnv;
    use crate::repl::run;
    use crate::shell::Shell;

    #[test]
    fn test_reads_lines_with_prompt() {
        let mut prompts = Vec::new();
        let mut source = StdinLines::from_parts("echo a\nlast".as_bytes(), &mut prompts);

        assert_eq!(source.read_line("$ ").unwrap(), "echo a\n");
        assert_eq!(source.read_line("$ ").unwrap(), "last");
        assert!(matches!(source.read_line("$ "), Err(ShellError::EndOfInput)));
        drop(source);
        assert_eq!(String::from_utf8(prompts).unwrap(), "$ $ $ ");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let bytes: &[u8] = &[b'e', b'c', b'h', b'o', b' ', 0xff, b'\n'];
        let mut source = StdinLines::from_parts(bytes, io::sink());
        assert_eq!(source.read_line("$ ").unwrap(), "echo \u{FFFD}\n");
    }

    #[test]
    fn test_loop_survives_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.txt");
        let mut input = b"echo \xff > ".to_vec();
        input.extend_from_slice(target.display().to_string().as_bytes());
        input.extend_from_slice(b"\nexit 3\n");

        let mut source = StdinLines::from_parts(input.as_slice(), io::sink());
        let mut shell = Shell::new(FakeEnv::new(dir.path()));
        assert_eq!(run(&mut source, &mut shell, "$ ").unwrap(), 3);
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "\u{FFFD}\n");
    }
}
