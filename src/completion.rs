use std::collections::BTreeSet;
use std::ffi::OsStr;

use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Helper;

use crate::commands::BUILTINS;
use crate::env::{Environment, SystemEnv};
use crate::resolve::is_executable;

/// Shell completer for tab completion.
pub struct ShellCompleter {
    filename_completer: FilenameCompleter,
}

impl ShellCompleter {
    pub fn new() -> Self {
        Self {
            filename_completer: FilenameCompleter::new(),
        }
    }
}

impl Default for ShellCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &rustyline::Context<'_>,
    ) -> Result<(usize, Vec<Self::Candidate>), ReadlineError> {
        let (start, word) = extract_word(line, pos);
        if !line[..start].trim().is_empty() {
            return self.filename_completer.complete(line, pos, ctx);
        }

        let search_path = SystemEnv.search_path();
        let candidates = command_candidates(word, search_path.as_deref())
            .into_iter()
            .map(|name| Pair {
                replacement: format!("{} ", name),
                display: name,
            })
            .collect();
        Ok((start, candidates))
    }
}

/// Builtins and search-path executables starting with `prefix`, sorted and unique.
pub fn command_candidates(prefix: &str, search_path: Option<&OsStr>) -> Vec<String> {
    let mut names: BTreeSet<String> = BUILTINS
        .iter()
        .map(|b| b.name())
        .filter(|name| name.starts_with(prefix))
        .map(str::to_string)
        .collect();

    for dir in search_path.map(std::env::split_paths).into_iter().flatten() {
        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        names.extend(
            entries
                .flatten()
                .filter(|e| is_executable(&e.path()))
                .filter_map(|e| e.file_name().into_string().ok())
                .filter(|name| name.starts_with(prefix)),
        );
    }

    names.into_iter().collect()
}

fn extract_word(line: &str, pos: usize) -> (usize, &str) {
    let before = &line[..pos];
    let start = before.rfind(' ').map_or(0, |i| i + 1);
    (start, &line[start..pos])
}

impl Helper for ShellCompleter {}
impl Hinter for ShellCompleter {
    type Hint = String;
}
impl Highlighter for ShellCompleter {}
impl Validator for ShellCompleter {}
