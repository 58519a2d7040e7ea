use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::commands::Builtin;
use crate::env::Environment;

/// Outcome of resolving a command name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Builtin(Builtin),
    External(PathBuf),
    NotFound,
}

/// Resolves `name`, preferring builtins over the search path.
/// The search path is re-read on every call.
pub fn resolve(name: &str, env: &impl Environment) -> Resolved {
    if let Some(builtin) = Builtin::lookup(name) {
        return Resolved::Builtin(builtin);
    }
    // An unset search path behaves like an empty one, which names the current directory.
    let paths = env.search_path().unwrap_or_default();
    find_in_path(name, &paths).map_or(Resolved::NotFound, Resolved::External)
}

/// Finds the first executable named `command` in the directories of `search_path`.
/// The name is always taken relative to each directory, even if it starts with `/`.
pub fn find_in_path(command: &str, search_path: &OsStr) -> Option<PathBuf> {
    let relative = command.trim_start_matches('/');
    std::env::split_paths(search_path)
        .map(|dir| dir.join(relative))
        .find(|candidate| is_executable(candidate))
}

/// A regular file with at least one execute bit set.
pub fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path).is_ok_and(|m| {
        m.is_file() && {
            #[cfg(unix)]
            {
                m.permissions().mode() & 0o111 != 0
            }
            #[cfg(not(unix))]
            {
                true
            }
        }
    })
}
