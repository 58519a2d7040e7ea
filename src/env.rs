use std::env;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the variable listing directories searched for executables.
pub const SEARCH_PATH_VAR: &str = "PATH";

/// The parts of the process environment the shell reads or mutates.
pub trait Environment {
    /// Raw value of the search path variable, read fresh on every call.
    fn search_path(&self) -> Option<OsString>;

    /// The invoking user's home directory, or `None` if it cannot be determined.
    fn home_dir(&self) -> Option<PathBuf>;

    fn current_dir(&self) -> io::Result<PathBuf>;

    fn set_current_dir(&mut self, path: &Path) -> io::Result<()>;
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl Environment for SystemEnv {
    fn search_path(&self) -> Option<OsString> {
        env::var_os(SEARCH_PATH_VAR)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }

    fn set_current_dir(&mut self, path: &Path) -> io::Result<()> {
        env::set_current_dir(path)
    }
}
