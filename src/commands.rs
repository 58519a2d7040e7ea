use std::io::{self, Write};
use std::path::Path;

use crate::env::Environment;
use crate::resolve::{Resolved, resolve};

/// Commands implemented by the shell itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Echo,
    Exit,
    Type,
    Pwd,
    Cd,
}

/// List of builtin commands
pub const BUILTINS: [Builtin; 5] = [
    Builtin::Echo,
    Builtin::Exit,
    Builtin::Type,
    Builtin::Pwd,
    Builtin::Cd,
];

impl Builtin {
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Echo => "echo",
            Builtin::Exit => "exit",
            Builtin::Type => "type",
            Builtin::Pwd => "pwd",
            Builtin::Cd => "cd",
        }
    }

    pub fn lookup(name: &str) -> Option<Self> {
        BUILTINS.into_iter().find(|b| b.name() == name)
    }
}

pub fn echo(args: &[String], out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", args[1..].join(" "))
}

/// Exit status requested by `exit`; missing or non-numeric arguments give 0.
pub fn exit_code(args: &[String]) -> i32 {
    args.get(1).and_then(|arg| arg.parse().ok()).unwrap_or(0)
}

pub fn type_of(args: &[String], env: &impl Environment, out: &mut dyn Write) -> io::Result<()> {
    let Some(name) = args.get(1) else {
        return Ok(());
    };
    match resolve(name, env) {
        Resolved::Builtin(_) => writeln!(out, "{} is a shell builtin", name),
        Resolved::External(path) => writeln!(out, "{} is {}", name, path.display()),
        Resolved::NotFound => writeln!(out, "{}: not found", name),
    }
}

/// Prints the working directory, or nothing if it cannot be determined.
pub fn pwd(env: &impl Environment, out: &mut dyn Write) -> io::Result<()> {
    match env.current_dir() {
        Ok(dir) => writeln!(out, "{}", dir.display()),
        Err(_) => Ok(()),
    }
}

/// Changes directory. Only the first `~` is replaced with the home directory,
/// and the home directory is only looked up when a `~` is present.
pub fn cd(args: &[String], env: &mut impl Environment, out: &mut dyn Write) -> io::Result<()> {
    let Some(arg) = args.get(1) else {
        return Ok(());
    };

    let target = if arg.contains('~') {
        match env.home_dir() {
            Some(home) => arg.replacen('~', &home.to_string_lossy(), 1),
            None => return writeln!(out, "cd: {}: No such file or directory", arg),
        }
    } else {
        arg.clone()
    };

    if env.set_current_dir(Path::new(&target)).is_err() {
        writeln!(out, "cd: {}: No such file or directory", target)?;
    }
    Ok(())
}
