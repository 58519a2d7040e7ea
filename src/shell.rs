use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

use tracing::{debug, trace};

use crate::commands::{self, Builtin};
use crate::env::{Environment, SystemEnv};
use crate::errors::ShellResult;
use crate::redirection::{OutputSink, extract_redirection};
use crate::resolve::{Resolved, resolve};
use crate::tokenize::tokenize;

/// What the read loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(i32),
}

/// Executes command lines against an environment.
#[derive(Debug, Default)]
pub struct Shell<E: Environment = SystemEnv> {
    env: E,
}

impl<E: Environment> Shell<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Tokenizes and runs one raw input line.
    pub fn run_line(&mut self, line: &str) -> ShellResult<Flow> {
        self.execute(tokenize(line))
    }

    /// Runs a token list, honoring a stdout redirection if present.
    /// The redirection file is closed when this returns.
    pub fn execute(&mut self, tokens: Vec<String>) -> ShellResult<Flow> {
        if tokens.is_empty() {
            return Ok(Flow::Continue);
        }
        let (args, mut sink) = extract_redirection(tokens)?;
        if args.is_empty() {
            return Ok(Flow::Continue);
        }
        let flow = self.dispatch(&args, &mut sink)?;
        sink.flush()?;
        Ok(flow)
    }

    fn dispatch(&mut self, args: &[String], sink: &mut OutputSink) -> ShellResult<Flow> {
        let name = &args[0];
        let resolved = resolve(name, &self.env);
        trace!(command = %name, ?resolved, "dispatching");

        match resolved {
            Resolved::Builtin(Builtin::Exit) => return Ok(Flow::Exit(commands::exit_code(args))),
            Resolved::Builtin(Builtin::Echo) => commands::echo(args, sink)?,
            Resolved::Builtin(Builtin::Type) => commands::type_of(args, &self.env, sink)?,
            Resolved::Builtin(Builtin::Pwd) => commands::pwd(&self.env, sink)?,
            Resolved::Builtin(Builtin::Cd) => commands::cd(args, &mut self.env, sink)?,
            Resolved::External(path) => run_external(&path, args, sink),
            Resolved::NotFound => writeln!(sink, "{}: command not found", name)?,
        }
        Ok(Flow::Continue)
    }
}

/// Spawns `program` with `args` (including `argv[0]`) and waits for it.
/// Failures to start or wait are indistinguishable from a silent command.
fn run_external(program: &Path, args: &[String], sink: &mut OutputSink) {
    if let Err(err) = spawn_and_wait(program, args, sink) {
        debug!(program = %program.display(), error = %err, "external command failed to run");
    }
}

fn spawn_and_wait(program: &Path, args: &[String], sink: &mut OutputSink) -> io::Result<()> {
    // Keep our buffered output ahead of the child's.
    io::stdout().flush()?;

    // A bare file name would be searched for on PATH again when spawning.
    let program = if program.parent().is_some_and(|dir| dir.as_os_str().is_empty()) {
        Path::new(".").join(program)
    } else {
        program.to_path_buf()
    };
    let mut command = Command::new(&program);
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.arg0(&args[0]);
    }
    let status = command
        .args(&args[1..])
        .stdout(sink.stdio()?)
        .stderr(std::process::Stdio::inherit())
        .status()?;
    debug!(program = %program.display(), %status, "external command finished");
    Ok(())
}
