use crate::env::Environment;
use crate::errors::ShellResult;
use crate::input::LineSource;
use crate::shell::{Flow, Shell};

/// Reads and runs lines until `exit`, returning its status.
/// Only fatal errors (input failures) end the loop early.
pub fn run<S: LineSource + ?Sized, E: Environment>(
    source: &mut S,
    shell: &mut Shell<E>,
    prompt: &str,
) -> ShellResult<i32> {
    loop {
        let line = source.read_line(prompt)?;
        match shell.run_line(&line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit(code)) => return Ok(code),
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => eprintln!("{}", e),
        }
    }
}
