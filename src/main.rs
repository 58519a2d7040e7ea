use std::io::{self, Write};

use anyhow::Context;
use minish::env::SystemEnv;
use minish::input::{EditorLines, LineSource, StdinLines};
use minish::{Config, Shell, repl};
use tracing_subscriber::EnvFilter;

fn main() {
    let config = Config::from_env();
    init_logging(&config);

    let code = match run(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:#}", e);
            1
        }
    };
    let _ = io::stdout().flush();
    std::process::exit(code);
}

fn run(config: &Config) -> anyhow::Result<i32> {
    let mut source: Box<dyn LineSource> = if config.interactive {
        Box::new(EditorLines::new().context("failed to start line editor")?)
    } else {
        Box::new(StdinLines::new())
    };
    let mut shell = Shell::new(SystemEnv);
    tracing::debug!(interactive = config.interactive, "starting read loop");
    Ok(repl::run(source.as_mut(), &mut shell, &config.prompt)?)
}

fn init_logging(config: &Config) {
    let filter = config
        .log_filter
        .as_deref()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
