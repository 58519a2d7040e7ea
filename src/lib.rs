pub mod commands;
pub mod completion;
pub mod config;
pub mod env;
pub mod errors;
pub mod input;
pub mod redirection;
pub mod repl;
pub mod resolve;
pub mod shell;
pub mod tokenize;

pub use config::Config;
pub use errors::{ShellError, ShellResult};
pub use shell::{Flow, Shell};
