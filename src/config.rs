use std::io::IsTerminal;

/// Prompt printed before every read.
pub const PROMPT: &str = "$ ";

/// Environment variable holding the `tracing` filter directive.
pub const LOG_FILTER_VAR: &str = "MINISH_LOG";

/// Startup configuration, captured once from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    pub log_filter: Option<String>,
    pub interactive: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), std::io::stdin().is_terminal())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, interactive: bool) -> Self {
        Self {
            prompt: PROMPT.to_string(),
            log_filter: lookup(LOG_FILTER_VAR).filter(|f| !f.trim().is_empty()),
            interactive,
        }
    }
}
