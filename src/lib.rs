//! askcmd - translate natural-language tasks into shell commands.
//!
//! The crate wraps a remote language model behind a small CLI: describe a
//! task, get back a single shell command plus a one-sentence explanation,
//! see an advisory warning when the command matches known-destructive
//! shell idioms, and decide whether to run it.
//!
//! Core pieces:
//! - Safety classification engine (rule table + matcher) in `security`
//! - Prompt construction, model client, and response parsing in `ai`
//! - Execution of the confirmed command through the system shell in `shell`
//! - Styled output and the confirmation prompt in `ui`

pub mod ai;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod security;
pub mod shell;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use app::App;
pub use config::Config;
pub use error::Error;
pub use security::{Classification, RuleCategory, RuleMatch, RuleSet};
