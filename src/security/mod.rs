//! Command-safety classification.
//!
//! This module decides whether a generated, free-form shell command
//! string should be flagged as potentially destructive before execution.
//! It is a best-effort textual matcher over a fixed rule table, not a
//! shell parser: the output is advisory and never blocks execution.

mod classifier;
mod rules;

pub use classifier::{Classification, Rule, RuleMatch, RuleSet};
pub use rules::RuleCategory;
