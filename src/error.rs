//! Error taxonomy for the application.
//!
//! Each variant carries a distinct recovery policy so callers can react
//! differently: configuration and generation failures abort the current
//! request, rule compilation failures abort startup, and execution
//! failures are reported to the user but tolerated.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A required credential or setting was missing or empty at startup.
    /// Fatal, before any generation or classification happens.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The text-generation call failed, or its response could not be
    /// interpreted as a command suggestion. The current request aborts;
    /// a command is never fabricated from a broken response.
    #[error("command generation failed: {0}")]
    Generation(String),

    /// A detection rule failed to load when the rule set was built.
    /// Fatal and immediate: running with a partially loaded rule set is
    /// never allowed.
    #[error("detection rule `{id}` failed to load: {reason}")]
    RuleCompilation {
        id: &'static str,
        reason: String,
    },

    /// The generated command could not be started or exited nonzero.
    /// This is the expected outcome of running arbitrary shell commands,
    /// not a tool defect; callers report it without failing the tool.
    #[error("{0}")]
    Execution(String),
}

impl From<async_openai::error::OpenAIError> for Error {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        Error::Generation(err.to_string())
    }
}
