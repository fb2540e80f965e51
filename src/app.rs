//! Application orchestration for the ask flow.
//!
//! Wires the collaborators together: command generation, advisory safety
//! classification, user confirmation, and execution.

use anyhow::{Result, bail};
use tracing::warn;

use crate::ai::AiClient;
use crate::config::Config;
use crate::error::Error;
use crate::security::RuleSet;
use crate::{shell, ui};

/// Owns the configured collaborators for the process lifetime.
pub struct App {
    ai: AiClient,
    rules: RuleSet,
}

impl App {
    /// Build the application from an explicit configuration.
    ///
    /// Rule compilation failures surface here, before any request is
    /// made, so the process never runs with a partial rule set.
    pub fn new(config: &Config) -> Result<Self, Error> {
        Ok(Self {
            ai: AiClient::new(config),
            rules: RuleSet::builtin()?,
        })
    }

    /// Run one ask request end to end.
    ///
    /// Returns an error only for tool-level failures (empty prompt,
    /// failed generation). A flagged command still reaches the user's
    /// execute/skip decision, and a failed child command is reported but
    /// still counts as tool success.
    pub async fn ask(&self, prompt: &str, execute: bool) -> Result<()> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            bail!("please provide a task to perform");
        }

        let suggestion = self.ai.generate_command(prompt).await?;
        ui::print_suggestion(&suggestion);

        let classification = self.rules.classify(&suggestion.command);
        if classification.flagged() {
            warn!(
                command = %suggestion.command,
                rules = ?classification.matched_ids(),
                "generated command matched destructive patterns"
            );
            ui::print_danger_warning(&classification);
        }

        let should_execute = execute || ui::confirm_execution()?;
        if !should_execute {
            return Ok(());
        }

        match shell::run(&suggestion.command).await {
            Ok(()) => ui::print_execution_success(),
            Err(err @ Error::Execution(_)) => ui::print_execution_failure(&err),
            Err(err) => return Err(err.into()),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let config = Config {
            api_key: "test-key".to_string(),
            model: "gpt-4o-mini".to_string(),
        };
        App::new(&config).unwrap()
    }

    #[tokio::test]
    async fn empty_prompt_is_rejected_before_generation() {
        let app = test_app();
        let err = app.ask("   ", false).await.unwrap_err();
        assert!(err.to_string().contains("provide a task"));
    }

    #[test]
    fn app_builds_with_the_builtin_rule_set() {
        // Construction compiles every rule; a broken table would fail here.
        let _app = test_app();
    }
}
