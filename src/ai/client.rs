//! OpenAI-compatible chat client for command generation.

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{parser, prompt};
use crate::config::Config;
use crate::error::Error;

/// Structured command suggestion returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCommand {
    pub command: String,
    pub explanation: String,
}

pub struct AiClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl AiClient {
    /// Build a client from an explicit configuration.
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new().with_api_key(config.api_key.clone());
        Self {
            client: Client::with_config(openai_config),
            model: config.model.clone(),
        }
    }

    /// Ask the model to translate `task` into a single shell command for
    /// the current operating system family.
    ///
    /// Any transport failure or unusable response surfaces as a
    /// generation error; the caller aborts the request rather than
    /// classifying or running a fabricated command.
    pub async fn generate_command(&self, task: &str) -> Result<GeneratedCommand, Error> {
        let user_prompt = prompt::build_prompt(task, std::env::consts::OS);
        debug!(model = %self.model, "sending generation request");

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(prompt::SYSTEM_PROMPT)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user_prompt)
                    .build()?
                    .into(),
            ])
            .build()?;

        let response = self.client.chat().create(request).await?;
        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::Generation("model returned an empty response".to_string()))?;

        let generated = parser::parse_response(&text)?;
        info!(command = %generated.command, "model produced a command suggestion");
        Ok(generated)
    }
}
