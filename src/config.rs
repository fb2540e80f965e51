//! Runtime configuration loaded once at process entry.
//!
//! The configuration object is constructed explicitly and passed by
//! reference to the components that need it; nothing reads credentials
//! through ambient global state after startup.

use crate::error::Error;

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable overriding the model name.
pub const MODEL_VAR: &str = "ASKCMD_MODEL";

/// Model used when no override is given.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is honored when present.
    /// Fails with a configuration error when the API key is unset or
    /// empty, before any request is attempted.
    pub fn from_env() -> Result<Self, Error> {
        // Missing .env is fine; the environment may carry the key directly.
        dotenvy::dotenv().ok();

        Self::from_values(
            std::env::var(API_KEY_VAR).ok(),
            std::env::var(MODEL_VAR).ok(),
        )
    }

    fn from_values(api_key: Option<String>, model: Option<String>) -> Result<Self, Error> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "{API_KEY_VAR} not found or empty. Set it in your environment or in a .env file."
                ))
            })?;

        let model = model
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self { api_key, model })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_a_configuration_error() {
        let result = Config::from_values(None, None);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn empty_api_key_is_a_configuration_error() {
        let result = Config::from_values(Some("   ".to_string()), None);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn model_defaults_when_not_set() {
        let config = Config::from_values(Some("sk-test".to_string()), None).unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn model_override_is_used() {
        let config =
            Config::from_values(Some("sk-test".to_string()), Some("gpt-4o".to_string())).unwrap();
        assert_eq!(config.model, "gpt-4o");
    }
}
