//! Parsing of model responses into command suggestions.
//!
//! The model is asked for a bare JSON object, but replies often arrive
//! wrapped in markdown fences or short prose. The parser peels those
//! layers off and rejects anything that does not carry both required
//! fields.

use super::client::GeneratedCommand;
use crate::error::Error;

/// Parse a model response into a [`GeneratedCommand`].
///
/// Accepts the JSON object bare, inside ``` / ```json fences, or embedded
/// in surrounding prose. A response without a non-empty `command` string
/// and an `explanation` string is a generation failure; a command is
/// never fabricated from a broken response.
pub fn parse_response(response: &str) -> Result<GeneratedCommand, Error> {
    let cleaned = strip_code_fences(response);
    let object = extract_object(&cleaned).ok_or_else(|| {
        Error::Generation("response did not contain a JSON object".to_string())
    })?;

    let value: serde_json::Value = serde_json::from_str(object)
        .map_err(|e| Error::Generation(format!("response was not valid JSON: {e}")))?;

    let command = string_field(&value, "command")?;
    let explanation = string_field(&value, "explanation")?;

    if command.is_empty() {
        return Err(Error::Generation(
            "response contained an empty command".to_string(),
        ));
    }

    Ok(GeneratedCommand {
        command,
        explanation,
    })
}

fn string_field(value: &serde_json::Value, field: &str) -> Result<String, Error> {
    value
        .get(field)
        .and_then(|v| v.as_str())
        .map(|s| s.trim().to_string())
        .ok_or_else(|| Error::Generation(format!("response was missing the `{field}` field")))
}

/// Remove markdown code fences, keeping the fenced body.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Slice out the outermost `{ ... }` span, tolerating surrounding prose.
fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
