//! Prompt construction for command generation requests.

/// System prompt pinning the model to the structured response contract.
pub const SYSTEM_PROMPT: &str = r#"You are an expert shell command assistant. Given a natural language task, respond with a JSON object with exactly two string fields:

  "command": the single shell command that accomplishes the task
  "explanation": a brief, one-sentence description of what the command does

Prefer portable, widely available tooling for the stated operating system. Do not include any other text, keys, or formatting outside of the JSON object."#;

/// Build the user prompt for a task.
///
/// Names the target OS family so the model picks matching tooling and
/// path conventions.
pub fn build_prompt(task: &str, os_family: &str) -> String {
    format!(
        "Target operating system: {os_family}\n\n\
         Task: \"{task}\"\n\n\
         Respond with the JSON object described in the system instructions."
    )
}
