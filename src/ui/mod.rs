//! Styled terminal output and the execution confirmation prompt.
//!
//! Everything here is presentation: the safety warning is advisory and
//! never blocks execution, it only gives the user the information needed
//! for the final execute/skip decision.

use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::ai::GeneratedCommand;
use crate::error::Error;
use crate::security::Classification;

/// Print the generated command and its explanation.
pub fn print_suggestion(suggestion: &GeneratedCommand) {
    println!();
    println!("  {}", format!("> {}", suggestion.command).cyan().bold());
    println!("  {}", suggestion.explanation.as_str().dark_grey().italic());
    println!();
}

/// Print the advisory warning for a flagged command, listing every
/// matched rule with its category rationale.
pub fn print_danger_warning(classification: &Classification) {
    println!(
        "  {}",
        "Warning: this command matches known-destructive patterns."
            .red()
            .bold()
    );
    for matched in &classification.matches {
        println!(
            "    {} {}",
            format!("[{}]", matched.category).red(),
            format!("{} ({})", matched.id, matched.category.description()).dark_grey()
        );
    }
    println!("  {}", "Review it carefully before executing.".red());
    println!();
}

/// Ask the user whether to execute the command. Defaults to no.
pub fn confirm_execution() -> io::Result<bool> {
    print!("Do you want to execute this command? [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Report a successful run.
pub fn print_execution_success() {
    println!("{}", "Command executed successfully.".green());
}

/// Report a failed run. The failure is surfaced but does not fail the tool.
pub fn print_execution_failure(error: &Error) {
    eprintln!("{}", format!("Command failed: {error}").red());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affirmative_answers() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("  YES \n"));
    }

    #[test]
    fn everything_else_declines() {
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("\n"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yep"));
    }
}
