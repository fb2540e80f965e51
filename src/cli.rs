//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Translate natural language into shell commands, with a safety check.
#[derive(Debug, Parser)]
#[command(name = "askcmd", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Translate a natural-language task into a shell command
    Ask {
        /// The natural-language task to convert into a command
        prompt: String,

        /// Execute the generated command immediately without confirmation
        #[arg(short, long)]
        execute: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ask_with_execute_flag() {
        let cli = Cli::try_parse_from(["askcmd", "ask", "list all files", "--execute"]).unwrap();
        let Commands::Ask { prompt, execute } = cli.command;
        assert_eq!(prompt, "list all files");
        assert!(execute);
    }

    #[test]
    fn short_execute_flag_works() {
        let cli = Cli::try_parse_from(["askcmd", "ask", "show disk usage", "-e"]).unwrap();
        let Commands::Ask { execute, .. } = cli.command;
        assert!(execute);
    }

    #[test]
    fn execute_defaults_to_off() {
        let cli = Cli::try_parse_from(["askcmd", "ask", "show disk usage"]).unwrap();
        let Commands::Ask { execute, .. } = cli.command;
        assert!(!execute);
    }

    #[test]
    fn ask_requires_a_prompt() {
        assert!(Cli::try_parse_from(["askcmd", "ask"]).is_err());
    }
}
