//! Main entry point for the askcmd CLI.
//!
//! Initializes logging, parses arguments, loads configuration, and
//! dispatches to the application. Fatal errors (missing credentials,
//! failed generation, empty prompt) print a short diagnostic and exit
//! with status 1; a failed child command does not.

use anyhow::Result;
use clap::Parser;

use askcmd::cli::{Cli, Commands};
use askcmd::{App, Config, utils};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging before anything else
    utils::logger::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask { prompt, execute } => {
            let config = Config::from_env()?;
            let app = App::new(&config)?;
            app.ask(&prompt, execute).await
        }
    }
}
