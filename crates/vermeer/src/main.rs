//! Vermeer CLI binary.
//!
//! This binary provides command-line access to the two core operations:
//! - Analyze log corpora for cross-component interactions
//! - Diagnose log corpora by filling root-cause templates

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_analyze, run_diagnose};

    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Analyze { logs, session_id } => {
            run_analyze(logs, session_id).await?;
        }

        Commands::Diagnose {
            logs,
            templates,
            session_id,
        } => {
            run_diagnose(logs, templates, session_id).await?;
        }
    }

    Ok(())
}
