//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vermeer - Cross-component log diagnosis through multi-turn LLM conversations
#[derive(Parser, Debug)]
#[command(name = "vermeer")]
#[command(about = "Cross-component log diagnosis through multi-turn LLM conversations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze log files for cross-component interactions
    Analyze {
        /// Log files or directories to analyze
        #[arg(long = "log", required = true)]
        logs: Vec<PathBuf>,

        /// Session identifier (random when omitted)
        #[arg(long)]
        session_id: Option<String>,
    },

    /// Diagnose log files by filling root-cause templates
    Diagnose {
        /// Log files or directories to diagnose against
        #[arg(long = "log", required = true)]
        logs: Vec<PathBuf>,

        /// Template file or directory to fill
        #[arg(long)]
        templates: Option<PathBuf>,

        /// Session identifier (random when omitted)
        #[arg(long)]
        session_id: Option<String>,
    },
}
