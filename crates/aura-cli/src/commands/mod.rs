//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod analyze;
pub mod probe;
pub mod serve;

/// Sentiment Aura - LLM-backed sentiment and emotion analysis
#[derive(Parser)]
#[command(name = "aura")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(serve::ServeArgs),

    /// Analyze a piece of text once and print the result
    Analyze(analyze::AnalyzeArgs),

    /// Send sample texts to a running server and report the responses
    Probe(probe::ProbeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Analyze(args) => analyze::execute(args).await,
            Commands::Probe(args) => probe::execute(args).await,
        }
    }
}
