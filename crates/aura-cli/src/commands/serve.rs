//! Web server command.

use anyhow::Result;
use aura_core::{Analyzer, Settings};
use aura_llm::GroqClient;
use aura_web::state::AppState;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

/// Log file used by `--log` when no path is given.
pub const DEFAULT_LOG_FILE: &str = ".aura/serve.log";

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to .aura/serve.log)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,
}

impl ServeArgs {
    pub fn log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let settings = Settings::from_env()?;
    let client = GroqClient::from_settings(&settings)?;
    let model = client.model().to_string();

    let analyzer = Analyzer::new(Arc::new(client));
    let state = AppState::new(analyzer, settings.cors_origins.clone());

    println!();
    println!(
        "  {} {}",
        "Sentiment Aura".cyan().bold(),
        "API Server".bold()
    );
    println!();
    println!(
        "  {}       http://{}:{}/process_text",
        "API".green(),
        args.host,
        args.port
    );
    println!(
        "  {}    http://{}:{}/health",
        "Health".green(),
        args.host,
        args.port
    );
    println!("  {}     {}", "Model".green(), model);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    aura_web::run_server(state, &args.host, args.port).await?;

    Ok(())
}
