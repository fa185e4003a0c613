//! One-shot analysis command.

use anyhow::Result;
use aura_core::{AnalysisRequest, Analyzer, Settings};
use aura_llm::GroqClient;
use clap::Args;
use std::sync::Arc;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Text to analyze
    pub text: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let settings = Settings::from_env()?;
    let analyzer = Analyzer::new(Arc::new(GroqClient::from_settings(&settings)?));

    let result = analyzer.analyze(&AnalysisRequest::new(args.text)).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::print_result(&result);
    }

    Ok(())
}
