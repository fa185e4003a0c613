//! Smoke test against a running server.

use anyhow::{Context, Result};
use aura_core::AnalysisResult;
use clap::Args;
use colored::Colorize;
use std::time::Duration;

use crate::output;

/// Sentences covering positive, negative and neutral input.
pub const SAMPLE_TEXTS: [&str; 5] = [
    "I am feeling absolutely wonderful today! This is amazing.",
    "I'm quite frustrated with this situation and feeling angry.",
    "The weather is okay, nothing special about it.",
    "I love spending time with my family and friends, it brings me so much joy!",
    "I'm worried about the upcoming exam and feeling anxious about my performance.",
];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Args)]
pub struct ProbeArgs {
    /// Base URL of the running server
    #[arg(long, default_value = "http://localhost:8000")]
    pub url: String,

    /// Pause between requests in milliseconds
    #[arg(long, default_value = "1000")]
    pub delay_ms: u64,
}

pub async fn execute(args: ProbeArgs) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;
    let endpoint = format!("{}/process_text", args.url.trim_end_matches('/'));

    println!();
    println!("  {} {}", "Probing".cyan().bold(), endpoint);
    println!("  {}", "=".repeat(50).dimmed());

    let mut passed = 0;
    for (i, text) in SAMPLE_TEXTS.iter().enumerate() {
        println!();
        println!("  {} \"{}\"", format!("Test {}:", i + 1).bold(), text);

        let response = client
            .post(&endpoint)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => match resp.json::<AnalysisResult>().await {
                Ok(result) => {
                    println!("   {}", "Success".green());
                    output::print_result(&result);
                    passed += 1;
                }
                Err(e) => println!("   {} invalid response body: {}", "Error".red(), e),
            },
            Ok(resp) => {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                println!("   {} {}", "Error".red(), status);
                println!("   {} {}", "Response:".dimmed(), body);
            }
            Err(e) if e.is_connect() => {
                println!(
                    "   {} server is not running or not reachable at {}",
                    "Connection error:".red(),
                    args.url
                );
                println!("   Start it first with: aura serve");
                break;
            }
            Err(e) if e.is_timeout() => {
                println!("   {} request took too long", "Timeout:".red());
            }
            Err(e) => {
                println!("   {} {}", "Unexpected error:".red(), e);
            }
        }

        if i + 1 < SAMPLE_TEXTS.len() {
            tokio::time::sleep(Duration::from_millis(args.delay_ms)).await;
        }
    }

    println!();
    println!("  {}", "=".repeat(50).dimmed());
    println!(
        "  Probe complete: {}/{} succeeded",
        passed,
        SAMPLE_TEXTS.len()
    );
    println!();

    Ok(())
}
