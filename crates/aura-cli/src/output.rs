//! Terminal formatting for analysis results.

use aura_core::{AnalysisResult, SentimentLabel};
use colored::{ColoredString, Colorize};

/// Color a sentiment label by polarity.
pub fn label(label: SentimentLabel) -> ColoredString {
    match label {
        SentimentLabel::Positive => label.as_str().green().bold(),
        SentimentLabel::Negative => label.as_str().red().bold(),
        SentimentLabel::Neutral => label.as_str().yellow().bold(),
    }
}

/// Print a result as an indented block.
pub fn print_result(result: &AnalysisResult) {
    println!("   {}  {:.2}", "Sentiment:".dimmed(), result.sentiment);
    println!("   {}      {}", "Label:".dimmed(), label(result.sentiment_label));
    println!(
        "   {}   {}",
        "Keywords:".dimmed(),
        if result.keywords.is_empty() {
            "-".to_string()
        } else {
            result.keywords.join(", ")
        }
    );
    println!("   {} {:.2}", "Confidence:".dimmed(), result.confidence);
    println!("   {}   {}", "Emotions:".dimmed(), result.emotion_summary());
}
