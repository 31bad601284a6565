//! Interactive content summarizer.
//!
//! A single-user, form-style terminal tool: pick what to summarize
//! (URLs, PDF files, or text files), provide a topic, and get a
//! topic-focused summary back from Groq.

use anyhow::Result;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use tracing_subscriber::EnvFilter;

use extraction::{summarize, Extractor, GroqModel, SummarizeConfig};

mod form;
use form::{collect_items, Mode};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let term = Term::stdout();
    print_banner(&term)?;

    let topic: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Topic or Title")
        .allow_empty(true)
        .interact_text_on(&term)?;

    let labels: Vec<String> = Mode::ALL.iter().map(Mode::to_string).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose what to summarize")
        .items(&labels)
        .default(0)
        .interact_on(&term)?;
    let mode = Mode::ALL[selection];

    let items = collect_items(mode, &term)?;

    // The action button: its label reflects the selected mode.
    let run = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Summarize {mode}"))
        .default(true)
        .interact_on(&term)?;
    if !run {
        return Ok(());
    }

    let api_key = std::env::var("GROQ_API_KEY").unwrap_or_default();
    if let Err(message) = validate(&api_key, &topic) {
        println!("{}", message.red());
        return Ok(());
    }

    if items.is_empty() {
        println!("{}", "Nothing to summarize.".yellow());
        return Ok(());
    }

    println!();
    let extractor = Extractor::new();
    let report = match extractor.extract(&items).await {
        Ok(report) => report,
        Err(e) => {
            println!("{}", format!("Extraction failed: {e}").red());
            return Ok(());
        }
    };

    for skipped in &report.skipped {
        println!("{}", format!("{}: {}", skipped.source, skipped.message).red());
    }

    if report.is_empty() {
        println!("{}", "No content could be extracted.".yellow());
        return Ok(());
    }

    println!(
        "Extracted {} document(s), summarizing with focus on \"{}\"...",
        report.documents.len(),
        topic
    );

    let model = GroqModel::new(api_key);
    let outcome = summarize(&model, &report.documents, &topic, &SummarizeConfig::default()).await;

    for failure in &outcome.failures {
        println!(
            "{}",
            format!("Batch {} failed: {}", failure.batch + 1, failure.message).red()
        );
        if failure.rate_limited {
            println!(
                "{}",
                "Rate limit reached. Paused before continuing with the next batch.".yellow()
            );
        }
    }

    match outcome.summary {
        Some(summary) => {
            println!();
            println!(
                "{}",
                format!("Summary generated successfully for {mode}!").green().bold()
            );
            println!();
            println!("{summary}");
        }
        None => println!("{}", "No summary available.".yellow()),
    }

    Ok(())
}

fn print_banner(term: &Term) -> Result<()> {
    term.clear_screen()?;
    println!(
        "{}",
        "╔════════════════════════════════════════╗".bright_cyan()
    );
    println!(
        "{}",
        "║          Content Summarizer            ║".bright_cyan()
    );
    println!(
        "{}",
        "╚════════════════════════════════════════╝".bright_cyan()
    );
    println!("Summarize content from multiple sources\n");
    Ok(())
}

/// Blank credential or topic blocks the action before any work happens.
fn validate(api_key: &str, topic: &str) -> std::result::Result<(), String> {
    if api_key.trim().is_empty() || topic.trim().is_empty() {
        return Err(
            "Please provide the GROQ_API_KEY and a topic/title to get started.".to_string(),
        );
    }
    Ok(())
}
