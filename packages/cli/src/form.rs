//! Interactive form inputs: mode selection and mode-specific collection.

use std::fmt;

use anyhow::Result;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input};
use extraction::SourceItem;

/// What the user wants to summarize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Urls,
    PdfFiles,
    TextFiles,
}

impl Mode {
    /// All selectable modes, in menu order.
    pub const ALL: [Mode; 3] = [Mode::Urls, Mode::PdfFiles, Mode::TextFiles];
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mode::Urls => "URLs",
            Mode::PdfFiles => "PDF Files",
            Mode::TextFiles => "Text Files",
        };
        write!(f, "{label}")
    }
}

/// Split a pasted block of URLs into trimmed, non-empty lines.
pub fn split_url_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Collect source items for the selected mode.
pub fn collect_items(mode: Mode, term: &Term) -> Result<Vec<SourceItem>> {
    match mode {
        Mode::Urls => {
            let lines = read_lines(term, "Enter URLs (one per line, empty line to finish)")?;
            let urls = split_url_lines(&lines.join("\n"));
            Ok(urls.into_iter().map(SourceItem::url).collect())
        }
        Mode::PdfFiles => collect_files(term, "PDF file path", SourceItem::pdf),
        Mode::TextFiles => collect_files(term, "Text file path", SourceItem::text),
    }
}

/// Read trimmed, non-empty lines until the user enters a blank one.
fn read_lines(term: &Term, prompt: &str) -> Result<Vec<String>> {
    println!("{}", prompt.bold());

    let mut lines = Vec::new();
    loop {
        let line: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{}", lines.len() + 1))
            .allow_empty(true)
            .interact_text_on(term)?;

        let line = line.trim().to_string();
        if line.is_empty() {
            break;
        }
        lines.push(line);
    }

    Ok(lines)
}

/// Read file paths, load each file's bytes, and wrap them as source items.
///
/// An unreadable path is reported inline and skipped; it never aborts
/// input collection.
fn collect_files(
    term: &Term,
    prompt: &str,
    make_item: fn(String, Vec<u8>) -> SourceItem,
) -> Result<Vec<SourceItem>> {
    let paths = read_lines(
        term,
        &format!("Enter {prompt}s (one per line, empty line to finish)"),
    )?;

    let mut items = Vec::new();
    for path in paths {
        match std::fs::read(&path) {
            Ok(bytes) => items.push(make_item(path, bytes)),
            Err(e) => println!("{}", format!("Could not read {path}: {e}").red()),
        }
    }

    Ok(items)
}
