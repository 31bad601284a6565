//! LLM prompt for topic-focused summarization.

/// Stuff-style summarization prompt.
///
/// The whole batch of documents is inlined into the `{text}` slot; the
/// model is asked to keep the summary focused on the user's topic.
pub const SUMMARIZE_PROMPT: &str = r#"Provide a summary of the following content focusing on the topic: "{topic}":
Content:{text}"#;

/// Fill the prompt slots with the topic and concatenated batch text.
pub fn format_summarize_prompt(topic: &str, text: &str) -> String {
    SUMMARIZE_PROMPT
        .replace("{topic}", topic)
        .replace("{text}", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_summarize_prompt() {
        let prompt = format_summarize_prompt("Greek letters", "Alpha. Beta.");

        assert!(prompt.contains(r#"focusing on the topic: "Greek letters""#));
        assert!(prompt.contains("Content:Alpha. Beta."));
        assert!(!prompt.contains("{topic}"));
        assert!(!prompt.contains("{text}"));
    }
}
