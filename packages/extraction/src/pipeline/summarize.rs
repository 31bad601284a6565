//! Batch summarization over a completion model.

use tracing::{debug, info, warn};

use crate::pipeline::prompts::format_summarize_prompt;
use crate::traits::completion::CompletionModel;
use crate::types::{BatchFailure, Document, SummarizeConfig, SummarizeOutcome};

/// Summarize documents batch by batch, focused on `topic`.
///
/// Documents are partitioned into contiguous batches of
/// `config.batch_size`; each batch is concatenated into one prompt and
/// sent as a single completion request. A failed batch is recorded in
/// the outcome and its content is absent from the final summary. When
/// the failure looks like provider throttling, the pass sleeps for
/// `config.rate_limit_backoff` before moving to the next batch — the
/// failed batch itself is not resubmitted.
///
/// Returns `summary: None` when no batch succeeded.
pub async fn summarize<M: CompletionModel + ?Sized>(
    model: &M,
    docs: &[Document],
    topic: &str,
    config: &SummarizeConfig,
) -> SummarizeOutcome {
    let batch_size = config.batch_size.max(1);
    let mut summaries: Vec<String> = Vec::new();
    let mut failures: Vec<BatchFailure> = Vec::new();

    for (index, batch) in docs.chunks(batch_size).enumerate() {
        let text = batch
            .iter()
            .map(|d| d.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        let prompt = format_summarize_prompt(topic, &text);

        debug!(
            batch = index,
            documents = batch.len(),
            prompt_length = prompt.len(),
            "Submitting batch"
        );

        match model.complete(&prompt).await {
            Ok(summary) => summaries.push(summary),
            Err(e) => {
                let message = e.to_string();
                let rate_limited = message.to_lowercase().contains("rate limit");
                warn!(batch = index, rate_limited, error = %message, "Batch summarization failed");
                failures.push(BatchFailure {
                    batch: index,
                    rate_limited,
                    message,
                });

                if rate_limited {
                    info!(
                        backoff_secs = config.rate_limit_backoff.as_secs(),
                        "Rate limit reached, pausing before the next batch"
                    );
                    tokio::time::sleep(config.rate_limit_backoff).await;
                }
            }
        }
    }

    info!(
        batches_ok = summaries.len(),
        batches_failed = failures.len(),
        "Summarization completed"
    );

    let summary = if summaries.is_empty() {
        None
    } else {
        Some(summaries.join("\n"))
    };

    SummarizeOutcome { summary, failures }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockCompletion;
    use std::time::Duration;

    fn docs(n: usize) -> Vec<Document> {
        (0..n).map(|i| Document::new(format!("doc {i}"))).collect()
    }

    #[tokio::test]
    async fn test_one_request_per_batch() {
        // 12 documents at batch size 5 -> ceil(12 / 5) = 3 requests.
        let model = MockCompletion::new();
        let config = SummarizeConfig::default();

        let outcome = summarize(&model, &docs(12), "anything", &config).await;

        assert_eq!(model.call_count(), 3);
        assert!(outcome.summary.is_some());
        assert!(outcome.failures.is_empty());
    }

    #[tokio::test]
    async fn test_summaries_joined_in_batch_order() {
        let model = MockCompletion::new()
            .with_response("first")
            .with_response("second");
        let config = SummarizeConfig::default().with_batch_size(1);

        let outcome = summarize(&model, &docs(2), "topic", &config).await;

        assert_eq!(outcome.summary.unwrap(), "first\nsecond");
    }

    #[tokio::test]
    async fn test_single_batch_contains_all_documents() {
        // Two text documents and batch size >= 2: exactly one request
        // carrying both contents, and the output is that one response.
        let model = MockCompletion::new().with_response("one combined summary");
        let config = SummarizeConfig::default();

        let documents = vec![
            Document::new("Alpha alpha alpha."),
            Document::new("Beta beta beta."),
        ];
        let outcome = summarize(&model, &documents, "Greek letters", &config).await;

        assert_eq!(model.call_count(), 1);
        let prompt = &model.calls()[0];
        assert!(prompt.contains("Alpha alpha alpha."));
        assert!(prompt.contains("Beta beta beta."));
        assert!(prompt.contains(r#""Greek letters""#));
        assert_eq!(outcome.summary.unwrap(), "one combined summary");
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limited_batch_pauses_and_is_skipped() {
        let model = MockCompletion::new()
            .with_failure("Rate Limit reached for model")
            .with_response("batch two summary");
        let config = SummarizeConfig::default().with_batch_size(1);

        let start = tokio::time::Instant::now();
        let outcome = summarize(&model, &docs(2), "topic", &config).await;

        // The pass paused for the full backoff and then moved on.
        assert!(start.elapsed() >= Duration::from_secs(300));
        assert_eq!(model.call_count(), 2);
        assert_eq!(outcome.summary.unwrap(), "batch two summary");
        assert_eq!(outcome.failures.len(), 1);
        assert!(outcome.failures[0].rate_limited);
        assert_eq!(outcome.failures[0].batch, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_rate_limit_failure_continues_without_pause() {
        let model = MockCompletion::new()
            .with_failure("model blew up")
            .with_response("second batch");
        let config = SummarizeConfig::default().with_batch_size(1);

        let start = tokio::time::Instant::now();
        let outcome = summarize(&model, &docs(2), "topic", &config).await;

        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(outcome.summary.unwrap(), "second batch");
        assert_eq!(outcome.failures.len(), 1);
        assert!(!outcome.failures[0].rate_limited);
    }

    #[tokio::test]
    async fn test_all_batches_failed_yields_none() {
        let model = MockCompletion::new().with_failure("boom");
        let config = SummarizeConfig::default();

        let outcome = summarize(&model, &docs(1), "topic", &config).await;

        assert!(outcome.summary.is_none());
        assert_eq!(outcome.failures.len(), 1);
    }

    #[tokio::test]
    async fn test_no_documents_no_requests() {
        let model = MockCompletion::new();
        let outcome = summarize(&model, &[], "topic", &SummarizeConfig::default()).await;

        assert_eq!(model.call_count(), 0);
        assert!(outcome.summary.is_none());
    }
}
