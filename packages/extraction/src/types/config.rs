//! Configuration for the summarization pass.

use std::time::Duration;

/// Tuning for batch summarization.
#[derive(Debug, Clone)]
pub struct SummarizeConfig {
    /// Number of documents sent per completion request
    pub batch_size: usize,

    /// Pause after a rate-limited batch before continuing with the next one
    pub rate_limit_backoff: Duration,
}

impl Default for SummarizeConfig {
    fn default() -> Self {
        Self {
            batch_size: 5,
            rate_limit_backoff: Duration::from_secs(300),
        }
    }
}

impl SummarizeConfig {
    /// Set the batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the rate-limit backoff duration.
    pub fn with_rate_limit_backoff(mut self, backoff: Duration) -> Self {
        self.rate_limit_backoff = backoff;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SummarizeConfig::default();
        assert_eq!(config.batch_size, 5);
        assert_eq!(config.rate_limit_backoff, Duration::from_secs(300));
    }

    #[test]
    fn test_builder() {
        let config = SummarizeConfig::default()
            .with_batch_size(2)
            .with_rate_limit_backoff(Duration::from_secs(1));
        assert_eq!(config.batch_size, 2);
        assert_eq!(config.rate_limit_backoff, Duration::from_secs(1));
    }
}
