//! Session resolver configuration

use serde::Deserialize;
use std::time::Duration;

/// Retry policy for the session resolver
#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    /// Internal retries for transient directory failures
    #[serde(default = "default_retry_budget")]
    pub retry_budget: u32,

    /// Pause before a retry attempt, in milliseconds
    #[serde(default = "default_retry_delay")]
    pub retry_delay_ms: u64,
}

impl ResolverConfig {
    /// Get retry delay as Duration
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            retry_budget: default_retry_budget(),
            retry_delay_ms: default_retry_delay(),
        }
    }
}

fn default_retry_budget() -> u32 {
    1
}

fn default_retry_delay() -> u64 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_retry_after_a_short_pause() {
        let config = ResolverConfig::default();
        assert_eq!(config.retry_budget, 1);
        assert_eq!(config.retry_delay(), Duration::from_millis(100));
    }
}
