use std::time::Duration;

use serde::Deserialize;
use thirtyfour::query::ElementPoller;

use crate::timeout::TimeoutTier;

/// Waits never poll faster than this, whatever the configured interval.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Polling configuration carried by a driver session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WaitConfig {
    /// Tier used when a wait does not name one.
    pub default_tier: TimeoutTier,
    #[serde(rename = "poll_interval_ms", deserialize_with = "millis")]
    pub poll_interval: Duration,
}

fn millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_millis)
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            default_tier: TimeoutTier::Default,
            poll_interval: Duration::from_millis(500),
        }
    }
}

impl WaitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The poller for a wait bounded by `tier`, with the interval raised to
    /// [`MIN_POLL_INTERVAL`] if it is shorter.
    pub fn poller(&self, tier: TimeoutTier) -> ElementPoller {
        ElementPoller::TimeoutWithInterval(tier.duration(), self.poll_interval.max(MIN_POLL_INTERVAL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_fills_missing_fields_with_defaults() {
        let config: WaitConfig = serde_json::from_str(r#"{"poll_interval_ms": 100}"#).unwrap();
        assert_eq!(config.poll_interval, Duration::from_millis(100));
        assert_eq!(config.default_tier, TimeoutTier::Default);

        let config: WaitConfig = serde_json::from_str(r#"{"default_tier": "LOADING"}"#).unwrap();
        assert_eq!(config.default_tier, TimeoutTier::Loading);
        assert_eq!(config.poll_interval, Duration::from_millis(500));
    }

    #[test]
    fn zero_interval_is_raised_to_the_minimum() {
        let config = WaitConfig {
            default_tier: TimeoutTier::Nominal,
            poll_interval: Duration::from_millis(0),
        };
        match config.poller(TimeoutTier::Minimum) {
            ElementPoller::TimeoutWithInterval(timeout, interval) => {
                assert_eq!(timeout, Duration::from_secs(5));
                assert_eq!(interval, MIN_POLL_INTERVAL);
            }
            p => panic!("unexpected poller: {:?}", p),
        }

        let config = WaitConfig::default();
        match config.poller(TimeoutTier::Nominal) {
            ElementPoller::TimeoutWithInterval(_, interval) => {
                assert_eq!(interval, Duration::from_millis(500))
            }
            p => panic!("unexpected poller: {:?}", p),
        }
    }
}
