use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Standard timeouts used by every explicit wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeoutTier {
    Nominal,
    Minimum,
    Loading,
    Default,
    Average,
    Extended,
    Maximum,
}

impl TimeoutTier {
    pub const ALL: [TimeoutTier; 7] = [
        TimeoutTier::Nominal,
        TimeoutTier::Minimum,
        TimeoutTier::Loading,
        TimeoutTier::Default,
        TimeoutTier::Average,
        TimeoutTier::Extended,
        TimeoutTier::Maximum,
    ];

    pub const fn duration(self) -> Duration {
        let secs = match self {
            TimeoutTier::Nominal => 1,
            TimeoutTier::Minimum => 5,
            TimeoutTier::Loading => 15,
            TimeoutTier::Default => 30,
            TimeoutTier::Average => 60,
            TimeoutTier::Extended => 100,
            TimeoutTier::Maximum => 180,
        };
        Duration::from_secs(secs)
    }

    pub const fn name(self) -> &'static str {
        match self {
            TimeoutTier::Nominal => "NOMINAL_TIME_OUT",
            TimeoutTier::Minimum => "MINIMUM_TIME_OUT",
            TimeoutTier::Loading => "LOADING_TIME_OUT",
            TimeoutTier::Default => "DEFAULT_TIME_OUT",
            TimeoutTier::Average => "AVERAGE_TIME_OUT",
            TimeoutTier::Extended => "EXTENDED_TIME_OUT",
            TimeoutTier::Maximum => "MAXIMUM_TIME_OUT",
        }
    }
}

impl Default for TimeoutTier {
    fn default() -> Self {
        TimeoutTier::Default
    }
}

impl fmt::Display for TimeoutTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timeout [{}] seconds = {}s", self.name(), self.duration().as_secs())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown timeout tier: {0}")]
pub struct ParseTimeoutTierError(String);

impl FromStr for TimeoutTier {
    type Err = ParseTimeoutTierError;

    /// Accepts `DEFAULT`, `default` and `DEFAULT_TIME_OUT` style names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let short = upper.trim_end_matches("_TIME_OUT");
        TimeoutTier::ALL
            .iter()
            .copied()
            .find(|t| t.name().trim_end_matches("_TIME_OUT") == short)
            .ok_or_else(|| ParseTimeoutTierError(s.to_string()))
    }
}
