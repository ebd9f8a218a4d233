use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};

/// Vehicle cloud session initialization policy.
#[serde_as]
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Session {
    /// How many times the whole initialization sequence is attempted before
    /// giving up. Every region/brand candidate is tried in each attempt.
    #[serde(default = "Session::default_max_attempts")]
    pub max_attempts: u32,

    /// Pause between two attempts, in milliseconds.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(default = "Session::default_retry_backoff")]
    pub retry_backoff: Duration,

    /// Open the session when the service starts instead of on the first
    /// request. The service starts anyway if it fails.
    #[serde(default = "Session::default_warm_up")]
    pub warm_up: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            max_attempts: Self::default_max_attempts(),
            retry_backoff: Self::default_retry_backoff(),
            warm_up: Self::default_warm_up(),
        }
    }
}

impl Session {
    fn default_max_attempts() -> u32 {
        2
    }

    fn default_retry_backoff() -> Duration {
        Duration::from_millis(1000)
    }

    fn default_warm_up() -> bool {
        false
    }
}
