//! Merge configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Per-source channel capacity for merge workers. `None` means
    /// unbounded channels; `Some(0)` is a rendezvous channel.
    pub channel_capacity: Option<usize>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            channel_capacity: Some(64), // small buffer; merge consumes one per step
        }
    }
}

impl MergeConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `RILL_CHANNEL_CAPACITY`: per-source channel capacity
    /// - `RILL_CHANNEL_UNBOUNDED`: `1`/`true` switches to unbounded channels
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("RILL_CHANNEL_CAPACITY") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.channel_capacity = Some(v);
            }
        }

        if let Ok(s) = std::env::var("RILL_CHANNEL_UNBOUNDED") {
            if s == "1" || s.eq_ignore_ascii_case("true") {
                cfg.channel_capacity = None;
            }
        }

        cfg
    }
}
