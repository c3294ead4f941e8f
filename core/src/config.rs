//! Store configuration.
//!
//! Every store is built from an `AdminConfig`. There are no config files:
//! the dashboard ships with fixed defaults, and tests use
//! `AdminConfig::default_test()` to turn the latency gate off.

use serde::{Deserialize, Serialize};

/// Simulated network latency window, in milliseconds.
///
/// Each store operation sleeps a uniformly random duration inside the
/// window before touching its sequence, emulating the round-trip the
/// dashboard would pay against a remote backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyWindow {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl LatencyWindow {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        assert!(min_ms <= max_ms, "latency window must satisfy min <= max");
        Self { min_ms, max_ms }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Master seed. All derived RNG streams (latency jitter, demo-data
    /// generation) are reproducible under the same seed.
    pub seed: u64,
    /// Latency applied to every store operation. `None` disables the gate.
    pub latency: Option<LatencyWindow>,
}

impl AdminConfig {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            latency: Some(LatencyWindow::new(200, 400)),
        }
    }

    /// Config with the latency gate disabled and a fixed seed, for tests.
    pub fn default_test() -> Self {
        Self {
            seed: 42,
            latency: None,
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self::new(42)
    }
}
