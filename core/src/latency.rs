//! Simulated network latency — the store's stand-in for a remote backend.
//!
//! Every store operation passes through the gate before touching its
//! sequence. The pause is a uniform draw inside the configured window,
//! taken from a deterministic RNG stream so a seeded run always pays the
//! same sequence of delays. There is no cancellation: the store is
//! single-threaded and every operation runs to completion.

use crate::{config::LatencyWindow, rng::StreamRng};
use std::time::Duration;

pub struct Latency {
    window: Option<LatencyWindow>,
    rng: StreamRng,
}

impl Latency {
    pub fn new(window: Option<LatencyWindow>, rng: StreamRng) -> Self {
        Self { window, rng }
    }

    /// Gate with no delay. Tests construct stores through
    /// `AdminConfig::default_test()`, which ends up here.
    pub fn off(rng: StreamRng) -> Self {
        Self { window: None, rng }
    }

    pub fn is_enabled(&self) -> bool {
        self.window.is_some()
    }

    /// Block for one simulated round-trip. No-op when disabled.
    pub fn pause(&mut self) {
        let Some(window) = self.window else {
            return;
        };
        let ms = self.rng.next_u64_in(window.min_ms, window.max_ms);
        log::trace!("latency gate: sleeping {ms}ms");
        std::thread::sleep(Duration::from_millis(ms));
    }
}
