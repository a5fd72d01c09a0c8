// Copyright 2025 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Advisory sampling limiter for raw scroll/resize streams.

/// Admits at most one sample per interval, using caller-supplied timestamps.
///
/// Hosts that listen to raw scroll or resize events can drive far more
/// samples than the state machines need. `Throttle` admits the first sample
/// and then one per `min_interval_ms`. Timestamps are milliseconds from any
/// monotonic clock the caller owns; a timestamp earlier than the last
/// admitted one is dropped until the clock catches up.
///
/// Purely advisory: the machines in this workspace are functions of the
/// latest sample, so dropping intermediate samples never affects
/// correctness, only how promptly state updates.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    min_interval_ms: u64,
    last_admitted_ms: Option<u64>,
}

impl Throttle {
    /// Creates a throttle admitting one sample per `min_interval_ms`.
    ///
    /// An interval of 0 admits every sample.
    #[must_use]
    pub const fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            last_admitted_ms: None,
        }
    }

    /// Admits or drops a sample taken at `now_ms`.
    pub fn admit(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_admitted_ms {
            if now_ms.saturating_sub(last) < self.min_interval_ms {
                return false;
            }
        }
        self.last_admitted_ms = Some(now_ms);
        true
    }

    /// Forgets the last admitted sample so the next one passes.
    pub fn reset(&mut self) {
        self.last_admitted_ms = None;
    }

    /// The configured minimum interval in milliseconds.
    #[must_use]
    pub const fn min_interval_ms(&self) -> u64 {
        self.min_interval_ms
    }
}
