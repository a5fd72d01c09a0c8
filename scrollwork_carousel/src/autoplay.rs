// Copyright 2025 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timestamp-driven autoplay scheduling.

/// Schedules carousel auto-advance without owning a clock.
///
/// Hosts call [`poll`](Autoplay::poll) from whatever tick source they have
/// (an animation frame, a coarse timer) with caller-supplied millisecond
/// timestamps; `poll` reports when one slide advance is due and re-arms
/// itself. Hovering pauses the schedule and leaving restarts a full
/// interval, matching the engine's pause-on-hover behavior. User interaction
/// either restarts the interval or disables the schedule, per
/// [`set_disable_on_interaction`](Autoplay::set_disable_on_interaction).
#[derive(Clone, Copy, Debug)]
pub struct Autoplay {
    delay_ms: u64,
    disable_on_interaction: bool,
    hovered: bool,
    disabled: bool,
    next_due_ms: Option<u64>,
}

impl Autoplay {
    /// Creates an unarmed schedule advancing every `delay_ms`.
    ///
    /// Interaction re-arms rather than disables by default.
    #[must_use]
    pub const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            disable_on_interaction: false,
            hovered: false,
            disabled: false,
            next_due_ms: None,
        }
    }

    /// Chooses whether user interaction disables the schedule outright
    /// (`true`) or restarts the interval (`false`, the default).
    pub fn set_disable_on_interaction(&mut self, disable: bool) {
        self.disable_on_interaction = disable;
    }

    /// Starts (or restarts) the schedule from `now_ms`.
    ///
    /// Clears an interaction disable; the first advance is due one full
    /// interval later.
    pub fn arm(&mut self, now_ms: u64) {
        self.disabled = false;
        self.next_due_ms = Some(now_ms + self.delay_ms);
    }

    /// Stops the schedule until the next [`arm`](Autoplay::arm).
    pub fn disarm(&mut self) {
        self.next_due_ms = None;
    }

    /// Reports whether a slide advance is due at `now_ms`.
    ///
    /// Returns `true` at most once per interval and re-arms from `now_ms`,
    /// so a long gap between polls yields a single advance, not a burst.
    /// Nothing advances while hovered, disabled, or unarmed.
    #[must_use]
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if self.disabled || self.hovered {
            return false;
        }
        match self.next_due_ms {
            Some(due) if now_ms >= due => {
                self.next_due_ms = Some(now_ms + self.delay_ms);
                true
            }
            _ => false,
        }
    }

    /// Pauses the schedule while the pointer is over the carousel.
    pub fn on_pointer_enter(&mut self) {
        self.hovered = true;
    }

    /// Resumes after a hover, restarting a full interval from `now_ms`.
    pub fn on_pointer_leave(&mut self, now_ms: u64) {
        self.hovered = false;
        if !self.disabled && self.next_due_ms.is_some() {
            self.next_due_ms = Some(now_ms + self.delay_ms);
        }
    }

    /// Handles a user interaction (drag, navigation click) at `now_ms`.
    pub fn on_interaction(&mut self, now_ms: u64) {
        if self.disable_on_interaction {
            self.disabled = true;
            self.next_due_ms = None;
        } else if self.next_due_ms.is_some() {
            self.next_due_ms = Some(now_ms + self.delay_ms);
        }
    }

    /// True while the schedule will eventually advance.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.next_due_ms.is_some() && !self.disabled
    }

    /// The configured advance interval in milliseconds.
    #[must_use]
    pub const fn delay_ms(&self) -> u64 {
        self.delay_ms
    }
}

#[cfg(test)]
mod tests {
    use super::Autoplay;

    #[test]
    fn advances_once_per_interval() {
        let mut autoplay = Autoplay::new(5000);
        autoplay.arm(0);
        assert!(!autoplay.poll(1000));
        assert!(!autoplay.poll(4999));
        assert!(autoplay.poll(5000));
        assert!(!autoplay.poll(5001));
        assert!(autoplay.poll(10_000));
    }

    #[test]
    fn long_gaps_yield_a_single_advance() {
        let mut autoplay = Autoplay::new(5000);
        autoplay.arm(0);
        assert!(autoplay.poll(60_000));
        assert!(!autoplay.poll(60_001));
        assert!(autoplay.poll(65_000));
    }

    #[test]
    fn unarmed_schedules_never_advance() {
        let mut autoplay = Autoplay::new(5000);
        assert!(!autoplay.poll(100_000));
    }

    #[test]
    fn hover_holds_the_schedule_and_leave_restarts_it() {
        let mut autoplay = Autoplay::new(5000);
        autoplay.arm(0);
        autoplay.on_pointer_enter();
        assert!(!autoplay.poll(5000));
        assert!(!autoplay.poll(20_000));

        autoplay.on_pointer_leave(20_000);
        assert!(!autoplay.poll(24_999));
        assert!(autoplay.poll(25_000));
    }

    #[test]
    fn interaction_restarts_the_interval_by_default() {
        let mut autoplay = Autoplay::new(5000);
        autoplay.arm(0);
        autoplay.on_interaction(4000);
        assert!(!autoplay.poll(5000));
        assert!(autoplay.poll(9000));
        assert!(autoplay.is_armed());
    }

    #[test]
    fn interaction_can_disable_until_rearmed() {
        let mut autoplay = Autoplay::new(5000);
        autoplay.set_disable_on_interaction(true);
        autoplay.arm(0);
        autoplay.on_interaction(1000);
        assert!(!autoplay.is_armed());
        assert!(!autoplay.poll(100_000));

        autoplay.arm(100_000);
        assert!(autoplay.poll(105_000));
    }

    #[test]
    fn disarm_stops_polling() {
        let mut autoplay = Autoplay::new(5000);
        autoplay.arm(0);
        autoplay.disarm();
        assert!(!autoplay.poll(10_000));
        assert!(!autoplay.is_armed());
    }

    #[test]
    fn interaction_while_unarmed_does_not_arm() {
        let mut autoplay = Autoplay::new(5000);
        autoplay.on_interaction(0);
        assert!(!autoplay.poll(10_000));
    }
}
