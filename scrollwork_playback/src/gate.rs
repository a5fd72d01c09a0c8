// Copyright 2025 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The playback gate state machine.

/// Default fraction of an element that must be visible before playback starts.
pub const DEFAULT_PLAY_VISIBILITY: f64 = 0.33;

/// A playback instruction for the host's media element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackCommand {
    /// Begin playback.
    Play {
        /// Seek to the beginning before playing. Set only for the first
        /// start of a visibility episode.
        from_start: bool,
    },
    /// Pause playback. Carries no seek: the current position is preserved.
    Pause,
}

/// Gates media playback on a visibility-ratio signal and user pauses.
///
/// State is four booleans around a threshold: whether the element is
/// currently visible (ratio at or above threshold), whether the gate believes
/// media is playing, whether the user paused this episode, and whether the
/// next start should seek to the beginning. See the crate docs for the full
/// contract.
#[derive(Clone, Debug)]
pub struct PlaybackGate {
    threshold: f64,
    playing: bool,
    user_paused: bool,
    visible: bool,
    restart_pending: bool,
}

impl PlaybackGate {
    /// Creates a gate with the default visibility threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_PLAY_VISIBILITY)
    }

    /// Creates a gate with a custom threshold.
    ///
    /// The threshold is a ratio; values are clamped into `[0, 1]` and debug
    /// builds assert on non-finite input.
    #[must_use]
    pub fn with_threshold(threshold: f64) -> Self {
        debug_assert!(
            threshold.is_finite(),
            "playback threshold must be finite; got {threshold:?}"
        );
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            playing: false,
            user_paused: false,
            visible: false,
            restart_pending: false,
        }
    }

    /// Feeds one visibility-ratio sample.
    ///
    /// Ratios at or above the threshold count as visible. Returns the command
    /// the host should run, if any; see the crate docs for when `Play` seeks
    /// to the beginning and when a pause preserves position.
    #[must_use]
    pub fn on_visibility(&mut self, ratio: f64) -> Option<PlaybackCommand> {
        debug_assert!(
            ratio.is_finite(),
            "visibility ratio must be finite; got {ratio:?}"
        );
        if ratio >= self.threshold {
            if !self.visible {
                self.visible = true;
                self.restart_pending = true;
            }
            if self.user_paused || self.playing {
                return None;
            }
            self.playing = true;
            let from_start = self.restart_pending;
            self.restart_pending = false;
            Some(PlaybackCommand::Play { from_start })
        } else {
            self.visible = false;
            self.user_paused = false;
            self.restart_pending = false;
            if self.playing {
                self.playing = false;
                Some(PlaybackCommand::Pause)
            } else {
                None
            }
        }
    }

    /// Handles an explicit pause request from the user.
    ///
    /// When playing, pauses and latches the user pause, suppressing
    /// auto-start until the element fully exits and re-enters the visibility
    /// region. A no-op when nothing is playing.
    #[must_use]
    pub fn on_user_pause(&mut self) -> Option<PlaybackCommand> {
        if !self.playing {
            return None;
        }
        self.playing = false;
        self.user_paused = true;
        Some(PlaybackCommand::Pause)
    }

    /// Reports that the host's last `Play` was rejected by the platform.
    ///
    /// Logs at warning level and reverts to not-playing with the seek re-armed,
    /// so the next qualifying visibility sample retries the start from the
    /// beginning. A no-op if the gate is not currently in the playing state.
    pub fn on_start_rejected(&mut self) {
        if !self.playing {
            return;
        }
        log::warn!("playback start rejected; retrying on the next qualifying sample");
        self.playing = false;
        self.restart_pending = true;
    }

    /// True while the gate believes media is playing.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// True while an explicit user pause suppresses auto-start.
    #[must_use]
    pub const fn is_user_paused(&self) -> bool {
        self.user_paused
    }

    /// True while the last sample was at or above the threshold.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// The configured visibility threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Clears all state, keeping the threshold.
    pub fn clear(&mut self) {
        self.playing = false;
        self.user_paused = false;
        self.visible = false;
        self.restart_pending = false;
    }
}

impl Default for PlaybackGate {
    fn default() -> Self {
        Self::new()
    }
}
