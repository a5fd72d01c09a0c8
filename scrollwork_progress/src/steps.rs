// Copyright 2025 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Progress-to-index state machine.

use crate::signal::{DEFAULT_EDGE_MARGIN, edge_adjusted};

/// How progress maps to an item index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepMapping {
    /// Remaps away an edge margin with [`edge_adjusted`], then takes
    /// `floor(adjusted × len)` clamped to the last index. Progress below the
    /// lower margin pins index 0; above the upper margin, `len - 1`.
    Edged {
        /// Fraction of the progress span ignored at each edge, in `[0, 0.5)`.
        margin: f64,
    },
    /// Rounds `clamp01(progress) × (len - 1)` half-up, so the first and last
    /// items each own half a step of progress.
    Rounded,
}

impl StepMapping {
    /// The index this mapping selects for `raw` progress over `len` items.
    ///
    /// A pure function of its inputs. `len` must be non-zero; debug builds
    /// assert and release builds return 0.
    #[must_use]
    pub fn index_for(self, raw: f64, len: usize) -> usize {
        debug_assert!(len > 0, "index_for needs at least one item");
        if len == 0 {
            return 0;
        }
        match self {
            Self::Edged { margin } => {
                let scaled = edge_adjusted(raw, margin) * len as f64;
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "Index is clamped to bounds immediately after the cast"
                )]
                let index = scaled as usize;
                index.min(len - 1)
            }
            Self::Rounded => {
                let scaled = raw.clamp(0.0, 1.0) * (len - 1) as f64;
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "Index is clamped to bounds immediately after the cast"
                )]
                let index = (scaled + 0.5) as usize;
                index.min(len - 1)
            }
        }
    }
}

/// An index change emitted by [`StepTrack::sample`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepTransition {
    /// The previously current index; `None` before the first sample.
    pub from: Option<usize>,
    /// The newly current index.
    pub to: usize,
}

/// Maps a raw progress signal to a current item index, reporting changes.
///
/// The track is direction-agnostic: the selected index is purely a function
/// of the latest progress sample, so forward and backward scrolling need no
/// special handling. Consumers deactivate [`StepTransition::from`] and
/// activate [`StepTransition::to`] in the same transition, keeping exactly
/// one item active.
///
/// `current` starts as `None`: nothing is active until the first sample, so
/// initial activation is observable like any other transition.
#[derive(Clone, Debug)]
pub struct StepTrack {
    len: usize,
    mapping: StepMapping,
    current: Option<usize>,
    last_progress: f64,
}

impl StepTrack {
    /// Creates an edged track over `len` items with the default margin.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self::with_margin(len, DEFAULT_EDGE_MARGIN)
    }

    /// Creates an edged track with a custom margin in `[0, 0.5)`.
    ///
    /// Out-of-range margins degrade as documented on [`edge_adjusted`].
    #[must_use]
    pub fn with_margin(len: usize, margin: f64) -> Self {
        Self::with_mapping(len, StepMapping::Edged { margin })
    }

    /// Creates a rounded track, the snap used by pinned step sections.
    #[must_use]
    pub fn rounded(len: usize) -> Self {
        Self::with_mapping(len, StepMapping::Rounded)
    }

    /// Creates a track with an explicit mapping.
    #[must_use]
    pub const fn with_mapping(len: usize, mapping: StepMapping) -> Self {
        Self {
            len,
            mapping,
            current: None,
            last_progress: 0.0,
        }
    }

    /// Feeds one raw progress sample.
    ///
    /// Returns the transition when the mapped index differs from the current
    /// one, updating the current index; otherwise `None`. Feeding the same
    /// progress twice in a row never produces a second transition. An empty
    /// track never transitions.
    pub fn sample(&mut self, raw: f64) -> Option<StepTransition> {
        self.last_progress = raw;
        if self.len == 0 {
            return None;
        }
        let target = self.mapping.index_for(raw, self.len);
        if self.current == Some(target) {
            return None;
        }
        let from = self.current;
        self.current = Some(target);
        Some(StepTransition { from, to: target })
    }

    /// The currently selected index, `None` before the first sample.
    #[must_use]
    pub const fn current(&self) -> Option<usize> {
        self.current
    }

    /// The most recent raw progress sample.
    #[must_use]
    pub const fn progress(&self) -> f64 {
        self.last_progress
    }

    /// Number of items on the track.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when the track has no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The configured mapping.
    #[must_use]
    pub const fn mapping(&self) -> StepMapping {
        self.mapping
    }

    /// Resizes the track, clamping the current index into the new range.
    ///
    /// Shrinking past the current index moves it to the new last item (the
    /// next sample then transitions normally); shrinking to zero clears it.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.current = match (self.current, len) {
            (_, 0) => None,
            (Some(index), _) => Some(index.min(len - 1)),
            (None, _) => None,
        };
    }

    /// Forgets the current index and progress, as if never sampled.
    pub fn reset(&mut self) {
        self.current = None;
        self.last_progress = 0.0;
    }
}
