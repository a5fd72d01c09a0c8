// Copyright 2025 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoint-conditional mounting.

/// A mount-state instruction from [`BreakpointGate::on_media_change`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountAction {
    /// Build the feature (the media condition started matching).
    Mount,
    /// Destroy the feature (the media condition stopped matching).
    Unmount,
}

/// Turns media-condition match changes into one-shot mount actions.
///
/// Some carousels exist only under a media condition, e.g. narrow viewports:
/// built when the condition starts matching and destroyed when it stops.
/// The gate makes that idempotent: repeated samples of the same match state
/// return `None`, so hosts can forward every media-query event unfiltered.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreakpointGate {
    mounted: bool,
}

impl BreakpointGate {
    /// Creates an unmounted gate.
    #[must_use]
    pub const fn new() -> Self {
        Self { mounted: false }
    }

    /// Feeds the current match state of the media condition.
    #[must_use]
    pub fn on_media_change(&mut self, matches: bool) -> Option<MountAction> {
        if matches == self.mounted {
            return None;
        }
        self.mounted = matches;
        Some(if matches {
            MountAction::Mount
        } else {
            MountAction::Unmount
        })
    }

    /// True while the feature should exist.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }
}
