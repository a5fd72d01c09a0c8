// Copyright 2025 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enter/leave-back reveal toggle.

/// A state change emitted by [`RevealState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealChange {
    /// The element entered its trigger region; apply the active marker.
    Activated,
    /// The element left backwards past its trigger; remove the marker.
    Deactivated,
}

/// Two-state toggle for enter/leave-back animation blocks.
///
/// Hosts wire a trigger's enter and leave-back callbacks to
/// [`on_enter`](Self::on_enter) and [`on_leave_back`](Self::on_leave_back);
/// each returns a change once per edge, so repeated callbacks from the
/// trigger engine cost no DOM writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct RevealState {
    active: bool,
}

impl RevealState {
    /// Creates an inactive reveal.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: false }
    }

    /// The element entered its trigger region.
    #[must_use]
    pub fn on_enter(&mut self) -> Option<RevealChange> {
        if self.active {
            return None;
        }
        self.active = true;
        Some(RevealChange::Activated)
    }

    /// The element scrolled back out past its trigger.
    #[must_use]
    pub fn on_leave_back(&mut self) -> Option<RevealChange> {
        if !self.active {
            return None;
        }
        self.active = false;
        Some(RevealChange::Deactivated)
    }

    /// True while revealed.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}
