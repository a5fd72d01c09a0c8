// Copyright 2025 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=scrollwork_progress --heading-base-level=0

//! Scrollwork Progress: scroll-progress signal math and discrete-index state
//! machines.
//!
//! ## Overview
//!
//! Scroll-linked components map a continuous progress or visibility signal to
//! a small discrete state. This crate provides the signal side of that
//! mapping, host-agnostic and allocation-free:
//!
//! - Pure helpers deriving signals from viewport/bounds extents:
//!   [`travel_progress`], [`visibility_ratio`], [`scrub_position`], and the
//!   edge-margin remap [`edge_adjusted`].
//! - [`StepTrack`]: a state machine turning a raw progress signal into an item
//!   index, emitting a [`StepTransition`] only when the index changes. An
//!   index change is the sole trigger for visible side effects, so redundant
//!   samples cost nothing downstream.
//! - [`Throttle`]: an advisory, caller-timestamp sampling limiter for hosts
//!   that listen to raw scroll/resize streams.
//!
//! ## Mappings
//!
//! [`StepMapping::Edged`] ignores a margin (default 10%) at each end of the
//! progress span before dividing the rest evenly: progress below the lower
//! margin pins index 0, above the upper margin pins the last index, so the
//! first and last items hold steady while an element enters and leaves the
//! viewport. [`StepMapping::Rounded`] divides the span so the first and last
//! items each own half a step, the classic snap for pinned step sections.
//!
//! ```rust
//! use scrollwork_progress::{StepTrack, StepTransition};
//!
//! let mut track = StepTrack::new(4);
//! // adjusted = (0.5 - 0.1) / 0.8 = 0.5 → floor(0.5 × 4) = 2.
//! assert_eq!(track.sample(0.5), Some(StepTransition { from: None, to: 2 }));
//! // Same progress again: no transition, nothing to redo downstream.
//! assert_eq!(track.sample(0.5), None);
//! // Past the upper margin the last index holds.
//! assert_eq!(track.sample(1.4), Some(StepTransition { from: Some(2), to: 3 }));
//! ```
//!
//! ## Signals
//!
//! The helpers work on one axis (extents and offsets in any consistent unit,
//! typically logical pixels along the scroll axis). The `rect_adapter` feature
//! adds [`visible_fraction`] and [`travel_fraction`], thin conversions from
//! kurbo rects on the vertical axis for hosts that already carry 2D geometry.
//!
//! Float inputs are assumed to be finite (no NaNs); debug builds assert.
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

#[cfg(feature = "rect_adapter")]
mod rect;
mod signal;
mod steps;
mod throttle;

#[cfg(feature = "rect_adapter")]
pub use rect::{travel_fraction, visible_fraction};
pub use signal::{
    DEFAULT_EDGE_MARGIN, edge_adjusted, scrub_position, travel_progress, visibility_ratio,
};
pub use steps::{StepMapping, StepTrack, StepTransition};
pub use throttle::Throttle;
