// Copyright 2025 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=scrollwork_playback --heading-base-level=0

//! Scrollwork Playback: a visibility-ratio gate for background media.
//!
//! ## Overview
//!
//! Background video should play while its section is sufficiently on screen,
//! pause (keeping its position) when it scrolls away, and respect an explicit
//! user pause until the section has fully left and re-entered the viewport.
//! [`PlaybackGate`] models exactly that: hosts feed it visibility ratios and
//! user pause requests, and it returns [`PlaybackCommand`]s for the host to
//! run against the real media element. The gate itself never touches media,
//! so the same state machine serves an intersection observer, a polling
//! fallback, or a test.
//!
//! ## Contract
//!
//! - A ratio at or above the threshold (default
//!   [`DEFAULT_PLAY_VISIBILITY`]) starts playback unless the user paused;
//!   starting is idempotent, and only the first start of a visibility episode
//!   seeks to the beginning.
//! - A ratio below the threshold ends the episode: pause without seeking, and
//!   clear the user-pause latch so the next entry can auto-play.
//! - [`on_user_pause`](PlaybackGate::on_user_pause) pauses and suppresses
//!   auto-start until the next full exit and re-entry.
//! - A platform-rejected start is reported back via
//!   [`on_start_rejected`](PlaybackGate::on_start_rejected); the gate logs a
//!   warning, stays uncorrupted, and retries on the next qualifying sample.
//!
//! ```rust
//! use scrollwork_playback::{PlaybackCommand, PlaybackGate};
//!
//! let mut gate = PlaybackGate::new();
//! assert_eq!(gate.on_visibility(0.0), None);
//! assert_eq!(
//!     gate.on_visibility(0.4),
//!     Some(PlaybackCommand::Play { from_start: true })
//! );
//! assert_eq!(gate.on_visibility(0.4), None);
//! assert_eq!(gate.on_visibility(0.2), Some(PlaybackCommand::Pause));
//! ```
//!
//! ## Fallback mode
//!
//! Hosts without a visibility-observation primitive poll element bounds on
//! scroll/resize and derive the same ratio signal (for example with
//! `scrollwork_progress::visibility_ratio`); the gate's transitions are
//! identical either way.
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod gate;

pub use gate::{DEFAULT_PLAY_VISIBILITY, PlaybackCommand, PlaybackGate};
