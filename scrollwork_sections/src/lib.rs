// Copyright 2025 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=scrollwork_sections --heading-base-level=0

//! Scrollwork Sections: stepped-section coordination over the activation
//! queue and progress tracks.
//!
//! ## Overview
//!
//! A stepped (pinned) section shows one of N step items at a time, selected by
//! scroll progress; the step that just became active may also start a
//! co-indexed background video, once. [`StepSection`] coordinates that: it
//! owns a `StepTrack` from `scrollwork_progress` and turns each index
//! transition into an ordered effect buffer — deactivate the old step,
//! activate the new one, start its media the first time. Hosts apply the
//! effects to their real elements; the section never touches a DOM.
//!
//! Also here:
//!
//! - [`Behavior`]: the explicit `start`/`stop` lifecycle seam for scroll-linked
//!   components, with idempotent teardown.
//! - [`RevealState`]: the two-state enter/leave-back toggle used by simple
//!   animation blocks.
//!
//! ## Wiring
//!
//! Sections register their activation with an `ActivationQueue` so that
//! scroll-linked effects are created in document order, then feed progress
//! samples to [`StepSection::advance`]:
//!
//! ```rust
//! use scrollwork_activation::{ActivationQueue, NaturalOrder};
//! use scrollwork_sections::{SectionEffect, StepItem, StepSection};
//!
//! // The host context: the section plus wherever effects land.
//! struct Ctx {
//!     section: StepSection<&'static str>,
//!     applied: Vec<SectionEffect<&'static str>>,
//! }
//! let mut ctx = Ctx {
//!     section: StepSection::new([
//!         StepItem::with_media("step-0", "video-0"),
//!         StepItem::new("step-1"),
//!     ]),
//!     applied: Vec::new(),
//! };
//!
//! // Registration buffers until the one document-ordered flush.
//! let mut queue: ActivationQueue<u32, Ctx, ()> = ActivationQueue::new();
//! let _ = queue.register(1, &mut ctx, |ctx| {
//!     // Activation takes the initial sample; step 0 becomes active.
//!     let effects = ctx.section.advance(0.0);
//!     ctx.applied.extend(effects);
//!     Ok(())
//! });
//! let outcome = queue.flush(&NaturalOrder, &mut ctx);
//! assert!(outcome.is_clean());
//! assert_eq!(
//!     ctx.applied,
//!     [
//!         SectionEffect::Activate("step-0"),
//!         SectionEffect::StartMedia("video-0"),
//!     ]
//! );
//!
//! // Scroll progress drives the track; the old step deactivates in the same
//! // transition that activates the new one.
//! let effects = ctx.section.advance(0.8);
//! assert_eq!(
//!     effects.as_slice(),
//!     [
//!         SectionEffect::Deactivate("step-0"),
//!         SectionEffect::Activate("step-1"),
//!     ]
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod behavior;
mod reveal;
mod section;

pub use behavior::Behavior;
pub use reveal::{RevealChange, RevealState};
pub use section::{SectionEffect, SectionEffects, StepFlags, StepItem, StepSection};
