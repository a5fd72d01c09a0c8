// Copyright 2025 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=scrollwork_activation --heading-base-level=0

//! Scrollwork Activation: a deferred, document-ordered activation queue.
//!
//! ## Overview
//!
//! Storefront sections attach to the page in arbitrary, framework-driven order,
//! including asynchronously rendered fragments. Scroll-linked effects, however,
//! must be created in visual top-to-bottom order so that overlapping and pinned
//! regions compute correct stacking and pin offsets. This crate provides
//! [`ActivationQueue`]: it buffers keyed activation callbacks until a single
//! [`flush`](ActivationQueue::flush), stable-sorts them by document position,
//! and invokes each exactly once in that order.
//!
//! Sorting by document position rather than registration order is the key
//! correctness property. Position is resolved at flush time through a
//! [`DocumentOrder`] comparator, so keys whose positions settle late (for
//! example ranks assigned after layout) are still ordered correctly.
//!
//! ## Lifecycle
//!
//! - Before the flush, [`register`](ActivationQueue::register) buffers.
//! - [`flush`](ActivationQueue::flush) is idempotent: the first call replays
//!   everything, later calls invoke nothing.
//! - After the flush, the queue is a synchronous passthrough: new registrations
//!   run immediately and are never buffered.
//! - [`reset`](ActivationQueue::reset) drops pending entries and re-arms the
//!   queue, supporting client-side page transitions.
//!
//! A callback returning `Err` never prevents later callbacks from running.
//! Failures are collected into the [`FlushOutcome`] and logged at warning
//! level; partial failure degrades to "that one feature stays inactive".
//!
//! ## Example
//!
//! ```rust
//! use scrollwork_activation::{ActivationQueue, NaturalOrder, Registration};
//!
//! // Keys are pre-order document ranks; the context is whatever hosts need.
//! let mut queue: ActivationQueue<u32, Vec<&'static str>, ()> = ActivationQueue::new();
//! let mut ctx = Vec::new();
//!
//! // Sections register as they attach, in any order.
//! let _ = queue.register(2, &mut ctx, |ctx| {
//!     ctx.push("hero");
//!     Ok(())
//! });
//! let _ = queue.register(1, &mut ctx, |ctx| {
//!     ctx.push("header");
//!     Ok(())
//! });
//!
//! // One flush replays them in document order.
//! let outcome = queue.flush(&NaturalOrder, &mut ctx);
//! assert_eq!(ctx, ["header", "hero"]);
//! assert!(outcome.is_clean());
//!
//! // Late arrivals run synchronously.
//! let late = queue.register(3, &mut ctx, |ctx| {
//!     ctx.push("footer");
//!     Ok(())
//! });
//! assert!(matches!(late, Registration::Invoked(Ok(()))));
//! assert_eq!(ctx, ["header", "hero", "footer"]);
//! ```
//!
//! The queue is process-scoped state that hosts construct and pass explicitly;
//! there is no hidden singleton.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod order;
mod queue;

pub use order::{DocumentOrder, NaturalOrder};
pub use queue::{ActivationQueue, FlushOutcome, Registration};
