// Copyright 2025 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The deferred activation queue.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::DocumentOrder;

/// A buffered activation callback and the key of its owner.
struct Entry<K, Ctx, E> {
    key: K,
    run: Box<dyn FnOnce(&mut Ctx) -> Result<(), E>>,
}

/// The immediate result of [`ActivationQueue::register`].
#[derive(Debug)]
#[must_use = "after the flush, registration carries the callback's result"]
pub enum Registration<E> {
    /// The queue has not flushed yet; the callback was buffered.
    Buffered,
    /// The queue had already flushed; the callback ran synchronously.
    Invoked(Result<(), E>),
}

impl<E> Registration<E> {
    /// True when the callback was buffered for a later flush.
    #[must_use]
    pub const fn is_buffered(&self) -> bool {
        matches!(self, Self::Buffered)
    }

    /// The synchronous result, when the callback ran immediately.
    pub fn invoked_result(self) -> Option<Result<(), E>> {
        match self {
            Self::Buffered => None,
            Self::Invoked(result) => Some(result),
        }
    }
}

/// Summary of one [`ActivationQueue::flush`] pass.
#[derive(Debug)]
#[must_use = "dropping the outcome discards callback failures"]
pub struct FlushOutcome<K, E> {
    /// Number of callbacks invoked, including failed ones.
    pub invoked: usize,
    /// Callbacks that returned an error, in flush order.
    pub failures: Vec<(K, E)>,
}

impl<K, E> FlushOutcome<K, E> {
    const fn empty() -> Self {
        Self {
            invoked: 0,
            failures: Vec::new(),
        }
    }

    /// True when every invoked callback succeeded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Collects keyed activation callbacks and replays them once, in document
/// order.
///
/// `K` identifies the registering owner (typically a pre-order document rank
/// or a node handle), `Ctx` is the host context handed to every callback, and
/// `E` is the callback error type. See the crate docs for the lifecycle.
pub struct ActivationQueue<K, Ctx, E> {
    pending: Vec<Entry<K, Ctx, E>>,
    flushed: bool,
}

impl<K, Ctx, E> ActivationQueue<K, Ctx, E> {
    /// Creates an empty, unflushed queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
            flushed: false,
        }
    }

    /// Registers an activation callback for `key`.
    ///
    /// Before the first [`flush`](Self::flush) the callback is buffered and
    /// `ctx` is untouched. After it, the queue is a synchronous passthrough:
    /// the callback runs immediately against `ctx`, is never buffered, and its
    /// result is returned in [`Registration::Invoked`].
    pub fn register<F>(&mut self, key: K, ctx: &mut Ctx, run: F) -> Registration<E>
    where
        F: FnOnce(&mut Ctx) -> Result<(), E> + 'static,
    {
        if self.flushed {
            return Registration::Invoked(run(ctx));
        }
        self.pending.push(Entry {
            key,
            run: Box::new(run),
        });
        Registration::Buffered
    }

    /// Replays all buffered callbacks once, in document order.
    ///
    /// The first call stable-sorts pending entries with `order` (entries at
    /// equal positions keep registration order), invokes each callback in the
    /// sorted order, discards the entries, and marks the queue flushed. A
    /// callback returning `Err` does not prevent later callbacks from running;
    /// each failure is logged at warning level and recorded in the outcome.
    ///
    /// Later calls invoke nothing and report an empty outcome.
    pub fn flush<O>(&mut self, order: &O, ctx: &mut Ctx) -> FlushOutcome<K, E>
    where
        O: DocumentOrder<K>,
        K: fmt::Debug,
    {
        if self.flushed {
            return FlushOutcome::empty();
        }
        self.flushed = true;

        let mut entries = core::mem::take(&mut self.pending);
        entries.sort_by(|a, b| order.cmp_position(&a.key, &b.key));

        let mut outcome = FlushOutcome::empty();
        for entry in entries {
            outcome.invoked += 1;
            if let Err(err) = (entry.run)(ctx) {
                log::warn!("activation for {:?} failed; continuing flush", entry.key);
                outcome.failures.push((entry.key, err));
            }
        }
        outcome
    }

    /// Clears pending entries and the flushed flag.
    ///
    /// Buffered callbacks are dropped without running. This re-arms the queue
    /// for a fresh flush, e.g. across client-side page transitions.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.flushed = false;
    }

    /// True once [`flush`](Self::flush) has run.
    #[must_use]
    pub const fn is_flushed(&self) -> bool {
        self.flushed
    }

    /// Number of callbacks waiting for the flush.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// True when no callbacks are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<K, Ctx, E> Default for ActivationQueue<K, Ctx, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, Ctx, E> fmt::Debug for ActivationQueue<K, Ctx, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivationQueue")
            .field("pending", &self.pending.len())
            .field("flushed", &self.flushed)
            .finish_non_exhaustive()
    }
}
