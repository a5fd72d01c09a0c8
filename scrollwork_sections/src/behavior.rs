// Copyright 2025 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The component lifecycle seam.

/// Explicit start/stop lifecycle for a scroll-linked component.
///
/// The context supplies the observed element and collaborator handles, so
/// components stay decoupled from any particular rendering tree. A typical
/// host registers each behavior's [`start`](Self::start) with an
/// `ActivationQueue` so components activate in document order, and calls
/// [`stop`](Self::stop) on teardown.
///
/// `start` may fail (a missing collaborator, a missing child element); the
/// error feeds the queue's per-callback isolation, and the feature degrades
/// to inactive. `stop` is infallible and must be idempotent: once a component
/// has released its observers and listeners, a second `stop` is a no-op.
/// Idempotence is what makes double-teardown harmless.
pub trait Behavior<Ctx> {
    /// Error produced when the behavior cannot start.
    type Error;

    /// Activates the behavior: create triggers, attach observers, take the
    /// initial sample.
    fn start(&mut self, ctx: &mut Ctx) -> Result<(), Self::Error>;

    /// Deactivates the behavior, releasing everything `start` registered.
    ///
    /// Must be idempotent, and safe to call on a behavior that never started.
    fn stop(&mut self, ctx: &mut Ctx);
}
