// Copyright 2025 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=scrollwork_carousel --heading-base-level=0

//! Scrollwork Carousel: the theme-side logic around a carousel engine.
//!
//! ## Overview
//!
//! The carousel engine itself is an external collaborator; what the theme
//! owns is the configuration it hands over and the lifecycle around it. This
//! crate models that slice, host-agnostic:
//!
//! - [`CarouselConfig`]: a base [`SlideSetup`] plus width-keyed
//!   [`SlideOverride`]s, resolved per viewport width — the largest breakpoint
//!   at or below the width wins and merges over the base.
//! - [`BreakpointGate`]: some carousels exist only under a media condition
//!   (e.g. narrow viewports); the gate turns match-state changes into
//!   one-shot [`MountAction`]s.
//! - [`Autoplay`]: a caller-timestamp advance scheduler with pause-on-hover
//!   and a configurable interaction policy.
//! - [`max_extent`]: the equal-card-heights computation (largest measured
//!   extent wins).
//!
//! ```rust
//! use scrollwork_carousel::{CarouselConfig, SlideOverride, SlideSetup};
//!
//! let config = CarouselConfig::new(SlideSetup {
//!     slides_per_view: 4.0,
//!     space_between: 40.0,
//!     ..SlideSetup::default()
//! })
//! .with_breakpoint(
//!     320,
//!     SlideOverride {
//!         slides_per_view: Some(1.23),
//!         offset_before: Some(16.0),
//!         offset_after: Some(16.0),
//!         space_between: Some(16.0),
//!     },
//! )
//! .with_breakpoint(
//!     768,
//!     SlideOverride {
//!         slides_per_view: Some(3.0),
//!         ..SlideOverride::default()
//!     },
//! );
//!
//! // A 500px viewport falls under the 320 breakpoint.
//! let setup = config.resolve(500);
//! assert_eq!(setup.slides_per_view, 1.23);
//! assert_eq!(setup.space_between, 16.0);
//!
//! // At 900px the 768 override applies; unset fields keep the base.
//! let setup = config.resolve(900);
//! assert_eq!(setup.slides_per_view, 3.0);
//! assert_eq!(setup.space_between, 40.0);
//! ```
//!
//! This crate is `no_std`; only the breakpoint map allocates.

#![no_std]

mod autoplay;
mod config;
mod gate;

pub use autoplay::Autoplay;
pub use config::{CarouselConfig, SlideOverride, SlideSetup, max_extent};
pub use gate::{BreakpointGate, MountAction};
