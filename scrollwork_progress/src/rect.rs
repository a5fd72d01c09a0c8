// Copyright 2025 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport/bounds conversions over kurbo rects.
//!
//! Thin adapters for hosts that carry 2D geometry: both rects live in the
//! same coordinate space (typically the page), and the vertical axis is the
//! scroll axis. For horizontal scrollers, swap axes before calling or use the
//! 1D helpers directly.

use kurbo::Rect;

use crate::signal::{travel_progress, visibility_ratio};

/// Fraction of `bounds`' height currently inside `viewport`, in `[0, 1]`.
///
/// The polled replacement for an intersection observer's ratio.
#[must_use]
pub fn visible_fraction(viewport: Rect, bounds: Rect) -> f64 {
    visibility_ratio(viewport.height(), bounds.y0 - viewport.y0, bounds.height())
}

/// How far `bounds` has travelled up through `viewport`, in `[0, 1]`.
///
/// 0 while the top edge sits at or below the viewport bottom, 1 once the
/// bottom edge passes the viewport top.
#[must_use]
pub fn travel_fraction(viewport: Rect, bounds: Rect) -> f64 {
    travel_progress(viewport.height(), bounds.y0 - viewport.y0, bounds.height())
}
