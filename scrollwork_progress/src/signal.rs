// Copyright 2025 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure signal helpers: progress, visibility, and scrub math on one axis.
//!
//! Offsets are measured from the viewport start (for vertical scrolling, a
//! `top` of zero means the element's leading edge sits at the viewport top;
//! `top == viewport_extent` means it sits at the viewport bottom).

/// Default fraction of the progress span ignored at each edge.
pub const DEFAULT_EDGE_MARGIN: f64 = 0.1;

/// Remaps raw progress away from its edges, clamped to `[0, 1]`.
///
/// `adjusted = (raw - margin) / (1 - 2·margin)`. Raw progress below the lower
/// margin maps to 0 and above the upper margin to 1, giving the first and
/// last states a dead band while an element enters and leaves the viewport.
///
/// `margin` must be in `[0, 0.5)`; debug builds assert. A finite negative
/// margin is treated as 0. Margins at or above 0.5 leave no usable span and
/// degrade to a step at the midpoint.
///
/// ```rust
/// use scrollwork_progress::edge_adjusted;
///
/// assert_eq!(edge_adjusted(0.5, 0.1), 0.5);
/// assert_eq!(edge_adjusted(0.05, 0.1), 0.0);
/// assert_eq!(edge_adjusted(0.95, 0.1), 1.0);
/// ```
#[must_use]
pub fn edge_adjusted(raw: f64, margin: f64) -> f64 {
    debug_assert!(
        (0.0..0.5).contains(&margin),
        "edge margin must be in [0, 0.5); got {margin:?}"
    );
    let margin = if margin.is_sign_negative() { 0.0 } else { margin };
    let span = 1.0 - 2.0 * margin;
    if span <= 0.0 {
        return if raw < 0.5 { 0.0 } else { 1.0 };
    }
    ((raw - margin) / span).clamp(0.0, 1.0)
}

/// How far an element has travelled through the viewport, in `[0, 1]`.
///
/// 0 while the element's leading edge is at or below the viewport end, 1 once
/// its trailing edge has passed the viewport start. The usual raw input for
/// [`crate::StepTrack::sample`] on gallery-style components.
#[must_use]
pub fn travel_progress(viewport_extent: f64, top: f64, extent: f64) -> f64 {
    debug_assert!(
        viewport_extent.is_finite() && top.is_finite() && extent.is_finite(),
        "travel inputs must be finite; got {viewport_extent:?}, {top:?}, {extent:?}"
    );
    let denom = viewport_extent + extent;
    if denom <= 0.0 {
        return 0.0;
    }
    ((viewport_extent - top) / denom).clamp(0.0, 1.0)
}

/// Fraction of an element's extent currently inside the viewport, in `[0, 1]`.
///
/// The polling-fallback companion of an intersection observer: hosts without
/// a visibility primitive poll element bounds and feed this ratio to the same
/// consumers.
///
/// ```rust
/// use scrollwork_progress::visibility_ratio;
///
/// // A 200px element with its top 700px down an 800px viewport: 100px shows.
/// assert_eq!(visibility_ratio(800.0, 700.0, 200.0), 0.5);
/// ```
#[must_use]
pub fn visibility_ratio(viewport_extent: f64, top: f64, extent: f64) -> f64 {
    debug_assert!(
        viewport_extent.is_finite() && top.is_finite() && extent.is_finite(),
        "visibility inputs must be finite; got {viewport_extent:?}, {top:?}, {extent:?}"
    );
    if extent <= 0.0 || viewport_extent <= 0.0 {
        return 0.0;
    }
    let visible = (top + extent).min(viewport_extent) - top.max(0.0);
    (visible / extent).clamp(0.0, 1.0)
}

/// Media position for a scrub-driven player: `clamp01(progress) × duration`.
///
/// Used by scroll-scrubbed video, where playback position tracks pinned
/// scroll progress instead of wall time. A non-positive `duration` yields 0.
#[must_use]
pub fn scrub_position(progress: f64, duration: f64) -> f64 {
    debug_assert!(
        duration.is_finite(),
        "scrub duration must be finite; got {duration:?}"
    );
    if duration <= 0.0 {
        return 0.0;
    }
    progress.clamp(0.0, 1.0) * duration
}

#[cfg(test)]
mod tests {
    use super::{edge_adjusted, scrub_position, travel_progress, visibility_ratio};

    #[test]
    fn edge_adjusted_midpoint_is_identity() {
        assert_eq!(edge_adjusted(0.5, 0.1), 0.5);
        assert_eq!(edge_adjusted(0.5, 0.0), 0.5);
    }

    #[test]
    fn edge_adjusted_clamps_outside_margins() {
        assert_eq!(edge_adjusted(0.1, 0.1), 0.0);
        assert_eq!(edge_adjusted(0.05, 0.1), 0.0);
        assert_eq!(edge_adjusted(-2.0, 0.1), 0.0);
        assert_eq!(edge_adjusted(0.9, 0.1), 1.0);
        assert_eq!(edge_adjusted(0.95, 0.1), 1.0);
        assert_eq!(edge_adjusted(3.0, 0.1), 1.0);
    }

    #[test]
    fn edge_adjusted_zero_margin_passes_through() {
        assert_eq!(edge_adjusted(0.25, 0.0), 0.25);
        assert_eq!(edge_adjusted(1.0, 0.0), 1.0);
    }

    #[test]
    fn travel_progress_tracks_entry_to_exit() {
        // Leading edge at the viewport bottom: no travel yet.
        assert_eq!(travel_progress(800.0, 800.0, 200.0), 0.0);
        // Trailing edge at the viewport top: fully travelled.
        assert_eq!(travel_progress(800.0, -200.0, 200.0), 1.0);
        // Halfway: top at (viewport - element) / 2 ... use the formula shape.
        assert_eq!(travel_progress(800.0, 300.0, 200.0), 0.5);
    }

    #[test]
    fn travel_progress_clamps_and_handles_degenerate_extents() {
        assert_eq!(travel_progress(800.0, 2000.0, 200.0), 0.0);
        assert_eq!(travel_progress(800.0, -2000.0, 200.0), 1.0);
        assert_eq!(travel_progress(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn visibility_ratio_partial_full_and_none() {
        // Fully inside.
        assert_eq!(visibility_ratio(800.0, 100.0, 200.0), 1.0);
        // Half hanging off the bottom.
        assert_eq!(visibility_ratio(800.0, 700.0, 200.0), 0.5);
        // Half hanging off the top.
        assert_eq!(visibility_ratio(800.0, -100.0, 200.0), 0.5);
        // Entirely below the viewport.
        assert_eq!(visibility_ratio(800.0, 900.0, 200.0), 0.0);
        // Entirely above the viewport.
        assert_eq!(visibility_ratio(800.0, -300.0, 200.0), 0.0);
    }

    #[test]
    fn visibility_ratio_empty_element_is_not_visible() {
        assert_eq!(visibility_ratio(800.0, 100.0, 0.0), 0.0);
        assert_eq!(visibility_ratio(0.0, 0.0, 200.0), 0.0);
    }

    #[test]
    fn visibility_ratio_taller_than_viewport_caps_at_one() {
        // A 1600px element filling an 800px viewport shows half its extent,
        // and never more than the full viewport's worth.
        assert_eq!(visibility_ratio(800.0, 0.0, 1600.0), 0.5);
        assert_eq!(visibility_ratio(800.0, -400.0, 1600.0), 0.5);
    }

    #[test]
    fn scrub_position_clamps_progress() {
        assert_eq!(scrub_position(0.5, 7000.0), 3500.0);
        assert_eq!(scrub_position(-0.2, 7000.0), 0.0);
        assert_eq!(scrub_position(1.8, 7000.0), 7000.0);
        assert_eq!(scrub_position(0.5, 0.0), 0.0);
    }
}
