// Copyright 2025 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide configuration and breakpoint resolution.

use hashbrown::HashMap;

/// Resolved slide layout parameters for one viewport width.
///
/// All lengths are logical pixels. Fractional `slides_per_view` values peek
/// the next slide (1.23 shows one slide plus a 23% sliver).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideSetup {
    /// Slides visible at once.
    pub slides_per_view: f64,
    /// Gap between adjacent slides.
    pub space_between: f64,
    /// Leading inset before the first slide.
    pub offset_before: f64,
    /// Trailing inset after the last slide.
    pub offset_after: f64,
}

impl Default for SlideSetup {
    fn default() -> Self {
        Self {
            slides_per_view: 1.0,
            space_between: 0.0,
            offset_before: 0.0,
            offset_after: 0.0,
        }
    }
}

/// A partial [`SlideSetup`]; unset fields inherit from the base.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlideOverride {
    /// Overrides [`SlideSetup::slides_per_view`].
    pub slides_per_view: Option<f64>,
    /// Overrides [`SlideSetup::space_between`].
    pub space_between: Option<f64>,
    /// Overrides [`SlideSetup::offset_before`].
    pub offset_before: Option<f64>,
    /// Overrides [`SlideSetup::offset_after`].
    pub offset_after: Option<f64>,
}

impl SlideOverride {
    /// Applies this override on top of `base`.
    #[must_use]
    pub fn apply_to(&self, base: SlideSetup) -> SlideSetup {
        SlideSetup {
            slides_per_view: self.slides_per_view.unwrap_or(base.slides_per_view),
            space_between: self.space_between.unwrap_or(base.space_between),
            offset_before: self.offset_before.unwrap_or(base.offset_before),
            offset_after: self.offset_after.unwrap_or(base.offset_after),
        }
    }
}

/// A base setup plus width-keyed overrides.
///
/// Resolution follows the carousel engine's breakpoint rule: the largest
/// key at or below the viewport width applies, alone, over the base. Smaller
/// keys never cascade.
#[derive(Clone, Debug, Default)]
pub struct CarouselConfig {
    base: SlideSetup,
    breakpoints: HashMap<u32, SlideOverride>,
}

impl CarouselConfig {
    /// Creates a config with no breakpoints.
    #[must_use]
    pub fn new(base: SlideSetup) -> Self {
        Self {
            base,
            breakpoints: HashMap::new(),
        }
    }

    /// Adds or replaces the override applying from `min_width` upward.
    #[must_use]
    pub fn with_breakpoint(mut self, min_width: u32, patch: SlideOverride) -> Self {
        self.breakpoints.insert(min_width, patch);
        self
    }

    /// The setup for a viewport of `width` logical pixels.
    #[must_use]
    pub fn resolve(&self, width: u32) -> SlideSetup {
        let applicable = self
            .breakpoints
            .iter()
            .filter(|(min_width, _)| **min_width <= width)
            .max_by_key(|(min_width, _)| **min_width);
        match applicable {
            Some((_, patch)) => patch.apply_to(self.base),
            None => self.base,
        }
    }

    /// The base setup, before any breakpoint applies.
    #[must_use]
    pub const fn base(&self) -> SlideSetup {
        self.base
    }

    /// Number of configured breakpoints.
    #[must_use]
    pub fn breakpoint_count(&self) -> usize {
        self.breakpoints.len()
    }
}

/// Largest finite extent in `extents`, for equalizing card heights.
///
/// Cards in a looping carousel are sized to the tallest card's natural
/// height. Returns `None` when nothing measurable is present; non-finite
/// entries are skipped.
#[must_use]
pub fn max_extent(extents: &[f64]) -> Option<f64> {
    let mut best: Option<f64> = None;
    for &extent in extents {
        if !extent.is_finite() {
            continue;
        }
        best = Some(match best {
            Some(current) if current >= extent => current,
            _ => extent,
        });
    }
    best
}

#[cfg(test)]
mod tests {
    use super::{CarouselConfig, SlideOverride, SlideSetup, max_extent};

    fn config() -> CarouselConfig {
        CarouselConfig::new(SlideSetup {
            slides_per_view: 4.0,
            space_between: 40.0,
            ..SlideSetup::default()
        })
        .with_breakpoint(
            1,
            SlideOverride {
                slides_per_view: Some(1.0),
                offset_before: Some(16.0),
                offset_after: Some(16.0),
                space_between: Some(16.0),
            },
        )
        .with_breakpoint(
            320,
            SlideOverride {
                slides_per_view: Some(1.23),
                offset_before: Some(16.0),
                offset_after: Some(16.0),
                space_between: Some(16.0),
            },
        )
        .with_breakpoint(
            768,
            SlideOverride {
                slides_per_view: Some(3.0),
                ..SlideOverride::default()
            },
        )
    }

    #[test]
    fn largest_breakpoint_at_or_below_width_wins() {
        let config = config();
        assert_eq!(config.resolve(200).slides_per_view, 1.0);
        assert_eq!(config.resolve(320).slides_per_view, 1.23);
        assert_eq!(config.resolve(500).slides_per_view, 1.23);
        assert_eq!(config.resolve(768).slides_per_view, 3.0);
        assert_eq!(config.resolve(2000).slides_per_view, 3.0);
    }

    #[test]
    fn unset_override_fields_keep_the_base() {
        let setup = config().resolve(900);
        assert_eq!(setup.slides_per_view, 3.0);
        assert_eq!(setup.space_between, 40.0);
        assert_eq!(setup.offset_before, 0.0);
    }

    #[test]
    fn smaller_breakpoints_do_not_cascade() {
        // 768 sets only slides_per_view; the 320 offsets must not leak in.
        let setup = config().resolve(900);
        assert_eq!(setup.offset_before, 0.0);
        assert_eq!(setup.offset_after, 0.0);
    }

    #[test]
    fn below_every_breakpoint_resolves_the_base() {
        let config = CarouselConfig::new(SlideSetup::default()).with_breakpoint(
            320,
            SlideOverride {
                slides_per_view: Some(2.0),
                ..SlideOverride::default()
            },
        );
        assert_eq!(config.resolve(100), SlideSetup::default());
    }

    #[test]
    fn replacing_a_breakpoint_keeps_one_entry() {
        let config = CarouselConfig::new(SlideSetup::default())
            .with_breakpoint(
                320,
                SlideOverride {
                    slides_per_view: Some(2.0),
                    ..SlideOverride::default()
                },
            )
            .with_breakpoint(
                320,
                SlideOverride {
                    slides_per_view: Some(5.0),
                    ..SlideOverride::default()
                },
            );
        assert_eq!(config.breakpoint_count(), 1);
        assert_eq!(config.resolve(400).slides_per_view, 5.0);
    }

    #[test]
    fn max_extent_picks_the_tallest_card() {
        assert_eq!(max_extent(&[120.0, 240.5, 180.0]), Some(240.5));
        assert_eq!(max_extent(&[120.0]), Some(120.0));
    }

    #[test]
    fn max_extent_handles_empty_and_unmeasurable_input() {
        assert_eq!(max_extent(&[]), None);
        assert_eq!(max_extent(&[f64::NAN, f64::INFINITY]), None);
        assert_eq!(max_extent(&[f64::NAN, 80.0]), Some(80.0));
    }
}
