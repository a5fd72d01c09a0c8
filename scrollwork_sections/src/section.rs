// Copyright 2025 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stepped-section coordinator.

use alloc::vec::Vec;
use smallvec::SmallVec;

use scrollwork_progress::{StepTrack, StepTransition};

bitflags::bitflags! {
    /// Per-step state flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct StepFlags: u8 {
        /// The step is the currently active one.
        const ACTIVE = 0b0000_0001;
        /// The step's media has been started at least once.
        const MEDIA_STARTED = 0b0000_0010;
    }
}

/// One step of a section: its key and an optional co-indexed media key.
///
/// Keys identify host-side elements (a class-toggle target, a video). A step
/// without a media key simply never emits [`SectionEffect::StartMedia`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepItem<K> {
    /// Key of the element toggled active/inactive for this step.
    pub key: K,
    /// Key of the media element started the first time this step activates.
    pub media: Option<K>,
}

impl<K> StepItem<K> {
    /// A step with no media.
    pub const fn new(key: K) -> Self {
        Self { key, media: None }
    }

    /// A step with a co-indexed media element.
    pub const fn with_media(key: K, media: K) -> Self {
        Self {
            key,
            media: Some(media),
        }
    }
}

/// A host-side effect emitted by [`StepSection::advance`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionEffect<K> {
    /// Remove the active marker from this step's element.
    Deactivate(K),
    /// Put the active marker on this step's element.
    Activate(K),
    /// Start this media element. Emitted at most once per step.
    StartMedia(K),
}

/// Effects of one [`StepSection::advance`] call, in execution order.
pub type SectionEffects<K> = SmallVec<[SectionEffect<K>; 3]>;

struct StepEntry<K> {
    item: StepItem<K>,
    flags: StepFlags,
}

/// Drives a pinned, stepped section from a scroll-progress signal.
///
/// Owns one [`StepTrack`] whose length equals the number of steps. Each
/// [`advance`](Self::advance) feeds the track; on an index transition it emits
/// the effects the host must apply, in order: deactivate the old step (when
/// there was one), activate the new step, and start the new step's media the
/// first time that step becomes active. Exactly one step carries
/// [`StepFlags::ACTIVE`] after any transition.
///
/// The media start is a one-shot latch ([`StepFlags::MEDIA_STARTED`]), not a
/// full playback gate: revisiting a step never restarts its media. Hosts that
/// want visibility-gated playback per media element layer a gate on top.
pub struct StepSection<K> {
    steps: Vec<StepEntry<K>>,
    track: StepTrack,
}

impl<K> StepSection<K> {
    /// Creates a section with the default edged track over the given steps.
    #[must_use]
    pub fn new(steps: impl IntoIterator<Item = StepItem<K>>) -> Self {
        let steps: Vec<_> = steps
            .into_iter()
            .map(|item| StepEntry {
                item,
                flags: StepFlags::empty(),
            })
            .collect();
        let track = StepTrack::new(steps.len());
        Self { steps, track }
    }

    /// Creates a section driven by a caller-built track.
    ///
    /// Use this to select a different mapping, e.g. [`StepTrack::rounded`] for
    /// snap-per-step pinned regions. The track's length must equal the step
    /// count; debug builds assert, release builds resize the track to match.
    #[must_use]
    pub fn with_track(steps: impl IntoIterator<Item = StepItem<K>>, mut track: StepTrack) -> Self {
        let steps: Vec<_> = steps
            .into_iter()
            .map(|item| StepEntry {
                item,
                flags: StepFlags::empty(),
            })
            .collect();
        debug_assert!(
            track.len() == steps.len(),
            "track length must equal the step count"
        );
        if track.len() != steps.len() {
            track.set_len(steps.len());
        }
        Self { steps, track }
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the section has no steps. An empty section never emits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the currently active step, `None` before the first transition.
    #[must_use]
    pub const fn active_index(&self) -> Option<usize> {
        self.track.current()
    }

    /// The flags of the step at `index`.
    #[must_use]
    pub fn flags(&self, index: usize) -> Option<StepFlags> {
        self.steps.get(index).map(|entry| entry.flags)
    }

    /// The driving track.
    #[must_use]
    pub const fn track(&self) -> &StepTrack {
        &self.track
    }

    /// Clears all step flags and the track, as if never advanced.
    ///
    /// Media one-shots re-arm: after a reset, each step's media starts again
    /// the first time that step activates.
    pub fn reset(&mut self) {
        for entry in &mut self.steps {
            entry.flags = StepFlags::empty();
        }
        self.track.reset();
    }
}

impl<K: Clone> StepSection<K> {
    /// Feeds one raw progress sample and returns the effects to apply.
    ///
    /// Empty when the mapped index did not change. On a transition the buffer
    /// holds, in order: [`SectionEffect::Deactivate`] for the previous step
    /// (when there was one), [`SectionEffect::Activate`] for the new step, and
    /// [`SectionEffect::StartMedia`] when the new step has a media key that
    /// has not started yet.
    #[must_use]
    pub fn advance(&mut self, raw: f64) -> SectionEffects<K> {
        let mut effects = SectionEffects::new();
        let Some(StepTransition { from, to }) = self.track.sample(raw) else {
            return effects;
        };

        if let Some(old) = from {
            let entry = &mut self.steps[old];
            entry.flags.remove(StepFlags::ACTIVE);
            effects.push(SectionEffect::Deactivate(entry.item.key.clone()));
        }

        let entry = &mut self.steps[to];
        entry.flags.insert(StepFlags::ACTIVE);
        effects.push(SectionEffect::Activate(entry.item.key.clone()));

        if let Some(media) = &entry.item.media
            && !entry.flags.contains(StepFlags::MEDIA_STARTED)
        {
            entry.flags.insert(StepFlags::MEDIA_STARTED);
            effects.push(SectionEffect::StartMedia(media.clone()));
        }
        effects
    }
}

impl<K: core::fmt::Debug> core::fmt::Debug for StepSection<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StepSection")
            .field("len", &self.steps.len())
            .field("track", &self.track)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{SectionEffect, StepFlags, StepItem, StepSection};
    use scrollwork_progress::StepTrack;

    fn three_steps() -> StepSection<&'static str> {
        StepSection::new([
            StepItem::with_media("step-0", "video-0"),
            StepItem::new("step-1"),
            StepItem::with_media("step-2", "video-2"),
        ])
    }

    #[test]
    fn first_transition_activates_and_starts_media() {
        let mut section = three_steps();
        let effects = section.advance(0.0);
        assert_eq!(
            effects.as_slice(),
            [
                SectionEffect::Activate("step-0"),
                SectionEffect::StartMedia("video-0"),
            ]
        );
        assert_eq!(section.active_index(), Some(0));
        assert_eq!(
            section.flags(0),
            Some(StepFlags::ACTIVE | StepFlags::MEDIA_STARTED)
        );
    }

    #[test]
    fn transition_deactivates_previous_step() {
        let mut section = three_steps();
        let _ = section.advance(0.0);
        let effects = section.advance(0.5);
        assert_eq!(
            effects.as_slice(),
            [
                SectionEffect::Deactivate("step-0"),
                SectionEffect::Activate("step-1"),
            ]
        );
        assert_eq!(section.flags(0), Some(StepFlags::MEDIA_STARTED));
        assert_eq!(section.flags(1), Some(StepFlags::ACTIVE));
    }

    #[test]
    fn exactly_one_step_is_active_after_any_advance() {
        let mut section = three_steps();
        for raw in [0.0, 0.5, 0.9, 0.2, 0.0] {
            let _ = section.advance(raw);
            let active = (0..section.len())
                .filter(|&i| section.flags(i).is_some_and(|f| f.contains(StepFlags::ACTIVE)))
                .count();
            assert_eq!(active, 1, "after raw {raw}");
        }
    }

    #[test]
    fn media_starts_only_once_per_step() {
        let mut section = three_steps();
        let _ = section.advance(0.0);
        let _ = section.advance(0.9);
        // Back to step 0: its media already started.
        let effects = section.advance(0.0);
        assert_eq!(
            effects.as_slice(),
            [
                SectionEffect::Deactivate("step-2"),
                SectionEffect::Activate("step-0"),
            ]
        );
    }

    #[test]
    fn step_without_media_emits_no_start() {
        let mut section = three_steps();
        let _ = section.advance(0.0);
        let effects = section.advance(0.5);
        assert!(
            !effects
                .iter()
                .any(|e| matches!(e, SectionEffect::StartMedia(_))),
            "step 1 has no media"
        );
    }

    #[test]
    fn redundant_samples_emit_nothing() {
        let mut section = three_steps();
        let _ = section.advance(0.5);
        assert!(section.advance(0.5).is_empty());
        assert!(section.advance(0.51).is_empty());
    }

    #[test]
    fn empty_section_never_emits() {
        let mut section: StepSection<u32> = StepSection::new([]);
        assert!(section.is_empty());
        assert!(section.advance(0.5).is_empty());
        assert_eq!(section.active_index(), None);
    }

    #[test]
    fn rounded_track_drives_the_section() {
        let mut section = StepSection::with_track(
            [
                StepItem::new("a"),
                StepItem::new("b"),
                StepItem::new("c"),
            ],
            StepTrack::rounded(3),
        );
        let _ = section.advance(0.0);
        assert_eq!(section.active_index(), Some(0));
        // 0.4 × 2 = 0.8 rounds to index 1.
        let effects = section.advance(0.4);
        assert_eq!(
            effects.as_slice(),
            [SectionEffect::Deactivate("a"), SectionEffect::Activate("b")]
        );
    }

    #[test]
    fn reset_rearms_media_one_shots() {
        let mut section = three_steps();
        let _ = section.advance(0.0);
        section.reset();
        assert_eq!(section.active_index(), None);
        assert_eq!(section.flags(0), Some(StepFlags::empty()));

        let effects = section.advance(0.0);
        assert!(
            effects.contains(&SectionEffect::StartMedia("video-0")),
            "media restarts after reset"
        );
    }
}
