use std::marker::PhantomData;

use tracing::debug;

use crate::input::AttendanceInput;
use crate::interval::Interval;
use crate::merge::{FixedPointMerge, Merge};

/// Computes how long lesson, pupil and tutor presence all overlap.
///
/// Intersections compare with closed bounds on both ends, while durations
/// are summed as `end - start`. Two candidates sharing a single endpoint
/// therefore merge, and a single-point overlap contributes nothing.
pub struct OverlapEngine<M = FixedPointMerge> {
    phantom: PhantomData<M>,
}

impl<M> Default for OverlapEngine<M>
where
    M: Merge,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<M> OverlapEngine<M>
where
    M: Merge,
{
    pub fn new() -> Self {
        Self {
            phantom: PhantomData,
        }
    }

    /// Total seconds of triple overlap.
    pub fn compute(&self, input: &AttendanceInput) -> u64 {
        self.overlaps(input).iter().map(Interval::duration).sum()
    }

    /// The merged triple overlap intervals, sorted by start.
    pub fn overlaps(&self, input: &AttendanceInput) -> Vec<Interval> {
        // all three series empty
        if input.is_empty() {
            return vec![];
        }

        let lesson = match input.lesson {
            Some(lesson) => lesson,
            None => return vec![],
        };

        let lesson_pupil: Vec<Interval> = input
            .pupil
            .iter()
            .filter_map(|pupil| lesson.intersection(*pupil))
            .collect();

        debug!(
            pupil = input.pupil.len(),
            in_lesson = lesson_pupil.len(),
            "intersected pupil with lesson"
        );

        if lesson_pupil.is_empty() {
            return vec![];
        }

        let candidates: Vec<Interval> = lesson_pupil
            .iter()
            .flat_map(|present| {
                input
                    .tutor
                    .iter()
                    .filter_map(move |tutor| present.intersection(*tutor))
            })
            .collect();

        debug!(
            tutor = input.tutor.len(),
            candidates = candidates.len(),
            "intersected tutor with pupil in lesson"
        );

        let merged = M::merge(candidates);
        debug!(merged = merged.len(), "merged candidates");
        merged
    }
}
