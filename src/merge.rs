use tracing::trace;

use crate::interval::Interval;

/// Collapses candidate intervals until no two of them touch. Implementations
/// return the merged intervals sorted by start.
pub trait Merge {
    fn merge(candidates: Vec<Interval>) -> Vec<Interval>;
}

/// Repeatedly unions the first touching pair found and rescans from scratch.
/// O(k³) in the worst case.
pub struct FixedPointMerge;

/// Sort by start, then extend the last merged interval while the next one
/// starts inside it. O(k log k).
pub struct SweepMerge;

impl Merge for FixedPointMerge {
    fn merge(candidates: Vec<Interval>) -> Vec<Interval> {
        let mut current = candidates;
        let mut passes = 0usize;

        while let Some(next) = merge_pass(&current) {
            current = next;
            passes += 1;
        }

        trace!(passes, remaining = current.len(), "fixed point reached");
        current.sort_unstable();
        current
    }
}

impl Merge for SweepMerge {
    fn merge(candidates: Vec<Interval>) -> Vec<Interval> {
        let mut sorted = candidates;
        sorted.sort_unstable();

        let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
        for interval in sorted {
            match merged.last_mut() {
                Some(last) if interval.start <= last.end => {
                    last.end = last.end.max(interval.end);
                }
                _ => merged.push(interval),
            }
        }
        merged
    }
}

fn find_touching_pair(intervals: &[Interval]) -> Option<(usize, usize)> {
    for (i, a) in intervals.iter().enumerate() {
        for (j, b) in intervals.iter().enumerate().skip(i + 1) {
            if a.touches(*b) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Builds the next collection with one touching pair replaced by its union,
/// or `None` once nothing is left to merge.
fn merge_pass(intervals: &[Interval]) -> Option<Vec<Interval>> {
    let (i, j) = find_touching_pair(intervals)?;
    let union = intervals[i].union(intervals[j]);
    trace!(a = ?intervals[i], b = ?intervals[j], ?union, "merging");

    let mut next: Vec<Interval> = intervals
        .iter()
        .enumerate()
        .filter(|(k, _)| *k != i && *k != j)
        .map(|(_, interval)| *interval)
        .collect();
    next.push(union);
    Some(next)
}
