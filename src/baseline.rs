use std::collections::HashSet;
use std::convert::TryFrom;
use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::FixtureError;
use crate::input::{AttendanceInput, RawIntervals};
use crate::interval::{Interval, Timestamp};

/// Reference computation that expands every interval into its individual
/// seconds `[start, end)` and counts the seconds present in all three
/// series. Memory grows with the covered duration, so it only suits small
/// inputs and cross-checking.
#[derive(Default)]
pub struct BaselineEngine;

#[derive(Clone, Debug, Deserialize)]
pub struct FixtureCase {
    pub data: RawIntervals,
    pub answer: u64,
}

/// A decoded fixture case.
#[derive(Clone, Debug)]
pub struct Fixture {
    pub input: AttendanceInput,
    pub answer: u64,
}

pub fn load_fixture_file<P>(path: P) -> Result<Vec<Fixture>, FixtureError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let cases: Vec<FixtureCase> =
        serde_json::from_str(&text).map_err(|source| FixtureError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    cases
        .into_iter()
        .enumerate()
        .map(|(case, raw)| {
            let input = AttendanceInput::try_from(&raw.data)
                .map_err(|source| FixtureError::Input { case, source })?;
            Ok(Fixture {
                input,
                answer: raw.answer,
            })
        })
        .collect()
}

/// Seconds of `intervals` that fall inside `lesson`, as `[start, end)`.
fn seconds<'a, I>(lesson: Interval, intervals: I) -> HashSet<Timestamp>
where
    I: IntoIterator<Item = &'a Interval>,
{
    intervals
        .into_iter()
        .filter_map(|interval| lesson.intersection(*interval))
        .flat_map(|clipped| clipped.start..clipped.end)
        .collect()
}

impl BaselineEngine {
    pub fn new() -> Self {
        BaselineEngine
    }

    pub fn compute(&self, input: &AttendanceInput) -> u64 {
        let lesson = match input.lesson {
            Some(lesson) => lesson,
            None => return 0,
        };

        let pupil = seconds(lesson, &input.pupil);
        let tutor = seconds(lesson, &input.tutor);

        (lesson.start..lesson.end)
            .filter(|t| pupil.contains(t) && tutor.contains(t))
            .count() as u64
    }
}
