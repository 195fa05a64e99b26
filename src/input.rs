use std::convert::TryFrom;

use serde::Deserialize;

use crate::error::{InputError, Series};
use crate::interval::{Interval, Timestamp};

/// The boundary format: three flat sequences of the form
/// `[s1, e1, s2, e2, ...]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RawIntervals {
    #[serde(default)]
    pub lesson: Vec<Timestamp>,
    #[serde(default)]
    pub pupil: Vec<Timestamp>,
    #[serde(default)]
    pub tutor: Vec<Timestamp>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttendanceInput {
    pub lesson: Option<Interval>,
    pub pupil: Vec<Interval>,
    pub tutor: Vec<Interval>,
}

impl AttendanceInput {
    pub fn new<I>(lesson: I, pupil: Vec<Interval>, tutor: Vec<Interval>) -> Self
    where
        I: Into<Interval>,
    {
        Self {
            lesson: Some(lesson.into()),
            pupil,
            tutor,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lesson.is_none() && self.pupil.is_empty() && self.tutor.is_empty()
    }
}

/// Decodes consecutive pairs of `flat` into intervals.
pub fn decode_pairs(
    series: Series,
    flat: &[Timestamp],
) -> Result<Vec<Interval>, InputError> {
    if flat.len() % 2 != 0 {
        return Err(InputError::OddLength {
            series,
            len: flat.len(),
        });
    }

    flat.chunks_exact(2)
        .enumerate()
        .map(|(index, pair)| {
            let (start, end) = (pair[0], pair[1]);
            if start > end {
                Err(InputError::InvertedInterval {
                    series,
                    index,
                    start,
                    end,
                })
            } else {
                Ok(Interval::new(start, end))
            }
        })
        .collect()
}

impl TryFrom<&RawIntervals> for AttendanceInput {
    type Error = InputError;

    fn try_from(raw: &RawIntervals) -> Result<Self, Self::Error> {
        let lesson = match raw.lesson.len() {
            0 => None,
            2 => decode_pairs(Series::Lesson, &raw.lesson)?.pop(),
            len => return Err(InputError::LessonArity { len }),
        };

        Ok(Self {
            lesson,
            pupil: decode_pairs(Series::Pupil, &raw.pupil)?,
            tutor: decode_pairs(Series::Tutor, &raw.tutor)?,
        })
    }
}

impl TryFrom<RawIntervals> for AttendanceInput {
    type Error = InputError;

    fn try_from(raw: RawIntervals) -> Result<Self, Self::Error> {
        AttendanceInput::try_from(&raw)
    }
}
