use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::interval::Timestamp;

/// Which of the three flat sequences an input error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Series {
    Lesson,
    Pupil,
    Tutor,
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Series::Lesson => "lesson",
            Series::Pupil => "pupil",
            Series::Tutor => "tutor",
        };
        f.write_str(name)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidInputKind {
    LessonArity,
    OddLength,
    InvertedInterval,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("lesson must hold 0 or 2 timestamps, got {len}")]
    LessonArity { len: usize },

    #[error("{series} holds an odd number of timestamps ({len})")]
    OddLength { series: Series, len: usize },

    #[error("{series} interval {index} is inverted: start {start} > end {end}")]
    InvertedInterval {
        series: Series,
        index: usize,
        start: Timestamp,
        end: Timestamp,
    },
}

impl InputError {
    pub fn kind(&self) -> InvalidInputKind {
        match self {
            InputError::LessonArity { .. } => InvalidInputKind::LessonArity,
            InputError::OddLength { .. } => InvalidInputKind::OddLength,
            InputError::InvertedInterval { .. } => {
                InvalidInputKind::InvertedInterval
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse fixture {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("fixture case {case} is invalid: {source}")]
    Input {
        case: usize,
        #[source]
        source: InputError,
    },
}
