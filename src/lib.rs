mod baseline;
mod engine;
mod error;
mod input;
mod interval;
mod merge;

pub use baseline::{load_fixture_file, BaselineEngine, Fixture, FixtureCase};
pub use engine::OverlapEngine;
pub use error::{FixtureError, InputError, InvalidInputKind, Series};
pub use input::{decode_pairs, AttendanceInput, RawIntervals};
pub use interval::{Interval, Timestamp};
pub use merge::{FixedPointMerge, Merge, SweepMerge};
