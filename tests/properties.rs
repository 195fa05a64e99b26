use attendance_overlap::{
    AttendanceInput, BaselineEngine, FixedPointMerge, Interval, Merge,
    OverlapEngine, SweepMerge,
};
use proptest::collection::vec;
use proptest::prelude::*;

fn interval() -> impl Strategy<Value = Interval> {
    (0i64..200, 0i64..60)
        .prop_map(|(start, len)| Interval::new(start, start + len))
}

fn attendance() -> impl Strategy<Value = AttendanceInput> {
    (interval(), vec(interval(), 0..8), vec(interval(), 0..8)).prop_map(
        |(lesson, pupil, tutor)| AttendanceInput::new(lesson, pupil, tutor),
    )
}

fn compute(input: &AttendanceInput) -> u64 {
    OverlapEngine::<FixedPointMerge>::new().compute(input)
}

fn rotated(intervals: &[Interval], by: usize) -> Vec<Interval> {
    let mut out = intervals.to_vec();
    if !out.is_empty() {
        let by = by % out.len();
        out.rotate_left(by);
    }
    out
}

proptest! {
    #[test]
    fn strategies_agree_with_baseline(input in attendance()) {
        let expected = BaselineEngine::new().compute(&input);
        prop_assert_eq!(compute(&input), expected);
        prop_assert_eq!(
            OverlapEngine::<SweepMerge>::new().compute(&input),
            expected
        );
    }

    #[test]
    fn merge_is_idempotent(candidates in vec(interval(), 0..16)) {
        let once = FixedPointMerge::merge(candidates.clone());
        prop_assert_eq!(FixedPointMerge::merge(once.clone()), once.clone());
        prop_assert_eq!(SweepMerge::merge(once.clone()), once.clone());
        prop_assert_eq!(SweepMerge::merge(candidates), once);
    }

    #[test]
    fn merged_intervals_never_touch(candidates in vec(interval(), 0..16)) {
        let merged = FixedPointMerge::merge(candidates);
        for (i, a) in merged.iter().enumerate() {
            for b in &merged[i + 1..] {
                prop_assert!(!a.touches(*b), "{:?} touches {:?}", a, b);
            }
        }
    }

    #[test]
    fn order_of_pupil_and_tutor_is_irrelevant(
        input in attendance(),
        by in 0usize..8,
    ) {
        let expected = compute(&input);

        let mut pupil = input.clone();
        pupil.pupil.reverse();
        prop_assert_eq!(compute(&pupil), expected);
        pupil.pupil = rotated(&input.pupil, by);
        prop_assert_eq!(compute(&pupil), expected);

        let mut tutor = input.clone();
        tutor.tutor.reverse();
        prop_assert_eq!(compute(&tutor), expected);
        tutor.tutor = rotated(&input.tutor, by);
        prop_assert_eq!(compute(&tutor), expected);
    }

    #[test]
    fn shrinking_lesson_never_increases(
        input in attendance(),
        later in 0i64..40,
        earlier in 0i64..40,
    ) {
        let lesson = input.lesson.unwrap();
        let start = (lesson.start + later).min(lesson.end);
        let end = (lesson.end - earlier).max(start);

        let mut shrunk = input.clone();
        shrunk.lesson = Some(Interval::new(start, end));
        prop_assert!(compute(&shrunk) <= compute(&input));
    }

    #[test]
    fn missing_presence_yields_zero(input in attendance()) {
        let mut no_pupil = input.clone();
        no_pupil.pupil.clear();
        prop_assert_eq!(compute(&no_pupil), 0);

        let mut no_tutor = input;
        no_tutor.tutor.clear();
        prop_assert_eq!(compute(&no_tutor), 0);
    }

    #[test]
    fn result_bounded_by_lesson(input in attendance()) {
        let lesson = input.lesson.unwrap();
        prop_assert!(compute(&input) <= lesson.duration());
    }
}
