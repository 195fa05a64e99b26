pub type Timestamp = i64;

#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub struct Interval {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl From<(Timestamp, Timestamp)> for Interval {
    fn from(i: (Timestamp, Timestamp)) -> Interval {
        Interval {
            start: i.0,
            end: i.1,
        }
    }
}

impl Interval {
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Interval { start, end }
    }

    /// Seconds covered, measured as `end - start`.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.end.abs_diff(self.start)
    }

    /// True when either endpoint of one interval lies within the other.
    /// Both bounds are closed, so intervals sharing a single endpoint touch.
    #[inline]
    pub fn touches(&self, other: Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Interval> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start <= end {
            Some(Interval { start, end })
        } else {
            None
        }
    }

    /// Smallest interval covering both. Only meaningful when they touch.
    #[inline]
    pub fn union(&self, other: Self) -> Interval {
        Interval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}
