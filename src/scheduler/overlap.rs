//! Same-day overlap detection.
//!
//! Holds the intervals accepted so far during one generation run, one
//! list per day, and answers whether a candidate start collides with any
//! of them. Intervals on different days never conflict.

use crate::models::{DayOfWeek, TimeOfDay, TimeWindow};

/// Whether `[start, start + duration)` overlaps any of `accepted`.
pub fn conflicts_with(start: TimeOfDay, duration_min: u32, accepted: &[TimeWindow]) -> bool {
    let candidate = TimeWindow::starting_at(start, duration_min);
    accepted.iter().any(|w| candidate.overlaps(w))
}

/// Accepted intervals per day for a single generation run.
#[derive(Debug, Clone, Default)]
pub struct OverlapChecker {
    accepted: [Vec<TimeWindow>; 7],
}

impl OverlapChecker {
    /// Creates a checker with an empty list for every day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a candidate on `day` collides with an accepted interval.
    pub fn conflicts(&self, day: DayOfWeek, start: TimeOfDay, duration_min: u32) -> bool {
        conflicts_with(start, duration_min, self.accepted(day))
    }

    /// Records an accepted interval on `day`.
    pub fn accept(&mut self, day: DayOfWeek, start: TimeOfDay, duration_min: u32) {
        self.accepted[day.index()].push(TimeWindow::starting_at(start, duration_min));
    }

    /// Intervals accepted on `day`, in acceptance order.
    pub fn accepted(&self, day: DayOfWeek) -> &[TimeWindow] {
        &self.accepted[day.index()]
    }

    /// Total accepted intervals across the week.
    pub fn len(&self) -> usize {
        self.accepted.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
