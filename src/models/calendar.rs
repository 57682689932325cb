//! Day, time-of-day and interval models.
//!
//! # Time Model
//! Times are minutes since midnight. An interval that starts late in the
//! day may extend past 24:00; it is kept as a plain minute offset on the
//! same day and never wrapped to the next one.
//!
//! # Intervals
//! [`TimeWindow`] is half-open `[start, end)`: two windows that merely
//! touch (one ends exactly when the other starts) do not overlap.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Longest duration a task may have (one week).
pub const MAX_DURATION_MIN: u32 = 7 * MINUTES_PER_DAY;

/// Day of the week a task or slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All days, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Full English name.
    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }

    /// Zero-based position, Monday = 0.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        Self::ALL[day.num_days_from_monday() as usize]
    }
}

impl From<DayOfWeek> for Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Monday => Weekday::Mon,
            DayOfWeek::Tuesday => Weekday::Tue,
            DayOfWeek::Wednesday => Weekday::Wed,
            DayOfWeek::Thursday => Weekday::Thu,
            DayOfWeek::Friday => Weekday::Fri,
            DayOfWeek::Saturday => Weekday::Sat,
            DayOfWeek::Sunday => Weekday::Sun,
        }
    }
}

impl FromStr for DayOfWeek {
    type Err = ValidationError;

    /// Accepts full or three-letter English names, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<Weekday>()
            .map(DayOfWeek::from)
            .map_err(|_| ValidationError::InvalidDay(s.to_string()))
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A wall-clock time within a day, minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    minute: u32,
}

impl TimeOfDay {
    /// Creates a time from hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self {
            minute: hour * 60 + minute,
        })
    }

    /// Parses `HH:MM` on a 24-hour clock.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|_| ValidationError::InvalidTime(s.to_string()))?;
        Ok(Self {
            minute: time.hour() * 60 + time.minute(),
        })
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minute_of_day(self) -> u32 {
        self.minute
    }

    pub fn hour(self) -> u32 {
        self.minute / 60
    }

    pub fn minute(self) -> u32 {
        self.minute % 60
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A time interval [start, end) in minutes since midnight.
///
/// Half-open interval: includes start, excludes end. `end_min` may exceed
/// [`MINUTES_PER_DAY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (minute, inclusive).
    pub start_min: u32,
    /// Interval end (minute, exclusive).
    pub end_min: u32,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start_min: u32, end_min: u32) -> Self {
        Self { start_min, end_min }
    }

    /// Window starting at `start` and lasting `duration_min` minutes.
    ///
    /// The end saturates at `u32::MAX`.
    pub fn starting_at(start: TimeOfDay, duration_min: u32) -> Self {
        let start_min = start.minute_of_day();
        Self::new(start_min, start_min.saturating_add(duration_min))
    }

    /// Whether two windows overlap.
    ///
    /// Non-overlapping iff one ends at or before the other begins.
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.end_min <= other.start_min || self.start_min >= other.end_min)
    }

    /// Whether the window runs past the end of its day.
    pub fn crosses_midnight(&self) -> bool {
        self.end_min > MINUTES_PER_DAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_parsing() {
        assert_eq!("Monday".parse::<DayOfWeek>(), Ok(DayOfWeek::Monday));
        assert_eq!("mon".parse::<DayOfWeek>(), Ok(DayOfWeek::Monday));
        assert_eq!(" SUNDAY ".parse::<DayOfWeek>(), Ok(DayOfWeek::Sunday));
        assert_eq!(
            "Funday".parse::<DayOfWeek>(),
            Err(ValidationError::InvalidDay("Funday".into()))
        );
        assert!("".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn test_day_order_and_chrono_roundtrip() {
        for (i, day) in DayOfWeek::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
            assert_eq!(DayOfWeek::from(Weekday::from(*day)), *day);
        }
        assert!(DayOfWeek::Monday < DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::Wednesday.to_string(), "Wednesday");
    }

    #[test]
    fn test_time_parsing() {
        let t = TimeOfDay::parse("09:30").unwrap();
        assert_eq!(t.minute_of_day(), 570);
        assert_eq!(t.to_string(), "09:30");

        assert_eq!(TimeOfDay::parse("00:00").unwrap().minute_of_day(), 0);
        assert_eq!(TimeOfDay::parse("23:59").unwrap().minute_of_day(), 1439);
    }

    #[test]
    fn test_time_rejects_malformed() {
        for bad in ["24:00", "12:60", "noon", "", "12", "12:00:00", "-1:00"] {
            assert_eq!(
                TimeOfDay::parse(bad),
                Err(ValidationError::InvalidTime(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_time_from_hm() {
        assert_eq!(TimeOfDay::from_hm(9, 0), TimeOfDay::parse("09:00").ok());
        assert!(TimeOfDay::from_hm(24, 0).is_none());
        assert!(TimeOfDay::from_hm(0, 60).is_none());
    }

    #[test]
    fn test_time_serde_as_string() {
        let t = TimeOfDay::from_hm(7, 5).unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"07:05\"");
        let back: TimeOfDay = serde_json::from_str("\"07:05\"").unwrap();
        assert_eq!(back, t);
        assert!(serde_json::from_str::<TimeOfDay>("\"25:00\"").is_err());
    }

    #[test]
    fn test_window_end_saturates() {
        let start = TimeOfDay::from_hm(9, 0).unwrap();
        let w = TimeWindow::starting_at(start, u32::MAX);
        assert_eq!(w.start_min, 540);
        assert_eq!(w.end_min, u32::MAX);
        assert!(w.crosses_midnight());

        // Still collides with everything after its start on the same day.
        let later = TimeWindow::starting_at(TimeOfDay::from_hm(23, 0).unwrap(), 30);
        assert!(w.overlaps(&later));
    }

    #[test]
    fn test_time_window_overlap() {
        let a = TimeWindow::new(0, 100);
        let b = TimeWindow::new(50, 150);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = TimeWindow::new(100, 200); // touching but not overlapping
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));

        let inner = TimeWindow::new(20, 30);
        assert!(a.overlaps(&inner));
        assert!(inner.overlaps(&a));
    }

    #[test]
    fn test_window_past_midnight() {
        let late = TimeWindow::starting_at(TimeOfDay::from_hm(23, 30).unwrap(), 60);
        assert_eq!(late.end_min, 1470);
        assert!(late.crosses_midnight());

        // Not wrapped: an early-morning window on the same day does not collide.
        let early = TimeWindow::starting_at(TimeOfDay::from_hm(0, 10).unwrap(), 20);
        assert!(!late.overlaps(&early));

        let exact = TimeWindow::starting_at(TimeOfDay::from_hm(23, 0).unwrap(), 60);
        assert!(!exact.crosses_midnight());
    }
}
