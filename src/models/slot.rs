//! Time slots tasks can be placed into.
//!
//! Slots are candidate start times, not reservations: generating a
//! schedule never consumes them, and every generation sees the same set.
//! Duplicates are kept; each copy is a distinct candidate.

use serde::{Deserialize, Serialize};

use super::{DayOfWeek, TimeOfDay};
use crate::error::{NotFound, SlotRemovalError, ValidationError};

/// A candidate start time on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day: DayOfWeek,
    pub start: TimeOfDay,
}

impl TimeSlot {
    pub fn new(day: DayOfWeek, start: TimeOfDay) -> Self {
        Self { day, start }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.day, self.start)
    }
}

/// Insertion-ordered collection of slots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeSlotSet {
    slots: Vec<TimeSlot>,
}

impl TimeSlotSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slot, parsing `time` as `HH:MM`.
    pub fn add(&mut self, day: DayOfWeek, time: &str) -> Result<TimeSlot, ValidationError> {
        let slot = TimeSlot::new(day, TimeOfDay::parse(time)?);
        self.push(slot);
        Ok(slot)
    }

    /// Appends an already-parsed slot.
    pub fn push(&mut self, slot: TimeSlot) {
        self.slots.push(slot);
    }

    /// Removes the first slot matching `(day, time)`.
    pub fn remove(&mut self, day: DayOfWeek, time: &str) -> Result<TimeSlot, SlotRemovalError> {
        let start = TimeOfDay::parse(time)?;
        let pos = self
            .slots
            .iter()
            .position(|s| s.day == day && s.start == start)
            .ok_or_else(|| NotFound::Slot {
                day,
                time: start.to_string(),
            })?;
        Ok(self.slots.remove(pos))
    }

    /// Start times on `day`, in insertion order.
    pub fn for_day(&self, day: DayOfWeek) -> impl Iterator<Item = TimeOfDay> + '_ {
        self.slots
            .iter()
            .filter(move |s| s.day == day)
            .map(|s| s.start)
    }

    /// All slots in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TimeSlot> + '_ {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether any slot exists on `day`.
    pub fn has_day(&self, day: DayOfWeek) -> bool {
        self.slots.iter().any(|s| s.day == day)
    }
}

impl FromIterator<TimeSlot> for TimeSlotSet {
    fn from_iter<I: IntoIterator<Item = TimeSlot>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}
