//! Schedule (solution) model.
//!
//! A schedule is the output of one generation run: every task placed
//! at a slot start time on its day. Entries are kept in the order the
//! scheduler processed the tasks, not in chronological order.
//!
//! Schedules are transient. Changing tasks or slots afterwards does not
//! touch an existing schedule; only the next generation sees it.

use serde::{Deserialize, Serialize};

use super::{DayOfWeek, Task, TimeOfDay, TimeWindow};

/// A task placed at a start time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub day: DayOfWeek,
    pub start: TimeOfDay,
    pub task: Task,
}

impl ScheduleEntry {
    pub fn new(day: DayOfWeek, start: TimeOfDay, task: Task) -> Self {
        Self { day, start, task }
    }

    /// Occupied interval [start, start + duration).
    pub fn window(&self) -> TimeWindow {
        TimeWindow::starting_at(self.start, self.task.duration_min)
    }

    /// End minute (may exceed 24:00).
    pub fn end_min(&self) -> u32 {
        self.window().end_min
    }
}

impl std::fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}: {} ({} min)",
            self.day, self.start, self.task.name, self.task.duration_min
        )
    }
}

/// A complete schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Entries in processing order.
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Entries in processing order.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduleEntry> + '_ {
        self.entries.iter()
    }

    /// Finds the entry for a task by name.
    pub fn entry_for_task(&self, name: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.task.name == name)
    }

    /// Entries sorted by (day, start) for calendar-style display.
    pub fn chronological(&self) -> Vec<&ScheduleEntry> {
        let mut sorted: Vec<&ScheduleEntry> = self.entries.iter().collect();
        sorted.sort_by_key(|e| (e.day, e.start));
        sorted
    }

    /// One `"<Day> HH:MM: <name> (<n> min)"` line per entry.
    pub fn render_lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleEntry;
    type IntoIter = std::slice::Iter<'a, ScheduleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: DayOfWeek, start: &str, name: &str, duration_min: u32) -> ScheduleEntry {
        ScheduleEntry::new(
            day,
            TimeOfDay::parse(start).unwrap(),
            Task::new(name, duration_min, "powder", 1.0, day),
        )
    }

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.add_entry(entry(DayOfWeek::Tuesday, "08:00", "B", 20));
        s.add_entry(entry(DayOfWeek::Monday, "10:00", "A", 30));
        s.add_entry(entry(DayOfWeek::Monday, "09:00", "C", 45));
        s
    }

    #[test]
    fn test_entry_window() {
        let e = entry(DayOfWeek::Monday, "09:00", "A", 30);
        assert_eq!(e.window(), TimeWindow::new(540, 570));
        assert_eq!(e.end_min(), 570);
    }

    #[test]
    fn test_render_lines() {
        let s = sample_schedule();
        assert_eq!(
            s.render_lines(),
            vec![
                "Tuesday 08:00: B (20 min)",
                "Monday 10:00: A (30 min)",
                "Monday 09:00: C (45 min)",
            ]
        );
    }

    #[test]
    fn test_lookup() {
        let s = sample_schedule();
        assert_eq!(s.entry_for_task("A").unwrap().start.to_string(), "10:00");
        assert!(s.entry_for_task("Z").is_none());
    }

    #[test]
    fn test_chronological() {
        let s = sample_schedule();
        let names: Vec<_> = s.chronological().iter().map(|e| e.task.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert!(s.render_lines().is_empty());
    }
}
