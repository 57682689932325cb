//! Task model.
//!
//! A task is a unit of timed work pinned to one day of the week. It
//! consumes a fixed amount of one resource type, reserved when the task
//! is created and returned when it is removed.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::DayOfWeek;

/// A task to be scheduled.
///
/// Equality is field-wise. Ordering by duration is a separate helper,
/// [`Task::cmp_duration`], since it says nothing about identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task name.
    pub name: String,
    /// Processing time (minutes, > 0).
    pub duration_min: u32,
    /// Consumable resource this task draws from.
    pub resource_type: String,
    /// Amount reserved from the pool (> 0).
    pub resource_amount: f64,
    /// Day the task must run on.
    pub day: DayOfWeek,
}

impl Task {
    /// Creates a task. Field validation is done by the planner.
    pub fn new(
        name: impl Into<String>,
        duration_min: u32,
        resource_type: impl Into<String>,
        resource_amount: f64,
        day: DayOfWeek,
    ) -> Self {
        Self {
            name: name.into(),
            duration_min,
            resource_type: resource_type.into(),
            resource_amount,
            day,
        }
    }

    /// Compares by duration (shorter first).
    pub fn cmp_duration(&self, other: &Self) -> Ordering {
        self.duration_min.cmp(&other.duration_min)
    }
}

/// Unvalidated task input, as collected by a form or read from a file.
///
/// Numeric fields are signed and the day is free text so that every
/// malformed value reaches validation instead of failing at parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRequest {
    pub name: String,
    /// Duration in minutes.
    #[serde(alias = "duration_min")]
    pub duration: i64,
    pub resource_type: String,
    #[serde(alias = "resource_amount")]
    pub amount: f64,
    pub day: String,
}

impl TaskRequest {
    /// Creates a request with the given name; other fields are empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration: 0,
            resource_type: String::new(),
            amount: 0.0,
            day: String::new(),
        }
    }

    /// Sets the duration (minutes).
    pub fn with_duration(mut self, duration: i64) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the resource type and amount.
    pub fn with_resource(mut self, resource_type: impl Into<String>, amount: f64) -> Self {
        self.resource_type = resource_type.into();
        self.amount = amount;
        self
    }

    /// Sets the day.
    pub fn on(mut self, day: impl Into<String>) -> Self {
        self.day = day.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_orders_by_duration() {
        let short = Task::new("short", 20, "powder", 1.0, DayOfWeek::Monday);
        let long = Task::new("long", 45, "powder", 0.5, DayOfWeek::Friday);
        assert_eq!(short.cmp_duration(&long), Ordering::Less);

        let mut tasks = vec![long.clone(), short.clone()];
        tasks.sort_by(Task::cmp_duration);
        assert_eq!(tasks[0].name, "short");
    }

    #[test]
    fn test_equal_duration_is_not_equality() {
        let a = Task::new("A", 30, "powder", 1.0, DayOfWeek::Monday);
        let b = Task::new("B", 30, "liquid", 2.0, DayOfWeek::Tuesday);
        assert_eq!(a.cmp_duration(&b), Ordering::Equal);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());

        let mut tasks = vec![a.clone(), b.clone()];
        tasks.dedup();
        assert_eq!(tasks.len(), 2);
        assert!(!tasks[..1].contains(&b));
    }

    #[test]
    fn test_request_builder() {
        let req = TaskRequest::new("Anna")
            .with_duration(40)
            .with_resource("powder", 1.5)
            .on("Tuesday");
        assert_eq!(req.name, "Anna");
        assert_eq!(req.duration, 40);
        assert_eq!(req.resource_type, "powder");
        assert!((req.amount - 1.5).abs() < 1e-10);
        assert_eq!(req.day, "Tuesday");
    }
}
