//! Error types for planner operations.
//!
//! Every failure is returned as a value. The enums are split by the
//! boundary they guard: input validation, lookups on removal, schedule
//! generation, and configuration loading. [`PlannerError`] unifies them
//! for callers that do not care which stage failed.

use thiserror::Error;

use crate::models::DayOfWeek;

/// Rejected user input or business rule.
///
/// Returned before any state is mutated; the planner is unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("task name must not be empty")]
    EmptyName,

    #[error("a task named '{0}' already exists")]
    DuplicateName(String),

    #[error("duration must be positive, got {0} min")]
    NonPositiveDuration(i64),

    #[error("duration of {0} min exceeds one week")]
    DurationTooLong(i64),

    #[error("resource amount must be a positive number, got {0}")]
    NonPositiveAmount(f64),

    #[error("insufficient '{resource_type}': requested {requested:.2}, available {available:.2}")]
    InsufficientResource {
        resource_type: String,
        requested: f64,
        available: f64,
    },

    #[error("invalid day of week: '{0}'")]
    InvalidDay(String),

    #[error("invalid time '{0}', expected HH:MM (24h)")]
    InvalidTime(String),
}

/// Lookup failure on a remove operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFound {
    #[error("no task named '{name}'")]
    Task { name: String },

    #[error("no slot at {day} {time}")]
    Slot { day: DayOfWeek, time: String },
}

/// Why a slot could not be removed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlotRemovalError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFound),
}

/// Schedule generation failure. No partial schedule accompanies it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulingFailure {
    #[error("nothing to schedule: no tasks or no time slots")]
    EmptyInput,

    #[error("cannot schedule task '{task_name}': every slot on its day conflicts")]
    UnschedulableTask { task_name: String },
}

/// Configuration loading or validation failure.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("baseline for '{resource_type}' must be finite and non-negative, got {value}")]
    InvalidCapacity { resource_type: String, value: f64 },
}

/// Any planner failure.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error(transparent)]
    Scheduling(#[from] SchedulingFailure),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<SlotRemovalError> for PlannerError {
    fn from(e: SlotRemovalError) -> Self {
        match e {
            SlotRemovalError::Invalid(v) => PlannerError::Validation(v),
            SlotRemovalError::NotFound(n) => PlannerError::NotFound(n),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = ValidationError::InsufficientResource {
            resource_type: "powder".into(),
            requested: 2.0,
            available: 1.5,
        };
        assert_eq!(
            e.to_string(),
            "insufficient 'powder': requested 2.00, available 1.50"
        );

        let e = SchedulingFailure::UnschedulableTask {
            task_name: "A".into(),
        };
        assert!(e.to_string().contains("'A'"));

        let e = NotFound::Slot {
            day: DayOfWeek::Monday,
            time: "09:00".into(),
        };
        assert_eq!(e.to_string(), "no slot at Monday 09:00");
    }

    #[test]
    fn test_umbrella_conversion() {
        let e: PlannerError = SchedulingFailure::EmptyInput.into();
        assert!(matches!(e, PlannerError::Scheduling(SchedulingFailure::EmptyInput)));

        let e: PlannerError = ValidationError::EmptyName.into();
        assert_eq!(e.to_string(), "task name must not be empty");
    }
}
