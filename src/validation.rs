//! Input validation.
//!
//! Two layers:
//! - [`validate_task_request`] guards task creation. It stops at the
//!   first problem and reports it as a [`ValidationError`].
//! - [`validate_input`] audits the whole planner state before a
//!   generation run and collects every issue it finds. It is advisory:
//!   the scheduler does not require it to pass.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::models::{DayOfWeek, ResourcePool, Task, TaskRequest, TimeSlotSet, MAX_DURATION_MIN};

/// Checks a task request against existing tasks and the pool.
///
/// Checks, in order:
/// 1. Name is non-empty and not already taken
/// 2. Duration and amount are positive, duration is at most one week
/// 3. The pool holds enough of the requested resource
/// 4. The day parses
///
/// Does not reserve anything; the caller does that once this passes.
pub fn validate_task_request(
    request: &TaskRequest,
    existing: &[Task],
    pool: &ResourcePool,
) -> Result<Task, ValidationError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if existing.iter().any(|t| t.name == name) {
        return Err(ValidationError::DuplicateName(name.to_string()));
    }

    if request.duration <= 0 {
        return Err(ValidationError::NonPositiveDuration(request.duration));
    }
    let duration_min = u32::try_from(request.duration)
        .ok()
        .filter(|&d| d <= MAX_DURATION_MIN)
        .ok_or(ValidationError::DurationTooLong(request.duration))?;

    let amount = request.amount;
    if !(amount.is_finite() && amount > 0.0) {
        return Err(ValidationError::NonPositiveAmount(amount));
    }

    if !pool.can_reserve(&request.resource_type, amount) {
        return Err(ValidationError::InsufficientResource {
            resource_type: request.resource_type.clone(),
            requested: amount,
            available: pool.available(&request.resource_type),
        });
    }

    let day: DayOfWeek = request.day.parse()?;

    Ok(Task::new(
        name,
        duration_min,
        request.resource_type.clone(),
        amount,
        day,
    ))
}

/// Validation result for the planner-wide audit.
pub type ValidationResult = Result<(), Vec<InputIssue>>;

/// An issue found by [`validate_input`].
#[derive(Debug, Clone, PartialEq)]
pub struct InputIssue {
    /// Issue category.
    pub kind: InputIssueKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of audit issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputIssueKind {
    /// Two tasks share a name.
    DuplicateName,
    /// A task's day has no slot at all, so it can never be placed.
    NoSlotOnDay,
    /// The same (day, time) slot appears more than once.
    DuplicateSlot,
}

impl InputIssue {
    fn new(kind: InputIssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Audits tasks and slots before scheduling.
///
/// Checks:
/// 1. No duplicate task names
/// 2. Every task's day has at least one slot
/// 3. No duplicate slots (reported, though the scheduler accepts them)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(issues)` with all detected issues.
pub fn validate_input(tasks: &[Task], slots: &TimeSlotSet) -> ValidationResult {
    let mut issues = Vec::new();

    let mut names = HashSet::new();
    for task in tasks {
        if !names.insert(task.name.as_str()) {
            issues.push(InputIssue::new(
                InputIssueKind::DuplicateName,
                format!("Duplicate task name: {}", task.name),
            ));
        }
        if !slots.has_day(task.day) {
            issues.push(InputIssue::new(
                InputIssueKind::NoSlotOnDay,
                format!("Task '{}' needs a slot on {}, none exist", task.name, task.day),
            ));
        }
    }

    let mut seen = HashSet::new();
    for slot in slots.iter() {
        if !seen.insert(*slot) {
            issues.push(InputIssue::new(
                InputIssueKind::DuplicateSlot,
                format!("Duplicate slot: {slot}"),
            ));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
