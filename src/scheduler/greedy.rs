//! Shortest-first, first-fit greedy scheduler.
//!
//! # Algorithm
//!
//! 1. Reject empty input (no tasks or no slots).
//! 2. Order tasks with the rule engine (default: SPT, stable).
//! 3. For each task, scan its day's slots in insertion order and take
//!    the first one whose interval does not overlap anything already
//!    accepted that day.
//! 4. If no slot fits, the whole run fails. Nothing placed so far is
//!    returned.
//!
//! The result is not optimal. A different order or a best-fit scan can
//! place inputs this one rejects; the greedy order is kept so that the
//! same input always produces the same schedule.
//!
//! # Complexity
//! O(n log n + n * s * k) where n=tasks, s=slots per day, k=accepted per day.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::OverlapChecker;
use crate::dispatching::RuleEngine;
use crate::error::SchedulingFailure;
use crate::models::{Schedule, ScheduleEntry, Task, TimeSlotSet, TimeWindow};

/// How intervals that run past 24:00 are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MidnightPolicy {
    /// Keep the interval on its start day as a plain minute offset.
    #[default]
    Extend,
    /// Skip slots where the task would not finish by 24:00.
    Reject,
}

/// Greedy scheduler.
///
/// Stateless between calls: the accepted intervals live only for the
/// duration of one [`schedule`](GreedyScheduler::schedule) call.
///
/// # Example
///
/// ```
/// use u_weekplan::models::{DayOfWeek, Task, TimeSlotSet};
/// use u_weekplan::scheduler::GreedyScheduler;
///
/// let mut slots = TimeSlotSet::new();
/// slots.add(DayOfWeek::Monday, "09:00").unwrap();
/// let tasks = vec![Task::new("A", 30, "powder", 1.0, DayOfWeek::Monday)];
///
/// let schedule = GreedyScheduler::new().schedule(&tasks, &slots).unwrap();
/// assert_eq!(schedule.render_lines(), vec!["Monday 09:00: A (30 min)"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler {
    rule_engine: RuleEngine,
    midnight_policy: MidnightPolicy,
}

impl GreedyScheduler {
    /// Creates a shortest-first scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule engine used to order tasks.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// Sets the cross-midnight policy.
    pub fn with_midnight_policy(mut self, policy: MidnightPolicy) -> Self {
        self.midnight_policy = policy;
        self
    }

    /// Assigns every task to a slot on its day, or fails.
    pub fn schedule(
        &self,
        tasks: &[Task],
        slots: &TimeSlotSet,
    ) -> Result<Schedule, SchedulingFailure> {
        if tasks.is_empty() || slots.is_empty() {
            warn!(
                tasks = tasks.len(),
                slots = slots.len(),
                "nothing to schedule"
            );
            return Err(SchedulingFailure::EmptyInput);
        }

        let mut schedule = Schedule::new();
        let mut checker = OverlapChecker::new();

        for task in self.rule_engine.sort(tasks) {
            let start = slots.for_day(task.day).find(|&start| {
                self.fits_day(TimeWindow::starting_at(start, task.duration_min))
                    && !checker.conflicts(task.day, start, task.duration_min)
            });

            let Some(start) = start else {
                warn!(task = %task.name, day = %task.day, "no conflict-free slot");
                return Err(SchedulingFailure::UnschedulableTask {
                    task_name: task.name.clone(),
                });
            };

            checker.accept(task.day, start, task.duration_min);
            debug!(task = %task.name, day = %task.day, %start, "placed");
            schedule.add_entry(ScheduleEntry::new(task.day, start, task.clone()));
        }

        info!(entries = schedule.len(), "schedule generated");
        Ok(schedule)
    }

    fn fits_day(&self, window: TimeWindow) -> bool {
        match self.midnight_policy {
            MidnightPolicy::Extend => true,
            MidnightPolicy::Reject => !window.crosses_midnight(),
        }
    }
}
