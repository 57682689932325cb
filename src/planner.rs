//! Planner session.
//!
//! Owns the three pieces of mutable state (tasks, slots, resource
//! pool) and exposes the operations a front end calls. Every mutation
//! takes `&mut self`; a planner shared between threads needs an outer
//! `Mutex` so that reservations and schedule generation see one
//! consistent state.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::config::PlannerConfig;
use crate::error::{NotFound, SchedulingFailure, SlotRemovalError, ValidationError};
use crate::models::{
    DayOfWeek, ResourcePool, Schedule, Task, TaskRequest, TimeSlot, TimeSlotSet,
};
use crate::scheduler::GreedyScheduler;
use crate::validation::{validate_input, validate_task_request, ValidationResult};

/// Interactive planning session.
///
/// # Example
///
/// ```
/// use u_weekplan::{Planner, TaskRequest};
///
/// let mut planner = Planner::default();
/// planner.add_slot("Monday", "09:00").unwrap();
/// planner
///     .add_task(TaskRequest::new("Anna").with_duration(30).with_resource("powder", 1.0).on("Monday"))
///     .unwrap();
///
/// let schedule = planner.generate_schedule().unwrap();
/// assert_eq!(schedule.render_lines(), vec!["Monday 09:00: Anna (30 min)"]);
/// assert!((planner.resource_snapshot()["powder"] - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    config: PlannerConfig,
    tasks: Vec<Task>,
    slots: TimeSlotSet,
    pool: ResourcePool,
    scheduler: GreedyScheduler,
}

impl Planner {
    /// Creates an empty planner with the pool filled to the configured baselines.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            pool: config.build_pool(),
            scheduler: config.build_scheduler(),
            tasks: Vec::new(),
            slots: TimeSlotSet::new(),
            config,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Validates a request, reserves its resource and stores the task.
    ///
    /// On error nothing changes: no task is added, the pool is untouched.
    pub fn add_task(&mut self, request: TaskRequest) -> Result<&Task, ValidationError> {
        let task = validate_task_request(&request, &self.tasks, &self.pool)?;
        self.pool.reserve(&task.resource_type, task.resource_amount)?;
        info!(
            task = %task.name,
            duration_min = task.duration_min,
            day = %task.day,
            "task added"
        );
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Removes a task and returns its reservation to the pool.
    pub fn remove_task(&mut self, name: &str) -> Result<Task, NotFound> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| NotFound::Task {
                name: name.to_string(),
            })?;
        let task = self.tasks.remove(pos);
        self.pool.release(&task.resource_type, task.resource_amount);
        info!(task = %task.name, "task removed");
        Ok(task)
    }

    /// Adds a slot. `day` and `time` are parsed here.
    pub fn add_slot(&mut self, day: &str, time: &str) -> Result<TimeSlot, ValidationError> {
        let day: DayOfWeek = day.parse()?;
        let slot = self.slots.add(day, time)?;
        debug!(%slot, "slot added");
        Ok(slot)
    }

    /// Removes the first slot matching `(day, time)`.
    pub fn remove_slot(&mut self, day: &str, time: &str) -> Result<TimeSlot, SlotRemovalError> {
        let day: DayOfWeek = day.parse()?;
        let slot = self.slots.remove(day, time)?;
        debug!(%slot, "slot removed");
        Ok(slot)
    }

    /// Resets the pool to the configured baselines.
    ///
    /// Reservations held by existing tasks are forgotten, not re-applied.
    pub fn refill_resources(&mut self) {
        self.pool.refill_all(&self.config.resources);
        info!("resources refilled");
    }

    /// Runs the greedy scheduler over the current tasks and slots.
    pub fn generate_schedule(&self) -> Result<Schedule, SchedulingFailure> {
        self.scheduler.schedule(&self.tasks, &self.slots)
    }

    /// Audits tasks and slots for problems that would block scheduling.
    pub fn audit(&self) -> ValidationResult {
        validate_input(&self.tasks, &self.slots)
    }

    /// Current quantities per resource type.
    pub fn resource_snapshot(&self) -> BTreeMap<String, f64> {
        self.pool.snapshot()
    }

    /// Tasks ordered by duration (ties in insertion order).
    pub fn list_tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        let mut sorted: Vec<&Task> = self.tasks.iter().collect();
        sorted.sort_by(|a, b| a.cmp_duration(b));
        sorted.into_iter()
    }

    /// Slots in insertion order.
    pub fn list_slots(&self) -> impl Iterator<Item = &TimeSlot> + '_ {
        self.slots.iter()
    }

    /// Looks up a task by name.
    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name == name)
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Text overview: pending tasks, then available slots.
    pub fn render_overview(&self) -> String {
        let mut out = String::from("Tasks to schedule:\n");
        for task in self.list_tasks() {
            out.push_str(&format!(
                "{}: {} min ({})\n",
                task.name, task.duration_min, task.day
            ));
        }
        out.push_str("\nAvailable slots:\n");
        for slot in self.list_slots() {
            out.push_str(&format!("{slot}\n"));
        }
        out
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

/// One `"<type>: <amount>"` line per resource, two decimals.
pub fn render_resources(snapshot: &BTreeMap<String, f64>) -> String {
    snapshot
        .iter()
        .map(|(name, amount)| format!("{name}: {amount:.2}\n"))
        .collect()
}
