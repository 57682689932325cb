//! Weekly time-slot planner.
//!
//! Assigns timed tasks, each drawing on a consumable resource, to
//! `(day, time)` slots across a week. Tasks on the same day never
//! overlap and a task is only accepted while the pool can cover it.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `DayOfWeek`, `TimeOfDay`, `Task`,
//!   `TimeSlotSet`, `ResourcePool`, `Schedule`
//! - **`dispatching`**: Task ordering rules (SPT by default)
//! - **`scheduler`**: Greedy first-fit scheduler, overlap checks, metrics
//! - **`validation`**: Task-request checks and pre-generation audit
//! - **`planner`**: The session object front ends talk to
//! - **`config`** / **`scenario`**: TOML configuration and replay files
//!
//! # Algorithm
//!
//! Shortest task first, first slot on its day that does not collide with
//! anything already placed. Deterministic and all-or-nothing; not an
//! optimizer.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod planner;
pub mod scenario;
pub mod scheduler;
pub mod validation;

pub use config::PlannerConfig;
pub use error::{PlannerError, Result, SchedulingFailure, ValidationError};
pub use models::{DayOfWeek, Schedule, ScheduleEntry, Task, TaskRequest, TimeOfDay, TimeSlot};
pub use planner::{render_resources, Planner};
pub use scenario::Scenario;
