//! Planning domain models.
//!
//! Provides the data types the planner works with: days and times,
//! tasks, candidate slots, the consumable resource pool, and the
//! generated schedule.
//!
//! # Domain Mappings
//!
//! | u-weekplan | Laundry room | Clinic | Workshop |
//! |------------|--------------|--------|----------|
//! | Task | Wash load | Appointment | Job |
//! | TimeSlot | Machine start time | Free consult time | Bench slot |
//! | ResourcePool | Detergent stock | Consumables | Raw material |
//! | Schedule | Weekly laundry plan | Weekly roster | Weekly plan |

mod calendar;
mod resource;
mod schedule;
mod slot;
mod task;

pub use calendar::{DayOfWeek, TimeOfDay, TimeWindow, MAX_DURATION_MIN, MINUTES_PER_DAY};
pub use resource::{ReleasePolicy, ResourcePool};
pub use schedule::{Schedule, ScheduleEntry};
pub use slot::{TimeSlot, TimeSlotSet};
pub use task::{Task, TaskRequest};
