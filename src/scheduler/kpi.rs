//! Schedule metrics.
//!
//! Summarises a generated schedule for status display.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Busy minutes | Sum of task durations, per day and total |
//! | Latest end | Largest start + duration per day (may exceed 24:00) |
//! | Consumption | Sum of reserved amounts per resource type |

use std::collections::BTreeMap;

use crate::models::{DayOfWeek, Schedule};

/// Schedule performance indicators.
#[derive(Debug, Clone, Default)]
pub struct ScheduleKpi {
    /// Number of placed tasks.
    pub entry_count: usize,
    /// Busy minutes per day (days without entries are absent).
    pub busy_minutes_by_day: BTreeMap<DayOfWeek, u64>,
    /// Busy minutes across the week.
    pub total_busy_minutes: u64,
    /// Latest end minute per day.
    pub latest_end_by_day: BTreeMap<DayOfWeek, u32>,
    /// Resource drawn by the placed tasks, per type.
    pub consumption_by_resource: BTreeMap<String, f64>,
}

impl ScheduleKpi {
    /// Computes metrics from a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let mut kpi = Self {
            entry_count: schedule.len(),
            ..Self::default()
        };

        for entry in schedule {
            let duration = u64::from(entry.task.duration_min);
            *kpi.busy_minutes_by_day.entry(entry.day).or_insert(0) += duration;
            kpi.total_busy_minutes += duration;

            let end = kpi.latest_end_by_day.entry(entry.day).or_insert(0);
            *end = (*end).max(entry.end_min());

            *kpi
                .consumption_by_resource
                .entry(entry.task.resource_type.clone())
                .or_insert(0.0) += entry.task.resource_amount;
        }

        kpi
    }

    /// Busiest day by busy minutes (earliest day wins ties).
    pub fn busiest_day(&self) -> Option<DayOfWeek> {
        self.busy_minutes_by_day
            .iter()
            .fold(None, |best: Option<(DayOfWeek, u64)>, (&day, &mins)| match best {
                Some((_, top)) if top >= mins => best,
                _ => Some((day, mins)),
            })
            .map(|(day, _)| day)
    }
}
