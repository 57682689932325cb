//! Greedy scheduler, overlap detection and schedule metrics.
//!
//! # Algorithm
//!
//! `GreedyScheduler` visits tasks shortest first and places each one at
//! the first slot on its day that does not overlap anything placed
//! before it. It is all-or-nothing: one unplaceable task fails the run.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod greedy;
mod kpi;
mod overlap;

pub use greedy::{GreedyScheduler, MidnightPolicy};
pub use kpi::ScheduleKpi;
pub use overlap::{conflicts_with, OverlapChecker};
