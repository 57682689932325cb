//! Dispatching rules and rule engine for task ordering.
//!
//! The scheduler places tasks one at a time, so the order it visits them
//! in decides the outcome. That order comes from a [`RuleEngine`]; the
//! default is shortest processing time first with ties left in
//! insertion order.
//!
//! # Usage
//!
//! ```
//! use u_weekplan::dispatching::{rules, RuleEngine, TieBreaker};
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Spt)
//!     .with_final_tie_breaker(TieBreaker::ByName);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Smith (1956), "Various optimizers for single-stage production"

mod engine;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};

use crate::models::Task;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (visited first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates task priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for tasks that should be placed first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a task. Lower = earlier.
    fn evaluate(&self, task: &Task) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
