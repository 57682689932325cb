//! Built-in dispatching rules.
//!
//! All rules return lower scores for tasks that should be placed first.

use super::{DispatchingRule, RuleScore};
use crate::models::Task;

/// Shortest Processing Time.
///
/// Short tasks go first so longer ones are left to fill the gaps that
/// remain. This is the planner's default order.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        task.duration_min as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Longest Processing Time.
#[derive(Debug, Clone, Copy)]
pub struct Lpt;

impl DispatchingRule for Lpt {
    fn name(&self) -> &'static str {
        "LPT"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        -(task.duration_min as f64)
    }

    fn description(&self) -> &'static str {
        "Longest Processing Time"
    }
}

/// First In, First Out.
///
/// Scores every task equally; with a stable sort the insertion order
/// survives unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, _task: &Task) -> RuleScore {
        0.0
    }

    fn description(&self) -> &'static str {
        "First In, First Out"
    }
}

/// Smallest resource amount first.
#[derive(Debug, Clone, Copy)]
pub struct LeastResource;

impl DispatchingRule for LeastResource {
    fn name(&self) -> &'static str {
        "LRES"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        task.resource_amount
    }

    fn description(&self) -> &'static str {
        "Least Resource Amount"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayOfWeek;

    fn task(name: &str, duration_min: u32, amount: f64) -> Task {
        Task::new(name, duration_min, "powder", amount, DayOfWeek::Monday)
    }

    #[test]
    fn test_spt_score() {
        assert!((Spt.evaluate(&task("A", 30, 1.0)) - 30.0).abs() < 1e-10);
        assert!(Spt.evaluate(&task("A", 10, 1.0)) < Spt.evaluate(&task("B", 20, 1.0)));
    }

    #[test]
    fn test_lpt_score() {
        assert!(Lpt.evaluate(&task("A", 60, 1.0)) < Lpt.evaluate(&task("B", 20, 1.0)));
    }

    #[test]
    fn test_fifo_constant() {
        assert_eq!(Fifo.evaluate(&task("A", 60, 1.0)), Fifo.evaluate(&task("B", 5, 3.0)));
    }

    #[test]
    fn test_least_resource_score() {
        assert!(
            LeastResource.evaluate(&task("A", 60, 0.5))
                < LeastResource.evaluate(&task("B", 5, 2.0))
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(Spt.name(), "SPT");
        assert_eq!(Spt.description(), "Shortest Processing Time");
        assert_eq!(Lpt.name(), "LPT");
        assert_eq!(Fifo.description(), "First In, First Out");
    }
}
