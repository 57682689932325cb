//! Rule engine for task ordering.
//!
//! Applies rules in sequence: the next rule is consulted only when the
//! previous ones tie. Sorting is stable, so tasks that tie on every rule
//! keep their insertion order unless a final tie-breaker says otherwise.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, DispatchingRule};
use crate::models::Task;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep insertion order (default).
    #[default]
    InsertionOrder,
    /// Lexicographic by task name.
    ByName,
}

/// A composable rule engine for task ordering.
///
/// # Example
/// ```
/// use u_weekplan::dispatching::{rules, RuleEngine};
/// use u_weekplan::models::{DayOfWeek, Task};
///
/// let tasks = vec![
///     Task::new("long", 60, "powder", 1.0, DayOfWeek::Monday),
///     Task::new("short", 15, "powder", 1.0, DayOfWeek::Monday),
/// ];
/// let engine = RuleEngine::new().with_rule(rules::Spt);
/// assert_eq!(engine.sort_indices(&tasks), vec![1, 0]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine (keeps insertion order).
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InsertionOrder,
            epsilon: 1e-9,
        }
    }

    /// Shortest processing time first, ties in insertion order.
    pub fn shortest_first() -> Self {
        Self::new().with_rule(rules::Spt)
    }

    /// Appends a rule; later rules only break ties of earlier ones.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns indices into `tasks` in the order they should be placed.
    pub fn sort_indices(&self, tasks: &[Task]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..tasks.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&tasks[a], &tasks[b]));
        indices
    }

    /// Returns the tasks in placement order.
    pub fn sort<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        self.sort_indices(tasks)
            .into_iter()
            .map(|i| &tasks[i])
            .collect()
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a);
            let score_b = rule.evaluate(b);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }

        match self.tie_breaker {
            TieBreaker::InsertionOrder => Ordering::Equal,
            TieBreaker::ByName => a.name.cmp(&b.name),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::shortest_first()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayOfWeek;

    fn make_task(name: &str, duration_min: u32) -> Task {
        Task::new(name, duration_min, "powder", 1.0, DayOfWeek::Monday)
    }

    fn names(tasks: &[Task], engine: &RuleEngine) -> Vec<String> {
        engine.sort(tasks).iter().map(|t| t.name.clone()).collect()
    }

    #[test]
    fn test_spt_ordering() {
        let tasks = vec![
            make_task("long", 50),
            make_task("short", 10),
            make_task("medium", 30),
        ];
        let engine = RuleEngine::shortest_first();
        assert_eq!(names(&tasks, &engine), vec!["short", "medium", "long"]);
    }

    #[test]
    fn test_spt_is_stable() {
        let tasks = vec![
            make_task("B", 30),
            make_task("A", 30),
            make_task("C", 10),
            make_task("D", 30),
        ];
        let engine = RuleEngine::default();
        assert_eq!(names(&tasks, &engine), vec!["C", "B", "A", "D"]);
    }

    #[test]
    fn test_by_name_tie_breaker() {
        let tasks = vec![make_task("B", 30), make_task("A", 30)];
        let engine = RuleEngine::shortest_first().with_final_tie_breaker(TieBreaker::ByName);
        assert_eq!(names(&tasks, &engine), vec!["A", "B"]);
    }

    #[test]
    fn test_sequential_rules() {
        let tasks = vec![
            Task::new("heavy", 30, "powder", 2.0, DayOfWeek::Monday),
            Task::new("light", 30, "powder", 0.5, DayOfWeek::Monday),
            Task::new("quick", 10, "powder", 3.0, DayOfWeek::Monday),
        ];
        let engine = RuleEngine::new()
            .with_rule(rules::Spt)
            .with_rule(rules::LeastResource);
        assert_eq!(names(&tasks, &engine), vec!["quick", "light", "heavy"]);
    }

    #[test]
    fn test_lpt_and_fifo() {
        let tasks = vec![make_task("a", 10), make_task("b", 40), make_task("c", 20)];
        let lpt = RuleEngine::new().with_rule(rules::Lpt);
        assert_eq!(names(&tasks, &lpt), vec!["b", "c", "a"]);

        let fifo = RuleEngine::new().with_rule(rules::Fifo);
        assert_eq!(names(&tasks, &fifo), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_tasks() {
        let engine = RuleEngine::default();
        assert!(engine.sort_indices(&[]).is_empty());
    }

    #[test]
    fn test_debug_lists_rules() {
        let engine = RuleEngine::default();
        assert_eq!(engine.rule_names(), vec!["SPT"]);
        assert!(format!("{engine:?}").contains("SPT"));
    }
}
