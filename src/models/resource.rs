//! Consumable resource pool.
//!
//! Tracks how much of each named consumable is left. Tasks reserve an
//! amount when they are created and release it when removed; a refill
//! resets every quantity to its configured baseline.
//!
//! # Invariant
//! No quantity ever goes negative. A reservation larger than what is
//! available is rejected and leaves the pool untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ValidationError;

/// What happens to a release that would push a quantity above its baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleasePolicy {
    /// Add the full amount back, whatever the result.
    #[default]
    Uncapped,
    /// Clamp to the baseline for types that have one.
    CapAtBaseline,
}

/// Available quantities of named consumables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcePool {
    available: BTreeMap<String, f64>,
    baseline: BTreeMap<String, f64>,
    release_policy: ReleasePolicy,
}

impl ResourcePool {
    /// Creates a pool filled to the given baselines.
    pub fn new(baseline: BTreeMap<String, f64>) -> Self {
        Self {
            available: baseline.clone(),
            baseline,
            release_policy: ReleasePolicy::Uncapped,
        }
    }

    /// Sets the release policy.
    pub fn with_release_policy(mut self, policy: ReleasePolicy) -> Self {
        self.release_policy = policy;
        self
    }

    /// Quantity left for a type (0 for unknown types).
    pub fn available(&self, resource_type: &str) -> f64 {
        self.available.get(resource_type).copied().unwrap_or(0.0)
    }

    /// Whether `amount` could be reserved right now.
    pub fn can_reserve(&self, resource_type: &str, amount: f64) -> bool {
        amount <= self.available(resource_type)
    }

    /// Takes `amount` out of the pool.
    ///
    /// Fails with `InsufficientResource` if `amount` exceeds what is left.
    pub fn reserve(&mut self, resource_type: &str, amount: f64) -> Result<(), ValidationError> {
        let available = self.available(resource_type);
        if !self.can_reserve(resource_type, amount) {
            warn!(resource_type, requested = amount, available, "reservation rejected");
            return Err(ValidationError::InsufficientResource {
                resource_type: resource_type.to_string(),
                requested: amount,
                available,
            });
        }
        let left = available - amount;
        self.available.insert(resource_type.to_string(), left);
        debug!(resource_type, amount, left, "reserved");
        Ok(())
    }

    /// Returns `amount` to the pool.
    pub fn release(&mut self, resource_type: &str, amount: f64) {
        let mut restored = self.available(resource_type) + amount;
        if self.release_policy == ReleasePolicy::CapAtBaseline {
            if let Some(&cap) = self.baseline.get(resource_type) {
                restored = restored.min(cap);
            }
        }
        self.available.insert(resource_type.to_string(), restored);
        debug!(resource_type, amount, available = restored, "released");
    }

    /// Overwrites every quantity with `defaults`, dropping types not listed.
    pub fn refill_all(&mut self, defaults: &BTreeMap<String, f64>) {
        self.available = defaults.clone();
        self.baseline = defaults.clone();
        debug!(types = defaults.len(), "pool refilled");
    }

    /// Resets to the pool's own baseline.
    pub fn refill(&mut self) {
        let baseline = self.baseline.clone();
        self.refill_all(&baseline);
    }

    /// Read-only copy of the current quantities, sorted by type name.
    pub fn snapshot(&self) -> BTreeMap<String, f64> {
        self.available.clone()
    }

    /// Configured baselines.
    pub fn baseline(&self) -> &BTreeMap<String, f64> {
        &self.baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> ResourcePool {
        ResourcePool::new(BTreeMap::from([
            ("powder".to_string(), 5.0),
            ("liquid".to_string(), 3.0),
        ]))
    }

    #[test]
    fn test_reserve_decrements() {
        let mut p = pool();
        p.reserve("powder", 1.5).unwrap();
        assert!((p.available("powder") - 3.5).abs() < 1e-10);
        assert!((p.available("liquid") - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_reserve_exact_amount_leaves_zero() {
        let mut p = pool();
        p.reserve("liquid", 3.0).unwrap();
        assert_eq!(p.available("liquid"), 0.0);
        assert!(p.reserve("liquid", 0.01).is_err());
    }

    #[test]
    fn test_insufficient_leaves_pool_unchanged() {
        let mut p = pool();
        let err = p.reserve("powder", 5.5).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InsufficientResource {
                resource_type: "powder".into(),
                requested: 5.5,
                available: 5.0,
            }
        );
        assert_eq!(p.snapshot(), pool().snapshot());
    }

    #[test]
    fn test_unknown_type_has_nothing() {
        let mut p = pool();
        assert_eq!(p.available("bleach"), 0.0);
        assert!(p.reserve("bleach", 0.1).is_err());
        assert!(!p.snapshot().contains_key("bleach"));
    }

    #[test]
    fn test_release_uncapped() {
        let mut p = pool();
        p.release("powder", 2.0);
        assert!((p.available("powder") - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_release_capped_at_baseline() {
        let mut p = pool().with_release_policy(ReleasePolicy::CapAtBaseline);
        p.reserve("powder", 1.0).unwrap();
        p.release("powder", 3.0);
        assert!((p.available("powder") - 5.0).abs() < 1e-10);

        // Types without a baseline are never capped.
        p.release("bleach", 2.0);
        assert!((p.available("bleach") - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_refill_all_overwrites() {
        let mut p = pool();
        p.reserve("powder", 4.0).unwrap();
        p.release("bleach", 1.0);

        let defaults = BTreeMap::from([("powder".to_string(), 2.0)]);
        p.refill_all(&defaults);
        assert_eq!(p.snapshot(), defaults);

        p.refill_all(&defaults);
        assert_eq!(p.snapshot(), defaults);
    }

    #[test]
    fn test_refill_restores_baseline() {
        let mut p = pool();
        p.reserve("powder", 4.0).unwrap();
        p.reserve("liquid", 1.0).unwrap();
        p.refill();
        assert_eq!(p.snapshot(), pool().snapshot());
    }
}
