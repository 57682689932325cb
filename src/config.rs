//! Planner configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty file (or no
//! file at all) yields a working planner:
//!
//! ```toml
//! release_policy = "uncapped"   # or "cap_at_baseline"
//! midnight_policy = "extend"    # or "reject"
//!
//! [resources]
//! powder = 5.0
//! liquid = 3.0
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::{ReleasePolicy, ResourcePool};
use crate::scheduler::{GreedyScheduler, MidnightPolicy};

/// Planner configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Whether releases may push a quantity above its baseline.
    pub release_policy: ReleasePolicy,
    /// How tasks running past 24:00 are treated.
    pub midnight_policy: MidnightPolicy,
    /// What a refill restores the pool to.
    pub resources: BTreeMap<String, f64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            release_policy: ReleasePolicy::default(),
            midnight_policy: MidnightPolicy::default(),
            resources: BTreeMap::from([
                ("powder".to_string(), 5.0),
                ("liquid".to_string(), 3.0),
            ]),
        }
    }
}

impl PlannerConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or holds an
    /// invalid baseline.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serializes to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks that every baseline is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self
            .resources
            .iter()
            .find(|&(_, &v)| !v.is_finite() || v < 0.0)
        {
            Some((name, &value)) => Err(ConfigError::InvalidCapacity {
                resource_type: name.clone(),
                value,
            }),
            None => Ok(()),
        }
    }

    /// A pool filled to the configured baselines.
    pub fn build_pool(&self) -> ResourcePool {
        ResourcePool::new(self.resources.clone()).with_release_policy(self.release_policy)
    }

    /// A scheduler honouring the configured policies.
    pub fn build_scheduler(&self) -> GreedyScheduler {
        GreedyScheduler::new().with_midnight_policy(self.midnight_policy)
    }
}
