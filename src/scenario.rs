//! Scenario files.
//!
//! A scenario is a TOML document holding an optional planner config plus
//! the tasks and slots to feed it, in the order a user would have
//! entered them:
//!
//! ```toml
//! [config.resources]
//! powder = 5.0
//!
//! [[slot]]
//! day = "Monday"
//! time = "09:00"
//!
//! [[task]]
//! name = "Anna"
//! duration = 30
//! resource_type = "powder"
//! amount = 1.0
//! day = "Monday"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;
use crate::error::{ConfigError, PlannerError};
use crate::models::TaskRequest;
use crate::planner::Planner;

/// A slot as written in a scenario file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotSpec {
    pub day: String,
    pub time: String,
}

/// Tasks and slots to replay through a [`Planner`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: PlannerConfig,
    #[serde(default, rename = "slot")]
    pub slots: Vec<SlotSpec>,
    #[serde(default, rename = "task")]
    pub tasks: Vec<TaskRequest>,
}

impl Scenario {
    /// Parses a scenario document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let scenario: Self = toml::from_str(s)?;
        scenario.config.validate()?;
        Ok(scenario)
    }

    /// Loads a scenario file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Builds a planner and replays slots, then tasks.
    ///
    /// Stops at the first rejected entry.
    pub fn into_planner(self) -> Result<Planner, PlannerError> {
        let mut planner = Planner::new(self.config);
        for slot in &self.slots {
            planner.add_slot(&slot.day, &slot.time)?;
        }
        for task in self.tasks {
            planner.add_task(task)?;
        }
        Ok(planner)
    }
}
