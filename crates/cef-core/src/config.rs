//! Tunables loaded from TOML. Every section is optional; missing keys fall
//! back to the built-in constants.
//!
//! ```toml
//! [thresholds]
//! sd_min = 0.70
//! pc_min = 0.40
//! pc_max = 0.90
//!
//! [agent]
//! memory_capacity = 20
//! tools = "search_web, execute_code"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_TOOLS, DENSITY_FLOOR, MEMORY_CAPACITY, PRESSURE_ENTROPIC, PRESSURE_SHALLOW,
};
use crate::error::{CefError, Result};

/// Health bounds used by coherence validation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub sd_min: f64,
    pub pc_min: f64,
    pub pc_max: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            sd_min: DENSITY_FLOOR,
            pc_min: PRESSURE_SHALLOW,
            pc_max: PRESSURE_ENTROPIC,
        }
    }
}

/// Construction parameters for `ContextAgent::with_config`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Interaction log capacity.
    pub memory_capacity: usize,
    /// Seed content of the tools component.
    pub tools: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            memory_capacity: MEMORY_CAPACITY,
            tools: DEFAULT_TOOLS.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CefConfig {
    pub thresholds: Thresholds,
    pub agent: AgentConfig,
}

impl CefConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: CefConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        let bounds = [("sd_min", t.sd_min), ("pc_min", t.pc_min), ("pc_max", t.pc_max)];
        for (key, value) in bounds {
            if !(0.0..=1.0).contains(&value) {
                return Err(CefError::InvalidConfig(format!(
                    "thresholds.{key} = {value} is outside [0, 1]"
                )));
            }
        }
        if t.pc_min > t.pc_max {
            return Err(CefError::InvalidConfig(format!(
                "thresholds.pc_min ({}) exceeds pc_max ({})",
                t.pc_min, t.pc_max
            )));
        }
        if self.agent.memory_capacity == 0 {
            return Err(CefError::InvalidConfig(
                "agent.memory_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
