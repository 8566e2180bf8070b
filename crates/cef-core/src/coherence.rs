//! Threshold-based health check of a whole context.
//!
//! `infer_regime` is a third classifier, distinct from `classify_regime`:
//! its bands are inclusive at the top (0.7 is Minimalism, 0.9 is Saturation)
//! and pressure below 0.4 falls through to Entropic rather than Shallow.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::aggregate::aggregate_density;
use crate::config::Thresholds;
use crate::constants::{
    EQUILIBRIUM_HIGH, EQUILIBRIUM_LOW, PRESSURE_ENTROPIC, PRESSURE_SATURATION, PRESSURE_SHALLOW,
};
use crate::fields::ContextFields;
use crate::metrics::round_to;
use crate::pressure::pressure;
use crate::regime::Regime;

/// A threshold violation found by `validate_context`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoherenceIssue {
    LowDensity,
    InsufficientPressure,
    SaturatedPressure,
}

impl fmt::Display for CoherenceIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoherenceIssue::LowDensity => f.write_str("low semantic density"),
            CoherenceIssue::InsufficientPressure => f.write_str("insufficient context"),
            CoherenceIssue::SaturatedPressure => f.write_str("saturated context"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoherenceReport {
    /// Aggregate density, 3 decimals.
    pub density: f64,
    /// Contextual pressure, 3 decimals.
    pub pressure: f64,
    pub issues: Vec<CoherenceIssue>,
    pub regime: Regime,
}

impl CoherenceReport {
    pub fn is_healthy(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for CoherenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Coherence Report ===")?;
        writeln!(f, "Semantic density (SD): {}", self.density)?;
        writeln!(f, "Contextual pressure (PC): {}", self.pressure)?;
        writeln!(f, "Regime: {}", self.regime)?;
        writeln!(f, "Status:")?;
        if self.issues.is_empty() {
            write!(f, "  - ok: context within thresholds")
        } else {
            let lines: Vec<String> = self.issues.iter().map(|i| format!("  - {i}")).collect();
            write!(f, "{}", lines.join("\n"))
        }
    }
}

/// Regime as seen by the validator.
pub fn infer_regime(density: f64, pressure: f64, thresholds: &Thresholds) -> Regime {
    if density < thresholds.sd_min {
        Regime::Incomplete
    } else if (PRESSURE_SHALLOW..=PRESSURE_SATURATION).contains(&pressure) {
        Regime::Minimalism
    } else if pressure > PRESSURE_SATURATION && pressure <= PRESSURE_ENTROPIC {
        Regime::Saturation
    } else if (EQUILIBRIUM_LOW..=EQUILIBRIUM_HIGH).contains(&pressure) {
        Regime::Equilibrium
    } else {
        Regime::Entropic
    }
}

/// Check a context's aggregate density and pressure against `thresholds`.
pub fn validate_context(fields: &ContextFields, thresholds: &Thresholds) -> CoherenceReport {
    let sd = aggregate_density(fields);
    let pc = pressure(fields);

    let mut issues = Vec::new();
    if sd < thresholds.sd_min {
        issues.push(CoherenceIssue::LowDensity);
    }
    if pc < thresholds.pc_min {
        issues.push(CoherenceIssue::InsufficientPressure);
    } else if pc > thresholds.pc_max {
        issues.push(CoherenceIssue::SaturatedPressure);
    }

    CoherenceReport {
        density: round_to(sd, 3),
        pressure: round_to(pc, 3),
        issues,
        regime: infer_regime(sd, pc, thresholds),
    }
}
