//! Regime classification and agent mode selection.
//!
//! Two classifiers read the same thresholds with different control flow.
//! `classify_regime` runs independent checks in order, first match wins;
//! `select_mode` is a mutually exclusive else-if chain. They reach different
//! outcome sets (Equilibrium is unreachable in the former) and must stay
//! separate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DENSITY_CEILING, DENSITY_FLOOR, EQUILIBRIUM_HIGH, EQUILIBRIUM_LOW, PRESSURE_ENTROPIC,
    PRESSURE_SATURATION, PRESSURE_SHALLOW,
};
use crate::error::CefError;

/// Operating zone of a (density, pressure) pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// Not yet computed.
    #[default]
    Undefined,
    Incomplete,
    Shallow,
    Minimalism,
    Saturation,
    Equilibrium,
    Entropic,
}

impl Regime {
    pub fn label(self) -> &'static str {
        match self {
            Regime::Undefined => "Undefined",
            Regime::Incomplete => "Incomplete",
            Regime::Shallow => "Shallow",
            Regime::Minimalism => "Minimalism",
            Regime::Saturation => "Saturation",
            Regime::Equilibrium => "Equilibrium",
            Regime::Entropic => "Entropic",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An agent's current operating stance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentMode {
    /// Inferential focus, low pressure.
    Minimal,
    /// Creative focus, high pressure.
    Saturation,
    /// Balanced evaluation.
    Equilibrium,
    Adaptive,
}

impl AgentMode {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentMode::Minimal => "minimal",
            AgentMode::Saturation => "saturation",
            AgentMode::Equilibrium => "equilibrium",
            AgentMode::Adaptive => "adaptive",
        }
    }
}

impl fmt::Display for AgentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentMode {
    type Err = CefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimal" => Ok(AgentMode::Minimal),
            "saturation" => Ok(AgentMode::Saturation),
            "equilibrium" => Ok(AgentMode::Equilibrium),
            "adaptive" => Ok(AgentMode::Adaptive),
            _ => Err(CefError::UnknownMode(s.to_string())),
        }
    }
}

fn in_equilibrium_window(density: f64, pressure: f64) -> bool {
    (EQUILIBRIUM_LOW..=EQUILIBRIUM_HIGH).contains(&pressure)
        && (DENSITY_FLOOR..=DENSITY_CEILING).contains(&density)
}

/// Global regime label. Checks run in order and the first hit wins:
/// density < 0.7 masks every pressure branch, and [0.4, 0.9) is fully
/// claimed by Minimalism/Saturation before the Equilibrium window is tried.
pub fn classify_regime(density: f64, pressure: f64) -> Regime {
    if density < DENSITY_FLOOR {
        return Regime::Incomplete;
    }
    if pressure < PRESSURE_SHALLOW {
        return Regime::Shallow;
    }
    if (PRESSURE_SHALLOW..PRESSURE_SATURATION).contains(&pressure) {
        return Regime::Minimalism;
    }
    if (PRESSURE_SATURATION..PRESSURE_ENTROPIC).contains(&pressure) {
        return Regime::Saturation;
    }
    if in_equilibrium_window(density, pressure) {
        return Regime::Equilibrium;
    }
    Regime::Entropic
}

/// Mode adaptation chain. Density only matters inside the equilibrium
/// window, which is reachable here for pressure in [0.6, 0.7).
pub fn select_mode(density: f64, pressure: f64) -> AgentMode {
    if pressure < PRESSURE_SHALLOW {
        AgentMode::Minimal
    } else if (PRESSURE_SATURATION..PRESSURE_ENTROPIC).contains(&pressure) {
        AgentMode::Saturation
    } else if in_equilibrium_window(density, pressure) {
        AgentMode::Equilibrium
    } else {
        AgentMode::Adaptive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_density_masks_pressure() {
        assert_eq!(classify_regime(0.5, 0.5), Regime::Incomplete);
        assert_eq!(classify_regime(0.69, 0.95), Regime::Incomplete);
        assert_eq!(classify_regime(0.0, 0.0), Regime::Incomplete);
    }

    #[test]
    fn test_pressure_bands() {
        assert_eq!(classify_regime(0.9, 0.1), Regime::Shallow);
        assert_eq!(classify_regime(0.9, 0.4), Regime::Minimalism);
        assert_eq!(classify_regime(0.9, 0.69), Regime::Minimalism);
        assert_eq!(classify_regime(0.9, 0.7), Regime::Saturation);
        assert_eq!(classify_regime(0.9, 0.89), Regime::Saturation);
        assert_eq!(classify_regime(0.9, 0.9), Regime::Entropic);
        assert_eq!(classify_regime(0.9, 1.0), Regime::Entropic);
    }

    #[test]
    fn test_equilibrium_window_is_shadowed() {
        assert_eq!(classify_regime(0.75, 0.65), Regime::Minimalism);
        assert_eq!(classify_regime(0.8, 0.75), Regime::Saturation);
        assert_eq!(classify_regime(0.7, 0.6), Regime::Minimalism);
        assert_eq!(classify_regime(0.85, 0.8), Regime::Saturation);
    }

    #[test]
    fn test_equilibrium_never_returned_on_grid() {
        for d in 0..=100 {
            for p in 0..=100 {
                let regime = classify_regime(d as f64 / 100.0, p as f64 / 100.0);
                assert_ne!(regime, Regime::Equilibrium);
            }
        }
    }

    #[test]
    fn test_mode_minimal() {
        assert_eq!(select_mode(0.0, 0.0), AgentMode::Minimal);
        assert_eq!(select_mode(0.9, 0.39), AgentMode::Minimal);
    }

    #[test]
    fn test_mode_saturation() {
        assert_eq!(select_mode(0.0, 0.7), AgentMode::Saturation);
        assert_eq!(select_mode(0.8, 0.75), AgentMode::Saturation);
        assert_eq!(select_mode(0.8, 0.89), AgentMode::Saturation);
    }

    #[test]
    fn test_mode_equilibrium_reachable_below_saturation() {
        assert_eq!(select_mode(0.75, 0.65), AgentMode::Equilibrium);
        assert_eq!(select_mode(0.7, 0.6), AgentMode::Equilibrium);
        assert_eq!(select_mode(0.85, 0.69), AgentMode::Equilibrium);
    }

    #[test]
    fn test_mode_adaptive() {
        assert_eq!(select_mode(0.5, 0.65), AgentMode::Adaptive);
        assert_eq!(select_mode(0.9, 0.65), AgentMode::Adaptive);
        assert_eq!(select_mode(0.75, 0.5), AgentMode::Adaptive);
        assert_eq!(select_mode(0.75, 0.9), AgentMode::Adaptive);
        assert_eq!(select_mode(0.75, 1.0), AgentMode::Adaptive);
    }

    #[test]
    fn test_classifiers_disagree() {
        // Same inputs, different outcome sets.
        assert_eq!(classify_regime(0.75, 0.65), Regime::Minimalism);
        assert_eq!(select_mode(0.75, 0.65), AgentMode::Equilibrium);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("minimal".parse::<AgentMode>().unwrap(), AgentMode::Minimal);
        assert_eq!(
            " Saturation ".parse::<AgentMode>().unwrap(),
            AgentMode::Saturation
        );
        assert!(matches!(
            "creative".parse::<AgentMode>(),
            Err(CefError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Regime::Minimalism.to_string(), "Minimalism");
        assert_eq!(Regime::default().to_string(), "Undefined");
        assert_eq!(AgentMode::Equilibrium.to_string(), "equilibrium");
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Regime::Entropic).unwrap();
        assert_eq!(json, "\"entropic\"");
        let mode: AgentMode = serde_json::from_str("\"adaptive\"").unwrap();
        assert_eq!(mode, AgentMode::Adaptive);
    }
}
