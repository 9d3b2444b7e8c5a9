// src/synthesis/state.rs
//! Physiological state definitions and their spectral recipes

use crate::error::EegError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of brain-wave states the synthesizer can produce.
///
/// Every state maps to a fixed ordered list of (frequency Hz, amplitude)
/// sinusoid components. The enum is matched exhaustively, so no unrecognized
/// state can reach signal generation; string labels are only accepted at the
/// [`FromStr`] boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysiologicalState {
    /// Relaxed wakefulness, alpha plus beta activity
    Wake,
    /// Rapid eye movement sleep, theta plus alpha activity
    Rem,
    /// Slow-wave sleep, delta dominant
    DeepSleep,
    /// Stage 1-2 sleep, theta with weak alpha
    LightSleep,
}

impl PhysiologicalState {
    /// All states in canonical order
    pub const ALL: [PhysiologicalState; 4] = [
        PhysiologicalState::Wake,
        PhysiologicalState::Rem,
        PhysiologicalState::DeepSleep,
        PhysiologicalState::LightSleep,
    ];

    /// Fixed (frequency Hz, amplitude) components of this state
    pub fn recipe(&self) -> &'static [(f64, f64)] {
        match self {
            // alpha + beta
            PhysiologicalState::Wake => &[(10.0, 0.5), (20.0, 0.3)],
            // theta + alpha
            PhysiologicalState::Rem => &[(6.0, 0.5), (10.0, 0.2)],
            // delta + theta
            PhysiologicalState::DeepSleep => &[(2.0, 0.6), (4.0, 0.2)],
            // theta + weak alpha
            PhysiologicalState::LightSleep => &[(6.0, 0.5), (10.0, 0.1)],
        }
    }

    /// Stable label used in files and reports
    pub fn label(&self) -> &'static str {
        match self {
            PhysiologicalState::Wake => "wake",
            PhysiologicalState::Rem => "rem",
            PhysiologicalState::DeepSleep => "deep_sleep",
            PhysiologicalState::LightSleep => "light_sleep",
        }
    }
}

impl fmt::Display for PhysiologicalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PhysiologicalState {
    type Err = EegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wake" => Ok(PhysiologicalState::Wake),
            "rem" => Ok(PhysiologicalState::Rem),
            "deep_sleep" => Ok(PhysiologicalState::DeepSleep),
            "light_sleep" => Ok(PhysiologicalState::LightSleep),
            other => Err(EegError::InvalidState(other.to_string())),
        }
    }
}
