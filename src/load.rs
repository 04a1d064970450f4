// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Training Load and ACWR
//!
//! Converts weekly volume/intensity into a scalar load score and computes
//! the Acute:Chronic Workload Ratio over a trailing window of samples.
//!
//! The window is positional: it slides over the recorded samples sorted by
//! week number, not over calendar weeks, so a week without any completed
//! workout compresses the effective time window. ACWR at a given sample
//! depends only on that sample and the three before it, which makes a full
//! recomputation after any single-week update reproduce every unaffected
//! value.

use serde::{Deserialize, Serialize};

use crate::constants::acwr::{CAUTION_MAX, OPTIMAL_MAX, UNDERTRAINING_MAX, WINDOW};
use crate::models::TrainingLoad;

/// Scalar load score for one week: volume times intensity, unitless
pub fn calculate_training_load(volume: f64, intensity: f64) -> f64 {
    volume * intensity
}

/// Acute:Chronic Workload Ratio over an ordered load sequence
///
/// Returns `1.0` when fewer than [`WINDOW`] samples exist or the chronic
/// average is zero. Otherwise the acute load is the last sample and the
/// chronic load the mean of the trailing window (last sample included).
pub fn calculate_acwr(recent_loads: &[f64]) -> f64 {
    if recent_loads.len() < WINDOW {
        return 1.0;
    }
    let acute = recent_loads[recent_loads.len() - 1];
    let chronic =
        recent_loads[recent_loads.len() - WINDOW..].iter().sum::<f64>() / WINDOW as f64;
    if chronic > 0.0 {
        acute / chronic
    } else {
        1.0
    }
}

/// Recompute the ACWR annotation across a load history
///
/// Sorts by week number, then fills `acwr` for every sample from the fourth
/// onward over the positional trailing window; earlier samples get no value.
/// The result is a pure function of the sample sequence, so re-running after
/// inserting or updating one week leaves all unaffected weeks unchanged.
pub fn annotate_acwr(loads: &mut [TrainingLoad]) {
    loads.sort_by_key(|l| l.week_number);
    for i in 0..loads.len() {
        loads[i].acwr = if i + 1 >= WINDOW {
            let window = &loads[i + 1 - WINDOW..=i];
            let chronic = window.iter().map(|l| l.total_load).sum::<f64>() / WINDOW as f64;
            let acute = loads[i].total_load;
            Some(if chronic > 0.0 { acute / chronic } else { 1.0 })
        } else {
            None
        };
    }
}

/// Interpretation band for an ACWR value, for display and alerting only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcwrStatus {
    /// Ratio below 0.8: training stimulus is dropping off
    Undertraining,
    /// Ratio in 0.8..=1.3: the sweet spot
    Optimal,
    /// Ratio in 1.3..=1.5: elevated, watch the next increase
    Caution,
    /// Ratio above 1.5: high injury risk
    HighRisk,
}

impl AcwrStatus {
    /// Classify a ratio into its interpretation band
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < UNDERTRAINING_MAX {
            Self::Undertraining
        } else if ratio <= OPTIMAL_MAX {
            Self::Optimal
        } else if ratio <= CAUTION_MAX {
            Self::Caution
        } else {
            Self::HighRisk
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Undertraining => "undertraining",
            Self::Optimal => "optimal",
            Self::Caution => "caution",
            Self::HighRisk => "high injury risk",
        }
    }
}
