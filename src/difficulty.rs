// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Adaptive Difficulty
//!
//! Rescales a plan's volume targets from the athlete's historical
//! completion rate: a plan that is mostly skipped gets easier, a plan that
//! is fully executed gets slightly harder. Only future weeks are affected;
//! weekly plans already generated and persisted are never rewritten.
//!
//! Repeated invocation with a sustained low or high completion rate
//! compounds the adjustment multiplicatively; there is no clamp.

use tracing::info;

use crate::constants::difficulty::{
    HIGH_COMPLETION_RATE, INCREASE_FACTOR, LOW_COMPLETION_RATE, REDUCE_FACTOR,
};
use crate::models::TrainingPlan;

/// Volume factor for a completion rate
///
/// Strict comparisons on both thresholds: exactly 0.6 and exactly 0.9 leave
/// the plan unchanged.
pub fn adjustment_factor(completion_rate: f64) -> f64 {
    if completion_rate < LOW_COMPLETION_RATE {
        REDUCE_FACTOR
    } else if completion_rate > HIGH_COMPLETION_RATE {
        INCREASE_FACTOR
    } else {
        1.0
    }
}

/// Rescale every phase's volume range by the completion-rate factor
///
/// Returns the plan unmodified when the factor is 1.0.
pub fn adjust_plan_difficulty(mut plan: TrainingPlan, completion_rate: f64) -> TrainingPlan {
    let factor = adjustment_factor(completion_rate);
    if factor == 1.0 {
        return plan;
    }

    for phase in &mut plan.phases {
        phase.volume_range = [
            phase.volume_range[0] * factor,
            phase.volume_range[1] * factor,
        ];
    }

    info!(
        plan.id = %plan.id,
        completion_rate,
        factor,
        "Adjusted plan difficulty"
    );

    plan
}
