// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Constants Module
//!
//! Fixed coefficients of the periodization model and the persisted key
//! layout. These are model constants, not tunables; changing them changes
//! the meaning of previously generated plans.

/// Periodization model coefficients
pub mod periodization {
    /// Supported plan lengths in weeks
    pub const SUPPORTED_DURATIONS: [u32; 3] = [8, 12, 16];

    /// Minimum scheduled training days per week
    pub const MIN_DAYS_PER_WEEK: u32 = 3;

    /// Maximum scheduled training days per week
    pub const MAX_DAYS_PER_WEEK: u32 = 6;

    /// Baseline weekly volume range in hours, scaled by the phase's
    /// volume multiplier
    pub const BASE_VOLUME_RANGE: [f64; 2] = [8.0, 12.0];

    /// Baseline intensity range on the 1-10 scale, scaled by the phase's
    /// intensity multiplier
    pub const BASE_INTENSITY_RANGE: [f64; 2] = [6.0, 10.0];

    /// Baseline session length in minutes used for the fitness-level
    /// weekly volume estimate
    pub const BASE_SESSION_MINUTES: f64 = 90.0;

    /// A deload lands on every week whose absolute number is a multiple
    /// of this, while in a build or peak phase
    pub const DELOAD_WEEK_INTERVAL: u32 = 4;

    /// Volume reduction applied on a deload week
    pub const DELOAD_VOLUME_FACTOR: f64 = 0.6;

    /// Intensity reduction applied on a deload week
    pub const DELOAD_INTENSITY_FACTOR: f64 = 0.7;

    /// Note attached to generated deload weeks
    pub const DELOAD_NOTE: &str = "Deload week - reduced volume for recovery";
}

/// Acute:Chronic Workload Ratio parameters
pub mod acwr {
    /// Trailing window size, in samples (not calendar weeks)
    pub const WINDOW: usize = 4;

    /// Below this the athlete is undertraining
    pub const UNDERTRAINING_MAX: f64 = 0.8;

    /// Upper bound of the optimal band
    pub const OPTIMAL_MAX: f64 = 1.3;

    /// Upper bound of the caution band; above is high injury risk
    pub const CAUTION_MAX: f64 = 1.5;
}

/// Adaptive difficulty thresholds and factors
pub mod difficulty {
    /// Completion rate below which volume is reduced (strict)
    pub const LOW_COMPLETION_RATE: f64 = 0.6;

    /// Completion rate above which volume is increased (strict)
    pub const HIGH_COMPLETION_RATE: f64 = 0.9;

    /// Volume factor applied on sustained low completion
    pub const REDUCE_FACTOR: f64 = 0.9;

    /// Volume factor applied on sustained high completion
    pub const INCREASE_FACTOR: f64 = 1.05;
}

/// Persisted key-value layout, kept compatible with earlier clients
pub mod storage {
    /// Current version written into record envelopes
    pub const SCHEMA_VERSION: u32 = 1;

    /// Key of the single active plan record
    pub const ACTIVE_PLAN_KEY: &str = "active_training_plan";

    /// Key of the archived plan history
    pub const PLAN_HISTORY_KEY: &str = "training_plan_history";

    /// Per-plan weekly plan collections live at `{prefix}_{plan_id}`
    pub const WEEKLY_PLANS_PREFIX: &str = "weekly_plans";

    /// Per-plan load collections live at `{prefix}_{plan_id}`
    pub const LOAD_DATA_PREFIX: &str = "weekly_load_data";
}
