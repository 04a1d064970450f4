// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Typed failures of the periodization engine
//!
//! Every engine function is pure and deterministic; a failure is always a
//! logic or input error, never a transient one, so nothing here is retried.

use thiserror::Error;

/// Errors raised by the plan and weekly-plan generators
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Plan duration outside the supported set {8, 12, 16}
    #[error("unsupported plan duration: {0} weeks (supported: 8, 12, 16)")]
    InvalidDuration(u32),

    /// Training days per week outside 3..=6
    #[error("days per week must be between 3 and 6, got {0}")]
    InvalidDaysPerWeek(u32),

    /// Week number maps to no phase span of the plan
    #[error("week {week} is outside the plan's phase timeline (1..={duration})")]
    InvalidWeek { week: u32, duration: u32 },

    /// Workout id not present in the weekly plan being updated
    #[error("workout not found in week {week}: {workout_id}")]
    WorkoutNotFound { week: u32, workout_id: String },
}
