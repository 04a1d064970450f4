// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # shuttleplan
//!
//! A periodized badminton training plan engine: builds multi-week plans
//! partitioned into base/build/peak/taper/recovery phases, realizes each
//! week into concrete workout sessions with ramping volume and intensity,
//! tracks completed work as training load samples, and computes the
//! Acute:Chronic Workload Ratio (ACWR) as an injury-risk signal.
//!
//! ## Architecture
//!
//! The engine is a set of pure, synchronous functions over plain records:
//! - **Planner**: builds the phase timeline for a goal/duration/level
//! - **Weekly**: realizes one week into scheduled sessions
//! - **Load**: load scores and ACWR over the completed-week history
//! - **Difficulty**: completion-rate driven volume rescaling
//! - **Progress**: workout completion rollups
//! - **Storage**: an injected repository over a flat key-value namespace
//!
//! ## Example
//!
//! ```rust
//! use shuttleplan::models::{FitnessLevel, TrainingGoal};
//! use shuttleplan::planner::generate_periodized_plan;
//! use shuttleplan::weekly::generate_weekly_plan;
//!
//! # fn main() -> Result<(), shuttleplan::errors::EngineError> {
//! let plan = generate_periodized_plan(
//!     TrainingGoal::Fitness,
//!     12,
//!     4,
//!     FitnessLevel::Intermediate,
//!     None,
//! )?;
//! let week = generate_weekly_plan(&plan, 1)?;
//! assert_eq!(week.workouts.len(), 4);
//! # Ok(())
//! # }
//! ```

/// Core data models for plans, weeks, sessions and load samples
pub mod models;

/// Static phase descriptors, workout templates and drill library
pub mod catalog;

/// Fixed model coefficients and the persisted key layout
pub mod constants;

/// Typed engine failures
pub mod errors;

/// Periodized plan generation
pub mod planner;

/// Weekly schedule realization
pub mod weekly;

/// Training load scoring and ACWR
pub mod load;

/// Completion-rate driven difficulty adjustment
pub mod difficulty;

/// Workout completion rollups
pub mod progress;

/// Repository over plans, weekly plans and load records
pub mod storage;

/// Command-line interface
pub mod cli;

/// Configuration management
pub mod config;

/// Structured logging setup
pub mod logging;

pub use catalog::phase_recommendations;
pub use difficulty::adjust_plan_difficulty;
pub use errors::EngineError;
pub use load::{calculate_acwr, calculate_training_load};
pub use planner::generate_periodized_plan;
pub use weekly::generate_weekly_plan;
