// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Data Models
//!
//! Core data structures for periodized badminton training plans.
//! A plan is an aggregate of contiguous phase spans; each viewed week is
//! realized into a [`WeeklyPlan`] of concrete [`WorkoutSession`]s, and each
//! completed week contributes a [`TrainingLoad`] sample used for ACWR
//! injury-risk tracking.
//!
//! ## Design Principles
//!
//! - **Serializable**: the serde shapes (camelCase fields, lowercase enum
//!   tokens) match the JSON records persisted by earlier clients, so saved
//!   plans remain readable
//! - **Plain records**: no interior mutability, no handles; the engine is a
//!   set of pure functions over these values

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// What the athlete is training towards
///
/// Immutable once a plan is created; the 12-week timeline ends in a taper
/// for `Tournament` and a recovery block for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingGoal {
    /// Peaking for a specific tournament date
    Tournament,
    /// General conditioning
    Fitness,
    /// Technical skill development
    Skill,
    /// Ongoing competitive season
    Competition,
}

impl TrainingGoal {
    /// Human-readable name, capitalized for plan titles
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Tournament => "Tournament",
            Self::Fitness => "Fitness",
            Self::Skill => "Skill",
            Self::Competition => "Competition",
        }
    }
}

/// Self-assessed fitness level, scaling overall training volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
    Elite,
}

impl FitnessLevel {
    /// Volume multiplier applied to the baseline weekly volume
    pub fn volume_multiplier(&self) -> f64 {
        match self {
            Self::Beginner => 0.7,
            Self::Intermediate => 1.0,
            Self::Advanced => 1.2,
            Self::Elite => 1.5,
        }
    }
}

/// Stage of a periodized plan with a distinct training emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingPhase {
    /// Aerobic foundation and fundamentals
    Base,
    /// Sport-specific intensity and strength
    Build,
    /// Competition readiness at highest intensity
    Peak,
    /// Fatigue reduction ahead of competition
    Taper,
    /// Full recovery between cycles
    Recovery,
}

impl TrainingPhase {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Build => "build",
            Self::Peak => "peak",
            Self::Taper => "taper",
            Self::Recovery => "recovery",
        }
    }
}

/// Kind of scheduled training session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Technique,
    Endurance,
    Speed,
    Strength,
    /// Practice matches and competition simulation
    Match,
    Recovery,
}

impl WorkoutType {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Technique => "technique",
            Self::Endurance => "endurance",
            Self::Speed => "speed",
            Self::Strength => "strength",
            Self::Match => "match",
            Self::Recovery => "recovery",
        }
    }
}

/// One contiguous span of weeks within a plan
///
/// Across a plan's phase list the spans are contiguous, ascending and
/// non-overlapping, covering exactly `[1, duration]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhasePlan {
    /// Which phase this span belongs to
    pub phase: TrainingPhase,
    /// First week of the span (1-based, inclusive)
    pub start_week: u32,
    /// Last week of the span (inclusive); `start_week <= end_week`
    pub end_week: u32,
    /// `[min, max]` weekly volume in hours
    pub volume_range: [f64; 2],
    /// `[min, max]` intensity on a 1-10 scale
    pub intensity_range: [f64; 2],
    /// Training focus areas, cycled across the week's sessions
    pub focus: Vec<String>,
    /// Phase objectives for display
    pub objectives: Vec<String>,
}

impl PhasePlan {
    /// Whether this span contains the given absolute week number
    pub fn contains_week(&self, week_number: u32) -> bool {
        week_number >= self.start_week && week_number <= self.end_week
    }
}

/// Aggregate root: one periodized training plan
///
/// `current_week` is the only field mutated during the plan's life (advanced
/// by user action) until the plan is archived. At most one plan is active at
/// a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlan {
    /// Unique plan identifier
    pub id: String,
    /// Display name, e.g. "Fitness - 12 Week Plan"
    pub name: String,
    pub goal: TrainingGoal,
    /// Plan length in weeks; one of 8, 12 or 16
    pub duration: u32,
    /// When the plan was created (UTC)
    pub start_date: DateTime<Utc>,
    /// Week the athlete is currently in, `1..=duration`
    pub current_week: u32,
    /// Ordered phase timeline partitioning `[1, duration]`
    pub phases: Vec<PhasePlan>,
    /// Target competition date, if the goal has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition_date: Option<NaiveDate>,
    /// Scheduled training days per week, `3..=6`
    pub days_per_week: u32,
    pub fitness_level: FitnessLevel,
}

/// One scheduled training session within a week
///
/// Mutated in place when the athlete records completion; never deleted
/// within a week's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    /// Deterministic identifier derived from plan, week and day
    pub id: String,
    /// Day of week, 1-7 (Monday-Sunday)
    pub day: u32,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    /// Planned duration in minutes
    pub duration: f64,
    /// Planned intensity, 1-10
    pub intensity: f64,
    /// Focus area for the session
    pub focus: String,
    /// Recommended drills for the session type
    pub drills: Vec<String>,
    pub completed: bool,
    /// Actual duration in minutes, recorded on completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_duration: Option<f64>,
    /// Rate of perceived exertion, 1-10, recorded on completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f64>,
}

/// One week's realized schedule
///
/// Created lazily the first time a week is viewed; `completed` becomes true
/// exactly when every contained workout is completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    /// Absolute week number within the plan
    pub week_number: u32,
    pub phase: TrainingPhase,
    /// Planned volume in hours
    pub planned_volume: f64,
    /// Planned intensity, 1-10
    pub planned_intensity: f64,
    /// Sum of completed sessions' actual minutes, in hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_volume: Option<f64>,
    /// Mean RPE over completed sessions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_intensity: Option<f64>,
    /// One slot per training day; unscheduled days are rest days
    pub workouts: Vec<WorkoutSession>,
    pub completed: bool,
    /// Free-form note, e.g. the deload message
    pub notes: String,
    /// Planned load score, volume x intensity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_load: Option<f64>,
}

/// One week's training load sample
///
/// Built from *actual* (not planned) volume and intensity. Ordering by
/// `week_number` is significant for ACWR computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingLoad {
    pub week_number: u32,
    /// Actual volume in hours
    pub volume: f64,
    /// Actual intensity (mean RPE), 1-10
    pub intensity: f64,
    /// Load score, volume x intensity
    pub total_load: f64,
    /// Acute:Chronic Workload Ratio; absent until 4 samples exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acwr: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> WorkoutSession {
        WorkoutSession {
            id: "plan_x_w1_d1".to_string(),
            day: 1,
            workout_type: WorkoutType::Match,
            duration: 90.0,
            intensity: 7.0,
            focus: "Match simulation".to_string(),
            drills: vec!["Practice matches".to_string()],
            completed: false,
            actual_duration: None,
            rpe: None,
        }
    }

    #[test]
    fn test_goal_serialization_tokens() {
        assert_eq!(
            serde_json::to_string(&TrainingGoal::Tournament).unwrap(),
            "\"tournament\""
        );
        let goal: TrainingGoal = serde_json::from_str("\"fitness\"").unwrap();
        assert_eq!(goal, TrainingGoal::Fitness);
    }

    #[test]
    fn test_workout_type_match_keyword_token() {
        // `match` is a Rust keyword but must stay the wire token
        assert_eq!(
            serde_json::to_string(&WorkoutType::Match).unwrap(),
            "\"match\""
        );
        let t: WorkoutType = serde_json::from_str("\"match\"").unwrap();
        assert_eq!(t, WorkoutType::Match);
    }

    #[test]
    fn test_session_serializes_camel_case() {
        let json = serde_json::to_string(&sample_session()).unwrap();
        assert!(json.contains("\"type\":\"match\""));
        assert!(json.contains("\"drills\""));
        // Unset optionals are omitted, matching the legacy records
        assert!(!json.contains("actualDuration"));
        assert!(!json.contains("rpe"));
    }

    #[test]
    fn test_weekly_plan_round_trip() {
        let week = WeeklyPlan {
            week_number: 3,
            phase: TrainingPhase::Base,
            planned_volume: 6.3,
            planned_intensity: 4.2,
            actual_volume: None,
            actual_intensity: None,
            workouts: vec![sample_session()],
            completed: false,
            notes: String::new(),
            training_load: Some(26.46),
        };
        let json = serde_json::to_string(&week).unwrap();
        assert!(json.contains("\"weekNumber\":3"));
        assert!(json.contains("\"plannedVolume\":6.3"));
        assert!(json.contains("\"trainingLoad\":26.46"));
        let back: WeeklyPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, week);
    }

    #[test]
    fn test_phase_plan_contains_week() {
        let span = PhasePlan {
            phase: TrainingPhase::Build,
            start_week: 5,
            end_week: 8,
            volume_range: [8.0, 12.0],
            intensity_range: [4.8, 8.0],
            focus: vec![],
            objectives: vec![],
        };
        assert!(!span.contains_week(4));
        assert!(span.contains_week(5));
        assert!(span.contains_week(8));
        assert!(!span.contains_week(9));
    }

    #[test]
    fn test_fitness_level_multipliers() {
        assert_eq!(FitnessLevel::Beginner.volume_multiplier(), 0.7);
        assert_eq!(FitnessLevel::Intermediate.volume_multiplier(), 1.0);
        assert_eq!(FitnessLevel::Advanced.volume_multiplier(), 1.2);
        assert_eq!(FitnessLevel::Elite.volume_multiplier(), 1.5);
    }

    #[test]
    fn test_training_load_omits_unset_acwr() {
        let load = TrainingLoad {
            week_number: 1,
            volume: 5.0,
            intensity: 6.0,
            total_load: 30.0,
            acwr: None,
        };
        let json = serde_json::to_string(&load).unwrap();
        assert!(json.contains("\"totalLoad\":30.0"));
        assert!(!json.contains("acwr"));
    }
}
