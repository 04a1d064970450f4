// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Plan Generator
//!
//! Builds a periodized [`TrainingPlan`] from a goal, duration, training
//! frequency and fitness level. The phase timeline is fixed per duration
//! (the 12-week plan additionally branches on the goal for its final week)
//! and always partitions `[1, duration]` exactly: contiguous, ascending,
//! no gaps, no overlaps.
//!
//! Generation is pure construction; the caller persists the result.

use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use crate::catalog::phase_descriptor;
use crate::constants::periodization::{
    BASE_INTENSITY_RANGE, BASE_SESSION_MINUTES, BASE_VOLUME_RANGE, MAX_DAYS_PER_WEEK,
    MIN_DAYS_PER_WEEK, SUPPORTED_DURATIONS,
};
use crate::errors::EngineError;
use crate::models::{FitnessLevel, PhasePlan, TrainingGoal, TrainingPhase, TrainingPlan};

/// Generate a periodized training plan
///
/// Fails fast with [`EngineError::InvalidDuration`] for durations outside
/// {8, 12, 16} and [`EngineError::InvalidDaysPerWeek`] outside 3..=6, rather
/// than producing an empty phase timeline that would only surface later as
/// an invalid-week error.
pub fn generate_periodized_plan(
    goal: TrainingGoal,
    duration: u32,
    days_per_week: u32,
    fitness_level: FitnessLevel,
    competition_date: Option<NaiveDate>,
) -> Result<TrainingPlan, EngineError> {
    if !SUPPORTED_DURATIONS.contains(&duration) {
        return Err(EngineError::InvalidDuration(duration));
    }
    if !(MIN_DAYS_PER_WEEK..=MAX_DAYS_PER_WEEK).contains(&days_per_week) {
        return Err(EngineError::InvalidDaysPerWeek(days_per_week));
    }

    let phases = phase_distribution(goal, duration);
    debug_assert!(partitions_exactly(&phases, duration));

    let plan = TrainingPlan {
        id: format!("plan_{}", Uuid::new_v4()),
        name: format!("{} - {} Week Plan", goal.display_name(), duration),
        goal,
        duration,
        start_date: Utc::now(),
        current_week: 1,
        phases,
        competition_date,
        days_per_week,
        fitness_level,
    };

    info!(
        plan.id = %plan.id,
        plan.goal = goal.display_name(),
        plan.duration_weeks = duration,
        plan.days_per_week = days_per_week,
        "Generated periodized plan"
    );

    Ok(plan)
}

/// Fixed phase timeline for a supported duration
///
/// The final week of the 12-week plan tapers for tournament preparation
/// and recovers otherwise.
fn phase_distribution(goal: TrainingGoal, duration: u32) -> Vec<PhasePlan> {
    use TrainingPhase::*;
    match duration {
        8 => vec![
            phase_plan(Base, 1, 3),
            phase_plan(Build, 4, 5),
            phase_plan(Peak, 6, 7),
            phase_plan(Taper, 8, 8),
        ],
        12 => {
            let last = if goal == TrainingGoal::Tournament {
                Taper
            } else {
                Recovery
            };
            vec![
                phase_plan(Base, 1, 4),
                phase_plan(Build, 5, 8),
                phase_plan(Peak, 9, 11),
                phase_plan(last, 12, 12),
            ]
        }
        16 => vec![
            phase_plan(Base, 1, 6),
            phase_plan(Build, 7, 11),
            phase_plan(Peak, 12, 14),
            phase_plan(Taper, 15, 15),
            phase_plan(Recovery, 16, 16),
        ],
        // generate_periodized_plan validates before calling
        other => unreachable!("unvalidated duration {other}"),
    }
}

/// Build one phase span with its scaled volume and intensity ranges
fn phase_plan(phase: TrainingPhase, start_week: u32, end_week: u32) -> PhasePlan {
    let desc = phase_descriptor(phase);
    PhasePlan {
        phase,
        start_week,
        end_week,
        volume_range: [
            BASE_VOLUME_RANGE[0] * desc.volume_multiplier,
            BASE_VOLUME_RANGE[1] * desc.volume_multiplier,
        ],
        intensity_range: [
            BASE_INTENSITY_RANGE[0] * desc.intensity_multiplier,
            BASE_INTENSITY_RANGE[1] * desc.intensity_multiplier,
        ],
        focus: desc.focus.iter().map(ToString::to_string).collect(),
        objectives: desc.objectives.iter().map(ToString::to_string).collect(),
    }
}

/// Estimated weekly training volume in minutes for a fitness level
pub fn base_weekly_volume(fitness_level: FitnessLevel, days_per_week: u32) -> f64 {
    f64::from(days_per_week) * BASE_SESSION_MINUTES * fitness_level.volume_multiplier()
}

fn partitions_exactly(phases: &[PhasePlan], duration: u32) -> bool {
    let mut expected_start = 1;
    for span in phases {
        if span.start_week != expected_start || span.end_week < span.start_week {
            return false;
        }
        expected_start = span.end_week + 1;
    }
    expected_start == duration + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_GOALS: [TrainingGoal; 4] = [
        TrainingGoal::Tournament,
        TrainingGoal::Fitness,
        TrainingGoal::Skill,
        TrainingGoal::Competition,
    ];

    #[test]
    fn test_phase_partition_invariant() {
        for duration in [8, 12, 16] {
            for goal in ALL_GOALS {
                let plan = generate_periodized_plan(
                    goal,
                    duration,
                    4,
                    FitnessLevel::Intermediate,
                    None,
                )
                .unwrap();
                assert!(
                    partitions_exactly(&plan.phases, duration),
                    "spans must cover [1, {duration}] exactly for {goal:?}"
                );
            }
        }
    }

    #[test]
    fn test_eight_week_timeline() {
        let plan =
            generate_periodized_plan(TrainingGoal::Skill, 8, 3, FitnessLevel::Beginner, None)
                .unwrap();
        let spans: Vec<_> = plan
            .phases
            .iter()
            .map(|p| (p.phase, p.start_week, p.end_week))
            .collect();
        assert_eq!(
            spans,
            vec![
                (TrainingPhase::Base, 1, 3),
                (TrainingPhase::Build, 4, 5),
                (TrainingPhase::Peak, 6, 7),
                (TrainingPhase::Taper, 8, 8),
            ]
        );
    }

    #[test]
    fn test_twelve_week_final_phase_depends_on_goal() {
        let tournament = generate_periodized_plan(
            TrainingGoal::Tournament,
            12,
            4,
            FitnessLevel::Advanced,
            None,
        )
        .unwrap();
        assert_eq!(tournament.phases.last().unwrap().phase, TrainingPhase::Taper);

        for goal in [
            TrainingGoal::Fitness,
            TrainingGoal::Skill,
            TrainingGoal::Competition,
        ] {
            let plan =
                generate_periodized_plan(goal, 12, 4, FitnessLevel::Advanced, None).unwrap();
            let last = plan.phases.last().unwrap();
            assert_eq!(last.phase, TrainingPhase::Recovery);
            assert_eq!((last.start_week, last.end_week), (12, 12));
        }
    }

    #[test]
    fn test_sixteen_week_timeline() {
        let plan = generate_periodized_plan(
            TrainingGoal::Tournament,
            16,
            5,
            FitnessLevel::Elite,
            NaiveDate::from_ymd_opt(2026, 12, 12),
        )
        .unwrap();
        let spans: Vec<_> = plan
            .phases
            .iter()
            .map(|p| (p.phase, p.start_week, p.end_week))
            .collect();
        assert_eq!(
            spans,
            vec![
                (TrainingPhase::Base, 1, 6),
                (TrainingPhase::Build, 7, 11),
                (TrainingPhase::Peak, 12, 14),
                (TrainingPhase::Taper, 15, 15),
                (TrainingPhase::Recovery, 16, 16),
            ]
        );
        assert!(plan.competition_date.is_some());
    }

    #[test]
    fn test_ranges_scale_with_phase_multipliers() {
        let plan = generate_periodized_plan(
            TrainingGoal::Fitness,
            12,
            4,
            FitnessLevel::Intermediate,
            None,
        )
        .unwrap();
        let base = &plan.phases[0];
        assert_eq!(base.volume_range, [8.0 * 0.7, 12.0 * 0.7]);
        assert_eq!(base.intensity_range, [6.0 * 0.6, 10.0 * 0.6]);
        let build = &plan.phases[1];
        assert_eq!(build.volume_range, [8.0, 12.0]);
        assert_eq!(build.intensity_range, [6.0 * 0.8, 10.0 * 0.8]);
    }

    #[test]
    fn test_unsupported_duration_fails_fast() {
        let err = generate_periodized_plan(TrainingGoal::Fitness, 10, 4, FitnessLevel::Elite, None)
            .unwrap_err();
        assert_eq!(err, EngineError::InvalidDuration(10));
        let err = generate_periodized_plan(TrainingGoal::Fitness, 0, 4, FitnessLevel::Elite, None)
            .unwrap_err();
        assert_eq!(err, EngineError::InvalidDuration(0));
    }

    #[test]
    fn test_days_per_week_bounds() {
        for days in [2, 7] {
            let err = generate_periodized_plan(
                TrainingGoal::Fitness,
                8,
                days,
                FitnessLevel::Beginner,
                None,
            )
            .unwrap_err();
            assert_eq!(err, EngineError::InvalidDaysPerWeek(days));
        }
        for days in 3..=6 {
            assert!(generate_periodized_plan(
                TrainingGoal::Fitness,
                8,
                days,
                FitnessLevel::Beginner,
                None
            )
            .is_ok());
        }
    }

    #[test]
    fn test_new_plan_starts_at_week_one() {
        let plan =
            generate_periodized_plan(TrainingGoal::Competition, 8, 4, FitnessLevel::Elite, None)
                .unwrap();
        assert_eq!(plan.current_week, 1);
        assert_eq!(plan.name, "Competition - 8 Week Plan");
        assert!(plan.id.starts_with("plan_"));
    }

    #[test]
    fn test_base_weekly_volume_scales_by_level() {
        assert_eq!(
            base_weekly_volume(FitnessLevel::Intermediate, 4),
            4.0 * 90.0
        );
        assert_eq!(base_weekly_volume(FitnessLevel::Beginner, 4), 360.0 * 0.7);
        assert_eq!(base_weekly_volume(FitnessLevel::Elite, 6), 540.0 * 1.5);
    }
}
