// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Weekly Plan Generator
//!
//! Realizes one week of a training plan into a concrete schedule: locates
//! the active phase, ramps volume and intensity linearly across the phase's
//! span, applies the deload rule, and emits one session per training day
//! from the phase's workout template.
//!
//! Generation is a pure function of the plan state, so regenerating the
//! same week before any persistence yields an identical result (session ids
//! derive from plan id, week and day). Once a week has been persisted and
//! mutated, the caller must use the stored version instead of regenerating.

use tracing::debug;

use crate::catalog::{drill_recommendations, workout_template};
use crate::constants::periodization::{
    DELOAD_INTENSITY_FACTOR, DELOAD_NOTE, DELOAD_VOLUME_FACTOR, DELOAD_WEEK_INTERVAL,
};
use crate::errors::EngineError;
use crate::load::calculate_training_load;
use crate::models::{PhasePlan, TrainingPhase, TrainingPlan, WeeklyPlan, WorkoutSession};

/// Generate the schedule for one week of a plan
///
/// Fails with [`EngineError::InvalidWeek`] when no phase span contains
/// `week_number`. The plan generator guarantees a full partition, but the
/// check stays because persisted plans can be corrupted externally.
pub fn generate_weekly_plan(
    plan: &TrainingPlan,
    week_number: u32,
) -> Result<WeeklyPlan, EngineError> {
    let phase = plan
        .phases
        .iter()
        .find(|p| p.contains_week(week_number))
        .ok_or(EngineError::InvalidWeek {
            week: week_number,
            duration: plan.duration,
        })?;

    // Progress through the phase in [0, 1): the ramp reaches the top of the
    // range only in the limit, never on the last week itself.
    let span_len = phase.end_week - phase.start_week + 1;
    let week_position = f64::from(week_number - phase.start_week) / f64::from(span_len);
    let volume = lerp(phase.volume_range, week_position);
    let intensity = lerp(phase.intensity_range, week_position);

    // Absolute week-number check: a deload can land on the first week of a
    // phase when that week happens to be a multiple of the interval.
    let is_deload = week_number % DELOAD_WEEK_INTERVAL == 0
        && matches!(phase.phase, TrainingPhase::Build | TrainingPhase::Peak);
    let (volume, intensity) = if is_deload {
        debug!(
            week = week_number,
            phase = phase.phase.display_name(),
            "Scheduling deload week"
        );
        (
            volume * DELOAD_VOLUME_FACTOR,
            intensity * DELOAD_INTENSITY_FACTOR,
        )
    } else {
        (volume, intensity)
    };

    let workouts = generate_workouts(plan, phase, week_number, volume, intensity);

    Ok(WeeklyPlan {
        week_number,
        phase: phase.phase,
        planned_volume: volume,
        planned_intensity: intensity,
        actual_volume: None,
        actual_intensity: None,
        workouts,
        completed: false,
        notes: if is_deload {
            DELOAD_NOTE.to_string()
        } else {
            String::new()
        },
        training_load: Some(calculate_training_load(volume, intensity)),
    })
}

fn lerp(range: [f64; 2], position: f64) -> f64 {
    range[0] + (range[1] - range[0]) * position
}

/// One session per training day, drawn from the phase's workout template
///
/// Policy: when `days_per_week` exceeds the template length the week is
/// capped at the template; the remaining days are rest days. Volume and
/// intensity are split evenly across sessions rather than varied per type.
fn generate_workouts(
    plan: &TrainingPlan,
    phase: &PhasePlan,
    week_number: u32,
    volume: f64,
    intensity: f64,
) -> Vec<WorkoutSession> {
    let template = workout_template(phase.phase);
    let session_count = (plan.days_per_week as usize).min(template.len());
    let session_minutes = volume / f64::from(plan.days_per_week) * 60.0;

    (0..session_count)
        .map(|i| {
            let day = i as u32 + 1;
            let workout_type = template[i];
            WorkoutSession {
                id: format!("{}_w{}_d{}", plan.id, week_number, day),
                day,
                workout_type,
                duration: session_minutes,
                intensity,
                focus: phase.focus[i % phase.focus.len()].clone(),
                drills: drill_recommendations(workout_type)
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
                completed: false,
                actual_duration: None,
                rpe: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FitnessLevel, TrainingGoal, WorkoutType};
    use crate::planner::generate_periodized_plan;

    fn fitness_plan_12() -> TrainingPlan {
        generate_periodized_plan(
            TrainingGoal::Fitness,
            12,
            4,
            FitnessLevel::Intermediate,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_first_week_of_fitness_plan() {
        let plan = fitness_plan_12();
        let week = generate_weekly_plan(&plan, 1).unwrap();

        assert_eq!(week.phase, TrainingPhase::Base);
        // Capped by days_per_week, not the 5-entry base template
        assert_eq!(week.workouts.len(), 4);
        let types: Vec<_> = week.workouts.iter().map(|w| w.workout_type).collect();
        assert_eq!(
            types,
            vec![
                WorkoutType::Endurance,
                WorkoutType::Technique,
                WorkoutType::Endurance,
                WorkoutType::Technique,
            ]
        );
        // Week 1 sits at position 0: the bottom of the base ranges
        assert_eq!(week.planned_volume, 8.0 * 0.7);
        assert_eq!(week.planned_intensity, 6.0 * 0.6);
        assert_eq!(
            week.training_load,
            Some(week.planned_volume * week.planned_intensity)
        );
        assert!(week.notes.is_empty());
    }

    #[test]
    fn test_volume_ramps_monotonically_within_phase() {
        // 16-week base phase spans weeks 1-6 and never deloads
        let plan =
            generate_periodized_plan(TrainingGoal::Skill, 16, 4, FitnessLevel::Advanced, None)
                .unwrap();
        let mut previous = f64::MIN;
        for week in 1..=6 {
            let generated = generate_weekly_plan(&plan, week).unwrap();
            assert!(
                generated.planned_volume >= previous,
                "volume must not decrease through the phase"
            );
            previous = generated.planned_volume;
        }
    }

    #[test]
    fn test_deload_lands_on_multiple_of_four_in_build() {
        let plan = fitness_plan_12();
        // Week 8 is the last build week and a multiple of 4
        let week = generate_weekly_plan(&plan, 8).unwrap();
        assert_eq!(week.phase, TrainingPhase::Build);

        let build = &plan.phases[1];
        let position = f64::from(8 - build.start_week)
            / f64::from(build.end_week - build.start_week + 1);
        let raw_volume =
            build.volume_range[0] + (build.volume_range[1] - build.volume_range[0]) * position;
        let raw_intensity = build.intensity_range[0]
            + (build.intensity_range[1] - build.intensity_range[0]) * position;

        assert_eq!(week.planned_volume, raw_volume * 0.6);
        assert_eq!(week.planned_intensity, raw_intensity * 0.7);
        assert_eq!(week.notes, DELOAD_NOTE);
    }

    #[test]
    fn test_no_deload_outside_build_and_peak() {
        // Week 4 of the 12-week plan is a multiple of 4 but still base phase
        let plan = fitness_plan_12();
        let week = generate_weekly_plan(&plan, 4).unwrap();
        assert_eq!(week.phase, TrainingPhase::Base);
        assert!(week.notes.is_empty());

        let base = &plan.phases[0];
        let position = 3.0 / 4.0;
        let expected =
            base.volume_range[0] + (base.volume_range[1] - base.volume_range[0]) * position;
        assert_eq!(week.planned_volume, expected);
    }

    #[test]
    fn test_week_position_stays_below_one() {
        // Last week of a span interpolates strictly below the range max
        let plan = fitness_plan_12();
        let base = &plan.phases[0];
        let week = generate_weekly_plan(&plan, base.end_week).unwrap();
        assert!(week.planned_volume < base.volume_range[1]);
    }

    #[test]
    fn test_six_training_days_cap_at_template_length() {
        let plan =
            generate_periodized_plan(TrainingGoal::Fitness, 12, 6, FitnessLevel::Elite, None)
                .unwrap();
        let week = generate_weekly_plan(&plan, 1).unwrap();
        // Base template has 5 entries; the sixth day is a rest day
        assert_eq!(week.workouts.len(), 5);
        // Session minutes still divide by the scheduled days, not the cap
        let expected_minutes = week.planned_volume / 6.0 * 60.0;
        for session in &week.workouts {
            assert_eq!(session.duration, expected_minutes);
            assert_eq!(session.intensity, week.planned_intensity);
        }
    }

    #[test]
    fn test_sessions_cycle_focus_and_carry_drills() {
        let plan = fitness_plan_12();
        let week = generate_weekly_plan(&plan, 5).unwrap();
        let build_focus = &plan.phases[1].focus;
        for (i, session) in week.workouts.iter().enumerate() {
            assert_eq!(session.day, i as u32 + 1);
            assert_eq!(session.focus, build_focus[i % build_focus.len()]);
            assert!(!session.drills.is_empty());
            assert!(!session.completed);
        }
    }

    #[test]
    fn test_regeneration_is_idempotent() {
        let plan = fitness_plan_12();
        let first = generate_weekly_plan(&plan, 7).unwrap();
        let second = generate_weekly_plan(&plan, 7).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_week_is_rejected() {
        let plan = fitness_plan_12();
        let err = generate_weekly_plan(&plan, 13).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidWeek {
                week: 13,
                duration: 12
            }
        );
        assert!(generate_weekly_plan(&plan, 0).is_err());
    }

    #[test]
    fn test_corrupted_timeline_is_rejected() {
        // A stored plan can lose phases to external edits
        let mut plan = fitness_plan_12();
        plan.phases.truncate(2);
        let err = generate_weekly_plan(&plan, 9).unwrap_err();
        assert!(matches!(err, EngineError::InvalidWeek { week: 9, .. }));
    }
}
