// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Progress Tracking
//!
//! Records workout completions against a weekly plan and rolls the results
//! up into the week's actual volume and intensity, which in turn feed the
//! training load history. These are pure record mutations; persistence is
//! the store's job.

use crate::errors::EngineError;
use crate::load::calculate_training_load;
use crate::models::{TrainingLoad, WeeklyPlan};

/// Mark one workout complete and refresh the week's actuals
///
/// Sets the session's actual duration and RPE, recomputes the week's actual
/// volume (hours of completed work) and actual intensity (mean RPE over
/// completed sessions), and flips the week to completed once every session
/// is done. Returns the refreshed [`TrainingLoad`] sample for the week, or
/// `None` when the actuals are not yet meaningful (zero volume recorded).
pub fn complete_workout(
    week: &mut WeeklyPlan,
    workout_id: &str,
    actual_duration_min: f64,
    rpe: f64,
) -> Result<Option<TrainingLoad>, EngineError> {
    let session = week
        .workouts
        .iter_mut()
        .find(|w| w.id == workout_id)
        .ok_or_else(|| EngineError::WorkoutNotFound {
            week: week.week_number,
            workout_id: workout_id.to_string(),
        })?;

    session.completed = true;
    session.actual_duration = Some(actual_duration_min);
    session.rpe = Some(rpe);

    let completed: Vec<_> = week.workouts.iter().filter(|w| w.completed).collect();
    // completed is non-empty: the session above was just marked
    let volume_hours = completed
        .iter()
        .map(|w| w.actual_duration.unwrap_or(0.0))
        .sum::<f64>()
        / 60.0;
    let mean_rpe =
        completed.iter().map(|w| w.rpe.unwrap_or(0.0)).sum::<f64>() / completed.len() as f64;

    week.actual_volume = Some(volume_hours);
    week.actual_intensity = Some(mean_rpe);
    week.completed = week.workouts.iter().all(|w| w.completed);

    if volume_hours > 0.0 && mean_rpe > 0.0 {
        Ok(Some(TrainingLoad {
            week_number: week.week_number,
            volume: volume_hours,
            intensity: mean_rpe,
            total_load: calculate_training_load(volume_hours, mean_rpe),
            acwr: None,
        }))
    } else {
        Ok(None)
    }
}

/// Fraction of scheduled workouts completed across the given weeks
///
/// Returns `0.0` when nothing has been scheduled yet.
pub fn completion_rate(weeks: &[WeeklyPlan]) -> f64 {
    let scheduled: usize = weeks.iter().map(|w| w.workouts.len()).sum();
    if scheduled == 0 {
        return 0.0;
    }
    let completed: usize = weeks
        .iter()
        .map(|w| w.workouts.iter().filter(|s| s.completed).count())
        .sum();
    completed as f64 / scheduled as f64
}
