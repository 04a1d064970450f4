// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Command-line interface over the training store and engine

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::catalog::phase_recommendations;
use crate::difficulty::{adjust_plan_difficulty, adjustment_factor};
use crate::load::AcwrStatus;
use crate::models::{FitnessLevel, TrainingGoal, TrainingPhase, WeeklyPlan};
use crate::planner::generate_periodized_plan;
use crate::storage::{KvStore, TrainingStore};
use crate::weekly::generate_weekly_plan;

#[derive(Debug, Parser)]
#[command(name = "shuttleplan", version, about = "Periodized badminton training planner")]
pub struct Cli {
    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GoalArg {
    Tournament,
    Fitness,
    Skill,
    Competition,
}

impl From<GoalArg> for TrainingGoal {
    fn from(value: GoalArg) -> Self {
        match value {
            GoalArg::Tournament => Self::Tournament,
            GoalArg::Fitness => Self::Fitness,
            GoalArg::Skill => Self::Skill,
            GoalArg::Competition => Self::Competition,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LevelArg {
    Beginner,
    Intermediate,
    Advanced,
    Elite,
}

impl From<LevelArg> for FitnessLevel {
    fn from(value: LevelArg) -> Self {
        match value {
            LevelArg::Beginner => Self::Beginner,
            LevelArg::Intermediate => Self::Intermediate,
            LevelArg::Advanced => Self::Advanced,
            LevelArg::Elite => Self::Elite,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PhaseArg {
    Base,
    Build,
    Peak,
    Taper,
    Recovery,
}

impl From<PhaseArg> for TrainingPhase {
    fn from(value: PhaseArg) -> Self {
        match value {
            PhaseArg::Base => Self::Base,
            PhaseArg::Build => Self::Build,
            PhaseArg::Peak => Self::Peak,
            PhaseArg::Taper => Self::Taper,
            PhaseArg::Recovery => Self::Recovery,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new periodized plan and make it active
    Create {
        #[arg(long, value_enum)]
        goal: GoalArg,
        /// Plan length in weeks (8, 12 or 16)
        #[arg(long)]
        duration: u32,
        /// Training days per week (3-6)
        #[arg(long, default_value_t = 4)]
        days_per_week: u32,
        #[arg(long, value_enum, default_value = "intermediate")]
        fitness_level: LevelArg,
        /// Competition date, YYYY-MM-DD
        #[arg(long)]
        competition_date: Option<NaiveDate>,
    },
    /// Show one week's schedule, generating it on first view
    Week {
        /// Week number; defaults to the plan's current week
        number: Option<u32>,
    },
    /// Record a completed workout
    Complete {
        #[arg(long)]
        week: u32,
        /// Workout id as printed by `week`
        #[arg(long)]
        workout: String,
        /// Actual duration in minutes
        #[arg(long)]
        duration: f64,
        /// Rate of perceived exertion, 1-10
        #[arg(long)]
        rpe: f64,
    },
    /// Advance the plan to the next (or a given) week
    Advance {
        number: Option<u32>,
    },
    /// Summarize the active plan, completion rate and load status
    Status,
    /// Print the training load history with ACWR
    Loads,
    /// Rescale future volume from the historical completion rate
    Adjust,
    /// Show objectives and focus areas for a phase
    PhaseInfo {
        #[arg(value_enum)]
        phase: PhaseArg,
    },
    /// Archive the active plan to history
    Archive,
}

/// Execute one parsed command against the store
pub fn run<S: KvStore>(command: Command, store: &mut TrainingStore<S>) -> Result<()> {
    match command {
        Command::Create {
            goal,
            duration,
            days_per_week,
            fitness_level,
            competition_date,
        } => {
            if store.active_plan()?.is_some() {
                bail!("an active plan already exists; run `shuttleplan archive` first");
            }
            let plan = generate_periodized_plan(
                goal.into(),
                duration,
                days_per_week,
                fitness_level.into(),
                competition_date,
            )?;
            store.save_active_plan(&plan)?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
            Ok(())
        }
        Command::Week { number } => {
            let plan = require_active_plan(store)?;
            let week_number = number.unwrap_or(plan.current_week);
            let week = realized_week(store, &plan.id, &plan, week_number)?;
            println!("{}", serde_json::to_string_pretty(&week)?);
            Ok(())
        }
        Command::Complete {
            week,
            workout,
            duration,
            rpe,
        } => {
            let plan = require_active_plan(store)?;
            store.complete_workout(&plan.id, week, &workout, duration, rpe)?;
            println!("Recorded {workout} ({duration} min at RPE {rpe})");
            Ok(())
        }
        Command::Advance { number } => {
            let plan = require_active_plan(store)?;
            let next = number.unwrap_or(plan.current_week + 1);
            if next > plan.duration {
                bail!(
                    "week {next} is past the end of the plan ({} weeks); archive it instead",
                    plan.duration
                );
            }
            store.update_plan_progress(next)?;
            println!("Now in week {next} of {}", plan.duration);
            Ok(())
        }
        Command::Status => {
            let plan = require_active_plan(store)?;
            let rate = store.completion_rate(&plan.id)?;
            println!("{} ({})", plan.name, plan.id);
            println!(
                "Week {}/{}, {} days/week",
                plan.current_week, plan.duration, plan.days_per_week
            );
            println!("Completion rate: {:.0}%", rate * 100.0);
            let loads = store.training_loads(&plan.id)?;
            if let Some(ratio) = loads.last().and_then(|l| l.acwr) {
                println!(
                    "ACWR: {:.2} ({})",
                    ratio,
                    AcwrStatus::from_ratio(ratio).display_name()
                );
            } else {
                println!("ACWR: not enough load history yet");
            }
            Ok(())
        }
        Command::Loads => {
            let plan = require_active_plan(store)?;
            let loads = store.training_loads(&plan.id)?;
            println!("{}", serde_json::to_string_pretty(&loads)?);
            Ok(())
        }
        Command::Adjust => {
            let plan = require_active_plan(store)?;
            let rate = store.completion_rate(&plan.id)?;
            let factor = adjustment_factor(rate);
            if factor == 1.0 {
                println!("Completion rate {:.0}%: no adjustment needed", rate * 100.0);
                return Ok(());
            }
            let adjusted = adjust_plan_difficulty(plan, rate);
            store.save_active_plan(&adjusted)?;
            println!(
                "Completion rate {:.0}%: volume targets scaled by {factor}",
                rate * 100.0
            );
            Ok(())
        }
        Command::PhaseInfo { phase } => {
            let rec = phase_recommendations(phase.into());
            println!("{}", serde_json::to_string_pretty(&rec)?);
            Ok(())
        }
        Command::Archive => {
            if store.active_plan()?.is_none() {
                bail!("no active plan to archive");
            }
            store.clear_active_plan()?;
            println!("Plan archived");
            Ok(())
        }
    }
}

fn require_active_plan<S: KvStore>(
    store: &TrainingStore<S>,
) -> Result<crate::models::TrainingPlan> {
    store
        .active_plan()?
        .context("no active plan; run `shuttleplan create` first")
}

/// The persisted week when it exists, otherwise generate and persist it
///
/// Weeks are created lazily on first view; once one has been mutated by
/// completions, the stored version wins over regeneration.
fn realized_week<S: KvStore>(
    store: &mut TrainingStore<S>,
    plan_id: &str,
    plan: &crate::models::TrainingPlan,
    week_number: u32,
) -> Result<WeeklyPlan> {
    if let Some(existing) = store.weekly_plan(plan_id, week_number)? {
        return Ok(existing);
    }
    let week = generate_weekly_plan(plan, week_number)?;
    store.save_weekly_plan(plan_id, week.clone())?;
    Ok(week)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store() -> TrainingStore<MemoryStore> {
        TrainingStore::new(MemoryStore::new())
    }

    fn create_command() -> Command {
        Command::Create {
            goal: GoalArg::Fitness,
            duration: 12,
            days_per_week: 4,
            fitness_level: LevelArg::Intermediate,
            competition_date: None,
        }
    }

    #[test]
    fn test_create_then_duplicate_is_rejected() {
        let mut store = store();
        run(create_command(), &mut store).unwrap();
        assert!(store.active_plan().unwrap().is_some());

        let err = run(create_command(), &mut store).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_week_view_persists_lazily() {
        let mut store = store();
        run(create_command(), &mut store).unwrap();
        let plan = store.active_plan().unwrap().unwrap();
        assert!(store.weekly_plan(&plan.id, 1).unwrap().is_none());

        run(Command::Week { number: Some(1) }, &mut store).unwrap();
        assert!(store.weekly_plan(&plan.id, 1).unwrap().is_some());
    }

    #[test]
    fn test_week_view_prefers_stored_mutations() {
        let mut store = store();
        run(create_command(), &mut store).unwrap();
        run(Command::Week { number: Some(1) }, &mut store).unwrap();

        let plan = store.active_plan().unwrap().unwrap();
        let week = store.weekly_plan(&plan.id, 1).unwrap().unwrap();
        let workout_id = week.workouts[0].id.clone();
        store
            .complete_workout(&plan.id, 1, &workout_id, 75.0, 6.0)
            .unwrap();

        // Viewing again must not regenerate over the completion
        run(Command::Week { number: Some(1) }, &mut store).unwrap();
        let again = store.weekly_plan(&plan.id, 1).unwrap().unwrap();
        assert!(again.workouts[0].completed);
    }

    #[test]
    fn test_advance_past_end_is_rejected() {
        let mut store = store();
        run(create_command(), &mut store).unwrap();
        let err = run(Command::Advance { number: Some(13) }, &mut store).unwrap_err();
        assert!(err.to_string().contains("past the end"));
        run(Command::Advance { number: Some(12) }, &mut store).unwrap();
        assert_eq!(store.active_plan().unwrap().unwrap().current_week, 12);
    }

    #[test]
    fn test_archive_requires_active_plan() {
        let mut store = store();
        assert!(run(Command::Archive, &mut store).is_err());
        run(create_command(), &mut store).unwrap();
        run(Command::Archive, &mut store).unwrap();
        assert!(store.active_plan().unwrap().is_none());
        assert_eq!(store.plan_history().unwrap().len(), 1);
    }
}
