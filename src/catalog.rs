// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Phase Catalog
//!
//! Static descriptors for each training phase (objectives, focus areas,
//! volume/intensity multipliers), the per-phase weekly workout templates,
//! and the drill library keyed by workout type. The multipliers scale the
//! baseline ranges in [`crate::constants::periodization`]; everything else
//! is display material surfaced to the athlete.

use serde::{Deserialize, Serialize};

use crate::models::{TrainingPhase, WorkoutType};

/// Static description of a training phase
#[derive(Debug, Clone, Copy)]
pub struct PhaseDescriptor {
    /// What the phase is meant to achieve
    pub objectives: &'static [&'static str],
    /// Focus areas, cycled across a week's sessions
    pub focus: &'static [&'static str],
    /// Scales the baseline weekly volume range
    pub volume_multiplier: f64,
    /// Scales the baseline intensity range
    pub intensity_multiplier: f64,
}

const BASE: PhaseDescriptor = PhaseDescriptor {
    objectives: &[
        "Build aerobic foundation",
        "Develop general fitness",
        "Master fundamental techniques",
    ],
    focus: &[
        "Endurance",
        "Basic techniques",
        "Movement patterns",
        "Consistency",
    ],
    volume_multiplier: 0.7,
    intensity_multiplier: 0.6,
};

const BUILD: PhaseDescriptor = PhaseDescriptor {
    objectives: &[
        "Increase training intensity",
        "Develop specific skills",
        "Build strength and power",
    ],
    focus: &[
        "Sport-specific drills",
        "Speed work",
        "Tactical training",
        "Match simulation",
    ],
    volume_multiplier: 1.0,
    intensity_multiplier: 0.8,
};

const PEAK: PhaseDescriptor = PhaseDescriptor {
    objectives: &[
        "Achieve peak performance",
        "Fine-tune techniques",
        "Maximize competition readiness",
    ],
    focus: &[
        "High-intensity training",
        "Match play",
        "Competition simulation",
        "Mental preparation",
    ],
    volume_multiplier: 0.9,
    intensity_multiplier: 0.95,
};

const TAPER: PhaseDescriptor = PhaseDescriptor {
    objectives: &[
        "Reduce fatigue",
        "Maintain fitness",
        "Optimize recovery for competition",
    ],
    focus: &[
        "Light technical work",
        "Active recovery",
        "Mental rehearsal",
        "Strategy review",
    ],
    volume_multiplier: 0.5,
    intensity_multiplier: 0.7,
};

const RECOVERY: PhaseDescriptor = PhaseDescriptor {
    objectives: &["Full recovery", "Prevent burnout", "Prepare for next cycle"],
    focus: &[
        "Light activity",
        "Cross-training",
        "Injury prevention",
        "Rest",
    ],
    volume_multiplier: 0.4,
    intensity_multiplier: 0.5,
};

/// Look up the static descriptor for a phase
pub fn phase_descriptor(phase: TrainingPhase) -> &'static PhaseDescriptor {
    match phase {
        TrainingPhase::Base => &BASE,
        TrainingPhase::Build => &BUILD,
        TrainingPhase::Peak => &PEAK,
        TrainingPhase::Taper => &TAPER,
        TrainingPhase::Recovery => &RECOVERY,
    }
}

/// Ordered workout types scheduled across a week of the given phase
///
/// A week schedules at most `template.len()` sessions; a plan with more
/// training days than the template leaves the excess days as rest days.
pub fn workout_template(phase: TrainingPhase) -> &'static [WorkoutType] {
    use WorkoutType::*;
    match phase {
        TrainingPhase::Base => &[Endurance, Technique, Endurance, Technique, Endurance],
        TrainingPhase::Build => &[Technique, Speed, Match, Strength, Endurance],
        TrainingPhase::Peak => &[Match, Speed, Match, Technique, Match],
        TrainingPhase::Taper => &[Technique, Recovery, Match, Recovery],
        TrainingPhase::Recovery => &[Recovery, Technique, Recovery],
    }
}

/// Recommended drills for a workout type
pub fn drill_recommendations(workout_type: WorkoutType) -> &'static [&'static str] {
    match workout_type {
        WorkoutType::Technique => &[
            "Shadow badminton",
            "Multi-shuttle drills",
            "Footwork patterns",
            "Clear technique",
        ],
        WorkoutType::Endurance => &[
            "Continuous rallies",
            "Court movement drills",
            "Long rallies",
            "Stamina building",
        ],
        WorkoutType::Speed => &[
            "Fast-paced multi-shuttle",
            "Reaction drills",
            "Speed smashes",
            "Quick net shots",
        ],
        WorkoutType::Strength => &[
            "Jump smash practice",
            "Resistance training",
            "Power clears",
            "Explosive movements",
        ],
        WorkoutType::Match => &[
            "Practice matches",
            "Competition simulation",
            "Tactical scenarios",
            "Match analysis",
        ],
        WorkoutType::Recovery => &[
            "Light rallies",
            "Stretching",
            "Mobility work",
            "Active recovery",
        ],
    }
}

/// Phase guidance surfaced to the athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseRecommendations {
    pub objectives: Vec<String>,
    pub focus: Vec<String>,
    pub volume_multiplier: f64,
    pub intensity_multiplier: f64,
}

/// Objectives, focus areas and multipliers for a phase, as an owned record
pub fn phase_recommendations(phase: TrainingPhase) -> PhaseRecommendations {
    let desc = phase_descriptor(phase);
    PhaseRecommendations {
        objectives: desc.objectives.iter().map(ToString::to_string).collect(),
        focus: desc.focus.iter().map(ToString::to_string).collect(),
        volume_multiplier: desc.volume_multiplier,
        intensity_multiplier: desc.intensity_multiplier,
    }
}
