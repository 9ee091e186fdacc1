use serde::Serialize;

use crate::models::Gender;

/// A single prescribed exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
}

impl Exercise {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            sets: None,
            reps: None,
            duration: None,
            frequency: None,
        }
    }

    pub fn sets(mut self, sets: u32) -> Self {
        self.sets = Some(sets);
        self
    }

    pub fn reps(mut self, reps: &str) -> Self {
        self.reps = Some(reps.to_string());
        self
    }

    pub fn duration(mut self, duration: &str) -> Self {
        self.duration = Some(duration.to_string());
        self
    }

    pub fn frequency(mut self, frequency: &str) -> Self {
        self.frequency = Some(frequency.to_string());
        self
    }
}

/// A named stage of a rehabilitation progression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RehabPhase {
    pub name: String,
    pub goal: String,
    pub exercises: Vec<Exercise>,
}

/// Catalog entry: the full phase ladder for one injury.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InjuryPlan {
    pub injury_type: String,
    pub phases: Vec<RehabPhase>,
}

/// Patient snapshot attached to a generated plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientDetails {
    pub injury_type: String,
    pub age_years: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    /// Rounded to two decimals.
    pub bmi: f64,
}

/// An injury plan adjusted for one patient.
///
/// `starting_phase_index` is advisory; `phases` always carries the full
/// ladder in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalizedRehabPlan {
    pub injury_type: String,
    pub pain_level: f64,
    pub starting_phase_index: usize,
    pub starting_phase: String,
    pub extra_sets: u32,
    pub patient: PatientDetails,
    pub phases: Vec<RehabPhase>,
}

impl PersonalizedRehabPlan {
    pub fn current_phase(&self) -> Option<&RehabPhase> {
        self.phases.get(self.starting_phase_index)
    }
}
