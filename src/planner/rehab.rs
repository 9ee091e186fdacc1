use chrono::NaiveDate;
use strsim::jaro_winkler;

use crate::catalog::{find_injury, injury_names};
use crate::error::{FitError, Result};
use crate::models::{PatientDetails, PersonalizedRehabPlan, Profile, RehabPhase};
use crate::planner::constants::*;
use crate::planner::metrics::{age_years, bmi};

/// Starting phase for a self-reported pain level.
///
/// 0 = acute (pain >= 7), 1 = recovery (pain >= 4), 2 = strengthening.
pub fn starting_phase_index(pain_level: f64) -> usize {
    if pain_level >= ACUTE_PAIN_THRESHOLD {
        0
    } else if pain_level >= RECOVERY_PAIN_THRESHOLD {
        1
    } else {
        2
    }
}

/// Sets added to every counted exercise: one per 20 kg of body weight.
pub fn extra_sets(weight_kg: f64) -> u32 {
    (weight_kg / KG_PER_EXTRA_SET).floor().max(0.0) as u32
}

/// Copy of `phases` with `extra` added to every exercise that has sets.
pub fn scale_phases(phases: &[RehabPhase], extra: u32) -> Vec<RehabPhase> {
    phases
        .iter()
        .map(|phase| {
            let mut phase = phase.clone();
            for exercise in &mut phase.exercises {
                if let Some(sets) = exercise.sets.as_mut() {
                    *sets = sets.saturating_add(extra);
                }
            }
            phase
        })
        .collect()
}

/// Build a rehabilitation plan for an injury, pain level and profile.
///
/// Every phase is returned in catalog order; the starting phase is
/// attached as metadata only.
///
/// # Errors
///
/// - `UnknownInjury` if the injury is not in the catalog
/// - `MissingProfile` if the profile has no weight or height
/// - `InvalidInput` if the pain level is not a number in 1..=10
pub fn generate_rehab_plan(
    injury_type: &str,
    pain_level: f64,
    profile: &Profile,
    today: NaiveDate,
) -> Result<PersonalizedRehabPlan> {
    let plan = find_injury(injury_type)
        .ok_or_else(|| FitError::UnknownInjury(injury_type.trim().to_string()))?;

    if !pain_level.is_finite() || !(MIN_PAIN_LEVEL..=MAX_PAIN_LEVEL).contains(&pain_level) {
        return Err(FitError::InvalidInput(format!(
            "pain level must be between {} and {}, got {}",
            MIN_PAIN_LEVEL, MAX_PAIN_LEVEL, pain_level
        )));
    }

    let weight_kg = profile.require_weight()?;
    let height_cm = profile.require_height()?;

    let index = starting_phase_index(pain_level);
    let extra = extra_sets(weight_kg);
    let phases = scale_phases(&plan.phases, extra);
    let starting_phase = phases
        .get(index)
        .map(|p| p.name.clone())
        .unwrap_or_default();

    tracing::debug!(
        injury = plan.injury_type.as_str(),
        pain_level,
        starting_phase = starting_phase.as_str(),
        extra_sets = extra,
        "generated rehabilitation plan"
    );

    Ok(PersonalizedRehabPlan {
        injury_type: plan.injury_type.clone(),
        pain_level,
        starting_phase_index: index,
        starting_phase,
        extra_sets: extra,
        patient: PatientDetails {
            injury_type: plan.injury_type.clone(),
            age_years: age_years(profile.date_of_birth, today),
            gender: profile.gender_or_default(),
            height_cm,
            weight_kg,
            bmi: (bmi(weight_kg, height_cm) * 100.0).round() / 100.0,
        },
        phases,
    })
}

/// Catalog injury names resembling `input`, best match first.
pub fn suggest_injuries(input: &str) -> Vec<&'static str> {
    let needle = input.trim().to_lowercase();

    let mut candidates: Vec<(&'static str, f64)> = injury_names()
        .into_iter()
        .map(|name| (name, jaro_winkler(&name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().map(|(name, _)| name).collect()
}
