use crate::models::Goal;

// ─────────────────────────────────────────────────────────────────────────────
// Harris-Benedict (revised) coefficients
// ─────────────────────────────────────────────────────────────────────────────

pub const MALE_BMR_BASE: f64 = 88.362;
pub const MALE_BMR_WEIGHT: f64 = 13.397;
pub const MALE_BMR_HEIGHT: f64 = 4.799;
pub const MALE_BMR_AGE: f64 = 5.677;

pub const FEMALE_BMR_BASE: f64 = 447.593;
pub const FEMALE_BMR_WEIGHT: f64 = 9.247;
pub const FEMALE_BMR_HEIGHT: f64 = 3.098;
pub const FEMALE_BMR_AGE: f64 = 4.330;

/// Age used when the profile has no date of birth.
pub const DEFAULT_AGE_YEARS: u32 = 30;

/// Mean days per year used to derive age.
pub const DAYS_PER_YEAR: f64 = 365.25;

// ─────────────────────────────────────────────────────────────────────────────
// Calorie target
// ─────────────────────────────────────────────────────────────────────────────

/// Lightly active (1-3 days/week). The only supported activity level.
pub const ACTIVITY_MULTIPLIER: f64 = 1.375;

pub const WEIGHTLOSS_MULTIPLIER: f64 = 0.8;
pub const WEIGHTGAIN_MULTIPLIER: f64 = 1.2;
pub const BALANCE_MULTIPLIER: f64 = 1.0;

/// Daily calories are split evenly across this many meals.
pub const MEALS_PER_DAY: f64 = 3.0;

pub const WEEK_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

// ─────────────────────────────────────────────────────────────────────────────
// Rehabilitation
// ─────────────────────────────────────────────────────────────────────────────

/// Pain at or above this starts in the acute phase.
pub const ACUTE_PAIN_THRESHOLD: f64 = 7.0;

/// Pain at or above this (and below acute) starts in recovery.
pub const RECOVERY_PAIN_THRESHOLD: f64 = 4.0;

/// Self-reported pain scale bounds, inclusive.
pub const MIN_PAIN_LEVEL: f64 = 1.0;
pub const MAX_PAIN_LEVEL: f64 = 10.0;

/// One extra set per this many kilograms of body weight.
pub const KG_PER_EXTRA_SET: f64 = 20.0;

// ─────────────────────────────────────────────────────────────────────────────
// Summaries
// ─────────────────────────────────────────────────────────────────────────────

/// Days before the end date included in the weekly summary.
pub const SUMMARY_LOOKBACK_DAYS: i64 = 7;

/// Minimum Jaro-Winkler score for an injury name suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Calorie multiplier for a goal.
pub fn goal_multiplier(goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => WEIGHTLOSS_MULTIPLIER,
        Goal::WeightGain => WEIGHTGAIN_MULTIPLIER,
        Goal::Balance => BALANCE_MULTIPLIER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_multipliers() {
        assert_eq!(goal_multiplier(Goal::WeightLoss), 0.8);
        assert_eq!(goal_multiplier(Goal::WeightGain), 1.2);
        assert_eq!(goal_multiplier(Goal::Balance), 1.0);
        assert_eq!(goal_multiplier(Goal::parse("keto")), 1.0);
    }
}
