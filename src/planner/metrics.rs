use chrono::NaiveDate;
use serde::Serialize;

use crate::error::Result;
use crate::models::{Gender, Goal, Profile};
use crate::planner::constants::*;

/// Body metrics derived from a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyMetrics {
    pub age_years: u32,
    pub bmi: f64,
    pub bmr: f64,
}

/// Metrics plus the daily calorie target for a goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalorieTarget {
    pub metrics: BodyMetrics,
    pub goal: Goal,
    pub daily_calories: u32,
}

/// Whole years between `date_of_birth` and `today`.
///
/// Falls back to `DEFAULT_AGE_YEARS` without a birth date; birth dates in
/// the future give 0.
pub fn age_years(date_of_birth: Option<NaiveDate>, today: NaiveDate) -> u32 {
    match date_of_birth {
        Some(dob) => {
            let days = (today - dob).num_days() as f64;
            (days / DAYS_PER_YEAR).floor().max(0.0) as u32
        }
        None => DEFAULT_AGE_YEARS,
    }
}

/// Body mass index: kg / m².
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Basal metabolic rate via the revised Harris-Benedict equation.
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let age = age_years as f64;
    match gender {
        Gender::Female => {
            FEMALE_BMR_BASE + FEMALE_BMR_WEIGHT * weight_kg + FEMALE_BMR_HEIGHT * height_cm
                - FEMALE_BMR_AGE * age
        }
        Gender::Male => {
            MALE_BMR_BASE + MALE_BMR_WEIGHT * weight_kg + MALE_BMR_HEIGHT * height_cm
                - MALE_BMR_AGE * age
        }
    }
}

/// Daily calorie target: `round(bmr * activity * goal)`.
pub fn daily_calories(bmr: f64, goal: Goal) -> u32 {
    (bmr * ACTIVITY_MULTIPLIER * goal_multiplier(goal)).round().max(0.0) as u32
}

/// Derive age, BMI and BMR from a profile.
///
/// # Errors
///
/// `MissingProfile` when height or weight is absent.
pub fn compute_metrics(profile: &Profile, today: NaiveDate) -> Result<BodyMetrics> {
    let height_cm = profile.require_height()?;
    let weight_kg = profile.require_weight()?;
    let age_years = age_years(profile.date_of_birth, today);

    let metrics = BodyMetrics {
        age_years,
        bmi: bmi(weight_kg, height_cm),
        bmr: bmr(weight_kg, height_cm, age_years, profile.gender_or_default()),
    };

    tracing::debug!(
        age = metrics.age_years,
        bmi = metrics.bmi,
        bmr = metrics.bmr,
        "computed body metrics"
    );

    Ok(metrics)
}

/// Metrics and the daily calorie target for `goal`.
pub fn compute_metrics_and_calories(
    profile: &Profile,
    goal: Goal,
    today: NaiveDate,
) -> Result<CalorieTarget> {
    let metrics = compute_metrics(profile, today)?;
    let daily_calories = daily_calories(metrics.bmr, goal);

    tracing::debug!(goal = goal.as_str(), daily_calories, "computed calorie target");

    Ok(CalorieTarget {
        metrics,
        goal,
        daily_calories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FitError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_from_birth_date() {
        let today = date(2024, 6, 15);
        assert_eq!(age_years(Some(date(1994, 6, 14)), today), 30);
        assert_eq!(age_years(Some(date(2000, 1, 1)), today), 24);
    }

    #[test]
    fn test_age_defaults_without_birth_date() {
        assert_eq!(age_years(None, date(2024, 1, 1)), DEFAULT_AGE_YEARS);
    }

    #[test]
    fn test_age_future_birth_date_is_zero() {
        assert_eq!(age_years(Some(date(2030, 1, 1)), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_bmi() {
        assert!((bmi(70.0, 175.0) - 22.857142857).abs() < 1e-6);
    }

    #[test]
    fn test_bmr_male_and_female() {
        let male = bmr(70.0, 170.0, 30, Gender::Male);
        assert!((male - 1671.672).abs() < 1e-9);

        let female = bmr(60.0, 165.0, 25, Gender::Female);
        // 447.593 + 554.82 + 511.17 - 108.25
        assert!((female - 1405.333).abs() < 1e-9);
    }

    #[test]
    fn test_daily_calories_per_goal() {
        assert_eq!(daily_calories(1600.0, Goal::Balance), 2200);
        assert_eq!(daily_calories(1600.0, Goal::WeightLoss), 1760);
        assert_eq!(daily_calories(1600.0, Goal::WeightGain), 2640);
    }

    #[test]
    fn test_missing_weight_is_reported() {
        let profile = Profile {
            height_cm: Some(170.0),
            ..Default::default()
        };
        let err = compute_metrics(&profile, date(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, FitError::MissingProfile(ref f) if f == "weight"));
    }
}
