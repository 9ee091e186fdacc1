use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{FitError, Result};

/// Gender used to pick the BMR coefficients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    #[serde(alias = "Male", alias = "MALE")]
    Male,
    #[serde(alias = "Female", alias = "FEMALE")]
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Dietary goal driving the calorie multiplier and the meal catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    WeightLoss,
    WeightGain,
    #[default]
    Balance,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::WeightLoss, Goal::WeightGain, Goal::Balance];

    /// Lenient parse: separators and case are ignored, anything
    /// unrecognized falls back to `Balance`.
    pub fn parse(input: &str) -> Goal {
        let normalized: String = input
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "weightloss" => Goal::WeightLoss,
            "weightgain" => Goal::WeightGain,
            "balance" => Goal::Balance,
            _ => {
                tracing::warn!(goal = input, "unrecognized goal, using balance");
                Goal::Balance
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weightloss",
            Goal::WeightGain => "weightgain",
            Goal::Balance => "balance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::WeightGain => "Weight Gain",
            Goal::Balance => "Balanced",
        }
    }
}

impl From<&str> for Goal {
    fn from(value: &str) -> Self {
        Goal::parse(value)
    }
}

/// Body profile owned by a user account.
///
/// Every field is optional on disk; calculators check what they need.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, alias = "height")]
    pub height_cm: Option<f64>,

    #[serde(default, alias = "weight")]
    pub weight_kg: Option<f64>,

    #[serde(default, alias = "dob")]
    pub date_of_birth: Option<NaiveDate>,

    #[serde(default)]
    pub gender: Option<Gender>,
}

impl Profile {
    pub fn new(
        height_cm: f64,
        weight_kg: f64,
        date_of_birth: Option<NaiveDate>,
        gender: Gender,
    ) -> Self {
        Self {
            height_cm: Some(height_cm),
            weight_kg: Some(weight_kg),
            date_of_birth,
            gender: Some(gender),
        }
    }

    /// Height in centimetres, required to be present and positive.
    pub fn require_height(&self) -> Result<f64> {
        require_positive(self.height_cm, "height")
    }

    /// Weight in kilograms, required to be present and positive.
    pub fn require_weight(&self) -> Result<f64> {
        require_positive(self.weight_kg, "weight")
    }

    /// Gender, defaulting to male when unset.
    pub fn gender_or_default(&self) -> Gender {
        self.gender.unwrap_or_default()
    }
}

fn require_positive(value: Option<f64>, field: &str) -> Result<f64> {
    match value {
        None => Err(FitError::MissingProfile(field.to_string())),
        Some(v) if !v.is_finite() || v <= 0.0 => Err(FitError::InvalidInput(format!(
            "{} must be a positive number, got {}",
            field, v
        ))),
        Some(v) => Ok(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_parse_known() {
        assert_eq!(Goal::parse("weightloss"), Goal::WeightLoss);
        assert_eq!(Goal::parse("weight_gain"), Goal::WeightGain);
        assert_eq!(Goal::parse("Weight Loss"), Goal::WeightLoss);
        assert_eq!(Goal::parse("balance"), Goal::Balance);
    }

    #[test]
    fn test_goal_parse_defaults_to_balance() {
        assert_eq!(Goal::parse("bulk"), Goal::Balance);
        assert_eq!(Goal::parse(""), Goal::Balance);
    }

    #[test]
    fn test_profile_from_json_aliases() {
        let json = r#"{"height": 180, "weight": 82.5, "dob": "1990-04-12", "gender": "Female"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.height_cm, Some(180.0));
        assert_eq!(profile.weight_kg, Some(82.5));
        assert_eq!(profile.date_of_birth, NaiveDate::from_ymd_opt(1990, 4, 12));
        assert_eq!(profile.gender, Some(Gender::Female));
    }

    #[test]
    fn test_missing_fields_reported() {
        let profile = Profile::default();
        assert!(matches!(
            profile.require_height(),
            Err(FitError::MissingProfile(f)) if f == "height"
        ));
        assert!(matches!(
            profile.require_weight(),
            Err(FitError::MissingProfile(f)) if f == "weight"
        ));
        assert_eq!(profile.gender_or_default(), Gender::Male);
    }

    #[test]
    fn test_non_positive_height_rejected() {
        let mut profile = Profile::new(170.0, 70.0, None, Gender::Male);
        profile.height_cm = Some(0.0);
        assert!(matches!(profile.require_height(), Err(FitError::InvalidInput(_))));
    }
}
