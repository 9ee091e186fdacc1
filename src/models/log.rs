use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A meal the user logged, as stored by the diet tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedMeal {
    pub food_name: String,

    #[serde(default)]
    pub quantity: f64,

    pub calories: f64,

    #[serde(default)]
    pub protein: f64,

    #[serde(default)]
    pub carbs: f64,

    #[serde(default)]
    pub fats: f64,

    #[serde(default)]
    pub fiber: f64,

    pub date: NaiveDate,
}

/// Nutrition totals for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyNutrition {
    pub date: NaiveDate,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub fiber: f64,
}

impl DailyNutrition {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fats: 0.0,
            fiber: 0.0,
        }
    }

    pub fn add(&mut self, meal: &LoggedMeal) {
        self.calories += meal.calories;
        self.protein += meal.protein;
        self.carbs += meal.carbs;
        self.fats += meal.fats;
        self.fiber += meal.fiber;
    }
}

/// One recorded rehabilitation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub exercise: String,
    pub progress: f64,
    pub pain_level: f64,
    #[serde(alias = "createdAt")]
    pub recorded_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseProgress {
    pub name: String,
    pub progress_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PainReading {
    pub recorded_at: NaiveDateTime,
    pub level: f64,
}

/// Aggregated rehabilitation progress, newest entries first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RehabProgress {
    pub exercises: Vec<ExerciseProgress>,
    pub pain_history: Vec<PainReading>,
    pub overall_progress: f64,
    pub current_pain_level: f64,
}
