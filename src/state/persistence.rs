use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::models::{LoggedMeal, Profile, ProgressEntry, WeeklyPlan};

fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a body profile from a JSON file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Profile> {
    load_json(path)
}

/// Load logged meals from a JSON array.
pub fn load_meal_log<P: AsRef<Path>>(path: P) -> Result<Vec<LoggedMeal>> {
    load_json(path)
}

/// Load rehabilitation progress entries from a JSON array.
pub fn load_progress_log<P: AsRef<Path>>(path: P) -> Result<Vec<ProgressEntry>> {
    load_json(path)
}

/// Write any serializable value as pretty JSON.
pub fn save_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write a weekly plan as CSV, one row per day and meal.
pub fn export_weekly_plan_csv<P: AsRef<Path>>(plan: &WeeklyPlan, path: P) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["day", "meal", "food", "calories", "protein_g", "carbs_g", "fats_g"])?;

    for day in &plan.days {
        for (slot, meal) in day.meals() {
            wtr.write_record([
                day.day.clone(),
                slot.as_str().to_string(),
                meal.food_name.clone(),
                meal.calories.to_string(),
                meal.protein_g.to_string(),
                meal.carbs_g.to_string(),
                meal.fats_g.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
