use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::models::{
    DailyNutrition, ExerciseProgress, LoggedMeal, PainReading, ProgressEntry, RehabProgress,
};
use crate::planner::constants::SUMMARY_LOOKBACK_DAYS;

/// Per-day nutrition totals from `end - 7 days` through `end`, inclusive.
///
/// Days with no logged meals are zero-filled; meals outside the window
/// are ignored.
pub fn weekly_summary(meals: &[LoggedMeal], end: NaiveDate) -> Vec<DailyNutrition> {
    let start = end - Duration::days(SUMMARY_LOOKBACK_DAYS);

    let mut by_day: BTreeMap<NaiveDate, DailyNutrition> = start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|d| (d, DailyNutrition::empty(d)))
        .collect();

    for meal in meals {
        if let Some(day) = by_day.get_mut(&meal.date) {
            day.add(meal);
        }
    }

    by_day.into_values().collect()
}

/// Summarize recorded rehabilitation sessions, newest first.
pub fn summarize_progress(entries: &[ProgressEntry]) -> RehabProgress {
    if entries.is_empty() {
        return RehabProgress {
            exercises: vec![ExerciseProgress {
                name: "No exercises yet".to_string(),
                progress_score: 0.0,
            }],
            pain_history: Vec::new(),
            overall_progress: 0.0,
            current_pain_level: 0.0,
        };
    }

    let mut sorted: Vec<&ProgressEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));

    let total: f64 = sorted.iter().map(|e| e.progress).sum();

    RehabProgress {
        exercises: sorted
            .iter()
            .map(|e| ExerciseProgress {
                name: e.exercise.clone(),
                progress_score: e.progress,
            })
            .collect(),
        pain_history: sorted
            .iter()
            .map(|e| PainReading {
                recorded_at: e.recorded_at,
                level: e.pain_level,
            })
            .collect(),
        overall_progress: (total / sorted.len() as f64).round(),
        current_pain_level: sorted[0].pain_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn logged(date: NaiveDate, calories: f64, protein: f64) -> LoggedMeal {
        LoggedMeal {
            food_name: "Test".to_string(),
            quantity: 1.0,
            calories,
            protein,
            carbs: 10.0,
            fats: 5.0,
            fiber: 2.0,
            date,
        }
    }

    #[test]
    fn test_weekly_summary_fills_every_day() {
        let summary = weekly_summary(&[], date(2024, 5, 10));
        assert_eq!(summary.len(), 8);
        assert_eq!(summary[0].date, date(2024, 5, 3));
        assert_eq!(summary[7].date, date(2024, 5, 10));
        assert!(summary.iter().all(|d| d.calories == 0.0));
    }

    #[test]
    fn test_weekly_summary_sums_per_day() {
        let meals = vec![
            logged(date(2024, 5, 9), 500.0, 30.0),
            logged(date(2024, 5, 9), 300.0, 10.0),
            logged(date(2024, 5, 1), 900.0, 50.0), // outside window
        ];
        let summary = weekly_summary(&meals, date(2024, 5, 10));
        let day = summary.iter().find(|d| d.date == date(2024, 5, 9)).unwrap();
        assert_eq!(day.calories, 800.0);
        assert_eq!(day.protein, 40.0);
        assert_eq!(day.fiber, 4.0);
        let total: f64 = summary.iter().map(|d| d.calories).sum();
        assert_eq!(total, 800.0);
    }

    #[test]
    fn test_progress_placeholder_when_empty() {
        let progress = summarize_progress(&[]);
        assert_eq!(progress.exercises.len(), 1);
        assert_eq!(progress.exercises[0].name, "No exercises yet");
        assert_eq!(progress.overall_progress, 0.0);
        assert_eq!(progress.current_pain_level, 0.0);
    }

    #[test]
    fn test_progress_newest_first() {
        let at = |d: u32| date(2024, 4, d).and_hms_opt(9, 0, 0).unwrap();
        let entries = vec![
            ProgressEntry {
                exercise: "Quad Sets".to_string(),
                progress: 40.0,
                pain_level: 6.0,
                recorded_at: at(1),
            },
            ProgressEntry {
                exercise: "Heel Slides".to_string(),
                progress: 75.0,
                pain_level: 3.0,
                recorded_at: at(8),
            },
        ];
        let progress = summarize_progress(&entries);
        assert_eq!(progress.exercises[0].name, "Heel Slides");
        assert_eq!(progress.current_pain_level, 3.0);
        // (40 + 75) / 2 = 57.5
        assert_eq!(progress.overall_progress, 58.0);
        assert_eq!(progress.pain_history.len(), 2);
    }
}
