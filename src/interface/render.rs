use crate::models::{DailyNutrition, PersonalizedRehabPlan, RehabProgress, WeeklyPlan};
use crate::planner::{ACTIVITY_MULTIPLIER, CalorieTarget, goal_multiplier};

/// Display body metrics and the calorie target.
pub fn display_metrics(target: &CalorieTarget) {
    let m = &target.metrics;

    println!();
    println!("=== Body Metrics ===");
    println!();
    println!("Age:  {} years", m.age_years);
    println!("BMI:  {:.1}", m.bmi);
    println!("BMR:  {:.0} kcal/day", m.bmr);
    println!();
    println!(
        "Goal: {} (x{:.1}), activity x{}",
        target.goal.label(),
        goal_multiplier(target.goal),
        ACTIVITY_MULTIPLIER
    );
    println!("Daily calories: {}", target.daily_calories);
    println!();
}

/// Display a weekly meal plan in a formatted table.
pub fn display_weekly_plan(plan: &WeeklyPlan) {
    println!();
    println!(
        "=== Weekly Meal Plan ({}, {} kcal/day) ===",
        plan.goal.label(),
        plan.daily_calories
    );

    // Find max food name length for alignment
    let max_name_len = plan
        .days
        .iter()
        .flat_map(|d| d.meals().map(|(_, m)| m.food_name.len()))
        .max()
        .unwrap_or(10);

    for day in &plan.days {
        println!();
        println!("{}", day.day);
        for (slot, meal) in day.meals() {
            println!(
                "  {:<9} {:<width$} - {:>4} cal | P:{:>3}g C:{:>3}g F:{:>3}g",
                slot.as_str(),
                meal.food_name,
                meal.calories,
                meal.protein_g,
                meal.carbs_g,
                meal.fats_g,
                width = max_name_len
            );
        }
        let totals = day.totals();
        println!("  {:<9} {} cal", "total", totals.calories);
    }

    println!();
    println!("--- Weekly Totals ---");
    println!("Calories: {}", plan.totals.calories);
    println!("Protein:  {} g", plan.totals.protein_g);
    println!("Carbs:    {} g", plan.totals.carbs_g);
    println!("Fats:     {} g", plan.totals.fats_g);
    println!();
}

/// Display a personalized rehabilitation plan, marking the starting phase.
pub fn display_rehab_plan(plan: &PersonalizedRehabPlan) {
    let p = &plan.patient;

    println!();
    println!("=== Rehabilitation Plan: {} ===", plan.injury_type);
    println!();
    println!(
        "Patient: {} years, {}, {} cm, {} kg, BMI {:.2}",
        p.age_years,
        p.gender.as_str(),
        p.height_cm,
        p.weight_kg,
        p.bmi
    );
    println!(
        "Pain level {} -> start at phase {} ({})",
        plan.pain_level,
        plan.starting_phase_index + 1,
        plan.starting_phase
    );
    if plan.extra_sets > 0 {
        println!("Sets adjusted by +{} for body weight", plan.extra_sets);
    }

    for (i, phase) in plan.phases.iter().enumerate() {
        let marker = if i == plan.starting_phase_index { " <- start here" } else { "" };
        println!();
        println!("Phase {}: {}{}", i + 1, phase.name, marker);
        println!("  Goal: {}", phase.goal);

        for exercise in &phase.exercises {
            let mut details = Vec::new();
            if let Some(sets) = exercise.sets {
                details.push(format!("{} sets", sets));
            }
            if let Some(reps) = &exercise.reps {
                details.push(format!("{} reps", reps));
            }
            if let Some(duration) = &exercise.duration {
                details.push(duration.clone());
            }
            if let Some(frequency) = &exercise.frequency {
                details.push(frequency.clone());
            }

            if details.is_empty() {
                println!("  - {}", exercise.name);
            } else {
                println!("  - {} ({})", exercise.name, details.join(", "));
            }
        }
    }

    println!();
}

/// Display a list of catalog injuries.
pub fn display_injury_list(names: &[&str]) {
    println!();
    println!("=== Supported Injuries ({} items) ===", names.len());
    println!();
    for name in names {
        println!("  {}", name);
    }
    println!();
}

/// Display daily nutrition totals.
pub fn display_weekly_summary(summary: &[DailyNutrition]) {
    println!();
    println!("=== Weekly Nutrition Summary ===");
    println!();

    for day in summary {
        println!(
            "  {}  {:>6.0} cal | P:{:>5.1}g C:{:>5.1}g F:{:>5.1}g Fiber:{:>4.1}g",
            day.date, day.calories, day.protein, day.carbs, day.fats, day.fiber
        );
    }

    let total: f64 = summary.iter().map(|d| d.calories).sum();
    let logged_days = summary.iter().filter(|d| d.calories > 0.0).count();

    println!();
    println!("Total calories: {:.0}", total);
    if logged_days > 0 {
        println!("Average per logged day: {:.0}", total / logged_days as f64);
    }
    println!();
}

/// Display rehabilitation progress.
pub fn display_progress(progress: &RehabProgress) {
    println!();
    println!("=== Rehabilitation Progress ===");
    println!();

    for exercise in &progress.exercises {
        println!("  {:<30} {:>5.0}%", exercise.name, exercise.progress_score);
    }

    println!();
    println!("Overall progress: {:.0}%", progress.overall_progress);
    println!("Current pain level: {}", progress.current_pain_level);
    println!();
}
