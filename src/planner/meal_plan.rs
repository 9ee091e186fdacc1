use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::meal_options;
use crate::models::{
    DailyMealPlan, Goal, MealOption, MealSlot, NutritionTotals, ScaledMeal, WeeklyPlan,
};
use crate::planner::constants::{MEALS_PER_DAY, WEEK_DAYS};

/// Scale factor that brings `option` to an even share of the daily budget.
pub fn scale_factor(daily_calories: u32, option: &MealOption) -> f64 {
    (daily_calories as f64 / MEALS_PER_DAY) / option.base_calories
}

/// Pick one option for `slot` and portion it to the daily budget.
pub fn pick_meal<R: Rng + ?Sized>(
    slot: MealSlot,
    goal: Goal,
    daily_calories: u32,
    rng: &mut R,
) -> ScaledMeal {
    let options = meal_options(slot, goal);
    // Catalog tables are fixed-size and never empty
    let option = options.choose(rng).unwrap_or(&options[0]);
    option.scaled(scale_factor(daily_calories, option))
}

/// Generate one day of meals.
pub fn generate_daily_plan<R: Rng + ?Sized>(
    day: &str,
    daily_calories: u32,
    goal: Goal,
    rng: &mut R,
) -> DailyMealPlan {
    DailyMealPlan {
        day: day.to_string(),
        breakfast: pick_meal(MealSlot::Breakfast, goal, daily_calories, rng),
        lunch: pick_meal(MealSlot::Lunch, goal, daily_calories, rng),
        dinner: pick_meal(MealSlot::Dinner, goal, daily_calories, rng),
    }
}

/// Generate a seven-day plan, Monday first.
///
/// Selection draws from `rng`; a seeded generator yields a repeatable plan.
pub fn generate_weekly_plan<R: Rng + ?Sized>(
    daily_calories: u32,
    goal: Goal,
    rng: &mut R,
) -> WeeklyPlan {
    let days: Vec<DailyMealPlan> = WEEK_DAYS
        .iter()
        .map(|day| generate_daily_plan(day, daily_calories, goal, rng))
        .collect();

    let mut totals = NutritionTotals::default();
    for day in &days {
        totals += day.totals();
    }

    tracing::debug!(
        goal = goal.as_str(),
        daily_calories,
        weekly_calories = totals.calories,
        "generated weekly meal plan"
    );

    WeeklyPlan {
        daily_calories,
        goal,
        days,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_scale_factor_even_split() {
        let option = meal_options(MealSlot::Lunch, Goal::Balance)[0];
        let factor = scale_factor(3 * option.base_calories as u32, &option);
        assert!((factor - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pick_meal_comes_from_goal_table() {
        let mut rng = StdRng::seed_from_u64(7);
        let meal = pick_meal(MealSlot::Dinner, Goal::WeightGain, 2700, &mut rng);
        let names: Vec<&str> = meal_options(MealSlot::Dinner, Goal::WeightGain)
            .iter()
            .map(|o| o.food_name)
            .collect();
        assert!(names.contains(&meal.food_name.as_str()));
    }

    #[test]
    fn test_weekly_plan_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let plan = generate_weekly_plan(2100, Goal::Balance, &mut rng);
        assert_eq!(plan.days.len(), 7);
        assert_eq!(plan.days[0].day, "Monday");
        assert_eq!(plan.days[6].day, "Sunday");
    }

    #[test]
    fn test_same_seed_same_plan() {
        let a = generate_weekly_plan(2000, Goal::WeightLoss, &mut StdRng::seed_from_u64(9));
        let b = generate_weekly_plan(2000, Goal::WeightLoss, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
