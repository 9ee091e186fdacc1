use std::ops::AddAssign;

use serde::Serialize;

use crate::models::Goal;

/// One of the three daily meals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        }
    }
}

/// A catalog meal at its reference portion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MealOption {
    pub food_name: &'static str,
    pub base_calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
}

impl MealOption {
    /// Owned copy of this option with every quantity multiplied by
    /// `factor` and rounded to a whole unit.
    pub fn scaled(&self, factor: f64) -> ScaledMeal {
        ScaledMeal {
            food_name: self.food_name.to_string(),
            calories: round_units(self.base_calories * factor),
            protein_g: round_units(self.protein_g * factor),
            carbs_g: round_units(self.carbs_g * factor),
            fats_g: round_units(self.fats_g * factor),
        }
    }
}

fn round_units(value: f64) -> u32 {
    // `as` saturates, negative or NaN inputs land on 0
    value.round() as u32
}

/// A meal portioned to fit a calorie budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaledMeal {
    pub food_name: String,
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fats_g: u32,
}

/// Integer sums of calories and macros. Additions saturate at `u32::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NutritionTotals {
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fats_g: u32,
}

impl AddAssign<&ScaledMeal> for NutritionTotals {
    fn add_assign(&mut self, meal: &ScaledMeal) {
        self.calories = self.calories.saturating_add(meal.calories);
        self.protein_g = self.protein_g.saturating_add(meal.protein_g);
        self.carbs_g = self.carbs_g.saturating_add(meal.carbs_g);
        self.fats_g = self.fats_g.saturating_add(meal.fats_g);
    }
}

impl AddAssign for NutritionTotals {
    fn add_assign(&mut self, other: NutritionTotals) {
        self.calories = self.calories.saturating_add(other.calories);
        self.protein_g = self.protein_g.saturating_add(other.protein_g);
        self.carbs_g = self.carbs_g.saturating_add(other.carbs_g);
        self.fats_g = self.fats_g.saturating_add(other.fats_g);
    }
}

/// Meals for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyMealPlan {
    pub day: String,
    pub breakfast: ScaledMeal,
    pub lunch: ScaledMeal,
    pub dinner: ScaledMeal,
}

impl DailyMealPlan {
    pub fn meal(&self, slot: MealSlot) -> &ScaledMeal {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Meals in slot order.
    pub fn meals(&self) -> impl Iterator<Item = (MealSlot, &ScaledMeal)> {
        MealSlot::ALL.into_iter().map(move |slot| (slot, self.meal(slot)))
    }

    pub fn totals(&self) -> NutritionTotals {
        let mut totals = NutritionTotals::default();
        for (_, meal) in self.meals() {
            totals += meal;
        }
        totals
    }
}

/// Seven days of meals with aggregate totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyPlan {
    pub daily_calories: u32,
    pub goal: Goal,
    pub days: Vec<DailyMealPlan>,
    pub totals: NutritionTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    const OATS: MealOption = MealOption {
        food_name: "Oatmeal",
        base_calories: 350.0,
        protein_g: 12.0,
        carbs_g: 60.0,
        fats_g: 7.0,
    };

    #[test]
    fn test_scale_by_one_keeps_values() {
        let meal = OATS.scaled(1.0);
        assert_eq!(meal.food_name, "Oatmeal");
        assert_eq!(meal.calories, 350);
        assert_eq!(meal.protein_g, 12);
        assert_eq!(meal.carbs_g, 60);
        assert_eq!(meal.fats_g, 7);
    }

    #[test]
    fn test_scale_rounds_each_quantity() {
        let meal = OATS.scaled(1.5);
        assert_eq!(meal.calories, 525);
        assert_eq!(meal.protein_g, 18);
        assert_eq!(meal.carbs_g, 90);
        // 10.5 rounds away from zero
        assert_eq!(meal.fats_g, 11);
    }

    #[test]
    fn test_daily_totals() {
        let day = DailyMealPlan {
            day: "Monday".to_string(),
            breakfast: OATS.scaled(1.0),
            lunch: OATS.scaled(2.0),
            dinner: OATS.scaled(1.0),
        };
        let totals = day.totals();
        assert_eq!(totals.calories, 1400);
        assert_eq!(totals.protein_g, 48);
        assert_eq!(totals.fats_g, 28);
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let huge = OATS.scaled(1e12);
        assert_eq!(huge.calories, u32::MAX);

        let mut totals = NutritionTotals::default();
        totals += &huge;
        totals += &huge;
        assert_eq!(totals.calories, u32::MAX);

        totals += NutritionTotals {
            calories: 1,
            protein_g: u32::MAX,
            carbs_g: 0,
            fats_g: 0,
        };
        assert_eq!(totals.calories, u32::MAX);
        assert_eq!(totals.protein_g, u32::MAX);
    }
}
