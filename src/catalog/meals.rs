use crate::models::{Goal, MealOption, MealSlot};

/// Number of options per (slot, goal) table.
pub const OPTIONS_PER_TABLE: usize = 5;

type MealTable = [MealOption; OPTIONS_PER_TABLE];

const fn meal(
    food_name: &'static str,
    base_calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fats_g: f64,
) -> MealOption {
    MealOption {
        food_name,
        base_calories,
        protein_g,
        carbs_g,
        fats_g,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Breakfast
// ─────────────────────────────────────────────────────────────────────────────

static BREAKFAST_WEIGHTLOSS: MealTable = [
    meal("Greek Yogurt with Berries", 250.0, 20.0, 30.0, 5.0),
    meal("Egg White Omelette with Spinach", 200.0, 25.0, 8.0, 6.0),
    meal("Overnight Oats with Chia", 300.0, 12.0, 45.0, 8.0),
    meal("Cottage Cheese and Pineapple", 220.0, 24.0, 22.0, 3.0),
    meal("Green Protein Smoothie", 240.0, 22.0, 28.0, 4.0),
];

static BREAKFAST_WEIGHTGAIN: MealTable = [
    meal("Peanut Butter Banana Oatmeal", 650.0, 22.0, 85.0, 24.0),
    meal("Whole Egg Scramble with Toast and Avocado", 700.0, 32.0, 50.0, 40.0),
    meal("Protein Pancakes with Maple Syrup", 620.0, 35.0, 80.0, 16.0),
    meal("Granola with Whole Milk and Nuts", 680.0, 20.0, 78.0, 32.0),
    meal("Breakfast Burrito with Beans and Cheese", 720.0, 34.0, 70.0, 32.0),
];

static BREAKFAST_BALANCE: MealTable = [
    meal("Oatmeal with Fruit and Almonds", 400.0, 14.0, 60.0, 12.0),
    meal("Two Eggs on Whole Grain Toast", 380.0, 20.0, 32.0, 18.0),
    meal("Yogurt Parfait with Granola", 420.0, 18.0, 58.0, 12.0),
    meal("Smoked Salmon Bagel", 450.0, 26.0, 48.0, 15.0),
    meal("Veggie Omelette with Fruit", 390.0, 24.0, 30.0, 18.0),
];

// ─────────────────────────────────────────────────────────────────────────────
// Lunch
// ─────────────────────────────────────────────────────────────────────────────

static LUNCH_WEIGHTLOSS: MealTable = [
    meal("Grilled Chicken Salad", 350.0, 35.0, 15.0, 14.0),
    meal("Turkey Lettuce Wraps", 300.0, 28.0, 12.0, 15.0),
    meal("Lentil and Vegetable Soup", 320.0, 18.0, 48.0, 5.0),
    meal("Tuna and Chickpea Bowl", 380.0, 32.0, 36.0, 10.0),
    meal("Shrimp Zucchini Noodles", 310.0, 30.0, 18.0, 12.0),
];

static LUNCH_WEIGHTGAIN: MealTable = [
    meal("Chicken Burrito Bowl", 850.0, 50.0, 95.0, 28.0),
    meal("Beef and Rice Stir Fry", 820.0, 45.0, 90.0, 28.0),
    meal("Pasta Bolognese", 880.0, 42.0, 105.0, 30.0),
    meal("Salmon Rice Bowl with Avocado", 860.0, 44.0, 80.0, 38.0),
    meal("Double Turkey Club Sandwich", 800.0, 52.0, 70.0, 32.0),
];

static LUNCH_BALANCE: MealTable = [
    meal("Quinoa Chicken Bowl", 550.0, 38.0, 55.0, 18.0),
    meal("Turkey and Hummus Wrap", 520.0, 32.0, 52.0, 19.0),
    meal("Mediterranean Falafel Plate", 580.0, 20.0, 68.0, 24.0),
    meal("Salmon Salad with Brown Rice", 560.0, 34.0, 50.0, 22.0),
    meal("Chicken Vegetable Soup with Bread", 500.0, 30.0, 58.0, 14.0),
];

// ─────────────────────────────────────────────────────────────────────────────
// Dinner
// ─────────────────────────────────────────────────────────────────────────────

static DINNER_WEIGHTLOSS: MealTable = [
    meal("Baked Cod with Steamed Broccoli", 320.0, 34.0, 14.0, 12.0),
    meal("Chicken Breast with Roasted Vegetables", 380.0, 40.0, 20.0, 14.0),
    meal("Tofu and Vegetable Stir Fry", 340.0, 22.0, 28.0, 15.0),
    meal("Turkey Meatballs with Marinara", 360.0, 32.0, 22.0, 15.0),
    meal("Cauliflower Rice Shrimp Bowl", 330.0, 30.0, 20.0, 13.0),
];

static DINNER_WEIGHTGAIN: MealTable = [
    meal("Steak with Sweet Potato and Butter", 900.0, 55.0, 65.0, 45.0),
    meal("Salmon with Pasta and Pesto", 920.0, 48.0, 90.0, 38.0),
    meal("Chicken Thighs with Rice and Beans", 870.0, 52.0, 95.0, 28.0),
    meal("Lamb Curry with Naan", 950.0, 45.0, 85.0, 46.0),
    meal("Pork Chops with Mashed Potatoes", 880.0, 50.0, 70.0, 42.0),
];

static DINNER_BALANCE: MealTable = [
    meal("Grilled Salmon with Quinoa", 600.0, 40.0, 45.0, 26.0),
    meal("Chicken Stir Fry with Brown Rice", 580.0, 38.0, 62.0, 16.0),
    meal("Lean Beef Tacos", 620.0, 36.0, 55.0, 26.0),
    meal("Vegetable Lasagna", 560.0, 26.0, 65.0, 20.0),
    meal("Herb Roasted Chicken with Potatoes", 610.0, 42.0, 52.0, 22.0),
];

/// Options for a meal slot under a goal.
pub fn meal_options(slot: MealSlot, goal: Goal) -> &'static [MealOption] {
    match (slot, goal) {
        (MealSlot::Breakfast, Goal::WeightLoss) => &BREAKFAST_WEIGHTLOSS,
        (MealSlot::Breakfast, Goal::WeightGain) => &BREAKFAST_WEIGHTGAIN,
        (MealSlot::Breakfast, Goal::Balance) => &BREAKFAST_BALANCE,
        (MealSlot::Lunch, Goal::WeightLoss) => &LUNCH_WEIGHTLOSS,
        (MealSlot::Lunch, Goal::WeightGain) => &LUNCH_WEIGHTGAIN,
        (MealSlot::Lunch, Goal::Balance) => &LUNCH_BALANCE,
        (MealSlot::Dinner, Goal::WeightLoss) => &DINNER_WEIGHTLOSS,
        (MealSlot::Dinner, Goal::WeightGain) => &DINNER_WEIGHTGAIN,
        (MealSlot::Dinner, Goal::Balance) => &DINNER_BALANCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_is_full_and_positive() {
        for slot in MealSlot::ALL {
            for goal in Goal::ALL {
                let options = meal_options(slot, goal);
                assert_eq!(options.len(), OPTIONS_PER_TABLE);
                for option in options {
                    assert!(option.base_calories > 0.0, "{} has no calories", option.food_name);
                }
            }
        }
    }

    #[test]
    fn test_tables_are_distinct_per_goal() {
        let loss = meal_options(MealSlot::Lunch, Goal::WeightLoss);
        let gain = meal_options(MealSlot::Lunch, Goal::WeightGain);
        assert_ne!(loss[0].food_name, gain[0].food_name);
    }
}
