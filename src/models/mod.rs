mod log;
mod meal;
mod profile;
mod rehab;

pub use log::{
    DailyNutrition, ExerciseProgress, LoggedMeal, PainReading, ProgressEntry, RehabProgress,
};
pub use meal::{DailyMealPlan, MealOption, MealSlot, NutritionTotals, ScaledMeal, WeeklyPlan};
pub use profile::{Gender, Goal, Profile};
pub use rehab::{Exercise, InjuryPlan, PatientDetails, PersonalizedRehabPlan, RehabPhase};
