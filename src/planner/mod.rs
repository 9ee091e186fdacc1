pub mod constants;
pub mod meal_plan;
pub mod metrics;
pub mod rehab;
pub mod summary;

pub use constants::*;
pub use meal_plan::{generate_daily_plan, generate_weekly_plan, pick_meal, scale_factor};
pub use metrics::{
    BodyMetrics, CalorieTarget, age_years, bmi, bmr, compute_metrics,
    compute_metrics_and_calories, daily_calories,
};
pub use rehab::{
    extra_sets, generate_rehab_plan, scale_phases, starting_phase_index, suggest_injuries,
};
pub use summary::{summarize_progress, weekly_summary};
