pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{FitError, Result};
pub use models::{Goal, PersonalizedRehabPlan, Profile, WeeklyPlan};
pub use planner::{compute_metrics_and_calories, generate_rehab_plan, generate_weekly_plan};
