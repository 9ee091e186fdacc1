mod persistence;

pub use persistence::{
    export_weekly_plan_csv, load_meal_log, load_profile, load_progress_log, save_json,
};
