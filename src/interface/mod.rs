pub mod prompts;
pub mod render;

pub use prompts::{prompt_goal, prompt_injury, prompt_pain_level, prompt_yes_no, resolve_injury};
pub use render::{
    display_injury_list, display_metrics, display_progress, display_rehab_plan,
    display_weekly_plan, display_weekly_summary,
};
