//! Static meal and injury tables. Read-only after first access.

pub mod injuries;
pub mod meals;

pub use injuries::{find_injury, injury_names, PHASE_NAMES};
pub use meals::{meal_options, OPTIONS_PER_TABLE};
