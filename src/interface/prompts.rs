use dialoguer::{Confirm, Input, Select};

use crate::catalog::{find_injury, injury_names};
use crate::error::{FitError, Result};
use crate::models::Goal;
use crate::planner::constants::{MAX_PAIN_LEVEL, MIN_PAIN_LEVEL};
use crate::planner::suggest_injuries;

/// Prompt for a dietary goal.
pub fn prompt_goal() -> Result<Goal> {
    let labels: Vec<&str> = Goal::ALL.iter().map(|g| g.label()).collect();

    let selection = Select::new()
        .with_prompt("What is your goal?")
        .items(&labels)
        .default(2) // balance
        .interact()?;

    Ok(Goal::ALL.get(selection).copied().unwrap_or_default())
}

/// Prompt for self-reported pain on a 1-10 scale.
pub fn prompt_pain_level() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Current pain level (1-10)")
        .default("5".to_string())
        .interact_text()?;

    let level: f64 = input
        .trim()
        .parse()
        .map_err(|_| FitError::InvalidInput("Invalid number".to_string()))?;

    if !(MIN_PAIN_LEVEL..=MAX_PAIN_LEVEL).contains(&level) {
        return Err(FitError::InvalidInput(
            "Pain level must be between 1 and 10".to_string(),
        ));
    }

    Ok(level)
}

/// Prompt for an injury, picking from the catalog.
pub fn prompt_injury() -> Result<String> {
    let names = injury_names();

    let selection = Select::new()
        .with_prompt("Which injury are you recovering from?")
        .items(&names)
        .default(0)
        .interact()?;

    Ok(names[selection].to_string())
}

/// Resolve a typed injury name against the catalog.
///
/// Exact (case-insensitive) names pass straight through. Otherwise close
/// matches are offered; `None` means the user declined them all.
pub fn resolve_injury(input: &str) -> Result<Option<String>> {
    if let Some(plan) = find_injury(input) {
        return Ok(Some(plan.injury_type.clone()));
    }

    let candidates = suggest_injuries(input);

    if candidates.is_empty() {
        println!("No matching injury found for '{}'", input.trim());
        return Ok(None);
    }

    if candidates.len() == 1 {
        let name = candidates[0];
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", name))
            .default(true)
            .interact()?;

        return Ok(confirm.then(|| name.to_string()));
    }

    // Multiple matches - let user select
    let options: Vec<&str> = candidates.into_iter().take(5).collect();
    let mut selection_options = options.clone();
    selection_options.push("None of these");

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    Ok(options.get(selection).map(|name| name.to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
