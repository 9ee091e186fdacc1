use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use fitlife_planner::catalog::injury_names;
use fitlife_planner::cli::{Cli, Command};
use fitlife_planner::error::{FitError, Result};
use fitlife_planner::interface::{
    display_injury_list, display_metrics, display_progress, display_rehab_plan,
    display_weekly_plan, display_weekly_summary, prompt_goal, prompt_injury, prompt_pain_level,
    prompt_yes_no, resolve_injury,
};
use fitlife_planner::models::{Goal, Profile};
use fitlife_planner::planner::{
    compute_metrics_and_calories, generate_rehab_plan, generate_weekly_plan, summarize_progress,
    weekly_summary,
};
use fitlife_planner::state::{
    export_weekly_plan_csv, load_meal_log, load_profile, load_progress_log, save_json,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let today = Local::now().date_naive();

    match command {
        Command::Metrics { goal } => cmd_metrics(&cli.profile, goal, today),
        Command::Plan {
            goal,
            seed,
            csv,
            json,
        } => cmd_plan(&cli.profile, goal, seed, csv, json, today),
        Command::Rehab { injury, pain, json } => cmd_rehab(&cli.profile, injury, pain, json, today),
        Command::Injuries => {
            display_injury_list(&injury_names());
            Ok(())
        }
        Command::Summary { log, end } => cmd_summary(&log, end.unwrap_or(today)),
        Command::Progress { log } => cmd_progress(&log),
    }
}

fn read_profile(path: &Path) -> Result<Profile> {
    if !path.exists() {
        return Err(FitError::InvalidInput(format!(
            "profile file not found: {}",
            path.display()
        )));
    }

    let profile = load_profile(path)?;
    tracing::info!(path = %path.display(), "loaded profile");
    Ok(profile)
}

fn resolve_goal(goal: Option<String>) -> Result<Goal> {
    match goal {
        Some(g) => Ok(Goal::parse(&g)),
        None => prompt_goal(),
    }
}

/// Show body metrics and the calorie target.
fn cmd_metrics(profile_path: &Path, goal: Option<String>, today: NaiveDate) -> Result<()> {
    let profile = read_profile(profile_path)?;
    let goal = resolve_goal(goal)?;

    let target = compute_metrics_and_calories(&profile, goal, today)?;
    display_metrics(&target);

    Ok(())
}

/// Generate and display a weekly meal plan.
fn cmd_plan(
    profile_path: &Path,
    goal: Option<String>,
    seed: Option<u64>,
    csv: Option<PathBuf>,
    json: Option<PathBuf>,
    today: NaiveDate,
) -> Result<()> {
    let profile = read_profile(profile_path)?;
    let goal = resolve_goal(goal)?;

    let target = compute_metrics_and_calories(&profile, goal, today)?;
    display_metrics(&target);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let plan = generate_weekly_plan(target.daily_calories, goal, &mut rng);
    display_weekly_plan(&plan);

    if let Some(path) = csv {
        export_weekly_plan_csv(&plan, &path)?;
        println!("Plan written to {}", path.display());
    }

    if let Some(path) = json {
        save_json(&path, &plan)?;
        println!("Plan written to {}", path.display());
    }

    Ok(())
}

/// Generate and display a rehabilitation plan.
fn cmd_rehab(
    profile_path: &Path,
    injury: Option<String>,
    pain: Option<f64>,
    json: Option<PathBuf>,
    today: NaiveDate,
) -> Result<()> {
    let profile = read_profile(profile_path)?;

    let injury = match injury {
        Some(name) => match resolve_injury(&name)? {
            Some(resolved) => resolved,
            None => return Err(FitError::UnknownInjury(name)),
        },
        None => prompt_injury()?,
    };

    let pain = match pain {
        Some(level) => level,
        None => prompt_pain_level()?,
    };

    let plan = generate_rehab_plan(&injury, pain, &profile, today)?;
    display_rehab_plan(&plan);

    let path = match json {
        Some(path) => Some(path),
        None => prompt_yes_no("Save plan as JSON?", false)?
            .then(|| PathBuf::from("rehab_plan.json")),
    };

    if let Some(path) = path {
        save_json(&path, &plan)?;
        println!("Plan written to {}", path.display());
    }

    Ok(())
}

/// Summarize logged meals.
fn cmd_summary(log_path: &Path, end: NaiveDate) -> Result<()> {
    let meals = load_meal_log(log_path)?;
    tracing::info!(meals = meals.len(), "loaded meal log");

    let summary = weekly_summary(&meals, end);
    display_weekly_summary(&summary);

    Ok(())
}

/// Summarize rehabilitation progress.
fn cmd_progress(log_path: &Path) -> Result<()> {
    let entries = load_progress_log(log_path)?;
    tracing::info!(entries = entries.len(), "loaded progress log");

    let progress = summarize_progress(&entries);
    display_progress(&progress);

    Ok(())
}
