use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// FitLife planner: body metrics, weekly meal plans and rehabilitation plans.
#[derive(Parser, Debug)]
#[command(name = "fitlife")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the profile JSON file.
    #[arg(short, long, default_value = "profile.json")]
    pub profile: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show age, BMI, BMR and the daily calorie target.
    Metrics {
        /// weightloss, weightgain or balance (prompted if omitted).
        #[arg(short, long)]
        goal: Option<String>,
    },

    /// Generate a seven-day meal plan.
    Plan {
        /// weightloss, weightgain or balance (prompted if omitted).
        #[arg(short, long)]
        goal: Option<String>,

        /// Seed for repeatable meal selection.
        #[arg(long)]
        seed: Option<u64>,

        /// Write the plan as CSV.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write the plan as JSON.
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Generate a rehabilitation plan for an injury.
    Rehab {
        /// Injury name (chosen from the catalog if omitted).
        #[arg(short, long)]
        injury: Option<String>,

        /// Pain level from 1 to 10 (prompted if omitted).
        #[arg(long)]
        pain: Option<f64>,

        /// Write the plan as JSON.
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// List supported injuries.
    Injuries,

    /// Summarize logged meals for the week ending on a date.
    Summary {
        /// Path to the meal log JSON file.
        #[arg(long, default_value = "meals.json")]
        log: PathBuf,

        /// Last day of the summary (defaults to today).
        #[arg(long)]
        end: Option<chrono::NaiveDate>,
    },

    /// Summarize recorded rehabilitation progress.
    Progress {
        /// Path to the progress log JSON file.
        #[arg(long, default_value = "progress.json")]
        log: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            goal: None,
            seed: None,
            csv: None,
            json: None,
        }
    }
}
