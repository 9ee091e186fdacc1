use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{Exercise, InjuryPlan, RehabPhase};

/// Phase ladder shared by every catalog entry.
pub const PHASE_NAMES: [&str; 4] = ["Acute", "Recovery", "Strengthening", "Return to Activity"];

const PHASE_GOALS: [&str; 4] = [
    "Reduce pain and swelling",
    "Increase strength and range of motion",
    "Improve agility and power",
    "Return to sport activities",
];

fn plan(injury_type: &str, phases: [Vec<Exercise>; 4]) -> InjuryPlan {
    let phases = phases
        .into_iter()
        .enumerate()
        .map(|(i, exercises)| RehabPhase {
            name: PHASE_NAMES[i].to_string(),
            goal: PHASE_GOALS[i].to_string(),
            exercises,
        })
        .collect();

    InjuryPlan {
        injury_type: injury_type.to_string(),
        phases,
    }
}

fn knee_injury() -> InjuryPlan {
    plan(
        "Knee Injury",
        [
            vec![
                Exercise::new("Quad Sets").sets(3).reps("10").frequency("3x daily"),
                Exercise::new("Straight Leg Raises").sets(3).reps("10"),
                Exercise::new("Ice and Elevation")
                    .duration("15 minutes")
                    .frequency("every 2-3 hours"),
            ],
            vec![
                Exercise::new("Heel Slides").sets(3).reps("15"),
                Exercise::new("Stationary Bike").duration("10 minutes").frequency("daily"),
                Exercise::new("Wall Sits").sets(3).duration("20 seconds"),
            ],
            vec![
                Exercise::new("Mini Squats").sets(3).reps("12"),
                Exercise::new("Step Ups").sets(3).reps("10 each leg"),
                Exercise::new("Hamstring Curls").sets(3).reps("12"),
            ],
            vec![
                Exercise::new("Lateral Lunges").sets(3).reps("10 each side"),
                Exercise::new("Single Leg Balance").sets(3).duration("30 seconds"),
                Exercise::new("Light Jogging").duration("15 minutes").frequency("3x weekly"),
            ],
        ],
    )
}

fn ankle_sprain() -> InjuryPlan {
    plan(
        "Ankle Sprain",
        [
            vec![
                Exercise::new("Ankle Alphabet").sets(2).reps("1 full alphabet"),
                Exercise::new("Ice, Compression and Elevation")
                    .duration("15 minutes")
                    .frequency("every 2-3 hours"),
            ],
            vec![
                Exercise::new("Towel Stretch").sets(3).duration("30 seconds"),
                Exercise::new("Resistance Band Eversion").sets(3).reps("15"),
                Exercise::new("Resistance Band Inversion").sets(3).reps("15"),
            ],
            vec![
                Exercise::new("Calf Raises").sets(3).reps("15"),
                Exercise::new("Single Leg Balance").sets(3).duration("30 seconds"),
                Exercise::new("Wobble Board").duration("5 minutes").frequency("daily"),
            ],
            vec![
                Exercise::new("Lateral Hops").sets(3).reps("10"),
                Exercise::new("Figure Eight Runs").sets(3).reps("5"),
                Exercise::new("Light Jogging").duration("20 minutes").frequency("3x weekly"),
            ],
        ],
    )
}

fn lower_back_pain() -> InjuryPlan {
    plan(
        "Lower Back Pain",
        [
            vec![
                Exercise::new("Pelvic Tilts").sets(2).reps("10"),
                Exercise::new("Knee to Chest Stretch").sets(2).duration("20 seconds"),
                Exercise::new("Walking").duration("10 minutes").frequency("2x daily"),
            ],
            vec![
                Exercise::new("Cat-Cow").sets(3).reps("10"),
                Exercise::new("Bird Dog").sets(3).reps("8 each side"),
                Exercise::new("Glute Bridges").sets(3).reps("12"),
            ],
            vec![
                Exercise::new("Dead Bugs").sets(3).reps("10 each side"),
                Exercise::new("Side Plank").sets(3).duration("20 seconds"),
                Exercise::new("Romanian Deadlift (light)").sets(3).reps("10"),
            ],
            vec![
                Exercise::new("Goblet Squats").sets(3).reps("12"),
                Exercise::new("Farmer Carries").sets(3).duration("40 seconds"),
                Exercise::new("Swimming").duration("20 minutes").frequency("2x weekly"),
            ],
        ],
    )
}

fn rotator_cuff_injury() -> InjuryPlan {
    plan(
        "Rotator Cuff Injury",
        [
            vec![
                Exercise::new("Pendulum Swings").sets(2).duration("30 seconds"),
                Exercise::new("Ice Application").duration("15 minutes").frequency("3x daily"),
            ],
            vec![
                Exercise::new("Wall Walks").sets(3).reps("10"),
                Exercise::new("Isometric External Rotation").sets(3).duration("10 seconds"),
                Exercise::new("Scapular Squeezes").sets(3).reps("15"),
            ],
            vec![
                Exercise::new("Band External Rotation").sets(3).reps("15"),
                Exercise::new("Band Internal Rotation").sets(3).reps("15"),
                Exercise::new("Side-Lying Shoulder Raise").sets(3).reps("12"),
            ],
            vec![
                Exercise::new("Overhead Press (light)").sets(3).reps("10"),
                Exercise::new("Push-up Plus").sets(3).reps("10"),
                Exercise::new("Throwing Progression").duration("10 minutes").frequency("3x weekly"),
            ],
        ],
    )
}

fn tennis_elbow() -> InjuryPlan {
    plan(
        "Tennis Elbow",
        [
            vec![
                Exercise::new("Wrist Extensor Stretch").sets(3).duration("30 seconds"),
                Exercise::new("Ice Massage").duration("10 minutes").frequency("2x daily"),
            ],
            vec![
                Exercise::new("Grip Squeeze").sets(3).reps("15"),
                Exercise::new("Forearm Supination").sets(3).reps("12"),
            ],
            vec![
                Exercise::new("Eccentric Wrist Extension").sets(3).reps("15"),
                Exercise::new("Towel Twist").sets(3).reps("10"),
            ],
            vec![
                Exercise::new("Racket Shadow Swings").sets(3).reps("15"),
                Exercise::new("Return to Play Drills")
                    .duration("20 minutes")
                    .frequency("3x weekly"),
            ],
        ],
    )
}

fn hamstring_strain() -> InjuryPlan {
    plan(
        "Hamstring Strain",
        [
            vec![
                Exercise::new("Isometric Hamstring Hold").sets(3).duration("10 seconds"),
                Exercise::new("Gentle Walking").duration("10 minutes").frequency("daily"),
            ],
            vec![
                Exercise::new("Supine Hamstring Stretch").sets(3).duration("30 seconds"),
                Exercise::new("Bridge Walkouts").sets(3).reps("8"),
            ],
            vec![
                Exercise::new("Nordic Curls (assisted)").sets(3).reps("6"),
                Exercise::new("Single Leg Deadlift").sets(3).reps("10 each leg"),
            ],
            vec![
                Exercise::new("Tempo Runs").sets(4).reps("100m"),
                Exercise::new("Sprint Build-ups").sets(3).reps("60m"),
            ],
        ],
    )
}

static INJURY_PLANS: LazyLock<Vec<InjuryPlan>> = LazyLock::new(|| {
    vec![
        knee_injury(),
        ankle_sprain(),
        lower_back_pain(),
        rotator_cuff_injury(),
        tennis_elbow(),
        hamstring_strain(),
    ]
});

/// Index from lowercase injury name to its position in `INJURY_PLANS`.
static INJURY_INDEX: LazyLock<HashMap<String, usize>> = LazyLock::new(|| {
    INJURY_PLANS
        .iter()
        .enumerate()
        .map(|(i, plan)| (injury_key(&plan.injury_type), i))
        .collect()
});

fn injury_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Look up an injury plan by name (case-insensitive).
pub fn find_injury(name: &str) -> Option<&'static InjuryPlan> {
    INJURY_INDEX
        .get(&injury_key(name))
        .map(|&i| &INJURY_PLANS[i])
}

/// All catalog injury names, in catalog order.
pub fn injury_names() -> Vec<&'static str> {
    INJURY_PLANS
        .iter()
        .map(|plan| plan.injury_type.as_str())
        .collect()
}
