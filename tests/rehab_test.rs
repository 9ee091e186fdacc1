use chrono::NaiveDate;

use fitlife_planner::catalog::{find_injury, PHASE_NAMES};
use fitlife_planner::error::FitError;
use fitlife_planner::models::{Gender, Profile};
use fitlife_planner::planner::generate_rehab_plan;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn profile(weight_kg: f64) -> Profile {
    Profile::new(180.0, weight_kg, NaiveDate::from_ymd_opt(1990, 1, 1), Gender::Male)
}

#[test]
fn test_knee_injury_acute_pain() {
    let plan = generate_rehab_plan("Knee Injury", 8.0, &profile(85.0), today()).unwrap();

    assert_eq!(plan.starting_phase_index, 0);
    assert_eq!(plan.starting_phase, "Acute");

    let names: Vec<&str> = plan.phases.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, PHASE_NAMES);
}

#[test]
fn test_sets_scaled_by_body_weight() {
    let plan = generate_rehab_plan("Knee Injury", 8.0, &profile(85.0), today()).unwrap();
    let catalog = find_injury("Knee Injury").unwrap();

    assert_eq!(plan.extra_sets, 4);
    for (scaled, original) in plan.phases.iter().zip(&catalog.phases) {
        for (s, o) in scaled.exercises.iter().zip(&original.exercises) {
            match o.sets {
                Some(sets) => assert_eq!(s.sets, Some(sets + 4), "{}", o.name),
                None => assert_eq!(s, o),
            }
        }
    }
}

#[test]
fn test_pain_boundaries_keep_all_phases() {
    for (pain, expected) in [(7.0, 0), (6.999, 1), (6.0, 1), (4.0, 1), (3.0, 2)] {
        let plan = generate_rehab_plan("Knee Injury", pain, &profile(70.0), today()).unwrap();
        assert_eq!(plan.starting_phase_index, expected, "pain {}", pain);
        assert_eq!(plan.phases.len(), 4);
        assert_eq!(plan.starting_phase, PHASE_NAMES[expected]);
    }
}

#[test]
fn test_unknown_injury() {
    let err = generate_rehab_plan("Nonexistent Injury", 5.0, &profile(70.0), today()).unwrap_err();
    assert!(matches!(err, FitError::UnknownInjury(ref name) if name == "Nonexistent Injury"));
}

#[test]
fn test_invalid_pain_levels() {
    for pain in [0.0, -1.0, 10.5, f64::NAN, f64::INFINITY] {
        let err = generate_rehab_plan("Knee Injury", pain, &profile(70.0), today()).unwrap_err();
        assert!(matches!(err, FitError::InvalidInput(_)), "pain {}", pain);
    }
}

#[test]
fn test_unknown_injury_reported_before_bad_pain() {
    for pain in [f64::NAN, -1.0, 42.0] {
        let err = generate_rehab_plan("Nonexistent Injury", pain, &profile(70.0), today())
            .unwrap_err();
        assert!(matches!(err, FitError::UnknownInjury(_)), "pain {}", pain);
    }
}

#[test]
fn test_extreme_weight_does_not_overflow_sets() {
    let plan = generate_rehab_plan("Knee Injury", 5.0, &profile(1e12), today()).unwrap();

    assert_eq!(plan.extra_sets, u32::MAX);
    for phase in &plan.phases {
        for exercise in phase.exercises.iter().filter(|e| e.sets.is_some()) {
            assert_eq!(exercise.sets, Some(u32::MAX), "{}", exercise.name);
        }
    }
}

#[test]
fn test_missing_weight() {
    let incomplete = Profile {
        height_cm: Some(175.0),
        ..Default::default()
    };
    let err = generate_rehab_plan("Ankle Sprain", 5.0, &incomplete, today()).unwrap_err();
    assert!(matches!(err, FitError::MissingProfile(_)));
}

#[test]
fn test_patient_details_attached() {
    let plan = generate_rehab_plan("lower back pain", 2.0, &profile(81.0), today()).unwrap();

    assert_eq!(plan.injury_type, "Lower Back Pain");
    assert_eq!(plan.patient.injury_type, "Lower Back Pain");
    assert_eq!(plan.patient.age_years, 34);
    // 81 / 1.8^2 = 25.0
    assert_eq!(plan.patient.bmi, 25.0);
    assert_eq!(plan.starting_phase, "Strengthening");
}

#[test]
fn test_plan_serializes_without_empty_fields() {
    let plan = generate_rehab_plan("Knee Injury", 5.0, &profile(70.0), today()).unwrap();
    let value = serde_json::to_value(&plan).unwrap();

    let ice = &value["phases"][0]["exercises"][2];
    assert_eq!(ice["name"], "Ice and Elevation");
    assert!(ice.get("sets").is_none());
    assert_eq!(value["starting_phase_index"], 1);
    assert_eq!(value["patient"]["injury_type"], "Knee Injury");
}
