//! Review-stage estimate scenarios
//!
//! The review strategy is the third, simplified formula. These tests pin
//! its independence from the other two strategies.

use office_estimator_core_rs::models::{
    MedicalGasRequirements, ProjectBasics, ProjectConfiguration, ProjectType, SpaceProgram,
    Timeline,
};
use office_estimator_core_rs::{
    estimate_review_cost, estimate_whole_building_cost, review_summary,
};

fn basics(project_type: ProjectType, sqft: u32) -> ProjectBasics {
    let mut basics = ProjectBasics::sample();
    basics.project_type = project_type;
    basics.total_square_footage = sqft;
    basics
}

#[test]
fn test_new_construction_flat_rate() {
    let config =
        ProjectConfiguration::new().with_basics(basics(ProjectType::NewConstruction, 2_000));
    assert_eq!(estimate_review_cost(&config), 300_000);
}

#[test]
fn test_review_disagrees_with_whole_building_by_design() {
    // Same configuration, two strategies, two figures: the review base
    // rate for new construction is 150 while the whole-building rate is
    // 200
    let config =
        ProjectConfiguration::new().with_basics(basics(ProjectType::NewConstruction, 2_000));

    assert_eq!(estimate_review_cost(&config), 300_000);
    assert_eq!(estimate_whole_building_cost(&config), 400_000);
}

#[test]
fn test_review_ignores_regional_multipliers() {
    let mut in_ca = basics(ProjectType::Renovation, 2_000);
    in_ca.location.state = "CA".to_string();
    let ca = ProjectConfiguration::new().with_basics(in_ca);
    let tx = ProjectConfiguration::new().with_basics(basics(ProjectType::Renovation, 2_000));

    // The review formula has no regional term
    assert_eq!(estimate_review_cost(&ca), estimate_review_cost(&tx));
}

#[test]
fn test_full_configuration_totals_all_parts() {
    let mut program = SpaceProgram::sample(); // 6 treatment rooms, 1 suite, 150 sterile
    program.lab_spaces.has_lab = false;

    let config = ProjectConfiguration::new()
        .with_basics(basics(ProjectType::Renovation, 2_500))
        .with_space_program(program)
        .with_medical_gas(MedicalGasRequirements::sample()); // 7 entries

    // sqft:    2500 * 125            = 312,500
    // rooms:   6*25,000 + 45,000 + 150*200 = 225,000
    // gas:     7*1,500 + 25,000     =  35,500
    assert_eq!(estimate_review_cost(&config), 573_000);
}

#[test]
fn test_timeline_applies_before_adders() {
    // The schedule factor scales only the per-sqft portion
    let mut b = basics(ProjectType::Renovation, 2_000);
    b.timeline = Timeline::Accelerated;

    let mut program = SpaceProgram::default();
    program.treatment_rooms.count = 2;

    let config = ProjectConfiguration::new()
        .with_basics(b)
        .with_space_program(program);

    // 2000*125*1.15 + 2*25,000 = 287,500 + 50,000
    assert_eq!(estimate_review_cost(&config), 337_500);
}

#[test]
fn test_summary_covers_the_total() {
    let total = 573_000;
    let summary = review_summary(total);
    // The four buckets are display shares of the same total
    assert_eq!(
        summary.construction + summary.mep_systems + summary.equipment + summary.finishes,
        total
    );
}

#[test]
fn test_repeated_calls_are_identical() {
    let config = ProjectConfiguration::sample();
    let first = estimate_review_cost(&config);
    for _ in 0..10 {
        assert_eq!(estimate_review_cost(&config), first);
    }
}
