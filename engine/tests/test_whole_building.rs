//! Whole-building estimate scenarios
//!
//! Exercises the coarse strategy end to end: concrete dollar figures for
//! known configurations, the regional fallback, and idempotence.

use office_estimator_core_rs::models::{
    BuildingType, ProjectBasics, ProjectConfiguration, ProjectType, Timeline,
};
use office_estimator_core_rs::estimate_whole_building_cost;

fn config(
    project_type: ProjectType,
    building_type: BuildingType,
    timeline: Timeline,
    state: &str,
    sqft: u32,
) -> ProjectConfiguration {
    let mut basics = ProjectBasics::sample();
    basics.project_type = project_type;
    basics.building_type = building_type;
    basics.timeline = timeline;
    basics.location.state = state.to_string();
    basics.total_square_footage = sqft;
    ProjectConfiguration::new().with_basics(basics)
}

#[test]
fn test_renovation_ground_floor_standard_tx() {
    // 150 * 1.00 * 1.00 * 1.00 * 2500 = 375,000
    let config = config(
        ProjectType::Renovation,
        BuildingType::GroundFloor,
        Timeline::Standard,
        "TX",
        2_500,
    );
    assert_eq!(estimate_whole_building_cost(&config), 375_000);
}

#[test]
fn test_same_project_in_california() {
    // 150 * 1.35 * 2500 = 506,250
    let config = config(
        ProjectType::Renovation,
        BuildingType::GroundFloor,
        Timeline::Standard,
        "CA",
        2_500,
    );
    assert_eq!(estimate_whole_building_cost(&config), 506_250);
}

#[test]
fn test_unknown_states_behave_like_tx() {
    let baseline = estimate_whole_building_cost(&config(
        ProjectType::Renovation,
        BuildingType::GroundFloor,
        Timeline::Standard,
        "TX",
        2_500,
    ));

    // None of these are in the regional table
    for state in ["AK", "WY", "PR", "ZZ", "", "??"] {
        let cost = estimate_whole_building_cost(&config(
            ProjectType::Renovation,
            BuildingType::GroundFloor,
            Timeline::Standard,
            state,
            2_500,
        ));
        assert_eq!(cost, baseline, "state {state:?}");
    }
}

#[test]
fn test_square_footage_scales_the_estimate() {
    let costs: Vec<i64> = [500, 1_000, 2_500, 5_000, 10_000]
        .iter()
        .map(|&sqft| {
            estimate_whole_building_cost(&config(
                ProjectType::NewConstruction,
                BuildingType::UpperFloor,
                Timeline::Accelerated,
                "NY",
                sqft,
            ))
        })
        .collect();

    assert!(costs.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_zero_square_footage_is_free() {
    let config = config(
        ProjectType::NewConstruction,
        BuildingType::Basement,
        Timeline::Accelerated,
        "CA",
        0,
    );
    assert_eq!(estimate_whole_building_cost(&config), 0);
}

#[test]
fn test_basement_and_accelerated_compound() {
    // 125 * 1.25 * 1.20 * 1.05 * 1600 = 315,000
    let config = config(
        ProjectType::TenantImprovement,
        BuildingType::Basement,
        Timeline::Accelerated,
        "FL",
        1_600,
    );
    assert_eq!(estimate_whole_building_cost(&config), 315_000);
}

#[test]
fn test_repeated_calls_are_identical() {
    let config = config(
        ProjectType::Renovation,
        BuildingType::UpperFloor,
        Timeline::Relaxed,
        "GA",
        3_250,
    );
    let first = estimate_whole_building_cost(&config);
    for _ in 0..10 {
        assert_eq!(estimate_whole_building_cost(&config), first);
    }
}
