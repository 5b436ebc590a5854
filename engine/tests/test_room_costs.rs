//! Room-by-room estimate scenarios

use office_estimator_core_rs::estimate_room_costs;
use office_estimator_core_rs::estimate_whole_building_cost;
use office_estimator_core_rs::models::{
    ProjectBasics, ProjectConfiguration, ProjectType, RoomCategory, RoomPlan, RoomSpec,
};

fn renovation_in(state: &str) -> ProjectBasics {
    let mut basics = ProjectBasics::sample();
    basics.project_type = ProjectType::Renovation;
    basics.location.state = state.to_string();
    basics
}

#[test]
fn test_operatory_scenario() {
    // 2 rooms * 150 sqft * $150 base * 2.5 multiplier * 1.0 regional
    let plan = RoomPlan::default().with_spec(RoomCategory::Operatory, RoomSpec::new(2, 150));
    let config = ProjectConfiguration::new()
        .with_basics(renovation_in("TX"))
        .with_rooms(plan);

    let estimate = estimate_room_costs(&config);
    assert_eq!(estimate.total, 112_500);
    assert_eq!(estimate.lines[0].total_sqft, 300);
}

#[test]
fn test_regional_multiplier_applies_per_room() {
    let plan = RoomPlan::default().with_spec(RoomCategory::Operatory, RoomSpec::new(2, 150));

    let tx = ProjectConfiguration::new()
        .with_basics(renovation_in("TX"))
        .with_rooms(plan.clone());
    let ca = ProjectConfiguration::new()
        .with_basics(renovation_in("CA"))
        .with_rooms(plan);

    // 112,500 * 1.35
    assert_eq!(estimate_room_costs(&ca).total, 151_875);
    assert_eq!(estimate_room_costs(&tx).total, 112_500);
}

#[test]
fn test_zero_count_categories_never_appear() {
    let mut plan = RoomPlan::sample();
    plan.laboratory = RoomSpec::new(0, 10_000); // area is irrelevant at count 0

    let config = ProjectConfiguration::new()
        .with_basics(renovation_in("TX"))
        .with_rooms(plan);

    let estimate = estimate_room_costs(&config);
    assert!(estimate
        .lines
        .iter()
        .all(|line| line.category != RoomCategory::Laboratory));
}

#[test]
fn test_adding_a_room_only_adds_that_line() {
    let base_plan = RoomPlan::sample();
    let more_plan = base_plan
        .clone()
        .with_spec(RoomCategory::Cbct, RoomSpec::new(1, 80));

    let base = estimate_room_costs(
        &ProjectConfiguration::new()
            .with_basics(renovation_in("TX"))
            .with_rooms(base_plan),
    );
    let more = estimate_room_costs(
        &ProjectConfiguration::new()
            .with_basics(renovation_in("TX"))
            .with_rooms(more_plan),
    );

    // 1 * 80 * 150 * 3.5 * 1.0 = 42,000
    assert_eq!(more.total - base.total, 42_000);
    assert_eq!(more.lines.len(), base.lines.len() + 1);
}

#[test]
fn test_room_and_whole_building_strategies_are_independent() {
    // The same project produces different figures by design; the two
    // paths are not reconciled
    let config = ProjectConfiguration::new()
        .with_basics(renovation_in("TX"))
        .with_rooms(RoomPlan::sample());

    let whole_building = estimate_whole_building_cost(&config);
    let rooms = estimate_room_costs(&config).total;
    assert_ne!(whole_building, rooms);
    assert!(whole_building > 0 && rooms > 0);
}

#[test]
fn test_sample_plan_total() {
    // Per line (base 150, regional 1.0):
    //   operatory      2*150*2.5 -> 112,500
    //   consultation   1*120*1.8 ->  32,400
    //   recovery       1*100*2.0 ->  30,000
    //   reception      1*300*1.2 ->  54,000
    //   office         1*120*1.5 ->  27,000
    //   sterilization  1*80*2.2  ->  26,400
    //   xray           1*60*3.0  ->  27,000
    //   storage        1*50*0.8  ->   6,000
    //   break_room     1*120*1.0 ->  18,000
    //   restroom       2*40*1.8  ->  21,600
    //   mechanical     1*100*1.5 ->  22,500
    //   it             1*30*2.0  ->   9,000
    //   utility        1*40*0.9  ->   5,400
    let config = ProjectConfiguration::new()
        .with_basics(renovation_in("TX"))
        .with_rooms(RoomPlan::sample());

    assert_eq!(estimate_room_costs(&config).total, 391_800);
}
