//! Cost breakdown partition behavior

use office_estimator_core_rs::{build_cost_breakdown, estimate_review_cost};
use office_estimator_core_rs::models::{ProjectBasics, ProjectConfiguration, ProjectType};

#[test]
fn test_breakdown_partitions_the_total() {
    // The unrounded parts partition the total by construction; the
    // rounded parts may drift by at most one dollar per category
    for total in [0, 1, 375_000, 506_250, 1_000_000, 987_654_321] {
        let breakdown = build_cost_breakdown(total);
        assert_eq!(breakdown.total, total);
        let drift = (breakdown.category_sum() - total).abs();
        assert!(drift <= 16, "total {total}: drift {drift}");
    }
}

#[test]
fn test_every_category_is_nonnegative_for_positive_totals() {
    let breakdown = build_cost_breakdown(375_000);
    for (label, value) in breakdown.categories() {
        assert!(value >= 0, "{label}: {value}");
    }
}

#[test]
fn test_larger_shares_get_larger_slices() {
    let breakdown = build_cost_breakdown(500_000);
    // framing (0.15) > hvac (0.12) > electrical (0.10) > permits (0.02)
    assert!(breakdown.framing_drywall_insulation > breakdown.hvac);
    assert!(breakdown.hvac > breakdown.electrical);
    assert!(breakdown.electrical > breakdown.permits);
}

#[test]
fn test_breakdown_scales_linearly() {
    let small = build_cost_breakdown(100_000);
    let large = build_cost_breakdown(1_000_000);
    // Allow a dollar of rounding on the 10x comparison
    assert!((large.site_prep - small.site_prep * 10).abs() <= 10);
    assert!((large.contingency - small.contingency * 10).abs() <= 10);
}

#[test]
fn test_breakdown_composes_with_review_estimate() {
    // The wizard builds the breakdown from the review-stage total
    let mut basics = ProjectBasics::sample();
    basics.project_type = ProjectType::NewConstruction;
    basics.total_square_footage = 2_000;
    let config = ProjectConfiguration::new().with_basics(basics);

    let total = estimate_review_cost(&config);
    assert_eq!(total, 300_000);

    let breakdown = build_cost_breakdown(total);
    assert_eq!(breakdown.total, 300_000);
    assert!(breakdown.medical_gas > 0);
}

#[test]
fn test_identical_totals_give_identical_breakdowns() {
    assert_eq!(build_cost_breakdown(424_242), build_cost_breakdown(424_242));
}
