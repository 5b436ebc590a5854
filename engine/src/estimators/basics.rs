//! Whole-building estimate
//!
//! The coarse estimate shown during the basics step: one blended rate per
//! square foot, adjusted for placement, schedule, and region, times the
//! gross area. Room-level detail is deliberately ignored here; the
//! room-by-room strategy covers that independently.

use crate::models::ProjectConfiguration;
use crate::rates;

/// Estimate the whole-building cost in dollars.
///
/// Total when every section is missing or partial: absent basics (or a
/// zero square footage) yields 0, unknown enum values already fell back
/// to their defaults at the model layer, and unknown state codes use a
/// 1.0 regional multiplier. Never fails.
///
/// # Example
/// ```
/// use office_estimator_core_rs::estimators::estimate_whole_building_cost;
/// use office_estimator_core_rs::models::{ProjectBasics, ProjectConfiguration};
///
/// let mut basics = ProjectBasics::sample();
/// basics.total_square_footage = 2_500;
/// let config = ProjectConfiguration::new().with_basics(basics);
///
/// // Renovation, ground floor, standard timeline, TX: $150/sqft
/// assert_eq!(estimate_whole_building_cost(&config), 375_000);
/// ```
pub fn estimate_whole_building_cost(config: &ProjectConfiguration) -> i64 {
    let Some(basics) = &config.basics else {
        return 0;
    };

    let rate_per_sqft = rates::base_rate_per_sqft(basics.project_type)
        * rates::building_type_factor(basics.building_type)
        * rates::timeline_factor(basics.timeline)
        * rates::regional_multiplier(&basics.location.state);

    (rate_per_sqft * f64::from(basics.total_square_footage)).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BuildingType, ProjectBasics, ProjectType, Timeline};

    fn basics(project_type: ProjectType, sqft: u32, state: &str) -> ProjectBasics {
        let mut basics = ProjectBasics::sample();
        basics.project_type = project_type;
        basics.total_square_footage = sqft;
        basics.location.state = state.to_string();
        basics
    }

    #[test]
    fn test_missing_basics_is_zero() {
        assert_eq!(estimate_whole_building_cost(&ProjectConfiguration::new()), 0);
    }

    #[test]
    fn test_renovation_baseline() {
        let config = ProjectConfiguration::new()
            .with_basics(basics(ProjectType::Renovation, 2_500, "TX"));
        assert_eq!(estimate_whole_building_cost(&config), 375_000);
    }

    #[test]
    fn test_all_factors_compound() {
        // 200 * 1.25 * 1.20 * 1.35 * 1000 = 405,000
        let mut b = basics(ProjectType::NewConstruction, 1_000, "CA");
        b.building_type = BuildingType::Basement;
        b.timeline = Timeline::Accelerated;
        let config = ProjectConfiguration::new().with_basics(b);
        assert_eq!(estimate_whole_building_cost(&config), 405_000);
    }

    #[test]
    fn test_relaxed_timeline_discount() {
        // 125 * 0.95 * 2000 = 237,500
        let mut b = basics(ProjectType::TenantImprovement, 2_000, "TX");
        b.timeline = Timeline::Relaxed;
        let config = ProjectConfiguration::new().with_basics(b);
        assert_eq!(estimate_whole_building_cost(&config), 237_500);
    }

    #[test]
    fn test_fractional_results_round_to_whole_dollars() {
        // 150 * 0.87 * 333 = 43,456.5 -> 43,457 (MI multiplier)
        let config = ProjectConfiguration::new()
            .with_basics(basics(ProjectType::Renovation, 333, "MI"));
        assert_eq!(estimate_whole_building_cost(&config), 43_457);
    }
}
