//! Rate Tables
//!
//! Single source of truth for every rate, factor, and share used by the
//! estimators. All monetary values in whole dollars.
//!
//! The whole-building and room-by-room estimators share the same base-rate
//! and regional lookups; the review-stage estimator deliberately uses its
//! own simplified constants (`REVIEW_*`) and must not borrow from the
//! others.

use crate::models::{BuildingType, GasType, ProjectType, RoomCategory, Timeline};

// ============================================================================
// Whole-building rates
// ============================================================================

/// Base construction rate per square foot, selected by project type (dollars)
///
/// New construction carries full MEP and structural work; tenant
/// improvement is a build-out of existing shell space.
pub fn base_rate_per_sqft(project_type: ProjectType) -> f64 {
    match project_type {
        ProjectType::NewConstruction => 200.0,
        ProjectType::Renovation => 150.0,
        ProjectType::TenantImprovement => 125.0,
    }
}

/// Surcharge factor by building placement
///
/// Upper floors pay for vertical material handling; basements add
/// excavation-adjacent work and ventilation.
pub fn building_type_factor(building_type: BuildingType) -> f64 {
    match building_type {
        BuildingType::GroundFloor => 1.00,
        BuildingType::UpperFloor => 1.15,
        BuildingType::Basement => 1.25,
    }
}

/// Schedule factor by project timeline
pub fn timeline_factor(timeline: Timeline) -> f64 {
    match timeline {
        Timeline::Accelerated => 1.20,
        Timeline::Standard => 1.00,
        Timeline::Relaxed => 0.95,
    }
}

/// Regional cost multiplier by two-letter state code
///
/// States not in the table (and anything that is not a recognized code)
/// fall back to 1.0. The lookup never fails.
pub fn regional_multiplier(state: &str) -> f64 {
    match state.to_ascii_uppercase().as_str() {
        "CA" => 1.35,
        "NY" => 1.30,
        "HI" => 1.25,
        "MA" => 1.20,
        "CT" => 1.18,
        "NJ" => 1.15,
        "WA" => 1.12,
        "MD" => 1.10,
        "IL" => 1.08,
        "FL" => 1.05,
        "TX" => 1.00,
        "NC" => 0.95,
        "GA" => 0.92,
        "TN" => 0.90,
        "OH" => 0.88,
        "MI" => 0.87,
        "IN" => 0.85,
        "KY" => 0.83,
        "AL" => 0.80,
        "MS" => 0.78,
        _ => 1.00,
    }
}

// ============================================================================
// Room-by-room rates
// ============================================================================

/// Cost-per-square-foot multiplier by room category
///
/// Imaging rooms carry lead shielding and power requirements; storage is
/// cheaper than open shell space.
pub fn room_cost_multiplier(category: RoomCategory) -> f64 {
    match category {
        RoomCategory::Operatory => 2.5,
        RoomCategory::Consultation => 1.8,
        RoomCategory::Recovery => 2.0,
        RoomCategory::Reception => 1.2,
        RoomCategory::Office => 1.5,
        RoomCategory::Sterilization => 2.2,
        RoomCategory::Laboratory => 2.8,
        RoomCategory::Xray => 3.0,
        RoomCategory::Cbct => 3.5,
        RoomCategory::Storage => 0.8,
        RoomCategory::BreakRoom => 1.0,
        RoomCategory::Restroom => 1.8,
        RoomCategory::Mechanical => 1.5,
        RoomCategory::It => 2.0,
        RoomCategory::Utility => 0.9,
    }
}

// ============================================================================
// Medical gas rates
// ============================================================================

/// Installed cost per gas outlet, by gas type (dollars)
pub fn per_outlet_rate(gas: GasType) -> i64 {
    match gas {
        GasType::Oxygen => 1_200,
        GasType::NitrousOxide => 1_400,
        GasType::MedicalAir => 1_000,
        GasType::Vacuum => 800,
    }
}

/// Oxygen central supply system (manifold, alarms, zone valves)
pub const OXYGEN_CENTRAL_SUPPLY_COST: i64 = 15_000;

/// Oxygen backup/reserve supply
pub const OXYGEN_BACKUP_SYSTEM_COST: i64 = 8_000;

/// Nitrous oxide central supply system
pub const NITROUS_CENTRAL_SUPPLY_COST: i64 = 12_000;

/// Nitrous oxide scavenging system (waste gas capture)
pub const NITROUS_SCAVENGING_COST: i64 = 6_000;

/// Oil-free medical air compressor
pub const AIR_COMPRESSOR_OIL_FREE_COST: i64 = 18_000;

/// Standard medical air compressor
///
/// A required medical-air system always includes one compressor or the
/// other; `oil_free` selects which.
pub const AIR_COMPRESSOR_STANDARD_COST: i64 = 12_000;

/// Central vacuum system (pump, receiver, exhaust)
pub const VACUUM_CENTRAL_SYSTEM_COST: i64 = 14_000;

/// Installation and piping cost per outlet, applied across all required
/// systems after the per-system costs
pub const INSTALLATION_RATE_PER_OUTLET: i64 = 300;

// ============================================================================
// Cost breakdown shares
// ============================================================================

/// Relative weight of each breakdown category.
///
/// The weights are illustrative industry shares carried over from the
/// planning worksheets; their nominal sum exceeds 1 because overhead,
/// profit, and contingency were quoted as markups. `build_cost_breakdown`
/// normalizes over [`breakdown_share_sum`] so the categories partition the
/// total exactly.
pub const SITE_PREP_SHARE: f64 = 0.05;
pub const DEMOLITION_SHARE: f64 = 0.08;
pub const FRAMING_DRYWALL_INSULATION_SHARE: f64 = 0.15;
pub const HVAC_SHARE: f64 = 0.12;
pub const ELECTRICAL_SHARE: f64 = 0.10;
pub const PLUMBING_SHARE: f64 = 0.08;
pub const MILLWORK_SURFACES_SHARE: f64 = 0.10;
pub const FLOORING_DOORS_SHARE: f64 = 0.06;
pub const PAINT_SHARE: f64 = 0.04;
pub const MEDICAL_GAS_SHARE: f64 = 0.06;
pub const SPECIAL_EQUIPMENT_SHARE: f64 = 0.08;
pub const PERMITS_SHARE: f64 = 0.02;
pub const GENERAL_CONDITIONS_SHARE: f64 = 0.08;
pub const OVERHEAD_SHARE: f64 = 0.06;
pub const PROFIT_SHARE: f64 = 0.08;
pub const CONTINGENCY_SHARE: f64 = 0.10;

/// Sum of all breakdown category weights (the normalization denominator)
pub fn breakdown_share_sum() -> f64 {
    SITE_PREP_SHARE
        + DEMOLITION_SHARE
        + FRAMING_DRYWALL_INSULATION_SHARE
        + HVAC_SHARE
        + ELECTRICAL_SHARE
        + PLUMBING_SHARE
        + MILLWORK_SURFACES_SHARE
        + FLOORING_DOORS_SHARE
        + PAINT_SHARE
        + MEDICAL_GAS_SHARE
        + SPECIAL_EQUIPMENT_SHARE
        + PERMITS_SHARE
        + GENERAL_CONDITIONS_SHARE
        + OVERHEAD_SHARE
        + PROFIT_SHARE
        + CONTINGENCY_SHARE
}

// ============================================================================
// Review-stage rates
// ============================================================================
//
// The review step recomputes a simplified estimate with its own constants.
// These intentionally differ from the whole-building rates above; the two
// strategies are presented side by side and are not reconciled.

/// Review base rate for new construction (dollars per sqft)
pub const REVIEW_BASE_RATE_NEW_CONSTRUCTION: f64 = 150.0;

/// Review base rate for every other project type (dollars per sqft)
pub const REVIEW_BASE_RATE_EXISTING: f64 = 125.0;

/// Review schedule premium for accelerated timelines
pub const REVIEW_ACCELERATED_FACTOR: f64 = 1.15;

/// Review schedule discount for relaxed timelines
pub const REVIEW_RELAXED_FACTOR: f64 = 0.95;

/// Flat adder per treatment room (dollars)
pub const REVIEW_TREATMENT_ROOM_ADDER: i64 = 25_000;

/// Flat adder per surgical suite (dollars)
pub const REVIEW_SURGICAL_SUITE_ADDER: i64 = 45_000;

/// Central sterilization fit-out rate (dollars per sqft)
pub const REVIEW_STERILE_RATE_PER_SQFT: i64 = 200;

/// Laboratory fit-out rate (dollars per sqft)
pub const REVIEW_LAB_RATE_PER_SQFT: i64 = 300;

/// Flat rate per gas outlet entry (room line item, not outlet count)
pub const REVIEW_GAS_RATE_PER_OUTLET_ENTRY: i64 = 1_500;

/// Base medical gas system cost whenever the gas section is present
pub const REVIEW_GAS_BASE_SYSTEM_COST: i64 = 25_000;

/// Review summary display buckets (fractions of the review total)
pub const REVIEW_CONSTRUCTION_SHARE: f64 = 0.35;
pub const REVIEW_MEP_SHARE: f64 = 0.30;
pub const REVIEW_EQUIPMENT_SHARE: f64 = 0.20;
pub const REVIEW_FINISHES_SHARE: f64 = 0.15;

// ============================================================================
// Space-program areas
// ============================================================================

/// Circulation allowance applied to the net program area (corridors,
/// door swings, wall thickness)
pub const CIRCULATION_FACTOR: f64 = 1.22;

/// Recovery room area (sqft per room)
pub const RECOVERY_ROOM_AREA: u32 = 150;

/// Private office area (sqft per office)
pub const PRIVATE_OFFICE_AREA: u32 = 120;

/// Conference room area per seat (sqft)
pub const CONFERENCE_AREA_PER_SEAT: u32 = 15;

/// Staff locker footprint (sqft per locker)
pub const LOCKER_AREA: u32 = 5;

/// Janitorial closet area (sqft per closet)
pub const JANITORIAL_CLOSET_AREA: u32 = 25;

/// Restroom area (sqft per restroom, patient or staff)
pub const RESTROOM_AREA: u32 = 60;

/// Family restroom area (sqft, added once when present)
pub const FAMILY_RESTROOM_AREA: u32 = 80;

/// X-ray room area (sqft per room)
pub const XRAY_ROOM_AREA: u32 = 100;

/// Panoramic imaging room area (sqft)
pub const PAN_ROOM_AREA: u32 = 120;

/// HVAC mechanical room area (sqft)
pub const HVAC_ROOM_AREA: u32 = 100;

/// Electrical room area (sqft)
pub const ELECTRICAL_ROOM_AREA: u32 = 60;

/// Data closet area (sqft)
pub const DATA_CLOSET_AREA: u32 = 40;

/// Medical gas manifold room area (sqft)
pub const GAS_MANIFOLD_AREA: u32 = 50;

/// Waiting area per seat (sqft), main and consultation waiting
pub const WAITING_AREA_PER_SEAT: u32 = 15;

/// Private waiting room area (sqft per room)
pub const PRIVATE_WAITING_ROOM_AREA: u32 = 80;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_rates() {
        assert_eq!(base_rate_per_sqft(ProjectType::NewConstruction), 200.0);
        assert_eq!(base_rate_per_sqft(ProjectType::Renovation), 150.0);
        assert_eq!(base_rate_per_sqft(ProjectType::TenantImprovement), 125.0);
    }

    #[test]
    fn test_building_and_timeline_factors() {
        assert_eq!(building_type_factor(BuildingType::GroundFloor), 1.00);
        assert_eq!(building_type_factor(BuildingType::UpperFloor), 1.15);
        assert_eq!(building_type_factor(BuildingType::Basement), 1.25);

        assert_eq!(timeline_factor(Timeline::Accelerated), 1.20);
        assert_eq!(timeline_factor(Timeline::Standard), 1.00);
        assert_eq!(timeline_factor(Timeline::Relaxed), 0.95);
    }

    #[test]
    fn test_regional_multiplier_known_states() {
        assert_eq!(regional_multiplier("CA"), 1.35);
        assert_eq!(regional_multiplier("TX"), 1.00);
        assert_eq!(regional_multiplier("MS"), 0.78);
    }

    #[test]
    fn test_regional_multiplier_is_case_insensitive() {
        assert_eq!(regional_multiplier("ca"), 1.35);
        assert_eq!(regional_multiplier("Ny"), 1.30);
    }

    #[test]
    fn test_regional_multiplier_defaults_to_one() {
        // States outside the table, and garbage input, never fail
        assert_eq!(regional_multiplier("AK"), 1.00);
        assert_eq!(regional_multiplier("WY"), 1.00);
        assert_eq!(regional_multiplier(""), 1.00);
        assert_eq!(regional_multiplier("TEXAS"), 1.00);
    }

    #[test]
    fn test_room_multipliers_span_expected_range() {
        // Imaging is the costliest fit-out, storage the cheapest
        assert_eq!(room_cost_multiplier(RoomCategory::Cbct), 3.5);
        assert_eq!(room_cost_multiplier(RoomCategory::Storage), 0.8);
        for category in RoomCategory::ALL {
            let m = room_cost_multiplier(category);
            assert!(m >= 0.8 && m <= 3.5, "{category:?} multiplier {m}");
        }
    }

    #[test]
    fn test_per_outlet_rates() {
        assert_eq!(per_outlet_rate(GasType::Oxygen), 1_200);
        assert_eq!(per_outlet_rate(GasType::NitrousOxide), 1_400);
        assert_eq!(per_outlet_rate(GasType::MedicalAir), 1_000);
        assert_eq!(per_outlet_rate(GasType::Vacuum), 800);
    }

    #[test]
    fn test_breakdown_share_sum() {
        // The raw weights are markup-inclusive and sum to 1.26
        assert!((breakdown_share_sum() - 1.26).abs() < 1e-9);
    }
}
