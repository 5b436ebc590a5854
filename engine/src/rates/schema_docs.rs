//! Rate Schema Documentation
//!
//! Self-documenting schema for the rate tables. Generates documentation
//! from code metadata for CLI tool consumption (`office-estimator
//! rate-schema`).

use serde::{Deserialize, Serialize};

use super::tables;
use crate::models::{GasType, ProjectType, RoomCategory};

/// Category for grouping rate elements
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RateCategory {
    /// Dollar rates applied per square foot
    PerSquareFoot,
    /// Dimensionless factors applied to other rates
    Multiplier,
    /// Dollar rates applied per unit (outlet, room)
    PerUnit,
    /// Fixed dollar add-ons
    Fixed,
    /// Fractions of a computed total
    Share,
}

/// Example calculation for a rate element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateExample {
    /// Scenario description
    pub scenario: String,
    /// Calculation steps
    pub calculation: String,
    /// Final result
    pub result: String,
}

/// Documentation for a single rate element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateElement {
    /// Rate name (e.g., "base_rate_per_sqft")
    pub name: String,

    /// Human-readable display name
    pub display_name: String,

    /// Category for filtering
    pub category: RateCategory,

    /// What this rate represents
    pub description: String,

    /// Mathematical formula (plain text)
    pub formula: String,

    /// Default or table values, rendered as text
    pub values: String,

    /// Unit of measurement
    pub unit: String,

    /// Example calculation
    pub example: Option<RateExample>,
}

/// Complete rate schema documentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSchemaDoc {
    pub version: String,
    pub generated_at: String,
    pub rates: Vec<RateElement>,
}

/// All documented rate elements
pub fn rate_schema_elements() -> Vec<RateElement> {
    vec![
        RateElement {
            name: "base_rate_per_sqft".to_string(),
            display_name: "Base Construction Rate".to_string(),
            category: RateCategory::PerSquareFoot,
            description: "Blended construction cost per square foot before \
                adjustments, selected by project type."
                .to_string(),
            formula: "base_rate(project_type) * total_square_footage".to_string(),
            values: format!(
                "new-construction: {}, renovation: {}, tenant-improvement: {}",
                tables::base_rate_per_sqft(ProjectType::NewConstruction),
                tables::base_rate_per_sqft(ProjectType::Renovation),
                tables::base_rate_per_sqft(ProjectType::TenantImprovement),
            ),
            unit: "dollars per sqft".to_string(),
            example: Some(RateExample {
                scenario: "2,500 sqft renovation".to_string(),
                calculation: "150 * 2,500".to_string(),
                result: "$375,000".to_string(),
            }),
        },
        RateElement {
            name: "building_type_factor".to_string(),
            display_name: "Building Placement Factor".to_string(),
            category: RateCategory::Multiplier,
            description: "Surcharge for upper-floor or basement suites."
                .to_string(),
            formula: "rate * building_type_factor".to_string(),
            values: "ground-floor: 1.00, upper-floor: 1.15, basement: 1.25".to_string(),
            unit: "factor".to_string(),
            example: None,
        },
        RateElement {
            name: "timeline_factor".to_string(),
            display_name: "Schedule Factor".to_string(),
            category: RateCategory::Multiplier,
            description: "Premium for fast-track schedules, small discount for \
                relaxed ones."
                .to_string(),
            formula: "rate * timeline_factor".to_string(),
            values: "accelerated: 1.20, standard: 1.00, relaxed: 0.95".to_string(),
            unit: "factor".to_string(),
            example: None,
        },
        RateElement {
            name: "regional_multiplier".to_string(),
            display_name: "Regional Cost Multiplier".to_string(),
            category: RateCategory::Multiplier,
            description: "Per-state construction cost variation. Unknown state \
                codes use 1.0."
                .to_string(),
            formula: "rate * regional_multiplier(state)".to_string(),
            values: "CA: 1.35 .. MS: 0.78 (20-state table, default 1.00)".to_string(),
            unit: "factor".to_string(),
            example: Some(RateExample {
                scenario: "2,500 sqft renovation in California".to_string(),
                calculation: "150 * 1.35 * 2,500".to_string(),
                result: "$506,250".to_string(),
            }),
        },
        RateElement {
            name: "room_cost_multiplier".to_string(),
            display_name: "Room Category Multiplier".to_string(),
            category: RateCategory::Multiplier,
            description: "Fit-out intensity per room category; imaging rooms \
                cost the most per square foot, storage the least."
                .to_string(),
            formula: "count * sqft * base_rate * room_multiplier * regional".to_string(),
            values: format!(
                "operatory: {}, xray: {}, cbct: {}, storage: {}",
                tables::room_cost_multiplier(RoomCategory::Operatory),
                tables::room_cost_multiplier(RoomCategory::Xray),
                tables::room_cost_multiplier(RoomCategory::Cbct),
                tables::room_cost_multiplier(RoomCategory::Storage),
            ),
            unit: "factor".to_string(),
            example: Some(RateExample {
                scenario: "2 operatories, 150 sqft each, renovation, TX".to_string(),
                calculation: "2 * 150 * 150 * 2.5 * 1.0".to_string(),
                result: "$112,500".to_string(),
            }),
        },
        RateElement {
            name: "per_outlet_rate".to_string(),
            display_name: "Gas Outlet Rate".to_string(),
            category: RateCategory::PerUnit,
            description: "Installed hardware cost per gas outlet, by gas type."
                .to_string(),
            formula: "outlet_total * per_outlet_rate(gas)".to_string(),
            values: format!(
                "oxygen: {}, nitrous-oxide: {}, medical-air: {}, vacuum: {}",
                tables::per_outlet_rate(GasType::Oxygen),
                tables::per_outlet_rate(GasType::NitrousOxide),
                tables::per_outlet_rate(GasType::MedicalAir),
                tables::per_outlet_rate(GasType::Vacuum),
            ),
            unit: "dollars per outlet".to_string(),
            example: None,
        },
        RateElement {
            name: "gas_system_options".to_string(),
            display_name: "Gas System Options".to_string(),
            category: RateCategory::Fixed,
            description: "Fixed add-ons per required system: central supply, \
                backup, scavenging, compressor grade."
                .to_string(),
            formula: "sum of selected option costs".to_string(),
            values: format!(
                "O2 central: {}, O2 backup: {}, N2O central: {}, N2O scavenging: {}, \
                 air compressor: {}/{} (oil-free/standard), vacuum central: {}",
                tables::OXYGEN_CENTRAL_SUPPLY_COST,
                tables::OXYGEN_BACKUP_SYSTEM_COST,
                tables::NITROUS_CENTRAL_SUPPLY_COST,
                tables::NITROUS_SCAVENGING_COST,
                tables::AIR_COMPRESSOR_OIL_FREE_COST,
                tables::AIR_COMPRESSOR_STANDARD_COST,
                tables::VACUUM_CENTRAL_SYSTEM_COST,
            ),
            unit: "dollars".to_string(),
            example: None,
        },
        RateElement {
            name: "installation_rate_per_outlet".to_string(),
            display_name: "Outlet Installation Rate".to_string(),
            category: RateCategory::PerUnit,
            description: "Installation and piping per outlet across all \
                required systems."
                .to_string(),
            formula: "total_outlets * installation_rate".to_string(),
            values: tables::INSTALLATION_RATE_PER_OUTLET.to_string(),
            unit: "dollars per outlet".to_string(),
            example: Some(RateExample {
                scenario: "4 oxygen outlets, central supply and backup".to_string(),
                calculation: "4*1,200 + 15,000 + 8,000 + 4*300".to_string(),
                result: "$29,000".to_string(),
            }),
        },
        RateElement {
            name: "breakdown_shares".to_string(),
            display_name: "Cost Breakdown Shares".to_string(),
            category: RateCategory::Share,
            description: "Relative category weights, normalized over their sum \
                so the sixteen categories partition the total exactly."
                .to_string(),
            formula: "round(total * share / share_sum)".to_string(),
            values: format!(
                "site prep: {}, demolition: {}, framing: {}, hvac: {}, .. \
                 contingency: {} (sum {:.2})",
                tables::SITE_PREP_SHARE,
                tables::DEMOLITION_SHARE,
                tables::FRAMING_DRYWALL_INSULATION_SHARE,
                tables::HVAC_SHARE,
                tables::CONTINGENCY_SHARE,
                tables::breakdown_share_sum(),
            ),
            unit: "fraction".to_string(),
            example: None,
        },
        RateElement {
            name: "review_rates".to_string(),
            display_name: "Review-Stage Rates".to_string(),
            category: RateCategory::PerUnit,
            description: "Simplified rates the review step uses: flat per-sqft \
                base, per-room adders, and a flat gas model priced per outlet \
                entry. Intentionally separate from the other strategies."
                .to_string(),
            formula: "sqft*base + rooms*adders + entries*1,500 + 25,000".to_string(),
            values: format!(
                "base new/existing: {}/{}, treatment room: {}, surgical suite: {}, \
                 sterile per sqft: {}, lab per sqft: {}",
                tables::REVIEW_BASE_RATE_NEW_CONSTRUCTION,
                tables::REVIEW_BASE_RATE_EXISTING,
                tables::REVIEW_TREATMENT_ROOM_ADDER,
                tables::REVIEW_SURGICAL_SUITE_ADDER,
                tables::REVIEW_STERILE_RATE_PER_SQFT,
                tables::REVIEW_LAB_RATE_PER_SQFT,
            ),
            unit: "dollars".to_string(),
            example: None,
        },
        RateElement {
            name: "circulation_factor".to_string(),
            display_name: "Circulation Factor".to_string(),
            category: RateCategory::Multiplier,
            description: "Gross-up applied to the net space program area for \
                corridors, door swings, and wall thickness."
                .to_string(),
            formula: "round(net_area * circulation_factor)".to_string(),
            values: tables::CIRCULATION_FACTOR.to_string(),
            unit: "factor".to_string(),
            example: Some(RateExample {
                scenario: "4,465 sqft net program".to_string(),
                calculation: "4,465 * 1.22".to_string(),
                result: "5,447 sqft gross".to_string(),
            }),
        },
    ]
}

/// Render the full rate schema as pretty-printed JSON
pub fn get_rate_schema() -> String {
    let schema = RateSchemaDoc {
        version: "1.0".to_string(),
        generated_at: "2025-01-01T00:00:00Z".to_string(), // Static for determinism
        rates: rate_schema_elements(),
    };

    serde_json::to_string_pretty(&schema).expect("Schema serialization should not fail")
}
