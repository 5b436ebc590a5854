//! Review-stage estimate
//!
//! The third, deliberately simplified strategy: the review step prices
//! the project from a flat per-sqft rate plus per-room adders and a flat
//! medical gas model. Its constants differ from both the whole-building
//! and room-by-room strategies; the three are presented as independent
//! readings of the same project and are never reconciled.

use serde::{Deserialize, Serialize};

use crate::models::{ProjectConfiguration, ProjectType, Timeline};
use crate::rates;

/// Four-bucket display summary of a review-stage total
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub construction: i64,
    pub mep_systems: i64,
    pub equipment: i64,
    pub finishes: i64,
}

/// Estimate the review-stage cost in dollars. Never fails.
///
/// Absent sections contribute nothing; the medical gas base cost applies
/// whenever the gas section is present at all, and gas outlets are priced
/// per entry (room line item), not per outlet count.
pub fn estimate_review_cost(config: &ProjectConfiguration) -> i64 {
    let mut total = 0.0;

    if let Some(basics) = &config.basics {
        let base_rate = match basics.project_type {
            ProjectType::NewConstruction => rates::REVIEW_BASE_RATE_NEW_CONSTRUCTION,
            _ => rates::REVIEW_BASE_RATE_EXISTING,
        };
        total += f64::from(basics.total_square_footage) * base_rate;

        match basics.timeline {
            Timeline::Accelerated => total *= rates::REVIEW_ACCELERATED_FACTOR,
            Timeline::Relaxed => total *= rates::REVIEW_RELAXED_FACTOR,
            Timeline::Standard => {}
        }
    }

    if let Some(program) = &config.space_program {
        total += f64::from(program.treatment_rooms.count)
            * rates::REVIEW_TREATMENT_ROOM_ADDER as f64;
        total += f64::from(program.special_rooms.surgical_suites.count)
            * rates::REVIEW_SURGICAL_SUITE_ADDER as f64;
        total += f64::from(program.sterilization_areas.central_sterile.size)
            * rates::REVIEW_STERILE_RATE_PER_SQFT as f64;
        if program.lab_spaces.has_lab {
            total +=
                f64::from(program.lab_spaces.size) * rates::REVIEW_LAB_RATE_PER_SQFT as f64;
        }
    }

    if let Some(gas) = &config.medical_gas {
        total += gas.outlet_entries() as f64 * rates::REVIEW_GAS_RATE_PER_OUTLET_ENTRY as f64;
        total += rates::REVIEW_GAS_BASE_SYSTEM_COST as f64;
    }

    total.round() as i64
}

/// Split a review-stage total into the four display buckets
pub fn review_summary(total: i64) -> ReviewSummary {
    let bucket = |share: f64| (total as f64 * share).round() as i64;
    ReviewSummary {
        construction: bucket(rates::REVIEW_CONSTRUCTION_SHARE),
        mep_systems: bucket(rates::REVIEW_MEP_SHARE),
        equipment: bucket(rates::REVIEW_EQUIPMENT_SHARE),
        finishes: bucket(rates::REVIEW_FINISHES_SHARE),
    }
}
