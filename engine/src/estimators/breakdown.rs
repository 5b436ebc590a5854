//! Cost breakdown
//!
//! Partitions a total — however it was derived upstream — into the sixteen
//! named construction categories. The category weights are normalized over
//! their sum, so the unrounded category values always add up to the total
//! exactly; each category then rounds independently, and the `total` field
//! echoes the input verbatim. Rounded categories may therefore drift from
//! `total` by at most one dollar per category.

use serde::{Deserialize, Serialize};

use crate::rates;

/// Total project cost partitioned into construction categories
///
/// All values in whole dollars.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub site_prep: i64,
    pub demolition: i64,
    pub framing_drywall_insulation: i64,
    pub hvac: i64,
    pub electrical: i64,
    pub plumbing: i64,
    pub millwork_surfaces: i64,
    pub flooring_doors: i64,
    pub paint: i64,
    pub medical_gas: i64,
    pub special_equipment: i64,
    pub permits: i64,
    pub general_conditions: i64,
    pub overhead: i64,
    pub profit: i64,
    pub contingency: i64,
    /// The input total, echoed verbatim (not the sum of rounded parts)
    pub total: i64,
}

impl CostBreakdown {
    /// Sum of the rounded category values
    ///
    /// Differs from `total` only by accumulated per-category rounding.
    pub fn category_sum(&self) -> i64 {
        self.site_prep
            + self.demolition
            + self.framing_drywall_insulation
            + self.hvac
            + self.electrical
            + self.plumbing
            + self.millwork_surfaces
            + self.flooring_doors
            + self.paint
            + self.medical_gas
            + self.special_equipment
            + self.permits
            + self.general_conditions
            + self.overhead
            + self.profit
            + self.contingency
    }

    /// Category values with display labels, in presentation order
    pub fn categories(&self) -> [(&'static str, i64); 16] {
        [
            ("Site Preparation", self.site_prep),
            ("Demolition", self.demolition),
            ("Framing/Drywall/Insulation", self.framing_drywall_insulation),
            ("HVAC", self.hvac),
            ("Electrical", self.electrical),
            ("Plumbing", self.plumbing),
            ("Millwork/Surfaces", self.millwork_surfaces),
            ("Flooring/Doors", self.flooring_doors),
            ("Paint", self.paint),
            ("Medical Gas", self.medical_gas),
            ("Special Equipment", self.special_equipment),
            ("Permits", self.permits),
            ("General Conditions", self.general_conditions),
            ("Overhead", self.overhead),
            ("Profit", self.profit),
            ("Contingency", self.contingency),
        ]
    }
}

/// Partition a total cost into the named categories. Never fails.
pub fn build_cost_breakdown(total: i64) -> CostBreakdown {
    let denominator = rates::breakdown_share_sum();
    let part = |share: f64| (total as f64 * share / denominator).round() as i64;

    CostBreakdown {
        site_prep: part(rates::SITE_PREP_SHARE),
        demolition: part(rates::DEMOLITION_SHARE),
        framing_drywall_insulation: part(rates::FRAMING_DRYWALL_INSULATION_SHARE),
        hvac: part(rates::HVAC_SHARE),
        electrical: part(rates::ELECTRICAL_SHARE),
        plumbing: part(rates::PLUMBING_SHARE),
        millwork_surfaces: part(rates::MILLWORK_SURFACES_SHARE),
        flooring_doors: part(rates::FLOORING_DOORS_SHARE),
        paint: part(rates::PAINT_SHARE),
        medical_gas: part(rates::MEDICAL_GAS_SHARE),
        special_equipment: part(rates::SPECIAL_EQUIPMENT_SHARE),
        permits: part(rates::PERMITS_SHARE),
        general_conditions: part(rates::GENERAL_CONDITIONS_SHARE),
        overhead: part(rates::OVERHEAD_SHARE),
        profit: part(rates::PROFIT_SHARE),
        contingency: part(rates::CONTINGENCY_SHARE),
        total,
    }
}
