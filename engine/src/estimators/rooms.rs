//! Room-by-room estimate
//!
//! The fine-grained strategy: each room category is priced on its own
//! area and fit-out multiplier, then the itemized lines are summed.
//! Rounding happens per line, matching the itemized-then-summed
//! presentation; the grand total is the sum of the rounded lines.

use serde::{Deserialize, Serialize};

use crate::models::{ProjectConfiguration, ProjectType, RoomCategory};
use crate::rates;

/// Itemized cost line for one room category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomCostLine {
    pub category: RoomCategory,
    /// Number of rooms priced
    pub count: u32,
    /// Area of each room (sqft)
    pub sqft: u32,
    /// Combined area (count × sqft)
    pub total_sqft: u32,
    /// Rounded cost of the whole category (dollars)
    pub cost: i64,
}

/// Result of the room-by-room strategy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomCostEstimate {
    /// One line per category with a non-zero count, in presentation order
    pub lines: Vec<RoomCostLine>,
    /// Sum of the rounded line costs (dollars)
    pub total: i64,
}

/// Estimate per-category room costs.
///
/// Categories with a zero count are excluded entirely. A missing basics
/// section prices rooms at the renovation base rate with no regional
/// adjustment; a missing room plan yields an empty estimate. Never fails.
pub fn estimate_room_costs(config: &ProjectConfiguration) -> RoomCostEstimate {
    let Some(plan) = &config.rooms else {
        return RoomCostEstimate::default();
    };

    let (base_rate, regional) = match &config.basics {
        Some(basics) => (
            rates::base_rate_per_sqft(basics.project_type),
            rates::regional_multiplier(&basics.location.state),
        ),
        None => (rates::base_rate_per_sqft(ProjectType::default()), 1.0),
    };

    let mut lines = Vec::new();
    let mut total = 0;
    for (category, spec) in plan.entries() {
        if spec.count == 0 {
            continue;
        }
        let cost = (f64::from(spec.count)
            * f64::from(spec.sqft)
            * base_rate
            * rates::room_cost_multiplier(category)
            * regional)
            .round() as i64;
        total += cost;
        lines.push(RoomCostLine {
            category,
            count: spec.count,
            sqft: spec.sqft,
            total_sqft: spec.total_sqft(),
            cost,
        });
    }

    RoomCostEstimate { lines, total }
}
