//! Estimation strategies
//!
//! Three independent readings of the same project, one per wizard stage,
//! plus the shared helpers they feed:
//!
//! - **basics**: whole-building blended rate × gross area
//! - **rooms**: itemized per-category room costs
//! - **review**: simplified flat-rate plus per-room adders
//! - **gas**: medical gas systems and installation
//! - **breakdown**: partition of a final total into categories
//! - **program**: gross area from the detailed space worksheet
//!
//! The strategies intentionally use different formulas and are never
//! reconciled against each other. Every operation is a total function:
//! partial input yields partial (or zero) cost, never an error.

pub mod basics;
pub mod breakdown;
pub mod gas;
pub mod program;
pub mod review;
pub mod rooms;

// Re-export main operations and result types for convenience
pub use basics::estimate_whole_building_cost;
pub use breakdown::{build_cost_breakdown, CostBreakdown};
pub use gas::{estimate_medical_gas_cost, medical_gas_lines, GasSystemCost, MedicalGasCostEstimate};
pub use program::estimate_program_area;
pub use review::{estimate_review_cost, review_summary, ReviewSummary};
pub use rooms::{estimate_room_costs, RoomCostEstimate, RoomCostLine};
