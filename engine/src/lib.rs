//! Office Estimator Core - Rust Engine
//!
//! Deterministic construction cost estimation for oral-surgery office
//! build-outs.
//!
//! # Architecture
//!
//! - **models**: Configuration value types (basics, rooms, gas, program,
//!   ancillary sections) and the persisted estimate record
//! - **rates**: Static rate tables and their self-documenting schema
//! - **estimators**: The estimation strategies (whole-building,
//!   room-by-room, review-stage, medical gas, breakdown, program area)
//! - **validation**: Input-policy checks offered to the form layer
//!
//! # Critical Invariants
//!
//! 1. All cost outputs are i64 (whole dollars)
//! 2. Estimation is total: partial or malformed input maps to documented
//!    defaults, never to an error
//! 3. Same configuration always yields the same estimate (no hidden state)

// Module declarations
pub mod estimators;
pub mod models;
pub mod rates;
pub mod validation;

// Re-exports for convenience
pub use estimators::{
    build_cost_breakdown, estimate_medical_gas_cost, estimate_program_area,
    estimate_review_cost, estimate_room_costs, estimate_whole_building_cost, medical_gas_lines,
    review_summary, CostBreakdown, MedicalGasCostEstimate, ReviewSummary, RoomCostEstimate,
    RoomCostLine,
};
pub use models::{
    EstimateData, EstimateStatus, MedicalGasRequirements, ProjectBasics, ProjectConfiguration,
    RoomPlan, SpaceProgram,
};
pub use rates::get_rate_schema;
pub use validation::{validate, ValidationError};

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

/// Estimate a project from a configuration JSON string.
///
/// Returns a JSON string with every strategy's result:
/// - On success: `{"valid": true, "whole_building_cost": ..., ...}`
/// - On parse failure: `{"valid": false, "errors": [{"type": "...", "message": "..."}]}`
#[cfg(feature = "pyo3")]
#[pyfunction]
#[pyo3(name = "estimate_from_json")]
fn py_estimate_from_json(config_json: &str) -> PyResult<String> {
    use serde_json::json;

    let config: ProjectConfiguration = match serde_json::from_str(config_json) {
        Ok(config) => config,
        Err(e) => {
            let result = json!({
                "valid": false,
                "errors": [{
                    "type": "ParseError",
                    "message": format!("JSON parsing failed: {}", e)
                }]
            });
            return Ok(result.to_string());
        }
    };

    let review_cost = estimate_review_cost(&config);
    let result = json!({
        "valid": true,
        "whole_building_cost": estimate_whole_building_cost(&config),
        "room_costs": estimate_room_costs(&config),
        "medical_gas": config
            .medical_gas
            .as_ref()
            .map(medical_gas_lines)
            .unwrap_or_default(),
        "review_cost": review_cost,
        "review_summary": review_summary(review_cost),
        "cost_breakdown": build_cost_breakdown(review_cost),
        "program_area": config.space_program.as_ref().map(estimate_program_area),
    });

    Ok(result.to_string())
}

/// Get the rate schema documentation as a JSON string.
///
/// This function generates documentation of all rate elements including
/// per-square-foot rates, multipliers, fixed add-ons, and shares.
///
/// Returns a JSON string containing the RateSchemaDoc structure.
#[cfg(feature = "pyo3")]
#[pyfunction]
#[pyo3(name = "get_rate_schema")]
fn py_get_rate_schema() -> PyResult<String> {
    Ok(rates::schema_docs::get_rate_schema())
}

/// Validate a configuration JSON string against the input policy.
///
/// Returns a JSON string with validation results:
/// - On success: `{"valid": true}`
/// - On failure: `{"valid": false, "errors": [{"type": "...", "message": "..."}]}`
#[cfg(feature = "pyo3")]
#[pyfunction]
#[pyo3(name = "validate_configuration")]
fn py_validate_configuration(config_json: &str) -> PyResult<String> {
    use serde_json::json;

    let config: ProjectConfiguration = match serde_json::from_str(config_json) {
        Ok(config) => config,
        Err(e) => {
            let result = json!({
                "valid": false,
                "errors": [{
                    "type": "ParseError",
                    "message": format!("JSON parsing failed: {}", e)
                }]
            });
            return Ok(result.to_string());
        }
    };

    let result = match validation::validate(&config) {
        Ok(()) => json!({ "valid": true }),
        Err(errors) => {
            let error_list: Vec<_> = errors
                .iter()
                .map(|e| {
                    json!({
                        "type": "PolicyViolation",
                        "message": e.to_string()
                    })
                })
                .collect();
            json!({ "valid": false, "errors": error_list })
        }
    };

    Ok(result.to_string())
}

#[cfg(feature = "pyo3")]
#[pymodule]
fn office_estimator_core_rs(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_estimate_from_json, m)?)?;
    m.add_function(wrap_pyfunction!(py_get_rate_schema, m)?)?;
    m.add_function(wrap_pyfunction!(py_validate_configuration, m)?)?;
    Ok(())
}
