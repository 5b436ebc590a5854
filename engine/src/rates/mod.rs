//! Rate Tables and Schema Documentation
//!
//! This module provides:
//! - The static rate tables every estimator reads (`tables`)
//! - Self-documenting schema for the rates (`schema_docs`)
//!
//! # Single Source of Truth
//!
//! Every rate, factor, and share lives in `tables.rs`; estimators never
//! carry their own copies. The schema export feeds the CLI command
//! `office-estimator rate-schema`.

pub mod schema_docs;
pub mod tables;

// Re-exports
pub use schema_docs::{
    get_rate_schema, rate_schema_elements, RateCategory, RateElement, RateExample, RateSchemaDoc,
};
pub use tables::*;
