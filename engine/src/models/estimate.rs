//! Persisted estimate record
//!
//! The shape an external store keeps: the configuration as entered, the
//! computed cost breakdown, caller-supplied timestamps, and a lifecycle
//! status. The engine never reads a clock; timestamps arrive from the
//! caller so the same inputs always produce the same record body.

use serde::{Deserialize, Serialize};

use crate::estimators::breakdown::CostBreakdown;

use super::config::ProjectConfiguration;

/// Lifecycle status of a stored estimate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EstimateStatus {
    /// Breakdown generated and accepted
    Completed,
    /// Kept for reference only
    Archived,
    /// Wizard in progress or finished but not generated; also the
    /// fallback for unrecognized wire values
    #[default]
    #[serde(other)]
    Draft,
}

/// A stored estimate: configuration plus computed results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateData {
    /// Record identifier (UUID v4), assigned at creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The configuration as the wizard captured it
    #[serde(default)]
    pub configuration: ProjectConfiguration,

    /// Generated cost breakdown, absent until the review step runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_breakdown: Option<CostBreakdown>,

    /// ISO-8601 creation timestamp, caller-supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// ISO-8601 last-update timestamp, caller-supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(default)]
    pub status: EstimateStatus,
}

impl EstimateData {
    /// Create a draft record with a fresh UUID
    pub fn new(configuration: ProjectConfiguration) -> Self {
        Self {
            id: Some(uuid::Uuid::new_v4().to_string()),
            configuration,
            cost_breakdown: None,
            created_at: None,
            updated_at: None,
            status: EstimateStatus::Draft,
        }
    }

    /// Attach a generated breakdown and mark the estimate completed
    pub fn with_breakdown(mut self, breakdown: CostBreakdown) -> Self {
        self.cost_breakdown = Some(breakdown);
        self.status = EstimateStatus::Completed;
        self
    }

    /// Set both timestamps (ISO-8601 strings from the caller's clock)
    pub fn with_timestamps(
        mut self,
        created_at: impl Into<String>,
        updated_at: impl Into<String>,
    ) -> Self {
        self.created_at = Some(created_at.into());
        self.updated_at = Some(updated_at.into());
        self
    }

    /// Mark the estimate archived
    pub fn archive(mut self) -> Self {
        self.status = EstimateStatus::Archived;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::breakdown::build_cost_breakdown;

    #[test]
    fn test_new_record_is_a_draft_with_id() {
        let record = EstimateData::new(ProjectConfiguration::sample());
        assert_eq!(record.status, EstimateStatus::Draft);
        assert!(record.cost_breakdown.is_none());

        let id = record.id.expect("id assigned at creation");
        assert_eq!(id.len(), 36); // canonical UUID text form
    }

    #[test]
    fn test_ids_are_unique() {
        let a = EstimateData::new(ProjectConfiguration::new());
        let b = EstimateData::new(ProjectConfiguration::new());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_with_breakdown_completes_the_estimate() {
        let record = EstimateData::new(ProjectConfiguration::sample())
            .with_breakdown(build_cost_breakdown(375_000));
        assert_eq!(record.status, EstimateStatus::Completed);
        assert_eq!(record.cost_breakdown.as_ref().map(|b| b.total), Some(375_000));
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&EstimateStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
        let status: EstimateStatus = serde_json::from_str("\"unknown-status\"").unwrap();
        assert_eq!(status, EstimateStatus::Draft);
    }
}
