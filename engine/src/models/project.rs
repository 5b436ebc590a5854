//! Project basics model
//!
//! The first wizard section: what is being built, where, how big, and on
//! what schedule. Every field has a serde default so a partially completed
//! wizard still deserializes.

use serde::{Deserialize, Serialize};

/// Project delivery type
///
/// Selects the base construction rate per square foot. Unknown wire values
/// deserialize to the renovation default rather than failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    /// Ground-up construction with full MEP and structural work
    NewConstruction,
    /// Build-out of existing shell space
    TenantImprovement,
    /// Existing space renovation with selective demolition; also the
    /// fallback for unrecognized wire values
    #[default]
    #[serde(other)]
    Renovation,
}

impl ProjectType {
    /// Human-readable name
    pub fn display_name(self) -> &'static str {
        match self {
            ProjectType::NewConstruction => "New Construction",
            ProjectType::Renovation => "Renovation",
            ProjectType::TenantImprovement => "Tenant Improvement",
        }
    }
}

/// Building placement of the suite
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildingType {
    UpperFloor,
    Basement,
    /// Street-level space, no surcharge; the fallback for unrecognized
    /// wire values
    #[default]
    #[serde(other)]
    GroundFloor,
}

/// Construction schedule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timeline {
    /// Fast-track construction at a premium
    Accelerated,
    /// Extended schedule with a small discount
    Relaxed,
    #[default]
    #[serde(other)]
    Standard,
}

/// Street address of the project site
///
/// Only `state` feeds the estimators (regional multiplier lookup); the
/// rest is carried for the persisted record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    /// Two-letter state code (e.g., "TX")
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
}

/// Project basics: identity, location, size, and schedule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectBasics {
    #[serde(default)]
    pub project_name: String,

    #[serde(default)]
    pub location: Location,

    /// Gross square footage of the suite.
    ///
    /// Input policy bounds this to [500, 10000] (see the validation
    /// module); the estimators accept any value and treat zero as an
    /// empty project.
    #[serde(default)]
    pub total_square_footage: u32,

    /// Desired completion date, caller-formatted (ISO-8601 date string)
    #[serde(default)]
    pub desired_completion_date: String,

    #[serde(default)]
    pub timeline: Timeline,

    #[serde(default)]
    pub project_type: ProjectType,

    #[serde(default)]
    pub building_type: BuildingType,
}

impl ProjectBasics {
    /// Sample basics matching the wizard's initial form state
    pub fn sample() -> Self {
        Self {
            project_name: "Modern Oral Surgery Center".to_string(),
            location: Location {
                street: "123 Medical Center Dr".to_string(),
                city: "Austin".to_string(),
                state: "TX".to_string(),
                zip_code: "78701".to_string(),
            },
            total_square_footage: 2_500,
            desired_completion_date: String::new(),
            timeline: Timeline::Standard,
            project_type: ProjectType::Renovation,
            building_type: BuildingType::GroundFloor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_names_are_kebab_case() {
        let json = serde_json::to_string(&ProjectType::NewConstruction).unwrap();
        assert_eq!(json, "\"new-construction\"");
        let json = serde_json::to_string(&BuildingType::UpperFloor).unwrap();
        assert_eq!(json, "\"upper-floor\"");
        let json = serde_json::to_string(&Timeline::Relaxed).unwrap();
        assert_eq!(json, "\"relaxed\"");
    }

    #[test]
    fn test_unknown_enum_values_fall_back_to_defaults() {
        let t: ProjectType = serde_json::from_str("\"mixed-use\"").unwrap();
        assert_eq!(t, ProjectType::Renovation);
        let b: BuildingType = serde_json::from_str("\"rooftop\"").unwrap();
        assert_eq!(b, BuildingType::GroundFloor);
        let tl: Timeline = serde_json::from_str("\"whenever\"").unwrap();
        assert_eq!(tl, Timeline::Standard);
    }

    #[test]
    fn test_partial_basics_deserialize() {
        // A wizard mid-flight only has some fields filled in
        let basics: ProjectBasics =
            serde_json::from_str(r#"{"total_square_footage": 1800}"#).unwrap();
        assert_eq!(basics.total_square_footage, 1_800);
        assert_eq!(basics.project_type, ProjectType::Renovation);
        assert_eq!(basics.location.state, "");
    }

    #[test]
    fn test_default_is_empty_project() {
        let basics = ProjectBasics::default();
        assert_eq!(basics.total_square_footage, 0);
        assert!(basics.project_name.is_empty());
    }
}
