//! Room plan model
//!
//! The per-category room plan used by the room-by-room estimator: fifteen
//! named room categories, each with a count and a per-room area. Category
//! metadata (display name, functional group, planning areas) lives here;
//! the dollar multipliers live in the rate tables.

use serde::{Deserialize, Serialize};

/// Functional grouping of room categories, used for display ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomGroup {
    Clinical,
    Imaging,
    Support,
    Administrative,
    Public,
    Staff,
    Facilities,
    Infrastructure,
}

impl RoomGroup {
    /// Human-readable group name
    pub fn display_name(self) -> &'static str {
        match self {
            RoomGroup::Clinical => "Clinical Spaces",
            RoomGroup::Imaging => "Imaging & Diagnostics",
            RoomGroup::Support => "Support Spaces",
            RoomGroup::Administrative => "Administrative",
            RoomGroup::Public => "Public Areas",
            RoomGroup::Staff => "Staff Areas",
            RoomGroup::Facilities => "Facilities",
            RoomGroup::Infrastructure => "Infrastructure",
        }
    }
}

/// Named room category of an oral-surgery office
///
/// Declaration order is the presentation order of itemized estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomCategory {
    Operatory,
    Consultation,
    Recovery,
    Reception,
    Office,
    Sterilization,
    Laboratory,
    Xray,
    Cbct,
    Storage,
    BreakRoom,
    Restroom,
    Mechanical,
    It,
    Utility,
}

impl RoomCategory {
    /// All categories in presentation order
    pub const ALL: [RoomCategory; 15] = [
        RoomCategory::Operatory,
        RoomCategory::Consultation,
        RoomCategory::Recovery,
        RoomCategory::Reception,
        RoomCategory::Office,
        RoomCategory::Sterilization,
        RoomCategory::Laboratory,
        RoomCategory::Xray,
        RoomCategory::Cbct,
        RoomCategory::Storage,
        RoomCategory::BreakRoom,
        RoomCategory::Restroom,
        RoomCategory::Mechanical,
        RoomCategory::It,
        RoomCategory::Utility,
    ];

    /// Human-readable category name
    pub fn display_name(self) -> &'static str {
        match self {
            RoomCategory::Operatory => "Operatory Rooms",
            RoomCategory::Consultation => "Consultation Rooms",
            RoomCategory::Recovery => "Recovery Rooms",
            RoomCategory::Reception => "Reception/Waiting",
            RoomCategory::Office => "Doctor Offices",
            RoomCategory::Sterilization => "Sterilization",
            RoomCategory::Laboratory => "Laboratory",
            RoomCategory::Xray => "X-Ray Rooms",
            RoomCategory::Cbct => "CBCT/3D Imaging",
            RoomCategory::Storage => "Storage Rooms",
            RoomCategory::BreakRoom => "Break Room",
            RoomCategory::Restroom => "Restrooms",
            RoomCategory::Mechanical => "Mechanical Room",
            RoomCategory::It => "IT/Server Room",
            RoomCategory::Utility => "Utility/Janitorial",
        }
    }

    /// What the space is for
    pub fn description(self) -> &'static str {
        match self {
            RoomCategory::Operatory => {
                "Primary surgical suites with medical gas, specialized lighting, and equipment prep"
            }
            RoomCategory::Consultation => "Private patient consultation and examination rooms",
            RoomCategory::Recovery => "Post-operative patient recovery and monitoring areas",
            RoomCategory::Reception => "Patient waiting area, reception desk, and check-in/out",
            RoomCategory::Office => "Private offices for consultations and administrative work",
            RoomCategory::Sterilization => "Instrument cleaning, sterilization, and storage",
            RoomCategory::Laboratory => "On-site lab for prosthetics and dental work",
            RoomCategory::Xray => "Traditional radiography with lead-lined walls",
            RoomCategory::Cbct => "Cone beam CT and advanced 3D imaging suite",
            RoomCategory::Storage => "Supply storage, inventory, and equipment storage",
            RoomCategory::BreakRoom => "Staff break room, kitchen, and lounge area",
            RoomCategory::Restroom => "Patient and staff restrooms (ADA compliant)",
            RoomCategory::Mechanical => {
                "HVAC, water heater, electrical panel, and building systems"
            }
            RoomCategory::It => "Network equipment, servers, and telecommunications",
            RoomCategory::Utility => "Cleaning supplies, mop sink, and utility storage",
        }
    }

    /// Functional group
    pub fn group(self) -> RoomGroup {
        match self {
            RoomCategory::Operatory | RoomCategory::Consultation | RoomCategory::Recovery => {
                RoomGroup::Clinical
            }
            RoomCategory::Xray | RoomCategory::Cbct => RoomGroup::Imaging,
            RoomCategory::Sterilization | RoomCategory::Laboratory | RoomCategory::Storage => {
                RoomGroup::Support
            }
            RoomCategory::Office => RoomGroup::Administrative,
            RoomCategory::Reception => RoomGroup::Public,
            RoomCategory::BreakRoom => RoomGroup::Staff,
            RoomCategory::Restroom | RoomCategory::Utility => RoomGroup::Facilities,
            RoomCategory::Mechanical | RoomCategory::It => RoomGroup::Infrastructure,
        }
    }

    /// Planning area bounds (min, max) in square feet
    pub fn sqft_range(self) -> (u32, u32) {
        match self {
            RoomCategory::Operatory => (120, 200),
            RoomCategory::Consultation => (80, 150),
            RoomCategory::Recovery => (80, 150),
            RoomCategory::Reception => (200, 500),
            RoomCategory::Office => (100, 180),
            RoomCategory::Sterilization => (60, 120),
            RoomCategory::Laboratory => (100, 250),
            RoomCategory::Xray => (50, 80),
            RoomCategory::Cbct => (70, 120),
            RoomCategory::Storage => (30, 100),
            RoomCategory::BreakRoom => (80, 200),
            RoomCategory::Restroom => (30, 60),
            RoomCategory::Mechanical => (80, 150),
            RoomCategory::It => (20, 50),
            RoomCategory::Utility => (25, 60),
        }
    }

    /// Recommended per-room area in square feet
    pub fn recommended_sqft(self) -> u32 {
        match self {
            RoomCategory::Operatory => 150,
            RoomCategory::Consultation => 120,
            RoomCategory::Recovery => 100,
            RoomCategory::Reception => 300,
            RoomCategory::Office => 120,
            RoomCategory::Sterilization => 80,
            RoomCategory::Laboratory => 150,
            RoomCategory::Xray => 60,
            RoomCategory::Cbct => 80,
            RoomCategory::Storage => 50,
            RoomCategory::BreakRoom => 120,
            RoomCategory::Restroom => 40,
            RoomCategory::Mechanical => 100,
            RoomCategory::It => 30,
            RoomCategory::Utility => 40,
        }
    }
}

/// Count and per-room area for one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSpec {
    /// Number of rooms (zero means the category is unused)
    #[serde(default)]
    pub count: u32,
    /// Area of each room in square feet
    #[serde(default)]
    pub sqft: u32,
}

impl RoomSpec {
    pub fn new(count: u32, sqft: u32) -> Self {
        Self { count, sqft }
    }

    /// Combined area of all rooms in this category
    pub fn total_sqft(&self) -> u32 {
        self.count * self.sqft
    }
}

/// Room plan: one [`RoomSpec`] per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPlan {
    #[serde(default)]
    pub operatory: RoomSpec,
    #[serde(default)]
    pub consultation: RoomSpec,
    #[serde(default)]
    pub recovery: RoomSpec,
    #[serde(default)]
    pub reception: RoomSpec,
    #[serde(default)]
    pub office: RoomSpec,
    #[serde(default)]
    pub sterilization: RoomSpec,
    #[serde(default)]
    pub laboratory: RoomSpec,
    #[serde(default)]
    pub xray: RoomSpec,
    #[serde(default)]
    pub cbct: RoomSpec,
    #[serde(default)]
    pub storage: RoomSpec,
    #[serde(default)]
    pub break_room: RoomSpec,
    #[serde(default)]
    pub restroom: RoomSpec,
    #[serde(default)]
    pub mechanical: RoomSpec,
    #[serde(default)]
    pub it: RoomSpec,
    #[serde(default)]
    pub utility: RoomSpec,
}

impl Default for RoomPlan {
    /// Empty plan: every category at zero count, recommended per-room areas
    fn default() -> Self {
        let spec = |c: RoomCategory| RoomSpec::new(0, c.recommended_sqft());
        Self {
            operatory: spec(RoomCategory::Operatory),
            consultation: spec(RoomCategory::Consultation),
            recovery: spec(RoomCategory::Recovery),
            reception: spec(RoomCategory::Reception),
            office: spec(RoomCategory::Office),
            sterilization: spec(RoomCategory::Sterilization),
            laboratory: spec(RoomCategory::Laboratory),
            xray: spec(RoomCategory::Xray),
            cbct: spec(RoomCategory::Cbct),
            storage: spec(RoomCategory::Storage),
            break_room: spec(RoomCategory::BreakRoom),
            restroom: spec(RoomCategory::Restroom),
            mechanical: spec(RoomCategory::Mechanical),
            it: spec(RoomCategory::It),
            utility: spec(RoomCategory::Utility),
        }
    }
}

impl RoomPlan {
    /// Sample plan matching the wizard's initial room step
    pub fn sample() -> Self {
        Self {
            operatory: RoomSpec::new(2, 150),
            consultation: RoomSpec::new(1, 120),
            recovery: RoomSpec::new(1, 100),
            reception: RoomSpec::new(1, 300),
            office: RoomSpec::new(1, 120),
            sterilization: RoomSpec::new(1, 80),
            laboratory: RoomSpec::new(0, 150),
            xray: RoomSpec::new(1, 60),
            cbct: RoomSpec::new(0, 80),
            storage: RoomSpec::new(1, 50),
            break_room: RoomSpec::new(1, 120),
            restroom: RoomSpec::new(2, 40),
            mechanical: RoomSpec::new(1, 100),
            it: RoomSpec::new(1, 30),
            utility: RoomSpec::new(1, 40),
        }
    }

    /// Spec for one category
    pub fn spec(&self, category: RoomCategory) -> &RoomSpec {
        match category {
            RoomCategory::Operatory => &self.operatory,
            RoomCategory::Consultation => &self.consultation,
            RoomCategory::Recovery => &self.recovery,
            RoomCategory::Reception => &self.reception,
            RoomCategory::Office => &self.office,
            RoomCategory::Sterilization => &self.sterilization,
            RoomCategory::Laboratory => &self.laboratory,
            RoomCategory::Xray => &self.xray,
            RoomCategory::Cbct => &self.cbct,
            RoomCategory::Storage => &self.storage,
            RoomCategory::BreakRoom => &self.break_room,
            RoomCategory::Restroom => &self.restroom,
            RoomCategory::Mechanical => &self.mechanical,
            RoomCategory::It => &self.it,
            RoomCategory::Utility => &self.utility,
        }
    }

    /// Replace one category's spec, returning the updated plan
    pub fn with_spec(mut self, category: RoomCategory, spec: RoomSpec) -> Self {
        match category {
            RoomCategory::Operatory => self.operatory = spec,
            RoomCategory::Consultation => self.consultation = spec,
            RoomCategory::Recovery => self.recovery = spec,
            RoomCategory::Reception => self.reception = spec,
            RoomCategory::Office => self.office = spec,
            RoomCategory::Sterilization => self.sterilization = spec,
            RoomCategory::Laboratory => self.laboratory = spec,
            RoomCategory::Xray => self.xray = spec,
            RoomCategory::Cbct => self.cbct = spec,
            RoomCategory::Storage => self.storage = spec,
            RoomCategory::BreakRoom => self.break_room = spec,
            RoomCategory::Restroom => self.restroom = spec,
            RoomCategory::Mechanical => self.mechanical = spec,
            RoomCategory::It => self.it = spec,
            RoomCategory::Utility => self.utility = spec,
        }
        self
    }

    /// All (category, spec) pairs in presentation order
    pub fn entries(&self) -> impl Iterator<Item = (RoomCategory, &RoomSpec)> + '_ {
        RoomCategory::ALL.iter().map(move |&c| (c, self.spec(c)))
    }

    /// Combined planned area across all categories
    pub fn total_sqft(&self) -> u32 {
        self.entries().map(|(_, spec)| spec.total_sqft()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        let json = serde_json::to_string(&RoomCategory::BreakRoom).unwrap();
        assert_eq!(json, "\"break-room\"");
        let json = serde_json::to_string(&RoomCategory::Xray).unwrap();
        assert_eq!(json, "\"xray\"");
    }

    #[test]
    fn test_every_category_has_metadata() {
        for category in RoomCategory::ALL {
            assert!(!category.display_name().is_empty());
            assert!(!category.description().is_empty());
            let (min, max) = category.sqft_range();
            let rec = category.recommended_sqft();
            assert!(min <= rec && rec <= max, "{category:?}: {min}..{rec}..{max}");
        }
    }

    #[test]
    fn test_default_plan_is_empty() {
        let plan = RoomPlan::default();
        assert_eq!(plan.total_sqft(), 0);
        assert!(plan.entries().all(|(_, spec)| spec.count == 0));
    }

    #[test]
    fn test_sample_plan_total_sqft() {
        // 2*150 + 120 + 100 + 300 + 120 + 80 + 60 + 50 + 120 + 2*40 + 100 + 30 + 40
        assert_eq!(RoomPlan::sample().total_sqft(), 1_500);
    }

    #[test]
    fn test_with_spec_replaces_one_category() {
        let plan = RoomPlan::default().with_spec(RoomCategory::Operatory, RoomSpec::new(4, 160));
        assert_eq!(plan.operatory, RoomSpec::new(4, 160));
        assert_eq!(plan.consultation.count, 0);
    }

    #[test]
    fn test_entries_follow_presentation_order() {
        let plan = RoomPlan::sample();
        let order: Vec<RoomCategory> = plan.entries().map(|(c, _)| c).collect();
        assert_eq!(order[0], RoomCategory::Operatory);
        assert_eq!(order[14], RoomCategory::Utility);
    }
}
