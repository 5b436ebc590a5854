//! Project configuration
//!
//! The immutable value the wizard assembles and the estimators consume.
//! Every section is optional: a configuration mid-wizard simply has fewer
//! sections, and absent sections contribute zero cost. Updates go through
//! typed per-section operations that return a new value; there is no path
//! string mutation anywhere.

use serde::{Deserialize, Serialize};

use super::ancillary::{AdaCompliance, EquipmentIntegration, FinishLevel, ItDataAvNeeds};
use super::gas::MedicalGasRequirements;
use super::program::SpaceProgram;
use super::project::ProjectBasics;
use super::rooms::RoomPlan;

/// Complete (or partial) project configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basics: Option<ProjectBasics>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms: Option<RoomPlan>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_gas: Option<MedicalGasRequirements>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_program: Option<SpaceProgram>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<EquipmentIntegration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finishes: Option<FinishLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ada: Option<AdaCompliance>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub it_av: Option<ItDataAvNeeds>,
}

impl ProjectConfiguration {
    /// Empty configuration (no sections filled in yet)
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the basics section
    pub fn with_basics(mut self, basics: ProjectBasics) -> Self {
        self.basics = Some(basics);
        self
    }

    /// Replace the room plan section
    pub fn with_rooms(mut self, rooms: RoomPlan) -> Self {
        self.rooms = Some(rooms);
        self
    }

    /// Replace the medical gas section
    pub fn with_medical_gas(mut self, gas: MedicalGasRequirements) -> Self {
        self.medical_gas = Some(gas);
        self
    }

    /// Replace the space program section
    pub fn with_space_program(mut self, program: SpaceProgram) -> Self {
        self.space_program = Some(program);
        self
    }

    /// Replace the equipment section
    pub fn with_equipment(mut self, equipment: EquipmentIntegration) -> Self {
        self.equipment = Some(equipment);
        self
    }

    /// Replace the finishes section
    pub fn with_finishes(mut self, finishes: FinishLevel) -> Self {
        self.finishes = Some(finishes);
        self
    }

    /// Replace the ADA section
    pub fn with_ada(mut self, ada: AdaCompliance) -> Self {
        self.ada = Some(ada);
        self
    }

    /// Replace the IT/data/AV section
    pub fn with_it_av(mut self, it_av: ItDataAvNeeds) -> Self {
        self.it_av = Some(it_av);
        self
    }

    /// Fully populated sample configuration matching the wizard's initial
    /// state across all steps
    pub fn sample() -> Self {
        Self::new()
            .with_basics(ProjectBasics::sample())
            .with_rooms(RoomPlan::sample())
            .with_medical_gas(MedicalGasRequirements::sample())
            .with_space_program(SpaceProgram::sample())
            .with_equipment(EquipmentIntegration::sample())
            .with_finishes(FinishLevel::sample())
            .with_ada(AdaCompliance::sample())
            .with_it_av(ItDataAvNeeds::sample())
    }
}
