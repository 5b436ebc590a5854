//! Domain models for the office estimator
//!
//! Configuration sections mirror the wizard steps: basics, room plan,
//! medical gas, space program, and the ancillary sections (equipment,
//! finishes, ADA, IT/AV). [`ProjectConfiguration`] composes them;
//! [`EstimateData`] is the persisted record shape.

pub mod ancillary;
pub mod config;
pub mod estimate;
pub mod gas;
pub mod program;
pub mod project;
pub mod rooms;

// Re-exports
pub use ancillary::{AdaCompliance, EquipmentIntegration, FinishLevel, ItDataAvNeeds};
pub use config::ProjectConfiguration;
pub use estimate::{EstimateData, EstimateStatus};
pub use gas::{GasOutlet, GasType, MedicalGasRequirements};
pub use program::{
    ConsultationRoomSize, SpaceProgram, SurgicalSuiteSize, TreatmentRoomSize,
};
pub use project::{BuildingType, Location, ProjectBasics, ProjectType, Timeline};
pub use rooms::{RoomCategory, RoomGroup, RoomPlan, RoomSpec};
