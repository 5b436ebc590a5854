//! Space program model
//!
//! The detailed room-by-room area worksheet collected by the wizard's room
//! step. This is a finer-grained description than the [`RoomPlan`]: size
//! tiers instead of raw areas for clinical rooms, explicit support areas,
//! and per-room feature flags. The program feeds the net-area calculator
//! and the flat per-room adders of the review-stage estimate.
//!
//! [`RoomPlan`]: super::rooms::RoomPlan

use serde::{Deserialize, Serialize};

/// Treatment room size tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TreatmentRoomSize {
    Compact,
    Large,
    Premium,
    #[default]
    #[serde(other)]
    Standard,
}

impl TreatmentRoomSize {
    /// Planned area per room (sqft)
    pub fn area(self) -> u32 {
        match self {
            TreatmentRoomSize::Compact => 100,
            TreatmentRoomSize::Standard => 140,
            TreatmentRoomSize::Large => 180,
            TreatmentRoomSize::Premium => 220,
        }
    }
}

/// Consultation room size tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsultationRoomSize {
    Small,
    Large,
    #[default]
    #[serde(other)]
    Medium,
}

impl ConsultationRoomSize {
    /// Planned area per room (sqft)
    pub fn area(self) -> u32 {
        match self {
            ConsultationRoomSize::Small => 80,
            ConsultationRoomSize::Medium => 100,
            ConsultationRoomSize::Large => 120,
        }
    }
}

/// Surgical suite size tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurgicalSuiteSize {
    Large,
    #[default]
    #[serde(other)]
    Standard,
}

impl SurgicalSuiteSize {
    /// Planned area per suite (sqft)
    pub fn area(self) -> u32 {
        match self {
            SurgicalSuiteSize::Standard => 250,
            SurgicalSuiteSize::Large => 350,
        }
    }
}

/// Laboratory equipment fit-out level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabEquipmentLevel {
    Advanced,
    FullService,
    #[default]
    #[serde(other)]
    Basic,
}

/// Central sterile equipment fit-out level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SterileEquipmentLevel {
    Advanced,
    Comprehensive,
    #[default]
    #[serde(other)]
    Basic,
}

/// Storage security level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecurityLevel {
    High,
    #[default]
    #[serde(other)]
    Standard,
}

/// Primary clinical spaces for patient treatment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreatmentRooms {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub size: TreatmentRoomSize,
    #[serde(default)]
    pub has_windows: bool,
    /// Feet; planning only, does not affect area
    #[serde(default)]
    pub ceiling_height: f64,
    #[serde(default)]
    pub special_features: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRooms {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub size: ConsultationRoomSize,
    #[serde(default)]
    pub has_windows: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryRooms {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub beds: u32,
    #[serde(default)]
    pub private_rooms: u32,
    #[serde(default)]
    pub shared_rooms: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabSpaces {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub has_lab: bool,
    /// Total lab area (sqft)
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub equipment_level: LabEquipmentLevel,
    #[serde(default)]
    pub has_cad_cam: bool,
    #[serde(default)]
    pub has_3d_printer: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentralSterile {
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub equipment_level: SterileEquipmentLevel,
}

/// Dirty or clean utility room: counted only when required
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilityRoom {
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SterilizationAreas {
    #[serde(default)]
    pub central_sterile: CentralSterile,
    #[serde(default)]
    pub dirty_utility: UtilityRoom,
    #[serde(default)]
    pub clean_utility: UtilityRoom,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reception {
    #[serde(default)]
    pub has_reception: bool,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub workstations: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateOffices {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub executive_office: bool,
    #[serde(default)]
    pub manager_offices: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWorkArea {
    #[serde(default)]
    pub has_open_area: bool,
    #[serde(default)]
    pub workstations: u32,
    #[serde(default)]
    pub size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceRoom {
    #[serde(default)]
    pub has_conference_room: bool,
    /// Seats; area is derived per seat
    #[serde(default)]
    pub capacity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordsRoom {
    #[serde(default)]
    pub has_records_room: bool,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub fire_rated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdministrativeAreas {
    #[serde(default)]
    pub reception: Reception,
    #[serde(default)]
    pub private_offices: PrivateOffices,
    #[serde(default)]
    pub open_work_area: OpenWorkArea,
    #[serde(default)]
    pub conference_room: ConferenceRoom,
    #[serde(default)]
    pub records_room: RecordsRoom,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakRoom {
    #[serde(default)]
    pub has_break_room: bool,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub has_kitchen: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lockers {
    #[serde(default)]
    pub has_lockers: bool,
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffLounge {
    #[serde(default)]
    pub has_lounge: bool,
    #[serde(default)]
    pub size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffAreas {
    #[serde(default)]
    pub break_room: BreakRoom,
    #[serde(default)]
    pub lockers: Lockers,
    #[serde(default)]
    pub staff_lounge: StaffLounge,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralStorage {
    #[serde(default)]
    pub count: u32,
    /// Combined area across all general storage rooms
    #[serde(default)]
    pub total_size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalSupplyStorage {
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub temperature_controlled: bool,
    #[serde(default)]
    pub security_level: SecurityLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentStorage {
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub has_charging: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JanitorialClosets {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub has_utility_sink: bool,
}

/// Flags for dedicated building-system rooms; each contributes a fixed area
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MechanicalRooms {
    #[serde(default)]
    pub hvac_room: bool,
    #[serde(default)]
    pub electrical_room: bool,
    #[serde(default)]
    pub data_closet: bool,
    #[serde(default)]
    pub medical_gas_manifold: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageUtilityRooms {
    #[serde(default)]
    pub general_storage: GeneralStorage,
    #[serde(default)]
    pub medical_supply_storage: MedicalSupplyStorage,
    #[serde(default)]
    pub equipment_storage: EquipmentStorage,
    #[serde(default)]
    pub janitorial_closets: JanitorialClosets,
    #[serde(default)]
    pub mechanical_rooms: MechanicalRooms,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainWaiting {
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub seating_capacity: u32,
    #[serde(default)]
    pub has_reception: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildrenArea {
    #[serde(default)]
    pub has_children_area: bool,
    #[serde(default)]
    pub size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateWaiting {
    #[serde(default)]
    pub has_private_waiting: bool,
    #[serde(default)]
    pub rooms: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationWaiting {
    #[serde(default)]
    pub has_consult_waiting: bool,
    #[serde(default)]
    pub seating_capacity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitingAreas {
    #[serde(default)]
    pub main_waiting: MainWaiting,
    #[serde(default)]
    pub children_area: ChildrenArea,
    #[serde(default)]
    pub private_waiting: PrivateWaiting,
    #[serde(default)]
    pub consultation_waiting: ConsultationWaiting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRestrooms {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub ada_compliant: bool,
    #[serde(default)]
    pub family_restroom: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRestrooms {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub ada_compliant: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restrooms {
    #[serde(default)]
    pub patient_restrooms: PatientRestrooms,
    #[serde(default)]
    pub staff_restrooms: StaffRestrooms,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XrayRooms {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub lead_lined: bool,
    #[serde(default)]
    pub digital_equipment: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurgicalSuites {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub size: SurgicalSuiteSize,
    #[serde(default)]
    pub isolation_capable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanRoom {
    #[serde(default)]
    pub has_pan_room: bool,
    #[serde(default)]
    pub lead_lined: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CbctRoom {
    #[serde(default)]
    pub has_cbct: bool,
    #[serde(default)]
    pub lead_lined: bool,
    #[serde(default)]
    pub size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialRooms {
    #[serde(default)]
    pub xray_rooms: XrayRooms,
    #[serde(default)]
    pub surgical_suites: SurgicalSuites,
    #[serde(default)]
    pub pan_room: PanRoom,
    #[serde(default)]
    pub cbct_room: CbctRoom,
}

/// Complete space program for the suite
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaceProgram {
    #[serde(default)]
    pub treatment_rooms: TreatmentRooms,
    #[serde(default)]
    pub consultation_rooms: ConsultationRooms,
    #[serde(default)]
    pub recovery_rooms: RecoveryRooms,
    #[serde(default)]
    pub lab_spaces: LabSpaces,
    #[serde(default)]
    pub sterilization_areas: SterilizationAreas,
    #[serde(default)]
    pub administrative_areas: AdministrativeAreas,
    #[serde(default)]
    pub staff_areas: StaffAreas,
    #[serde(default)]
    pub storage_utility_rooms: StorageUtilityRooms,
    #[serde(default)]
    pub waiting_areas: WaitingAreas,
    #[serde(default)]
    pub restrooms: Restrooms,
    #[serde(default)]
    pub special_rooms: SpecialRooms,
}

impl SpaceProgram {
    /// Sample program matching the wizard's initial room step
    pub fn sample() -> Self {
        Self {
            treatment_rooms: TreatmentRooms {
                count: 6,
                size: TreatmentRoomSize::Standard,
                has_windows: true,
                ceiling_height: 9.0,
                special_features: Vec::new(),
            },
            consultation_rooms: ConsultationRooms {
                count: 2,
                size: ConsultationRoomSize::Medium,
                has_windows: true,
            },
            recovery_rooms: RecoveryRooms {
                count: 2,
                beds: 4,
                private_rooms: 1,
                shared_rooms: 1,
            },
            lab_spaces: LabSpaces::default(),
            sterilization_areas: SterilizationAreas {
                central_sterile: CentralSterile {
                    size: 150,
                    equipment_level: SterileEquipmentLevel::Advanced,
                },
                dirty_utility: UtilityRoom {
                    size: 75,
                    required: true,
                },
                clean_utility: UtilityRoom {
                    size: 75,
                    required: true,
                },
            },
            administrative_areas: AdministrativeAreas {
                reception: Reception {
                    has_reception: true,
                    size: 200,
                    workstations: 2,
                },
                private_offices: PrivateOffices {
                    count: 2,
                    executive_office: true,
                    manager_offices: 1,
                },
                open_work_area: OpenWorkArea {
                    has_open_area: true,
                    workstations: 3,
                    size: 150,
                },
                conference_room: ConferenceRoom {
                    has_conference_room: true,
                    capacity: 8,
                },
                records_room: RecordsRoom {
                    has_records_room: true,
                    size: 100,
                    fire_rated: true,
                },
            },
            staff_areas: StaffAreas {
                break_room: BreakRoom {
                    has_break_room: true,
                    size: 120,
                    has_kitchen: true,
                },
                lockers: Lockers {
                    has_lockers: true,
                    count: 12,
                },
                staff_lounge: StaffLounge::default(),
            },
            storage_utility_rooms: StorageUtilityRooms {
                general_storage: GeneralStorage {
                    count: 2,
                    total_size: 100,
                },
                medical_supply_storage: MedicalSupplyStorage {
                    size: 75,
                    temperature_controlled: false,
                    security_level: SecurityLevel::Standard,
                },
                equipment_storage: EquipmentStorage {
                    size: 60,
                    has_charging: true,
                },
                janitorial_closets: JanitorialClosets {
                    count: 2,
                    has_utility_sink: true,
                },
                mechanical_rooms: MechanicalRooms {
                    hvac_room: true,
                    electrical_room: true,
                    data_closet: true,
                    medical_gas_manifold: true,
                },
            },
            waiting_areas: WaitingAreas {
                main_waiting: MainWaiting {
                    size: 400,
                    seating_capacity: 16,
                    has_reception: true,
                },
                children_area: ChildrenArea {
                    has_children_area: true,
                    size: 80,
                },
                private_waiting: PrivateWaiting::default(),
                consultation_waiting: ConsultationWaiting {
                    has_consult_waiting: true,
                    seating_capacity: 6,
                },
            },
            restrooms: Restrooms {
                patient_restrooms: PatientRestrooms {
                    count: 2,
                    ada_compliant: true,
                    family_restroom: true,
                },
                staff_restrooms: StaffRestrooms {
                    count: 1,
                    ada_compliant: true,
                },
            },
            special_rooms: SpecialRooms {
                xray_rooms: XrayRooms {
                    count: 1,
                    lead_lined: true,
                    digital_equipment: true,
                },
                surgical_suites: SurgicalSuites {
                    count: 1,
                    size: SurgicalSuiteSize::Standard,
                    isolation_capable: false,
                },
                pan_room: PanRoom {
                    has_pan_room: true,
                    lead_lined: true,
                },
                cbct_room: CbctRoom::default(),
            },
        }
    }
}
