//! Ancillary configuration sections
//!
//! Equipment, finishes, ADA, and IT/data/AV sections collected by the
//! wizard. None of these feed the cost estimators (the heuristic formulas
//! never priced them); they are carried so the persisted estimate record
//! holds the complete project description.

use serde::{Deserialize, Serialize};

// ============================================================================
// Equipment integration
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChairType {
    Basic,
    Premium,
    #[default]
    #[serde(other)]
    MidRange,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutoclaveSize {
    Small,
    Large,
    #[default]
    #[serde(other)]
    Medium,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DentalChairs {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub chair_type: ChairType,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub integrated_delivery: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XrayUnit {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub digital: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XrayUnits {
    #[serde(default)]
    pub intraoral: XrayUnit,
    #[serde(default)]
    pub panoramic: XrayUnit,
    #[serde(default)]
    pub cephalometric: XrayUnit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CbctUnit {
    #[serde(default)]
    pub has_unit: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shielding_required: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Autoclaves {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub size: AutoclaveSize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SterilizationEquipment {
    #[serde(default)]
    pub autoclaves: Autoclaves,
    #[serde(default)]
    pub ultrasonic_cleaners: u32,
    #[serde(default)]
    pub sealers: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurgicalEquipment {
    #[serde(default)]
    pub surgical_lights: u32,
    #[serde(default)]
    pub monitors: u32,
    #[serde(default)]
    pub anesthesia_machines: u32,
    #[serde(default)]
    pub surgical_tables: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabEquipment {
    #[serde(default)]
    pub models_3d_printer: bool,
    #[serde(default)]
    pub scanners: u32,
    #[serde(default)]
    pub milling_machine: bool,
}

/// Clinical equipment the build-out must accommodate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentIntegration {
    #[serde(default)]
    pub dental_chairs: DentalChairs,
    #[serde(default)]
    pub xray_units: XrayUnits,
    #[serde(default)]
    pub cbct: CbctUnit,
    #[serde(default)]
    pub sterilization_equipment: SterilizationEquipment,
    #[serde(default)]
    pub surgical_equipment: SurgicalEquipment,
    #[serde(default)]
    pub lab_equipment: LabEquipment,
}

impl EquipmentIntegration {
    /// Sample equipment matching the wizard's initial equipment step
    pub fn sample() -> Self {
        Self {
            dental_chairs: DentalChairs {
                count: 6,
                chair_type: ChairType::MidRange,
                manufacturer: String::new(),
                integrated_delivery: true,
            },
            xray_units: XrayUnits {
                intraoral: XrayUnit {
                    count: 2,
                    digital: true,
                },
                panoramic: XrayUnit {
                    count: 1,
                    digital: true,
                },
                cephalometric: XrayUnit::default(),
            },
            cbct: CbctUnit::default(),
            sterilization_equipment: SterilizationEquipment {
                autoclaves: Autoclaves {
                    count: 2,
                    size: AutoclaveSize::Medium,
                },
                ultrasonic_cleaners: 1,
                sealers: 1,
            },
            surgical_equipment: SurgicalEquipment {
                surgical_lights: 1,
                monitors: 1,
                anesthesia_machines: 1,
                surgical_tables: 1,
            },
            lab_equipment: LabEquipment {
                models_3d_printer: false,
                scanners: 1,
                milling_machine: false,
            },
        }
    }
}

// ============================================================================
// Finishes
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinishCategory {
    Premium,
    Luxury,
    Custom,
    #[default]
    #[serde(other)]
    Standard,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaintGrade {
    Premium,
    #[default]
    #[serde(other)]
    Standard,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CeilingType {
    PremiumAcm,
    Gypsum,
    Specialty,
    #[default]
    #[serde(other)]
    StandardAcm,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CabinetMaterial {
    WoodVeneer,
    SolidWood,
    Metal,
    #[default]
    #[serde(other)]
    Laminate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CabinetStyle {
    Traditional,
    Contemporary,
    #[default]
    #[serde(other)]
    Modern,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountertopMaterial {
    SolidSurface,
    Quartz,
    Granite,
    #[default]
    #[serde(other)]
    Laminate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LightingLevel {
    Premium,
    Architectural,
    #[default]
    #[serde(other)]
    Standard,
}

/// Flooring selection by zone (free-form product names)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flooring {
    #[serde(default)]
    pub operatories: String,
    #[serde(default)]
    pub waiting_area: String,
    #[serde(default)]
    pub offices: String,
    #[serde(default)]
    pub corridors: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallFinishes {
    #[serde(default)]
    pub paint_grade: PaintGrade,
    #[serde(default)]
    pub wallcovering: bool,
    #[serde(default)]
    pub wainscoting: bool,
    #[serde(default)]
    pub special_finishes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ceilings {
    #[serde(default)]
    pub ceiling_type: CeilingType,
    /// Feet
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub special_features: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cabinetry {
    #[serde(default)]
    pub material: CabinetMaterial,
    #[serde(default)]
    pub style: CabinetStyle,
    #[serde(default)]
    pub custom_millwork: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countertops {
    #[serde(default)]
    pub material: CountertopMaterial,
    #[serde(default)]
    pub edge_profile: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lighting {
    #[serde(default)]
    pub level: LightingLevel,
    #[serde(default)]
    pub control_systems: bool,
    #[serde(default)]
    pub emergency_lighting: bool,
}

/// Finish and material selections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinishLevel {
    #[serde(default)]
    pub category: FinishCategory,
    #[serde(default)]
    pub flooring: Flooring,
    #[serde(default)]
    pub wall_finishes: WallFinishes,
    #[serde(default)]
    pub ceilings: Ceilings,
    #[serde(default)]
    pub cabinetry: Cabinetry,
    #[serde(default)]
    pub countertops: Countertops,
    #[serde(default)]
    pub lighting: Lighting,
}

impl FinishLevel {
    /// Sample finishes matching the wizard's initial finishes step
    pub fn sample() -> Self {
        Self {
            category: FinishCategory::Premium,
            flooring: Flooring {
                operatories: "luxury-vinyl".to_string(),
                waiting_area: "carpet-tile".to_string(),
                offices: "carpet-tile".to_string(),
                corridors: "luxury-vinyl".to_string(),
            },
            wall_finishes: WallFinishes {
                paint_grade: PaintGrade::Premium,
                wallcovering: false,
                wainscoting: false,
                special_finishes: Vec::new(),
            },
            ceilings: Ceilings {
                ceiling_type: CeilingType::PremiumAcm,
                height: 9.0,
                special_features: Vec::new(),
            },
            cabinetry: Cabinetry {
                material: CabinetMaterial::WoodVeneer,
                style: CabinetStyle::Modern,
                custom_millwork: false,
            },
            countertops: Countertops {
                material: CountertopMaterial::Quartz,
                edge_profile: "standard".to_string(),
            },
            lighting: Lighting {
                level: LightingLevel::Premium,
                control_systems: true,
                emergency_lighting: true,
            },
        }
    }
}

// ============================================================================
// ADA compliance
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoorHardware {
    Accessible,
    #[default]
    #[serde(other)]
    Standard,
}

/// Accessibility features of the build-out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaCompliance {
    #[serde(default)]
    pub accessible_entrance: bool,
    #[serde(default)]
    pub accessible_path: bool,
    #[serde(default)]
    pub accessible_restrooms: u32,
    #[serde(default)]
    pub hearing_loop_system: bool,
    #[serde(default)]
    pub accessible_parking_spaces: u32,
    #[serde(default)]
    pub elevator_required: bool,
    #[serde(default)]
    pub accessible_reception_counter: bool,
    #[serde(default)]
    pub door_hardware: DoorHardware,
    #[serde(default)]
    pub signage_compliance: bool,
}

impl AdaCompliance {
    /// Sample ADA section matching the wizard's initial compliance step
    pub fn sample() -> Self {
        Self {
            accessible_entrance: true,
            accessible_path: true,
            accessible_restrooms: 1,
            hearing_loop_system: false,
            accessible_parking_spaces: 2,
            elevator_required: false,
            accessible_reception_counter: true,
            door_hardware: DoorHardware::Accessible,
            signage_compliance: true,
        }
    }
}

// ============================================================================
// IT / data / AV
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CableType {
    Cat6a,
    Fiber,
    #[default]
    #[serde(other)]
    Cat6,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WifiCoverage {
    Enterprise,
    #[default]
    #[serde(other)]
    Basic,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhoneSystemType {
    Traditional,
    #[default]
    #[serde(other)]
    Voip,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TvMounting {
    Ceiling,
    #[default]
    #[serde(other)]
    Wall,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDrop {
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub cable_type: CableType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiAccess {
    #[serde(default)]
    pub commercial: bool,
    #[serde(default)]
    pub guest_network: bool,
    #[serde(default)]
    pub coverage: WifiCoverage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneSystem {
    #[serde(default)]
    pub system_type: PhoneSystemType,
    #[serde(default)]
    pub extensions: u32,
    #[serde(default)]
    pub nurse_calls: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySystem {
    #[serde(default)]
    pub cameras: u32,
    #[serde(default)]
    pub access_control: bool,
    #[serde(default)]
    pub alarm_system: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TvInstallation {
    #[serde(default)]
    pub room: String,
    /// Diagonal inches
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub mounting: TvMounting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audiovisual {
    #[serde(default)]
    pub tvs: Vec<TvInstallation>,
    #[serde(default)]
    pub sound_system: bool,
    #[serde(default)]
    pub intercom: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRoom {
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooling: Option<bool>,
}

/// Network, phone, security, and audiovisual requirements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItDataAvNeeds {
    #[serde(default)]
    pub network_drops: Vec<NetworkDrop>,
    #[serde(default)]
    pub wifi_access: WifiAccess,
    #[serde(default)]
    pub phone_system: PhoneSystem,
    #[serde(default)]
    pub security_system: SecuritySystem,
    #[serde(default)]
    pub audiovisual: Audiovisual,
    #[serde(default)]
    pub server_room: ServerRoom,
}

impl ItDataAvNeeds {
    /// Sample IT/AV section matching the wizard's initial step
    pub fn sample() -> Self {
        Self {
            network_drops: Vec::new(),
            wifi_access: WifiAccess {
                commercial: true,
                guest_network: true,
                coverage: WifiCoverage::Enterprise,
            },
            phone_system: PhoneSystem {
                system_type: PhoneSystemType::Voip,
                extensions: 8,
                nurse_calls: true,
            },
            security_system: SecuritySystem {
                cameras: 4,
                access_control: true,
                alarm_system: true,
            },
            audiovisual: Audiovisual {
                tvs: Vec::new(),
                sound_system: true,
                intercom: true,
            },
            server_room: ServerRoom {
                required: true,
                size: Some(50),
                cooling: Some(true),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_sections_round_trip() {
        let equipment = EquipmentIntegration::sample();
        let json = serde_json::to_string(&equipment).unwrap();
        assert_eq!(equipment, serde_json::from_str(&json).unwrap());

        let finishes = FinishLevel::sample();
        let json = serde_json::to_string(&finishes).unwrap();
        assert_eq!(finishes, serde_json::from_str(&json).unwrap());

        let ada = AdaCompliance::sample();
        let json = serde_json::to_string(&ada).unwrap();
        assert_eq!(ada, serde_json::from_str::<AdaCompliance>(&json).unwrap());

        let it_av = ItDataAvNeeds::sample();
        let json = serde_json::to_string(&it_av).unwrap();
        assert_eq!(it_av, serde_json::from_str::<ItDataAvNeeds>(&json).unwrap());
    }

    #[test]
    fn test_optional_cbct_fields_are_omitted() {
        let json = serde_json::to_string(&CbctUnit::default()).unwrap();
        assert!(!json.contains("model"));
        assert!(!json.contains("shielding_required"));
    }

    #[test]
    fn test_enum_wire_names() {
        let json = serde_json::to_string(&ChairType::MidRange).unwrap();
        assert_eq!(json, "\"mid-range\"");
        let json = serde_json::to_string(&CeilingType::PremiumAcm).unwrap();
        assert_eq!(json, "\"premium-acm\"");
        let json = serde_json::to_string(&CableType::Cat6a).unwrap();
        assert_eq!(json, "\"cat6a\"");
    }
}
