//! Medical gas requirements model
//!
//! Four independent gas systems: oxygen, nitrous oxide, medical air, and
//! vacuum. Each system has a `required` flag, a list of outlet entries
//! (one per room line item), and its own system-level options. A system
//! that is not required contributes nothing to any estimate, whatever its
//! outlet list says.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Gas system type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GasType {
    Oxygen,
    NitrousOxide,
    MedicalAir,
    Vacuum,
}

impl GasType {
    /// All gas types, in manifold order
    pub const ALL: [GasType; 4] = [
        GasType::Oxygen,
        GasType::NitrousOxide,
        GasType::MedicalAir,
        GasType::Vacuum,
    ];

    /// Human-readable name
    pub fn display_name(self) -> &'static str {
        match self {
            GasType::Oxygen => "Oxygen",
            GasType::NitrousOxide => "Nitrous Oxide",
            GasType::MedicalAir => "Medical Air",
            GasType::Vacuum => "Vacuum",
        }
    }
}

impl fmt::Display for GasType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One outlet entry: a group of outlets of a single gas in one room
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasOutlet {
    /// Room the outlets serve (e.g., "Treatment Room 1")
    #[serde(default)]
    pub room: String,
    /// Number of outlets at this position
    #[serde(default)]
    pub count: u32,
    /// Mounting position (e.g., "Chair-side left", "Ceiling mounted")
    #[serde(default)]
    pub location: String,
}

impl GasOutlet {
    pub fn new(room: impl Into<String>, count: u32, location: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            count,
            location: location.into(),
        }
    }
}

/// Sum of outlet counts across a list of entries
fn outlet_total(outlets: &[GasOutlet]) -> u32 {
    outlets.iter().map(|o| o.count).sum()
}

/// Oxygen system configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OxygenSystem {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub outlets: Vec<GasOutlet>,
    /// Central supply with manifold, alarms, and zone valves
    #[serde(default)]
    pub central_supply: bool,
    /// Reserve supply for outages
    #[serde(default)]
    pub backup_system: bool,
    #[serde(default)]
    pub manifold_location: String,
    #[serde(default)]
    pub emergency_shutoffs: u32,
}

/// Nitrous oxide system configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NitrousOxideSystem {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub outlets: Vec<GasOutlet>,
    #[serde(default)]
    pub central_supply: bool,
    /// Waste anesthetic gas capture
    #[serde(default)]
    pub scavenging_system: bool,
    #[serde(default)]
    pub manifold_location: String,
    #[serde(default)]
    pub emergency_shutoffs: u32,
}

/// Medical air system configuration
///
/// A required air system always includes a compressor; `oil_free` selects
/// the medical-grade oil-free unit over the standard one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalAirSystem {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub outlets: Vec<GasOutlet>,
    #[serde(default)]
    pub oil_free: bool,
    #[serde(default)]
    pub backup_compressor: bool,
    #[serde(default)]
    pub manifold_location: String,
}

/// Vacuum system configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacuumSystem {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub outlets: Vec<GasOutlet>,
    #[serde(default)]
    pub central_system: bool,
    #[serde(default)]
    pub backup_pump: bool,
    #[serde(default)]
    pub manifold_location: String,
}

/// Complete medical gas requirements for the suite
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalGasRequirements {
    #[serde(default)]
    pub oxygen: OxygenSystem,
    #[serde(default)]
    pub nitrous_oxide: NitrousOxideSystem,
    #[serde(default)]
    pub medical_air: MedicalAirSystem,
    #[serde(default)]
    pub vacuum: VacuumSystem,
}

impl MedicalGasRequirements {
    /// Whether the system of the given gas type is marked required
    pub fn is_required(&self, gas: GasType) -> bool {
        match gas {
            GasType::Oxygen => self.oxygen.required,
            GasType::NitrousOxide => self.nitrous_oxide.required,
            GasType::MedicalAir => self.medical_air.required,
            GasType::Vacuum => self.vacuum.required,
        }
    }

    /// Outlet entries of the given gas type
    pub fn outlets(&self, gas: GasType) -> &[GasOutlet] {
        match gas {
            GasType::Oxygen => &self.oxygen.outlets,
            GasType::NitrousOxide => &self.nitrous_oxide.outlets,
            GasType::MedicalAir => &self.medical_air.outlets,
            GasType::Vacuum => &self.vacuum.outlets,
        }
    }

    /// Sum of outlet counts of the given gas type
    pub fn outlet_total(&self, gas: GasType) -> u32 {
        outlet_total(self.outlets(gas))
    }

    /// Number of outlet entries (room line items) across all four systems,
    /// required or not. The review-stage estimate prices by entry.
    pub fn outlet_entries(&self) -> usize {
        GasType::ALL.iter().map(|&g| self.outlets(g).len()).sum()
    }

    /// Sample requirements matching the wizard's initial gas step, with
    /// outlets placed in the sample rooms
    pub fn sample() -> Self {
        let manifold = "Mechanical Room".to_string();
        Self {
            oxygen: OxygenSystem {
                required: true,
                outlets: vec![
                    GasOutlet::new("Treatment Room 1", 2, "Chair-side left"),
                    GasOutlet::new("Treatment Room 2", 2, "Chair-side left"),
                ],
                central_supply: true,
                backup_system: true,
                manifold_location: manifold.clone(),
                emergency_shutoffs: 2,
            },
            nitrous_oxide: NitrousOxideSystem {
                required: true,
                outlets: vec![
                    GasOutlet::new("Treatment Room 1", 1, "Chair-side right"),
                    GasOutlet::new("Treatment Room 2", 1, "Chair-side right"),
                ],
                central_supply: true,
                scavenging_system: true,
                manifold_location: manifold.clone(),
                emergency_shutoffs: 2,
            },
            medical_air: MedicalAirSystem {
                required: true,
                outlets: vec![GasOutlet::new("Treatment Room 1", 1, "Wall mounted left")],
                oil_free: true,
                backup_compressor: true,
                manifold_location: manifold.clone(),
            },
            vacuum: VacuumSystem {
                required: true,
                outlets: vec![
                    GasOutlet::new("Treatment Room 1", 2, "Chair-side left"),
                    GasOutlet::new("Treatment Room 2", 2, "Chair-side left"),
                ],
                central_system: true,
                backup_pump: true,
                manifold_location: manifold,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_requires_nothing() {
        let gas = MedicalGasRequirements::default();
        for g in GasType::ALL {
            assert!(!gas.is_required(g));
            assert_eq!(gas.outlet_total(g), 0);
        }
        assert_eq!(gas.outlet_entries(), 0);
    }

    #[test]
    fn test_outlet_totals_sum_counts() {
        let gas = MedicalGasRequirements::sample();
        assert_eq!(gas.outlet_total(GasType::Oxygen), 4);
        assert_eq!(gas.outlet_total(GasType::NitrousOxide), 2);
        assert_eq!(gas.outlet_total(GasType::MedicalAir), 1);
        assert_eq!(gas.outlet_total(GasType::Vacuum), 4);
    }

    #[test]
    fn test_outlet_entries_count_line_items() {
        // 2 + 2 + 1 + 2 entries, not 11 outlets
        assert_eq!(MedicalGasRequirements::sample().outlet_entries(), 7);
    }

    #[test]
    fn test_gas_type_wire_names() {
        let json = serde_json::to_string(&GasType::NitrousOxide).unwrap();
        assert_eq!(json, "\"nitrous-oxide\"");
    }
}
