//! Medical gas estimate
//!
//! Prices the four gas systems independently: per-outlet rates plus
//! fixed system options, then a shared installation/piping charge per
//! outlet. A system that is not required contributes nothing — not even
//! its outlets' installation — whatever its outlet list says.

use serde::{Deserialize, Serialize};

use crate::models::{GasType, MedicalGasRequirements};
use crate::rates;

/// Itemized cost of one required gas system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasSystemCost {
    pub gas: GasType,
    /// Total outlets across the system's entries
    pub outlet_total: u32,
    /// Outlet hardware cost (dollars)
    pub outlet_cost: i64,
    /// System options: central supply, backup, scavenging, compressor
    pub options_cost: i64,
}

impl GasSystemCost {
    /// Combined system cost (dollars)
    pub fn total(&self) -> i64 {
        self.outlet_cost + self.options_cost
    }
}

/// Itemized result of the medical gas strategy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalGasCostEstimate {
    /// One line per required system, in manifold order
    pub systems: Vec<GasSystemCost>,
    /// Installation and piping across all required systems' outlets
    pub installation_cost: i64,
    /// Grand total (dollars)
    pub total: i64,
}

/// Itemize the medical gas cost. Never fails.
pub fn medical_gas_lines(gas: &MedicalGasRequirements) -> MedicalGasCostEstimate {
    let mut systems = Vec::new();
    let mut installed_outlets: u32 = 0;

    for gas_type in GasType::ALL {
        if !gas.is_required(gas_type) {
            continue;
        }
        let outlet_total = gas.outlet_total(gas_type);
        installed_outlets += outlet_total;

        let outlet_cost = i64::from(outlet_total) * rates::per_outlet_rate(gas_type);
        let options_cost = match gas_type {
            GasType::Oxygen => {
                let mut cost = 0;
                if gas.oxygen.central_supply {
                    cost += rates::OXYGEN_CENTRAL_SUPPLY_COST;
                }
                if gas.oxygen.backup_system {
                    cost += rates::OXYGEN_BACKUP_SYSTEM_COST;
                }
                cost
            }
            GasType::NitrousOxide => {
                let mut cost = 0;
                if gas.nitrous_oxide.central_supply {
                    cost += rates::NITROUS_CENTRAL_SUPPLY_COST;
                }
                if gas.nitrous_oxide.scavenging_system {
                    cost += rates::NITROUS_SCAVENGING_COST;
                }
                cost
            }
            // A required air system always ships a compressor
            GasType::MedicalAir => {
                if gas.medical_air.oil_free {
                    rates::AIR_COMPRESSOR_OIL_FREE_COST
                } else {
                    rates::AIR_COMPRESSOR_STANDARD_COST
                }
            }
            GasType::Vacuum => {
                if gas.vacuum.central_system {
                    rates::VACUUM_CENTRAL_SYSTEM_COST
                } else {
                    0
                }
            }
        };

        systems.push(GasSystemCost {
            gas: gas_type,
            outlet_total,
            outlet_cost,
            options_cost,
        });
    }

    let installation_cost =
        i64::from(installed_outlets) * rates::INSTALLATION_RATE_PER_OUTLET;
    let total = systems.iter().map(GasSystemCost::total).sum::<i64>() + installation_cost;

    MedicalGasCostEstimate {
        systems,
        installation_cost,
        total,
    }
}

/// Estimate the total medical gas cost in dollars. Never fails.
///
/// # Example
/// ```
/// use office_estimator_core_rs::estimators::estimate_medical_gas_cost;
/// use office_estimator_core_rs::models::MedicalGasRequirements;
///
/// assert_eq!(estimate_medical_gas_cost(&MedicalGasRequirements::default()), 0);
/// ```
pub fn estimate_medical_gas_cost(gas: &MedicalGasRequirements) -> i64 {
    medical_gas_lines(gas).total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::gas::{GasOutlet, OxygenSystem, VacuumSystem};

    fn oxygen_only(outlets: Vec<GasOutlet>) -> MedicalGasRequirements {
        MedicalGasRequirements {
            oxygen: OxygenSystem {
                required: true,
                outlets,
                central_supply: true,
                backup_system: true,
                manifold_location: "Mechanical Room".to_string(),
                emergency_shutoffs: 2,
            },
            ..MedicalGasRequirements::default()
        }
    }

    #[test]
    fn test_oxygen_only_system() {
        // 4 * 1200 + 15000 + 8000 + 4 * 300 = 29,000
        let gas = oxygen_only(vec![
            GasOutlet::new("Treatment Room 1", 3, "Chair-side left"),
            GasOutlet::new("Surgical Suite 1", 1, "Ceiling mounted"),
        ]);

        let estimate = medical_gas_lines(&gas);
        assert_eq!(estimate.systems.len(), 1);
        assert_eq!(estimate.systems[0].outlet_total, 4);
        assert_eq!(estimate.systems[0].outlet_cost, 4_800);
        assert_eq!(estimate.systems[0].options_cost, 23_000);
        assert_eq!(estimate.installation_cost, 1_200);
        assert_eq!(estimate.total, 29_000);
        assert_eq!(estimate_medical_gas_cost(&gas), 29_000);
    }

    #[test]
    fn test_unrequired_systems_contribute_nothing() {
        // Vacuum has outlets on file but is not required: no hardware,
        // no options, no installation
        let mut gas = oxygen_only(vec![GasOutlet::new("Treatment Room 1", 2, "Chair-side")]);
        gas.vacuum = VacuumSystem {
            required: false,
            outlets: vec![GasOutlet::new("Treatment Room 1", 4, "Chair-side")],
            central_system: true,
            backup_pump: true,
            manifold_location: String::new(),
        };

        let estimate = medical_gas_lines(&gas);
        assert!(estimate.systems.iter().all(|s| s.gas == GasType::Oxygen));
        // 2*1200 + 23000 + 2*300
        assert_eq!(estimate.total, 26_000);
    }

    #[test]
    fn test_air_compressor_grade() {
        let mut gas = MedicalGasRequirements::default();
        gas.medical_air.required = true;
        gas.medical_air.oil_free = true;
        assert_eq!(estimate_medical_gas_cost(&gas), 18_000);

        gas.medical_air.oil_free = false;
        assert_eq!(estimate_medical_gas_cost(&gas), 12_000);
    }

    #[test]
    fn test_required_system_without_outlets_still_pays_options() {
        let mut gas = MedicalGasRequirements::default();
        gas.nitrous_oxide.required = true;
        gas.nitrous_oxide.central_supply = true;
        gas.nitrous_oxide.scavenging_system = true;

        // 12000 + 6000, no outlets to install
        assert_eq!(estimate_medical_gas_cost(&gas), 18_000);
    }

    #[test]
    fn test_sample_requirements_total() {
        // oxygen:  4*1200 + 15000 + 8000      = 27,800
        // nitrous: 2*1400 + 12000 + 6000      = 20,800
        // air:     1*1000 + 18000             = 19,000
        // vacuum:  4*800 + 14000              = 17,200
        // install: 11 * 300                   =  3,300
        let gas = MedicalGasRequirements::sample();
        assert_eq!(estimate_medical_gas_cost(&gas), 88_100);
    }

    #[test]
    fn test_empty_requirements_are_free() {
        assert_eq!(estimate_medical_gas_cost(&MedicalGasRequirements::default()), 0);
    }
}
