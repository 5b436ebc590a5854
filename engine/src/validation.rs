//! Input-policy validation
//!
//! Checks a configuration against the form layer's input policy: required
//! text fields, ZIP format, square-footage bounds, and per-room outlet
//! caps. This is a service for the wizard; the estimators never call it
//! and stay total whatever the input looks like. All violations are
//! collected and returned together.

use thiserror::Error;

use crate::models::{GasOutlet, GasType, MedicalGasRequirements, ProjectConfiguration};

/// Smallest suite the input policy accepts (sqft)
pub const MIN_TOTAL_SQFT: u32 = 500;

/// Largest suite the input policy accepts (sqft)
pub const MAX_TOTAL_SQFT: u32 = 10_000;

/// Maximum outlets a single room entry may carry, by gas type
pub fn max_outlets_per_room(gas: GasType) -> u32 {
    match gas {
        GasType::Oxygen => 6,
        GasType::NitrousOxide => 4,
        GasType::MedicalAir => 6,
        GasType::Vacuum => 8,
    }
}

/// A single input-policy violation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Project name is required")]
    MissingProjectName,

    #[error("Street address is required")]
    MissingStreet,

    #[error("City is required")]
    MissingCity,

    #[error("State must be a two-letter code, got '{0}'")]
    InvalidState(String),

    #[error("ZIP code '{0}' is not a 5-digit or ZIP+4 code")]
    InvalidZipCode(String),

    #[error(
        "Total square footage {0} is outside the allowed range \
         {MIN_TOTAL_SQFT}..={MAX_TOTAL_SQFT}"
    )]
    SquareFootageOutOfRange(u32),

    #[error("{gas} outlet entry is missing a room name")]
    MissingOutletRoom { gas: GasType },

    #[error("{gas} outlet entry for '{room}' is missing a location")]
    MissingOutletLocation { gas: GasType, room: String },

    #[error("{gas} outlet entry for '{room}' has {count} outlets, allowed 1..={max}")]
    OutletCountOutOfRange {
        gas: GasType,
        room: String,
        count: u32,
        max: u32,
    },
}

/// ZIP format: `\d{5}` optionally followed by `-\d{4}`
fn is_valid_zip(zip: &str) -> bool {
    let bytes = zip.as_bytes();
    match bytes.len() {
        5 => bytes.iter().all(u8::is_ascii_digit),
        10 => {
            bytes[..5].iter().all(u8::is_ascii_digit)
                && bytes[5] == b'-'
                && bytes[6..].iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}

fn check_outlets(gas_type: GasType, outlets: &[GasOutlet], errors: &mut Vec<ValidationError>) {
    let max = max_outlets_per_room(gas_type);
    for outlet in outlets {
        if outlet.room.trim().is_empty() {
            errors.push(ValidationError::MissingOutletRoom { gas: gas_type });
            continue;
        }
        if outlet.location.trim().is_empty() {
            errors.push(ValidationError::MissingOutletLocation {
                gas: gas_type,
                room: outlet.room.clone(),
            });
        }
        if outlet.count == 0 || outlet.count > max {
            errors.push(ValidationError::OutletCountOutOfRange {
                gas: gas_type,
                room: outlet.room.clone(),
                count: outlet.count,
                max,
            });
        }
    }
}

fn check_gas(gas: &MedicalGasRequirements, errors: &mut Vec<ValidationError>) {
    for gas_type in GasType::ALL {
        // Outlets on an unrequired system are inert but still have to be
        // well-formed; the wizard keeps them when the flag is toggled
        check_outlets(gas_type, gas.outlets(gas_type), errors);
    }
}

/// Validate a configuration against the input policy.
///
/// Absent sections are fine (the wizard may not have reached them);
/// present sections are checked in full. Returns every violation found.
pub fn validate(config: &ProjectConfiguration) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(basics) = &config.basics {
        if basics.project_name.trim().is_empty() {
            errors.push(ValidationError::MissingProjectName);
        }
        if basics.location.street.trim().is_empty() {
            errors.push(ValidationError::MissingStreet);
        }
        if basics.location.city.trim().is_empty() {
            errors.push(ValidationError::MissingCity);
        }
        let state = basics.location.state.trim();
        if state.len() != 2 || !state.chars().all(|c| c.is_ascii_alphabetic()) {
            errors.push(ValidationError::InvalidState(basics.location.state.clone()));
        }
        if !is_valid_zip(basics.location.zip_code.trim()) {
            errors.push(ValidationError::InvalidZipCode(
                basics.location.zip_code.clone(),
            ));
        }
        if basics.total_square_footage < MIN_TOTAL_SQFT
            || basics.total_square_footage > MAX_TOTAL_SQFT
        {
            errors.push(ValidationError::SquareFootageOutOfRange(
                basics.total_square_footage,
            ));
        }
    }

    if let Some(gas) = &config.medical_gas {
        check_gas(gas, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::gas::GasOutlet;
    use crate::models::ProjectBasics;

    #[test]
    fn test_empty_configuration_is_valid() {
        assert!(validate(&ProjectConfiguration::new()).is_ok());
    }

    #[test]
    fn test_sample_configuration_is_valid() {
        assert!(validate(&ProjectConfiguration::sample()).is_ok());
    }

    #[test]
    fn test_zip_formats() {
        assert!(is_valid_zip("78701"));
        assert!(is_valid_zip("78701-1234"));
        assert!(!is_valid_zip("7870"));
        assert!(!is_valid_zip("78701-123"));
        assert!(!is_valid_zip("78701 1234"));
        assert!(!is_valid_zip("abcde"));
        assert!(!is_valid_zip(""));
    }

    #[test]
    fn test_broken_basics_report_every_violation() {
        let mut basics = ProjectBasics::default();
        basics.location.state = "Texas".to_string();
        basics.location.zip_code = "787".to_string();
        basics.total_square_footage = 100;

        let config = ProjectConfiguration::new().with_basics(basics);
        let errors = validate(&config).unwrap_err();

        assert!(errors.contains(&ValidationError::MissingProjectName));
        assert!(errors.contains(&ValidationError::MissingStreet));
        assert!(errors.contains(&ValidationError::MissingCity));
        assert!(errors.contains(&ValidationError::InvalidState("Texas".to_string())));
        assert!(errors.contains(&ValidationError::InvalidZipCode("787".to_string())));
        assert!(errors.contains(&ValidationError::SquareFootageOutOfRange(100)));
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn test_outlet_caps_per_gas() {
        let mut gas = MedicalGasRequirements::default();
        gas.nitrous_oxide.outlets = vec![GasOutlet::new("Treatment Room 1", 5, "Chair-side")];
        gas.vacuum.outlets = vec![GasOutlet::new("Treatment Room 1", 8, "Chair-side")];

        let config = ProjectConfiguration::new().with_medical_gas(gas);
        let errors = validate(&config).unwrap_err();

        // Nitrous caps at 4; vacuum allows 8
        assert_eq!(
            errors,
            vec![ValidationError::OutletCountOutOfRange {
                gas: GasType::NitrousOxide,
                room: "Treatment Room 1".to_string(),
                count: 5,
                max: 4,
            }]
        );
    }

    #[test]
    fn test_outlet_entries_need_room_and_location() {
        let mut gas = MedicalGasRequirements::default();
        gas.oxygen.outlets = vec![
            GasOutlet::new("", 2, "Chair-side"),
            GasOutlet::new("Recovery Room 1", 1, ""),
        ];

        let config = ProjectConfiguration::new().with_medical_gas(gas);
        let errors = validate(&config).unwrap_err();

        assert_eq!(
            errors,
            vec![
                ValidationError::MissingOutletRoom {
                    gas: GasType::Oxygen
                },
                ValidationError::MissingOutletLocation {
                    gas: GasType::Oxygen,
                    room: "Recovery Room 1".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_zero_outlet_count_is_rejected() {
        let mut gas = MedicalGasRequirements::default();
        gas.medical_air.outlets = vec![GasOutlet::new("Lab 1", 0, "Wall mounted")];

        let config = ProjectConfiguration::new().with_medical_gas(gas);
        let errors = validate(&config).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::OutletCountOutOfRange { count: 0, .. }
        ));
    }
}
