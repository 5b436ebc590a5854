//! Space-program area estimate
//!
//! Turns the detailed room worksheet into an estimated gross square
//! footage: fixed tier areas for the clinical rooms, per-unit areas for
//! support spaces, conditional areas for optional rooms, and a
//! circulation allowance on top of the net sum.

use crate::models::SpaceProgram;
use crate::rates;

/// Estimate the gross program area in square feet. Never fails.
///
/// The net area is the sum of every planned space; the gross area applies
/// the circulation factor for corridors and wall thickness and rounds to
/// the nearest square foot.
pub fn estimate_program_area(program: &SpaceProgram) -> u32 {
    let mut net: u32 = 0;

    // Clinical rooms by size tier
    net += program.treatment_rooms.count * program.treatment_rooms.size.area();
    net += program.consultation_rooms.count * program.consultation_rooms.size.area();
    net += program.recovery_rooms.count * rates::RECOVERY_ROOM_AREA;
    if program.lab_spaces.has_lab {
        net += program.lab_spaces.size;
    }

    // Sterilization
    let sterile = &program.sterilization_areas;
    net += sterile.central_sterile.size;
    if sterile.dirty_utility.required {
        net += sterile.dirty_utility.size;
    }
    if sterile.clean_utility.required {
        net += sterile.clean_utility.size;
    }

    // Administrative
    let admin = &program.administrative_areas;
    if admin.reception.has_reception {
        net += admin.reception.size;
    }
    net += admin.private_offices.count * rates::PRIVATE_OFFICE_AREA;
    if admin.open_work_area.has_open_area {
        net += admin.open_work_area.size;
    }
    if admin.conference_room.has_conference_room {
        net += admin.conference_room.capacity * rates::CONFERENCE_AREA_PER_SEAT;
    }
    if admin.records_room.has_records_room {
        net += admin.records_room.size;
    }

    // Staff areas
    let staff = &program.staff_areas;
    if staff.break_room.has_break_room {
        net += staff.break_room.size;
    }
    if staff.lockers.has_lockers {
        net += staff.lockers.count * rates::LOCKER_AREA;
    }
    if staff.staff_lounge.has_lounge {
        net += staff.staff_lounge.size;
    }

    // Storage and utility
    let storage = &program.storage_utility_rooms;
    net += storage.general_storage.total_size;
    net += storage.medical_supply_storage.size;
    net += storage.equipment_storage.size;
    net += storage.janitorial_closets.count * rates::JANITORIAL_CLOSET_AREA;

    let mech = &storage.mechanical_rooms;
    if mech.hvac_room {
        net += rates::HVAC_ROOM_AREA;
    }
    if mech.electrical_room {
        net += rates::ELECTRICAL_ROOM_AREA;
    }
    if mech.data_closet {
        net += rates::DATA_CLOSET_AREA;
    }
    if mech.medical_gas_manifold {
        net += rates::GAS_MANIFOLD_AREA;
    }

    // Waiting areas
    let waiting = &program.waiting_areas;
    net += waiting.main_waiting.size;
    if waiting.children_area.has_children_area {
        net += waiting.children_area.size;
    }
    if waiting.private_waiting.has_private_waiting {
        net += waiting.private_waiting.rooms * rates::PRIVATE_WAITING_ROOM_AREA;
    }
    if waiting.consultation_waiting.has_consult_waiting {
        net += waiting.consultation_waiting.seating_capacity * rates::WAITING_AREA_PER_SEAT;
    }

    // Restrooms
    let restrooms = &program.restrooms;
    net += (restrooms.patient_restrooms.count + restrooms.staff_restrooms.count)
        * rates::RESTROOM_AREA;
    if restrooms.patient_restrooms.family_restroom {
        net += rates::FAMILY_RESTROOM_AREA;
    }

    // Special rooms
    let special = &program.special_rooms;
    net += special.xray_rooms.count * rates::XRAY_ROOM_AREA;
    net += special.surgical_suites.count * special.surgical_suites.size.area();
    if special.pan_room.has_pan_room {
        net += rates::PAN_ROOM_AREA;
    }
    if special.cbct_room.has_cbct {
        net += special.cbct_room.size;
    }

    (f64::from(net) * rates::CIRCULATION_FACTOR).round() as u32
}
