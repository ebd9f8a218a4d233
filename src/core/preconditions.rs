//! Safety checks before a remote climate start.
//!
//! A remote start turns on the HVAC (and the engine on combustion vehicles),
//! so the vehicle must be parked and closed. Only attributes reported by the
//! cloud are checked: an attribute the cloud does not report never blocks
//! the start.
use derive_more::Display;
use vehicle_control_primitives::vehicle::{Gear, VehicleSnapshot};

/// A failed safety check.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    #[display("vehicle must be locked")]
    Unlocked,
    #[display("all doors must be closed")]
    DoorOpen,
    #[display("hood must be closed")]
    HoodOpen,
    #[display("trunk must be closed")]
    TrunkOpen,
    #[display("ignition must be off")]
    IgnitionOn,
    #[display("gear must be in Park")]
    NotInPark,
}

impl Violation {
    #[must_use]
    pub fn describe_all(violations: &[Violation]) -> String {
        violations.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    }
}

/// It returns every violation found in the snapshot, in a stable order.
#[must_use]
pub fn evaluate(snapshot: &VehicleSnapshot) -> Vec<Violation> {
    let mut violations = Vec::new();

    if snapshot.locked == Some(false) {
        violations.push(Violation::Unlocked);
    }

    if snapshot.any_door_open() == Some(true) {
        violations.push(Violation::DoorOpen);
    }

    if snapshot.hood_open == Some(true) {
        violations.push(Violation::HoodOpen);
    }

    if snapshot.trunk_open == Some(true) {
        violations.push(Violation::TrunkOpen);
    }

    if snapshot.ignition_on == Some(true) {
        violations.push(Violation::IgnitionOn);
    }

    if matches!(snapshot.gear, Some(gear) if gear != Gear::Park) {
        violations.push(Violation::NotInPark);
    }

    violations
}
