#![allow(dead_code)]

use stride_core::models::{
    DeviceType, FingerPosition, MaterialType, ProstheticRecord, Roster, Side,
};

pub const PATIENT: i64 = 7;

pub fn record(id: i64, device_type: DeviceType, side: Side, active: bool) -> ProstheticRecord {
    let mut record = ProstheticRecord::new(PATIENT, device_type, side);
    record.id = Some(id);
    record.active = active;
    record.details.material = Some(MaterialType::CarbonFiber);
    record
}

pub fn finger(id: i64, position: FingerPosition, side: Side) -> ProstheticRecord {
    let mut record = record(id, DeviceType::Finger, side, true);
    record.finger_position = Some(position);
    record
}

pub fn roster(records: Vec<ProstheticRecord>) -> Roster {
    Roster::new(PATIENT, records).expect("consistent roster")
}
