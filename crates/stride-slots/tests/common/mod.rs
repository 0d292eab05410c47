#![allow(dead_code)]

use stride_core::models::{DeviceType, FingerPosition, ProstheticRecord, Side, ToePosition};

pub const PATIENT: i64 = 1;

pub fn active(id: i64, device_type: DeviceType, side: Side) -> ProstheticRecord {
    let mut record = ProstheticRecord::new(PATIENT, device_type, side);
    record.id = Some(id);
    record
}

pub fn inactive(id: i64, device_type: DeviceType, side: Side) -> ProstheticRecord {
    let mut record = active(id, device_type, side);
    record.active = false;
    record
}

pub fn finger(id: i64, position: FingerPosition, side: Side) -> ProstheticRecord {
    let mut record = active(id, DeviceType::Finger, side);
    record.finger_position = Some(position);
    record
}

pub fn toe(id: i64, position: ToePosition, side: Side) -> ProstheticRecord {
    let mut record = active(id, DeviceType::Toe, side);
    record.toe_position = Some(position);
    record
}
