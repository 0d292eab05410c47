//! Slot exclusivity table.

use stride_core::models::{DeviceType, PositionKind};

/// How a device type partitions the body for exclusivity purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusivity {
    /// Never competes for a slot.
    Exempt,
    /// One slot per type, split by side.
    Sided,
    /// One slot per position of the given family, each split by side.
    Positioned(PositionKind),
}

/// One row per device type.
pub static SLOT_RULES: &[(DeviceType, Exclusivity)] = &[
    (DeviceType::Transtibial, Exclusivity::Sided),
    (DeviceType::Transfemoral, Exclusivity::Sided),
    (DeviceType::PartialFoot, Exclusivity::Sided),
    (DeviceType::Syme, Exclusivity::Sided),
    (DeviceType::KneeDisarticulation, Exclusivity::Sided),
    (DeviceType::HipDisarticulation, Exclusivity::Sided),
    (DeviceType::Transhumeral, Exclusivity::Sided),
    (DeviceType::Transradial, Exclusivity::Sided),
    (DeviceType::Hand, Exclusivity::Sided),
    (DeviceType::ShoulderDisarticulation, Exclusivity::Sided),
    (DeviceType::Finger, Exclusivity::Positioned(PositionKind::Finger)),
    (DeviceType::Toe, Exclusivity::Positioned(PositionKind::Toe)),
    (DeviceType::Other, Exclusivity::Exempt),
];

/// Look up a device type's rule. Types without a row are treated as `Sided`.
pub fn exclusivity(device_type: DeviceType) -> Exclusivity {
    SLOT_RULES
        .iter()
        .find(|(t, _)| *t == device_type)
        .map(|(_, e)| *e)
        .unwrap_or(Exclusivity::Sided)
}
