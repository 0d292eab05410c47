//! Slot identity and side overlap.

use serde::{Deserialize, Serialize};
use stride_core::models::{DeviceType, Position, ProstheticRecord, Side};

use crate::rules::{Exclusivity, exclusivity};

/// The partition under which exclusivity is evaluated: the device type,
/// plus the digit position for `Finger` and `Toe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotKey {
    pub device_type: DeviceType,
    pub position: Option<Position>,
}

impl SlotKey {
    /// Build a key, dropping a position the device type does not use.
    pub fn new(device_type: DeviceType, position: Option<Position>) -> Self {
        let position = match exclusivity(device_type) {
            Exclusivity::Positioned(kind) => position.filter(|p| p.kind() == kind),
            Exclusivity::Sided | Exclusivity::Exempt => None,
        };
        Self {
            device_type,
            position,
        }
    }

    /// Label used in user-facing messages: the position if there is one,
    /// otherwise the device type.
    pub fn label(&self) -> &'static str {
        match self.position {
            Some(p) => p.label(),
            None => self.device_type.label(),
        }
    }
}

pub fn key_of(record: &ProstheticRecord) -> SlotKey {
    SlotKey::new(record.device_type, record.position())
}

/// The concrete body sides a side designation covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideCoverage {
    pub left: bool,
    pub right: bool,
}

impl SideCoverage {
    pub fn of(side: Side) -> Self {
        match side {
            Side::Left => Self {
                left: true,
                right: false,
            },
            Side::Right => Self {
                left: false,
                right: true,
            },
            Side::Bilateral => Self {
                left: true,
                right: true,
            },
            Side::Unknown => Self::default(),
        }
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            left: self.left || other.left,
            right: self.right || other.right,
        }
    }

    pub fn is_empty(self) -> bool {
        !self.left && !self.right
    }

    /// Occupied sides as `Left`/`Right` values.
    pub fn sides(self) -> Vec<Side> {
        let mut sides = Vec::with_capacity(2);
        if self.left {
            sides.push(Side::Left);
        }
        if self.right {
            sides.push(Side::Right);
        }
        sides
    }

    /// Whether a new claim on `side` would fit next to this coverage.
    pub fn admits(self, side: Side) -> bool {
        let wanted = Self::of(side);
        !wanted.is_empty() && !(wanted.left && self.left) && !(wanted.right && self.right)
    }

    /// Selectable sides still free, in offer order.
    pub fn free_sides(self) -> Vec<Side> {
        Side::SELECTABLE
            .into_iter()
            .filter(|s| self.admits(*s))
            .collect()
    }
}

pub fn slots_of(record: &ProstheticRecord) -> SideCoverage {
    SideCoverage::of(record.side)
}

/// Two side designations collide if they are equal or either is bilateral.
/// `Unknown` covers no side and collides with nothing.
pub fn overlaps(a: Side, b: Side) -> bool {
    if a == Side::Unknown || b == Side::Unknown {
        return false;
    }
    a == b || a == Side::Bilateral || b == Side::Bilateral
}
