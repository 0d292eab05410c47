//! Availability calculator.
//!
//! Given a roster and an optional record to leave out (the one being
//! edited), computes for every device type, and for every digit position,
//! the sides a new active device could still claim.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stride_core::models::{
    DeviceType, FingerPosition, Position, ProstheticRecord, RecordId, Side, ToePosition,
};
use ts_rs::TS;

use crate::rules::{Exclusivity, exclusivity};
use crate::slot::{SideCoverage, SlotKey, key_of, slots_of};

/// Availability of one slot partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Availability {
    pub is_available: bool,
    pub available_sides: Vec<Side>,
}

impl Availability {
    pub fn unrestricted() -> Self {
        Self::from_coverage(SideCoverage::default())
    }

    fn from_coverage(coverage: SideCoverage) -> Self {
        Self::from_sides(coverage.free_sides())
    }

    fn from_sides(available_sides: Vec<Side>) -> Self {
        Self {
            is_available: !available_sides.is_empty(),
            available_sides,
        }
    }

    pub fn admits(&self, side: Side) -> bool {
        self.available_sides.contains(&side)
    }
}

/// Per-type and per-position availability for one patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AvailabilityMap {
    pub types: BTreeMap<DeviceType, Availability>,
    pub fingers: BTreeMap<FingerPosition, Availability>,
    pub toes: BTreeMap<ToePosition, Availability>,
}

impl AvailabilityMap {
    pub fn for_type(&self, device_type: DeviceType) -> Option<&Availability> {
        self.types.get(&device_type)
    }

    pub fn for_position(&self, position: Position) -> Option<&Availability> {
        match position {
            Position::Finger(p) => self.fingers.get(&p),
            Position::Toe(p) => self.toes.get(&p),
        }
    }

    /// Availability of the partition a key names. A digit type without a
    /// position has no partition of its own.
    pub fn for_key(&self, key: SlotKey) -> Option<&Availability> {
        match (exclusivity(key.device_type), key.position) {
            (Exclusivity::Positioned(_), Some(position)) => self.for_position(position),
            (Exclusivity::Positioned(_), None) => None,
            (Exclusivity::Sided | Exclusivity::Exempt, _) => self.for_type(key.device_type),
        }
    }
}

/// Recompute availability from scratch.
///
/// Only active records other than `exclude_id` occupy slots. The result
/// depends on the set of records, not on their order.
pub fn recompute_availability(
    records: &[ProstheticRecord],
    exclude_id: Option<RecordId>,
) -> AvailabilityMap {
    let mut usage: BTreeMap<SlotKey, SideCoverage> = BTreeMap::new();
    let mut occupants = 0usize;

    for record in records {
        if !record.active || (exclude_id.is_some() && record.id == exclude_id) {
            continue;
        }
        let key = key_of(record);
        let claims = match exclusivity(key.device_type) {
            Exclusivity::Exempt => false,
            Exclusivity::Sided => true,
            // A digit record without a position claims no sub-slot.
            Exclusivity::Positioned(_) => key.position.is_some(),
        };
        if claims {
            let entry = usage.entry(key).or_default();
            *entry = entry.union(slots_of(record));
            occupants += 1;
        }
    }

    let coverage = |key: SlotKey| usage.get(&key).copied().unwrap_or_default();

    let mut map = AvailabilityMap {
        types: BTreeMap::new(),
        fingers: BTreeMap::new(),
        toes: BTreeMap::new(),
    };

    for device_type in DeviceType::ALL {
        let availability = match exclusivity(device_type) {
            Exclusivity::Exempt => Availability::unrestricted(),
            Exclusivity::Sided => {
                Availability::from_coverage(coverage(SlotKey::new(device_type, None)))
            }
            Exclusivity::Positioned(kind) => {
                let mut any_free = Vec::new();
                for position in kind.positions() {
                    let entry = Availability::from_coverage(coverage(SlotKey::new(
                        device_type,
                        Some(position),
                    )));
                    for side in &entry.available_sides {
                        if !any_free.contains(side) {
                            any_free.push(*side);
                        }
                    }
                    match position {
                        Position::Finger(p) => {
                            map.fingers.insert(p, entry);
                        }
                        Position::Toe(p) => {
                            map.toes.insert(p, entry);
                        }
                    }
                }
                any_free.sort_by_key(|s| Side::SELECTABLE.iter().position(|x| x == s));
                Availability::from_sides(any_free)
            }
        };
        map.types.insert(device_type, availability);
    }

    tracing::debug!(
        records = records.len(),
        occupants,
        exclude_id = ?exclude_id,
        "recomputed slot availability"
    );

    map
}
