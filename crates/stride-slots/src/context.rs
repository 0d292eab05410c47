//! Availability as seen from one draft in the editor.
//!
//! Layers the editor rules over the raw [`AvailabilityMap`]: a record being
//! edited may always keep its own stored slot, and a brand-new inactive
//! draft competes for nothing.

use stride_core::models::{DeviceType, Position, ProstheticRecord, Side};

use crate::availability::{AvailabilityMap, recompute_availability};
use crate::conflict::{SlotConflict, detect_conflict};
use crate::rules::{Exclusivity, exclusivity};
use crate::slot::{SlotKey, key_of};

pub struct AllocationContext<'a> {
    records: &'a [ProstheticRecord],
    original: Option<&'a ProstheticRecord>,
    draft_active: bool,
    map: AvailabilityMap,
}

impl<'a> AllocationContext<'a> {
    /// `original` is the stored version of the record under edit, `None` in
    /// create mode.
    pub fn new(
        records: &'a [ProstheticRecord],
        original: Option<&'a ProstheticRecord>,
        draft_active: bool,
    ) -> Self {
        let map = recompute_availability(records, original.and_then(|r| r.id));
        Self {
            records,
            original,
            draft_active,
            map,
        }
    }

    pub fn into_map(self) -> AvailabilityMap {
        self.map
    }

    /// A new record that starts inactive never competes for a slot.
    pub fn is_bypassed(&self) -> bool {
        self.original.is_none() && !self.draft_active
    }

    pub fn is_type_selectable(&self, device_type: DeviceType) -> bool {
        if self.is_bypassed() {
            return true;
        }
        if self.original.is_some_and(|r| r.device_type == device_type) {
            return true;
        }
        self.map
            .for_type(device_type)
            .is_none_or(|a| a.is_available)
    }

    pub fn is_position_selectable(&self, device_type: DeviceType, position: Position) -> bool {
        !self.sides_for(device_type, Some(position)).is_empty()
    }

    /// Sides the draft may pick for `(device_type, position)`, in offer order.
    pub fn sides_for(&self, device_type: DeviceType, position: Option<Position>) -> Vec<Side> {
        if self.is_bypassed() {
            return Side::SELECTABLE.to_vec();
        }

        let key = SlotKey::new(device_type, position);
        let mut sides = match exclusivity(device_type) {
            Exclusivity::Exempt => return Side::SELECTABLE.to_vec(),
            Exclusivity::Positioned(_) if key.position.is_none() => return Vec::new(),
            Exclusivity::Sided | Exclusivity::Positioned(_) => self
                .map
                .for_key(key)
                .map(|a| a.available_sides.clone())
                .unwrap_or_default(),
        };

        // The record under edit keeps its own stored slot.
        if let Some(original) = self.original
            && key_of(original) == key
            && Side::SELECTABLE.contains(&original.side)
            && !sides.contains(&original.side)
        {
            sides.push(original.side);
            sides.sort_by_key(|s| Side::SELECTABLE.iter().position(|x| x == s));
        }

        sides
    }

    pub fn admits(&self, device_type: DeviceType, position: Option<Position>, side: Side) -> bool {
        self.sides_for(device_type, position).contains(&side)
    }

    /// Collision check for activating the draft into `(device_type, position, side)`.
    pub fn conflict_for(
        &self,
        device_type: DeviceType,
        position: Option<Position>,
        side: Side,
    ) -> Option<SlotConflict> {
        detect_conflict(
            self.records,
            self.original.and_then(|r| r.id),
            device_type,
            position,
            side,
        )
    }
}
