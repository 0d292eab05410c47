use serde::{Deserialize, Serialize};
use stride_core::models::{DeviceType, Position, ProstheticRecord, RecordId, Side};
use thiserror::Error;
use ts_rs::TS;

use crate::rules::{Exclusivity, exclusivity};
use crate::slot::{SlotKey, key_of, overlaps};

/// Activating a record would put two active devices in the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
#[error("{message}")]
pub struct SlotConflict {
    pub device_type: DeviceType,
    pub position: Option<Position>,
    /// The side the draft asked for.
    pub requested_side: Side,
    /// The side held by the colliding record.
    pub occupied_side: Side,
    #[ts(type = "number | null")]
    pub conflicting_id: Option<RecordId>,
    pub message: String,
}

/// Find an active record, other than `exclude_id`, whose slot collides with
/// `(device_type, position, side)`.
///
/// `Other` devices never collide, and a digit device without a position has
/// nothing to collide with yet.
pub fn detect_conflict(
    records: &[ProstheticRecord],
    exclude_id: Option<RecordId>,
    device_type: DeviceType,
    position: Option<Position>,
    side: Side,
) -> Option<SlotConflict> {
    let key = SlotKey::new(device_type, position);
    match exclusivity(device_type) {
        Exclusivity::Exempt => return None,
        Exclusivity::Positioned(_) if key.position.is_none() => return None,
        Exclusivity::Sided | Exclusivity::Positioned(_) => {}
    }

    let colliding = records.iter().find(|r| {
        r.active
            && !(exclude_id.is_some() && r.id == exclude_id)
            && key_of(r) == key
            && overlaps(r.side, side)
    })?;

    let message = format!(
        "Cannot activate this prosthetic because there is already an active {} prosthetic on the {} side.",
        key.label(),
        colliding.side.label(),
    );

    Some(SlotConflict {
        device_type,
        position: key.position,
        requested_side: side,
        occupied_side: colliding.side,
        conflicting_id: colliding.id,
        message,
    })
}
