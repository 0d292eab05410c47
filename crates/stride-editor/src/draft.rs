use serde::{Deserialize, Serialize};
use stride_core::models::{
    DeviceType, PatientId, Position, ProstheticDetails, ProstheticRecord, RecordId, Side,
};
use ts_rs::TS;

/// The editable form of a [`ProstheticRecord`]. Slot identity may be
/// incomplete while the user is still choosing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProstheticDraft {
    #[ts(type = "number | null")]
    pub id: Option<RecordId>,
    #[ts(type = "number")]
    pub patient_id: PatientId,
    pub device_type: Option<DeviceType>,
    pub position: Option<Position>,
    pub side: Option<Side>,
    pub active: bool,
    pub details: ProstheticDetails,
    pub created_at: Option<jiff::Timestamp>,
}

impl ProstheticDraft {
    /// An empty, active draft for a new record.
    pub fn new(patient_id: PatientId) -> Self {
        Self {
            id: None,
            patient_id,
            device_type: None,
            position: None,
            side: None,
            active: true,
            details: ProstheticDetails::default(),
            created_at: None,
        }
    }

    /// Load a stored record. A legacy `Unknown` side is left unset so the
    /// user has to pick a real one.
    pub fn from_record(record: &ProstheticRecord) -> Self {
        Self {
            id: record.id,
            patient_id: record.patient_id,
            device_type: Some(record.device_type),
            position: record.position(),
            side: Some(record.side).filter(|s| *s != Side::Unknown),
            active: record.active,
            details: record.details.clone(),
            created_at: record.created_at,
        }
    }

    /// The record this draft describes, or `None` while type or side is unset.
    pub fn to_record(&self) -> Option<ProstheticRecord> {
        let device_type = self.device_type?;
        let side = self.side?;
        let mut record = ProstheticRecord::new(self.patient_id, device_type, side);
        record.id = self.id;
        record.set_position(self.position);
        record.active = self.active;
        record.details = self.details.clone();
        record.created_at = self.created_at;
        Some(record)
    }

    /// Silent relevance pruning for the current type.
    pub fn prune(&mut self) {
        let Some(device_type) = self.device_type else {
            return;
        };
        if device_type.position_kind() != self.position.map(|p| p.kind()) {
            self.position = None;
        }
        self.details.prune_for(device_type);
    }

    pub fn phase(&self) -> DraftPhase {
        match (self.device_type, self.side) {
            (None, _) => DraftPhase::TypeUnset,
            (Some(device_type), None) => DraftPhase::SideUnset { device_type },
            (Some(device_type), Some(side)) => DraftPhase::Ready { device_type, side },
        }
    }
}

/// How far slot identity has been filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "phase", rename_all = "snake_case")]
#[ts(export)]
pub enum DraftPhase {
    TypeUnset,
    SideUnset { device_type: DeviceType },
    Ready { device_type: DeviceType, side: Side },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EditorStatus {
    Editing,
    Submitted,
}
