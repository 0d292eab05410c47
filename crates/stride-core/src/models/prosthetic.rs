use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::clinical::{ActivityLevel, ClinicalAttributes, MaterialType, UserAdaptation};
use super::device::{DeviceType, FingerPosition, Position, Side, ToePosition};

/// Backend-assigned record identifier.
pub type RecordId = i64;

/// Backend-assigned patient identifier.
pub type PatientId = i64;

fn default_active() -> bool {
    true
}

/// A patient's prosthetic device as stored by the records backend.
///
/// The wire format is flat camelCase JSON; `details` and its clinical
/// attributes are flattened into the record object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProstheticRecord {
    /// `None` until the record has been persisted.
    #[ts(type = "number | null")]
    pub id: Option<RecordId>,
    #[ts(type = "number")]
    pub patient_id: PatientId,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub side: Side,
    pub finger_position: Option<FingerPosition>,
    pub toe_position: Option<ToePosition>,
    #[serde(rename = "isActive", default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub details: ProstheticDetails,
    pub created_at: Option<jiff::Timestamp>,
    pub updated_at: Option<jiff::Timestamp>,
}

impl ProstheticRecord {
    /// A minimal active record with empty details.
    pub fn new(patient_id: PatientId, device_type: DeviceType, side: Side) -> Self {
        Self {
            id: None,
            patient_id,
            device_type,
            side,
            finger_position: None,
            toe_position: None,
            active: true,
            details: ProstheticDetails::default(),
            created_at: None,
            updated_at: None,
        }
    }

    /// The digit sub-slot this record claims. A stray finger position on a
    /// toe record (or vice versa) is ignored.
    pub fn position(&self) -> Option<Position> {
        match self.device_type {
            DeviceType::Finger => self.finger_position.map(Position::Finger),
            DeviceType::Toe => self.toe_position.map(Position::Toe),
            _ => None,
        }
    }

    /// Set the position field matching `position`'s family, clearing the other.
    pub fn set_position(&mut self, position: Option<Position>) {
        self.finger_position = None;
        self.toe_position = None;
        match position {
            Some(Position::Finger(p)) => self.finger_position = Some(p),
            Some(Position::Toe(p)) => self.toe_position = Some(p),
            None => {}
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Everything on a record that is not slot identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProstheticDetails {
    /// Free-text type, only meaningful for `DeviceType::Other`.
    pub other_type: Option<String>,
    pub material: Option<MaterialType>,
    pub other_material: Option<String>,
    pub activity_level: Option<ActivityLevel>,
    pub other_activity_level: Option<String>,
    pub user_adaptation: Option<UserAdaptation>,
    /// kg.
    pub weight: Option<f64>,
    /// cm.
    pub length: Option<f64>,
    /// Months of use.
    pub usage_duration: Option<u32>,
    pub installation_date: Option<jiff::civil::Date>,
    pub installation_year: Option<i16>,
    pub deactivation_date: Option<jiff::civil::Date>,
    pub deactivation_year: Option<i16>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    #[serde(rename = "details")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub attributes: ClinicalAttributes,
}

impl ProstheticDetails {
    pub fn clear_deactivation(&mut self) {
        self.deactivation_date = None;
        self.deactivation_year = None;
    }
}
