use stride_core::models::{DeviceType, PatientId, Position, RecordId, Side};
use stride_slots::SlotConflict;
use thiserror::Error;

use crate::validation::FieldError;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    SlotConflict(#[from] SlotConflict),

    #[error("{} field error(s): {}", .0.len(), join_messages(.0))]
    Validation(Vec<FieldError>),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("persistence failed: {0}")]
    Persistence(#[from] StoreError),

    #[error("record {0} is not in the patient's roster")]
    UnknownRecord(RecordId),

    #[error("record has not been persisted yet and cannot be edited")]
    NotPersisted,

    #[error("roster belongs to patient {found}, editor is for patient {expected}")]
    PatientMismatch {
        expected: PatientId,
        found: PatientId,
    },

    #[error("draft has already been submitted")]
    AlreadySubmitted,
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A selection the controller refused. The draft is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("{} has no free slot for this patient", .0.label())]
    TypeUnavailable(DeviceType),

    #[error("select a device type first")]
    TypeUnset,

    #[error("{} is not a position for {}", .position.label(), .device_type.map_or("an unset type", |t| t.label()))]
    PositionMismatch {
        device_type: Option<DeviceType>,
        position: Position,
    },

    #[error("the {} position is already fully occupied", .0.label())]
    PositionUnavailable(Position),

    #[error("select a position first")]
    PositionUnset,

    #[error("the {} side is not available for {}", .side.label(), .slot)]
    SideUnavailable { side: Side, slot: &'static str },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found: {0}")]
    NotFound(RecordId),

    #[error("patient not found: {0}")]
    PatientNotFound(PatientId),

    #[error("record rejected: {0}")]
    Rejected(String),

    #[error("transport error: {0}")]
    Transport(String),
}
