use thiserror::Error;

use crate::models::{PatientId, RecordId};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(
        "record {} belongs to patient {found}, expected patient {expected}",
        .record_id.map_or_else(|| "without id".to_string(), |id| id.to_string())
    )]
    PatientMismatch {
        /// `None` for a record that has not been persisted yet.
        record_id: Option<RecordId>,
        expected: PatientId,
        found: PatientId,
    },

    #[error("duplicate record id in roster: {0}")]
    DuplicateRecord(RecordId),
}
