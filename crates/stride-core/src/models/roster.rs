use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::prosthetic::{PatientId, ProstheticRecord, RecordId};
use crate::error::CoreError;

/// All prosthetic records of one patient, active and inactive.
///
/// Snapshots arrive from the records backend; the engine only reads them
/// and never mutates a roster in place during editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Roster {
    #[ts(type = "number")]
    pub patient_id: PatientId,
    pub prosthetics: Vec<ProstheticRecord>,
}

impl Roster {
    pub fn empty(patient_id: PatientId) -> Self {
        Self {
            patient_id,
            prosthetics: Vec::new(),
        }
    }

    /// Build a roster, rejecting records of another patient and repeated ids.
    pub fn new(patient_id: PatientId, prosthetics: Vec<ProstheticRecord>) -> Result<Self, CoreError> {
        let roster = Self {
            patient_id,
            prosthetics,
        };
        roster.check()?;
        Ok(roster)
    }

    /// Parse a roster snapshot and check its consistency.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let roster: Roster = serde_json::from_str(json)?;
        roster.check()?;
        Ok(roster)
    }

    fn check(&self) -> Result<(), CoreError> {
        let mut seen = BTreeSet::new();
        for record in &self.prosthetics {
            if record.patient_id != self.patient_id {
                return Err(CoreError::PatientMismatch {
                    record_id: record.id,
                    expected: self.patient_id,
                    found: record.patient_id,
                });
            }
            let Some(id) = record.id else { continue };
            if !seen.insert(id) {
                return Err(CoreError::DuplicateRecord(id));
            }
        }
        Ok(())
    }

    pub fn records(&self) -> &[ProstheticRecord] {
        &self.prosthetics
    }

    pub fn get(&self, id: RecordId) -> Option<&ProstheticRecord> {
        self.prosthetics.iter().find(|r| r.id == Some(id))
    }

    pub fn active(&self) -> impl Iterator<Item = &ProstheticRecord> {
        self.prosthetics.iter().filter(|r| r.active)
    }

    /// Insert a persisted record, replacing any record with the same id.
    pub fn upsert(&mut self, record: ProstheticRecord) {
        match record
            .id
            .and_then(|id| self.prosthetics.iter().position(|r| r.id == Some(id)))
        {
            Some(idx) => self.prosthetics[idx] = record,
            None => self.prosthetics.push(record),
        }
    }
}
