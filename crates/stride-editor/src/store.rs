//! Seams to the records backend.
//!
//! The editor never talks to the network itself. It reads the patient's
//! roster through a [`RosterProvider`] and persists through a
//! [`RecordSink`].

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

use stride_core::models::{PatientId, ProstheticRecord, RecordId, Roster};
use tokio::sync::Mutex;

use crate::error::StoreError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait RosterProvider: Send + Sync {
    /// Latest snapshot of every prosthetic of the patient.
    fn fetch_roster(&self, patient_id: PatientId) -> BoxFuture<'_, Result<Roster, StoreError>>;
}

pub trait RecordSink: Send + Sync {
    /// Persist a new record. Returns the stored record with its id.
    fn create(
        &self,
        record: ProstheticRecord,
    ) -> BoxFuture<'_, Result<ProstheticRecord, StoreError>>;

    /// Replace the stored record `id`.
    fn update(
        &self,
        id: RecordId,
        record: ProstheticRecord,
    ) -> BoxFuture<'_, Result<ProstheticRecord, StoreError>>;
}

#[derive(Debug, Default)]
struct MemoryState {
    rosters: BTreeMap<PatientId, Roster>,
    next_id: RecordId,
    /// Pending failure for the next write, for exercising error paths.
    fail_next: Option<String>,
}

/// In-process backend holding rosters keyed by patient.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a roster, replacing any roster of the same patient.
    pub fn with_roster(roster: Roster) -> Self {
        let next_id = roster
            .records()
            .iter()
            .filter_map(|r| r.id)
            .max()
            .unwrap_or(0);
        let mut rosters = BTreeMap::new();
        rosters.insert(roster.patient_id, roster);
        Self {
            state: Mutex::new(MemoryState {
                rosters,
                next_id,
                fail_next: None,
            }),
        }
    }

    /// Make the next `create` or `update` fail with a transport error.
    pub async fn fail_next_write(&self, reason: impl Into<String>) {
        self.state.lock().await.fail_next = Some(reason.into());
    }

    pub async fn snapshot(&self, patient_id: PatientId) -> Option<Roster> {
        self.state.lock().await.rosters.get(&patient_id).cloned()
    }
}

impl RosterProvider for MemoryStore {
    fn fetch_roster(&self, patient_id: PatientId) -> BoxFuture<'_, Result<Roster, StoreError>> {
        Box::pin(async move {
            let state = self.state.lock().await;
            Ok(state
                .rosters
                .get(&patient_id)
                .cloned()
                .unwrap_or_else(|| Roster::empty(patient_id)))
        })
    }
}

impl RecordSink for MemoryStore {
    fn create(
        &self,
        mut record: ProstheticRecord,
    ) -> BoxFuture<'_, Result<ProstheticRecord, StoreError>> {
        Box::pin(async move {
            let mut state = self.state.lock().await;
            if let Some(reason) = state.fail_next.take() {
                return Err(StoreError::Transport(reason));
            }
            if record.id.is_some() {
                return Err(StoreError::Rejected(
                    "new records must not carry an id".to_string(),
                ));
            }

            state.next_id += 1;
            let now = jiff::Timestamp::now();
            record.id = Some(state.next_id);
            record.created_at = Some(now);
            record.updated_at = Some(now);

            state
                .rosters
                .entry(record.patient_id)
                .or_insert_with(|| Roster::empty(record.patient_id))
                .upsert(record.clone());
            tracing::debug!(
                id = state.next_id,
                patient_id = record.patient_id,
                "record created"
            );
            Ok(record)
        })
    }

    fn update(
        &self,
        id: RecordId,
        mut record: ProstheticRecord,
    ) -> BoxFuture<'_, Result<ProstheticRecord, StoreError>> {
        Box::pin(async move {
            let mut state = self.state.lock().await;
            if let Some(reason) = state.fail_next.take() {
                return Err(StoreError::Transport(reason));
            }

            let roster = state
                .rosters
                .get_mut(&record.patient_id)
                .ok_or(StoreError::PatientNotFound(record.patient_id))?;
            let stored = roster.get(id).ok_or(StoreError::NotFound(id))?;

            record.id = Some(id);
            record.created_at = stored.created_at;
            record.updated_at = Some(jiff::Timestamp::now());
            roster.upsert(record.clone());
            tracing::debug!(id, patient_id = record.patient_id, "record updated");
            Ok(record)
        })
    }
}
