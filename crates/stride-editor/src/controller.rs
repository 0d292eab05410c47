//! Conflict-aware editor controller.
//!
//! Every transition rebuilds an [`AllocationContext`] from the current
//! roster snapshot, so availability is never stale and never cached.

use stride_core::models::{
    DeviceType, FingerPosition, PatientId, Position, ProstheticDetails, ProstheticRecord,
    RecordId, Roster, Side, ToePosition,
};
use stride_slots::{AllocationContext, AvailabilityMap, SlotConflict, SlotKey};

use crate::draft::{DraftPhase, EditorStatus, ProstheticDraft};
use crate::error::{EditorError, SelectionError};
use crate::store::{RecordSink, RosterProvider};
use crate::validation::{FieldError, ValidationLimits, validate_draft};

#[derive(Debug, Clone)]
pub struct EditorController {
    roster: Roster,
    /// Stored version of the record under edit. `None` in create mode.
    original: Option<ProstheticRecord>,
    draft: ProstheticDraft,
    limits: ValidationLimits,
    /// Set when the draft went from active to inactive in this session.
    deactivated: bool,
    status: EditorStatus,
}

impl EditorController {
    /// Start a new record for the roster's patient.
    pub fn create(roster: Roster) -> Self {
        tracing::debug!(patient_id = roster.patient_id, "editor opened in create mode");
        Self {
            draft: ProstheticDraft::new(roster.patient_id),
            roster,
            original: None,
            limits: ValidationLimits::default(),
            deactivated: false,
            status: EditorStatus::Editing,
        }
    }

    /// Edit a persisted record against the patient's roster.
    pub fn edit(record: ProstheticRecord, roster: Roster) -> Result<Self, EditorError> {
        if !record.is_persisted() {
            return Err(EditorError::NotPersisted);
        }
        if record.patient_id != roster.patient_id {
            return Err(EditorError::PatientMismatch {
                expected: record.patient_id,
                found: roster.patient_id,
            });
        }
        tracing::debug!(
            id = ?record.id,
            patient_id = roster.patient_id,
            "editor opened in edit mode"
        );
        Ok(Self {
            draft: ProstheticDraft::from_record(&record),
            roster,
            original: Some(record),
            limits: ValidationLimits::default(),
            deactivated: false,
            status: EditorStatus::Editing,
        })
    }

    /// Fetch the latest roster and open an editor on it: edit mode for
    /// `record_id`, create mode otherwise.
    pub async fn open(
        provider: &dyn RosterProvider,
        patient_id: PatientId,
        record_id: Option<RecordId>,
    ) -> Result<Self, EditorError> {
        let roster = provider.fetch_roster(patient_id).await?;
        if roster.patient_id != patient_id {
            return Err(EditorError::PatientMismatch {
                expected: patient_id,
                found: roster.patient_id,
            });
        }
        match record_id {
            None => Ok(Self::create(roster)),
            Some(id) => {
                let record = roster
                    .get(id)
                    .cloned()
                    .ok_or(EditorError::UnknownRecord(id))?;
                Self::edit(record, roster)
            }
        }
    }

    pub fn with_limits(mut self, limits: ValidationLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn draft(&self) -> &ProstheticDraft {
        &self.draft
    }

    pub fn original(&self) -> Option<&ProstheticRecord> {
        self.original.as_ref()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    pub fn is_edit_mode(&self) -> bool {
        self.original.is_some()
    }

    pub fn phase(&self) -> DraftPhase {
        self.draft.phase()
    }

    pub fn status(&self) -> EditorStatus {
        self.status
    }

    fn context(&self) -> AllocationContext<'_> {
        AllocationContext::new(
            self.roster.records(),
            self.original.as_ref(),
            self.draft.active,
        )
    }

    fn ensure_editing(&self) -> Result<(), EditorError> {
        match self.status {
            EditorStatus::Editing => Ok(()),
            EditorStatus::Submitted => Err(EditorError::AlreadySubmitted),
        }
    }

    /// Raw availability for the patient, excluding the record under edit.
    pub fn availability(&self) -> AvailabilityMap {
        self.context().into_map()
    }

    pub fn selectable_types(&self) -> Vec<DeviceType> {
        let ctx = self.context();
        DeviceType::ALL
            .into_iter()
            .filter(|t| ctx.is_type_selectable(*t))
            .collect()
    }

    /// Positions the draft's digit type can still take.
    pub fn selectable_positions(&self) -> Vec<Position> {
        let Some(device_type) = self.draft.device_type else {
            return Vec::new();
        };
        let Some(kind) = device_type.position_kind() else {
            return Vec::new();
        };
        let ctx = self.context();
        kind.positions()
            .into_iter()
            .filter(|p| ctx.is_position_selectable(device_type, *p))
            .collect()
    }

    /// Sides selectable for the draft's current type and position.
    pub fn available_sides(&self) -> Vec<Side> {
        match self.draft.device_type {
            Some(device_type) => self.context().sides_for(device_type, self.draft.position),
            None => Vec::new(),
        }
    }

    pub fn set_type(&mut self, device_type: DeviceType) -> Result<(), EditorError> {
        self.ensure_editing()?;
        if self.draft.device_type == Some(device_type) {
            return Ok(());
        }

        let keep_side = {
            let ctx = self.context();
            if !ctx.is_type_selectable(device_type) {
                tracing::warn!(?device_type, "device type selection rejected");
                return Err(SelectionError::TypeUnavailable(device_type).into());
            }
            device_type.position_kind().is_none()
                && self
                    .draft
                    .side
                    .is_some_and(|s| ctx.admits(device_type, None, s))
        };

        self.draft.device_type = Some(device_type);
        self.draft.position = None;
        if !keep_side {
            self.draft.side = None;
        }
        self.draft.prune();

        tracing::debug!(?device_type, side = ?self.draft.side, "device type set");
        Ok(())
    }

    pub fn set_finger_position(
        &mut self,
        position: Option<FingerPosition>,
    ) -> Result<(), EditorError> {
        self.set_position(DeviceType::Finger, position.map(Position::Finger))
    }

    pub fn set_toe_position(&mut self, position: Option<ToePosition>) -> Result<(), EditorError> {
        self.set_position(DeviceType::Toe, position.map(Position::Toe))
    }

    fn set_position(
        &mut self,
        expected: DeviceType,
        position: Option<Position>,
    ) -> Result<(), EditorError> {
        self.ensure_editing()?;
        let device_type = self.draft.device_type;
        if device_type != Some(expected) {
            let Some(position) = position else {
                return Ok(());
            };
            return Err(SelectionError::PositionMismatch {
                device_type,
                position,
            }
            .into());
        }

        let Some(position) = position else {
            self.draft.position = None;
            self.draft.side = None;
            tracing::debug!(?expected, "position cleared");
            return Ok(());
        };

        let sides = self.context().sides_for(expected, Some(position));
        if sides.is_empty() {
            tracing::warn!(?position, "position selection rejected");
            return Err(SelectionError::PositionUnavailable(position).into());
        }

        let side = match self.draft.side {
            Some(s) if sides.contains(&s) => Some(s),
            _ => sides.first().copied(),
        };

        self.draft.position = Some(position);
        self.draft.side = side;
        tracing::debug!(?position, ?side, "position set");
        Ok(())
    }

    pub fn set_side(&mut self, side: Side) -> Result<(), EditorError> {
        self.ensure_editing()?;
        let Some(device_type) = self.draft.device_type else {
            return Err(SelectionError::TypeUnset.into());
        };
        if device_type.position_kind().is_some() && self.draft.position.is_none() {
            return Err(SelectionError::PositionUnset.into());
        }

        if !self
            .context()
            .admits(device_type, self.draft.position, side)
        {
            tracing::warn!(?device_type, ?side, "side selection rejected");
            return Err(SelectionError::SideUnavailable {
                side,
                slot: SlotKey::new(device_type, self.draft.position).label(),
            }
            .into());
        }

        self.draft.side = Some(side);
        tracing::debug!(?side, "side set");
        Ok(())
    }

    /// Toggle the active flag.
    ///
    /// Activating runs conflict detection against the roster. On conflict
    /// the draft stays inactive and unchanged, and the conflict is returned.
    /// No other record is ever deactivated.
    pub fn set_active(&mut self, active: bool) -> Result<(), EditorError> {
        self.ensure_editing()?;
        if self.draft.active == active {
            return Ok(());
        }

        if active {
            if let Some(conflict) = self.draft_conflict() {
                tracing::warn!(
                    conflicting_id = ?conflict.conflicting_id,
                    side = ?conflict.requested_side,
                    "activation vetoed: slot occupied"
                );
                return Err(conflict.into());
            }
            self.draft.active = true;
            self.draft.details.clear_deactivation();
            self.deactivated = false;
        } else {
            self.draft.active = false;
            self.draft.details.clear_deactivation();
            self.deactivated = true;
        }

        tracing::debug!(active, "active flag set");
        Ok(())
    }

    fn draft_conflict(&self) -> Option<SlotConflict> {
        let device_type = self.draft.device_type?;
        let side = self.draft.side?;
        self.context()
            .conflict_for(device_type, self.draft.position, side)
    }

    /// Edit fields that do not take part in slot allocation.
    pub fn update_details(
        &mut self,
        edit: impl FnOnce(&mut ProstheticDetails),
    ) -> Result<(), EditorError> {
        self.ensure_editing()?;
        edit(&mut self.draft.details);
        Ok(())
    }

    /// Install a newer roster snapshot. In edit mode the stored version of
    /// the record is refreshed from it.
    pub fn replace_roster(&mut self, roster: Roster) -> Result<(), EditorError> {
        if roster.patient_id != self.draft.patient_id {
            return Err(EditorError::PatientMismatch {
                expected: self.draft.patient_id,
                found: roster.patient_id,
            });
        }
        if let Some(original) = &mut self.original
            && let Some(stored) = original.id.and_then(|id| roster.get(id))
        {
            *original = stored.clone();
        }
        tracing::debug!(records = roster.records().len(), "roster replaced");
        self.roster = roster;
        Ok(())
    }

    /// Field errors of the draft as it would be submitted.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut draft = self.draft.clone();
        draft.prune();
        validate_draft(&draft, &self.limits, self.deactivated)
    }

    /// Prune, validate, re-check slot conflicts and persist the draft.
    ///
    /// On any error the draft stays editable. On success the persisted
    /// record is merged into the roster snapshot and returned.
    pub async fn submit(
        &mut self,
        sink: &dyn RecordSink,
    ) -> Result<ProstheticRecord, EditorError> {
        self.ensure_editing()?;

        self.draft.prune();
        let errors = validate_draft(&self.draft, &self.limits, self.deactivated);
        if !errors.is_empty() {
            tracing::debug!(errors = errors.len(), "submit blocked by field errors");
            return Err(EditorError::Validation(errors));
        }
        let Some(mut record) = self.draft.to_record() else {
            return Err(EditorError::Validation(validate_draft(
                &self.draft,
                &self.limits,
                self.deactivated,
            )));
        };

        if record.active {
            if let Some(conflict) = self.draft_conflict() {
                tracing::warn!(
                    conflicting_id = ?conflict.conflicting_id,
                    "submit vetoed: slot occupied"
                );
                return Err(conflict.into());
            }
            record.details.clear_deactivation();
        }

        let result = match self.original.as_ref().and_then(|r| r.id) {
            Some(id) => sink.update(id, record).await,
            None => sink.create(record).await,
        };
        let saved = result.inspect_err(|e| {
            tracing::warn!(error = %e, "persisting prosthetic record failed");
        })?;

        tracing::info!(
            id = ?saved.id,
            patient_id = saved.patient_id,
            device_type = ?saved.device_type,
            active = saved.active,
            "prosthetic record saved"
        );
        self.roster.upsert(saved.clone());
        self.status = EditorStatus::Submitted;
        Ok(saved)
    }
}
