//! Offline evaluation of roster and draft snapshots.

use serde::Serialize;
use stride_core::models::{Position, ProstheticRecord, RecordId, Roster, Side};
use stride_editor::{
    DraftPhase, EditorController, EditorError, FieldError, MemoryStore, ValidationLimits,
};
use stride_slots::{AvailabilityMap, SlotConflict, recompute_availability};

pub fn availability(roster: &Roster, exclude_id: Option<RecordId>) -> AvailabilityMap {
    recompute_availability(roster.records(), exclude_id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Create,
    Edit,
}

/// A replay step the editor refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub step: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub mode: Mode,
    pub phase: DraftPhase,
    pub available_sides: Vec<Side>,
    pub rejected: Vec<Rejection>,
    pub conflict: Option<SlotConflict>,
    pub field_errors: Vec<FieldError>,
}

impl CheckReport {
    /// Whether the draft could be submitted as is.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && self.conflict.is_none() && self.field_errors.is_empty()
    }
}

/// Replay `draft` through an editor opened on `roster`, the way a user
/// filling in the form would, and collect everything the editor refuses.
///
/// The draft is edited in place of its stored version when its id is in the
/// roster, otherwise it is treated as a new record.
pub async fn check_draft(
    roster: Roster,
    draft: &ProstheticRecord,
    limits: ValidationLimits,
) -> Result<CheckReport, EditorError> {
    let patient_id = roster.patient_id;
    let existing = draft.id.filter(|id| roster.get(*id).is_some());
    let store = MemoryStore::with_roster(roster);
    let mut editor = EditorController::open(&store, patient_id, existing)
        .await?
        .with_limits(limits);

    let mode = if editor.is_edit_mode() {
        Mode::Edit
    } else {
        Mode::Create
    };
    let mut rejected = Vec::new();
    let mut conflict = None;

    let mut note = |step: &'static str, result: Result<(), EditorError>| match result {
        Ok(()) => {}
        Err(EditorError::SlotConflict(c)) => conflict = Some(c),
        Err(e) => rejected.push(Rejection {
            step,
            message: e.to_string(),
        }),
    };

    // A new record entered as inactive is exempt from slot checks.
    if mode == Mode::Create && !draft.active {
        note("isActive", editor.set_active(false));
    }
    note("type", editor.set_type(draft.device_type));
    match draft.position() {
        Some(Position::Finger(p)) => note("fingerPosition", editor.set_finger_position(Some(p))),
        Some(Position::Toe(p)) => note("toePosition", editor.set_toe_position(Some(p))),
        None => {}
    }
    if draft.side != Side::Unknown && editor.draft().side != Some(draft.side) {
        note("side", editor.set_side(draft.side));
    }
    if editor.draft().active != draft.active {
        note("isActive", editor.set_active(draft.active));
    }
    note(
        "details",
        editor.update_details(|d| *d = draft.details.clone()),
    );

    tracing::debug!(
        ?mode,
        rejected = rejected.len(),
        conflict = conflict.is_some(),
        "draft replayed"
    );

    Ok(CheckReport {
        mode,
        phase: editor.phase(),
        available_sides: editor.available_sides(),
        rejected,
        conflict,
        field_errors: editor.validate(),
    })
}
