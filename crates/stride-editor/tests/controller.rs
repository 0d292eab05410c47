use stride_core::models::{
    DeviceType, FingerPosition, FootType, KneeType, MaterialType, Position, Side, ToePosition,
};
use stride_editor::{DraftPhase, EditorController, EditorError, SelectionError};

mod common;
use common::{PATIENT, finger, record, roster};

#[test]
fn phases_follow_type_and_side() {
    let mut editor = EditorController::create(roster(vec![]));
    assert_eq!(editor.phase(), DraftPhase::TypeUnset);
    assert!(!editor.is_edit_mode());

    editor.set_type(DeviceType::Transradial).unwrap();
    assert_eq!(
        editor.phase(),
        DraftPhase::SideUnset {
            device_type: DeviceType::Transradial
        }
    );

    editor.set_side(Side::Bilateral).unwrap();
    assert_eq!(
        editor.phase(),
        DraftPhase::Ready {
            device_type: DeviceType::Transradial,
            side: Side::Bilateral
        }
    );
}

#[test]
fn new_record_next_to_left_transtibial() {
    let mut editor =
        EditorController::create(roster(vec![record(1, DeviceType::Transtibial, Side::Left, true)]));
    editor.set_type(DeviceType::Transtibial).unwrap();
    assert_eq!(editor.available_sides(), vec![Side::Right]);

    let err = editor.set_side(Side::Left).unwrap_err();
    assert!(matches!(
        err,
        EditorError::Selection(SelectionError::SideUnavailable {
            side: Side::Left,
            ..
        })
    ));
    assert_eq!(editor.draft().side, None);

    editor.set_side(Side::Right).unwrap();
    assert_eq!(editor.draft().side, Some(Side::Right));
}

#[test]
fn fully_used_type_cannot_be_selected() {
    let mut editor =
        EditorController::create(roster(vec![record(1, DeviceType::Hand, Side::Bilateral, true)]));
    assert!(!editor.selectable_types().contains(&DeviceType::Hand));
    assert_eq!(
        editor.set_type(DeviceType::Hand).unwrap_err().to_string(),
        "Hand has no free slot for this patient"
    );
    assert_eq!(editor.draft().device_type, None);
}

#[test]
fn type_change_keeps_side_when_still_free() {
    let mut editor = EditorController::create(roster(vec![record(
        1,
        DeviceType::Transfemoral,
        Side::Left,
        true,
    )]));
    editor.set_type(DeviceType::Transtibial).unwrap();
    editor.set_side(Side::Left).unwrap();

    editor.set_type(DeviceType::Syme).unwrap();
    assert_eq!(editor.draft().side, Some(Side::Left));

    // Left is taken for Transfemoral, so the side is dropped.
    editor.set_type(DeviceType::Transfemoral).unwrap();
    assert_eq!(editor.draft().side, None);
}

#[test]
fn type_change_prunes_irrelevant_fields() {
    let mut editor = EditorController::create(roster(vec![]));
    editor.set_type(DeviceType::Transfemoral).unwrap();
    editor
        .update_details(|d| {
            d.attributes.knee_type = Some(KneeType::Other);
            d.attributes.other_knee_type = Some("custom".into());
            d.attributes.foot_type = Some(FootType::Multiaxial);
            d.attributes.range_of_motion_min = Some(0.0);
        })
        .unwrap();

    editor.set_type(DeviceType::Transtibial).unwrap();
    let attrs = &editor.draft().details.attributes;
    assert_eq!(attrs.knee_type, None);
    assert_eq!(attrs.other_knee_type, None);
    assert_eq!(attrs.foot_type, Some(FootType::Multiaxial));
    assert_eq!(attrs.range_of_motion_min, Some(0.0));

    editor.set_type(DeviceType::Toe).unwrap();
    let attrs = &editor.draft().details.attributes;
    assert_eq!(attrs.foot_type, None);
    assert_eq!(attrs.range_of_motion_min, None);
}

#[test]
fn moving_into_digit_type_clears_side_and_position() {
    let mut editor = EditorController::create(roster(vec![]));
    editor.set_type(DeviceType::Finger).unwrap();
    editor.set_finger_position(Some(FingerPosition::Ring)).unwrap();
    assert_eq!(editor.draft().side, Some(Side::Left));

    editor.set_type(DeviceType::Toe).unwrap();
    assert_eq!(editor.draft().position, None);
    assert_eq!(editor.draft().side, None);
    assert!(editor.available_sides().is_empty());
    assert!(matches!(
        editor.set_side(Side::Left),
        Err(EditorError::Selection(SelectionError::PositionUnset))
    ));
}

#[test]
fn thumb_position_auto_selects_free_side() {
    let mut editor =
        EditorController::create(roster(vec![finger(1, FingerPosition::Thumb, Side::Left)]));
    editor.set_type(DeviceType::Finger).unwrap();
    editor.set_finger_position(Some(FingerPosition::Thumb)).unwrap();
    assert_eq!(editor.available_sides(), vec![Side::Right]);
    assert_eq!(editor.draft().side, Some(Side::Right));

    // Right is still free on the index finger, so it is kept.
    editor.set_finger_position(Some(FingerPosition::Index)).unwrap();
    assert_eq!(
        editor.available_sides(),
        vec![Side::Left, Side::Right, Side::Bilateral]
    );
    assert_eq!(editor.draft().side, Some(Side::Right));

    editor.set_finger_position(None).unwrap();
    assert_eq!(editor.draft().position, None);
    assert_eq!(editor.draft().side, None);
}

#[test]
fn occupied_position_is_rejected() {
    let mut editor =
        EditorController::create(roster(vec![finger(1, FingerPosition::Pinky, Side::Bilateral)]));
    editor.set_type(DeviceType::Finger).unwrap();
    assert!(
        !editor
            .selectable_positions()
            .contains(&Position::Finger(FingerPosition::Pinky))
    );
    assert!(matches!(
        editor.set_finger_position(Some(FingerPosition::Pinky)),
        Err(EditorError::Selection(SelectionError::PositionUnavailable(_)))
    ));
}

#[test]
fn position_of_the_wrong_family_is_rejected() {
    let mut editor = EditorController::create(roster(vec![]));
    editor.set_type(DeviceType::Toe).unwrap();
    assert!(matches!(
        editor.set_finger_position(Some(FingerPosition::Thumb)),
        Err(EditorError::Selection(SelectionError::PositionMismatch { .. }))
    ));
    editor.set_toe_position(Some(ToePosition::BigToe)).unwrap();
    assert_eq!(editor.draft().position, Some(Position::Toe(ToePosition::BigToe)));
}

#[test]
fn edit_mode_is_not_blocked_by_its_own_slot() {
    let stored = record(1, DeviceType::Transtibial, Side::Left, true);
    let mut editor = EditorController::edit(stored.clone(), roster(vec![stored])).unwrap();
    assert!(editor.is_edit_mode());
    assert_eq!(
        editor.available_sides(),
        vec![Side::Left, Side::Right, Side::Bilateral]
    );
    editor.set_side(Side::Bilateral).unwrap();
    editor.set_side(Side::Left).unwrap();
}

#[test]
fn reactivation_into_occupied_slot_is_vetoed() {
    let mut retired = record(2, DeviceType::Hand, Side::Left, false);
    retired.details.deactivation_year = Some(2020);
    retired.details.manufacturer = Some("Ottobock".into());
    let rows = vec![record(1, DeviceType::Hand, Side::Left, true), retired.clone()];

    let mut editor = EditorController::edit(retired, roster(rows)).unwrap();
    let before = editor.draft().clone();

    let err = editor.set_active(true).unwrap_err();
    let EditorError::SlotConflict(conflict) = err else {
        panic!("expected a slot conflict, got {err:?}");
    };
    assert_eq!(conflict.conflicting_id, Some(1));
    assert_eq!(
        conflict.message,
        "Cannot activate this prosthetic because there is already an active Hand prosthetic on the Left side."
    );

    assert_eq!(editor.draft(), &before);
    assert!(editor.roster().get(1).is_some_and(|r| r.active));
}

#[test]
fn reactivation_into_free_slot_clears_deactivation() {
    let mut retired = record(2, DeviceType::Hand, Side::Right, false);
    retired.details.deactivation_year = Some(2020);
    let rows = vec![record(1, DeviceType::Hand, Side::Left, true), retired.clone()];

    let mut editor = EditorController::edit(retired, roster(rows)).unwrap();
    editor.set_active(true).unwrap();
    assert!(editor.draft().active);
    assert_eq!(editor.draft().details.deactivation_year, None);
}

#[test]
fn deactivation_requires_date_or_year() {
    let stored = record(1, DeviceType::Syme, Side::Right, true);
    let mut editor = EditorController::edit(stored.clone(), roster(vec![stored])).unwrap();
    assert!(editor.validate().is_empty());

    editor.set_active(false).unwrap();
    let errors = editor.validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "deactivationDate");

    editor
        .update_details(|d| d.deactivation_year = Some(2024))
        .unwrap();
    assert!(editor.validate().is_empty());
}

#[test]
fn new_inactive_draft_ignores_occupancy() {
    let mut editor =
        EditorController::create(roster(vec![record(1, DeviceType::Hand, Side::Bilateral, true)]));
    editor.set_active(false).unwrap();
    editor.set_type(DeviceType::Hand).unwrap();
    editor.set_side(Side::Left).unwrap();

    assert!(matches!(
        editor.set_active(true),
        Err(EditorError::SlotConflict(_))
    ));
    assert!(!editor.draft().active);
}

#[test]
fn newer_roster_is_used_by_later_transitions() {
    let mut editor = EditorController::create(roster(vec![]));
    editor.set_type(DeviceType::Transhumeral).unwrap();
    assert_eq!(editor.available_sides().len(), 3);

    editor
        .replace_roster(roster(vec![record(
            5,
            DeviceType::Transhumeral,
            Side::Right,
            true,
        )]))
        .unwrap();
    assert_eq!(editor.available_sides(), vec![Side::Left]);

    let other_patient = stride_core::models::Roster::empty(PATIENT + 1);
    assert!(matches!(
        editor.replace_roster(other_patient),
        Err(EditorError::PatientMismatch { .. })
    ));
}

#[test]
fn other_type_is_never_constrained() {
    let mut editor =
        EditorController::create(roster(vec![record(1, DeviceType::Other, Side::Bilateral, true)]));
    editor.set_type(DeviceType::Other).unwrap();
    editor.set_side(Side::Bilateral).unwrap();
    editor
        .update_details(|d| {
            d.other_type = Some("Osseointegrated implant".into());
            d.material = Some(MaterialType::Titanium);
        })
        .unwrap();
    assert!(editor.validate().is_empty());
}

#[test]
fn editing_requires_a_persisted_record() {
    let draft = stride_core::models::ProstheticRecord::new(PATIENT, DeviceType::Hand, Side::Left);
    assert!(matches!(
        EditorController::edit(draft, roster(vec![])),
        Err(EditorError::NotPersisted)
    ));
}
