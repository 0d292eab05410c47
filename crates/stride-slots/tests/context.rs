use stride_core::models::{DeviceType, FingerPosition, Position, Side, ToePosition};
use stride_slots::AllocationContext;

mod common;
use common::{active, finger, inactive, toe};

const ALL_SIDES: [Side; 3] = [Side::Left, Side::Right, Side::Bilateral];

#[test]
fn new_transtibial_next_to_left_one() {
    let roster = vec![active(1, DeviceType::Transtibial, Side::Left)];
    let ctx = AllocationContext::new(&roster, None, true);
    assert!(ctx.is_type_selectable(DeviceType::Transtibial));
    assert_eq!(ctx.sides_for(DeviceType::Transtibial, None), vec![Side::Right]);
    assert!(!ctx.admits(DeviceType::Transtibial, None, Side::Bilateral));
}

#[test]
fn edited_record_keeps_its_own_side() {
    let roster = vec![active(1, DeviceType::Transtibial, Side::Left)];
    let ctx = AllocationContext::new(&roster, Some(&roster[0]), true);
    assert_eq!(ctx.sides_for(DeviceType::Transtibial, None), ALL_SIDES.to_vec());
    assert!(ctx.conflict_for(DeviceType::Transtibial, None, Side::Left).is_none());
}

#[test]
fn edited_record_keeps_its_side_among_others() {
    let roster = vec![
        finger(1, FingerPosition::Thumb, Side::Left),
        finger(2, FingerPosition::Thumb, Side::Right),
    ];
    let ctx = AllocationContext::new(&roster, Some(&roster[0]), true);
    let thumb = Some(Position::Finger(FingerPosition::Thumb));
    assert_eq!(ctx.sides_for(DeviceType::Finger, thumb), vec![Side::Left]);

    // The re-admission is scoped to the original's own key.
    let index = Some(Position::Finger(FingerPosition::Index));
    assert_eq!(ctx.sides_for(DeviceType::Finger, index), ALL_SIDES.to_vec());
}

#[test]
fn thumb_draft_and_index_draft() {
    let roster = vec![finger(1, FingerPosition::Thumb, Side::Left)];
    let ctx = AllocationContext::new(&roster, None, true);

    let thumb = Some(Position::Finger(FingerPosition::Thumb));
    let index = Some(Position::Finger(FingerPosition::Index));
    assert_eq!(ctx.sides_for(DeviceType::Finger, thumb), vec![Side::Right]);
    assert_eq!(ctx.sides_for(DeviceType::Finger, index), ALL_SIDES.to_vec());
}

#[test]
fn digit_without_position_offers_no_side() {
    let ctx = AllocationContext::new(&[], None, true);
    assert!(ctx.sides_for(DeviceType::Toe, None).is_empty());
    assert!(ctx.is_position_selectable(DeviceType::Toe, Position::Toe(ToePosition::BigToe)));
}

#[test]
fn occupied_position_is_not_selectable() {
    let roster = vec![toe(1, ToePosition::BigToe, Side::Bilateral)];
    let ctx = AllocationContext::new(&roster, None, true);
    assert!(!ctx.is_position_selectable(DeviceType::Toe, Position::Toe(ToePosition::BigToe)));
    assert!(ctx.is_position_selectable(DeviceType::Toe, Position::Toe(ToePosition::SecondToe)));
}

#[test]
fn fully_used_type_is_not_selectable() {
    let roster = vec![active(1, DeviceType::Hand, Side::Bilateral)];
    let ctx = AllocationContext::new(&roster, None, true);
    assert!(!ctx.is_type_selectable(DeviceType::Hand));
    assert!(ctx.is_type_selectable(DeviceType::Transradial));
    assert!(ctx.is_type_selectable(DeviceType::Other));
}

#[test]
fn edit_mode_keeps_its_own_type_selectable() {
    let roster = vec![
        active(1, DeviceType::Hand, Side::Left),
        active(2, DeviceType::Hand, Side::Right),
    ];
    let ctx = AllocationContext::new(&roster, Some(&roster[0]), true);
    assert!(ctx.is_type_selectable(DeviceType::Hand));
    assert_eq!(ctx.sides_for(DeviceType::Hand, None), vec![Side::Left]);
}

#[test]
fn new_inactive_draft_bypasses_constraints() {
    let roster = vec![active(1, DeviceType::Hand, Side::Bilateral)];
    let ctx = AllocationContext::new(&roster, None, false);
    assert!(ctx.is_bypassed());
    assert!(ctx.is_type_selectable(DeviceType::Hand));
    assert_eq!(ctx.sides_for(DeviceType::Hand, None), ALL_SIDES.to_vec());
}

#[test]
fn edited_inactive_record_is_not_bypassed() {
    let roster = vec![
        active(1, DeviceType::Hand, Side::Bilateral),
        inactive(2, DeviceType::Hand, Side::Left),
    ];
    let ctx = AllocationContext::new(&roster, Some(&roster[1]), false);
    assert!(!ctx.is_bypassed());
    // Only its own stored side is re-admitted.
    assert_eq!(ctx.sides_for(DeviceType::Hand, None), vec![Side::Left]);
    assert!(ctx.conflict_for(DeviceType::Hand, None, Side::Left).is_some());
}

#[test]
fn other_is_unconstrained() {
    let roster = vec![active(1, DeviceType::Other, Side::Bilateral)];
    let ctx = AllocationContext::new(&roster, None, true);
    assert_eq!(ctx.sides_for(DeviceType::Other, None), ALL_SIDES.to_vec());
    assert!(ctx.conflict_for(DeviceType::Other, None, Side::Left).is_none());
}
