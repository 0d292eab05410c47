use stride_cli::report::{self, Mode};
use stride_core::models::{
    DeviceType, FingerPosition, MaterialType, ProstheticRecord, Roster, Side,
};
use stride_editor::ValidationLimits;

const ROSTER: &str = r#"{
  "patientId": 3,
  "prosthetics": [
    { "id": 1, "patientId": 3, "type": "Transtibial", "side": "Left", "isActive": true, "material": "CarbonFiber" },
    { "id": 2, "patientId": 3, "type": "Transtibial", "side": "Right", "isActive": false, "material": "Titanium", "deactivationYear": 2021 },
    { "id": 3, "patientId": 3, "type": "Finger", "side": "Left", "fingerPosition": "Thumb", "isActive": true, "material": "PlasticComposite" }
  ]
}"#;

fn roster() -> Roster {
    Roster::from_json(ROSTER).unwrap()
}

fn new_record(device_type: DeviceType, side: Side) -> ProstheticRecord {
    let mut record = ProstheticRecord::new(3, device_type, side);
    record.details.material = Some(MaterialType::Aluminum);
    record
}

#[test]
fn availability_respects_exclusion() {
    let map = report::availability(&roster(), None);
    assert_eq!(
        map.for_type(DeviceType::Transtibial).unwrap().available_sides,
        vec![Side::Right]
    );

    let map = report::availability(&roster(), Some(1));
    assert_eq!(
        map.for_type(DeviceType::Transtibial).unwrap().available_sides.len(),
        3
    );
}

#[tokio::test]
async fn clean_new_record() {
    let draft = new_record(DeviceType::Transtibial, Side::Right);
    let report = report::check_draft(roster(), &draft, ValidationLimits::default())
        .await
        .unwrap();
    assert_eq!(report.mode, Mode::Create);
    assert!(report.is_clean(), "{report:?}");
}

#[tokio::test]
async fn new_record_on_taken_side_is_rejected() {
    let draft = new_record(DeviceType::Transtibial, Side::Bilateral);
    let report = report::check_draft(roster(), &draft, ValidationLimits::default())
        .await
        .unwrap();
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].step, "side");
    assert_eq!(report.available_sides, vec![Side::Right]);
    assert_eq!(
        report.field_errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>(),
        vec!["side"]
    );
}

#[tokio::test]
async fn reactivating_stored_record_reports_conflict() {
    let mut draft = roster().get(2).cloned().unwrap();
    draft.side = Side::Left;
    draft.active = true;

    let report = report::check_draft(roster(), &draft, ValidationLimits::default())
        .await
        .unwrap();
    assert_eq!(report.mode, Mode::Edit);
    // Left is held by record 1, so only its own stored side is offered back.
    assert_eq!(report.rejected[0].step, "side");

    let mut draft = roster().get(2).cloned().unwrap();
    draft.side = Side::Right;
    draft.active = true;
    let report = report::check_draft(roster(), &draft, ValidationLimits::default())
        .await
        .unwrap();
    assert!(report.is_clean(), "{report:?}");
}

#[tokio::test]
async fn thumb_conflict_is_reported() {
    let mut roster = roster();
    let mut retired = new_record(DeviceType::Finger, Side::Bilateral);
    retired.id = Some(4);
    retired.finger_position = Some(FingerPosition::Thumb);
    retired.active = false;
    retired.details.deactivation_year = Some(2019);
    roster.upsert(retired.clone());

    let mut draft = retired;
    draft.active = true;
    let report = report::check_draft(roster, &draft, ValidationLimits::default())
        .await
        .unwrap();
    let conflict = report.conflict.expect("thumb is taken on the left");
    assert_eq!(conflict.conflicting_id, Some(3));
    assert!(conflict.message.contains("Thumb"));
}

#[tokio::test]
async fn report_serializes_camel_case() {
    let draft = new_record(DeviceType::Hand, Side::Left);
    let report = report::check_draft(roster(), &draft, ValidationLimits::default())
        .await
        .unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["mode"], "create");
    assert_eq!(value["phase"]["phase"], "ready");
    assert!(value["availableSides"].is_array());
    assert!(value["fieldErrors"].as_array().unwrap().is_empty());
}
