use mend_core::models::assessment::{RiskEvaluation, RiskLevel};
use mend_core::models::pain_scale::PainScale;
use mend_core::models::record::PatientRecord;
use mend_core::models::report::{DailyReport, Mood, parse_yes_no};

#[test]
fn mood_parse_is_case_insensitive() {
    assert_eq!(Mood::parse("TIRED"), Some(Mood::Tired));
    assert_eq!(Mood::parse("Energetic"), Some(Mood::Energetic));
    assert_eq!(Mood::parse("neutral"), Some(Mood::Neutral));
}

#[test]
fn unrecognized_mood_has_no_signal() {
    let report = DailyReport::new(4000, 3.0, true).with_mood("bored");
    assert_eq!(report.mood_signal(), None);

    let empty = DailyReport::new(4000, 3.0, true).with_mood("");
    assert_eq!(empty.mood_signal(), None);
}

#[test]
fn risk_level_boundaries_are_lower_inclusive() {
    assert_eq!(RiskLevel::from_score(29.99), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(30.0), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_score(59.99), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_score(60.0), RiskLevel::High);
}

#[test]
fn evaluation_derives_recommendation_from_level() {
    let eval = RiskEvaluation::from_score(75.5);
    assert_eq!(eval.risk_level, RiskLevel::High);
    assert_eq!(
        eval.recommendation,
        "Monitor patient closely. Possible inflammation or fatigue."
    );
}

#[test]
fn risk_level_round_trips_through_str() {
    for level in [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High] {
        assert_eq!(level.to_string().parse::<RiskLevel>().unwrap(), level);
    }
    assert!("critical".parse::<RiskLevel>().is_err());
}

#[test]
fn pain_scale_bounds() {
    assert!(PainScale::ZeroToTen.contains(0.0));
    assert!(!PainScale::OneToTen.contains(0.0));
    assert!(PainScale::OneToTen.contains(10.0));
    assert!(!PainScale::ZeroToTen.contains(10.5));
    assert_eq!("1-10".parse::<PainScale>().unwrap(), PainScale::OneToTen);
    assert_eq!(PainScale::default(), PainScale::ZeroToTen);
}

#[test]
fn yes_no_parsing() {
    assert_eq!(parse_yes_no("Yes"), Some(true));
    assert_eq!(parse_yes_no(" no "), Some(false));
    assert_eq!(parse_yes_no("TRUE"), Some(true));
    assert_eq!(parse_yes_no("maybe"), None);
}

#[test]
fn record_accepts_form_strings_and_legacy_notes_field() {
    let json = r#"{
        "id": "ana_20250301T090000",
        "name": "Ana",
        "steps_walked": 2500,
        "pain_level": 6,
        "medicine_taken": "No",
        "patient_notes": "knee is stiff",
        "submitted_at": "2025-03-01T09:00:00"
    }"#;

    let record: PatientRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.report.steps, 2500);
    assert_eq!(record.report.pain_level, 6.0);
    assert!(!record.report.medicine_taken);
    assert_eq!(record.report.sleep_hours, None);
    assert_eq!(record.notes.as_deref(), Some("knee is stiff"));
    assert_eq!(record.doctor_notes, "");
    assert!(!record.has_prescription());
}

#[test]
fn record_serializes_canonical_field_names() {
    let record = PatientRecord {
        id: "ben_20250301T090000".to_string(),
        name: "Ben".to_string(),
        report: DailyReport::new(9000, 1.0, true).with_sleep_hours(8.0),
        notes: Some("fine".to_string()),
        doctor_notes: "Continue physio".to_string(),
        submitted_at: jiff::civil::date(2025, 3, 1).at(9, 0, 0, 0),
    };

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["steps_walked"], 9000);
    assert_eq!(value["medicine_taken"], true);
    assert_eq!(value["notes"], "fine");
    assert!(value.get("mood").is_none());

    let back: PatientRecord = serde_json::from_value(value).unwrap();
    assert_eq!(back, record);
    assert!(back.has_prescription());
}
