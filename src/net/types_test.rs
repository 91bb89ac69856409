use super::*;

#[test]
fn user_deserializes_from_whoami_body() {
    let user: User = serde_json::from_str(
        r#"{"id":"7c9e6679-7425-40de-944b-e07fc1f90ae7","name":"Ana","email":"ana@example.com"}"#,
    )
    .unwrap();
    assert_eq!(user.name, "Ana");
    assert_eq!(user.email, "ana@example.com");
}

#[test]
fn auth_ack_tolerates_missing_fields() {
    let ack: AuthAck = serde_json::from_str("{}").unwrap();
    assert_eq!(ack.message, "");
    assert_eq!(ack.user_id, None);
}

#[test]
fn health_data_accepts_blood_pressure_shape() {
    let sample: HealthData = serde_json::from_str(
        r#"{
            "id": "a1",
            "name": "Blood pressure",
            "unit": "mmHg",
            "value_systolic": 128.0,
            "value_diastolic": 82.0,
            "normal_range": "90/60 - 120/80 mmHg",
            "date_recorded": "03-05-2025"
        }"#,
    )
    .unwrap();
    assert_eq!(sample.value, None);
    assert_eq!(sample.value_systolic, Some(128.0));
    assert_eq!(sample.value_diastolic, Some(82.0));
}

#[test]
fn lab_result_accepts_non_numeric_value() {
    let result: LabResult = serde_json::from_str(
        r#"{
            "id": "b2",
            "name": "COVID-19 antigen",
            "value": "negative",
            "is_numeric": false,
            "date_collection": "12-04-2025"
        }"#,
    )
    .unwrap();
    assert!(!result.is_numeric);
    assert_eq!(result.reference_range, None);
}

#[test]
fn dashboard_summary_defaults_missing_categories() {
    // The backend omits a category when the user has no records of it.
    let summary: DashboardSummary =
        serde_json::from_str(r#"{"id":"u1","name":"Ana","vaccines":[]}"#).unwrap();
    assert!(summary.vaccines.is_empty());
    assert!(summary.medications.is_empty());
    assert!(summary.labresults.is_empty());
}

#[test]
fn dashboard_summary_ignores_unknown_fields() {
    // Older backends include categories this client does not render.
    let summary: DashboardSummary = serde_json::from_str(
        r#"{"id":"u1","name":"Ana","medicalhistory":[{"id":"m1"}]}"#,
    )
    .unwrap();
    assert_eq!(summary.name, "Ana");
}

#[test]
fn shared_records_default_is_empty() {
    let shared = SharedRecords::default();
    assert!(shared.vaccines.is_empty());
    assert!(shared.vitals.is_empty());
}
