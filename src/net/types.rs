//! Wire-schema DTOs for the backend API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's response models so serde needs no rename
//! maps. Dates stay in the backend's `dd-MM-yyyy` wire format as strings;
//! `util::dates` parses them where ordering matters.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by the `/me` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
}

/// Acknowledgement body returned by the login and register endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthAck {
    /// Human-readable outcome message.
    #[serde(default)]
    pub message: String,
    /// Identifier of the affected account, when the backend includes it.
    #[serde(default)]
    pub user_id: Option<String>,
}

/// A recorded vaccination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vaccine {
    /// Unique record identifier (UUID string).
    pub id: String,
    /// Vaccine name.
    pub name: String,
    /// Administering provider or clinic.
    pub provider: String,
    /// Administration date in `dd-MM-yyyy` wire format.
    pub date_received: String,
    /// Whether a certificate file is attached to this record.
    #[serde(default)]
    pub certificate: Option<bool>,
}

/// A prescribed medication.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    /// Unique record identifier (UUID string).
    pub id: String,
    /// Medication name.
    pub name: String,
    /// Dose per administration (free text, e.g. `"500 mg"`).
    pub dosage: String,
    /// Administration frequency (free text, e.g. `"twice daily"`).
    pub frequency: String,
    /// Preferred time of day, if prescribed.
    #[serde(default)]
    pub time_of_day: Option<String>,
    /// Length of the course in days, if bounded.
    #[serde(default)]
    pub duration_days: Option<i64>,
    /// Administration route name (e.g. `"oral"`).
    pub route: String,
    /// Medication form name (e.g. `"tablet"`).
    pub form: String,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Prescription date in `dd-MM-yyyy` wire format.
    pub date_prescribed: String,
}

/// A diagnosed allergy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allergy {
    /// Unique record identifier (UUID string).
    pub id: String,
    /// Severity name (e.g. `"mild"`, `"severe"`).
    pub severity: String,
    /// Allergen names.
    pub allergens: Vec<String>,
    /// Reaction names.
    pub reactions: Vec<String>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Diagnosis date in `dd-MM-yyyy` wire format.
    pub date_diagnosed: String,
}

/// One vital-sign sample (weight, blood pressure, heart rate, ...).
///
/// Compound vitals such as blood pressure carry the systolic/diastolic pair
/// and leave `value` empty; simple vitals do the opposite.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthData {
    /// Unique record identifier (UUID string).
    pub id: String,
    /// Vital name (e.g. `"Weight"`, `"Blood pressure"`).
    pub name: String,
    /// Measurement unit (e.g. `"kg"`, `"mmHg"`).
    pub unit: String,
    /// Scalar measurement for simple vitals.
    #[serde(default)]
    pub value: Option<f64>,
    /// Systolic component for blood-pressure samples.
    #[serde(default)]
    pub value_systolic: Option<f64>,
    /// Diastolic component for blood-pressure samples.
    #[serde(default)]
    pub value_diastolic: Option<f64>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Expected range for this vital (e.g. `"60 - 100 bpm"`), if defined.
    #[serde(default)]
    pub normal_range: Option<String>,
    /// Measurement date in `dd-MM-yyyy` wire format.
    pub date_recorded: String,
}

/// One lab test result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabResult {
    /// Unique record identifier (UUID string).
    pub id: String,
    /// Test name (e.g. `"Hemoglobin"`).
    pub name: String,
    /// Result value as reported by the lab; numeric only when `is_numeric`.
    pub value: String,
    /// Measurement unit, if reported.
    #[serde(default)]
    pub unit: Option<String>,
    /// Reference range as reported (e.g. `"12-16"`, `">60"`, `"<5.7"`).
    #[serde(default)]
    pub reference_range: Option<String>,
    /// Whether `value` parses as a number (vs. `"positive"`, `"normal"`, ...).
    pub is_numeric: bool,
    /// Sample collection date in `dd-MM-yyyy` wire format.
    pub date_collection: String,
}

/// Aggregate payload of the `/dashboard` endpoint: the newest records of
/// each category for the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name, for the greeting.
    pub name: String,
    #[serde(default)]
    pub vaccines: Vec<Vaccine>,
    #[serde(default)]
    pub medications: Vec<Medication>,
    #[serde(default)]
    pub allergies: Vec<Allergy>,
    #[serde(default)]
    pub vitals: Vec<HealthData>,
    #[serde(default)]
    pub labresults: Vec<LabResult>,
}

/// Records exposed by a share code, fetched without a session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedRecords {
    #[serde(default)]
    pub vaccines: Vec<Vaccine>,
    #[serde(default)]
    pub medications: Vec<Medication>,
    #[serde(default)]
    pub allergies: Vec<Allergy>,
    #[serde(default)]
    pub vitals: Vec<HealthData>,
    #[serde(default)]
    pub labresults: Vec<LabResult>,
}
