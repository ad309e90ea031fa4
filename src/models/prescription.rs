use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A stored prescription record. `medicines` is an opaque JSON document; the
/// service persists and returns it without inspecting its structure.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: i64,
    pub prescription_date: NaiveDate,
    pub patient_name: String,
    pub patient_age: i64,
    pub patient_gender: String,
    pub diagnosis: String,
    pub medicines: Json<serde_json::Value>,
    pub next_visit_date: Option<NaiveDate>,
}

/// Full prescription payload for create and update. Updates overwrite every
/// field; a null or omitted `nextVisitDate` clears the stored value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionPayload {
    pub prescription_date: NaiveDate,
    pub patient_name: String,
    pub patient_age: i64,
    pub patient_gender: String,
    pub diagnosis: String,
    pub medicines: Json<serde_json::Value>,
    #[serde(default)]
    pub next_visit_date: Option<NaiveDate>,
}
