use chrono::{Duration, NaiveDate};
use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::BTreeMap;

use crate::models::page::Page;
use crate::models::prescription::{Prescription, PrescriptionPayload};

/// Lists prescriptions ordered by id, optionally filtered by issue date.
/// Both bounds are inclusive; a single bound filters on/after or on/before.
pub async fn list(
    pool: &SqlitePool,
    page: i64,
    size: i64,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<Page<Prescription>, sqlx::Error> {
    let offset = page * size;

    let (total, content): (i64, Vec<Prescription>) = match (start_date, end_date) {
        (Some(start), Some(end)) => (
            sqlx::query_scalar(
                "SELECT COUNT(*) FROM prescriptions WHERE prescription_date BETWEEN ? AND ?",
            )
            .bind(start)
            .bind(end)
            .fetch_one(pool)
            .await?,
            sqlx::query_as(
                "SELECT * FROM prescriptions WHERE prescription_date BETWEEN ? AND ?
                 ORDER BY id LIMIT ? OFFSET ?",
            )
            .bind(start)
            .bind(end)
            .bind(size)
            .bind(offset)
            .fetch_all(pool)
            .await?,
        ),
        (Some(start), None) => (
            sqlx::query_scalar(
                "SELECT COUNT(*) FROM prescriptions WHERE prescription_date >= ?",
            )
            .bind(start)
            .fetch_one(pool)
            .await?,
            sqlx::query_as(
                "SELECT * FROM prescriptions WHERE prescription_date >= ?
                 ORDER BY id LIMIT ? OFFSET ?",
            )
            .bind(start)
            .bind(size)
            .bind(offset)
            .fetch_all(pool)
            .await?,
        ),
        (None, Some(end)) => (
            sqlx::query_scalar(
                "SELECT COUNT(*) FROM prescriptions WHERE prescription_date <= ?",
            )
            .bind(end)
            .fetch_one(pool)
            .await?,
            sqlx::query_as(
                "SELECT * FROM prescriptions WHERE prescription_date <= ?
                 ORDER BY id LIMIT ? OFFSET ?",
            )
            .bind(end)
            .bind(size)
            .bind(offset)
            .fetch_all(pool)
            .await?,
        ),
        (None, None) => (
            sqlx::query_scalar("SELECT COUNT(*) FROM prescriptions")
                .fetch_one(pool)
                .await?,
            sqlx::query_as("SELECT * FROM prescriptions ORDER BY id LIMIT ? OFFSET ?")
                .bind(size)
                .bind(offset)
                .fetch_all(pool)
                .await?,
        ),
    };

    Ok(Page::new(content, page, size, total))
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Prescription>, sqlx::Error> {
    sqlx::query_as::<_, Prescription>("SELECT * FROM prescriptions WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(
    pool: &SqlitePool,
    payload: PrescriptionPayload,
) -> Result<Prescription, sqlx::Error> {
    sqlx::query_as::<_, Prescription>(
        "INSERT INTO prescriptions
            (prescription_date, patient_name, patient_age, patient_gender,
             diagnosis, medicines, next_visit_date)
         VALUES (?, ?, ?, ?, ?, ?, ?)
         RETURNING *",
    )
    .bind(payload.prescription_date)
    .bind(payload.patient_name)
    .bind(payload.patient_age)
    .bind(payload.patient_gender)
    .bind(payload.diagnosis)
    .bind(payload.medicines)
    .bind(payload.next_visit_date)
    .fetch_one(pool)
    .await
}

/// Overwrites every mutable field of the record, or returns `None` when the
/// id does not exist.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    payload: PrescriptionPayload,
) -> Result<Option<Prescription>, sqlx::Error> {
    sqlx::query_as::<_, Prescription>(
        "UPDATE prescriptions
         SET prescription_date = ?, patient_name = ?, patient_age = ?,
             patient_gender = ?, diagnosis = ?, medicines = ?, next_visit_date = ?
         WHERE id = ?
         RETURNING *",
    )
    .bind(payload.prescription_date)
    .bind(payload.patient_name)
    .bind(payload.patient_age)
    .bind(payload.patient_gender)
    .bind(payload.diagnosis)
    .bind(payload.medicines)
    .bind(payload.next_visit_date)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM prescriptions WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_prescriptions: i64,
    pub today_prescriptions: i64,
    pub this_week_prescriptions: i64,
    pub daily_breakdown: BTreeMap<NaiveDate, i64>,
}

/// Dashboard counts: overall total plus a trailing seven-day window ending
/// at `today` (inclusive). Days without prescriptions are absent from the
/// breakdown.
pub async fn analytics(
    pool: &SqlitePool,
    today: NaiveDate,
) -> Result<AnalyticsSummary, sqlx::Error> {
    let week_start = today - Duration::days(6);

    let total_prescriptions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM prescriptions")
        .fetch_one(pool)
        .await?;

    let today_prescriptions: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM prescriptions WHERE prescription_date = ?")
            .bind(today)
            .fetch_one(pool)
            .await?;

    let this_week_prescriptions: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM prescriptions WHERE prescription_date BETWEEN ? AND ?",
    )
    .bind(week_start)
    .bind(today)
    .fetch_one(pool)
    .await?;

    let rows: Vec<(NaiveDate, i64)> = sqlx::query_as(
        "SELECT prescription_date, COUNT(*) FROM prescriptions
         WHERE prescription_date BETWEEN ? AND ?
         GROUP BY prescription_date",
    )
    .bind(week_start)
    .bind(today)
    .fetch_all(pool)
    .await?;

    Ok(AnalyticsSummary {
        total_prescriptions,
        today_prescriptions,
        this_week_prescriptions,
        daily_breakdown: rows.into_iter().collect(),
    })
}
