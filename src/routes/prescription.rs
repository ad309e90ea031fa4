use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::page::Page;
use crate::models::prescription::{Prescription, PrescriptionPayload};
use crate::services::prescription as prescription_service;
use crate::services::prescription::AnalyticsSummary;
use crate::state::AppState;

fn default_size() -> i64 {
    10
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(default)]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

pub async fn list(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<Prescription>>, ApiError> {
    if params.page < 0 {
        return Err(ApiError::BadRequest("page must not be negative".into()));
    }
    if params.size < 1 {
        return Err(ApiError::BadRequest("size must be at least 1".into()));
    }

    let page = prescription_service::list(
        &state.pool,
        params.page,
        params.size,
        params.start_date,
        params.end_date,
    )
    .await?;

    Ok(Json(page))
}

pub async fn get_by_id(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Prescription>, ApiError> {
    prescription_service::get(&state.pool, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn create(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<PrescriptionPayload>,
) -> Result<Json<Prescription>, ApiError> {
    let created = prescription_service::create(&state.pool, payload).await?;
    Ok(Json(created))
}

pub async fn update(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<PrescriptionPayload>,
) -> Result<Json<Prescription>, ApiError> {
    prescription_service::update(&state.pool, id, payload)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn delete(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if prescription_service::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

pub async fn analytics(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<AnalyticsSummary>, ApiError> {
    let today = Utc::now().date_naive();
    let summary = prescription_service::analytics(&state.pool, today).await?;
    Ok(Json(summary))
}
