//! Axum route handlers for the Analysis API.

use std::time::Duration;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::catalog::Role;
use crate::analysis::pipeline::analyze_document;
use crate::analysis::report::Report;
use crate::errors::AppError;
use crate::models::analysis::AnalysisRow;
use crate::render::{render_error_page, render_report_page, render_upload_form};
use crate::state::AppState;
use crate::uploads::ResumeUpload;

const DEFAULT_RECENT_LIMIT: i64 = 20;
const MAX_RECENT_LIMIT: i64 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub id: Uuid,
    pub stored_filename: String,
    pub report: Report,
}

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub default_role: String,
    pub roles: Vec<Role>,
}

// ────────────────────────────────────────────────────────────────────────────
// Shared flow
// ────────────────────────────────────────────────────────────────────────────

/// Upload → bounded extraction → score → persist.
async fn run_analysis(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<AnalysisResponse, AppError> {
    let multipart = multipart.map_err(|rejection| {
        AppError::Validation(format!("Malformed upload: {}", rejection.body_text()))
    })?;
    let upload = ResumeUpload::from_multipart(multipart, state.config.max_upload_bytes).await?;
    let uploaded_at = Utc::now();
    let stored_filename = upload.stored_filename(uploaded_at);

    let timeout_secs = state.config.extraction_timeout_secs;
    let report = tokio::time::timeout(
        Duration::from_secs(timeout_secs),
        analyze_document(
            state.extractor.as_ref(),
            &state.catalog,
            upload.data,
            upload.role.as_deref(),
            &upload.original_filename,
        ),
    )
    .await
    .map_err(|_| AppError::ExtractionTimeout(timeout_secs))??;

    let row = state
        .store
        .save(&report.to_record(&stored_filename, uploaded_at))
        .await?;

    Ok(AnalysisResponse {
        id: row.id,
        stored_filename,
        report,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
///
/// Built-in upload form (used when no static frontend is configured).
pub async fn handle_upload_form(State(state): State<AppState>) -> Html<String> {
    Html(render_upload_form(&state.catalog))
}

/// POST /api/upload
///
/// Form endpoint: returns the rendered results page, or the failure page
/// with the matching status code.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    match run_analysis(&state, multipart).await {
        Ok(response) => Html(render_report_page(&response.report)).into_response(),
        Err(err) => {
            let (status, _, message) = err.parts();
            (status, Html(render_error_page(&message))).into_response()
        }
    }
}

/// POST /api/v1/analyses
///
/// JSON endpoint for the same pipeline.
pub async fn handle_create_analysis(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<AnalysisResponse>), AppError> {
    let response = run_analysis(&state, multipart).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/analyses?limit=
///
/// Most recent persisted analyses, newest first.
pub async fn handle_recent_analyses(
    State(state): State<AppState>,
    Query(params): Query<RecentQuery>,
) -> Result<Json<Vec<AnalysisRow>>, AppError> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_RECENT_LIMIT)
        .clamp(1, MAX_RECENT_LIMIT);
    let rows = state.store.recent(limit).await?;
    Ok(Json(rows))
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    Json(RolesResponse {
        default_role: state.catalog.default_role().id.clone(),
        roles: state.catalog.roles().to_vec(),
    })
}
