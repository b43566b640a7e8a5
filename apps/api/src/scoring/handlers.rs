//! Axum route handlers for the ATS API.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{is_allowed_file, ALLOWED_EXTENSIONS};
use crate::models::{Candidate, JobPosting};
use crate::scoring::batch::{rescore_all, summarize, RescoreItem, RescoreResult, RescoreSummary};
use crate::scoring::{BreakdownView, ScoreBreakdown};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub application: Candidate,
    pub job: JobPosting,
    /// Overrides `application.resume_text` when present.
    #[serde(default)]
    pub resume_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RescoreRequest {
    pub job: JobPosting,
    pub applications: Vec<RescoreItem>,
}

#[derive(Debug, Serialize)]
pub struct RescoreResponse {
    pub job_title: String,
    pub rescored: usize,
    pub rescored_at: DateTime<Utc>,
    pub results: Vec<RescoreResult>,
    pub summary: RescoreSummary,
}

#[derive(Debug, Serialize)]
pub struct ScoreUploadResponse {
    pub resume_text: String,
    pub scores: ScoreBreakdown,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/score
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreBreakdown>, AppError> {
    let scorer = Arc::clone(&state.scorer);
    let scores = run_blocking("score", move || {
        scorer.score(
            &request.application,
            &request.job,
            request.resume_text.as_deref(),
        )
    })
    .await?;
    Ok(Json(scores))
}

/// POST /api/v1/ats/breakdown
///
/// Same scoring as `/score`, shaped as one row per category plus
/// prioritized recommendations.
pub async fn handle_breakdown(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<BreakdownView>, AppError> {
    let scorer = Arc::clone(&state.scorer);
    let view = run_blocking("breakdown", move || {
        scorer.breakdown(
            &request.application,
            &request.job,
            request.resume_text.as_deref(),
        )
    })
    .await?;
    Ok(Json(view))
}

/// POST /api/v1/ats/rescore
///
/// Scores every application of one job and returns
/// them ranked, with summary statistics.
pub async fn handle_rescore(
    State(state): State<AppState>,
    Json(request): Json<RescoreRequest>,
) -> Result<Json<RescoreResponse>, AppError> {
    if request.applications.is_empty() {
        return Err(AppError::Validation("applications cannot be empty".to_string()));
    }

    let scorer = Arc::clone(&state.scorer);
    let RescoreRequest { job, applications } = request;
    let job_title = job.title.clone();

    let results =
        run_blocking("rescore", move || rescore_all(scorer.as_ref(), &job, &applications)).await?;

    let summary = summarize(&results);
    info!(
        job = %job_title,
        rescored = results.len(),
        average = summary.average_score,
        "Rescored applications"
    );

    Ok(Json(RescoreResponse {
        job_title,
        rescored: results.len(),
        rescored_at: Utc::now(),
        results,
        summary,
    }))
}

/// POST /api/v1/ats/score-upload
///
/// Multipart form with `application` and `job` JSON parts and a `resume`
/// file. The file's extracted text replaces any stored résumé text.
pub async fn handle_score_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScoreUploadResponse>, AppError> {
    let mut application: Option<Candidate> = None;
    let mut job: Option<JobPosting> = None;
    let mut resume: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "application" => {
                let raw = read_text(field).await?;
                application = Some(parse_part("application", &raw)?);
            }
            "job" => {
                let raw = read_text(field).await?;
                job = Some(parse_part("job", &raw)?);
            }
            "resume" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                if !is_allowed_file(&file_name) {
                    return Err(AppError::Validation(format!(
                        "Unsupported file type '{file_name}'. Allowed: {}",
                        ALLOWED_EXTENSIONS.join(", ")
                    )));
                }
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read resume: {e}")))?;
                resume = Some((file_name, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let application = application
        .ok_or_else(|| AppError::Validation("application part is required".to_string()))?;
    let job = job.ok_or_else(|| AppError::Validation("job part is required".to_string()))?;
    let (file_name, bytes) =
        resume.ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;

    let resume_text = state.extractor.extract_text(&file_name, bytes).await;
    let scorer = Arc::clone(&state.scorer);
    let (resume_text, scores) = run_blocking("score-upload", move || {
        let scores = scorer.score(&application, &job, Some(&resume_text));
        (resume_text, scores)
    })
    .await?;

    Ok(Json(ScoreUploadResponse {
        resume_text,
        scores,
    }))
}

/// Runs CPU-bound scoring on the blocking pool so the async workers stay free.
async fn run_blocking<T, F>(task: &'static str, f: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in {task}: {e}")))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read form field: {e}")))
}

fn parse_part<T: DeserializeOwned>(name: &str, raw: &str) -> Result<T, AppError> {
    serde_json::from_str(raw).map_err(|e| AppError::Validation(format!("Invalid {name} JSON: {e}")))
}
