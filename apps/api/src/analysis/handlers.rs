//! Axum route handlers for the Analysis API.

use std::collections::BTreeSet;

use axum::{
    extract::{Multipart, Query, State},
    http::{header, HeaderName},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::analyzer::analyze;
use crate::analysis::report::{Alignment, AnalysisReport};
use crate::errors::AppError;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "job_description";
const ANALYSIS_ID_HEADER: HeaderName = HeaderName::from_static("x-analysis-id");

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    #[serde(default)]
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    #[serde(default)]
    pub format: ReportFormat,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub similarity_percentage: f64,
    /// Two-decimal rendering, e.g. "77.46%".
    pub similarity_display: String,
    pub alignment: Alignment,
    pub message: String,
    pub common_keywords: BTreeSet<String>,
    pub missing_keywords: BTreeSet<String>,
}

impl AnalysisResponse {
    fn new(analysis_id: Uuid, report: AnalysisReport) -> Self {
        Self {
            analysis_id,
            analyzed_at: Utc::now(),
            similarity_percentage: report.result.similarity_percentage,
            similarity_display: report.similarity_display,
            alignment: report.alignment,
            message: report.message,
            common_keywords: report.result.common_keywords,
            missing_keywords: report.result.missing_keywords,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart upload: `resume` (PDF file) and `job_description` (text).
/// Extraction failures are returned as 422 and never reach the analysis.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut resume: Option<Bytes> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            RESUME_FIELD => {
                ensure_pdf(field.file_name(), field.content_type())?;
                resume = Some(field.bytes().await?);
            }
            JOB_DESCRIPTION_FIELD => job_description = Some(field.text().await?),
            _ => debug!("Ignoring unknown multipart field '{name}'"),
        }
    }

    let job_description = require_job_description(job_description)?;
    let resume = resume.ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;

    let resume_text = state.extractor.extract(resume).await?;

    Ok(respond(&resume_text, &job_description, query.format))
}

/// POST /api/v1/analyze/text
///
/// Same analysis for callers that already hold the resume as plain text.
pub async fn handle_analyze_text(
    Query(query): Query<ReportQuery>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Response, AppError> {
    let job_description = require_job_description(Some(request.job_description))?;
    Ok(respond(&request.resume_text, &job_description, query.format))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn respond(resume_text: &str, job_description: &str, format: ReportFormat) -> Response {
    let analysis_id = Uuid::new_v4();
    let report = AnalysisReport::new(analyze(resume_text, job_description));

    info!(
        "Analysis {analysis_id}: {} ({:?}), {} common, {} missing",
        report.similarity_display,
        report.alignment,
        report.result.common_keywords.len(),
        report.result.missing_keywords.len()
    );

    match format {
        ReportFormat::Json => Json(AnalysisResponse::new(analysis_id, report)).into_response(),
        ReportFormat::Text => (
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
                (ANALYSIS_ID_HEADER, analysis_id.to_string()),
            ],
            report.render_text(),
        )
            .into_response(),
    }
}

fn require_job_description(job_description: Option<String>) -> Result<String, AppError> {
    match job_description {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        )),
    }
}

/// Rejects uploads that declare themselves as something other than a PDF.
/// Undeclared uploads pass through; the extractor checks the file header.
fn ensure_pdf(file_name: Option<&str>, content_type: Option<&str>) -> Result<(), AppError> {
    let by_name = file_name.map(|n| n.to_ascii_lowercase().ends_with(".pdf"));
    let by_type = content_type.map(|t| t.eq_ignore_ascii_case("application/pdf"));

    match (by_name, by_type) {
        (Some(false), Some(false)) | (Some(false), None) | (None, Some(false)) => Err(
            AppError::Validation("resume must be a PDF file".to_string()),
        ),
        _ => Ok(()),
    }
}
