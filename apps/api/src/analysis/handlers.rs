//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::intensity::classify_intensity;
use crate::analysis::keywords::{extract_keywords, normalize_keywords};
use crate::analysis::pipeline::{
    analyze, generate, AnalysisReport, AnalyzeInput, GenerateInput, GenerationReport,
};
use crate::analysis::study_plan::{study_plan, StudyPlan};
use crate::errors::AppError;
use crate::render::handlers::export_allowed;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub report: AnalysisReport,
    pub badge: Option<&'static str>,
    pub export_allowed: bool,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    #[serde(flatten)]
    pub report: GenerationReport,
    pub badge: Option<&'static str>,
    pub export_allowed: bool,
    pub clipboard_text: String,
}

#[derive(Debug, Deserialize)]
pub struct StudyPlanRequest {
    pub jd_text: String,
    /// Keywords the caller is showing. Re-extracted from the JD when empty.
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtractResumeResponse {
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Keywords, initial score, intensity, and company for a resume/JD pair.
/// A blank JD returns an all-unset report rather than an error.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeInput>,
) -> Json<AnalyzeResponse> {
    let report = analyze(&request, &state.analysis_options());
    Json(AnalyzeResponse {
        badge: report.intensity.map(|level| level.badge()),
        export_allowed: export_allowed(report.intensity),
        report,
    })
}

/// POST /api/v1/generate
///
/// Tailored summary, skills, bullets, post score, and (for moderate roles) a study plan.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateInput>,
) -> Json<GenerateResponse> {
    let report = generate(&request, &state.analysis_options());
    Json(GenerateResponse {
        badge: report.intensity.map(|level| level.badge()),
        export_allowed: export_allowed(report.intensity),
        clipboard_text: report.content.clipboard_text(),
        report,
    })
}

/// POST /api/v1/study-plan
///
/// Study plan for a moderate role. Other intensities get 422.
pub async fn handle_study_plan(
    State(state): State<AppState>,
    Json(request): Json<StudyPlanRequest>,
) -> Result<Json<StudyPlan>, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    let level = classify_intensity(&request.jd_text);
    let keywords = match normalize_keywords(&request.keywords) {
        kws if kws.is_empty() => extract_keywords(&request.jd_text, state.config.keyword_limit),
        kws => kws,
    };

    study_plan(level, &keywords).map(Json).ok_or_else(|| {
        AppError::UnprocessableEntity(
            "Study plan available only for moderate roles.".to_string(),
        )
    })
}

/// POST /api/v1/resume/extract
///
/// Accepts a multipart `file` field holding a PDF resume and returns its text.
/// Parsing runs on a blocking thread.
pub async fn handle_extract_resume(
    mut multipart: Multipart,
) -> Result<Json<ExtractResumeResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        if bytes.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }

        let size = bytes.len();
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| {
                warn!("PDF extraction task aborted: {e}");
                AppError::Validation("Could not read PDF".to_string())
            })?
            .map_err(|e| AppError::Validation(format!("Could not read PDF: {e:?}")))?;

        info!("Extracted {} chars from {} byte resume PDF", text.len(), size);
        return Ok(Json(ExtractResumeResponse { text }));
    }

    Err(AppError::Validation("Missing 'file' field".to_string()))
}
