//! Axum route handler for document export.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::analysis::intensity::IntensityLevel;
use crate::analysis::pipeline::{generate, GenerateInput};
use crate::errors::AppError;
use crate::render::document::TailoredDocument;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    #[serde(flatten)]
    pub input: GenerateInput,
    #[serde(default)]
    pub candidate_name: Option<String>,
}

/// True when the tailored document may be exported for this role.
pub fn export_allowed(intensity: Option<IntensityLevel>) -> bool {
    matches!(
        intensity,
        Some(IntensityLevel::Low | IntensityLevel::Moderate)
    )
}

/// POST /api/v1/export
///
/// Regenerates the tailored content and streams it through the configured exporter.
/// Refused for heavy-programming roles. Exporter failures surface as one generic
/// notice and leave no state behind.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    if request.input.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    let report = generate(&request.input, &state.analysis_options());
    if !export_allowed(report.intensity) {
        return Err(AppError::Forbidden(
            "Export is disabled for heavy-programming roles".to_string(),
        ));
    }

    let document = TailoredDocument::from_report(
        &request.input.resume_text,
        request.candidate_name.as_deref(),
        &report,
    );

    let exported = state.exporter.export(&document).await.map_err(|e| {
        warn!("Exporter failed for {}: {e:#}", document.candidate_name);
        AppError::Export(e.to_string())
    })?;

    info!(
        "Exported {} ({} bytes)",
        exported.filename,
        exported.bytes.len()
    );

    let disposition = format!("attachment; filename=\"{}\"", exported.filename);
    Ok((
        [
            (header::CONTENT_TYPE, exported.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        exported.bytes,
    )
        .into_response())
}
