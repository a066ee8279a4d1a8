use std::sync::Arc;

use crate::analysis::pipeline::AnalysisOptions;
use crate::config::Config;
use crate::render::exporter::DocumentExporter;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds configuration only. Resume and JD text live in each request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document exporter. Default: PlainTextExporter.
    pub exporter: Arc<dyn DocumentExporter>,
}

impl AppState {
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            keyword_limit: self.config.keyword_limit,
        }
    }
}
