//! Analysis pipeline — the two caller-facing operations.
//!
//! Flow: JD text → keywords → {initial score, intensity, company} → notes
//!       (analyze), then → tailored content → post score → study plan (generate).
//!
//! Both operations are pure functions of their inputs and the fixed term
//! tables. Nothing is cached between calls; every call replaces all derived
//! state the caller holds.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::company::extract_company_name;
use crate::analysis::content::{build_content, BulletSource, TailoredContent};
use crate::analysis::intensity::{classify_signals, measure_signals, IntensityLevel, IntensitySignals};
use crate::analysis::keywords::{extract_keywords, normalize_keywords, KeywordList};
use crate::analysis::notes::{analysis_note, missing_keywords_note, verdict_note};
use crate::analysis::scoring::compute_score;
use crate::analysis::study_plan::{study_plan, StudyPlan};
use crate::analysis::tokenizer::normalize;

/// Keyword limit used by analyze/generate when the caller does not configure one.
pub const DEFAULT_KEYWORD_LIMIT: usize = 40;

/// Tunables that are not part of a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub keyword_limit: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            keyword_limit: DEFAULT_KEYWORD_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeInput {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub jd_text: String,
    /// Company name the user typed. Wins over extraction when non-blank.
    #[serde(default)]
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateInput {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub jd_text: String,
    /// Keywords the caller is currently showing, used for the missing-keyword note.
    #[serde(default)]
    pub current_keywords: Vec<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub keywords: KeywordList,
    pub initial_score: Option<u32>,
    pub intensity: Option<IntensityLevel>,
    pub signals: Option<IntensitySignals>,
    pub auto_company: String,
    pub company: String,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerationReport {
    pub keywords: KeywordList,
    pub initial_score: Option<u32>,
    pub post_score: Option<u32>,
    pub intensity: Option<IntensityLevel>,
    pub content: TailoredContent,
    /// Title of the practice project used when no resume sentence matched.
    pub practice_project: Option<String>,
    pub study_plan: Option<StudyPlan>,
    pub auto_company: String,
    pub company: String,
    pub notes: Vec<String>,
}

/// User-entered company when present, otherwise the extracted one.
pub fn resolve_company(user_company: Option<&str>, auto_company: &str) -> String {
    match user_company.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => auto_company.to_string(),
    }
}

/// Keyword list, match score, intensity, and company for a resume/JD pair.
///
/// A blank JD yields an empty report: no score, no intensity, no company
/// beyond what the user typed.
pub fn analyze(input: &AnalyzeInput, options: &AnalysisOptions) -> AnalysisReport {
    let user_company = input.company_name.as_deref();

    if input.jd_text.trim().is_empty() {
        debug!("Blank job description; resetting analysis");
        return AnalysisReport {
            company: resolve_company(user_company, ""),
            ..AnalysisReport::default()
        };
    }

    let keywords = extract_keywords(&input.jd_text, options.keyword_limit);
    let initial_score = compute_score(&input.resume_text, &keywords);
    let signals = measure_signals(&input.jd_text);
    let level = classify_signals(&signals, &normalize(&input.jd_text));
    let auto_company = extract_company_name(&input.jd_text);

    info!(
        keywords = keywords.len(),
        initial_score,
        intensity = ?level,
        "Analyzed job description"
    );

    AnalysisReport {
        keywords,
        initial_score: Some(initial_score),
        intensity: Some(level),
        signals: Some(signals),
        company: resolve_company(user_company, &auto_company),
        auto_company,
        notes: vec![analysis_note(level).to_string()],
    }
}

/// Tailored summary, skills, and bullets plus before/after scores.
///
/// The post score is measured over the generated bullets, not the raw resume.
pub fn generate(input: &GenerateInput, options: &AnalysisOptions) -> GenerationReport {
    let user_company = input.company_name.as_deref();

    if input.jd_text.trim().is_empty() {
        debug!("Blank job description; nothing to generate");
        return GenerationReport {
            company: resolve_company(user_company, ""),
            ..GenerationReport::default()
        };
    }

    let keywords = extract_keywords(&input.jd_text, options.keyword_limit);
    let initial_score = compute_score(&input.resume_text, &keywords);

    let (content, source) = build_content(&input.resume_text, &keywords);
    let post_score = compute_score(&content.bullets.join(" "), &keywords);

    let signals = measure_signals(&input.jd_text);
    let level = classify_signals(&signals, &normalize(&input.jd_text));
    let auto_company = extract_company_name(&input.jd_text);

    let mut notes = vec![verdict_note(level).to_string()];
    let current_keywords = normalize_keywords(&input.current_keywords);
    let note_keywords = if current_keywords.is_empty() {
        &keywords
    } else {
        &current_keywords
    };
    if let Some(note) = missing_keywords_note(&input.resume_text, note_keywords) {
        notes.push(note);
    }

    let practice_project = match source {
        BulletSource::Resume => None,
        BulletSource::PracticeProject(project) => Some(project.title.to_string()),
    };

    info!(
        bullets = content.bullets.len(),
        initial_score,
        post_score,
        intensity = ?level,
        practice_project = practice_project.as_deref().unwrap_or("-"),
        "Generated tailored content"
    );

    GenerationReport {
        study_plan: study_plan(level, &keywords),
        keywords,
        initial_score: Some(initial_score),
        post_score: Some(post_score),
        intensity: Some(level),
        content,
        practice_project,
        company: resolve_company(user_company, &auto_company),
        auto_company,
        notes,
    }
}
