//! Tailored document — the plain-data snapshot an exporter renders.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::analysis::content::TailoredContent;
use crate::analysis::intensity::IntensityLevel;
use crate::analysis::pipeline::GenerationReport;

const DEFAULT_CANDIDATE: &str = "Candidate";
const DEFAULT_COMPANY: &str = "Company";
const EDUCATION_PLACEHOLDER: &str = "Degree — Your College — Year";

/// Resume first lines longer than this are prose, not a name.
const MAX_NAME_LEN: usize = 60;

static EDUCATION_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Education:\s*(.+)").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TailoredDocument {
    pub candidate_name: String,
    pub headline: String,
    pub company: String,
    pub intensity: Option<IntensityLevel>,
    pub content: TailoredContent,
    pub education: String,
}

impl TailoredDocument {
    /// Assembles a document from a generation report.
    ///
    /// `candidate_name` overrides the name read from the resume's first line.
    pub fn from_report(
        resume_text: &str,
        candidate_name: Option<&str>,
        report: &GenerationReport,
    ) -> Self {
        let candidate_name = candidate_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| candidate_from_resume(resume_text));

        let headline = if report.company.is_empty() {
            "Tailored Resume".to_string()
        } else {
            format!("{} — Tailored Resume", report.company)
        };

        TailoredDocument {
            candidate_name,
            headline,
            company: report.company.clone(),
            intensity: report.intensity,
            content: report.content.clone(),
            education: education_line(resume_text),
        }
    }

    /// File name for an export with the given extension.
    pub fn filename(&self, extension: &str) -> String {
        export_filename(&self.candidate_name, &self.company, extension)
    }
}

/// First non-empty resume line when it reads like a name.
pub fn candidate_from_resume(resume_text: &str) -> String {
    resume_text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .filter(|line| !line.contains(':') && line.chars().count() <= MAX_NAME_LEN)
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_CANDIDATE.to_string())
}

fn education_line(resume_text: &str) -> String {
    EDUCATION_LINE_RE
        .captures(resume_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| EDUCATION_PLACEHOLDER.to_string())
}

/// Replaces every character outside `[A-Za-z0-9_-]` with `_`.
pub fn sanitize_filename_part(part: &str) -> String {
    part.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// `<Candidate>_<Company>_resume.<ext>`, with "Company" standing in for a blank company.
pub fn export_filename(candidate_name: &str, company: &str, extension: &str) -> String {
    let company = if company.trim().is_empty() {
        DEFAULT_COMPANY
    } else {
        company.trim()
    };
    format!(
        "{}_{}_resume.{extension}",
        sanitize_filename_part(candidate_name.trim()),
        sanitize_filename_part(company)
    )
}
