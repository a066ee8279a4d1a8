//! Intensity classification — how programming-heavy a job description reads.
//!
//! Three fixed term tables are scanned with case-insensitive substring checks.
//! Each term counts at most once. The ordered rules in [`classify_signals`]
//! turn the three counts into a level; the first rule that matches wins.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::normalize;

/// Technical intensity of a role. Drives notes, study plans, and the export guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    Low,
    Moderate,
    High,
}

impl IntensityLevel {
    /// Traffic-light badge text shown next to the analysis.
    pub fn badge(&self) -> &'static str {
        match self {
            IntensityLevel::High => "RED — Heavy programming",
            IntensityLevel::Moderate => "YELLOW — Moderate",
            IntensityLevel::Low => "GREEN — Light",
        }
    }
}

/// Per-table hit counts for a job description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntensitySignals {
    pub heavy: usize,
    pub moderate: usize,
    pub light: usize,
}

pub const HEAVY_TERMS: &[&str] = &[
    "algorithm",
    "data structures",
    "system design",
    "distributed",
    "concurrency",
    "multithread",
    "profiling",
    "latency",
    "throughput",
    "advanced",
    "low-level",
    "c++",
    "rust",
    "compiler",
    "scalability",
    "grpc",
    "real-time",
    "deep learning",
    "research",
    "phd",
];

pub const MODERATE_TERMS: &[&str] = &[
    "api",
    "rest",
    "backend",
    "node",
    "java",
    "python",
    "django",
    "spring",
    "react",
    "angular",
    "vue",
    "sql",
    "database",
    "ci/cd",
    "docker",
    "devops",
    "automation",
    "scripting",
    "bash",
    "shell",
    "aws",
    "azure",
    "gcp",
];

pub const LIGHT_TERMS: &[&str] = &[
    "basic",
    "entry",
    "fresher",
    "intern",
    "support",
    "excel",
    "data entry",
    "documentation",
    "testing",
    "manual testing",
    "helpdesk",
    "no coding",
];

static DEVOPS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"devops|ci/cd|docker|kubernetes|automation|scripting").expect("valid regex")
});

fn count_terms(text: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|t| text.contains(*t)).count()
}

/// Counts heavy/moderate/light table hits in a job description.
pub fn measure_signals(jd_text: &str) -> IntensitySignals {
    let t = normalize(jd_text);
    IntensitySignals {
        heavy: count_terms(&t, HEAVY_TERMS),
        moderate: count_terms(&t, MODERATE_TERMS),
        light: count_terms(&t, LIGHT_TERMS),
    }
}

/// Applies the ordered decision rules to measured signals.
///
/// `normalized_jd` is only consulted by the DevOps sub-check of rule 2, which
/// resolves to the same level as its parent rule.
pub fn classify_signals(signals: &IntensitySignals, normalized_jd: &str) -> IntensityLevel {
    let IntensitySignals {
        heavy,
        moderate,
        light,
    } = *signals;

    if heavy >= 2 || moderate >= 5 {
        return IntensityLevel::High;
    }
    if moderate >= 2 || heavy == 1 {
        // DevOps-leaning roles without heavy terms stay moderate; so does everything else here.
        if heavy == 0 && DEVOPS_RE.is_match(normalized_jd) {
            return IntensityLevel::Moderate;
        }
        return IntensityLevel::Moderate;
    }
    if light >= 1 || (moderate == 0 && heavy == 0) {
        return IntensityLevel::Low;
    }
    IntensityLevel::Moderate
}

/// Classifies a job description. Pure and deterministic.
pub fn classify_intensity(jd_text: &str) -> IntensityLevel {
    let signals = measure_signals(jd_text);
    classify_signals(&signals, &normalize(jd_text))
}
