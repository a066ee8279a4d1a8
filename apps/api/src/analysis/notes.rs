//! Suitability notes shown alongside an analysis or a generated resume.

use crate::analysis::intensity::IntensityLevel;
use crate::analysis::scoring::missing_keywords;

/// Cap on keywords listed in the missing-keyword note.
pub const MISSING_KEYWORD_LIMIT: usize = 8;

/// Note attached to a plain analysis.
pub fn analysis_note(level: IntensityLevel) -> &'static str {
    match level {
        IntensityLevel::High => {
            "This job looks heavy on programming; recommended to skip unless you have 2–3+ yrs experience."
        }
        IntensityLevel::Moderate => {
            "Moderate programming — possible with quick learning (see study plan)."
        }
        IntensityLevel::Low => "Light programming or non-coding role; safe to apply as a fresher.",
    }
}

/// Traffic-light verdict attached to a generated resume.
pub fn verdict_note(level: IntensityLevel) -> &'static str {
    match level {
        IntensityLevel::High => {
            "Red — heavy programming demand. The tool strongly suggests not applying."
        }
        IntensityLevel::Moderate => "Yellow — consider applying and prepare the short study plan.",
        IntensityLevel::Low => "Green — safe to apply.",
    }
}

/// "Missing / recommended keywords" note, or `None` when the resume covers them all.
pub fn missing_keywords_note(resume_text: &str, keywords: &[String]) -> Option<String> {
    let missing = missing_keywords(resume_text, keywords, MISSING_KEYWORD_LIMIT);
    if missing.is_empty() {
        None
    } else {
        Some(format!("Missing / recommended keywords: {}", missing.join(", ")))
    }
}
