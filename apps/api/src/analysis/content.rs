//! Tailored content — summary, skill list, and bullets for the tailored resume.
//!
//! Bullets come from resume sentences that mention a JD keyword. When none do,
//! a practice-project bundle for the role's domain stands in, so a generation
//! request always produces something to show.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::domain::{project_domain, Domain};
use crate::analysis::tokenizer::normalize;

pub const MAX_BULLETS: usize = 12;
pub const MAX_BULLET_CHARS: usize = 180;
const ELLIPSIS: char = '…';

const SUMMARY_SKILL_LIMIT: usize = 4;
const SKILL_LIST_LIMIT: usize = 8;

/// Job-ad vocabulary that says nothing about the candidate's skills.
const GENERIC_TERMS: &[&str] = &[
    "apply",
    "company",
    "role",
    "candidate",
    "candidates",
    "job",
    "team",
    "work",
    "looking",
    "join",
    "hiring",
    "position",
    "opportunity",
    "required",
    "preferred",
];

static SKILLS_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Skills?:\s*(.+)").expect("valid regex"));

/// Resume content regenerated wholesale on every generation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TailoredContent {
    pub summary: String,
    pub skills: Vec<String>,
    pub bullets: Vec<String>,
}

impl TailoredContent {
    /// Plain text handed to the clipboard: bullets separated by a blank line.
    pub fn clipboard_text(&self) -> String {
        self.bullets.join("\n\n")
    }
}

/// A synthesized project for candidates whose resume has nothing matching the JD.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PracticeProject {
    pub title: &'static str,
    pub bullets: Vec<&'static str>,
}

/// Where the generated bullets came from.
#[derive(Debug, Clone, PartialEq)]
pub enum BulletSource {
    Resume,
    PracticeProject(PracticeProject),
}

/// Items from the first `Skills:` line of a resume, split on `,` `•` `|` `;`.
pub fn resume_skills(resume_text: &str) -> Vec<String> {
    SKILLS_LINE_RE
        .captures(resume_text)
        .and_then(|caps| caps.get(1))
        .map(|m| {
            m.as_str()
                .split([',', '•', '|', ';'])
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// JD keywords with generic job-ad vocabulary removed, capped at `limit`.
pub fn filtered_keywords(keywords: &[String], limit: usize) -> Vec<String> {
    keywords
        .iter()
        .filter(|kw| !GENERIC_TERMS.contains(&kw.as_str()))
        .take(limit)
        .cloned()
        .collect()
}

/// One-sentence professional summary.
///
/// Template choice depends only on which data is available: resume skills,
/// then JD keywords, then a generic sentence.
pub fn build_summary(resume_text: &str, keywords: &[String]) -> String {
    let skills: Vec<String> = resume_skills(resume_text)
        .into_iter()
        .take(SUMMARY_SKILL_LIMIT)
        .collect();
    if !skills.is_empty() {
        return format!(
            "Motivated candidate skilled in {}. Quick learner and able to adapt to role requirements.",
            skills.join(", ")
        );
    }

    let focus = filtered_keywords(keywords, SUMMARY_SKILL_LIMIT);
    if !focus.is_empty() {
        return format!(
            "Aspiring candidate with knowledge in {}. Quick learner and able to adapt to role requirements.",
            focus.join(", ")
        );
    }

    "Motivated and adaptable candidate, eager to learn quickly and contribute from day one."
        .to_string()
}

/// Skills for the tailored resume: the resume's own list, else the top JD keywords.
pub fn build_skills(resume_text: &str, keywords: &[String]) -> Vec<String> {
    let skills = resume_skills(resume_text);
    if skills.is_empty() {
        filtered_keywords(keywords, SKILL_LIST_LIMIT)
    } else {
        skills
    }
}

/// Splits text into trimmed sentences.
///
/// A boundary is a whitespace run that directly follows `.`, `!`, `?`, or a newline.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut iter = text.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        let at_boundary = c.is_whitespace() && matches!(prev, Some('.' | '!' | '?' | '\n'));
        if !at_boundary {
            prev = Some(c);
            continue;
        }

        sentences.push(&text[start..i]);
        let mut end = i + c.len_utf8();
        while let Some(&(j, w)) = iter.peek() {
            if !w.is_whitespace() {
                break;
            }
            end = j + w.len_utf8();
            iter.next();
        }
        start = end;
        prev = None;
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Truncates to [`MAX_BULLET_CHARS`] characters, ending with an ellipsis when cut.
pub fn truncate_bullet(text: &str) -> String {
    if text.chars().count() <= MAX_BULLET_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(MAX_BULLET_CHARS - 1).collect();
    cut.push(ELLIPSIS);
    cut
}

/// Resume sentences that mention at least one keyword (case-insensitive substring).
pub fn matching_sentences(resume_text: &str, keywords: &[String]) -> Vec<String> {
    split_sentences(resume_text)
        .into_iter()
        .filter(|s| {
            let lower = normalize(s);
            keywords.iter().any(|kw| lower.contains(kw.as_str()))
        })
        .collect()
}

/// Practice-project bundle for the role's domain.
pub fn practice_project(keywords: &[String]) -> PracticeProject {
    match project_domain(keywords) {
        Domain::Sql => PracticeProject {
            title: "SQL Practice Project",
            bullets: vec![
                "Built sample databases and practiced SELECT, JOIN, GROUP BY queries on public datasets.",
                "Implemented CRUD operations and simple stored procedures to manipulate data.",
                "Optimized queries using proper indexes and analyzed performance.",
            ],
        },
        Domain::UiUx => PracticeProject {
            title: "UI/UX Practice Project",
            bullets: vec![
                "Designed 2–3 app screens using Figma and created a clickable prototype.",
                "Applied basic UX principles: user flow, visual hierarchy, and accessibility.",
                "Recreated an existing app screen to improve usability.",
            ],
        },
        Domain::Web => PracticeProject {
            title: "Web Development Practice Project",
            bullets: vec![
                "Built a small web app using HTML/CSS/JavaScript (or React) to understand components.",
                "Implemented basic REST API calls using mock data.",
                "Deployed a simple static site and practiced debugging and console logs.",
            ],
        },
        Domain::DevOps | Domain::General => PracticeProject {
            title: "Practice Project",
            bullets: vec![
                "Completed role-relevant exercises and small tasks to build practical familiarity.",
                "Documented learning and results in a short project summary to discuss in interviews.",
            ],
        },
    }
}

/// Bullets for the tailored resume and where they came from.
///
/// Matching resume sentences win; otherwise the practice-project title followed
/// by its bullets. Either way at most [`MAX_BULLETS`] entries, each truncated.
pub fn build_bullets(resume_text: &str, keywords: &[String]) -> (Vec<String>, BulletSource) {
    let matched = matching_sentences(resume_text, keywords);
    if !matched.is_empty() {
        let bullets = matched
            .iter()
            .take(MAX_BULLETS)
            .map(|s| truncate_bullet(s))
            .collect();
        return (bullets, BulletSource::Resume);
    }

    let project = practice_project(keywords);
    let bullets = std::iter::once(project.title)
        .chain(project.bullets.iter().copied())
        .take(MAX_BULLETS)
        .map(truncate_bullet)
        .collect();
    (bullets, BulletSource::PracticeProject(project))
}

/// Builds summary, skills, and bullets in one pass.
pub fn build_content(resume_text: &str, keywords: &[String]) -> (TailoredContent, BulletSource) {
    let (bullets, source) = build_bullets(resume_text, keywords);
    let content = TailoredContent {
        summary: build_summary(resume_text, keywords),
        skills: build_skills(resume_text, keywords),
        bullets,
    };
    (content, source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    const RESUME: &str = "Jane Doe\n\
        Skills: Rust, PostgreSQL • Docker | Kafka; Terraform\n\
        Built a payments service in Rust. Migrated reporting to PostgreSQL! \
        Organized the office party?\n\
        Mentored two interns.";

    #[test]
    fn test_resume_skills_split_on_all_separators() {
        assert_eq!(
            resume_skills(RESUME),
            vec!["Rust", "PostgreSQL", "Docker", "Kafka", "Terraform"]
        );
    }

    #[test]
    fn test_resume_skills_singular_and_case_insensitive() {
        assert_eq!(resume_skills("SKILL: Excel"), vec!["Excel"]);
        assert!(resume_skills("No skill line here").is_empty());
    }

    #[test]
    fn test_summary_prefers_resume_skills() {
        let summary = build_summary(RESUME, &kws(&["kubernetes"]));
        assert!(summary.contains("Rust, PostgreSQL, Docker, Kafka"));
        assert!(!summary.contains("Terraform"), "summary uses at most 4 skills");
        assert!(!summary.contains("kubernetes"));
    }

    #[test]
    fn test_summary_falls_back_to_filtered_keywords() {
        let summary = build_summary("Jane Doe", &kws(&["apply", "react", "company", "node"]));
        assert!(summary.contains("react, node"));
        assert!(!summary.contains("apply"));
    }

    #[test]
    fn test_summary_generic_when_nothing_available() {
        let summary = build_summary("", &[]);
        assert!(!summary.is_empty());
        assert!(summary.contains("candidate"));
    }

    #[test]
    fn test_skills_fall_back_to_top_eight_keywords() {
        let keywords = kws(&[
            "role", "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
            "india",
        ]);
        let skills = build_skills("no skills line", &keywords);
        assert_eq!(skills.len(), 8);
        assert_eq!(skills[0], "alpha");
        assert!(!skills.contains(&"role".to_string()));
    }

    #[test]
    fn test_split_sentences_on_punctuation_and_blank_lines() {
        let sentences = split_sentences("One. Two!  Three?\nFour\n\nFive");
        assert_eq!(sentences, vec!["One.", "Two!", "Three?", "Four", "Five"]);
    }

    #[test]
    fn test_split_sentences_single_newline_without_punctuation_does_not_split() {
        assert_eq!(split_sentences("Jane Doe\nSkills: Rust"), vec!["Jane Doe\nSkills: Rust"]);
    }

    #[test]
    fn test_split_sentences_keeps_decimal_points() {
        assert_eq!(split_sentences("Cut p99 by 2.5x. Done."), vec!["Cut p99 by 2.5x.", "Done."]);
    }

    #[test]
    fn test_matching_sentences_case_insensitive() {
        let matched = matching_sentences(RESUME, &kws(&["postgresql"]));
        assert_eq!(matched.len(), 2);
        assert!(matched[1].starts_with("Migrated reporting"));
    }

    #[test]
    fn test_truncate_bullet_adds_ellipsis() {
        let long = "x".repeat(250);
        let cut = truncate_bullet(&long);
        assert_eq!(cut.chars().count(), MAX_BULLET_CHARS);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate_bullet("short"), "short");
    }

    #[test]
    fn test_bullets_from_resume_capped_at_twelve() {
        let resume: String = (0..20).map(|i| format!("Used rust in task {i}. ")).collect();
        let (bullets, source) = build_bullets(&resume, &kws(&["rust"]));
        assert_eq!(bullets.len(), MAX_BULLETS);
        assert_eq!(source, BulletSource::Resume);
    }

    #[test]
    fn test_no_match_falls_back_to_sql_project() {
        let (bullets, source) = build_bullets("Cashier at a grocery", &kws(&["mysql", "reports"]));
        assert_eq!(bullets[0], "SQL Practice Project");
        assert_eq!(bullets.len(), 4);
        assert!(matches!(source, BulletSource::PracticeProject(p) if p.title == "SQL Practice Project"));
    }

    #[test]
    fn test_web_project_for_programming_keywords() {
        let project = practice_project(&kws(&["python", "flask"]));
        assert_eq!(project.title, "Web Development Practice Project");
    }

    #[test]
    fn test_generic_project_bundle() {
        let (bullets, _) = build_bullets("Cashier", &kws(&["forklift", "shifts"]));
        assert_eq!(bullets[0], "Practice Project");
        assert_eq!(bullets.len(), 3);
    }

    #[test]
    fn test_empty_keywords_still_yield_bundle() {
        let (bullets, source) = build_bullets("Anything", &[]);
        assert!(!bullets.is_empty());
        assert!(matches!(source, BulletSource::PracticeProject(_)));
    }

    #[test]
    fn test_clipboard_text_joins_with_blank_line() {
        let content = TailoredContent {
            summary: String::new(),
            skills: vec![],
            bullets: kws(&["a", "b"]),
        };
        assert_eq!(content.clipboard_text(), "a\n\nb");
    }
}
