//! Role domains inferred from the joined keyword list.
//!
//! Practice projects and study plans each test a fixed priority of domain
//! patterns against the space-joined keywords and take the first hit. The two
//! tier lists differ: practice projects check for web/programming roles in the
//! third slot, study plans check for DevOps.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Sql,
    UiUx,
    Web,
    DevOps,
    General,
}

static SQL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"sql|database|mysql|postgres|query|stored procedure").expect("valid regex")
});

// "design" only counts toward UI/UX when picking a practice project.
static UI_UX_PROJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ui|ux|figma|design|prototype|wireframe").expect("valid regex"));

static UI_UX_PLAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ui|ux|figma|prototype|wireframe").expect("valid regex"));

static WEB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"python|java|node|react|angular|vue|javascript|backend|frontend|web")
        .expect("valid regex")
});

static DEVOPS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"devops|docker|kubernetes|ci/cd|automation|scripting").expect("valid regex")
});

/// Domain used to pick a practice-project bundle: SQL → UI/UX → Web → General.
pub fn project_domain(keywords: &[String]) -> Domain {
    let joined = keywords.join(" ");
    if SQL_RE.is_match(&joined) {
        Domain::Sql
    } else if UI_UX_PROJECT_RE.is_match(&joined) {
        Domain::UiUx
    } else if WEB_RE.is_match(&joined) {
        Domain::Web
    } else {
        Domain::General
    }
}

/// Domain used to pick a study plan: SQL → UI/UX → DevOps → General.
pub fn study_domain(keywords: &[String]) -> Domain {
    let joined = keywords.join(" ");
    if SQL_RE.is_match(&joined) {
        Domain::Sql
    } else if UI_UX_PLAN_RE.is_match(&joined) {
        Domain::UiUx
    } else if DEVOPS_RE.is_match(&joined) {
        Domain::DevOps
    } else {
        Domain::General
    }
}
