//! Short study plans for moderate-intensity roles.

use serde::Serialize;

use crate::analysis::domain::{study_domain, Domain};
use crate::analysis::intensity::IntensityLevel;

const PLAN_HEADING: &str = "Suggested focused topics to prepare quickly:";
const PLAN_TIP: &str = "Tip: spend 1–2 days on each bullet, create a small output \
    (repo, prototype, SQL file) to show during interviews.";

/// Ordered study topics for one role domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyPlan {
    pub domain: Domain,
    pub heading: &'static str,
    pub topics: Vec<&'static str>,
    pub tip: &'static str,
}

fn topics_for(domain: Domain) -> Vec<&'static str> {
    match domain {
        Domain::Sql => vec![
            "Learn SELECT, WHERE, ORDER BY",
            "Practice JOINs (INNER, LEFT) and GROUP BY",
            "Solve 10 SQL problems from online platforms",
            "Build a small sample DB and write CRUD queries",
        ],
        Domain::UiUx => vec![
            "Watch a short Figma intro (30–60 min) and follow along",
            "Create 2 screens and make a clickable prototype",
            "Learn basic UX principles: user flow, hierarchy",
            "Practice by recreating a simple app screen",
        ],
        Domain::DevOps => vec![
            "Learn Docker basics and run a container",
            "Understand CI/CD concepts and simple pipelines",
            "Practice basic shell scripting (bash)",
            "Deploy a simple app using a PaaS or static host",
        ],
        Domain::Web | Domain::General => vec![
            "Review the missing keywords listed in suggestions",
            "Prepare quick examples or small practice tasks to show in interviews",
        ],
    }
}

/// Study plan for a role, or `None` unless the role is moderate.
pub fn study_plan(intensity: IntensityLevel, keywords: &[String]) -> Option<StudyPlan> {
    if intensity != IntensityLevel::Moderate {
        return None;
    }
    let domain = study_domain(keywords);
    Some(StudyPlan {
        domain,
        heading: PLAN_HEADING,
        topics: topics_for(domain),
        tip: PLAN_TIP,
    })
}
