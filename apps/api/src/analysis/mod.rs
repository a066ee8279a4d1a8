// Resume / job-description analysis.
// Implements: tokenizing, keyword ranking, match scoring, intensity classification,
// company extraction, tailored content, study plans.
// Everything below handlers is synchronous and pure; handlers are the only async layer.

pub mod company;
pub mod content;
pub mod domain;
pub mod handlers;
pub mod intensity;
pub mod keywords;
pub mod notes;
pub mod pipeline;
pub mod scoring;
pub mod study_plan;
pub mod tokenizer;
