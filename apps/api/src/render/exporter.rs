//! Document exporters — pluggable, trait-based backends that turn a
//! [`TailoredDocument`] into downloadable bytes.
//!
//! Default: `PlainTextExporter` (pure-Rust, deterministic, fully testable).
//! `AppState` holds an `Arc<dyn DocumentExporter>`, swapped at startup.

use async_trait::async_trait;

use crate::render::document::TailoredDocument;

/// An exported document ready to be streamed to the client.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedDocument {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Exporter backend. Implement this to add a format without touching the handler.
///
/// Errors are reported to the user as a single generic failure notice.
#[async_trait]
pub trait DocumentExporter: Send + Sync {
    /// Fixed file extension for this backend, without the dot.
    fn extension(&self) -> &'static str;

    fn content_type(&self) -> &'static str;

    async fn render(&self, document: &TailoredDocument) -> anyhow::Result<Vec<u8>>;

    async fn export(&self, document: &TailoredDocument) -> anyhow::Result<ExportedDocument> {
        let bytes = self.render(document).await?;
        Ok(ExportedDocument {
            filename: document.filename(self.extension()),
            content_type: self.content_type(),
            bytes,
        })
    }
}

/// Single-column plain-text layout: name, headline, then SUMMARY / SKILLS /
/// PROJECTS / EDUCATION sections.
pub struct PlainTextExporter;

#[async_trait]
impl DocumentExporter for PlainTextExporter {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    async fn render(&self, document: &TailoredDocument) -> anyhow::Result<Vec<u8>> {
        Ok(render_text(document).into_bytes())
    }
}

/// Plain-text rendering shared by the text exporter and previews.
pub fn render_text(document: &TailoredDocument) -> String {
    let content = &document.content;
    let mut out = String::new();

    out.push_str(&document.candidate_name);
    out.push('\n');
    out.push_str(&document.headline);
    out.push_str("\n\n");

    out.push_str("SUMMARY\n");
    out.push_str(&content.summary);
    out.push_str("\n\n");

    out.push_str("SKILLS\n");
    out.push_str(&content.skills.join(" • "));
    out.push_str("\n\n");

    out.push_str("PROJECTS / EXPERIENCE\n");
    for bullet in &content.bullets {
        out.push_str("• ");
        out.push_str(bullet);
        out.push('\n');
    }
    out.push('\n');

    out.push_str("EDUCATION\n");
    out.push_str(&document.education);
    out.push('\n');

    out
}
