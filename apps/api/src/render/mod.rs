// Tailored document model and export.
// The analysis core never sees this module; the heavy-role export guard lives in handlers.

pub mod document;
pub mod exporter;
pub mod handlers;
