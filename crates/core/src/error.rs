//! Unified error type for pipeline operations.
//!
//! These errors never escape the public entry points: every one of them is
//! caught by the degradation ladder and converted into a fallback rendition
//! plus a diagnostic.

use courrier_layout::LayoutError;
use courrier_render_html::RenderError;
use courrier_render_template::TemplateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] LayoutError),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
    #[error("Template backend error: {0}")]
    Template(#[from] TemplateError),
}
