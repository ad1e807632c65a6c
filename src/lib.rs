//! # courrier
//!
//! Newsletter block-to-email-table layout engine.
//!
//! Takes a free-form, absolutely-positioned canvas of content blocks (as
//! produced by a drag-and-drop newsletter builder) and deterministically
//! converts it into a nested-table HTML document that renders correctly in
//! hostile email clients: Gmail strips `<style>` blocks, Outlook desktop
//! needs VML/MSO conditionals, mobile clients need inline responsive hints.
//!
//! The engine is a pure, stateless transformation: no persistence, no
//! network, no shared state across calls. Transport, tracking-pixel URL
//! resolution and document storage belong to the surrounding service; the
//! output carries the literal [`TRACKING_PIXEL_TOKEN`] for the mail sender
//! to substitute.
//!
//! ## Entry points
//!
//! ```
//! use courrier::{Document, render_to_email_html};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let document: Document = serde_json::from_str(r#"{"subject": "Hello"}"#).unwrap();
//! let html = render_to_email_html(&document).await;
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! # });
//! ```
//!
//! Neither entry point can fail: internal errors degrade through a
//! templated tier and finally a static error shell, and are reported as
//! structured diagnostics on the richer [`Pipeline::render`] surface.

pub use courrier_core::{ERROR_NOTICE, Pipeline, PipelineError, RenderBackend};
pub use courrier_layout::{
    LayoutConfig, MAX_BLOCK_HEIGHT, MAX_BLOCK_WIDTH, MIN_BLOCK_HEIGHT, MIN_BLOCK_WIDTH,
};
pub use courrier_types::{
    Block, BlockContent, BlockStyles, BlockType, Diagnostic, DiagnosticLevel, Document,
    GlobalStyles, Position, RenderedDocument, TRACKING_PIXEL_TOKEN,
};

/// Renders a document to a full HTML email, UTF-8, starting with
/// `<!DOCTYPE html>`. Never fails; see the crate documentation for the
/// degradation ladder.
pub async fn render_to_email_html(document: &Document) -> String {
    Pipeline::new().render(document).await.html
}

/// Builds the plain-text alternate part: each block's textual content in
/// row/column reading order, with rich text stripped of markup.
pub fn generate_text_content(document: &Document) -> String {
    Pipeline::new().text_content(document)
}
