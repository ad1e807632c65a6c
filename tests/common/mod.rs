pub mod fixtures;
pub mod html_assertions;

use courrier::{Document, Pipeline, RenderedDocument};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Renders a document JSON value through the full pipeline, crossing the
/// same serde boundary the builder's save API crosses.
pub fn render_document(json: &serde_json::Value) -> Result<RenderedDocument, Box<dyn std::error::Error>> {
    let document: Document = serde_json::from_value(json.clone())?;
    let rendered = tokio::runtime::Builder::new_current_thread()
        .build()?
        .block_on(async { Pipeline::new().render(&document).await });
    Ok(rendered)
}

/// Renders and returns only the HTML part.
pub fn render_html(json: &serde_json::Value) -> Result<String, Box<dyn std::error::Error>> {
    Ok(render_document(json)?.html)
}
