//! Pipeline orchestration and the degradation ladder.
//!
//! The primary path runs validation, clustering, planning, block rendering
//! and assembly over the document. Any failure transitions to the templated
//! tier (rendered over the ORIGINAL, unvalidated document), and a failure
//! there transitions to the terminal static tier, which cannot fail. The
//! caller therefore always receives a well-formed document: user-visible
//! failure is, at worst, an error notice inside an otherwise valid email.

use courrier_layout::{LayoutConfig, cluster_rows, plan_rows, validate_blocks};
use courrier_render_html::{assemble_document, block_text, render_text_content};
use courrier_render_template::TemplateRenderer;
use courrier_types::{Diagnostics, Document, RenderedDocument};

use crate::error::PipelineError;
use crate::fallback::render_static;

/// Which rendition of the document a render call produces.
///
/// The historical codebase carried four divergent re-implementations of the
/// same layout idea; they survive here as selectable backends over one
/// parameterized engine, not as separate algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderBackend {
    /// Primary: validated, clustered, nested-table rendition.
    #[default]
    NestedTable,
    /// Tier-1 fallback: handlebars-templated stacked rendition.
    Templated,
    /// Tier-2 fallback: static error shell.
    Static,
}

/// The render pipeline. Stateless across invocations: every call derives
/// everything from its input, so independent documents may be rendered
/// concurrently on separate calls without interference.
#[derive(Debug, Default)]
pub struct Pipeline {
    config: LayoutConfig,
    forced_backend: Option<RenderBackend>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the layout tolerances. Rejects degenerate configurations
    /// up front rather than letting them poison clustering later.
    pub fn with_config(mut self, config: LayoutConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Forces a specific backend, skipping the tiers above it. Used by
    /// tests and by the preview path.
    pub fn with_backend(mut self, backend: RenderBackend) -> Self {
        self.forced_backend = Some(backend);
        self
    }

    /// Renders a document to its HTML and plain-text parts.
    ///
    /// Never fails: every internal error is absorbed by the degradation
    /// ladder and reported through the returned diagnostics instead.
    pub async fn render(&self, document: &Document) -> RenderedDocument {
        let mut diags = Diagnostics::new();

        let html = match self.forced_backend.unwrap_or_default() {
            RenderBackend::NestedTable => match self.render_primary(document, &mut diags) {
                Ok(html) => html,
                Err(err) => {
                    diags.error(
                        format!("primary renderer failed ({err}), falling back to templated renderer"),
                        None,
                    );
                    self.render_templated_or_static(document, &mut diags)
                }
            },
            RenderBackend::Templated => self.render_templated_or_static(document, &mut diags),
            RenderBackend::Static => render_static(document),
        };

        let text = self.text_content(document);
        RenderedDocument {
            html,
            text,
            warnings: diags.into_records(),
        }
    }

    /// The plain-text alternate part. Never fails; falls back to
    /// input-order concatenation when layout planning cannot be trusted.
    pub fn text_content(&self, document: &Document) -> String {
        let mut diags = Diagnostics::new();
        let blocks = validate_blocks(&document.blocks, &mut diags);
        if blocks.is_empty() {
            // Nothing survived validation; degrade to input order so a
            // malformed save still yields its readable content.
            return document
                .blocks
                .iter()
                .filter_map(block_text)
                .collect::<Vec<_>>()
                .join("\n\n");
        }
        let rows = cluster_rows(blocks, &self.config);
        let plans = plan_rows(rows, document.global_styles.layout_width(), &self.config);
        render_text_content(&plans)
    }

    fn render_primary(
        &self,
        document: &Document,
        diags: &mut Diagnostics,
    ) -> Result<String, PipelineError> {
        let blocks = validate_blocks(&document.blocks, diags);
        log::debug!(
            "validated {} of {} blocks",
            blocks.len(),
            document.blocks.len()
        );
        let rows = cluster_rows(blocks, &self.config);
        log::debug!("clustered into {} rows", rows.len());
        let plans = plan_rows(rows, document.global_styles.layout_width(), &self.config);
        let html = assemble_document(&document.subject, &document.global_styles, &plans, diags)?;
        Ok(html)
    }

    fn render_templated_or_static(&self, document: &Document, diags: &mut Diagnostics) -> String {
        match self.render_templated(document) {
            Ok(html) => html,
            Err(err) => {
                diags.error(
                    format!("templated renderer failed ({err}), falling back to static shell"),
                    None,
                );
                render_static(document)
            }
        }
    }

    fn render_templated(&self, document: &Document) -> Result<String, PipelineError> {
        let renderer = TemplateRenderer::new()?;
        Ok(renderer.render(document)?)
    }
}
