//! Templated fallback backend.
//!
//! The first degradation tier of the pipeline: when the primary
//! nested-table backend fails, the document is re-rendered through a
//! handlebars template that stacks blocks in input order, with no
//! validation, no clustering and no proportional columns. It deliberately consumes the
//! ORIGINAL document, because the primary failure may have originated in
//! the layout passes themselves.
//!
//! Context preparation resolves every field to a literal default before the
//! template runs, so missing positions, styles, or content cannot make this
//! tier fail for data reasons.

use courrier_types::{Block, BlockType, Document, TRACKING_PIXEL_TOKEN};
use handlebars::Handlebars;
use serde_json::{Map, Value, json};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template compilation failed: {0}")]
    Compile(#[from] Box<handlebars::TemplateError>),
    #[error("Template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),
}

const TEMPLATE_NAME: &str = "newsletter-stacked";

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="fr">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1.0" />
<title>{{subject}}</title>
</head>
<body style="margin:0;padding:0;background-color:{{backgroundColor}};">
<table role="presentation" width="100%" border="0" cellpadding="0" cellspacing="0" style="background-color:{{backgroundColor}};">
<tr><td align="center" style="padding:20px 0;">
<table role="presentation" width="{{contentWidth}}" border="0" cellpadding="0" cellspacing="0" style="width:{{contentWidth}}px;max-width:{{contentWidth}}px;background-color:#ffffff;">
{{#each blocks}}
<tr><td style="padding:10px;font-family:{{../fontFamily}};">
{{#if isHeader}}<div style="font-size:{{fontSize}};font-weight:bold;color:{{color}};text-align:{{textAlign}};">{{text}}</div>{{/if}}
{{#if isText}}<div style="font-size:{{fontSize}};color:{{color}};text-align:{{textAlign}};line-height:1.5;">{{{html}}}</div>{{/if}}
{{#if isImage}}{{#if src}}<img src="{{src}}" alt="{{alt}}" width="100%" style="display:block;width:100%;max-width:100%;height:auto;border:0;" />{{else}}<div style="border:2px dashed #cccccc;background-color:#fafafa;color:#999999;text-align:center;padding:20px;">Image non disponible</div>{{/if}}{{/if}}
{{#if isButton}}<table role="presentation" border="0" cellpadding="0" cellspacing="0" align="center"><tr><td align="center" bgcolor="{{backgroundColor}}" style="border-radius:4px;"><a href="{{href}}" target="_blank" style="display:inline-block;padding:12px 24px;font-size:{{fontSize}};font-weight:bold;color:{{color}};text-decoration:none;">{{text}}</a></td></tr></table>{{/if}}
{{#if isDivider}}<div style="border-top:{{thickness}} solid {{color}};font-size:1px;line-height:1px;">&nbsp;</div>{{/if}}
{{#if isUnknown}}<div style="padding:10px;border:1px dashed #cccccc;color:#999999;text-align:center;">Bloc non reconnu</div>{{/if}}
</td></tr>
{{/each}}
</table>
</td></tr>
</table>
<img src="{{trackingPixel}}" width="1" height="1" alt="" style="display:none;border:0;" />
</body>
</html>"#;

/// The handlebars-backed stacked renderer.
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string(TEMPLATE_NAME, TEMPLATE)
            .map_err(Box::new)?;
        Ok(Self { registry })
    }

    /// Renders the stacked rendition of a document. Infallible on data: any
    /// error here comes from the templating engine itself and sends the
    /// pipeline to the terminal static tier.
    pub fn render(&self, document: &Document) -> Result<String, TemplateError> {
        let context = build_context(document);
        Ok(self.registry.render(TEMPLATE_NAME, &context)?)
    }
}

fn build_context(document: &Document) -> Value {
    let global = &document.global_styles;
    let blocks: Vec<Value> = document.blocks.iter().map(|b| block_context(b, global)).collect();
    json!({
        "subject": document.subject,
        "backgroundColor": global.background_color,
        "contentWidth": global.layout_width().round() as i64,
        "fontFamily": global.font_family,
        "blocks": blocks,
        "trackingPixel": TRACKING_PIXEL_TOKEN,
    })
}

fn block_context(block: &Block, global: &courrier_types::GlobalStyles) -> Value {
    let mut ctx = Map::new();
    let kind = block.kind;
    for (flag, expected) in [
        ("isHeader", BlockType::Header),
        ("isText", BlockType::Text),
        ("isImage", BlockType::Image),
        ("isButton", BlockType::Button),
        ("isDivider", BlockType::Divider),
        ("isUnknown", BlockType::Unknown),
    ] {
        ctx.insert(flag.to_string(), Value::Bool(kind == expected));
    }

    let str_or = |value: &Option<String>, fallback: &str| -> Value {
        Value::String(
            value
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(fallback)
                .to_string(),
        )
    };

    match kind {
        BlockType::Header => {
            ctx.insert("text".into(), str_or(&block.content.text, "Titre"));
            ctx.insert("fontSize".into(), str_or(&block.styles.font_size, "32px"));
            ctx.insert("color".into(), str_or(&block.styles.color, &global.primary_color));
            ctx.insert("textAlign".into(), str_or(&block.styles.text_align, "left"));
        }
        BlockType::Text => {
            ctx.insert("html".into(), str_or(&block.content.html, ""));
            ctx.insert("fontSize".into(), str_or(&block.styles.font_size, "16px"));
            ctx.insert("color".into(), str_or(&block.styles.color, "#333333"));
            ctx.insert("textAlign".into(), str_or(&block.styles.text_align, "left"));
        }
        BlockType::Image => {
            if let Some(src) = block.content.src.as_deref().filter(|s| !s.is_empty()) {
                ctx.insert("src".into(), Value::String(src.to_string()));
            }
            ctx.insert("alt".into(), str_or(&block.content.alt, ""));
        }
        BlockType::Button => {
            ctx.insert("text".into(), str_or(&block.content.text, "Cliquez ici"));
            ctx.insert("href".into(), str_or(&block.content.href, "#"));
            ctx.insert(
                "backgroundColor".into(),
                str_or(&block.styles.background_color, &global.primary_color),
            );
            ctx.insert("color".into(), str_or(&block.styles.color, "#ffffff"));
            ctx.insert("fontSize".into(), str_or(&block.styles.font_size, "16px"));
        }
        BlockType::Divider => {
            ctx.insert("thickness".into(), str_or(&block.styles.thickness, "1px"));
            ctx.insert("color".into(), str_or(&block.styles.color, "#dddddd"));
        }
        BlockType::Unknown => {}
    }
    Value::Object(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use courrier_types::{BlockContent, GlobalStyles};

    fn renderer() -> TemplateRenderer {
        TemplateRenderer::new().expect("template must compile")
    }

    fn doc(blocks: Vec<Block>) -> Document {
        Document {
            subject: "Sujet".to_string(),
            global_styles: GlobalStyles::default(),
            blocks,
        }
    }

    #[test]
    fn renders_unvalidated_blocks_without_positions() {
        // No positions at all: the stacked tier must not care.
        let document = doc(vec![
            Block {
                kind: BlockType::Header,
                content: BlockContent { text: Some("Bonjour".into()), ..BlockContent::default() },
                ..Block::default()
            },
            Block { kind: BlockType::Divider, ..Block::default() },
        ]);
        let html = renderer().render(&document).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Bonjour"));
        assert!(html.contains("border-top:1px solid #dddddd"));
    }

    #[test]
    fn tracking_token_survives_handlebars_substitution() {
        let html = renderer().render(&doc(vec![])).unwrap();
        assert_eq!(html.matches(TRACKING_PIXEL_TOKEN).count(), 1);
    }

    #[test]
    fn header_text_is_escaped_by_the_engine() {
        let document = doc(vec![Block {
            kind: BlockType::Header,
            content: BlockContent { text: Some("A <b>&</b> B".into()), ..BlockContent::default() },
            ..Block::default()
        }]);
        let html = renderer().render(&document).unwrap();
        assert!(html.contains("A &lt;b&gt;&amp;&lt;/b&gt; B"));
    }

    #[test]
    fn rich_text_is_not_escaped() {
        let document = doc(vec![Block {
            kind: BlockType::Text,
            content: BlockContent { html: Some("<em>fin</em>".into()), ..BlockContent::default() },
            ..Block::default()
        }]);
        let html = renderer().render(&document).unwrap();
        assert!(html.contains("<em>fin</em>"));
    }

    #[test]
    fn unknown_blocks_render_the_placeholder() {
        let document = doc(vec![Block::default()]);
        let html = renderer().render(&document).unwrap();
        assert!(html.contains("Bloc non reconnu"));
    }
}
