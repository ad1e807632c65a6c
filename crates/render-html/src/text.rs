//! Plain-text alternate part.
//!
//! Walks planned rows in reading order (top to bottom, left to right) and
//! concatenates each block's textual content. Rich-text blocks are stripped
//! of markup; dividers have no textual equivalent and are skipped.

use courrier_layout::RowPlan;
use courrier_types::{Block, BlockType};

use crate::blocks::{BUTTON_PLACEHOLDER, HEADER_PLACEHOLDER};
use crate::util::strip_tags;

/// Extracts one block's contribution to the text part, or `None` when the
/// block has none.
pub fn block_text(block: &Block) -> Option<String> {
    match block.kind {
        BlockType::Header => Some(
            block
                .content
                .text
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(HEADER_PLACEHOLDER)
                .to_string(),
        ),
        BlockType::Text => {
            let stripped = strip_tags(block.content.html.as_deref().unwrap_or(""));
            let trimmed = stripped.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        BlockType::Button => {
            let label = block
                .content
                .text
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(BUTTON_PLACEHOLDER);
            match block.content.href.as_deref().filter(|h| !h.is_empty() && *h != "#") {
                Some(href) => Some(format!("{label} : {href}")),
                None => Some(label.to_string()),
            }
        }
        BlockType::Image => block
            .content
            .alt
            .as_deref()
            .map(str::trim)
            .filter(|alt| !alt.is_empty())
            .map(|alt| format!("[{alt}]")),
        BlockType::Divider | BlockType::Unknown => None,
    }
}

/// Builds the plain-text alternate from planned rows.
pub fn render_text_content(rows: &[RowPlan]) -> String {
    let parts: Vec<String> = rows
        .iter()
        .flat_map(|row| row.blocks())
        .filter_map(block_text)
        .collect();
    parts.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use courrier_layout::{LayoutConfig, cluster_rows, plan_rows};
    use courrier_types::{BlockContent, Position};

    fn block(kind: BlockType, content: BlockContent, x: f32, y: f32) -> Block {
        Block {
            id: format!("{}-{x}-{y}", kind.as_str()),
            kind,
            content,
            position: Some(Position::new(x, y, 280.0, 100.0)),
            ..Block::default()
        }
    }

    #[test]
    fn reading_order_is_row_major_then_left_to_right() {
        let blocks = vec![
            block(
                BlockType::Text,
                BlockContent { html: Some("<p>bas</p>".into()), ..BlockContent::default() },
                0.0,
                400.0,
            ),
            block(
                BlockType::Header,
                BlockContent { text: Some("droite".into()), ..BlockContent::default() },
                300.0,
                0.0,
            ),
            block(
                BlockType::Header,
                BlockContent { text: Some("gauche".into()), ..BlockContent::default() },
                0.0,
                0.0,
            ),
        ];
        let config = LayoutConfig::default();
        let rows = cluster_rows(blocks, &config);
        let plans = plan_rows(rows, 600.0, &config);
        assert_eq!(render_text_content(&plans), "gauche\n\ndroite\n\nbas");
    }

    #[test]
    fn rich_text_is_stripped() {
        let b = block(
            BlockType::Text,
            BlockContent {
                html: Some("<p>Bonjour &amp; <em>bienvenue</em></p>".into()),
                ..BlockContent::default()
            },
            0.0,
            0.0,
        );
        assert_eq!(block_text(&b).unwrap(), "Bonjour & bienvenue");
    }

    #[test]
    fn button_includes_target_url() {
        let b = block(
            BlockType::Button,
            BlockContent {
                text: Some("Acheter".into()),
                href: Some("https://shop.example.com".into()),
                ..BlockContent::default()
            },
            0.0,
            0.0,
        );
        assert_eq!(block_text(&b).unwrap(), "Acheter : https://shop.example.com");
    }

    #[test]
    fn divider_and_unknown_contribute_nothing() {
        let divider = block(BlockType::Divider, BlockContent::default(), 0.0, 0.0);
        let unknown = block(BlockType::Unknown, BlockContent::default(), 0.0, 0.0);
        assert_eq!(block_text(&divider), None);
        assert_eq!(block_text(&unknown), None);
    }

    #[test]
    fn image_contributes_alt_text_only_when_present() {
        let mut img = block(BlockType::Image, BlockContent::default(), 0.0, 0.0);
        assert_eq!(block_text(&img), None);
        img.content.alt = Some("Logo".into());
        assert_eq!(block_text(&img).unwrap(), "[Logo]");
    }
}
