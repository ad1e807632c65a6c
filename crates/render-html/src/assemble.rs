//! Nested-table document assembly.
//!
//! Wraps planned rows into the table shell that hostile email clients
//! agree on: a full HTML document with MSO conditionals for Outlook, a
//! `<style>` block carrying only non-critical resets (Gmail strips it, so
//! nothing safety-critical may live there), a centered fixed-width
//! container, and the unresolved tracking-pixel token just before
//! `</body>`.

use std::fmt::Write as _;

use courrier_layout::{ColumnPlan, RowPlan};
use courrier_types::{Diagnostics, GlobalStyles, TRACKING_PIXEL_TOKEN};

use crate::blocks::render_block;
use crate::error::RenderError;
use crate::util::escape_html;

/// Mobile breakpoint used by the non-critical responsive hints.
const MOBILE_BREAKPOINT_PX: u32 = 600;

/// Assembles the full HTML document for a planned layout.
pub fn assemble_document(
    subject: &str,
    global: &GlobalStyles,
    rows: &[RowPlan],
    diags: &mut Diagnostics,
) -> Result<String, RenderError> {
    let content_width = global.layout_width().round() as i32;
    let mut out = String::with_capacity(8 * 1024);

    write_head(&mut out, subject, global)?;

    writeln!(
        out,
        "<body style=\"margin:0;padding:0;width:100%;background-color:{};\">",
        escape_html(&global.background_color)
    )?;
    writeln!(
        out,
        "<table role=\"presentation\" width=\"100%\" border=\"0\" cellpadding=\"0\" cellspacing=\"0\" style=\"background-color:{};\">",
        escape_html(&global.background_color)
    )?;
    writeln!(out, "<tr><td align=\"center\" style=\"padding:20px 0;\">")?;
    writeln!(
        out,
        "<table role=\"presentation\" class=\"email-container\" width=\"{content_width}\" border=\"0\" cellpadding=\"0\" cellspacing=\"0\" style=\"width:{content_width}px;max-width:{content_width}px;background-color:#ffffff;\">"
    )?;

    for row in rows {
        write_row(&mut out, row, global, diags)?;
    }

    writeln!(out, "</table>")?;
    writeln!(out, "</td></tr>")?;
    writeln!(out, "</table>")?;
    writeln!(
        out,
        "<img src=\"{TRACKING_PIXEL_TOKEN}\" width=\"1\" height=\"1\" alt=\"\" style=\"display:none;border:0;\" />"
    )?;
    writeln!(out, "</body>")?;
    write!(out, "</html>")?;
    Ok(out)
}

fn write_head(out: &mut String, subject: &str, global: &GlobalStyles) -> Result<(), RenderError> {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(
        out,
        "<html lang=\"fr\" xmlns=\"http://www.w3.org/1999/xhtml\" xmlns:v=\"urn:schemas-microsoft-com:vml\" xmlns:o=\"urn:schemas-microsoft-com:office:office\">"
    )?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\" />")?;
    writeln!(
        out,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />"
    )?;
    writeln!(out, "<title>{}</title>", escape_html(subject))?;
    // Outlook renders at the wrong DPI without this settings block.
    writeln!(out, "<!--[if mso]>")?;
    writeln!(
        out,
        "<xml><o:OfficeDocumentSettings><o:AllowPNG/><o:PixelsPerInch>96</o:PixelsPerInch></o:OfficeDocumentSettings></xml>"
    )?;
    writeln!(out, "<![endif]-->")?;
    // Non-critical resets only: Gmail strips this whole block, so every
    // safety-critical style must also exist inline on the elements.
    writeln!(out, "<style type=\"text/css\">")?;
    writeln!(
        out,
        "  body {{ margin: 0; padding: 0; font-family: {}; }}",
        escape_html(&global.font_family)
    )?;
    writeln!(
        out,
        "  img {{ border: 0; outline: none; text-decoration: none; -ms-interpolation-mode: bicubic; }}"
    )?;
    writeln!(out, "  table {{ border-collapse: collapse; }}")?;
    writeln!(
        out,
        "  @media only screen and (max-width: {MOBILE_BREAKPOINT_PX}px) {{"
    )?;
    writeln!(out, "    .email-container {{ width: 100% !important; }}")?;
    writeln!(
        out,
        "    .stack-column {{ display: block !important; width: 100% !important; }}"
    )?;
    writeln!(out, "  }}")?;
    writeln!(out, "</style>")?;
    writeln!(out, "</head>")?;
    Ok(())
}

fn write_row(
    out: &mut String,
    row: &RowPlan,
    global: &GlobalStyles,
    diags: &mut Diagnostics,
) -> Result<(), RenderError> {
    if let Some(height) = row.spacer_before {
        let height = height.round() as i32;
        writeln!(
            out,
            "<tr><td height=\"{height}\" style=\"height:{height}px;line-height:{height}px;font-size:0;\">&nbsp;</td></tr>"
        )?;
    }

    writeln!(out, "<tr><td>")?;
    writeln!(
        out,
        "<table role=\"presentation\" width=\"100%\" border=\"0\" cellpadding=\"0\" cellspacing=\"0\">"
    )?;
    writeln!(out, "<tr>")?;
    for column in &row.columns {
        match column {
            ColumnPlan::Block { block, width_percent } => {
                writeln!(
                    out,
                    "<td class=\"stack-column\" width=\"{width_percent}%\" style=\"width:{width_percent}%;vertical-align:top;padding:5px;\">"
                )?;
                writeln!(out, "{}", render_block(block, global, diags))?;
                writeln!(out, "</td>")?;
            }
            ColumnPlan::Spacer { width_percent } => {
                writeln!(
                    out,
                    "<td width=\"{width_percent:.2}%\" style=\"width:{width_percent:.2}%;font-size:0;line-height:0;\">&nbsp;</td>"
                )?;
            }
        }
    }
    writeln!(out, "</tr>")?;
    writeln!(out, "</table>")?;
    writeln!(out, "</td></tr>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use courrier_layout::{LayoutConfig, cluster_rows, plan_rows};
    use courrier_types::{Block, BlockType, Position};

    fn text_block(id: &str, x: f32, y: f32, width: f32, height: f32) -> Block {
        Block {
            id: id.to_string(),
            kind: BlockType::Text,
            position: Some(Position::new(x, y, width, height)),
            ..Block::default()
        }
    }

    fn assemble(blocks: Vec<Block>) -> String {
        let global = GlobalStyles::default();
        let config = LayoutConfig::default();
        let rows = cluster_rows(blocks, &config);
        let plans = plan_rows(rows, global.layout_width(), &config);
        let mut diags = Diagnostics::new();
        assemble_document("Sujet", &global, &plans, &mut diags).unwrap()
    }

    #[test]
    fn shell_contains_compatibility_headers() {
        let html = assemble(vec![text_block("a", 0.0, 0.0, 300.0, 100.0)]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<meta charset=\"utf-8\" />"));
        assert!(html.contains("OfficeDocumentSettings"));
        assert!(html.contains("@media only screen and (max-width: 600px)"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn tracking_token_appears_exactly_once_before_body_close() {
        let html = assemble(vec![text_block("a", 0.0, 0.0, 300.0, 100.0)]);
        assert_eq!(html.matches(TRACKING_PIXEL_TOKEN).count(), 1);
        let token_at = html.find(TRACKING_PIXEL_TOKEN).unwrap();
        let body_close_at = html.find("</body>").unwrap();
        assert!(token_at < body_close_at);
    }

    #[test]
    fn font_family_is_escaped_in_style_block() {
        let global = GlobalStyles {
            font_family: "Arial</style><script>".to_string(),
            ..GlobalStyles::default()
        };
        let mut diags = Diagnostics::new();
        let html = assemble_document("Sujet", &global, &[], &mut diags).unwrap();
        assert!(!html.contains("</style><script>"));
        assert!(html.contains("Arial&lt;/style&gt;&lt;script&gt;"));
    }

    #[test]
    fn empty_document_is_still_valid() {
        let html = assemble(vec![]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches(TRACKING_PIXEL_TOKEN).count(), 1);
    }

    #[test]
    fn spacer_row_height_is_written() {
        let html = assemble(vec![
            text_block("a", 0.0, 0.0, 300.0, 200.0),
            text_block("b", 0.0, 400.0, 300.0, 100.0),
        ]);
        assert!(html.contains("height=\"50\""));
    }

    #[test]
    fn column_widths_are_percentages() {
        let html = assemble(vec![
            text_block("a", 0.0, 0.0, 280.0, 200.0),
            text_block("b", 300.0, 10.0, 280.0, 200.0),
        ]);
        assert!(html.contains("width=\"53%\""));
        assert!(html.contains("width=\"47%\""));
    }
}
