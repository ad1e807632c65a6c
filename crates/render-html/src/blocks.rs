//! Per-block-type email-safe fragment renderers.
//!
//! Every fragment is self-contained: styling is inline only, because Gmail
//! strips `<style>` blocks, and every style attribute has a documented
//! fallback so a half-saved block still renders something sensible. The
//! renderers are pure string producers; the only side channel is the
//! diagnostics sink.

use courrier_types::{Block, BlockType, Diagnostics, GlobalStyles};

use crate::util::escape_html;

/// Pixels subtracted from a block's canvas width when sizing an `<img>`, so
/// the image clears the column padding instead of overflowing it.
pub const IMAGE_PADDING_ALLOWANCE: f32 = 20.0;

/// Placeholder title for an empty header block.
pub const HEADER_PLACEHOLDER: &str = "Titre";
/// Placeholder label for an empty button block.
pub const BUTTON_PLACEHOLDER: &str = "Cliquez ici";
/// Body of the dashed placeholder box shown for an image with no source.
pub const IMAGE_PLACEHOLDER: &str = "Image non disponible";
/// Body of the neutral placeholder shown for an unrecognized block type.
pub const UNKNOWN_PLACEHOLDER: &str = "Bloc non reconnu";

/// Renders one block into an email-safe markup fragment.
///
/// Exhaustive over the open union: a malformed `type` value lands on
/// [`BlockType::Unknown`] and is absorbed with a placeholder rather than
/// rejected (the one place bad data is silently tolerated downstream of
/// validation).
pub fn render_block(block: &Block, global: &GlobalStyles, diags: &mut Diagnostics) -> String {
    match block.kind {
        BlockType::Header => render_header(block, global),
        BlockType::Text => render_text(block, global),
        BlockType::Image => render_image(block, global, diags),
        BlockType::Button => render_button(block, global),
        BlockType::Divider => render_divider(block),
        BlockType::Unknown => render_unknown(global),
    }
}

/// Header: bold title line. `fontSize` falls back to `32px`, `color` to the
/// document's primary color, `textAlign` to `left`.
fn render_header(block: &Block, global: &GlobalStyles) -> String {
    let text = block
        .content
        .text
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(HEADER_PLACEHOLDER);
    let font_size = block.styles.font_size.as_deref().unwrap_or("32px");
    let color = block
        .styles
        .color
        .as_deref()
        .unwrap_or(&global.primary_color);
    let align = block.styles.text_align.as_deref().unwrap_or("left");
    let padding = block.styles.padding.as_deref().unwrap_or("10px");
    format!(
        "<div style=\"font-family:{};font-size:{};font-weight:bold;color:{};text-align:{};padding:{};margin:0;\">{}</div>",
        escape_html(&global.font_family),
        escape_html(font_size),
        escape_html(color),
        escape_html(align),
        escape_html(padding),
        escape_html(text),
    )
}

/// Text: trusted, pre-sanitized rich text rendered verbatim inside a styled
/// container. Empty content still yields a valid empty container, never
/// nothing. `fontSize` falls back to `16px`, `color` to `#333333`.
fn render_text(block: &Block, global: &GlobalStyles) -> String {
    let html = block.content.html.as_deref().unwrap_or("");
    let font_size = block.styles.font_size.as_deref().unwrap_or("16px");
    let color = block.styles.color.as_deref().unwrap_or("#333333");
    let align = block.styles.text_align.as_deref().unwrap_or("left");
    let padding = block.styles.padding.as_deref().unwrap_or("10px");
    format!(
        "<div style=\"font-family:{};font-size:{};color:{};text-align:{};line-height:1.5;padding:{};\">{}</div>",
        escape_html(&global.font_family),
        escape_html(font_size),
        escape_html(color),
        escape_html(align),
        escape_html(padding),
        html,
    )
}

/// Image: an `<img>` sized from the canvas position minus the padding
/// allowance, optionally wrapped in a link. A missing source renders a
/// dashed placeholder box and warns; this path must never fail.
fn render_image(block: &Block, global: &GlobalStyles, diags: &mut Diagnostics) -> String {
    let rect = block.rect();
    let Some(src) = block.content.src.as_deref().filter(|s| !s.is_empty()) else {
        diags.warn("image block has no source, rendering placeholder", Some(&block.id));
        let height = rect.height.max(60.0).round() as i32;
        return format!(
            "<div style=\"width:100%;min-height:{height}px;line-height:{height}px;border:2px dashed #cccccc;background-color:#fafafa;text-align:center;color:#999999;font-family:{};font-size:14px;\">{IMAGE_PLACEHOLDER}</div>",
            escape_html(&global.font_family),
        );
    };

    let width = (rect.width - IMAGE_PADDING_ALLOWANCE).max(0.0).round() as i32;
    let alt = block.content.alt.as_deref().unwrap_or("");
    let radius = block.styles.border_radius.as_deref().unwrap_or("0");
    let img = format!(
        "<img src=\"{}\" alt=\"{}\" width=\"{width}\" style=\"display:block;width:{width}px;max-width:100%;height:auto;border:0;border-radius:{};\" />",
        escape_html(src),
        escape_html(alt),
        escape_html(radius),
    );
    match block.content.href.as_deref().filter(|h| !h.is_empty() && *h != "#") {
        Some(href) => format!(
            "<a href=\"{}\" target=\"_blank\" style=\"text-decoration:none;\">{img}</a>",
            escape_html(href),
        ),
        None => img,
    }
}

/// Button: a VML roundrect inside an MSO conditional for Outlook desktop
/// (which ignores the HTML fallback), plus a standard table button for
/// everyone else. Background falls back to the primary color, text color to
/// white, `fontSize` to `16px`.
fn render_button(block: &Block, global: &GlobalStyles) -> String {
    let label = block
        .content
        .text
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(BUTTON_PLACEHOLDER);
    let href = block.content.href.as_deref().unwrap_or("#");
    let background = block
        .styles
        .background_color
        .as_deref()
        .unwrap_or(&global.primary_color);
    let color = block.styles.color.as_deref().unwrap_or("#ffffff");
    let font_size = block.styles.font_size.as_deref().unwrap_or("16px");
    let radius = block.styles.border_radius.as_deref().unwrap_or("4px");
    let vml_width = block.rect().width.max(150.0).round() as i32;

    let label = escape_html(label);
    let href = escape_html(href);
    let background = escape_html(background);
    let color = escape_html(color);
    let font_size = escape_html(font_size);
    let font_family = escape_html(&global.font_family);
    let radius = escape_html(radius);

    format!(
        "<!--[if mso]>\n\
         <v:roundrect xmlns:v=\"urn:schemas-microsoft-com:vml\" xmlns:w=\"urn:schemas-microsoft-com:office:word\" href=\"{href}\" style=\"height:44px;v-text-anchor:middle;width:{vml_width}px;\" arcsize=\"10%\" stroke=\"f\" fillcolor=\"{background}\">\n\
         <w:anchorlock/>\n\
         <center style=\"color:{color};font-family:{font_family};font-size:{font_size};font-weight:bold;\">{label}</center>\n\
         </v:roundrect>\n\
         <![endif]-->\n\
         <!--[if !mso]><!-->\n\
         <table role=\"presentation\" border=\"0\" cellpadding=\"0\" cellspacing=\"0\" align=\"center\">\n\
         <tr><td align=\"center\" bgcolor=\"{background}\" style=\"border-radius:{radius};\">\n\
         <a href=\"{href}\" target=\"_blank\" style=\"display:inline-block;padding:12px 24px;font-family:{font_family};font-size:{font_size};font-weight:bold;color:{color};text-decoration:none;border-radius:{radius};\">{label}</a>\n\
         </td></tr>\n\
         </table>\n\
         <!--<![endif]-->"
    )
}

/// Divider: a centered rule. `thickness` falls back to `1px`, `color` to
/// `#dddddd`. Built from a border-top on a zero-height div rather than an
/// `<hr>` because Outlook renders `<hr>` margins unpredictably.
fn render_divider(block: &Block) -> String {
    let thickness = block.styles.thickness.as_deref().unwrap_or("1px");
    let color = block.styles.color.as_deref().unwrap_or("#dddddd");
    format!(
        "<table role=\"presentation\" width=\"100%\" border=\"0\" cellpadding=\"0\" cellspacing=\"0\">\
         <tr><td style=\"padding:10px 0;\">\
         <div style=\"border-top:{} solid {};font-size:1px;line-height:1px;\">&nbsp;</div>\
         </td></tr></table>",
        escape_html(thickness),
        escape_html(color),
    )
}

/// Unknown: neutral placeholder for an unrecognized block type.
fn render_unknown(global: &GlobalStyles) -> String {
    format!(
        "<div style=\"padding:10px;border:1px dashed #cccccc;color:#999999;font-family:{};font-size:12px;text-align:center;\">{UNKNOWN_PLACEHOLDER}</div>",
        escape_html(&global.font_family),
    )
}
