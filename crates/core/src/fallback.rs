//! Terminal static fallback (tier 2).
//!
//! The safety net under the safety net: a fixed shell with a visually
//! distinct error notice, still carrying the document's background color
//! and content width, plus the tracking pixel. Built exclusively from
//! literal templates and defaulted reads so that it cannot fail, which is
//! what guarantees the engine's no-throw contract.

use courrier_types::{Document, TRACKING_PIXEL_TOKEN};

use courrier_render_html::util::escape_html;

/// Body of the error notice shown when every renderer tier failed.
pub const ERROR_NOTICE: &str =
    "Cette infolettre n'a pas pu être affichée correctement. Veuillez consulter la version en ligne.";

/// Renders the minimal static document. Infallible by construction.
pub fn render_static(document: &Document) -> String {
    let global = &document.global_styles;
    let content_width = global.layout_width().round() as i32;
    let background = escape_html(&global.background_color);
    let font_family = escape_html(&global.font_family);
    let subject = escape_html(&document.subject);

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"fr\">\n\
         <head>\n\
         <meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n\
         <title>{subject}</title>\n\
         </head>\n\
         <body style=\"margin:0;padding:0;background-color:{background};\">\n\
         <table role=\"presentation\" width=\"100%\" border=\"0\" cellpadding=\"0\" cellspacing=\"0\" style=\"background-color:{background};\">\n\
         <tr><td align=\"center\" style=\"padding:20px 0;\">\n\
         <table role=\"presentation\" width=\"{content_width}\" border=\"0\" cellpadding=\"0\" cellspacing=\"0\" style=\"width:{content_width}px;max-width:{content_width}px;background-color:#ffffff;\">\n\
         <tr><td style=\"padding:30px;font-family:{font_family};font-size:14px;color:#555555;text-align:center;border:1px solid #e0e0e0;\">\n\
         {ERROR_NOTICE}\n\
         </td></tr>\n\
         </table>\n\
         </td></tr>\n\
         </table>\n\
         <img src=\"{TRACKING_PIXEL_TOKEN}\" width=\"1\" height=\"1\" alt=\"\" style=\"display:none;border:0;\" />\n\
         </body>\n\
         </html>"
    )
}
