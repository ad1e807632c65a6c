//! Small string utilities shared by the HTML and plain-text renderers.

/// Escapes text for safe interpolation into HTML element bodies and
/// attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Strips HTML tags from rich-text content for the plain-text alternate
/// part. Line-breaking tags (`<br>`, closing `</p>`/`</div>`) become
/// newlines; everything else is dropped. The handful of entities the
/// builder emits are decoded afterwards.
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('>') {
            Some(end) => {
                let tag = after[..end].trim().to_ascii_lowercase();
                if tag.starts_with("br") || tag == "/p" || tag == "/div" {
                    out.push('\n');
                }
                rest = &after[end + 1..];
            }
            // Unterminated tag: the remainder is markup debris, drop it.
            None => {
                rest = "";
            }
        }
    }
    out.push_str(rest);
    decode_entities(&out)
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
