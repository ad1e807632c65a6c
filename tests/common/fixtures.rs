//! JSON fixture builders mirroring what the newsletter builder saves.

use serde_json::{Value, json};

/// A complete document with default global styles.
pub fn document(blocks: Vec<Value>) -> Value {
    json!({
        "subject": "Infolettre de test",
        "globalStyles": {
            "backgroundColor": "#f5f5f5",
            "contentWidth": 600,
            "fontFamily": "Arial, Helvetica, sans-serif",
            "primaryColor": "#007bff"
        },
        "blocks": blocks
    })
}

pub fn positioned(kind: &str, id: &str, x: f32, y: f32, width: f32, height: f32) -> Value {
    json!({
        "id": id,
        "type": kind,
        "content": {},
        "styles": {},
        "position": { "x": x, "y": y, "width": width, "height": height }
    })
}

pub fn header(id: &str, text: &str, x: f32, y: f32, width: f32, height: f32) -> Value {
    let mut block = positioned("header", id, x, y, width, height);
    block["content"] = json!({ "text": text });
    block
}

pub fn text(id: &str, html: &str, x: f32, y: f32, width: f32, height: f32) -> Value {
    let mut block = positioned("text", id, x, y, width, height);
    block["content"] = json!({ "html": html });
    block
}

pub fn image(id: &str, src: &str, x: f32, y: f32, width: f32, height: f32) -> Value {
    let mut block = positioned("image", id, x, y, width, height);
    block["content"] = json!({ "src": src, "alt": "illustration" });
    block
}

pub fn button(id: &str, label: &str, href: &str, x: f32, y: f32, width: f32, height: f32) -> Value {
    let mut block = positioned("button", id, x, y, width, height);
    block["content"] = json!({ "text": label, "href": href });
    block
}
