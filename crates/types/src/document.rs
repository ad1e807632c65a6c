//! The in-memory representation of a newsletter document as saved by the
//! builder, and the rendered output handed back to callers.

use crate::geometry::Position;
use serde::{Deserialize, Deserializer, Serialize};

use crate::diagnostics::Diagnostic;

/// Deserializes JSON `null` as the type's default instead of erroring.
///
/// The builder front end routinely persists `null` for untouched sections
/// (`"blocks": null`, `"styles": null`), and the engine's no-throw contract
/// starts at the deserialization boundary.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The kind of content a block carries.
///
/// This is an open union: any tag the engine does not recognize (a newer
/// builder may save types this version has never seen) collapses to
/// `Unknown` instead of failing deserialization. `Unknown` blocks render a
/// neutral placeholder downstream.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Header,
    Text,
    Image,
    Button,
    Divider,
    #[default]
    Unknown,
}

impl BlockType {
    /// Maps a persisted tag to its variant; anything unrecognized (or a
    /// missing/null tag) is absorbed as `Unknown`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "header" => BlockType::Header,
            "text" => BlockType::Text,
            "image" => BlockType::Image,
            "button" => BlockType::Button,
            "divider" => BlockType::Divider,
            _ => BlockType::Unknown,
        }
    }

    /// Stable string identifier, used for dispatch and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Header => "header",
            BlockType::Text => "text",
            BlockType::Image => "image",
            BlockType::Button => "button",
            BlockType::Divider => "divider",
            BlockType::Unknown => "unknown",
        }
    }
}

impl<'de> Deserialize<'de> for BlockType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = Option::<String>::deserialize(deserializer)?;
        Ok(tag.as_deref().map_or(BlockType::Unknown, BlockType::parse))
    }
}

/// Type-specific content fields. Which fields are meaningful depends on the
/// block type; everything is optional because the builder only persists what
/// the user actually filled in.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlockContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Trusted, pre-sanitized rich text (sanitization happens upstream in
    /// the builder's save path).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Per-block visual attributes, stored as CSS-literal strings exactly as the
/// builder emits them. Every renderer documents its own fallback per field.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlockStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
}

/// One absolutely-positioned content unit from the newsletter canvas.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: BlockType,
    #[serde(default, deserialize_with = "null_to_default")]
    pub content: BlockContent,
    #[serde(default, deserialize_with = "null_to_default")]
    pub styles: BlockStyles,
    /// Absent on malformed saves; such blocks are dropped by validation.
    #[serde(default)]
    pub position: Option<Position>,
}

impl Block {
    /// The block's canvas placement, or a zero rect when absent.
    ///
    /// Validated blocks always carry a position; this accessor exists so
    /// downstream code stays panic-free on unvalidated input (the tier-1
    /// fallback renders the original, unvalidated document).
    pub fn rect(&self) -> Position {
        self.position.unwrap_or_default()
    }
}

/// The literal, unresolved tracking-pixel token the engine emits exactly
/// once per rendered document. The mail-sending collaborator string-replaces
/// it with a real URL before transport; the engine never resolves it.
pub const TRACKING_PIXEL_TOKEN: &str = "{{trackingPixelUrl}}";

pub const DEFAULT_BACKGROUND_COLOR: &str = "#f5f5f5";
pub const DEFAULT_CONTENT_WIDTH: f32 = 600.0;
pub const DEFAULT_FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";
pub const DEFAULT_PRIMARY_COLOR: &str = "#007bff";

fn default_background_color() -> String {
    DEFAULT_BACKGROUND_COLOR.to_string()
}

fn default_content_width() -> f32 {
    DEFAULT_CONTENT_WIDTH
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}

fn default_primary_color() -> String {
    DEFAULT_PRIMARY_COLOR.to_string()
}

/// Document-wide styling. `content_width` is authoritative: it is the
/// denominator of every proportional width computation in the engine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStyles {
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default = "default_content_width")]
    pub content_width: f32,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
}

impl Default for GlobalStyles {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            content_width: DEFAULT_CONTENT_WIDTH,
            font_family: default_font_family(),
            primary_color: default_primary_color(),
        }
    }
}

impl GlobalStyles {
    /// The container width used as the layout denominator.
    ///
    /// Guards against zero/negative/non-finite widths from a corrupted save
    /// so percentage math never divides by a degenerate value.
    pub fn layout_width(&self) -> f32 {
        if self.content_width.is_finite() && self.content_width > 0.0 {
            self.content_width
        } else {
            DEFAULT_CONTENT_WIDTH
        }
    }
}

/// A complete newsletter document as handed over by the builder's save API.
///
/// The engine never mutates a `Document` and never retains references to one
/// across calls.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub subject: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub global_styles: GlobalStyles,
    #[serde(default, deserialize_with = "null_to_default")]
    pub blocks: Vec<Block>,
}

/// The engine's only externally observable output. Immutable once produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedDocument {
    /// Full HTML document, UTF-8, starting with `<!DOCTYPE html>`.
    pub html: String,
    /// Plain-text alternate part, in row/column reading order.
    pub text: String,
    /// Structured warnings collected along the way (dropped blocks, missing
    /// image sources, fallback transitions).
    pub warnings: Vec<Diagnostic>,
}
