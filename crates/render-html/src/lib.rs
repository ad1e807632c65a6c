//! Primary nested-table HTML backend.
//!
//! Produces the email-safe rendition of a planned newsletter layout:
//! self-contained per-block fragments (inline styles only), a nested-table
//! shell with Outlook/MSO compatibility headers, and the plain-text
//! alternate part.

mod assemble;
mod blocks;
mod error;
mod text;
pub mod util;

pub use assemble::assemble_document;
pub use blocks::{
    BUTTON_PLACEHOLDER, HEADER_PLACEHOLDER, IMAGE_PADDING_ALLOWANCE, IMAGE_PLACEHOLDER,
    UNKNOWN_PLACEHOLDER, render_block,
};
pub use error::RenderError;
pub use text::{block_text, render_text_content};
