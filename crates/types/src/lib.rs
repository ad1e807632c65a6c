pub mod diagnostics;
pub mod document;
pub mod geometry;

pub use diagnostics::{Diagnostic, DiagnosticLevel, Diagnostics};
pub use document::{
    Block, BlockContent, BlockStyles, BlockType, Document, GlobalStyles, RenderedDocument,
    DEFAULT_BACKGROUND_COLOR, DEFAULT_CONTENT_WIDTH, DEFAULT_FONT_FAMILY, DEFAULT_PRIMARY_COLOR,
    TRACKING_PIXEL_TOKEN,
};
pub use geometry::Position;
