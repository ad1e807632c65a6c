//! Integration layer: the render pipeline and its degradation tiers.

pub mod error;
pub mod fallback;
pub mod pipeline;

pub use error::PipelineError;
pub use fallback::{ERROR_NOTICE, render_static};
pub use pipeline::{Pipeline, RenderBackend};
