use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Formatting error while assembling document: {0}")]
    Format(#[from] std::fmt::Error),
}
