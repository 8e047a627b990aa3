use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("element `{0}` not found")]
    MissingElement(&'static str),
    #[error("`{0}` is not the expected element type")]
    NotAnElement(&'static str),
    #[error("gpu setup failed: {0}")]
    Gpu(String),
}
