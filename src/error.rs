use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum UrlGenError {
    #[error("MGnify request failed: {0}")]
    Http(String),

    #[error("MGnify returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("filesystem error: {0}")]
    Filesystem(String),
}
