use std::path::PathBuf;

use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// `main` reports the message and exits non-zero; nothing is retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Resume file not found: {}", .0.display())]
    ResumeNotFound(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("PDF error: {0}")]
    Pdf(String),
}
