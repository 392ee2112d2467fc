//! Resume intake.
//!
//! Reads the source resume once at startup. The file is plain text, decoded
//! as UTF-8 with invalid byte sequences dropped (not replaced), matching how
//! user-exported resumes with stray encoding damage are tolerated.

use std::path::Path;

use tracing::{debug, warn};

use crate::errors::AppError;

/// The resume as read from disk: an immutable block of text, never mutated
/// after load and discarded at process exit.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    text: String,
}

impl ResumeDocument {
    /// Loads the resume from `path`.
    ///
    /// Fails with [`AppError::ResumeNotFound`] before any generation request
    /// is issued when the path does not exist, and with a validation error
    /// when the file decodes to nothing but whitespace.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Err(AppError::ResumeNotFound(path.to_path_buf()));
        }

        let bytes = std::fs::read(path)?;
        let text = decode_dropping_invalid(&bytes);

        if text.len() < bytes.len() {
            warn!(
                "dropped {} invalid UTF-8 bytes from {}",
                bytes.len() - text.len(),
                path.display()
            );
        }

        if text.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "Resume file is empty: {}",
                path.display()
            )));
        }

        debug!("loaded resume: {} bytes", text.len());

        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Decodes `bytes` as UTF-8, silently dropping invalid sequences.
///
/// `String::from_utf8_lossy` would substitute U+FFFD; intake instead skips the
/// offending bytes entirely so downstream text contains only what was decoded.
fn decode_dropping_invalid(mut bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());

    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                text.push_str(valid);
                break;
            }
            Err(err) => {
                let (valid, rest) = bytes.split_at(err.valid_up_to());
                // the prefix up to valid_up_to always decodes
                text.push_str(std::str::from_utf8(valid).unwrap_or_default());
                match err.error_len() {
                    Some(len) => bytes = &rest[len..],
                    // Truncated sequence at end of input
                    None => break,
                }
            }
        }
    }

    text
}
