//! Interactive input collection.
//!
//! The program has no flags: the resume path, target role, and interview
//! timeline are gathered through prompts. Paths pasted from a file manager
//! often arrive wrapped in double quotes; those are stripped here.

use std::path::PathBuf;

use anyhow::{Context, Result};
use dialoguer::Input;

/// Everything the session needs from the user, collected up front.
#[derive(Debug, Clone)]
pub struct SessionInputs {
    pub resume_path: PathBuf,
    pub job_title: String,
    pub timeline: String,
}

/// Prompts for the resume path, job title, and interview timeline.
///
/// The timeline is free text — the recommended values are a hint only and
/// nothing is validated against them.
pub fn collect_inputs() -> Result<SessionInputs> {
    let raw_path: String = Input::new()
        .with_prompt("Enter the path to your resume (.txt format)")
        .interact_text()
        .context("Failed to read resume path")?;
    let resume_path = PathBuf::from(strip_path_quotes(&raw_path));

    let job_title: String = Input::new()
        .with_prompt("Enter the target job role")
        .interact_text()
        .context("Failed to read job role")?;

    println!("Interview time options: [2 days, 1 week, 2 weeks, 1 month]");
    let timeline: String = Input::new()
        .with_prompt("Enter interview timeline")
        .interact_text()
        .context("Failed to read interview timeline")?;

    Ok(SessionInputs {
        resume_path,
        job_title: job_title.trim().to_string(),
        timeline: timeline.trim().to_string(),
    })
}

/// Trims surrounding whitespace and double quotes from a pasted path.
fn strip_path_quotes(raw: &str) -> &str {
    raw.trim().trim_matches('"')
}
