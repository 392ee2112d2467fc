// Roadmap and resume-tailoring generation.
// All LLM calls go through llm_client — no direct Cohere calls here.

pub mod prompts;

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::GenerationService;

// Call parameters for the two generation requests. The roadmap runs slightly
// hotter and shorter than the tailoring pass.
const ROADMAP_MAX_TOKENS: u32 = 800;
const ROADMAP_TEMPERATURE: f32 = 0.6;
const TAILOR_MAX_TOKENS: u32 = 1000;
const TAILOR_TEMPERATURE: f32 = 0.5;

/// Generates a personalized study roadmap scoped to the interview timeline.
pub async fn generate_roadmap(
    llm: &dyn GenerationService,
    resume_text: &str,
    job_title: &str,
    timeline: &str,
) -> Result<String, AppError> {
    info!("Generating roadmap for role '{job_title}' (timeline: {timeline})");

    let prompt = prompts::build_roadmap_prompt(resume_text, job_title, timeline);
    let roadmap = llm
        .generate(&prompt, ROADMAP_MAX_TOKENS, ROADMAP_TEMPERATURE)
        .await?;

    Ok(roadmap)
}

/// Generates a tailored resume for the target role.
pub async fn generate_tailored_resume(
    llm: &dyn GenerationService,
    resume_text: &str,
    job_title: &str,
) -> Result<String, AppError> {
    info!("Tailoring resume for role '{job_title}'");

    let prompt = prompts::build_tailor_prompt(resume_text, job_title);
    let tailored = llm
        .generate(&prompt, TAILOR_MAX_TOKENS, TAILOR_TEMPERATURE)
        .await?;

    Ok(tailored)
}
