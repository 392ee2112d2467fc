//! Session orchestration.
//!
//! Flow: load resume → roadmap request → tailoring request → print roadmap →
//! sanitize → layout → write PDF. The two generation calls run sequentially
//! and the roadmap is always printed before the resume file is written. Any
//! generation or output error propagates and ends the run; nothing is retried.

use std::path::Path;

use tracing::info;

use crate::cli::SessionInputs;
use crate::errors::AppError;
use crate::generation;
use crate::layout::{default_page_config, LayoutEngine};
use crate::llm_client::GenerationService;
use crate::render;
use crate::resume::ResumeDocument;
use crate::sanitize::sanitize;

/// The tailored resume is always written here, in the working directory.
pub const OUTPUT_FILENAME: &str = "personalized_resume.pdf";

/// Runs one full generation session.
pub async fn run_session(
    llm: &dyn GenerationService,
    inputs: &SessionInputs,
    output_path: &Path,
) -> Result<(), AppError> {
    let resume = ResumeDocument::load(&inputs.resume_path)?;

    println!("🧠 Generating roadmap...");
    let roadmap = generation::generate_roadmap(
        llm,
        resume.text(),
        &inputs.job_title,
        &inputs.timeline,
    )
    .await?;

    println!("📄 Tailoring resume...");
    let tailored =
        generation::generate_tailored_resume(llm, resume.text(), &inputs.job_title).await?;

    println!("\n📈 Personalized Roadmap:\n");
    println!("{roadmap}");

    let cleaned = sanitize(&tailored);
    let config = default_page_config();
    let document = LayoutEngine::new(config.clone()).render(&cleaned);
    info!(
        "laid out tailored resume: {} page(s), {} block(s)",
        document.page_count(),
        document.blocks().count()
    );

    render::write_pdf(&document, &config, output_path)?;

    println!("✅ Personalized resume saved as: {}", output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Returns scripted responses in order and records every prompt.
    struct ScriptedService {
        prompts: Mutex<Vec<String>>,
        responses: Mutex<Vec<Result<String, LlmError>>>,
    }

    impl ScriptedService {
        fn new(responses: Vec<Result<String, LlmError>>) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                responses: Mutex::new(responses),
            }
        }

        fn recorded_prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GenerationService for ScriptedService {
        async fn generate(&self, prompt: &str, _: u32, _: f32) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.responses.lock().unwrap().remove(0)
        }
    }

    fn write_resume(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("resume.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn inputs(resume_path: PathBuf) -> SessionInputs {
        SessionInputs {
            resume_path,
            job_title: "Backend Engineer".to_string(),
            timeline: "2 weeks".to_string(),
        }
    }

    #[tokio::test]
    async fn test_happy_path_writes_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let resume_path = write_resume(dir.path(), "Skills:\n- Rust\n");
        let output_path = dir.path().join(OUTPUT_FILENAME);

        let service = ScriptedService::new(vec![
            Ok("Day 1: review Rust fundamentals".to_string()),
            Ok("Summary:\n- Built café systems • fast\n".to_string()),
        ]);

        run_session(&service, &inputs(resume_path), &output_path)
            .await
            .unwrap();

        let bytes = std::fs::read(&output_path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_roadmap_request_precedes_tailoring_request() {
        let dir = tempfile::tempdir().unwrap();
        let resume_path = write_resume(dir.path(), "Worked at Z\n");
        let output_path = dir.path().join(OUTPUT_FILENAME);

        let service = ScriptedService::new(vec![
            Ok("roadmap".to_string()),
            Ok("tailored".to_string()),
        ]);

        run_session(&service, &inputs(resume_path), &output_path)
            .await
            .unwrap();

        let prompts = service.recorded_prompts();
        assert_eq!(prompts.len(), 2);
        assert!(
            prompts[0].contains("expert career coach"),
            "first call must be the roadmap request"
        );
        assert!(
            prompts[1].contains("resume generation engine"),
            "second call must be the tailoring request"
        );
        assert!(prompts[0].contains("2 weeks"));
    }

    #[tokio::test]
    async fn test_missing_resume_aborts_before_any_generation() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join(OUTPUT_FILENAME);

        let service = ScriptedService::new(vec![]);
        let err = run_session(
            &service,
            &inputs(dir.path().join("does_not_exist.txt")),
            &output_path,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::ResumeNotFound(_)));
        assert!(service.recorded_prompts().is_empty());
        assert!(!output_path.exists());
    }

    #[tokio::test]
    async fn test_generation_failure_propagates_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let resume_path = write_resume(dir.path(), "Worked at Z\n");
        let output_path = dir.path().join(OUTPUT_FILENAME);

        let service = ScriptedService::new(vec![Err(LlmError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        })]);

        let err = run_session(&service, &inputs(resume_path), &output_path)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Llm(_)));
        assert!(!output_path.exists(), "no partial output on failure");
    }
}
