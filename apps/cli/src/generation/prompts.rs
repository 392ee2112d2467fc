// All LLM prompt constants for the generation module.
// Builders are pure string formatting: no I/O, no validation, and identical
// inputs always produce byte-identical prompts.

/// Roadmap prompt template.
/// Replace: `{job_title}`, `{interview_timeline}`, `{resume_text}`.
///
/// The day/week granularity rules are advisory text for the model. The four
/// recognized timeline values ("2 days", "1 week", "2 weeks", "1 month") are
/// never parsed locally; an unrecognized value is passed through verbatim.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"You are an expert career coach. A person is preparing for the role of {job_title} and has an interview scheduled in {interview_timeline}.
Their resume is:
"""
{resume_text}
"""

Based on this information, create a personalized learning roadmap only for the given interview timeline. Include:
- If interview is in 2 days, give roadmap for day 1 and day 2, else if interview is in 1 week, give roadmap for day 1 to day 7, else if interview is in 2 weeks, give roadmap for week 1 and week 2, else if interview is in 1 month, give roadmap for week 1 to week 4
- Roadmap must be limited to the timeline
- Weekly goals (strictly if timeline allows)
- Include what the user must do on each day if day based and each week if week based
- Prioritized skill areas
- One project per week (if timeline allows)

Only show the roadmap. Do not greet or explain anything. Avoid phrases like "here is your roadmap" or "let me know...".
"#;

/// Resume-tailoring prompt template.
/// Replace: `{job_title}`, `{resume_text}`.
pub const TAILOR_PROMPT_TEMPLATE: &str = r#"You are a resume generation engine.

Given the resume below and the target job role **{job_title}**, generate a tailored, professional resume that includes **only the most relevant skills, experiences, and projects** for this role. Eliminate all unrelated content.

Strictly follow these rules:
- Write in the **first person** as if the candidate is speaking.
- Format as a **clean, bullet-pointed resume**
- Do NOT include any chatbot-like phrases such as:
  - "Here's your resume"
  - "Let me know if..."
  - "As a resume assistant"
  - Or any explanation
- Only include:
  - Name
  - Contact Info (if available)
  - Short summary (relevant to role)
  - Relevant Skills
  - Relevant Experience
  - Relevant Projects

Output ONLY the formatted resume, ready to be submitted.

Resume:
"""{resume_text}""""#;

/// Builds the roadmap prompt for the given resume, role, and timeline.
pub fn build_roadmap_prompt(resume_text: &str, job_title: &str, timeline: &str) -> String {
    ROADMAP_PROMPT_TEMPLATE
        .replace("{job_title}", job_title)
        .replace("{interview_timeline}", timeline)
        .replace("{resume_text}", resume_text)
}

/// Builds the resume-tailoring prompt for the given resume and role.
pub fn build_tailor_prompt(resume_text: &str, job_title: &str) -> String {
    TAILOR_PROMPT_TEMPLATE
        .replace("{job_title}", job_title)
        .replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roadmap_prompt_is_deterministic() {
        let a = build_roadmap_prompt("resume body", "Backend Engineer", "2 weeks");
        let b = build_roadmap_prompt("resume body", "Backend Engineer", "2 weeks");
        assert_eq!(a, b, "identical inputs must yield byte-identical prompts");
    }

    #[test]
    fn test_roadmap_prompt_substitutes_all_placeholders() {
        let prompt = build_roadmap_prompt("Worked at Z", "Data Scientist", "1 month");
        assert!(prompt.contains("the role of Data Scientist"));
        assert!(prompt.contains("scheduled in 1 month"));
        assert!(prompt.contains("Worked at Z"));
        assert!(!prompt.contains("{job_title}"));
        assert!(!prompt.contains("{interview_timeline}"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn test_roadmap_prompt_passes_unrecognized_timeline_verbatim() {
        // Timeline values outside the recommended set are not validated.
        let prompt = build_roadmap_prompt("r", "j", "3 fortnights");
        assert!(prompt.contains("scheduled in 3 fortnights"));
    }

    #[test]
    fn test_tailor_prompt_substitutes_all_placeholders() {
        let prompt = build_tailor_prompt("Built a tool", "SRE");
        assert!(prompt.contains("**SRE**"));
        assert!(prompt.contains(r#""""Built a tool""""#));
        assert!(!prompt.contains("{job_title}"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn test_tailor_prompt_is_deterministic() {
        let a = build_tailor_prompt("resume body", "SRE");
        let b = build_tailor_prompt("resume body", "SRE");
        assert_eq!(a, b);
    }
}
