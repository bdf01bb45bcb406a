//! Combined Extractor — one LLM call that turns (resume, job) text into a
//! `ParsedProfile` and `JobRequirements`.
//!
//! Never fails: upstream or parse errors degrade to empty defaults, which the
//! scorer reports as "could not parse".

use serde::Deserialize;
use tracing::{debug, warn};

use crate::llm_client::prompts::json_system;
use crate::llm_client::{complete_json, LlmError, TextCompletion};
use crate::matching::models::{
    JobRequirements, ParsedProfile, MAX_KEYWORDS, MAX_PREFERRED_SKILLS, MAX_PROFILE_SKILLS,
    MAX_REQUIRED_SKILLS,
};
use crate::matching::prompts::{EXTRACT_PROMPT_TEMPLATE, EXTRACT_ROLE};

/// Soft skills the extractor tends to under-report.
pub const SOFT_SKILL_VOCABULARY: &[&str] = &[
    "Communication",
    "Teamwork",
    "Leadership",
    "Problem Solving",
    "Time Management",
    "Attention to Detail",
    "Client Relationship Management",
    "Planning",
    "Organizational Skills",
    "Multitasking",
    "Adaptability",
    "Critical Thinking",
    "Collaboration",
    "Project Coordination",
];

/// Below this many extracted skills the backstop scan always runs.
const MIN_EXTRACTED_SKILLS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub profile: ParsedProfile,
    pub requirements: JobRequirements,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawExtraction {
    resume: RawResume,
    job: RawJob,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawResume {
    summary: String,
    skills: Vec<String>,
    experience: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawJob {
    required_skills: Vec<String>,
    preferred_skills: Vec<String>,
    keywords: Vec<String>,
    experience_level: String,
}

impl From<RawExtraction> for Extraction {
    fn from(raw: RawExtraction) -> Self {
        Extraction {
            profile: ParsedProfile {
                summary: raw.resume.summary.trim().to_string(),
                skills: clean_list(raw.resume.skills, MAX_PROFILE_SKILLS),
                experience_summary: raw.resume.experience.trim().to_string(),
            },
            requirements: JobRequirements {
                required_skills: clean_list(raw.job.required_skills, MAX_REQUIRED_SKILLS),
                preferred_skills: clean_list(raw.job.preferred_skills, MAX_PREFERRED_SKILLS),
                keywords: clean_list(raw.job.keywords, MAX_KEYWORDS),
                experience_level: raw.job.experience_level.trim().to_string(),
            },
        }
    }
}

/// Extracts profile and requirements from already-preprocessed text.
pub async fn extract(llm: &dyn TextCompletion, resume_text: &str, job_text: &str) -> Extraction {
    match try_extract(llm, resume_text, job_text).await {
        Ok(mut extraction) => {
            let before = extraction.profile.skills.len();
            apply_soft_skill_backstop(&mut extraction.profile.skills, resume_text);
            debug!(
                "Extracted {} skills ({} from backstop), {} job vocabulary terms",
                extraction.profile.skills.len(),
                extraction.profile.skills.len() - before,
                extraction.requirements.vocabulary().len()
            );
            extraction
        }
        Err(e) => {
            warn!("Combined extraction failed, using empty defaults: {e}");
            Extraction::default()
        }
    }
}

async fn try_extract(
    llm: &dyn TextCompletion,
    resume_text: &str,
    job_text: &str,
) -> Result<Extraction, LlmError> {
    let prompt = EXTRACT_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_text}", job_text);
    let raw: RawExtraction = complete_json(llm, &json_system(EXTRACT_ROLE), &prompt).await?;
    Ok(raw.into())
}

/// Appends soft skills found in the resume text when the extractor returned
/// too few skills or none from the soft-skill vocabulary.
pub fn apply_soft_skill_backstop(skills: &mut Vec<String>, resume_text: &str) {
    let has_soft_skill = skills.iter().any(|skill| {
        let skill = skill.to_lowercase();
        SOFT_SKILL_VOCABULARY
            .iter()
            .any(|term| skill.contains(&term.to_lowercase()))
    });

    if skills.len() >= MIN_EXTRACTED_SKILLS && has_soft_skill {
        return;
    }

    let text = resume_text.to_lowercase();
    for term in SOFT_SKILL_VOCABULARY {
        let term_lower = term.to_lowercase();
        let found = term_lower.split_whitespace().all(|word| text.contains(word));
        if !found {
            continue;
        }
        let already_listed = skills
            .iter()
            .any(|s| overlaps(&s.to_lowercase(), &term_lower));
        if !already_listed {
            skills.push((*term).to_string());
        }
    }

    skills.truncate(MAX_PROFILE_SKILLS);
}

/// Substring either way; very short strings ("ai", "go") only count as the container.
fn overlaps(a: &str, b: &str) -> bool {
    const MIN_INNER: usize = 4;
    (b.len() >= MIN_INNER && a.contains(b)) || (a.len() >= MIN_INNER && b.contains(a))
}

/// Trims entries, drops blanks and case-insensitive repeats, then caps the list.
fn clean_list(items: Vec<String>, cap: usize) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && seen.insert(s.to_lowercase()))
        .take(cap)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::mock::ScriptedCompletion;
    use serde_json::json;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_extract_maps_response_and_caps_lists() {
        let many: Vec<String> = (0..40).map(|i| format!("Skill {i}")).collect();
        let response = json!({
            "resume": {
                "summary": " Backend engineer ",
                "skills": many,
                "experience": "Built payment systems"
            },
            "job": {
                "required_skills": ["Rust", "rust", "", "SQL"],
                "preferred_skills": ["Kafka"],
                "keywords": ["payments"],
                "experience_level": "senior"
            }
        });
        let llm = ScriptedCompletion::new(vec![Ok(response.to_string())]);

        let extraction = extract(&llm, "resume text", "job text").await;

        assert_eq!(extraction.profile.summary, "Backend engineer");
        assert_eq!(extraction.profile.skills.len(), MAX_PROFILE_SKILLS);
        assert_eq!(extraction.requirements.required_skills, skills(&["Rust", "SQL"]));
        assert_eq!(extraction.requirements.experience_level, "senior");
        assert_eq!(llm.calls(), 1);
        assert!(llm.prompts()[0].contains("resume text"));
        assert!(llm.prompts()[0].contains("job text"));
    }

    #[tokio::test]
    async fn test_extract_upstream_failure_returns_empty_defaults() {
        let llm = ScriptedCompletion::new(vec![Err(LlmError::Api {
            status: 500,
            message: "down".to_string(),
        })]);
        let extraction = extract(&llm, "resume", "job").await;
        assert!(extraction.profile.is_empty());
        assert_eq!(extraction.requirements, JobRequirements::default());
    }

    #[tokio::test]
    async fn test_extract_unparsable_output_returns_empty_defaults() {
        let llm = ScriptedCompletion::new(vec![Ok("not json at all".to_string())]);
        let extraction = extract(&llm, "resume", "job").await;
        assert_eq!(extraction, Extraction::default());
    }

    #[tokio::test]
    async fn test_extract_tolerates_missing_sections() {
        let llm = ScriptedCompletion::new(vec![Ok(r#"{"resume": {"skills": ["Go"]}}"#.to_string())]);
        let extraction = extract(&llm, "Go developer", "job").await;
        assert!(extraction.profile.skills.contains(&"Go".to_string()));
        assert!(extraction.requirements.vocabulary().is_empty());
    }

    #[test]
    fn test_backstop_adds_soft_skills_found_in_text() {
        let mut list = skills(&["Rust", "SQL"]);
        let text = "Led cross-team planning with strong communication and leadership.";
        apply_soft_skill_backstop(&mut list, text);
        assert!(list.contains(&"Communication".to_string()));
        assert!(list.contains(&"Leadership".to_string()));
        assert!(list.contains(&"Planning".to_string()));
        assert!(!list.contains(&"Teamwork".to_string()));
    }

    #[test]
    fn test_backstop_requires_every_word_of_phrase() {
        let mut list = skills(&["Rust"]);
        apply_soft_skill_backstop(&mut list, "time spent on code review");
        assert!(!list.contains(&"Time Management".to_string()));

        apply_soft_skill_backstop(&mut list, "management of time across projects");
        assert!(list.contains(&"Time Management".to_string()));
    }

    #[test]
    fn test_backstop_skips_terms_already_present_by_substring() {
        let mut list = skills(&["Excellent communication skills"]);
        apply_soft_skill_backstop(&mut list, "communication");
        assert_eq!(list, skills(&["Excellent communication skills"]));
    }

    #[test]
    fn test_backstop_skipped_when_enough_skills_including_soft() {
        let mut list = skills(&["Rust", "SQL", "Docker", "AWS", "Teamwork"]);
        apply_soft_skill_backstop(&mut list, "leadership and communication");
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_backstop_runs_when_many_skills_but_no_soft_skill() {
        let mut list = skills(&["Rust", "SQL", "Docker", "AWS", "Terraform"]);
        apply_soft_skill_backstop(&mut list, "mentored juniors and showed leadership");
        assert!(list.contains(&"Leadership".to_string()));
    }

    #[test]
    fn test_backstop_short_skill_does_not_block_term() {
        let mut list = skills(&["AI"]);
        apply_soft_skill_backstop(&mut list, "known for attention to detail");
        assert!(list.contains(&"Attention to Detail".to_string()));
    }

    #[test]
    fn test_backstop_respects_skill_cap() {
        let mut list: Vec<String> = (0..25).map(|i| format!("Tool {i}")).collect();
        apply_soft_skill_backstop(&mut list, "communication leadership planning");
        assert_eq!(list.len(), MAX_PROFILE_SKILLS);
    }
}
