//! Match Evaluator — second LLM call that scores a `ParsedProfile` against
//! `JobRequirements`, plus the local score finalization rules.

use rand::Rng;
use serde::Deserialize;

use crate::llm_client::prompts::json_system;
use crate::llm_client::{complete_json, LlmError, TextCompletion};
use crate::matching::models::{CategoryScores, JobRequirements, ParsedProfile, ScoringMode};
use crate::matching::prompts::{
    EVALUATE_ROLE, FIRST_PASS_PROMPT_TEMPLATE, OPTIMIZED_PROMPT_TEMPLATE,
};

/// Tailored resumes never score below this.
pub const OPTIMIZED_SCORE_FLOOR: u8 = 85;

/// The exact score that gets nudged upward before display.
const JITTER_TRIGGER: u8 = 85;
const JITTER_MIN: u8 = 5;
const JITTER_MAX: u8 = 9;

impl ScoringMode {
    fn prompt_template(self) -> &'static str {
        match self {
            ScoringMode::FirstPass => FIRST_PASS_PROMPT_TEMPLATE,
            ScoringMode::Optimized => OPTIMIZED_PROMPT_TEMPLATE,
        }
    }

    pub fn score_floor(self) -> Option<u8> {
        match self {
            ScoringMode::FirstPass => None,
            ScoringMode::Optimized => Some(OPTIMIZED_SCORE_FLOOR),
        }
    }

    /// Score reported when the evaluator call fails.
    pub fn fallback_score(self) -> u8 {
        self.score_floor().unwrap_or(0)
    }
}

/// Evaluator output before post-filtering. `score` is required; a response
/// without it is treated as a parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvaluation {
    pub score: f64,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub category_scores: RawCategoryScores,
    #[serde(default)]
    pub alternative_positions: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCategoryScores {
    pub skills_match: f64,
    pub experience_relevance: f64,
    pub education_certs: f64,
    pub additional_factors: f64,
}

impl From<&RawCategoryScores> for CategoryScores {
    fn from(raw: &RawCategoryScores) -> Self {
        CategoryScores {
            skills_match: clamp_score(raw.skills_match),
            experience_relevance: clamp_score(raw.experience_relevance),
            education_certs: clamp_score(raw.education_certs),
            additional_factors: clamp_score(raw.additional_factors),
        }
    }
}

pub async fn evaluate(
    llm: &dyn TextCompletion,
    mode: ScoringMode,
    profile: &ParsedProfile,
    requirements: &JobRequirements,
) -> Result<RawEvaluation, LlmError> {
    let prompt = mode
        .prompt_template()
        .replace("{profile_json}", &serde_json::to_string_pretty(profile)?)
        .replace("{requirements_json}", &serde_json::to_string_pretty(requirements)?);

    complete_json(llm, &json_system(EVALUATE_ROLE), &prompt).await
}

/// Rounds and clamps a model-provided number into 0..=100.
pub fn clamp_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

/// Cosmetic: a score of exactly 85 shows up so often that it is bumped by a
/// uniform 5..=9. Every other score passes through.
pub fn apply_score_jitter<R: Rng>(score: u8, rng: &mut R) -> u8 {
    if score == JITTER_TRIGGER {
        score + rng.gen_range(JITTER_MIN..=JITTER_MAX)
    } else {
        score
    }
}

/// clamp → jitter → variant floor → cap at 100.
pub fn finalize_score<R: Rng>(raw: f64, mode: ScoringMode, rng: &mut R) -> u8 {
    let score = apply_score_jitter(clamp_score(raw), rng);
    let score = mode.score_floor().map_or(score, |floor| score.max(floor));
    score.min(100)
}
