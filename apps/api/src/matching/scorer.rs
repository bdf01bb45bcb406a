//! Match Scorer — orchestrates one scoring request.
//!
//! Flow: validate → preprocess → extract (LLM) → evaluate (LLM) → post-filter →
//!       finalize score → alternative positions / validation block.
//!
//! Stateless per call and infallible: every failure degrades to a `MatchResult`
//! carrying an explanatory recommendation.

use std::sync::Arc;

use rand::Rng;
use tracing::{error, info, instrument, warn};

use crate::llm_client::{LlmError, TextCompletion};
use crate::matching::evaluator::{evaluate, finalize_score, RawEvaluation, OPTIMIZED_SCORE_FLOOR};
use crate::matching::extractor::{extract, Extraction};
use crate::matching::models::{
    CategoryScores, MatchResult, OptimizationValidation, ScoringMode, MAX_MATCHED_SKILLS,
    MAX_MISSING_SKILLS, MAX_RECOMMENDATIONS,
};
use crate::matching::positions::generate_fallback_positions;
use crate::matching::post_filter::{dedupe_skills, filter_missing_skills, FilterContext};
use crate::matching::preprocess::{preprocess_text, JOB_CHAR_BUDGET, RESUME_CHAR_BUDGET};

/// Job descriptions shorter than this (after trimming) are rejected.
pub const MIN_JOB_DESCRIPTION_CHARS: usize = 20;
/// First-pass scores below this get alternative-position suggestions.
pub const LOW_SCORE_THRESHOLD: u8 = 60;
const MAX_ALTERNATIVE_POSITIONS: usize = 2;

pub const JOB_TOO_SHORT_MESSAGE: &str = "The job description is too short to analyze. \
    Please paste the full job description (at least 20 characters).";
pub const NOT_AVAILABLE_MESSAGE: &str =
    "Resume scoring is not available right now because the analysis service is not configured.";
pub const COULD_NOT_PARSE_MESSAGE: &str = "We could not parse your resume. \
    Please make sure the file contains selectable text and try again.";
pub const UPSTREAM_ERROR_MESSAGE: &str =
    "There was an error analyzing your resume. Please try again in a few minutes.";
pub const INVALID_FORMAT_MESSAGE: &str =
    "There was an error analyzing your resume: the analysis returned an invalid format. Please try again.";

pub struct MatchScorer {
    llm: Option<Arc<dyn TextCompletion>>,
}

impl MatchScorer {
    /// `None` means no API credential is configured; every call then returns
    /// the "not available" result.
    pub fn new(llm: Option<Arc<dyn TextCompletion>>) -> Self {
        Self { llm }
    }

    /// First-pass scoring: realistic 0–100.
    pub async fn score_resume(&self, resume_text: &str, job_description: &str) -> MatchResult {
        self.score(ScoringMode::FirstPass, resume_text, job_description)
            .await
    }

    /// Validation of an already-optimized resume: 85–100 on success.
    pub async fn score_optimized_resume(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> MatchResult {
        self.score(ScoringMode::Optimized, resume_text, job_description)
            .await
    }

    #[instrument(skip_all, fields(mode = mode.label()))]
    async fn score(
        &self,
        mode: ScoringMode,
        resume_text: &str,
        job_description: &str,
    ) -> MatchResult {
        if job_description.trim().chars().count() < MIN_JOB_DESCRIPTION_CHARS {
            info!("Rejecting request: job description too short");
            return rejected(mode, JOB_TOO_SHORT_MESSAGE);
        }

        let Some(llm) = self.llm.as_deref() else {
            warn!("Rejecting request: no completion client configured");
            return rejected(mode, NOT_AVAILABLE_MESSAGE);
        };

        let resume = preprocess_text(resume_text, RESUME_CHAR_BUDGET);
        let job = preprocess_text(job_description, JOB_CHAR_BUDGET);
        info!(
            "Preprocessed input: resume {} chars, job {} chars",
            resume.chars().count(),
            job.chars().count()
        );

        if resume.is_empty() {
            return rejected(mode, COULD_NOT_PARSE_MESSAGE);
        }

        let extraction = extract(llm, &resume, &job).await;
        if extraction.profile.is_empty() {
            warn!("Extraction produced an empty profile");
            return rejected(mode, COULD_NOT_PARSE_MESSAGE);
        }

        let raw = match evaluate(llm, mode, &extraction.profile, &extraction.requirements).await {
            Ok(raw) => raw,
            Err(e) => {
                error!("Match evaluation failed: {e}");
                return evaluation_fallback(mode, &e);
            }
        };

        let result = assemble_result(mode, &extraction, raw, &mut rand::thread_rng());
        info!(
            "Scored {}/100: {} matched, {} missing",
            result.score,
            result.matched_skills.len(),
            result.missing_skills.len()
        );
        result
    }
}

/// Turns a raw evaluation into the final result. Pure apart from `rng`.
pub fn assemble_result<R: Rng>(
    mode: ScoringMode,
    extraction: &Extraction,
    raw: RawEvaluation,
    rng: &mut R,
) -> MatchResult {
    let matched = dedupe_skills(&raw.matched_skills);
    let ctx = FilterContext::new(&extraction.profile, &extraction.requirements);
    let mut missing = filter_missing_skills(&raw.missing_skills, &matched, &ctx);
    missing.truncate(MAX_MISSING_SKILLS);

    let mut matched_skills = matched;
    matched_skills.truncate(MAX_MATCHED_SKILLS);

    let recommendations: Vec<String> = raw
        .recommendations
        .iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .take(MAX_RECOMMENDATIONS)
        .map(str::to_string)
        .collect();

    let score = finalize_score(raw.score, mode, rng);

    let alternative_positions = match mode {
        ScoringMode::FirstPass if score < LOW_SCORE_THRESHOLD => {
            let mut positions = dedupe_skills(&raw.alternative_positions);
            positions.truncate(MAX_ALTERNATIVE_POSITIONS);
            if positions.is_empty() {
                positions = generate_fallback_positions(&extraction.profile.skills);
            }
            Some(positions)
        }
        _ => None,
    };

    let optimization_validation = (mode == ScoringMode::Optimized).then(|| OptimizationValidation {
        validated: true,
        meets_target: score >= OPTIMIZED_SCORE_FLOOR,
        error: None,
    });

    MatchResult {
        score,
        matched_skills,
        missing_skills: missing,
        recommendations,
        category_scores: CategoryScores::from(&raw.category_scores),
        alternative_positions,
        optimization_validation,
        scoring_mode: mode,
    }
}

/// Zero-score result for requests that never reach the evaluator.
fn rejected(mode: ScoringMode, message: &str) -> MatchResult {
    let mut result = MatchResult::degraded(mode, 0, message);
    if mode == ScoringMode::Optimized {
        result.optimization_validation = Some(OptimizationValidation {
            validated: false,
            meets_target: false,
            error: Some(message.to_string()),
        });
    }
    result
}

/// Variant-specific result when the evaluator call fails: 0 for first pass,
/// 85 with an error-flagged validation block for the optimized variant.
fn evaluation_fallback(mode: ScoringMode, err: &LlmError) -> MatchResult {
    let message = if err.is_parse_error() {
        INVALID_FORMAT_MESSAGE
    } else {
        UPSTREAM_ERROR_MESSAGE
    };

    let score = mode.fallback_score();
    let mut result = MatchResult::degraded(mode, score, message);
    if mode == ScoringMode::Optimized {
        result.optimization_validation = Some(OptimizationValidation {
            validated: false,
            meets_target: score >= OPTIMIZED_SCORE_FLOOR,
            error: Some(err.to_string()),
        });
    }
    result
}
