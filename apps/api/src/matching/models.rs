//! Data models shared by every stage of the match-scoring pipeline.

use serde::Serialize;

pub const MAX_PROFILE_SKILLS: usize = 25;
pub const MAX_REQUIRED_SKILLS: usize = 15;
pub const MAX_PREFERRED_SKILLS: usize = 10;
pub const MAX_KEYWORDS: usize = 15;
pub const MAX_MATCHED_SKILLS: usize = 20;
pub const MAX_MISSING_SKILLS: usize = 10;
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Structured extraction of a resume. Built once per resume text, never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedProfile {
    pub summary: String,
    pub skills: Vec<String>,
    pub experience_summary: String,
}

impl ParsedProfile {
    /// An empty profile is the extractor's "could not parse" signal.
    pub fn is_empty(&self) -> bool {
        self.summary.trim().is_empty()
            && self.skills.is_empty()
            && self.experience_summary.trim().is_empty()
    }
}

/// Structured extraction of a job posting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobRequirements {
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub keywords: Vec<String>,
    pub experience_level: String,
}

impl JobRequirements {
    /// Required + preferred + keywords, lower-cased, blanks removed.
    pub fn vocabulary(&self) -> Vec<String> {
        self.required_skills
            .iter()
            .chain(&self.preferred_skills)
            .chain(&self.keywords)
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Realistic scoring anywhere in 0–100.
    FirstPass,
    /// Validation of a resume already tailored by the optimizer. Floor of 85.
    Optimized,
}

impl ScoringMode {
    pub fn label(self) -> &'static str {
        match self {
            ScoringMode::FirstPass => "first_pass",
            ScoringMode::Optimized => "optimized",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryScores {
    pub skills_match: u8,
    pub experience_relevance: u8,
    pub education_certs: u8,
    pub additional_factors: u8,
}

/// Outcome block attached to optimized-variant results only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizationValidation {
    pub validated: bool,
    pub meets_target: bool,
    pub error: Option<String>,
}

/// Scored comparison of one resume against one job description.
/// Produced fresh per call; persistence is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub score: u8,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub category_scores: CategoryScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_positions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimization_validation: Option<OptimizationValidation>,
    pub scoring_mode: ScoringMode,
}

impl MatchResult {
    /// A result with no skills and a single explanatory recommendation.
    pub fn degraded(mode: ScoringMode, score: u8, message: impl Into<String>) -> Self {
        Self {
            score,
            matched_skills: vec![],
            missing_skills: vec![],
            recommendations: vec![message.into()],
            category_scores: CategoryScores::default(),
            alternative_positions: None,
            optimization_validation: None,
            scoring_mode: mode,
        }
    }
}
