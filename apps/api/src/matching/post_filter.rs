//! Post-Filter — reconciles the evaluator's raw missing-skill list with the
//! matched skills and the job's own vocabulary.
//!
//! A candidate is dropped when it is not a job skill, when it is an experience
//! requirement the resume already shows, when it is a compound phrase whose
//! every component is equivalent to a matched skill, or when it is equivalent
//! to a matched skill.

use std::collections::HashSet;

use tracing::debug;

use crate::matching::equivalence::are_equivalent_skills;
use crate::matching::models::{JobRequirements, ParsedProfile};

/// Words that say nothing about *which* experience is required.
const EXPERIENCE_FILLER: &[&str] = &[
    "experience",
    "experienced",
    "qualification",
    "qualifications",
    "qualified",
    "years",
    "year",
    "with",
    "and",
    "the",
    "for",
    "strong",
    "proven",
    "relevant",
    "demonstrated",
    "working",
    "hands",
    "minimum",
    "least",
    "plus",
    "similar",
    "related",
    "previous",
    "prior",
    "solid",
    "extensive",
    "knowledge",
    "background",
    "must",
    "have",
    "required",
    "preferred",
    "good",
    "excellent",
];

/// Lead-ins stripped from the front of each compound component.
const COMPONENT_PREFIXES: &[&str] = &[
    "knowledge of",
    "experience with",
    "experience in",
    "understanding of",
    "proficiency in",
    "proficiency with",
    "familiarity with",
    "expertise in",
    "skills in",
    "such as",
    "including",
];

const MIN_TOKEN_LEN: usize = 3;

/// Resume and job context the filter rules consult.
#[derive(Debug, Clone, Default)]
pub struct FilterContext {
    /// Required + preferred + keywords, lower-cased.
    pub vocabulary: Vec<String>,
    pub experience_summary: String,
    pub resume_skills: Vec<String>,
}

impl FilterContext {
    pub fn new(profile: &ParsedProfile, requirements: &JobRequirements) -> Self {
        Self {
            vocabulary: requirements.vocabulary(),
            experience_summary: profile.experience_summary.to_lowercase(),
            resume_skills: profile.skills.iter().map(|s| s.to_lowercase()).collect(),
        }
    }
}

/// Returns the candidates that are genuinely missing, in their original order.
pub fn filter_missing_skills(
    raw_missing: &[String],
    matched: &[String],
    ctx: &FilterContext,
) -> Vec<String> {
    let matched_lower: Vec<String> = matched.iter().map(|m| m.trim().to_lowercase()).collect();
    let mut kept: Vec<String> = Vec::new();

    for candidate in raw_missing {
        let candidate = candidate.trim();
        let lower = candidate.to_lowercase();
        if lower.is_empty() {
            continue;
        }

        if !is_job_skill(&lower, &ctx.vocabulary) {
            debug!("Dropping '{candidate}': not in job vocabulary");
            continue;
        }

        if is_experience_requirement_met(&lower, &matched_lower, ctx) {
            debug!("Dropping '{candidate}': experience requirement met");
            continue;
        }

        let satisfied = match compound_components(&lower) {
            Some(components) => {
                is_compound_satisfied(&components, &matched_lower)
                    || matched_lower.iter().any(|m| *m == lower)
            }
            None => matched.iter().any(|m| are_equivalent_skills(candidate, m)),
        };
        if satisfied {
            debug!("Dropping '{candidate}': already matched");
            continue;
        }

        if kept.iter().any(|k| are_equivalent_skills(k, candidate)) {
            continue;
        }
        kept.push(candidate.to_string());
    }

    kept
}

/// Rule 1: the candidate fuzzy-matches some job vocabulary entry.
/// An empty vocabulary gives no basis for rejection.
pub fn is_job_skill(candidate: &str, vocabulary: &[String]) -> bool {
    if vocabulary.is_empty() {
        return true;
    }
    vocabulary
        .iter()
        .any(|v| !v.is_empty() && (v.contains(candidate) || candidate.contains(v.as_str())))
}

/// Rule 2: "5+ years experience in client facing roles" is met when any of its
/// keyword tokens shows up in the experience narrative, the resume skills, or a
/// matched skill.
pub fn is_experience_requirement_met(
    candidate: &str,
    matched_lower: &[String],
    ctx: &FilterContext,
) -> bool {
    if !candidate.contains("experience") && !candidate.contains("qualification") {
        return false;
    }

    let tokens: Vec<&str> = candidate
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN && !EXPERIENCE_FILLER.contains(t))
        .collect();

    tokens.iter().any(|token| {
        ctx.experience_summary.contains(token)
            || ctx.resume_skills.iter().any(|s| s.contains(token))
            || matched_lower.iter().any(|m| m.contains(token))
    })
}

/// Rule 3 split: "knowledge of icao, cap168 and easa design standards" →
/// `["icao", "cap168", "easa design standards"]`. `None` when not a list.
pub fn compound_components(candidate: &str) -> Option<Vec<String>> {
    let joined = candidate.replace(" and ", ",").replace(" or ", ",");
    let components: Vec<String> = joined
        .split([',', '/', '(', ')', ';'])
        .map(strip_component_prefix)
        .filter(|c| c.chars().count() >= 2)
        .map(str::to_string)
        .collect();

    (components.len() >= 2).then_some(components)
}

fn strip_component_prefix(part: &str) -> &str {
    let part = part.trim();
    COMPONENT_PREFIXES
        .iter()
        .find_map(|prefix| part.strip_prefix(prefix))
        .map(str::trim)
        .unwrap_or(part)
}

/// Every component must be equivalent to some matched skill. A component that
/// shares only one significant word with a matched skill ("easa design standards"
/// vs "icao standards") is still a gap.
fn is_compound_satisfied(components: &[String], matched_lower: &[String]) -> bool {
    components.iter().all(|component| {
        matched_lower
            .iter()
            .any(|m| are_equivalent_skills(component, m))
    })
}

/// Trims, drops blanks and case-insensitive repeats, preserving first occurrence.
pub fn dedupe_skills(skills: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && seen.insert(s.to_lowercase()))
        .map(str::to_string)
        .collect()
}
