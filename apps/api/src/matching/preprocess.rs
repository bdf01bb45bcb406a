//! Text preprocessing — whitespace collapse, PII redaction, noise removal, truncation.
//!
//! Applied to both resume and job text before anything leaves the process.

use std::sync::LazyLock;

use regex::Regex;

/// Character budget for resume text sent to the extractor.
pub const RESUME_CHAR_BUDGET: usize = 6000;
/// Character budget for job description text sent to the extractor.
pub const JOB_CHAR_BUDGET: usize = 3000;

const MAX_NORMALIZE_PASSES: usize = 8;

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:https?://|www\.)\S+|\b(?:linkedin|github)\.com/\S*").unwrap()
});

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+\d{1,3}[\s.-]?)?(?:\(\d{3}\)|\d{3})[\s.-]?\d{3}[\s.-]?\d{4}\b").unwrap()
});

// Keeps word characters, whitespace and list punctuation: - . , ; : ( ) [ ]
static NOISE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s\-.,;:()\[\]]").unwrap());

static HORIZONTAL_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\S\n]+").unwrap());

static LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\n\s*").unwrap());

/// Normalizes `raw` and truncates it to at most `max_chars` characters.
///
/// Pure and idempotent: `preprocess_text(&preprocess_text(t, n), n) == preprocess_text(t, n)`.
pub fn preprocess_text(raw: &str, max_chars: usize) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    // Stripping noise can join digits into a fresh phone pattern, and cutting at the
    // budget can expose one too, so normalize and truncate together to a fixed point.
    let mut text = truncate_chars(&normalize_once(raw), max_chars);
    for _ in 1..MAX_NORMALIZE_PASSES {
        let next = truncate_chars(&normalize_once(&text), max_chars);
        if next == text {
            break;
        }
        text = next;
    }
    text
}

fn normalize_once(text: &str) -> String {
    let text = collapse_whitespace(text);
    let text = redact_pii(&text);
    let text = NOISE.replace_all(&text, "");
    collapse_whitespace(&text).trim().to_string()
}

fn collapse_whitespace(text: &str) -> String {
    let text = HORIZONTAL_SPACE.replace_all(text, " ");
    LINE_BREAKS.replace_all(&text, "\n").into_owned()
}

/// Replaces URLs, emails and phone numbers with literal placeholder tokens.
pub fn redact_pii(text: &str) -> String {
    let text = URL.replace_all(text, "[URL]");
    let text = EMAIL.replace_all(&text, "[EMAIL]");
    PHONE.replace_all(&text, "[PHONE]").into_owned()
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    truncated.trim().to_string()
}
