//! Layered skill equivalence — decides whether two skill strings name the same thing.
//!
//! Rules, from strictest to loosest:
//! 1. direct: equal, or one contains the other
//! 2. normalized: same after removing whitespace or all non-alphanumerics
//! 3. significant-word overlap: ≥2 shared significant words on two multi-word skills
//! 4. synonym table: known equivalent phrasings
//!
//! All predicates are case-insensitive and treat an empty side as "no match".

const STOPWORDS: &[&str] = &["and", "the", "of", "for", "with", "both"];

/// Words of this many characters or fewer are never significant.
const MAX_INSIGNIFICANT_LEN: usize = 3;
const MIN_SHARED_WORDS: usize = 2;
/// "C++" and "C#" both reduce to "c"; single characters say nothing.
const MIN_ALNUM_LEN: usize = 2;

/// Pairs of phrasings that mean the same skill. Every word group on one side
/// must appear in one skill and every group on the other side in the other.
const SYNONYMS: &[(&[&str], &[&str])] = &[
    (&["client facing"], &["client relationship"]),
    (&["communication"], &["communication skills"]),
    (&["planning", "organisational"], &["planning", "organizational"]),
    (&["organisational"], &["organizational"]),
    (&["teamwork"], &["team player"]),
    (&["attention to detail"], &["detail oriented"]),
    (&["customer service"], &["client service"]),
];

pub fn are_equivalent_skills(a: &str, b: &str) -> bool {
    let (a, b) = (normalize(a), normalize(b));
    if a.is_empty() || b.is_empty() {
        return false;
    }

    contains_either(&a, &b)
        || normalized_match(&a, &b)
        || word_overlap(&a, &b)
        || known_synonym(&a, &b)
}

// The public predicates accept raw skill strings and normalize them themselves;
// the private helpers below expect trimmed, lower-cased input.

pub fn is_direct_match(a: &str, b: &str) -> bool {
    contains_either(&normalize(a), &normalize(b))
}

/// Handles punctuation and spacing variants: "problem-solving" vs "problem solving".
pub fn is_normalized_match(a: &str, b: &str) -> bool {
    normalized_match(&normalize(a), &normalize(b))
}

pub fn has_significant_word_overlap(a: &str, b: &str) -> bool {
    word_overlap(&normalize(a), &normalize(b))
}

pub fn is_known_synonym(a: &str, b: &str) -> bool {
    known_synonym(&normalize(a), &normalize(b))
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn normalized_match(a: &str, b: &str) -> bool {
    fn without_space(s: &str) -> String {
        s.chars().filter(|c| !c.is_whitespace()).collect()
    }
    fn alnum_only(s: &str) -> String {
        s.chars().filter(|c| c.is_alphanumeric()).collect()
    }

    let (alnum_a, alnum_b) = (alnum_only(a), alnum_only(b));
    contains_either(&without_space(a), &without_space(b))
        || (alnum_a.chars().count() >= MIN_ALNUM_LEN
            && alnum_b.chars().count() >= MIN_ALNUM_LEN
            && contains_either(&alnum_a, &alnum_b))
}

fn word_overlap(a: &str, b: &str) -> bool {
    let words_a = significant_words(a);
    let words_b = significant_words(b);
    if words_a.len() < MIN_SHARED_WORDS || words_b.len() < MIN_SHARED_WORDS {
        return false;
    }

    fn shared(from: &[String], to: &[String]) -> usize {
        from.iter()
            .filter(|w| to.iter().any(|other| contains_either(w, other)))
            .count()
    }
    shared(&words_a, &words_b).min(shared(&words_b, &words_a)) >= MIN_SHARED_WORDS
}

fn known_synonym(a: &str, b: &str) -> bool {
    fn side(text: &str, groups: &[&str]) -> bool {
        groups.iter().all(|g| text.contains(g))
    }
    let a = spaced_words(a);
    let b = spaced_words(b);

    SYNONYMS.iter().any(|&(left, right)| {
        (side(&a, left) && side(&b, right)) || (side(&a, right) && side(&b, left))
    })
}

/// Lower-cased alphanumeric words longer than 3 chars, stopwords removed, deduplicated.
pub fn significant_words(text: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for word in text
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() > MAX_INSIGNIFICANT_LEN && !STOPWORDS.contains(w))
    {
        if !words.iter().any(|w| w == word) {
            words.push(word.to_string());
        }
    }
    words
}

fn contains_either(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}

/// Turns every run of non-alphanumerics into one space.
fn spaced_words(text: &str) -> String {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_match_equal_and_substring() {
        assert!(is_direct_match("Python", "python"));
        assert!(is_direct_match("Python", "Python programming"));
        assert!(is_direct_match("AWS Lambda", "lambda"));
        assert!(!is_direct_match("Java", "Kotlin"));
    }

    #[test]
    fn test_empty_never_matches() {
        assert!(!is_direct_match("", "Rust"));
        assert!(!is_normalized_match("  ", "Rust"));
        assert!(!are_equivalent_skills("", ""));
    }

    #[test]
    fn test_normalized_match_spacing_and_punctuation() {
        assert!(is_normalized_match("problem-solving", "Problem Solving"));
        assert!(is_normalized_match("Node.js", "NodeJS"));
        assert!(is_normalized_match("multi tasking", "multitasking"));
        assert!(!is_normalized_match("C++", "C#"));
    }

    #[test]
    fn test_significant_words_filters_short_and_stopwords() {
        assert_eq!(
            significant_words("Design and build of the API with both teams"),
            vec!["design", "build", "teams"]
        );
    }

    #[test]
    fn test_word_overlap_requires_two_shared_words() {
        assert!(has_significant_word_overlap(
            "Stakeholder management across projects",
            "project stakeholder management"
        ));
        assert!(!has_significant_word_overlap(
            "EASA design standards",
            "ICAO standards"
        ));
    }

    #[test]
    fn test_word_overlap_requires_two_words_each_side() {
        assert!(!has_significant_word_overlap("Leadership", "leadership skills"));
    }

    #[test]
    fn test_synonym_table() {
        assert!(is_known_synonym("Client-facing communication", "client relationship building"));
        assert!(is_known_synonym(
            "Planning and organizational skills",
            "planning & organisational ability"
        ));
        assert!(is_known_synonym("detail-oriented", "Attention to detail"));
        assert!(!is_known_synonym("teamwork", "leadership"));
    }

    #[test]
    fn test_are_equivalent_composes_rules() {
        assert!(are_equivalent_skills("SQL", "sql databases"));
        assert!(are_equivalent_skills("CI/CD", "cicd"));
        assert!(are_equivalent_skills("Client facing", "Client relationship management"));
        assert!(!are_equivalent_skills("Kubernetes", "Terraform"));
        assert!(!are_equivalent_skills("EASA design standards", "ICAO standards"));
    }

    #[test]
    fn test_predicates_normalize_their_own_input() {
        assert!(is_direct_match("  PYTHON ", "python"));
        assert!(is_normalized_match(" Problem-Solving", "PROBLEM SOLVING "));
        assert!(has_significant_word_overlap("PROJECT Stakeholder Management", "stakeholder management project"));
        assert!(is_known_synonym("TEAMWORK", "Team Player"));
    }

    #[test]
    fn test_are_equivalent_is_symmetric() {
        let pairs = [
            ("Project planning", "planning"),
            ("team player", "Teamwork"),
            ("Data visualisation dashboards", "dashboards data"),
            ("Rust", "Go"),
        ];
        for (a, b) in pairs {
            assert_eq!(are_equivalent_skills(a, b), are_equivalent_skills(b, a), "{a} / {b}");
        }
    }
}
