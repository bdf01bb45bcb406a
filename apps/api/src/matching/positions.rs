//! Fallback alternative-position suggestions, used when the evaluator omits
//! them for a low score.

const MAX_POSITIONS: usize = 2;

pub const GENERIC_POSITIONS: [&str; 2] = [
    "Professional role in your field",
    "Related position in your industry",
];

struct Bucket {
    keywords: &'static [&'static str],
    titles: &'static [&'static str],
}

const BUCKETS: &[Bucket] = &[
    Bucket {
        keywords: &["software", "developer", "programming", "javascript", "python", "java", "coding"],
        titles: &["Software Developer", "Technical Consultant"],
    },
    Bucket {
        keywords: &["design", "creative", "graphic", "figma", "adobe"],
        titles: &["UI/UX Designer", "Creative Specialist"],
    },
    Bucket {
        keywords: &["management", "leadership", "manager", "team lead"],
        titles: &["Project Manager", "Team Lead"],
    },
    Bucket {
        keywords: &["marketing", "sales", "social media", "branding"],
        titles: &["Marketing Specialist", "Sales Representative"],
    },
    Bucket {
        keywords: &["data", "analysis", "analytics", "statistics", "sql"],
        titles: &["Data Analyst", "Business Analyst"],
    },
];

/// Up to two job titles suggested by the resume's skills. Never empty.
pub fn generate_fallback_positions(skills: &[String]) -> Vec<String> {
    let text = skills.join(" ").to_lowercase();

    let positions: Vec<String> = BUCKETS
        .iter()
        .filter(|bucket| bucket.keywords.iter().any(|k| text.contains(k)))
        .flat_map(|bucket| bucket.titles.iter())
        .take(MAX_POSITIONS)
        .map(|t| t.to_string())
        .collect();

    if positions.is_empty() {
        return GENERIC_POSITIONS.iter().map(|t| t.to_string()).collect();
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_skills_return_generic_pair() {
        assert_eq!(
            generate_fallback_positions(&[]),
            vec!["Professional role in your field", "Related position in your industry"]
        );
    }

    #[test]
    fn test_unmatched_skills_return_generic_pair() {
        let positions = generate_fallback_positions(&skills(&["Welding", "Forklift"]));
        assert_eq!(positions, GENERIC_POSITIONS.to_vec());
    }

    #[test]
    fn test_software_bucket() {
        let positions = generate_fallback_positions(&skills(&["Python", "REST APIs"]));
        assert_eq!(positions, vec!["Software Developer", "Technical Consultant"]);
    }

    #[test]
    fn test_first_matching_bucket_wins_at_two_titles() {
        let positions = generate_fallback_positions(&skills(&["SQL", "Figma"]));
        assert_eq!(positions, vec!["UI/UX Designer", "Creative Specialist"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let positions = generate_fallback_positions(&skills(&["SOCIAL MEDIA campaigns"]));
        assert_eq!(positions, vec!["Marketing Specialist", "Sales Representative"]);
    }

    #[test]
    fn test_never_more_than_two() {
        let all = skills(&["python", "design", "leadership", "marketing", "data"]);
        assert_eq!(generate_fallback_positions(&all).len(), 2);
    }
}
