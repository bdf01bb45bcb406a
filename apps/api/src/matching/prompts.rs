// All LLM prompt constants for the matching module.
// Templates use `{placeholder}` markers replaced before sending.

/// Role line for the combined resume + job extraction call.
pub const EXTRACT_ROLE: &str =
    "You are an expert recruiter and resume analyst who extracts structured data from resumes and job postings.";

/// Role line for both evaluation variants.
pub const EVALUATE_ROLE: &str =
    "You are an expert ATS analyst who scores how well a candidate matches a job.";

/// Combined extraction template. Replace `{resume_text}` and `{job_text}` before sending.
pub const EXTRACT_PROMPT_TEMPLATE: &str = r#"Analyze the RESUME and the JOB DESCRIPTION below and extract structured information from both.

Return a JSON object with this EXACT schema:
{
  "resume": {
    "summary": "2-3 sentence professional summary of the candidate",
    "skills": ["skill", "..."],
    "experience": "narrative description of the candidate's roles, responsibilities and achievements"
  },
  "job": {
    "required_skills": ["skill", "..."],
    "preferred_skills": ["skill", "..."],
    "keywords": ["keyword", "..."],
    "experience_level": "entry | mid | senior | lead | executive"
  }
}

Rules for resume skills:
- Be MAXIMALLY INCLUSIVE. Scan EVERY section of the resume (summary, experience bullets, projects, education, certifications), not only a "Skills" heading.
- Include BOTH technical skills (languages, tools, platforms, methods, standards) AND soft skills (communication, teamwork, leadership, problem solving, time management, attention to detail, planning, organizational skills, client relationship management, adaptability, collaboration).
- Return up to 25 skills, most relevant first.

Rules for the job:
- required_skills: explicit must-haves (up to 15).
- preferred_skills: nice-to-haves, "preferred", "bonus", "a plus" (up to 10).
- keywords: ATS keywords and recurring terms (up to 15).

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_text}"#;

/// First-pass evaluation template.
/// Replace: {profile_json}, {requirements_json}
pub const FIRST_PASS_PROMPT_TEMPLATE: &str = r#"Score how well this candidate matches the job.

CANDIDATE PROFILE:
{profile_json}

JOB REQUIREMENTS:
{requirements_json}

SCORING WEIGHTS:
- Skills match: 50%
- Experience relevance: 40%
- Keywords / ATS alignment: 10%

Give a REALISTIC score anywhere from 0 to 100. Do not inflate: a weak match must score low.

Return a JSON object with this EXACT schema:
{
  "score": 0,
  "matched_skills": ["job skill the candidate clearly has"],
  "missing_skills": ["job skill the candidate clearly lacks"],
  "recommendations": ["specific, actionable improvement"],
  "category_scores": {
    "skills_match": 0,
    "experience_relevance": 0,
    "education_certs": 0,
    "additional_factors": 0
  },
  "alternative_positions": ["job title"]
}

Rules:
- matched_skills and missing_skills must use the job's own wording and must never overlap.
- Only list a skill as missing if it appears in the job requirements.
- At most 3 recommendations.
- Include 2 alternative_positions ONLY when the score is below 60; otherwise return an empty list."#;

/// Optimized-resume validation template.
/// Replace: {profile_json}, {requirements_json}
pub const OPTIMIZED_PROMPT_TEMPLATE: &str = r#"This resume has ALREADY been tailored to the job below. Validate the optimization and score the match.

CANDIDATE PROFILE:
{profile_json}

JOB REQUIREMENTS:
{requirements_json}

SCORING WEIGHTS:
- Skills match: 50%
- Experience relevance: 30%
- Keywords / ATS alignment: 10%
- Education and certifications: 10%

Expected range for a tailored resume is 85 to 100. Be STRICT about calling anything missing:
only list a skill as missing when there is no evidence of it anywhere in the profile,
including related or equivalent wording.

Return a JSON object with this EXACT schema:
{
  "score": 0,
  "matched_skills": ["job skill the candidate clearly has"],
  "missing_skills": ["job skill with no evidence at all"],
  "recommendations": ["specific final polish suggestion"],
  "category_scores": {
    "skills_match": 0,
    "experience_relevance": 0,
    "education_certs": 0,
    "additional_factors": 0
  }
}

Rules:
- matched_skills and missing_skills must use the job's own wording and must never overlap.
- At most 3 recommendations."#;
