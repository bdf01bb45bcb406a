// Resume-Job Match Scorer
// Implements: preprocessing, combined extraction, evaluation, post-filtering, fallback positions.
// All LLM calls go through llm_client — no direct OpenAI calls here.

pub mod equivalence;
pub mod evaluator;
pub mod extractor;
pub mod handlers;
pub mod models;
pub mod positions;
pub mod post_filter;
pub mod preprocess;
pub mod prompts;
pub mod scorer;
