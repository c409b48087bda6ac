// Resume analysis: the deterministic ATS scorer and readability metrics,
// plus the LLM-backed qualitative feedback endpoint.
// All LLM calls go through llm_client - no direct Gemini calls here.

pub mod ats_scoring;
pub mod handlers;
pub mod prompts;
pub mod readability;
