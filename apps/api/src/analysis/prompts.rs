// Prompt constants for the qualitative resume-analysis endpoint.

/// System prompt for resume feedback - enforces JSON-only output.
pub const RESUME_FEEDBACK_SYSTEM: &str =
    "You are an expert career counselor and resume writer. \
    Analyze resumes and provide professional, actionable feedback. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Feedback prompt template. Replace `{resume_json}` before sending.
pub const RESUME_FEEDBACK_PROMPT_TEMPLATE: &str = r#"Analyze the following resume and provide detailed feedback.

Return a JSON object with this EXACT schema (no extra fields):
{
  "pros": ["list of strengths"],
  "cons": ["list of weaknesses"],
  "suggestions": ["specific improvement recommendations"]
}

Focus on:
1. Content quality and relevance
2. Formatting and structure
3. Keyword optimization
4. Quantifiable achievements
5. Professional language usage

Resume data:
{resume_json}"#;
