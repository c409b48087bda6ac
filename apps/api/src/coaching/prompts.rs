// Prompt constants for the coaching endpoints.

/// System prompt for interview question generation.
pub const INTERVIEW_QUESTIONS_SYSTEM: &str =
    "You are an experienced interviewer and career coach. \
    Generate interview questions tailored to a candidate's resume. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Interview question prompt template. Replace `{resume_json}` before sending.
pub const INTERVIEW_QUESTIONS_PROMPT_TEMPLATE: &str = r#"Based on the following resume, generate interview questions in three categories.

Return a JSON object with this EXACT schema:
{
  "hr_questions": [
    {"question": "question text", "category": "HR", "difficulty": "Easy|Medium|Hard"}
  ],
  "behavioral_questions": [
    {"question": "question text", "category": "Behavioral", "difficulty": "Easy|Medium|Hard"}
  ],
  "technical_questions": [
    {"question": "question text", "category": "Technical", "difficulty": "Easy|Medium|Hard"}
  ]
}

Generate 5 questions for each category. Make them relevant to the
candidate's experience and skills.

RESUME:
{resume_json}"#;

/// System prompt for quiz generation.
pub const QUIZ_SYSTEM: &str = "You are a technical assessment author. \
    Create practical multiple choice questions for the given skills. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Quiz prompt template. Replace `{skills}` before sending.
pub const QUIZ_PROMPT_TEMPLATE: &str = r#"Create a technical quiz with 15 multiple choice questions based on these skills: {skills}

Return a JSON object with this EXACT schema:
{
  "questions": [
    {
      "question": "question text",
      "options": ["option1", "option2", "option3", "option4"],
      "correct_answer": 0,
      "explanation": "explanation text",
      "skill_category": "relevant skill"
    }
  ]
}

Make questions practical and relevant to the skills. Include a mix of
difficulty levels."#;

/// System prompt for job-role content suggestions.
pub const ROLE_SUGGESTIONS_SYSTEM: &str =
    "You are an expert career counselor and resume writer. \
    Provide helpful, professional advice. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Role suggestion prompt template. Replace `{job_role}` before sending.
pub const ROLE_SUGGESTIONS_PROMPT_TEMPLATE: &str = r#"Provide comprehensive resume content suggestions for a {job_role} position.

Return a JSON object with this EXACT schema:
{
  "summary_suggestions": ["suggestion1", "suggestion2", "suggestion3"],
  "skills_suggestions": {
    "technical": ["skill1", "skill2"],
    "soft": ["skill1", "skill2"],
    "tools": ["tool1", "tool2"]
  },
  "experience_keywords": ["keyword1", "keyword2"],
  "project_ideas": ["project1", "project2"],
  "certification_recommendations": ["cert1", "cert2"]
}

Make suggestions specific and relevant to the {job_role} role."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_have_placeholders() {
        assert!(INTERVIEW_QUESTIONS_PROMPT_TEMPLATE.contains("{resume_json}"));
        assert!(QUIZ_PROMPT_TEMPLATE.contains("{skills}"));
        assert!(ROLE_SUGGESTIONS_PROMPT_TEMPLATE.contains("{job_role}"));
    }
}
