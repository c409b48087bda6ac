// Prompt constants for structuring extracted resume text.

/// System prompt for resume structuring - enforces JSON-only output.
pub const RESUME_STRUCTURE_SYSTEM: &str =
    "You are an expert resume parser. \
    Extract structured information from raw resume text. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    If any information is not available, leave the field empty.";

/// Structuring prompt template. Replace `{resume_text}` before sending.
/// The schema mirrors the stored resume document exactly, so the reply can
/// be deserialized straight into it.
pub const RESUME_STRUCTURE_PROMPT_TEMPLATE: &str = r#"Parse the following resume text and extract structured information.

Return a JSON object with this EXACT schema (no extra fields):
{
  "personal_info": {
    "full_name": "",
    "email": "",
    "phone": "",
    "location": "",
    "linkedin": "",
    "github": "",
    "website": ""
  },
  "summary": "",
  "experience": [
    {
      "title": "",
      "company": "",
      "location": "",
      "start_date": "",
      "end_date": "",
      "description": "",
      "is_current": false
    }
  ],
  "education": [
    {
      "degree": "",
      "institution": "",
      "location": "",
      "start_date": "",
      "end_date": "",
      "gpa": "",
      "relevant_coursework": ""
    }
  ],
  "projects": [
    {
      "name": "",
      "description": "",
      "technologies": "",
      "github_link": "",
      "live_link": ""
    }
  ],
  "skills": [
    {
      "category": "",
      "skills": []
    }
  ],
  "certifications": [
    {
      "name": "",
      "issuer": "",
      "date": "",
      "credential_id": ""
    }
  ]
}

Extract and structure the information accurately. If any information is not
available, leave the field empty.

RESUME TEXT:
{resume_text}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_template_has_placeholder() {
        assert!(RESUME_STRUCTURE_PROMPT_TEMPLATE.contains("{resume_text}"));
    }

    #[test]
    fn test_structure_template_names_every_document_section() {
        for section in ["personal_info", "experience", "education", "projects", "skills", "certifications"] {
            assert!(
                RESUME_STRUCTURE_PROMPT_TEMPLATE.contains(section),
                "template missing {section}"
            );
        }
    }
}
