//! Flattens a structured resume document into the plain text the ATS scorer
//! consumes: personal info and summary line by line, then experience
//! title/company/description, education degree/institution, and all skill
//! lists. Section headers are NOT injected; only actual content is scored.

use crate::models::resume::ResumeDocument;

pub fn flatten_resume(document: &ResumeDocument) -> String {
    let info = &document.personal_info;
    let mut text = String::new();

    for field in [&info.full_name, &info.email, &info.phone, &document.summary] {
        text.push_str(field);
        text.push('\n');
    }

    for exp in &document.experience {
        text.push_str(&exp.title);
        text.push(' ');
        text.push_str(&exp.company);
        text.push(' ');
        text.push_str(&exp.description);
        text.push(' ');
    }

    for edu in &document.education {
        text.push_str(&edu.degree);
        text.push(' ');
        text.push_str(&edu.institution);
        text.push(' ');
    }

    for group in &document.skills {
        text.push_str(&group.skills.join(" "));
        text.push(' ');
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, PersonalInfo, SkillGroup};

    fn sample_document() -> ResumeDocument {
        ResumeDocument {
            personal_info: PersonalInfo {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: "555-123-4567".to_string(),
                ..Default::default()
            },
            summary: "Engineer with a decade of systems experience".to_string(),
            experience: vec![Experience {
                id: uuid::Uuid::new_v4(),
                title: "Staff Engineer".to_string(),
                company: "Analytical Engines".to_string(),
                description: "Built compilers".to_string(),
                location: String::new(),
                start_date: String::new(),
                end_date: String::new(),
                is_current: true,
            }],
            skills: vec![SkillGroup {
                category: "Languages".to_string(),
                skills: vec!["Rust".to_string(), "SQL".to_string()],
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_flatten_carries_contact_info_and_content() {
        let text = flatten_resume(&sample_document());
        assert!(text.contains("ada@example.com"));
        assert!(text.contains("555-123-4567"));
        assert!(text.contains("Staff Engineer"));
        assert!(text.contains("Analytical Engines"));
        assert!(text.contains("Rust SQL"));
    }

    #[test]
    fn test_flatten_does_not_invent_section_headers() {
        let document = ResumeDocument {
            summary: "no headers here".to_string(),
            ..Default::default()
        };
        let text = flatten_resume(&document).to_lowercase();
        assert!(!text.contains("education"));
        assert!(!text.contains("skills"));
    }

    #[test]
    fn test_flatten_of_empty_document_is_blank() {
        let text = flatten_resume(&ResumeDocument::default());
        assert!(text.trim().is_empty());
    }
}
