//! Resume document model. The document itself is stored as opaque JSON in
//! the `resumes` table; only id, owner and timestamps are real columns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub website: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub gpa: String,
    #[serde(default)]
    pub relevant_coursework: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_current: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: String,
    #[serde(default)]
    pub github_link: String,
    #[serde(default)]
    pub live_link: String,
}

/// A named group of skills, e.g. category "Languages" with ["Rust", "SQL"].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillGroup {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub credential_id: String,
}

/// The full document body, as stored in the `data` jsonb column and as
/// accepted by create/update requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeDocument {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

/// API representation of a stored resume: document body plus identity and
/// timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(flatten)]
    pub document: ResumeDocument,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeRow {
    /// Rehydrates the stored jsonb body into the typed API shape.
    pub fn into_resume(self) -> Result<Resume, serde_json::Error> {
        let document: ResumeDocument = serde_json::from_value(self.data)?;
        Ok(Resume {
            id: self.id,
            user_id: self.user_id,
            document,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_deserializes_from_empty_object() {
        let document: ResumeDocument = serde_json::from_str("{}").unwrap();
        assert!(document.summary.is_empty());
        assert!(document.experience.is_empty());
        assert!(document.personal_info.email.is_empty());
    }

    #[test]
    fn test_entry_ids_generated_when_absent() {
        let json = r#"{"experience": [{"title": "Engineer"}, {"title": "Intern"}]}"#;
        let document: ResumeDocument = serde_json::from_str(json).unwrap();
        assert_eq!(document.experience.len(), 2);
        assert_ne!(document.experience[0].id, document.experience[1].id);
    }

    #[test]
    fn test_resume_serializes_document_fields_at_top_level() {
        let row = ResumeRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            data: serde_json::json!({"summary": "Builder of backends"}),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let resume = row.into_resume().unwrap();
        let value = serde_json::to_value(&resume).unwrap();
        // flattened: summary sits beside id, not under "document"
        assert_eq!(value["summary"], "Builder of backends");
        assert!(value.get("document").is_none());
    }

    #[test]
    fn test_malformed_stored_data_is_an_error() {
        let row = ResumeRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            data: serde_json::json!({"experience": "not-a-list"}),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(row.into_resume().is_err());
    }
}
