use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted ATS analysis: the scorer's output plus the resume it was run
/// against and the job description it was scored with.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AtsAnalysisRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub ats_score: i32,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub section_scores: Value,
    pub recommendations: Vec<String>,
    pub job_description: String,
    pub created_at: DateTime<Utc>,
}

/// A persisted qualitative analysis: LLM feedback plus readability metrics.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeAnalysisRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub suggestions: Vec<String>,
    pub readability_score: f64,
    pub word_count: i32,
    pub created_at: DateTime<Utc>,
}
