//! Axum route handlers for the Analysis API.

use anyhow::Error as AnyError;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::analysis::prompts::{RESUME_FEEDBACK_PROMPT_TEMPLATE, RESUME_FEEDBACK_SYSTEM};
use crate::analysis::readability::{flesch_reading_ease, word_count};
use crate::errors::AppError;
use crate::models::analysis::{AtsAnalysisRow, ResumeAnalysisRow};
use crate::models::resume::Resume;
use crate::resumes::flatten::flatten_resume;
use crate::resumes::handlers::load_resume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AtsAnalysisQuery {
    #[serde(default)]
    pub job_description: String,
}

/// Shape of the LLM feedback payload; lists default to empty so a partial
/// model response still produces a usable report.
#[derive(Debug, Deserialize)]
pub struct FeedbackPayload {
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// POST /api/v1/resumes/:id/ats-analysis?job_description=...
///
/// Flattens the stored document, runs the ATS scorer against the (optional)
/// job description, persists the result and returns it.
pub async fn handle_ats_analysis(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    Query(query): Query<AtsAnalysisQuery>,
) -> Result<Json<AtsAnalysisRow>, AppError> {
    let resume = load_resume(&state, resume_id).await?;
    let resume_text = flatten_resume(&resume.document);

    let result = state
        .ats_scorer
        .score(&resume_text, &query.job_description)
        .await?;

    let section_scores = serde_json::to_value(&result.section_scores)
        .map_err(|e| AppError::Internal(AnyError::new(e)))?;

    let row = sqlx::query_as::<_, AtsAnalysisRow>(
        r#"
        INSERT INTO ats_analyses
            (id, resume_id, ats_score, matched_keywords, missing_keywords,
             section_scores, recommendations, job_description)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(resume_id)
    .bind(result.ats_score)
    .bind(&result.matched_keywords)
    .bind(&result.missing_keywords)
    .bind(section_scores)
    .bind(&result.recommendations)
    .bind(&query.job_description)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

/// POST /api/v1/resumes/:id/analysis
///
/// LLM pros/cons/suggestions over the full document, plus deterministic
/// readability metrics over its free-text parts.
pub async fn handle_resume_analysis(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<ResumeAnalysisRow>, AppError> {
    let resume = load_resume(&state, resume_id).await?;

    let resume_json =
        serde_json::to_string(&resume).map_err(|e| AppError::Internal(AnyError::new(e)))?;
    let prompt = RESUME_FEEDBACK_PROMPT_TEMPLATE.replace("{resume_json}", &resume_json);
    let feedback: FeedbackPayload = state
        .llm
        .call_json(&prompt, RESUME_FEEDBACK_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume analysis failed: {e}")))?;

    let prose = collect_prose(&resume);
    let readability_score = flesch_reading_ease(&prose);
    let words = word_count(&prose) as i32;

    let row = sqlx::query_as::<_, ResumeAnalysisRow>(
        r#"
        INSERT INTO resume_analyses
            (id, resume_id, pros, cons, suggestions, readability_score, word_count)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(resume_id)
    .bind(&feedback.pros)
    .bind(&feedback.cons)
    .bind(&feedback.suggestions)
    .bind(readability_score)
    .bind(words)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

/// Summary plus experience and project descriptions; the parts of a resume
/// that are sentences rather than labels.
fn collect_prose(resume: &Resume) -> String {
    let mut parts = vec![resume.document.summary.clone()];
    parts.extend(resume.document.experience.iter().map(|e| e.description.clone()));
    parts.extend(resume.document.projects.iter().map(|p| p.description.clone()));
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, Project, ResumeDocument, ResumeRow};
    use chrono::Utc;

    fn resume_with(summary: &str, exp_desc: &str, proj_desc: &str) -> Resume {
        let document = ResumeDocument {
            summary: summary.to_string(),
            experience: vec![Experience {
                id: Uuid::new_v4(),
                title: String::new(),
                company: String::new(),
                location: String::new(),
                start_date: String::new(),
                end_date: String::new(),
                description: exp_desc.to_string(),
                is_current: false,
            }],
            projects: vec![Project {
                id: Uuid::new_v4(),
                name: String::new(),
                description: proj_desc.to_string(),
                technologies: String::new(),
                github_link: String::new(),
                live_link: String::new(),
            }],
            ..Default::default()
        };
        ResumeRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            data: serde_json::to_value(document).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
        .into_resume()
        .unwrap()
    }

    #[test]
    fn test_collect_prose_gathers_all_free_text() {
        let resume = resume_with("A summary.", "Shipped a service.", "Built a tool.");
        let prose = collect_prose(&resume);
        assert!(prose.contains("A summary."));
        assert!(prose.contains("Shipped a service."));
        assert!(prose.contains("Built a tool."));
    }

    #[test]
    fn test_feedback_payload_tolerates_missing_fields() {
        let payload: FeedbackPayload = serde_json::from_str(r#"{"pros": ["clear"]}"#).unwrap();
        assert_eq!(payload.pros, vec!["clear"]);
        assert!(payload.cons.is_empty());
        assert!(payload.suggestions.is_empty());
    }
}
