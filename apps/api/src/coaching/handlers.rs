//! Axum route handlers for the Coaching API.

use anyhow::Error as AnyError;
use axum::{
    extract::{Path, State},
    Json,
};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::coaching::prompts::{
    INTERVIEW_QUESTIONS_PROMPT_TEMPLATE, INTERVIEW_QUESTIONS_SYSTEM, QUIZ_PROMPT_TEMPLATE,
    QUIZ_SYSTEM, ROLE_SUGGESTIONS_PROMPT_TEMPLATE, ROLE_SUGGESTIONS_SYSTEM,
};
use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::resumes::handlers::load_resume;
use crate::state::AppState;

/// Cached suggestion responses expire after a day.
const SUGGESTION_CACHE_TTL_SECONDS: u64 = 86_400;
/// At most this many skills are fed into the quiz prompt.
const QUIZ_SKILL_CAP: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub category: String,
    pub difficulty: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InterviewQuestionSet {
    #[serde(default)]
    pub hr_questions: Vec<InterviewQuestion>,
    #[serde(default)]
    pub behavioral_questions: Vec<InterviewQuestion>,
    #[serde(default)]
    pub technical_questions: Vec<InterviewQuestion>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: u32,
    pub explanation: String,
    pub skill_category: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct JobRoleRequest {
    pub job_role: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SkillsSuggestions {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoleSuggestions {
    #[serde(default)]
    pub summary_suggestions: Vec<String>,
    #[serde(default)]
    pub skills_suggestions: SkillsSuggestions,
    #[serde(default)]
    pub experience_keywords: Vec<String>,
    #[serde(default)]
    pub project_ideas: Vec<String>,
    #[serde(default)]
    pub certification_recommendations: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/:id/interview-questions
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<InterviewQuestionSet>, AppError> {
    let resume = load_resume(&state, resume_id).await?;

    let resume_json =
        serde_json::to_string(&resume).map_err(|e| AppError::Internal(AnyError::new(e)))?;
    let prompt = INTERVIEW_QUESTIONS_PROMPT_TEMPLATE.replace("{resume_json}", &resume_json);

    let questions: InterviewQuestionSet = state
        .llm
        .call_json(&prompt, INTERVIEW_QUESTIONS_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Question generation failed: {e}")))?;

    Ok(Json(questions))
}

/// POST /api/v1/resumes/:id/quiz
///
/// Builds a multiple-choice quiz from the resume's skills. 400 when the
/// resume lists no skills at all.
pub async fn handle_quiz(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<Quiz>, AppError> {
    let resume = load_resume(&state, resume_id).await?;

    let skills = collect_skills(&resume.document);
    if skills.is_empty() {
        return Err(AppError::Validation("No skills found in resume".to_string()));
    }

    let skill_list = skills
        .iter()
        .take(QUIZ_SKILL_CAP)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    let prompt = QUIZ_PROMPT_TEMPLATE.replace("{skills}", &skill_list);

    let quiz: Quiz = state
        .llm
        .call_json(&prompt, QUIZ_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Quiz generation failed: {e}")))?;

    Ok(Json(quiz))
}

/// POST /api/v1/suggestions
///
/// Role-based resume content suggestions. Responses are cached in Redis per
/// normalized role name; cache failures degrade to a plain LLM call.
pub async fn handle_job_suggestions(
    State(state): State<AppState>,
    Json(request): Json<JobRoleRequest>,
) -> Result<Json<RoleSuggestions>, AppError> {
    let job_role = request.job_role.trim();
    if job_role.is_empty() {
        return Err(AppError::Validation("job_role cannot be empty".to_string()));
    }

    let key = suggestion_cache_key(job_role);
    let mut cache = match state.redis.get_multiplexed_async_connection().await {
        Ok(conn) => Some(conn),
        Err(e) => {
            warn!("Redis unavailable, skipping suggestion cache: {e}");
            None
        }
    };

    if let Some(conn) = cache.as_mut() {
        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(cached)) => match serde_json::from_str::<RoleSuggestions>(&cached) {
                Ok(suggestions) => return Ok(Json(suggestions)),
                Err(e) => warn!("Discarding unreadable cache entry {key}: {e}"),
            },
            Ok(None) => {}
            Err(e) => warn!("Cache read failed for {key}: {e}"),
        }
    }

    let prompt = ROLE_SUGGESTIONS_PROMPT_TEMPLATE.replace("{job_role}", job_role);
    let suggestions: RoleSuggestions = state
        .llm
        .call_json(&prompt, ROLE_SUGGESTIONS_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Suggestion generation failed: {e}")))?;

    if let Some(conn) = cache.as_mut() {
        if let Ok(serialized) = serde_json::to_string(&suggestions) {
            if let Err(e) = conn
                .set_ex::<_, _, ()>(&key, serialized, SUGGESTION_CACHE_TTL_SECONDS)
                .await
            {
                warn!("Cache write failed for {key}: {e}");
            }
        }
    }

    Ok(Json(suggestions))
}

/// All skills across all groups, in document order.
fn collect_skills(document: &ResumeDocument) -> Vec<String> {
    document
        .skills
        .iter()
        .flat_map(|group| group.skills.iter().cloned())
        .collect()
}

fn suggestion_cache_key(job_role: &str) -> String {
    format!("suggestions:{}", job_role.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SkillGroup;

    #[test]
    fn test_collect_skills_flattens_groups_in_order() {
        let document = ResumeDocument {
            skills: vec![
                SkillGroup {
                    category: "Languages".to_string(),
                    skills: vec!["Rust".to_string(), "SQL".to_string()],
                },
                SkillGroup {
                    category: "Tools".to_string(),
                    skills: vec!["Docker".to_string()],
                },
            ],
            ..Default::default()
        };
        assert_eq!(collect_skills(&document), vec!["Rust", "SQL", "Docker"]);
    }

    #[test]
    fn test_collect_skills_empty_document() {
        assert!(collect_skills(&ResumeDocument::default()).is_empty());
    }

    #[test]
    fn test_cache_key_is_case_insensitive() {
        assert_eq!(
            suggestion_cache_key("Backend Engineer"),
            suggestion_cache_key("backend engineer")
        );
    }

    #[test]
    fn test_question_set_tolerates_partial_payload() {
        let set: InterviewQuestionSet = serde_json::from_str(
            r#"{"hr_questions": [{"question": "Why us?", "category": "HR", "difficulty": "Easy"}]}"#,
        )
        .unwrap();
        assert_eq!(set.hr_questions.len(), 1);
        assert!(set.behavioral_questions.is_empty());
        assert!(set.technical_questions.is_empty());
    }

    #[test]
    fn test_quiz_deserializes_full_question() {
        let quiz: Quiz = serde_json::from_str(
            r#"{"questions": [{
                "question": "What does ownership prevent?",
                "options": ["data races", "typos", "latency", "deadlocks"],
                "correct_answer": 0,
                "explanation": "Aliasing plus mutation is rejected at compile time.",
                "skill_category": "Rust"
            }]}"#,
        )
        .unwrap();
        assert_eq!(quiz.questions[0].correct_answer, 0);
        assert_eq!(quiz.questions[0].options.len(), 4);
    }
}
