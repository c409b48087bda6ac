//! Axum route handlers for resume CRUD.

use anyhow::Error as AnyError;
use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{Resume, ResumeDocument, ResumeRow};
use crate::state::AppState;

/// POST /api/v1/resumes
///
/// Creates a resume from a document body. Each resume is owned by a freshly
/// generated user id; there is no account system in front of this API.
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(document): Json<ResumeDocument>,
) -> Result<Json<Resume>, AppError> {
    let data = serde_json::to_value(&document).map_err(|e| AppError::Internal(AnyError::new(e)))?;

    let row = sqlx::query_as::<_, ResumeRow>(
        "INSERT INTO resumes (id, user_id, data) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(Uuid::new_v4())
    .bind(data)
    .fetch_one(&state.db)
    .await?;

    let resume = row
        .into_resume()
        .map_err(|e| AppError::Internal(AnyError::new(e)))?;
    Ok(Json(resume))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<Resume>, AppError> {
    let row = fetch_resume_row(&state, resume_id).await?;
    let resume = row
        .into_resume()
        .map_err(|e| AppError::Internal(AnyError::new(e)))?;
    Ok(Json(resume))
}

/// PUT /api/v1/resumes/:id
///
/// Replaces the stored document wholesale and bumps `updated_at`.
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    Json(document): Json<ResumeDocument>,
) -> Result<Json<Resume>, AppError> {
    let data = serde_json::to_value(&document).map_err(|e| AppError::Internal(AnyError::new(e)))?;

    let row = sqlx::query_as::<_, ResumeRow>(
        "UPDATE resumes SET data = $2, updated_at = now() WHERE id = $1 RETURNING *",
    )
    .bind(resume_id)
    .bind(data)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    let resume = row
        .into_resume()
        .map_err(|e| AppError::Internal(AnyError::new(e)))?;
    Ok(Json(resume))
}

/// Shared fetch used by every endpoint that operates on a stored resume.
pub async fn fetch_resume_row(state: &AppState, resume_id: Uuid) -> Result<ResumeRow, AppError> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
        .bind(resume_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))
}

/// Fetch plus rehydration into the typed API shape.
pub async fn load_resume(state: &AppState, resume_id: Uuid) -> Result<Resume, AppError> {
    fetch_resume_row(state, resume_id)
        .await?
        .into_resume()
        .map_err(|e| AppError::Internal(AnyError::new(e)))
}
