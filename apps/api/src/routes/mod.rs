pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::coaching::handlers as coaching;
use crate::ingest::handlers as ingest;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume CRUD
        .route("/api/v1/resumes", post(resumes::handle_create_resume))
        .route(
            "/api/v1/resumes/:id",
            get(resumes::handle_get_resume).put(resumes::handle_update_resume),
        )
        // File ingestion
        .route("/api/v1/resumes/upload", post(ingest::handle_upload_resume))
        // Analysis
        .route(
            "/api/v1/resumes/:id/ats-analysis",
            post(analysis::handle_ats_analysis),
        )
        .route(
            "/api/v1/resumes/:id/analysis",
            post(analysis::handle_resume_analysis),
        )
        // Coaching
        .route(
            "/api/v1/resumes/:id/interview-questions",
            post(coaching::handle_interview_questions),
        )
        .route("/api/v1/resumes/:id/quiz", post(coaching::handle_quiz))
        .route("/api/v1/suggestions", post(coaching::handle_job_suggestions))
        .with_state(state)
}
