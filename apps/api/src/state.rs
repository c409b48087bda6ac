use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use redis::Client as RedisClient;
use sqlx::PgPool;

use crate::analysis::ats_scoring::AtsScorer;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Redis caches job-role suggestion responses to avoid repeat LLM calls.
    pub redis: RedisClient,
    pub s3: S3Client,
    pub llm: LlmClient,
    pub config: Config,
    /// Pluggable ATS scorer. The shipping backend is `KeywordAtsScorer`.
    pub ats_scorer: Arc<dyn AtsScorer>,
}
