//! Axum route handlers for resume file uploads.

use aws_sdk_s3::primitives::ByteStream;
use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::ingest::extract::{extract_text, UploadKind};
use crate::ingest::prompts::{RESUME_STRUCTURE_PROMPT_TEMPLATE, RESUME_STRUCTURE_SYSTEM};
use crate::models::resume::ResumeDocument;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// The structured document, when the LLM produced a parseable one.
    pub parsed_data: Option<ResumeDocument>,
    /// Text extracted from the file, always returned so the caller can
    /// recover when structuring failed.
    pub raw_text: String,
    /// S3 key the original file bytes were archived under.
    pub archive_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /api/v1/resumes/upload
///
/// Accepts a single multipart `file` field (.pdf or .docx), extracts its
/// text, archives the original bytes, and asks the LLM to structure the
/// text into a resume document. A structuring failure is reported in the
/// response rather than failing the upload; the extracted text is already
/// useful on its own.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let (filename, data) = read_file_field(multipart).await?;

    let kind = UploadKind::from_filename(&filename).ok_or_else(|| {
        AppError::Validation("Only PDF and DOCX files are supported".to_string())
    })?;

    let raw_text = extract_text(kind, &data)?;

    let archive_key = archive_upload(&state, kind, &data).await?;
    info!(
        "Archived upload {filename} ({} bytes) as {archive_key}",
        data.len()
    );

    let prompt = RESUME_STRUCTURE_PROMPT_TEMPLATE.replace("{resume_text}", &raw_text);
    let (parsed_data, error) = match state
        .llm
        .call_json::<ResumeDocument>(&prompt, RESUME_STRUCTURE_SYSTEM)
        .await
    {
        Ok(document) => (Some(document), None),
        Err(e) => {
            warn!("Resume structuring failed for {archive_key}: {e}");
            (None, Some(format!("Could not parse resume structure: {e}")))
        }
    };

    Ok(Json(UploadResponse {
        parsed_data,
        raw_text,
        archive_key,
        error,
    }))
}

/// Pulls the `file` field out of the multipart body.
async fn read_file_field(mut multipart: Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
            return Ok((filename, data));
        }
    }
    Err(AppError::Validation(
        "Multipart field 'file' is required".to_string(),
    ))
}

/// Stores the original upload bytes under `uploads/{uuid}.{ext}`.
async fn archive_upload(
    state: &AppState,
    kind: UploadKind,
    data: &Bytes,
) -> Result<String, AppError> {
    let key = format!("uploads/{}.{}", Uuid::new_v4(), kind.extension());

    state
        .s3
        .put_object()
        .bucket(&state.config.s3_bucket)
        .key(&key)
        .content_type(kind.content_type())
        .body(ByteStream::from(data.to_vec()))
        .send()
        .await
        .map_err(|e| AppError::S3(e.to_string()))?;

    Ok(key)
}
