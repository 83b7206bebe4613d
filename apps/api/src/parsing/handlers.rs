use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ResumeProfile;
use crate::parsing::storage;
use crate::state::AppState;

/// Maximum accepted upload payload: 10 MiB, enforced before the core runs.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// POST /api/cv/upload
///
/// Accepts a multipart `file` field, validates extension and size, saves the
/// bytes to a temp file, parses the document, best-effort deletes the file,
/// and returns the structured profile. Parse failures still return 200 with
/// an "Error"-graded profile; only upload validation rejects.
pub async fn handle_cv_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeProfile>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("Missing filename".to_string()))?;
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        upload = Some((filename, data));
        break;
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation("No file field in upload".to_string()))?;

    if !has_supported_extension(&filename) {
        return Err(AppError::Validation(
            "Only PDF, DOC, and DOCX files are supported".to_string(),
        ));
    }
    if !within_size_limit(data.len()) {
        return Err(AppError::Validation(
            "File size must be less than 10MB".to_string(),
        ));
    }

    info!("Received CV upload: {filename} ({} bytes)", data.len());

    let path = storage::save_upload(&state.config.upload_dir, &data, &filename)?;
    let profile = state.parser.parse(&path).await;
    storage::cleanup(&path);

    Ok(Json(profile))
}

fn has_supported_extension(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    lower.ends_with(".pdf") || lower.ends_with(".doc") || lower.ends_with(".docx")
}

fn within_size_limit(payload_len: usize) -> bool {
    payload_len <= MAX_UPLOAD_BYTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert!(has_supported_extension("resume.pdf"));
        assert!(has_supported_extension("resume.doc"));
        assert!(has_supported_extension("resume.docx"));
        assert!(has_supported_extension("RESUME.PDF"));
    }

    #[test]
    fn test_rejected_extensions() {
        assert!(!has_supported_extension("resume.txt"));
        assert!(!has_supported_extension("resume.pdf.exe"));
        assert!(!has_supported_extension("resume"));
    }

    #[test]
    fn test_size_limit_boundary() {
        assert!(within_size_limit(0));
        assert!(within_size_limit(MAX_UPLOAD_BYTES));
        assert!(!within_size_limit(MAX_UPLOAD_BYTES + 1));
    }
}
