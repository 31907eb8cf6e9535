use chrono::Utc;

use crate::errors::{AppError, AppResult};

/// Upload contract enforced on behalf of the external file store: the core
/// holds only storage references, never bytes.
pub const MAX_EVIDENCE_FILE_BYTES: i64 = 5 * 1024 * 1024;

pub const ALLOWED_EVIDENCE_MIME_TYPES: [&str; 4] = [
    "image/jpeg",
    "image/png",
    "image/webp",
    "application/pdf",
];

pub struct EvidenceService;

impl EvidenceService {
    pub fn validate_upload(content_type: &str, size_bytes: i64) -> AppResult<()> {
        if !ALLOWED_EVIDENCE_MIME_TYPES.contains(&content_type) {
            return Err(AppError::ValidationError(format!(
                "file type '{}' is not allowed (images and PDF only)",
                content_type
            )));
        }

        if size_bytes > MAX_EVIDENCE_FILE_BYTES {
            return Err(AppError::ValidationError(
                "file too large (max 5MB)".to_string(),
            ));
        }

        Ok(())
    }

    /// Storage key for an accepted upload: `<uid>_<millis>.<ext>`, under the
    /// evidence prefix. The byte store resolves it to a public URL.
    pub fn storage_key(user_id: &str, file_name: &str) -> String {
        let extension = file_name.rsplit('.').next().unwrap_or("bin");
        format!("{}_{}.{}", user_id, Utc::now().timestamp_millis(), extension)
    }

    pub fn public_url(storage_key: &str) -> String {
        format!("/uploads/evidence/{}", storage_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_allowed_types_under_cap() {
        for mime in ALLOWED_EVIDENCE_MIME_TYPES {
            assert!(EvidenceService::validate_upload(mime, 1024).is_ok());
        }
        assert!(EvidenceService::validate_upload("application/pdf", MAX_EVIDENCE_FILE_BYTES).is_ok());
    }

    #[test]
    fn test_rejects_oversized_file() {
        let result =
            EvidenceService::validate_upload("image/png", MAX_EVIDENCE_FILE_BYTES + 1);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_disallowed_mime() {
        for mime in ["image/gif", "application/zip", "text/html"] {
            let result = EvidenceService::validate_upload(mime, 1024);
            assert!(matches!(result, Err(AppError::ValidationError(_))));
        }
    }

    #[test]
    fn test_storage_key_keeps_extension() {
        let key = EvidenceService::storage_key("uid-1", "minh-chung.pdf");
        assert!(key.starts_with("uid-1_"));
        assert!(key.ends_with(".pdf"));

        let url = EvidenceService::public_url(&key);
        assert!(url.starts_with("/uploads/evidence/uid-1_"));
    }
}
