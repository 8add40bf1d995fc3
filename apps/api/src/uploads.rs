//! Multipart upload parsing for the `resume` file and `role` fields.

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::errors::AppError;

pub const FILE_FIELD: &str = "resume";
pub const ROLE_FIELD: &str = "role";
const FALLBACK_FILENAME: &str = "resume.pdf";

/// Room on top of the file cap for boundaries, part headers, and the role field.
pub const FORM_OVERHEAD_BYTES: usize = 16 * 1024;

/// Request body cap that still admits a file of exactly `max_upload_bytes`.
pub fn request_body_limit(max_upload_bytes: usize) -> usize {
    max_upload_bytes.saturating_add(FORM_OVERHEAD_BYTES)
}

/// One uploaded résumé as received from the form.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub original_filename: String,
    pub data: Bytes,
    /// Raw role field; blank or missing is resolved later by the catalog.
    pub role: Option<String>,
}

impl ResumeUpload {
    /// Reads the form. Unknown fields are skipped.
    pub async fn from_multipart(
        mut multipart: Multipart,
        max_upload_bytes: usize,
    ) -> Result<Self, AppError> {
        let mut file: Option<(String, Bytes)> = None;
        let mut role: Option<String> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error(e, max_upload_bytes))?
        {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some(FILE_FIELD) => {
                    let filename = field
                        .file_name()
                        .map(base_name)
                        .filter(|name| !name.is_empty())
                        .unwrap_or(FALLBACK_FILENAME)
                        .to_string();
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| multipart_error(e, max_upload_bytes))?;
                    file = Some((filename, data));
                }
                Some(ROLE_FIELD) => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| multipart_error(e, max_upload_bytes))?;
                    role = Some(value);
                }
                _ => {}
            }
        }

        let (original_filename, data) =
            file.ok_or_else(|| AppError::Validation("No file uploaded.".to_string()))?;
        if data.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty.".to_string()));
        }
        if data.len() > max_upload_bytes {
            return Err(AppError::PayloadTooLarge(max_upload_bytes));
        }

        Ok(Self {
            original_filename,
            data,
            role,
        })
    }

    /// Name the upload is recorded under: `<unix-millis>-<original filename>`.
    pub fn stored_filename(&self, uploaded_at: DateTime<Utc>) -> String {
        format!(
            "{}-{}",
            uploaded_at.timestamp_millis(),
            self.original_filename
        )
    }
}

fn multipart_error(err: MultipartError, max_upload_bytes: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(max_upload_bytes)
    } else {
        AppError::Validation(format!("Malformed upload: {}", err.body_text()))
    }
}

/// Strips any client-side directory prefix (browsers on Windows may send one).
fn base_name(filename: &str) -> &str {
    filename
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename)
        .trim()
}
