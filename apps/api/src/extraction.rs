//! Text extraction — turns an uploaded document buffer into plain text.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`; the default backend is
//! `PdfTextExtractor` (pdf-extract on the blocking pool).

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tokio::sync::Semaphore;
use tracing::debug;

const PDF_SIGNATURE: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported document format: only PDF files can be analyzed")]
    UnsupportedFormat,

    #[error("Could not read document: {0}")]
    Malformed(String),

    #[error("Extraction worker failed: {0}")]
    Worker(String),
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, buffer: Bytes) -> Result<String, ExtractionError>;
}

/// PDF backend. Parsing is CPU-bound, so it runs on tokio's blocking pool.
///
/// A blocking parse cannot be cancelled, and it keeps running after the caller's
/// timeout drops the request. Each parse holds a permit until the worker returns,
/// so at most `max_concurrent` parses occupy the pool at once, abandoned ones included.
pub struct PdfTextExtractor {
    permits: Arc<Semaphore>,
}

impl PdfTextExtractor {
    pub fn new(max_concurrent: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(max_concurrent.max(1))),
        }
    }
}

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, buffer: Bytes) -> Result<String, ExtractionError> {
        if !buffer.starts_with(PDF_SIGNATURE) {
            return Err(ExtractionError::UnsupportedFormat);
        }

        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| ExtractionError::Worker(e.to_string()))?;

        let len = buffer.len();
        let text = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            pdf_extract::extract_text_from_mem(&buffer)
        })
        .await
        .map_err(|e| ExtractionError::Worker(e.to_string()))?
        .map_err(|e| ExtractionError::Malformed(e.to_string()))?;

        debug!("Extracted {} chars from {len}-byte PDF", text.len());
        Ok(normalize(&text))
    }
}

/// Replaces NULs some PDF fonts emit, so downstream text is plain UTF-8 prose.
fn normalize(text: &str) -> String {
    text.replace('\0', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_non_pdf_buffer_is_unsupported() {
        let err = PdfTextExtractor::new(1)
            .extract(Bytes::from_static(b"PK\x03\x04 docx payload"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat));
    }

    #[tokio::test]
    async fn test_empty_buffer_is_unsupported() {
        let err = PdfTextExtractor::new(1).extract(Bytes::new()).await.unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat));
    }

    #[tokio::test]
    async fn test_truncated_pdf_fails_without_text() {
        let err = PdfTextExtractor::new(1)
            .extract(Bytes::from_static(b"%PDF-1.4\n%garbage with no xref"))
            .await
            .unwrap_err();
        // A parser panic surfaces as a worker failure rather than unwinding the request.
        assert!(matches!(
            err,
            ExtractionError::Malformed(_) | ExtractionError::Worker(_)
        ));
    }

    #[tokio::test]
    async fn test_parse_waits_for_a_free_worker_slot() {
        let extractor = PdfTextExtractor::new(1);
        let held = extractor.permits.clone().acquire_owned().await.unwrap();
        let pdf = Bytes::from_static(b"%PDF-1.4\n%garbage with no xref");

        let blocked = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            extractor.extract(pdf.clone()),
        )
        .await;
        assert!(blocked.is_err(), "parse started while the only slot was taken");

        drop(held);
        assert!(extractor.extract(pdf).await.is_err());
        assert_eq!(extractor.permits.available_permits(), 1);
    }

    #[tokio::test]
    async fn test_signature_check_does_not_need_a_slot() {
        let extractor = PdfTextExtractor::new(1);
        let _held = extractor.permits.clone().acquire_owned().await.unwrap();
        let err = extractor.extract(Bytes::from_static(b"plain text")).await.unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat));
    }

    #[test]
    fn test_normalize_strips_nuls() {
        assert_eq!(normalize("py\0thon"), "py thon");
    }
}
