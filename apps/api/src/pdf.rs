use thiserror::Error;
use tracing::{debug, warn};

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("uploaded file is not a PDF")]
    NotPdf,

    #[error("The resume has no readable text.")]
    NoReadableText,

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("PDF extraction task was cancelled")]
    Cancelled,
}

pub fn looks_like_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_MAGIC)
}

/// Extracts trimmed plain text from PDF bytes.
///
/// `pdf-extract` is CPU-bound and can panic on malformed documents, so the work
/// runs on the blocking pool and a panic surfaces as an extraction error.
pub async fn extract_text(bytes: Vec<u8>) -> Result<String, ExtractError> {
    if !looks_like_pdf(&bytes) {
        return Err(ExtractError::NotPdf);
    }

    let size = bytes.len();
    let extracted = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| {
        if e.is_panic() {
            ExtractError::Extraction("extractor panicked".to_string())
        } else {
            ExtractError::Cancelled
        }
    })?;

    let text = match extracted {
        Ok(text) => text,
        Err(e) => {
            warn!("PDF extraction failed for {size} byte upload: {e}");
            return Err(ExtractError::Extraction(e));
        }
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(ExtractError::NoReadableText);
    }

    debug!("Extracted {} characters from {size} byte PDF", text.len());
    Ok(text.to_string())
}
