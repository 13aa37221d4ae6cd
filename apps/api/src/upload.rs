//! Multipart form reading shared by the analysis and chat upload endpoints.

use axum::extract::Multipart;
use bytes::Bytes;

use crate::errors::AppError;
use crate::pdf::{self, ExtractError};

pub const RESUME_FIELD: &str = "resume";
pub const JD_FIELD: &str = "jd_text";

#[derive(Debug)]
pub struct ResumeFile {
    pub file_name: String,
    pub bytes: Bytes,
}

#[derive(Debug, Default)]
pub struct UploadForm {
    pub resume: Option<ResumeFile>,
    pub jd_text: Option<String>,
}

impl UploadForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
        {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some(RESUME_FIELD) => {
                    let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(format!("Invalid resume file: {e}")))?;
                    form.resume = Some(ResumeFile { file_name, bytes });
                }
                Some(JD_FIELD) => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| AppError::Validation(format!("Invalid jd_text: {e}")))?;
                    form.jd_text = Some(text);
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// The resume file, rejecting missing or empty uploads.
    pub fn require_resume(&mut self) -> Result<ResumeFile, AppError> {
        self.resume
            .take()
            .filter(|file| !file.bytes.is_empty())
            .ok_or_else(|| AppError::Validation("Please upload a resume (PDF)".to_string()))
    }

    /// The trimmed job description, rejecting missing or blank input.
    pub fn require_jd_text(&mut self) -> Result<String, AppError> {
        self.jd_text
            .take()
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| AppError::Validation("Please enter a job description".to_string()))
    }
}

impl ResumeFile {
    /// Rejects non-PDF uploads without touching the extractor.
    pub fn ensure_pdf(&self) -> Result<(), AppError> {
        if pdf::looks_like_pdf(&self.bytes) {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "{} is not a PDF file",
                self.file_name
            )))
        }
    }

    pub async fn extract_text(self) -> Result<String, AppError> {
        pdf::extract_text(self.bytes.to_vec())
            .await
            .map_err(|e| self.extract_error(e))
    }

    fn extract_error(&self, err: ExtractError) -> AppError {
        match err {
            ExtractError::NotPdf => {
                AppError::Validation(format!("{} is not a PDF file", self.file_name))
            }
            ExtractError::NoReadableText | ExtractError::Extraction(_) => {
                AppError::UnprocessableEntity(ExtractError::NoReadableText.to_string())
            }
            ExtractError::Cancelled => AppError::Internal(
                anyhow::Error::new(err).context(format!("extracting {}", self.file_name)),
            ),
        }
    }
}
