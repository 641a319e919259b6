//! Resume text extraction — turns an uploaded PDF into raw text for analysis.
//!
//! The analysis core only ever sees `&str`. Everything that can go wrong with the
//! upload (empty body, not a PDF, encrypted, unreadable, no text layer) is resolved
//! here and surfaced as an `ExtractionError`; it is never folded into a 0% result.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>` so handlers can be exercised with a stub.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

const PDF_MAGIC: &[u8] = b"%PDF-";
const ENCRYPT_MARKER: &[u8] = b"/Encrypt";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("uploaded file is empty")]
    Empty,

    #[error("uploaded file is not a PDF document")]
    NotPdf,

    #[error("PDF is encrypted and cannot be read")]
    Encrypted,

    #[error("PDF could not be parsed: {0}")]
    Malformed(String),

    #[error("PDF contains no extractable text")]
    NoText,
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns the concatenated text of all pages, in page order.
    async fn extract(&self, pdf: Bytes) -> Result<String, ExtractionError>;
}

/// Default extractor backed by the `pdf-extract` crate.
///
/// Parsing is CPU-bound and runs on tokio's blocking pool. A parser failure or panic
/// is reported as `Encrypted` when the file carries an `/Encrypt` entry, else `Malformed`.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, pdf: Bytes) -> Result<String, ExtractionError> {
        check_header(&pdf)?;

        let size = pdf.len();
        let encrypted = contains(&pdf, ENCRYPT_MARKER);
        let text = tokio::task::spawn_blocking(move || extract_blocking(&pdf))
            .await
            .map_err(|e| {
                warn!("PDF parser aborted: {e}");
                if encrypted {
                    ExtractionError::Encrypted
                } else {
                    ExtractionError::Malformed("parser aborted".to_string())
                }
            })??;

        debug!("Extracted {} chars from {size}-byte PDF", text.len());
        Ok(text)
    }
}

fn check_header(pdf: &[u8]) -> Result<(), ExtractionError> {
    if pdf.is_empty() {
        return Err(ExtractionError::Empty);
    }
    // The header may be preceded by junk bytes; readers accept it within the first 1 KiB.
    let head = &pdf[..pdf.len().min(1024)];
    if !contains(head, PDF_MAGIC) {
        return Err(ExtractionError::NotPdf);
    }
    Ok(())
}

fn extract_blocking(pdf: &[u8]) -> Result<String, ExtractionError> {
    let text = pdf_extract::extract_text_from_mem(pdf).map_err(|e| {
        if contains(pdf, ENCRYPT_MARKER) {
            ExtractionError::Encrypted
        } else {
            ExtractionError::Malformed(e.to_string())
        }
    })?;

    if text.trim().is_empty() {
        return Err(ExtractionError::NoText);
    }
    Ok(text)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_upload_is_rejected() {
        let err = PdfTextExtractor.extract(Bytes::new()).await.unwrap_err();
        assert_eq!(err, ExtractionError::Empty);
    }

    #[tokio::test]
    async fn test_non_pdf_upload_is_rejected() {
        let err = PdfTextExtractor
            .extract(Bytes::from_static(b"Jane Doe\nRust engineer"))
            .await
            .unwrap_err();
        assert_eq!(err, ExtractionError::NotPdf);
    }

    /// Builds a one-page PDF whose page content stream is empty, with a correct xref table.
    fn blank_page_pdf() -> Vec<u8> {
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << >> /Contents 4 0 R >>"
                .to_string(),
            "<< /Length 0 >>\nstream\n\nendstream".to_string(),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }

        let xref_start = pdf.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            xref.push_str(&format!("{offset:010} 00000 n \n"));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
            objects.len() + 1
        ));
        pdf.extend_from_slice(xref.as_bytes());
        pdf
    }

    #[tokio::test]
    async fn test_truncated_pdf_is_malformed() {
        let err = PdfTextExtractor
            .extract(Bytes::from_static(b"%PDF-1.4\n1 0 obj\n<< /Type /Cat"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Malformed(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_unreadable_encrypted_pdf_is_reported_as_encrypted() {
        let err = PdfTextExtractor
            .extract(Bytes::from_static(
                b"%PDF-1.4\n1 0 obj\n<< /Filter /Standard /V 2 >>\nendobj\ntrailer\n<< /Encrypt 1 0 R",
            ))
            .await
            .unwrap_err();
        assert_eq!(err, ExtractionError::Encrypted);
    }

    #[tokio::test]
    async fn test_pdf_without_text_is_rejected() {
        let err = PdfTextExtractor
            .extract(Bytes::from(blank_page_pdf()))
            .await
            .unwrap_err();
        assert_eq!(err, ExtractionError::NoText);
    }

    #[test]
    fn test_header_after_leading_bytes_is_accepted() {
        assert!(check_header(b"\r\n%PDF-1.7\n...").is_ok());
    }

    #[test]
    fn test_contains() {
        assert!(contains(b"<< /Encrypt 5 0 R >>", ENCRYPT_MARKER));
        assert!(!contains(b"<< /Root 1 0 R >>", ENCRYPT_MARKER));
        assert!(!contains(b"%PD", PDF_MAGIC));
    }

    #[test]
    fn test_error_messages_are_distinct() {
        let messages = [
            ExtractionError::Empty.to_string(),
            ExtractionError::NotPdf.to_string(),
            ExtractionError::Encrypted.to_string(),
            ExtractionError::Malformed("bad xref".to_string()).to_string(),
            ExtractionError::NoText.to_string(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(messages[3].contains("bad xref"));
    }
}
