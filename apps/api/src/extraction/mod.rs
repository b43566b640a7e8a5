//! Résumé text extraction.
//!
//! Extraction never fails: an unreadable or unsupported document yields an
//! empty string and the scorer falls back to its defaults.

mod docx;

use async_trait::async_trait;
use tracing::warn;

/// Upload extensions accepted by the service, lowercase.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "txt"];

/// Lowercased extension of `file_name`, if it has one.
pub fn file_extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

pub fn is_allowed_file(file_name: &str) -> bool {
    file_extension(file_name).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

/// Turns an uploaded document into plain text. Carried in `AppState` as
/// `Arc<dyn TextExtractor>`.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, file_name: &str, bytes: Vec<u8>) -> String;
}

/// PDF via `pdf-extract`, `.docx` paragraphs via `zip` and `quick-xml`,
/// plain text as lossy UTF-8. Legacy binary `.doc` files are not parsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTextExtractor;

#[async_trait]
impl TextExtractor for DocumentTextExtractor {
    async fn extract_text(&self, file_name: &str, bytes: Vec<u8>) -> String {
        match file_extension(file_name).as_deref() {
            Some("pdf") => {
                extract_blocking(file_name, "PDF", move || {
                    pdf_extract::extract_text_from_mem(&bytes).map_err(anyhow::Error::from)
                })
                .await
            }
            Some("docx") => {
                extract_blocking(file_name, "DOCX", move || docx::extract_text_from_docx(&bytes))
                    .await
            }
            Some("txt") => String::from_utf8_lossy(&bytes).into_owned(),
            Some("doc") => {
                warn!(file = file_name, "No text extraction for .doc files");
                String::new()
            }
            _ => {
                warn!(file = file_name, "Unsupported résumé file type");
                String::new()
            }
        }
    }
}

/// Runs a parser on the blocking pool. Parsers are CPU-bound and pdf-extract
/// panics on some malformed inputs; both failures log and yield "".
async fn extract_blocking<F>(file_name: &str, kind: &'static str, parse: F) -> String
where
    F: FnOnce() -> anyhow::Result<String> + Send + 'static,
{
    match tokio::task::spawn_blocking(parse).await {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!(file = file_name, error = %e, "{kind} text extraction failed");
            String::new()
        }
        Err(e) => {
            warn!(file = file_name, error = %e, "{kind} text extraction panicked");
            String::new()
        }
    }
}
