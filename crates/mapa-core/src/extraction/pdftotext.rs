use crate::error::MapaError;
use crate::extraction::table::rows_from_layout;
use crate::extraction::{PageTable, PdfExtractor};
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` to preserve whitespace alignment of tables, then
/// rebuilds positional cells from the aligned text.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }

    /// Fail once up front instead of once per document when the binary is
    /// missing.
    pub fn ensure_available() -> Result<(), MapaError> {
        if Self::is_available() {
            Ok(())
        } else {
            Err(MapaError::PdftotextNotFound)
        }
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageTable>, MapaError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| MapaError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| MapaError::Extraction(e.to_string()))?;

        let text = run_layout(tmpfile.path())?;
        Ok(split_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

fn run_layout(pdf_path: &Path) -> Result<String, MapaError> {
    let output = Command::new("pdftotext")
        .arg("-layout")
        .arg("-enc")
        .arg("UTF-8")
        .arg(pdf_path)
        .arg("-")
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MapaError::PdftotextNotFound
            } else {
                MapaError::Extraction(format!("pdftotext failed: {}", e))
            }
        })?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        return Err(MapaError::PdftotextFailed { code, stderr });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Split layout text into pages (form feed \x0c separates pages).
fn split_pages(text: &str) -> Vec<PageTable> {
    text.split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageTable {
            page_number: i + 1,
            rows: rows_from_layout(page_text),
            text: page_text.to_string(),
        })
        .filter(|p| !p.text.trim().is_empty() || p.page_number == 1)
        .collect()
}
