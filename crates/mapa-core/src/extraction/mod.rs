pub mod pdftotext;
pub mod table;

use crate::error::MapaError;
use crate::model::RawRow;

/// Table content extracted from a single page of a PDF.
#[derive(Debug, Clone, Default)]
pub struct PageTable {
    pub page_number: usize,
    /// Rows of positional cells, not yet labeled.
    pub rows: Vec<RawRow>,
    /// Full page text, used for metadata such as the service date.
    pub text: String,
}

/// Trait for PDF table extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract table rows from PDF bytes, returning one PageTable per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageTable>, MapaError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
