pub mod dataset;
pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod vocab;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use dataset::{BatchOutcome, DatasetBuilder};
use error::MapaError;
use export::{export_records, OutputFormat};
use extraction::PdfExtractor;
use model::{DocumentFailure, ScheduleRecord};
use parsing::normalize::canonical_unit;
use vocab::Vocabulary;

pub use parsing::process_pages;

/// One schedule PDF to process: its file name and raw bytes.
#[derive(Debug, Clone)]
pub struct DocumentSource {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl DocumentSource {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        DocumentSource {
            name: name.into(),
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, MapaError> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(DocumentSource { name, bytes })
    }
}

/// Result of a full convert run.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionSummary {
    pub output_path: PathBuf,
    pub record_count: usize,
    pub documents_processed: usize,
    pub failures: Vec<DocumentFailure>,
}

/// Hospital unit of a document: its file stem, canonicalized.
pub fn document_unit(name: &str, vocab: &Vocabulary) -> String {
    let stem = Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name);
    canonical_unit(stem, vocab)
}

/// Extract and parse one document into schedule records.
pub fn process_document(
    source: &DocumentSource,
    extractor: &dyn PdfExtractor,
    vocab: &Vocabulary,
) -> Result<Vec<ScheduleRecord>, MapaError> {
    let pages = extractor.extract_pages(&source.bytes)?;
    let unit = document_unit(&source.name, vocab);
    let records = process_pages(&pages, &unit, vocab);

    info!(
        document = %source.name,
        backend = extractor.backend_name(),
        unit = %unit,
        pages = pages.len(),
        records = records.len(),
        "document processed"
    );
    Ok(records)
}

/// Process documents in submission order.
///
/// A document that fails is recorded in the outcome and the batch moves on.
pub fn process_documents(
    sources: &[DocumentSource],
    extractor: &dyn PdfExtractor,
    vocab: &Vocabulary,
) -> BatchOutcome {
    let mut builder = DatasetBuilder::new();
    for source in sources {
        add_document(&mut builder, source, extractor, vocab);
    }
    builder.finish()
}

fn add_document(
    builder: &mut DatasetBuilder,
    source: &DocumentSource,
    extractor: &dyn PdfExtractor,
    vocab: &Vocabulary,
) {
    match process_document(source, extractor, vocab) {
        Ok(records) => builder.add_document(records),
        Err(e) => {
            warn!(document = %source.name, error = %e, "document failed");
            builder.add_failure(&source.name, e.to_string());
        }
    }
}

/// Expand directories into their PDF files, sorted by file name.
///
/// Explicit file paths are kept as given, in order.
pub fn collect_pdf_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>, MapaError> {
    let mut files = Vec::new();
    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let mut found = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry_path = entry?.path();
            let is_pdf = entry_path
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false);
            if is_pdf && entry_path.is_file() {
                found.push(entry_path);
            }
        }
        found.sort();
        files.extend(found);
    }
    Ok(files)
}

/// Main API entry point: convert schedule PDFs into one spreadsheet.
///
/// Unreadable or undecodable documents are reported in the summary rather
/// than aborting the run. A run with no records still writes the header rows.
pub fn convert(
    inputs: &[PathBuf],
    extractor: &dyn PdfExtractor,
    vocab: &Vocabulary,
    output: &Path,
    format: OutputFormat,
) -> Result<ConversionSummary, MapaError> {
    let files = collect_pdf_inputs(inputs)?;

    let mut builder = DatasetBuilder::new();
    for path in &files {
        match DocumentSource::from_path(path) {
            Ok(source) => add_document(&mut builder, &source, extractor, vocab),
            Err(e) => {
                warn!(document = %path.display(), error = %e, "document unreadable");
                builder.add_failure(&path.display().to_string(), e.to_string());
            }
        }
    }
    let outcome = builder.finish();

    if outcome.is_empty() {
        warn!(documents = files.len(), "no schedule records found");
    }

    let exported = export_records(&outcome.records, output, format)?;

    Ok(ConversionSummary {
        output_path: exported.path,
        record_count: exported.record_count,
        documents_processed: outcome.documents_processed,
        failures: outcome.failures,
    })
}
