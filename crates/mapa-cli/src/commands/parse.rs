use std::path::{Path, PathBuf};

use mapa_core::error::MapaError;
use mapa_core::extraction::pdftotext::PdftotextExtractor;
use mapa_core::DocumentSource;

use super::{resolve_vocabulary, Outcome};
use crate::output;

pub fn run(
    pdf_file: &Path,
    output_format: &str,
    preset: Option<&str>,
    vocab_file: Option<PathBuf>,
) -> Result<Outcome, MapaError> {
    let vocab = resolve_vocabulary(preset, vocab_file)?;
    PdftotextExtractor::ensure_available()?;
    let source = DocumentSource::from_path(pdf_file)?;
    let extractor = PdftotextExtractor::new();
    let records = mapa_core::process_document(&source, &extractor, &vocab)?;

    match output_format {
        "json" => output::json::print(&records)?,
        _ => output::table::print(&records),
    }

    if records.is_empty() {
        Ok(Outcome::NoRecords)
    } else {
        Ok(Outcome::Done)
    }
}
