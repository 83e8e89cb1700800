use std::path::{Path, PathBuf};

use mapa_core::error::MapaError;
use mapa_core::export::{default_output_name, OutputFormat};
use mapa_core::extraction::pdftotext::PdftotextExtractor;

use super::{resolve_vocabulary, Outcome};

pub fn run(
    inputs: &[PathBuf],
    output: Option<PathBuf>,
    format: Option<&str>,
    preset: Option<&str>,
    vocab_file: Option<PathBuf>,
) -> Result<Outcome, MapaError> {
    let vocab = resolve_vocabulary(preset, vocab_file)?;

    // An explicit --format wins, then the output extension, then xlsx
    let format = match format {
        Some(name) => name.parse::<OutputFormat>()?,
        None => output
            .as_deref()
            .and_then(OutputFormat::from_path)
            .unwrap_or_default(),
    };
    let output = match output {
        Some(path) => path,
        None => output_dir(inputs).join(default_output_name(
            chrono::Local::now().date_naive(),
            format,
        )),
    };

    PdftotextExtractor::ensure_available()?;
    let extractor = PdftotextExtractor::new();
    let summary = mapa_core::convert(inputs, &extractor, &vocab, &output, format)?;

    println!(
        "Wrote {} record(s) from {} document(s) to {}",
        summary.record_count,
        summary.documents_processed,
        summary.output_path.display()
    );
    if !summary.failures.is_empty() {
        eprintln!("{} document(s) could not be processed:", summary.failures.len());
        for failure in &summary.failures {
            eprintln!("  {}: {}", failure.document, failure.reason);
        }
    }

    if summary.record_count == 0 {
        Ok(Outcome::NoRecords)
    } else {
        Ok(Outcome::Done)
    }
}

/// Directory the default output lands in: the first input if it is a
/// directory, else its parent, else the working directory.
fn output_dir(inputs: &[PathBuf]) -> PathBuf {
    let Some(first) = inputs.first() else {
        return PathBuf::from(".");
    };
    if first.is_dir() {
        return first.clone();
    }
    match first.parent() {
        Some(parent) if parent != Path::new("") => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
