pub mod convert;
pub mod inspect;
pub mod parse;
pub mod vocab;

use std::path::PathBuf;

use mapa_core::error::MapaError;
use mapa_core::vocab::{builtin, load_vocabulary, Vocabulary};

/// How a command finished, mapped to the process exit code in `main`.
pub enum Outcome {
    Done,
    NoRecords,
}

/// Compile the vocabulary named on the command line.
///
/// A `--vocab` file wins over `--preset`; with neither, the default preset.
pub fn resolve_vocabulary(
    preset: Option<&str>,
    vocab_file: Option<PathBuf>,
) -> Result<Vocabulary, MapaError> {
    let def = match vocab_file {
        Some(path) => load_vocabulary(&path)?,
        None => builtin::load_preset(preset.unwrap_or(builtin::DEFAULT_PRESET))?,
    };
    Vocabulary::compile(&def)
}
