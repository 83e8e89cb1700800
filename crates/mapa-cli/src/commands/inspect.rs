use std::path::Path;

use mapa_core::error::MapaError;
use mapa_core::export::xlsx::read_records;

use super::Outcome;
use crate::output;

pub fn run(xlsx_file: &Path, output_format: &str) -> Result<Outcome, MapaError> {
    let records = read_records(xlsx_file)?;

    match output_format {
        "json" => output::json::print(&records)?,
        _ => {
            output::table::print(&records);
            eprintln!("{} record(s) in {}", records.len(), xlsx_file.display());
        }
    }

    Ok(Outcome::Done)
}
