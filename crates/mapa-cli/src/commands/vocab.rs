use std::path::Path;

use mapa_core::error::MapaError;
use mapa_core::vocab::{builtin, load_vocabulary, Vocabulary};

use super::Outcome;

pub fn list() -> Result<Outcome, MapaError> {
    println!("Available vocabulary presets:\n");
    for name in builtin::PRESETS {
        let def = builtin::load_preset(name)?;
        let marker = if *name == builtin::DEFAULT_PRESET {
            " [default]"
        } else {
            ""
        };
        println!("  {:<12} {} (v{}){}", name, def.name, def.version, marker);
        if let Some(ref desc) = def.description {
            println!("               {}", desc);
        }
        println!();
    }
    Ok(Outcome::Done)
}

pub fn show(name: &str) -> Result<Outcome, MapaError> {
    let def = builtin::load_preset(name)?;
    println!("{}", serde_json::to_string_pretty(&def)?);
    Ok(Outcome::Done)
}

pub fn validate(file: &Path) -> Result<Outcome, MapaError> {
    let def = load_vocabulary(file)?;
    let vocab = Vocabulary::compile(&def)?;

    println!("Vocabulary '{}' (v{}) is valid.", def.name, def.version);
    println!("  Header anchor groups: {}", def.header_anchors.len());
    println!("  Column synonyms: {}", vocab.column_synonyms.len());
    println!("  Garbage tokens: {}", vocab.garbage_tokens.len());
    println!("  Unit rules: {}", vocab.unit_rules.len());
    println!("  Robotic suite label: {}", vocab.robotic_label);

    let mut warnings = Vec::new();
    if def.unit_rules.is_empty() {
        warnings.push("no unit rules; file names are used as units verbatim".to_string());
    }
    for field in [
        mapa_core::model::Field::Location,
        mapa_core::model::Field::Subactivity,
        mapa_core::model::Field::DurationMinutes,
    ] {
        if !def.column_synonyms.iter().any(|s| s.field == field) {
            warnings.push(format!("no column synonym maps to '{field}'"));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(Outcome::Done)
}
