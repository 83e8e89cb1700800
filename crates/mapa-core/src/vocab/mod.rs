pub mod builtin;
pub mod schema;

use crate::error::MapaError;
use crate::model::Field;
use regex::{Regex, RegexBuilder};
use schema::VocabularyDef;
use std::path::Path;

/// Load a vocabulary from a JSON file.
pub fn load_vocabulary(path: &Path) -> Result<VocabularyDef, MapaError> {
    let content = std::fs::read_to_string(path).map_err(|e| MapaError::VocabularyLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let def: VocabularyDef =
        serde_json::from_str(&content).map_err(|e| MapaError::VocabularyLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_vocabulary(&def)?;
    Ok(def)
}

/// Parse a vocabulary from a JSON string (no file path context).
pub fn parse_vocabulary_str(json: &str) -> Result<VocabularyDef, MapaError> {
    let def: VocabularyDef = serde_json::from_str(json).map_err(MapaError::Json)?;
    validate_vocabulary(&def)?;
    Ok(def)
}

/// Validate that a vocabulary is well-formed and all its patterns compile.
pub fn validate_vocabulary(def: &VocabularyDef) -> Result<(), MapaError> {
    if def.header_anchors.is_empty() {
        return Err(MapaError::VocabularyInvalid(
            "header_anchors must not be empty".into(),
        ));
    }

    for (i, group) in def.header_anchors.iter().enumerate() {
        if group.is_empty() || group.iter().any(|t| t.trim().is_empty()) {
            return Err(MapaError::VocabularyInvalid(format!(
                "header anchor group {} must list at least one non-empty token",
                i + 1
            )));
        }
    }

    if !def
        .column_synonyms
        .iter()
        .any(|s| s.field == Field::StartTime)
    {
        return Err(MapaError::VocabularyInvalid(
            "column_synonyms must map a column to start_time".into(),
        ));
    }

    if def.garbage_tokens.iter().any(|t| t.trim().is_empty()) {
        return Err(MapaError::VocabularyInvalid(
            "garbage tokens must not be empty".into(),
        ));
    }

    if def.robotic_suite.label.trim().is_empty() {
        return Err(MapaError::VocabularyInvalid(
            "robotic_suite label must not be empty".into(),
        ));
    }

    if def.anchor_scan_cells == 0 {
        return Err(MapaError::VocabularyInvalid(
            "anchor_scan_cells must be at least 1".into(),
        ));
    }

    let patterns = def
        .column_synonyms
        .iter()
        .map(|s| s.pattern.as_str())
        .chain(def.broken_words.iter().map(|b| b.pattern.as_str()))
        .chain(def.unit_rules.iter().map(|u| u.pattern.as_str()))
        .chain(std::iter::once(def.robotic_suite.pattern.as_str()));
    for pattern in patterns {
        compile_pattern(pattern)?;
    }

    Ok(())
}

fn compile_pattern(pattern: &str) -> Result<Regex, MapaError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| MapaError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// A garbage token, matched at either end of a field.
#[derive(Debug, Clone)]
pub struct GarbageToken {
    pub leading: Regex,
    pub trailing: Regex,
}

/// Compiled vocabulary shared by every pipeline stage.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub name: String,
    /// Uppercased anchor groups.
    pub header_anchors: Vec<Vec<String>>,
    /// Uppercased header artifacts.
    pub header_artifacts: Vec<String>,
    pub column_synonyms: Vec<(Regex, Field)>,
    pub garbage_tokens: Vec<GarbageToken>,
    pub broken_words: Vec<(Regex, String)>,
    pub unit_rules: Vec<(Regex, String)>,
    pub robotic_pattern: Regex,
    pub robotic_label: String,
    pub min_fragment_len: usize,
    pub anchor_scan_cells: usize,
}

impl Vocabulary {
    pub fn compile(def: &VocabularyDef) -> Result<Vocabulary, MapaError> {
        validate_vocabulary(def)?;

        let column_synonyms = def
            .column_synonyms
            .iter()
            .map(|s| Ok((compile_pattern(&s.pattern)?, s.field)))
            .collect::<Result<Vec<_>, MapaError>>()?;

        let garbage_tokens = def
            .garbage_tokens
            .iter()
            .map(|token| {
                let escaped = regex::escape(token.trim());
                Ok(GarbageToken {
                    leading: compile_pattern(&format!(r"^\s*{escaped}(?:\s+|$)"))?,
                    trailing: compile_pattern(&format!(r"(?:^|\s+){escaped}\s*$"))?,
                })
            })
            .collect::<Result<Vec<_>, MapaError>>()?;

        let broken_words = def
            .broken_words
            .iter()
            .map(|b| Ok((compile_pattern(&b.pattern)?, b.replacement.clone())))
            .collect::<Result<Vec<_>, MapaError>>()?;

        let unit_rules = def
            .unit_rules
            .iter()
            .map(|u| Ok((compile_pattern(&u.pattern)?, u.unit.clone())))
            .collect::<Result<Vec<_>, MapaError>>()?;

        Ok(Vocabulary {
            name: def.name.clone(),
            header_anchors: def
                .header_anchors
                .iter()
                .map(|group| group.iter().map(|t| t.trim().to_uppercase()).collect())
                .collect(),
            header_artifacts: def
                .header_artifacts
                .iter()
                .map(|t| t.trim().to_uppercase())
                .filter(|t| !t.is_empty())
                .collect(),
            column_synonyms,
            garbage_tokens,
            broken_words,
            unit_rules,
            robotic_pattern: compile_pattern(&def.robotic_suite.pattern)?,
            robotic_label: def.robotic_suite.label.trim().to_string(),
            min_fragment_len: def.min_fragment_len,
            anchor_scan_cells: def.anchor_scan_cells,
        })
    }

    /// The default preset, compiled.
    pub fn builtin_default() -> Result<Vocabulary, MapaError> {
        Vocabulary::compile(&builtin::load_preset(builtin::DEFAULT_PRESET)?)
    }

    /// Map a raw header label to a field, first matching synonym wins.
    pub fn field_for_header(&self, header: &str) -> Option<Field> {
        let header = header.trim();
        self.column_synonyms
            .iter()
            .find(|(pattern, _)| pattern.is_match(header))
            .map(|(_, field)| *field)
    }

    /// Whether a cell looks like a leftover header fragment.
    pub fn is_header_artifact(&self, cell: &str) -> bool {
        let upper = cell.to_uppercase();
        self.header_artifacts.iter().any(|t| upper.contains(t.as_str()))
    }
}
