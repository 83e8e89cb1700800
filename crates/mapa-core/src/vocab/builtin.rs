use crate::error::MapaError;
use crate::vocab::schema::VocabularyDef;

const MATER_DEI_JSON: &str = include_str!("../../../../vocab/mater-dei.json");
const GENERIC_EN_JSON: &str = include_str!("../../../../vocab/generic-en.json");

/// Available predefined vocabularies.
pub const PRESETS: &[&str] = &["mater-dei", "generic-en"];

/// Preset used when none is named.
pub const DEFAULT_PRESET: &str = "mater-dei";

/// Load a predefined vocabulary by name.
pub fn load_preset(name: &str) -> Result<VocabularyDef, MapaError> {
    match name {
        "mater-dei" => Ok(serde_json::from_str(MATER_DEI_JSON)?),
        "generic-en" => Ok(serde_json::from_str(GENERIC_EN_JSON)?),
        _ => Err(MapaError::VocabularyInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{validate_vocabulary, Vocabulary};

    #[test]
    fn test_all_presets_valid() {
        for name in PRESETS {
            let def = load_preset(name).unwrap();
            validate_vocabulary(&def).unwrap();
            Vocabulary::compile(&def).unwrap();
        }
    }

    #[test]
    fn test_default_preset_constants() {
        let def = load_preset(DEFAULT_PRESET).unwrap();
        assert_eq!(def.min_fragment_len, 5);
        assert_eq!(def.robotic_suite.label, "SALA ROBOTICA (NL)");
        assert_eq!(def.header_anchors.len(), 3);
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("xyz").is_err());
    }
}
