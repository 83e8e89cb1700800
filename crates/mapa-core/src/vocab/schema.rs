use crate::model::Field;
use serde::{Deserialize, Serialize};

/// Tunable vocabulary for one family of schedule reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Each group lists alternative spellings; a header row must contain one
    /// token from every group.
    pub header_anchors: Vec<Vec<String>>,
    /// Tokens marking a continuation cell as a leftover header fragment.
    #[serde(default)]
    pub header_artifacts: Vec<String>,
    /// Ordered header patterns, first match wins.
    pub column_synonyms: Vec<ColumnSynonymDef>,
    /// Stray label words stripped from the ends of free-text fields.
    #[serde(default)]
    pub garbage_tokens: Vec<String>,
    #[serde(default)]
    pub broken_words: Vec<BrokenWordDef>,
    /// Ordered unit-name rules, first match wins.
    #[serde(default)]
    pub unit_rules: Vec<UnitRuleDef>,
    pub robotic_suite: RoboticSuiteDef,
    #[serde(default = "default_min_fragment_len")]
    pub min_fragment_len: usize,
    #[serde(default = "default_anchor_scan_cells")]
    pub anchor_scan_cells: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSynonymDef {
    pub pattern: String,
    pub field: Field,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokenWordDef {
    pub pattern: String,
    pub replacement: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitRuleDef {
    pub pattern: String,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoboticSuiteDef {
    pub pattern: String,
    pub label: String,
}

fn default_min_fragment_len() -> usize {
    5
}

fn default_anchor_scan_cells() -> usize {
    5
}
