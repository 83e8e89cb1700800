use serde::{Deserialize, Serialize};
use std::fmt;

/// One physical table row as delivered by the PDF backend.
pub type RawRow = Vec<String>;

/// Semantic field a source column can be mapped onto.
///
/// `Patient` and `SurgicalNotice` are auxiliary: they take part in cleanup
/// but never reach a [`ScheduleRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Location,
    Subactivity,
    StartTime,
    DurationMinutes,
    Professional,
    ExternalAgent,
    Patient,
    SurgicalNotice,
}

impl Field {
    pub fn is_auxiliary(self) -> bool {
        matches!(self, Field::Patient | Field::SurgicalNotice)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Location => "location",
            Field::Subactivity => "subactivity",
            Field::StartTime => "start_time",
            Field::DurationMinutes => "duration_minutes",
            Field::Professional => "professional",
            Field::ExternalAgent => "external_agent",
            Field::Patient => "patient",
            Field::SurgicalNotice => "surgical_notice",
        };
        write!(f, "{name}")
    }
}

/// A shaped table column: either a known field or the raw header label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    Field(Field),
    Unmapped(String),
}

/// One normalized surgery booking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub date: String,
    pub unit: String,
    /// Reserved, always empty for now.
    pub scale: String,
    pub location: String,
    pub subactivity: String,
    pub start_time: String,
    pub duration_minutes: Option<u32>,
    pub professional: String,
    pub external_agent: String,
}

/// A document that could not be turned into records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFailure {
    pub document: String,
    pub reason: String,
}
