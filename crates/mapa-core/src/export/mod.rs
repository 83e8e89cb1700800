pub mod csv_out;
pub mod xlsx;

use crate::error::MapaError;
use crate::model::ScheduleRecord;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

pub const SHEET_NAME: &str = "Activity Map";

/// Row 1: which columns an importer requires.
pub const MARKERS: [&str; 9] = [
    "Required", "Required", "Required", "Required", "Optional", "Optional", "Optional",
    "Optional", "Optional",
];

/// Row 2: canonical column headers.
pub const HEADERS: [&str; 9] = [
    "Date",
    "Unit",
    "Scale",
    "Location",
    "Subactivity",
    "Start time",
    "Duration (min)",
    "Professional",
    "External agent",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Integer(u32),
    Empty,
}

impl Cell {
    fn text(s: &str) -> Cell {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{s}"),
            Cell::Integer(n) => write!(f, "{n}"),
            Cell::Empty => Ok(()),
        }
    }
}

/// Logical sheet layout: marker row, header row, one row per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    pub rows: Vec<Vec<Cell>>,
}

impl SheetLayout {
    pub fn from_records(records: &[ScheduleRecord]) -> SheetLayout {
        let mut rows = Vec::with_capacity(records.len() + 2);
        rows.push(MARKERS.iter().map(|m| Cell::text(m)).collect());
        rows.push(HEADERS.iter().map(|h| Cell::text(h)).collect());
        rows.extend(records.iter().map(record_cells));
        SheetLayout { rows }
    }

    pub fn record_count(&self) -> usize {
        self.rows.len().saturating_sub(2)
    }
}

fn record_cells(record: &ScheduleRecord) -> Vec<Cell> {
    vec![
        Cell::text(&record.date),
        Cell::text(&record.unit),
        Cell::text(&record.scale),
        Cell::text(&record.location),
        Cell::text(&record.subactivity),
        Cell::text(&record.start_time),
        record.duration_minutes.map_or(Cell::Empty, Cell::Integer),
        Cell::text(&record.professional),
        Cell::text(&record.external_agent),
    ]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Xlsx,
    Csv,
}

impl OutputFormat {
    /// Infer the format from a file extension, if it names one.
    pub fn from_path(path: &Path) -> Option<OutputFormat> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = MapaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "xlsx" => Ok(OutputFormat::Xlsx),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(MapaError::Export(format!(
                "unknown output format '{other}' (expected xlsx or csv)"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub record_count: usize,
}

/// Write records to `path`. Zero records still produce the two header rows.
pub fn export_records(
    records: &[ScheduleRecord],
    path: &Path,
    format: OutputFormat,
) -> Result<ExportSummary, MapaError> {
    let layout = SheetLayout::from_records(records);
    match format {
        OutputFormat::Xlsx => xlsx::write_xlsx(&layout, path)?,
        OutputFormat::Csv => csv_out::write_csv(&layout, path)?,
    }

    info!(
        path = %path.display(),
        records = layout.record_count(),
        format = %format,
        "schedule exported"
    );

    Ok(ExportSummary {
        path: path.to_path_buf(),
        record_count: layout.record_count(),
    })
}

/// Default output file name for a run on `date`.
pub fn default_output_name(date: NaiveDate, format: OutputFormat) -> String {
    format!(
        "surgical_map_{}.{}",
        date.format("%Y_%m_%d"),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_layout_header_block() {
        let layout = SheetLayout::from_records(&[]);
        assert_eq!(layout.rows.len(), 2);
        assert_eq!(layout.record_count(), 0);
        assert_eq!(layout.rows[0][3], Cell::Text("Required".into()));
        assert_eq!(layout.rows[0][4], Cell::Text("Optional".into()));
        assert_eq!(layout.rows[1][6], Cell::Text("Duration (min)".into()));
    }

    #[test]
    fn test_layout_record_row_order() {
        let record = ScheduleRecord {
            date: "02/06/2025".into(),
            unit: "EMEC".into(),
            location: "SALA 1".into(),
            subactivity: "Biopsia".into(),
            start_time: "07:00".into(),
            duration_minutes: Some(0),
            external_agent: "Dr. Melo".into(),
            ..Default::default()
        };
        let layout = SheetLayout::from_records(&[record]);
        assert_eq!(
            layout.rows[2],
            vec![
                Cell::Text("02/06/2025".into()),
                Cell::Text("EMEC".into()),
                Cell::Empty,
                Cell::Text("SALA 1".into()),
                Cell::Text("Biopsia".into()),
                Cell::Text("07:00".into()),
                Cell::Integer(0),
                Cell::Empty,
                Cell::Text("Dr. Melo".into()),
            ]
        );
    }

    #[test]
    fn test_output_format_from_path() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out/map.CSV")),
            Some(OutputFormat::Csv)
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("map.xlsx")),
            Some(OutputFormat::Xlsx)
        );
        assert_eq!(OutputFormat::from_path(Path::new("map.pdf")), None);
        assert_eq!(OutputFormat::from_path(Path::new("map")), None);
    }

    #[test]
    fn test_default_output_name() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(
            default_output_name(date, OutputFormat::Xlsx),
            "surgical_map_2025_03_07.xlsx"
        );
    }
}
