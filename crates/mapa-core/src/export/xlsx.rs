use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;

use crate::error::MapaError;
use crate::export::{Cell, SheetLayout, HEADERS, MARKERS, SHEET_NAME};
use crate::model::ScheduleRecord;

/// Write a sheet layout as a single-worksheet xlsx file.
pub fn write_xlsx(layout: &SheetLayout, path: &Path) -> Result<(), MapaError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (row_idx, row) in layout.rows.iter().enumerate() {
        let r = u32::try_from(row_idx)
            .map_err(|_| MapaError::Export("too many rows for one worksheet".into()))?;
        for (col_idx, cell) in row.iter().enumerate() {
            let c = u16::try_from(col_idx)
                .map_err(|_| MapaError::Export("too many columns for one worksheet".into()))?;
            match cell {
                Cell::Text(s) => {
                    worksheet.write_string(r, c, s)?;
                }
                Cell::Integer(n) => {
                    worksheet.write_number(r, c, f64::from(*n))?;
                }
                Cell::Empty => {}
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

/// Read schedule records back from an exported xlsx file.
///
/// The marker row and header row must match the export layout exactly.
pub fn read_records(path: &Path) -> Result<Vec<ScheduleRecord>, MapaError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet = workbook.worksheet_range(SHEET_NAME)?;

    for (col, expected) in MARKERS.iter().enumerate() {
        let found = text_at(&sheet, 0, col);
        if found != *expected {
            return Err(MapaError::Export(format!(
                "not a schedule export: marker row column {} is '{}', expected '{}'",
                col + 1,
                found,
                expected
            )));
        }
    }
    for (col, expected) in HEADERS.iter().enumerate() {
        let found = text_at(&sheet, 1, col);
        if found != *expected {
            return Err(MapaError::Export(format!(
                "not a schedule export: header column {} is '{}', expected '{}'",
                col + 1,
                found,
                expected
            )));
        }
    }

    let last_row = sheet.end().map_or(0, |(r, _)| r);
    let mut records = Vec::new();
    for row in 2..=last_row {
        let record = ScheduleRecord {
            date: text_at(&sheet, row, 0),
            unit: text_at(&sheet, row, 1),
            scale: text_at(&sheet, row, 2),
            location: text_at(&sheet, row, 3),
            subactivity: text_at(&sheet, row, 4),
            start_time: text_at(&sheet, row, 5),
            duration_minutes: minutes_at(&sheet, row, 6),
            professional: text_at(&sheet, row, 7),
            external_agent: text_at(&sheet, row, 8),
        };
        if record != ScheduleRecord::default() {
            records.push(record);
        }
    }

    Ok(records)
}

fn text_at(sheet: &calamine::Range<Data>, row: u32, col: usize) -> String {
    let Ok(col) = u32::try_from(col) else {
        return String::new();
    };
    match sheet.get_value((row, col)) {
        Some(Data::String(s)) => s.trim().to_string(),
        Some(Data::Float(f)) => f.to_string(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Empty) | None => String::new(),
        Some(other) => format!("{other}"),
    }
}

fn minutes_at(sheet: &calamine::Range<Data>, row: u32, col: u32) -> Option<u32> {
    match sheet.get_value((row, col))? {
        Data::Float(f) if *f >= 0.0 => Some(f.round() as u32),
        Data::Int(i) => u32::try_from(*i).ok(),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.xlsx");
        let records = vec![
            ScheduleRecord {
                date: "02/06/2025".into(),
                unit: "Unidade Contorno".into(),
                location: "SALA 1".into(),
                subactivity: "Biopsia".into(),
                start_time: "07:00".into(),
                duration_minutes: Some(45),
                professional: "Dra. Lima".into(),
                external_agent: "Dr. Melo".into(),
                ..Default::default()
            },
            ScheduleRecord {
                date: "02/06/2025".into(),
                unit: "Unidade Contorno".into(),
                location: "SALA ROBOTICA (NL)".into(),
                start_time: "09:00".into(),
                ..Default::default()
            },
        ];

        write_xlsx(&SheetLayout::from_records(&records), &path).unwrap();
        assert_eq!(read_records(&path).unwrap(), records);
    }

    #[test]
    fn test_header_only_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");
        write_xlsx(&SheetLayout::from_records(&[]), &path).unwrap();
        assert!(read_records(&path).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_foreign_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("other.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME).unwrap();
        sheet.write_string(0, 0, "Something else").unwrap();
        workbook.save(&path).unwrap();

        assert!(matches!(read_records(&path), Err(MapaError::Export(_))));
    }
}
