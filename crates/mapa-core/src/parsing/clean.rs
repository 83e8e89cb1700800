use crate::model::{Field, ScheduleRecord};
use crate::parsing::normalize::{is_robotic_suite, repair_broken_words, strip_garbage};
use crate::parsing::shape::ShapedTable;
use crate::parsing::values::{extract_start_time, parse_duration_minutes};
use crate::vocab::Vocabulary;

/// Turn a shaped page table into schedule records.
///
/// Location is forward-filled over every row of the page, including rows
/// that are dropped later for lacking a start time. Rows without a leading
/// `HH:MM` in the start-time column are header remnants or spacers and are
/// skipped. Unmapped and auxiliary columns are left behind here.
pub fn clean_page(table: &ShapedTable, vocab: &Vocabulary) -> Vec<ScheduleRecord> {
    let mut last_location = String::new();
    let mut records = Vec::new();

    for row in &table.rows {
        let location = table.cell(row, Field::Location).trim();
        if !location.is_empty() {
            last_location = location.to_string();
        }

        let Some(start_time) = extract_start_time(table.cell(row, Field::StartTime)) else {
            continue;
        };

        let mut record = ScheduleRecord {
            location: last_location.clone(),
            subactivity: table.cell(row, Field::Subactivity).trim().to_string(),
            start_time,
            duration_minutes: parse_duration_minutes(table.cell(row, Field::DurationMinutes)),
            professional: table.cell(row, Field::Professional).trim().to_string(),
            external_agent: table.cell(row, Field::ExternalAgent).trim().to_string(),
            ..Default::default()
        };
        tidy_record(&mut record, vocab);
        records.push(record);
    }

    records
}

/// Text-level cleanup of one record. Applying it twice changes nothing.
pub fn tidy_record(record: &mut ScheduleRecord, vocab: &Vocabulary) {
    record.location = repair_broken_words(&record.location, vocab);
    record.subactivity = strip_garbage(&record.subactivity, vocab);
    record.professional = strip_garbage(&record.professional, vocab);
    record.external_agent = strip_garbage(&record.external_agent, vocab);

    // Robotic-suite bookings are placeholders: location only.
    if is_robotic_suite(&record.location, vocab) {
        record.location = vocab.robotic_label.clone();
        record.subactivity.clear();
        record.duration_minutes = None;
        record.professional.clear();
        record.external_agent.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawRow;
    use crate::parsing::shape::shape_rows;
    use pretty_assertions::assert_eq;

    fn row(cells: &[&str]) -> RawRow {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn header() -> RawRow {
        row(&[
            "SALA",
            "HORA",
            "PACIENTE",
            "PROCEDIMENTO",
            "DR.PREV",
            "ANESTESISTAS",
            "CIRURGIAO",
        ])
    }

    fn clean(rows: Vec<RawRow>) -> Vec<ScheduleRecord> {
        let vocab = Vocabulary::builtin_default().unwrap();
        let table = shape_rows(&header(), rows, &vocab);
        clean_page(&table, &vocab)
    }

    #[test]
    fn test_full_record() {
        let records = clean(vec![row(&[
            " SALA 03 ",
            "07:30",
            "Maria S.",
            "Colecistectomia CIRURGIAO",
            "01:30",
            "Dra. Lima",
            "Dr. Souza EQUIPAMENTOS",
        ])]);
        assert_eq!(
            records,
            vec![ScheduleRecord {
                location: "SALA 03".into(),
                subactivity: "Colecistectomia".into(),
                start_time: "07:30".into(),
                duration_minutes: Some(90),
                professional: "Dra. Lima".into(),
                external_agent: "Dr. Souza".into(),
                ..Default::default()
            }]
        );
    }

    #[test]
    fn test_location_forward_filled() {
        let records = clean(vec![
            row(&["SALA 01", "07:00", "", "Artroscopia", "01:00", "", ""]),
            row(&["", "09:00", "", "Meniscectomia", "00:45", "", ""]),
            row(&["SALA 02", "07:00", "", "Biopsia", "00:30", "", ""]),
            row(&["", "08:00", "", "Exerese", "00:20", "", ""]),
        ]);
        let locations: Vec<&str> = records.iter().map(|r| r.location.as_str()).collect();
        assert_eq!(locations, vec!["SALA 01", "SALA 01", "SALA 02", "SALA 02"]);
    }

    #[test]
    fn test_forward_fill_passes_through_dropped_rows() {
        let records = clean(vec![
            row(&["SALA HEMODIN AMICA", "", "", "", "", "", ""]),
            row(&["", "10:00", "", "Cateterismo", "01:00", "", ""]),
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].location, "SALA HEMODINAMICA");
    }

    #[test]
    fn test_leading_location_empty_stays_empty() {
        let records = clean(vec![row(&["", "07:00", "", "Biopsia", "", "", ""])]);
        assert_eq!(records[0].location, "");
    }

    #[test]
    fn test_rows_without_time_dropped() {
        let records = clean(vec![
            row(&["SALA 01", "HORA", "", "", "", "", ""]),
            row(&["SALA 01", "", "", "Texto solto", "", "", ""]),
            row(&["SALA 01", "7h", "", "Biopsia", "", "", ""]),
        ]);
        assert!(records.is_empty());
    }

    #[test]
    fn test_time_with_glued_text() {
        let records = clean(vec![row(&["SALA 01", "07:30 08:10", "", "Biopsia", "", "", ""])]);
        assert_eq!(records[0].start_time, "07:30");
    }

    #[test]
    fn test_unparsable_duration_is_empty_not_excluded() {
        let records = clean(vec![row(&["SALA 01", "07:30", "", "Biopsia", "a definir", "", ""])]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].duration_minutes, None);
    }

    #[test]
    fn test_robotic_suite_blanked() {
        let records = clean(vec![row(&[
            "Sala Robotic a 1",
            "07:00",
            "Joao P.",
            "Prostatectomia radical",
            "04:00",
            "Dr. Reis",
            "Dr. Alves",
        ])]);
        assert_eq!(
            records,
            vec![ScheduleRecord {
                location: "SALA ROBOTICA (NL)".into(),
                start_time: "07:00".into(),
                ..Default::default()
            }]
        );
    }

    #[test]
    fn test_tidy_record_is_idempotent() {
        let vocab = Vocabulary::builtin_default().unwrap();
        let mut records = clean(vec![
            row(&["SALA INTELIGE NTE", "07:00", "", "ANESTESISTAS Biopsia", "00:30", "MATERIAIS", "Dr. Melo CIRURGIAO"]),
            row(&["Robótica", "09:00", "", "Nefrectomia", "03:00", "", ""]),
        ]);
        let before = records.clone();
        for record in &mut records {
            tidy_record(record, &vocab);
        }
        assert_eq!(records, before);
    }
}
