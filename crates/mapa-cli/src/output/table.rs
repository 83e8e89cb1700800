use mapa_core::model::ScheduleRecord;

const COLUMNS: [&str; 7] = [
    "Unit",
    "Location",
    "Start",
    "Min",
    "Subactivity",
    "Professional",
    "External agent",
];

pub fn print(records: &[ScheduleRecord]) {
    print!("{}", format_records(records));
}

/// Render records as a left-aligned text table, one record per line.
pub fn format_records(records: &[ScheduleRecord]) -> String {
    if records.is_empty() {
        return "No schedule records found.\n".to_string();
    }

    let rows: Vec<[String; 7]> = records.iter().map(row_cells).collect();
    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    if let Some(date) = records.first().map(|r| r.date.as_str()) {
        if !date.is_empty() {
            out.push_str(&format!("Date: {date}\n\n"));
        }
    }
    push_line(&mut out, &COLUMNS.map(String::from), &widths);
    let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(total));
    out.push('\n');
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn row_cells(record: &ScheduleRecord) -> [String; 7] {
    [
        record.unit.clone(),
        record.location.clone(),
        record.start_time.clone(),
        record
            .duration_minutes
            .map(|m| m.to_string())
            .unwrap_or_default(),
        record.subactivity.clone(),
        record.professional.clone(),
        record.external_agent.clone(),
    ]
}

fn push_line(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        assert_eq!(format_records(&[]), "No schedule records found.\n");
    }

    #[test]
    fn test_columns_align() {
        let records = vec![
            ScheduleRecord {
                date: "02/06/2025".into(),
                unit: "EMEC".into(),
                location: "SALA 1".into(),
                start_time: "07:00".into(),
                duration_minutes: Some(90),
                subactivity: "Biopsia".into(),
                ..Default::default()
            },
            ScheduleRecord {
                date: "02/06/2025".into(),
                unit: "EMEC".into(),
                location: "SALA ROBOTICA (NL)".into(),
                start_time: "09:00".into(),
                ..Default::default()
            },
        ];
        let table = format_records(&records);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Date: 02/06/2025");
        assert!(lines[2].starts_with("Unit  Location            Start  Min"));
        assert!(lines[4].starts_with("EMEC  SALA 1              07:00  90   Biopsia"));
        assert_eq!(lines[5], "EMEC  SALA ROBOTICA (NL)  09:00");
    }
}
