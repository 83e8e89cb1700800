use crate::model::RawRow;
use crate::parsing::values::starts_with_time;
use crate::vocab::Vocabulary;

/// Reassemble logical rows from physical ones.
///
/// Source tables wrap long free-text cells onto following lines without
/// repeating the time marker. A row with a clock value in its leading cells
/// starts a new record; rows without one are folded into that record.
pub fn merge_rows(rows: &[RawRow], vocab: &Vocabulary) -> Vec<RawRow> {
    rows.iter()
        .fold(MergeState::default(), |state, row| state.push(row, vocab))
        .finish()
}

#[derive(Debug, Default)]
struct MergeState {
    merged: Vec<RawRow>,
    pending: Option<RawRow>,
}

impl MergeState {
    fn push(mut self, row: &RawRow, vocab: &Vocabulary) -> Self {
        if is_anchor_row(row, vocab) {
            if let Some(done) = self.pending.replace(row.clone()) {
                self.merged.push(done);
            }
        } else if let Some(pending) = self.pending.as_mut() {
            absorb_continuation(pending, row, vocab);
        } else if row.iter().any(|cell| !cell.trim().is_empty()) {
            self.merged.push(row.clone());
        }
        self
    }

    fn finish(mut self) -> Vec<RawRow> {
        self.merged.extend(self.pending);
        self.merged
    }
}

fn is_anchor_row(row: &RawRow, vocab: &Vocabulary) -> bool {
    row.iter()
        .take(vocab.anchor_scan_cells)
        .any(|cell| starts_with_time(cell))
}

fn absorb_continuation(pending: &mut RawRow, row: &RawRow, vocab: &Vocabulary) {
    for (slot, cell) in pending.iter_mut().zip(row) {
        let cell = cell.trim();
        if cell.is_empty() || vocab.is_header_artifact(cell) {
            continue;
        }

        if slot.trim().is_empty() {
            *slot = cell.to_string();
        } else if cell.chars().count() > vocab.min_fragment_len {
            *slot = format!("{} {}", slot.trim_end(), cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(cells: &[&str]) -> RawRow {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn vocab() -> Vocabulary {
        Vocabulary::builtin_default().unwrap()
    }

    #[test]
    fn test_continuation_appends_long_fragment() {
        let rows = vec![
            row(&["Room A", "08:00", "Appendectomy", "01:00", "Dr. Smith"]),
            row(&["", "", "(robotic assist)", "", ""]),
        ];
        let merged = merge_rows(&rows, &vocab());
        assert_eq!(
            merged,
            vec![row(&[
                "Room A",
                "08:00",
                "Appendectomy (robotic assist)",
                "01:00",
                "Dr. Smith"
            ])]
        );
    }

    #[test]
    fn test_short_fragment_dropped() {
        let rows = vec![
            row(&["Room A", "08:00", "Appendectomy", "01:00", "Dr. Smith"]),
            row(&["", "", "(RA)", "", ""]),
        ];
        let merged = merge_rows(&rows, &vocab());
        assert_eq!(merged[0][2], "Appendectomy");
    }

    #[test]
    fn test_continuation_fills_empty_slot() {
        let rows = vec![
            row(&["", "08:00", "Herniorrafia", "", ""]),
            row(&["SL 3", "", "", "", "Dr."]),
        ];
        let merged = merge_rows(&rows, &vocab());
        assert_eq!(merged, vec![row(&["SL 3", "08:00", "Herniorrafia", "", "Dr."])]);
    }

    #[test]
    fn test_header_artifacts_discarded() {
        let rows = vec![
            row(&["SALA 1", "08:00", "Artroscopia", ""]),
            row(&["", "", "PROCEDIMENTO", "Nome do paciente"]),
        ];
        let merged = merge_rows(&rows, &vocab());
        assert_eq!(merged, vec![row(&["SALA 1", "08:00", "Artroscopia", ""])]);
    }

    #[test]
    fn test_time_rows_always_start_new_record() {
        let rows = vec![
            row(&["SALA 1", "08:00", "Artroscopia"]),
            row(&["", "09:30", "Biopsia hepatica"]),
            row(&["", "", "guiada por ultrassom"]),
            row(&["", "11:00", "Tireoidectomia"]),
        ];
        let merged = merge_rows(&rows, &vocab());
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[1][2], "Biopsia hepatica guiada por ultrassom");
        assert_eq!(merged[2][1], "11:00");
    }

    #[test]
    fn test_time_beyond_scan_window_is_not_anchor() {
        let rows = vec![
            row(&["SALA 1", "08:00", "Artroscopia", "", "", ""]),
            row(&["", "", "", "", "", "10:00"]),
        ];
        let merged = merge_rows(&rows, &vocab());
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0][5], "10:00");
    }

    #[test]
    fn test_orphan_rows_before_first_anchor() {
        let rows = vec![
            row(&["", "", ""]),
            row(&["Observacao geral", "", ""]),
            row(&["SALA 1", "08:00", "Artroscopia"]),
        ];
        let merged = merge_rows(&rows, &vocab());
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0][0], "Observacao geral");
    }

    #[test]
    fn test_no_rows() {
        assert!(merge_rows(&[], &vocab()).is_empty());
    }
}
