use crate::model::{Column, Field, RawRow};
use crate::vocab::Vocabulary;

/// Merged rows fitted to the header's width, with labeled columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapedTable {
    pub columns: Vec<Column>,
    pub rows: Vec<RawRow>,
}

impl ShapedTable {
    /// Index of the first column mapped to `field`.
    pub fn column_of(&self, field: Field) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| matches!(c, Column::Field(f) if *f == field))
    }

    /// Cell of `field` in row `row`, empty when the column is absent.
    pub fn cell<'a>(&'a self, row: &'a RawRow, field: Field) -> &'a str {
        self.column_of(field)
            .and_then(|i| row.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Labels of the columns that never reach a record: auxiliary fields
    /// and unmapped headers.
    pub fn dropped_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter_map(|column| match column {
                Column::Field(field) if field.is_auxiliary() => Some(field.to_string()),
                Column::Field(_) => None,
                Column::Unmapped(label) => Some(label.clone()),
            })
            .collect()
    }
}

/// Fit every row to the header's column count and label the columns.
///
/// Rows longer than the header have their tail collapsed into the last
/// column; shorter rows are padded with empty cells.
pub fn shape_rows(header: &RawRow, rows: Vec<RawRow>, vocab: &Vocabulary) -> ShapedTable {
    let width = header.len();
    let columns = header
        .iter()
        .map(|label| match vocab.field_for_header(label) {
            Some(field) => Column::Field(field),
            None => Column::Unmapped(label.trim().to_string()),
        })
        .collect();

    let rows = rows
        .into_iter()
        .map(|row| fit_width(row, width))
        .collect();

    ShapedTable { columns, rows }
}

fn fit_width(mut row: RawRow, width: usize) -> RawRow {
    if width == 0 {
        return Vec::new();
    }

    if row.len() > width {
        let tail = row
            .split_off(width - 1)
            .into_iter()
            .filter(|cell| !cell.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        row.push(tail);
    } else {
        row.resize(width, String::new());
    }
    row
}
