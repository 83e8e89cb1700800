//! Rebuild positional table rows from pdftotext -layout output.
//!
//! pdftotext -layout preserves column alignment using spaces. A cell is a
//! run of text separated from its neighbours by two or more spaces; its
//! character offset decides which column it lands in.

use crate::model::RawRow;

/// Characters of slack allowed when assigning a span to a column start.
const COLUMN_SLACK: usize = 2;

/// A run of text on a layout line, with its starting character column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub text: String,
}

/// Split a layout line into spans at gaps of 2+ whitespace characters.
pub fn split_layout_line(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut current = String::new();
    let mut space_count = 0;

    for (i, c) in line.chars().enumerate() {
        if c.is_whitespace() {
            space_count += 1;
            if space_count >= 2 || c == '\t' {
                if !current.trim().is_empty() {
                    spans.push(Span {
                        start,
                        text: current.trim_end().to_string(),
                    });
                }
                current.clear();
            } else if !current.is_empty() {
                current.push(' ');
            }
        } else {
            if current.is_empty() {
                start = i;
            }
            current.push(c);
            space_count = 0;
        }
    }

    if !current.trim().is_empty() {
        spans.push(Span {
            start,
            text: current.trim_end().to_string(),
        });
    }

    spans
}

/// Column start offsets for a page: taken from the line with the most spans.
pub fn column_starts(lines: &[Vec<Span>]) -> Vec<usize> {
    let mut best: Option<&Vec<Span>> = None;
    for spans in lines {
        if best.map_or(true, |b| spans.len() > b.len()) {
            best = Some(spans);
        }
    }
    best.map(|spans| spans.iter().map(|s| s.start).collect())
        .unwrap_or_default()
}

/// Place spans into positional cells, leaving missing columns empty.
pub fn align_spans(spans: &[Span], starts: &[usize]) -> RawRow {
    if starts.is_empty() {
        return spans.iter().map(|s| s.text.clone()).collect();
    }

    let mut cells = vec![String::new(); starts.len()];
    for span in spans {
        let col = starts
            .iter()
            .rposition(|&s| s <= span.start + COLUMN_SLACK)
            .unwrap_or(0);
        let cell = &mut cells[col];
        if cell.is_empty() {
            cell.push_str(&span.text);
        } else {
            cell.push(' ');
            cell.push_str(&span.text);
        }
    }
    cells
}

/// Convert the layout text of one page into positional rows.
pub fn rows_from_layout(page_text: &str) -> Vec<RawRow> {
    let lines: Vec<Vec<Span>> = page_text
        .lines()
        .map(split_layout_line)
        .filter(|spans| !spans.is_empty())
        .collect();
    let starts = column_starts(&lines);

    lines
        .iter()
        .map(|spans| align_spans(spans, &starts))
        .collect()
}
