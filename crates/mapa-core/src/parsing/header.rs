use crate::model::RawRow;
use crate::parsing::values::starts_with_time;
use crate::vocab::Vocabulary;
use regex::Regex;
use std::sync::LazyLock;

static SERVICE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Data:\s*(\d{2}/\d{2}/\d{4})").expect("valid service date regex")
});

/// Find the index of the header row on a page.
///
/// A header row contains one token of every anchor group somewhere in its
/// joined text and has no cell starting with a clock value, which tells it
/// apart from a data row that happens to mention the same words.
pub fn find_header_row(rows: &[RawRow], vocab: &Vocabulary) -> Option<usize> {
    rows.iter().position(|row| is_header_row(row, vocab))
}

fn is_header_row(row: &RawRow, vocab: &Vocabulary) -> bool {
    let joined = row.join(" ").to_uppercase();
    let has_anchors = vocab
        .header_anchors
        .iter()
        .all(|group| group.iter().any(|token| joined.contains(token.as_str())));
    has_anchors && !row.iter().any(|cell| starts_with_time(cell))
}

/// Extract the service date ("Data: DD/MM/YYYY") from a page's text.
pub fn parse_service_date(text: &str) -> Option<String> {
    SERVICE_DATE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
