pub mod clean;
pub mod header;
pub mod merge;
pub mod normalize;
pub mod shape;
pub mod values;

use crate::extraction::PageTable;
use crate::model::{RawRow, ScheduleRecord};
use crate::vocab::Vocabulary;
use clean::clean_page;
use header::{find_header_row, parse_service_date};
use merge::merge_rows;
use shape::shape_rows;
use tracing::{debug, warn};

/// Run header detection, merge, shaping and cleanup over one page.
///
/// A page without a header row yields no records; blank and cover pages
/// are common and not an error.
pub fn parse_page(rows: &[RawRow], vocab: &Vocabulary) -> Vec<ScheduleRecord> {
    let Some(header_idx) = find_header_row(rows, vocab) else {
        if rows.iter().any(|r| r.iter().any(|c| !c.trim().is_empty())) {
            warn!(rows = rows.len(), "no header row found, page skipped");
        }
        return Vec::new();
    };

    let header = &rows[header_idx];
    let merged = merge_rows(&rows[header_idx + 1..], vocab);
    let merged_count = merged.len();
    let shaped = shape_rows(header, merged, vocab);
    let records = clean_page(&shaped, vocab);

    debug!(
        header_row = header_idx,
        merged_rows = merged_count,
        dropped_columns = ?shaped.dropped_columns(),
        records = records.len(),
        "parsed page table"
    );
    records
}

/// Parse every page of one document, stamping the service date and unit.
///
/// The service date is read from the first page only.
pub fn process_pages(pages: &[PageTable], unit: &str, vocab: &Vocabulary) -> Vec<ScheduleRecord> {
    let date = pages
        .first()
        .and_then(|p| parse_service_date(&p.text))
        .unwrap_or_default();

    let mut records = Vec::new();
    for page in pages {
        let _span = tracing::debug_span!("page", number = page.page_number).entered();
        let mut page_records = parse_page(&page.rows, vocab);
        if page_records.is_empty() {
            debug!(page = page.page_number, "page contributed no records");
            continue;
        }
        for record in &mut page_records {
            record.date = date.clone();
            record.unit = unit.to_string();
        }
        records.extend(page_records);
    }
    records
}
