use crate::model::{DocumentFailure, ScheduleRecord};
use serde::Serialize;

/// Records of a batch plus the documents that could not be processed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchOutcome {
    pub records: Vec<ScheduleRecord>,
    pub failures: Vec<DocumentFailure>,
    pub documents_processed: usize,
}

impl BatchOutcome {
    /// No records came out of any document.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Accumulates per-document results in submission order.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    outcome: BatchOutcome,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_document(&mut self, records: Vec<ScheduleRecord>) {
        self.outcome.documents_processed += 1;
        self.outcome.records.extend(records);
    }

    pub fn add_failure(&mut self, document: &str, reason: impl Into<String>) {
        self.outcome.failures.push(DocumentFailure {
            document: document.to_string(),
            reason: reason.into(),
        });
    }

    pub fn finish(self) -> BatchOutcome {
        self.outcome
    }
}
