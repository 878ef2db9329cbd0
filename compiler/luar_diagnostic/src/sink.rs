//! Where finished records go.
//!
//! Producers stay agnostic to consumption: a pass hands each record to a
//! [`DiagnosticSink`] and moves on. Whether records are printed, aggregated,
//! or forwarded to another process is the sink's business. The subsystem
//! ships one implementation, [`DiagnosticCollector`], which just accumulates.

use crate::{DiagnosticRecord, Severity};

/// Receiver for diagnostic records.
///
/// Implementations must not reorder, deduplicate, or drop records; severity
/// policy (when to fail a build) belongs to whoever drains the sink.
pub trait DiagnosticSink {
    /// Take ownership of one record.
    fn accept(&mut self, record: DiagnosticRecord);

    /// Take ownership of a batch, preserving its order.
    fn accept_all(&mut self, records: Vec<DiagnosticRecord>) {
        for record in records {
            self.accept(record);
        }
    }
}

/// Vec-backed sink preserving insertion order, with severity tallies.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    records: Vec<DiagnosticRecord>,
    error_count: usize,
    warning_count: usize,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        DiagnosticCollector::default()
    }

    /// All records accepted so far, in acceptance order.
    pub fn records(&self) -> &[DiagnosticRecord] {
        &self.records
    }

    /// Consume the collector, keeping acceptance order.
    pub fn into_records(self) -> Vec<DiagnosticRecord> {
        self.records
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn accept(&mut self, record: DiagnosticRecord) {
        match record.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        self.records.push(record);
    }
}
