//! Worker-boundary behavior: records produced by parallel per-file passes
//! funnel into a single collector without loss or mutation.
//!
//! Factories are shared statics; each worker only reads them and sends owned
//! records over a channel. The collector on the receiving side is the sole
//! mutable state.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::sync::mpsc;

use pretty_assertions::assert_eq;
use rayon::prelude::*;

use luar_diagnostic::catalog;
use luar_diagnostic::{AnnotationKind, DiagnosticCollector, DiagnosticRecord, DiagnosticSink};
use luar_source::{SourceFileRef, SourceSpan};

/// Stand-in for one file's lowering pass: three diagnostics at fixed offsets,
/// two errors and one warning.
fn lower_file(file: &SourceFileRef) -> Vec<DiagnosticRecord> {
    vec![
        catalog::FORBIDDEN_FOR_IN.create(&SourceSpan::new(file.clone(), 12, 7)),
        catalog::UNSUPPORTED_NODE_KIND.create_with(
            &SourceSpan::new(file.clone(), 48, 13),
            "WithStatement".to_owned(),
        ),
        catalog::ANNOTATION_DEPRECATED.create_with(
            &SourceSpan::new(file.clone(), 96, 12),
            AnnotationKind::TupleReturn,
        ),
    ]
}

fn file_set(count: usize) -> Vec<SourceFileRef> {
    (0..count)
        .map(|i| SourceFileRef::new(format!("src/module_{i}.ts")))
        .collect()
}

#[test]
fn parallel_passes_report_every_record_exactly_once() {
    let files = file_set(32);

    let (tx, rx) = mpsc::channel::<DiagnosticRecord>();
    files.par_iter().for_each_with(tx, |tx, file| {
        for record in lower_file(file) {
            tx.send(record).unwrap();
        }
    });

    let mut collector = DiagnosticCollector::new();
    for record in rx {
        collector.accept(record);
    }

    assert_eq!(collector.len(), files.len() * 3);
    assert_eq!(collector.error_count(), files.len() * 2);
    assert_eq!(collector.warning_count(), files.len());
}

#[test]
fn records_cross_the_thread_boundary_unchanged() {
    let files = file_set(8);
    let mut expected: Vec<DiagnosticRecord> = files.iter().flat_map(lower_file).collect();

    let (tx, rx) = mpsc::channel::<DiagnosticRecord>();
    files.par_iter().for_each_with(tx, |tx, file| {
        for record in lower_file(file) {
            tx.send(record).unwrap();
        }
    });
    let mut received: Vec<DiagnosticRecord> = rx.into_iter().collect();

    // Workers finish in nondeterministic order; compare after sorting.
    let key = |r: &DiagnosticRecord| (r.span.file.path().to_owned(), r.span.start);
    expected.sort_by_key(key);
    received.sort_by_key(key);
    assert_eq!(received, expected);
}

#[test]
fn per_file_batches_merge_in_file_order() {
    let files = file_set(16);

    // Indexed parallel collect keeps input order, so draining batch by batch
    // gives a deterministic overall order.
    let batches: Vec<Vec<DiagnosticRecord>> = files.par_iter().map(lower_file).collect();

    let mut collector = DiagnosticCollector::new();
    for batch in batches {
        collector.accept_all(batch);
    }

    let starts: Vec<u32> = collector.records().iter().map(|r| r.span.start).collect();
    let expected: Vec<u32> = (0..files.len()).flat_map(|_| [12, 48, 96]).collect();
    assert_eq!(starts, expected);

    for (i, chunk) in collector.records().chunks(3).enumerate() {
        for record in chunk {
            assert_eq!(record.span.file.path(), format!("src/module_{i}.ts"));
        }
    }
}
