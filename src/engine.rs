//! Reconciliation engine tying the index, cascade, and comparator together.
//!
//! The engine is synchronous and pure: it borrows a read-only
//! [`PriceBookIndex`], iterates PO lines in order, and returns exactly one
//! [`MatchResult`] per line. Line-level defects degrade to statuses and
//! never abort the batch. Concurrent reconciliations over the same index are
//! safe because nothing is mutated after index construction.

use bigdecimal::{BigDecimal, Zero};

use crate::book::index::PriceBookIndex;
use crate::core::line_item::POLineItem;
use crate::core::result::MatchResult;
use crate::matching::candidates::extract_candidates;
use crate::matching::cascade::run_cascade;
use crate::matching::compare::classify;
use crate::matching::trace::{LineTrace, NullSink, TraceSink};
use crate::report::builder::ReconciliationReport;

/// Reconciles PO line batches against one price-book index
pub struct ReconcileEngine<'a> {
    index: &'a PriceBookIndex,
}

impl<'a> ReconcileEngine<'a> {
    pub fn new(index: &'a PriceBookIndex) -> Self {
        Self { index }
    }

    /// Reconcile a batch of PO lines, one result per line in input order
    pub fn reconcile(&self, lines: &[POLineItem]) -> Vec<MatchResult> {
        self.reconcile_with_sink(lines, &mut NullSink)
    }

    /// Reconcile a batch, delivering a per-line decision trace to `sink`
    pub fn reconcile_with_sink(
        &self,
        lines: &[POLineItem],
        sink: &mut dyn TraceSink,
    ) -> Vec<MatchResult> {
        lines
            .iter()
            .map(|line| {
                let candidates = extract_candidates(line, self.index);
                let matched = run_cascade(&candidates, self.index);
                let result = classify(line, matched.as_ref(), self.index);

                tracing::debug!(
                    line = line.line_number,
                    candidates = ?candidates,
                    stage = ?matched.as_ref().map(|m| m.stage),
                    status = %result.status,
                    "reconciled PO line"
                );
                sink.record(LineTrace {
                    line_number: line.line_number,
                    candidates,
                    stage: matched.map(|m| m.stage),
                    status: result.status,
                });

                result
            })
            .collect()
    }

    /// Reconcile and render the exception report in one call
    pub fn reconcile_to_report(
        &self,
        lines: &[POLineItem],
        price_book_name: &str,
        po_identifier_source: &str,
    ) -> ReconciliationReport {
        let results = self.reconcile(lines);
        ReconciliationReport::new(results, price_book_name, po_identifier_source)
    }
}

/// Total dollar impact across a result list: the sum of every line's
/// error value. Surfaced to callers for summary dashboards.
#[must_use]
pub fn total_error_value(results: &[MatchResult]) -> BigDecimal {
    results
        .iter()
        .fold(BigDecimal::zero(), |total, result| total + &result.error_value)
}
