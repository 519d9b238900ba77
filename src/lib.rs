//! # po-reconciler
//!
//! A library for reconciling purchase-order (PO) line items against a
//! reference price book.
//!
//! Purchase orders arrive as noisy extraction output: model numbers may be
//! missing, mangled by OCR, buried in description text, or carry dealer
//! prefixes; prices may be absent or unparseable. `po-reconciler` indexes
//! the price book, mines candidate model numbers from each line, runs a
//! fixed-priority matching cascade, classifies every line, and renders a
//! human-readable exception report.
//!
//! ## Features
//!
//! - **First-wins indexing**: duplicate price-book rows become warnings, not errors
//! - **Candidate mining**: primary model field, part-number-shaped description
//!   tokens, and known-model substring scan
//! - **Matching cascade**: exact -> "BW" prefix -> "B" prefix -> dash removal,
//!   first success wins, no fuzzy fallback
//! - **Exact decimal comparison**: prices are `BigDecimal`s, never binary floats
//! - **Line-scoped degradation**: a malformed line becomes a status, the batch
//!   always completes with one result per line
//! - **Decision traces**: per-line candidate/stage/status traces via a sink hook
//!
//! ## Example
//!
//! ```rust
//! use po_reconciler::{POLineItem, PriceBookEntry, PriceBookIndex, ReconcileEngine};
//! use po_reconciler::{total_error_value, MatchStatus};
//! use bigdecimal::BigDecimal;
//! use std::str::FromStr;
//!
//! let index = PriceBookIndex::build(vec![
//!     PriceBookEntry::new("ABC-123", BigDecimal::from_str("100.00").unwrap()),
//! ]);
//!
//! let lines = vec![
//!     // dash-removal match: "ABC123" resolves to "ABC-123"
//!     POLineItem::new(1).with_model("ABC123").with_price("100.00"),
//!     POLineItem::new(2).with_model("QQQ999").with_price("10.00"),
//! ];
//!
//! let engine = ReconcileEngine::new(&index);
//! let report = engine.reconcile_to_report(&lines, "Dealer Book", "PO-000123.pdf");
//!
//! assert_eq!(report.results[0].status, MatchStatus::Match);
//! assert_eq!(report.results[1].status, MatchStatus::ModelNotFound);
//! assert!(report.text.contains("Model not found in price book"));
//! assert_eq!(total_error_value(&report.results), BigDecimal::from(0));
//! ```
//!
//! ## Modules
//!
//! - [`book`]: Price-book index construction and snapshot loading
//! - [`core`]: Core data types for entries, PO lines, and results
//! - [`matching`]: Candidate extraction, matching cascade, price comparison
//! - [`report`]: PO identifier extraction and exception report rendering
//! - [`engine`]: The reconciliation engine and batch totals

pub mod book;
pub mod core;
pub mod engine;
pub mod matching;
pub mod report;

// Re-export commonly used types for convenience
pub use book::index::{DuplicateModel, PriceBookError, PriceBookIndex, PriceBookSnapshot};
pub use core::entry::PriceBookEntry;
pub use core::line_item::{POLineItem, RawValue};
pub use core::result::{MatchResult, MatchStatus};
pub use engine::{total_error_value, ReconcileEngine};
pub use matching::cascade::{MatchStage, ModelMatch};
pub use matching::trace::{CollectingSink, LineTrace, NullSink, TraceSink};
pub use report::builder::{build_report, ReconciliationReport};
pub use report::identifier::extract_po_identifier;
