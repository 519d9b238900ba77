//! Price-book indexing and snapshot loading.
//!
//! The index is built once per reconciliation call from a price-book
//! snapshot and is read-only afterwards, so it can be shared across
//! concurrent calls over the same snapshot.
//!
//! ## Duplicate models
//!
//! Spreadsheets routinely carry the same model number on more than one row.
//! The first-encountered entry wins; later duplicates are skipped and
//! recorded as [`DuplicateModel`] warnings for data-quality review rather
//! than treated as errors.
//!
//! ## Example
//!
//! ```rust
//! use po_reconciler::{PriceBookEntry, PriceBookIndex};
//! use bigdecimal::BigDecimal;
//! use std::str::FromStr;
//!
//! let entries = vec![
//!     PriceBookEntry::new("ABC-123", BigDecimal::from_str("100.00").unwrap()),
//!     PriceBookEntry::new("XYZ1", BigDecimal::from_str("50.00").unwrap()),
//! ];
//! let index = PriceBookIndex::build(entries);
//!
//! assert_eq!(index.len(), 2);
//! assert!(index.contains("ABC-123"));
//! ```

pub mod index;

pub use index::{DuplicateModel, PriceBookError, PriceBookIndex, PriceBookSnapshot};
