//! Core data types for purchase-order reconciliation.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`PriceBookEntry`]: One model number with its authoritative price and provenance
//! - [`POLineItem`]: A raw line record extracted from a purchase order
//! - [`RawValue`]: A field the extractor may emit as either a string or a number
//! - [`MatchResult`], [`MatchStatus`]: Per-line classification of the comparison
//!
//! ## Field reliability
//!
//! Price-book entries come from a parsed spreadsheet and are well typed. PO line
//! items come from PDF extraction and are *not* trusted: any field may be absent
//! or malformed. The engine degrades each defect to a line-scoped status instead
//! of an error.

pub mod entry;
pub mod line_item;
pub mod result;

pub use entry::PriceBookEntry;
pub use line_item::{POLineItem, RawValue};
pub use result::{MatchResult, MatchStatus};
