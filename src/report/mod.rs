//! Exception report rendering.
//!
//! Turns a reconciled result list into a human-readable narrative suitable
//! for email or display: one line per problem item (mismatches and models
//! not found, in PO order), a full-agreement sentence when nothing is wrong,
//! and a PO identifier extracted from the source filename for the subject
//! line. Rendering is deterministic: identical inputs produce byte-identical
//! text.

pub mod builder;
pub mod identifier;

pub use builder::{build_report, ReconciliationReport};
pub use identifier::extract_po_identifier;
