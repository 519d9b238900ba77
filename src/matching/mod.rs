//! Model-number matching and price classification.
//!
//! Reconciling one PO line happens in three steps:
//!
//! 1. [`candidates::extract_candidates`]: mine an ordered, deduplicated list
//!    of plausible model strings from the line (primary field first, then
//!    part-number-shaped tokens in the description, then known models that
//!    appear verbatim in the description).
//! 2. [`cascade::run_cascade`]: a fixed-priority cascade over the candidate
//!    list against the index, first success wins:
//!    exact key -> `"BW"` prefix stripped -> `"B"` prefix stripped ->
//!    dash removal against the canonical dashed model.
//! 3. [`compare::classify`]: turn the match outcome and the line's raw price
//!    into a [`MatchResult`](crate::core::MatchResult) with discrepancy and
//!    error value for mismatches.
//!
//! No fuzzy or substring scoring is performed: a candidate either resolves
//! to exactly one book entry through a cascade stage or the line is
//! `ModelNotFound`.
//!
//! Every reconciled line also produces a [`trace::LineTrace`] describing the
//! candidates considered, the stage that succeeded, and the final status.

pub mod candidates;
pub mod cascade;
pub mod compare;
pub mod trace;

pub use candidates::extract_candidates;
pub use cascade::{run_cascade, MatchStage, ModelMatch};
pub use compare::classify;
pub use trace::{CollectingSink, LineTrace, NullSink, TraceSink};
