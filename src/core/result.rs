use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

use crate::core::line_item::RawValue;

/// Classification of one PO line after reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// PO price equals the book price exactly
    Match,
    /// Model matched but prices differ
    Mismatch,
    /// No candidate matched any index key through any cascade stage
    ModelNotFound,
    /// Required price missing from extraction; comparison skipped
    DataExtractionIssue,
    /// Price present but not parseable as a number
    PriceFormatError,
}

impl MatchStatus {
    /// Problem items are the ones surfaced in the exception report
    #[must_use]
    pub fn is_problem(self) -> bool {
        matches!(self, Self::Mismatch | Self::ModelNotFound)
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Match => write!(f, "Match"),
            Self::Mismatch => write!(f, "Mismatch"),
            Self::ModelNotFound => write!(f, "Model Not Found"),
            Self::DataExtractionIssue => write!(f, "Data Extraction Issue"),
            Self::PriceFormatError => write!(f, "Price Format Error"),
        }
    }
}

/// Outcome of reconciling a single PO line against the price book.
///
/// Exactly one result is produced per input line, in input order.
/// `book_price`, `price_book_row` and `source_column` are populated iff a
/// model match was found; `discrepancy` is populated iff the status is
/// [`MatchStatus::Mismatch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 1-based PO line number this result corresponds to
    pub line_number: u32,

    /// Model string shown to humans: the matched candidate as it appeared
    /// on the PO, or a fallback when nothing was extracted
    pub displayed_model: String,

    pub status: MatchStatus,

    /// PO-side price as extracted (kept raw so format defects stay visible)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub po_price: Option<RawValue>,

    /// Authoritative price from the matched entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_price: Option<BigDecimal>,

    /// Spreadsheet row of the matched entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_book_row: Option<u32>,

    /// Spreadsheet column of the matched entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_column: Option<String>,

    /// Non-negative |po - book|, only for mismatches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discrepancy: Option<BigDecimal>,

    /// Dollar impact: discrepancy scaled by quantity; zero unless mismatched
    pub error_value: BigDecimal,

    /// Description carried through from the PO line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MatchResult {
    pub fn new(line_number: u32, displayed_model: impl Into<String>, status: MatchStatus) -> Self {
        Self {
            line_number,
            displayed_model: displayed_model.into(),
            status,
            po_price: None,
            book_price: None,
            price_book_row: None,
            source_column: None,
            discrepancy: None,
            error_value: BigDecimal::zero(),
            description: None,
        }
    }
}
