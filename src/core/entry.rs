use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// A single price-book entry: one model number with its authoritative price.
///
/// Entries are immutable once ingested. `source_column` and `source_row`
/// record where in the originating spreadsheet the price was found, retained
/// for audit provenance in exception reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBookEntry {
    /// Product identifier used as the join key against PO lines
    pub model_number: String,

    /// Authoritative price; compared by exact numeric equality
    pub price: BigDecimal,

    /// Spreadsheet column the price was read from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_column: Option<String>,

    /// 1-based spreadsheet row the price was read from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_row: Option<u32>,
}

impl PriceBookEntry {
    pub fn new(model_number: impl Into<String>, price: BigDecimal) -> Self {
        Self {
            model_number: model_number.into(),
            price,
            source_column: None,
            source_row: None,
        }
    }

    #[must_use]
    pub fn with_source_column(mut self, column: impl Into<String>) -> Self {
        self.source_column = Some(column.into());
        self
    }

    #[must_use]
    pub fn with_source_row(mut self, row: u32) -> Self {
        self.source_row = Some(row);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_entry_builder() {
        let entry = PriceBookEntry::new("ABC-123", BigDecimal::from_str("100.00").unwrap())
            .with_source_column("Correct Base Price")
            .with_source_row(14);

        assert_eq!(entry.model_number, "ABC-123");
        assert_eq!(entry.source_column.as_deref(), Some("Correct Base Price"));
        assert_eq!(entry.source_row, Some(14));
    }

    #[test]
    fn test_entry_deserializes_price_from_number_or_string() {
        let from_number: PriceBookEntry =
            serde_json::from_str(r#"{"model_number": "A", "price": 12.5}"#).unwrap();
        let from_string: PriceBookEntry =
            serde_json::from_str(r#"{"model_number": "A", "price": "12.50"}"#).unwrap();

        assert_eq!(from_number.price, from_string.price);
        assert_eq!(from_number.source_row, None);
    }
}
