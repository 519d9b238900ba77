use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// A field value the PO extractor may emit as either a JSON string or number.
///
/// Extraction output is noisy: the same field can arrive as `"55.00"`,
/// `55.0`, or `"$1,299.00"` depending on how the document was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Parse this value as an exact decimal.
    ///
    /// Numbers go through their shortest decimal rendering so that `55.0`
    /// compares equal to a book price of `55.00`. Strings are trimmed and
    /// tolerate one leading `$` and thousands commas; anything else that
    /// fails to parse yields `None` (surfaced as a price-format defect by
    /// the comparator). Locale-specific formats are out of scope.
    pub fn as_decimal(&self) -> Option<BigDecimal> {
        match self {
            Self::Number(n) if n.is_finite() => BigDecimal::from_str(&n.to_string()).ok(),
            Self::Number(_) => None,
            Self::Text(s) => {
                let trimmed = s.trim();
                let without_sigil = trimmed.strip_prefix('$').unwrap_or(trimmed);
                let cleaned = without_sigil.replace(',', "");
                BigDecimal::from_str(&cleaned).ok()
            }
        }
    }
}

impl std::fmt::Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// One raw line record extracted from a purchase order.
///
/// Produced by the external PDF-extraction collaborator; every field except
/// `line_number` may be absent or malformed and the engine must tolerate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct POLineItem {
    /// 1-based position in PO order
    pub line_number: u32,

    /// Model number as the extractor identified it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_model: Option<String>,

    /// Price as the extractor identified it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_price: Option<RawValue>,

    /// Free-form description text, mined for candidate model numbers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_description: Option<String>,

    /// Ordered quantity; treated as 1 when absent or unparseable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

impl POLineItem {
    pub fn new(line_number: u32) -> Self {
        Self {
            line_number,
            raw_model: None,
            raw_price: None,
            raw_description: None,
            quantity: None,
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.raw_model = Some(model.into());
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: impl Into<RawValue>) -> Self {
        self.raw_price = Some(price.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.raw_description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Quantity as an exact decimal, defaulting to 1 when absent or
    /// non-finite. Error values scale linearly with this.
    pub fn quantity_or_default(&self) -> BigDecimal {
        self.quantity
            .filter(|q| q.is_finite())
            .and_then(|q| BigDecimal::from_str(&q.to_string()).ok())
            .unwrap_or_else(|| BigDecimal::from(1))
    }
}
