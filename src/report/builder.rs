use bigdecimal::BigDecimal;

use crate::core::line_item::RawValue;
use crate::core::result::{MatchResult, MatchStatus};
use crate::report::identifier::extract_po_identifier;

/// Sentence emitted when no problem items were found
pub const FULL_AGREEMENT: &str =
    "All line items agree with the price book. No discrepancies were found.";

/// Courtesy line appended to every report regardless of outcome
pub const CLOSING: &str = "Thank you for your business.";

/// Structured results paired with the formatted exception narrative
#[derive(Debug, Clone)]
pub struct ReconciliationReport {
    pub results: Vec<MatchResult>,
    pub text: String,
}

impl ReconciliationReport {
    pub fn new(
        results: Vec<MatchResult>,
        price_book_name: &str,
        po_identifier_source: &str,
    ) -> Self {
        let text = build_report(&results, price_book_name, po_identifier_source);
        Self { results, text }
    }

    /// Lines a human needs to act on: mismatches and unmatched models,
    /// in original PO order
    pub fn problem_items(&self) -> impl Iterator<Item = &MatchResult> {
        self.results.iter().filter(|r| r.status.is_problem())
    }
}

/// Render the exception narrative for a reconciled result list.
///
/// One line per problem item in original PO order; a full-agreement sentence
/// when there are none; a closing courtesy line always. Prices are shown
/// with exactly two decimals, except unparseable raw values which are shown
/// verbatim.
pub fn build_report(
    results: &[MatchResult],
    price_book_name: &str,
    po_identifier_source: &str,
) -> String {
    let po_id = extract_po_identifier(po_identifier_source);
    let mut text = String::new();

    text.push_str(&format!(
        "Subject: Review of Purchase Order {po_id} - Ref Price Book: {price_book_name}\n\n"
    ));
    text.push_str("Hi,\n\n");
    text.push_str(&format!(
        "Thank you for your purchase order. We have reviewed it against the \
         \"{price_book_name}\" price book.\n\n"
    ));

    let problems: Vec<&MatchResult> = results.iter().filter(|r| r.status.is_problem()).collect();

    if problems.is_empty() {
        text.push_str(FULL_AGREEMENT);
        text.push('\n');
    } else {
        for item in problems {
            text.push_str(&format!(
                "PO Line {} - {} - {}\n",
                item.line_number,
                item.displayed_model,
                detail(item)
            ));
        }
    }

    text.push('\n');
    text.push_str(CLOSING);
    text.push('\n');
    text
}

fn detail(item: &MatchResult) -> String {
    match item.status {
        MatchStatus::Mismatch => format!(
            "PO Price ${} - Price Book ${} ({})",
            format_raw_price(item.po_price.as_ref()),
            format_book_price(item.book_price.as_ref()),
            provenance(item)
        ),
        _ => "Model not found in price book".to_string(),
    }
}

/// Where in the source spreadsheet the book price came from
fn provenance(item: &MatchResult) -> String {
    if let Some(row) = item.price_book_row {
        format!("row {row}")
    } else if let Some(column) = item.source_column.as_deref() {
        format!("column {column}")
    } else {
        "price book".to_string()
    }
}

fn format_raw_price(price: Option<&RawValue>) -> String {
    match price {
        Some(value) => match value.as_decimal() {
            Some(decimal) => format_price(&decimal),
            // unparseable values are shown raw, without formatting
            None => value.to_string(),
        },
        None => "N/A".to_string(),
    }
}

fn format_book_price(price: Option<&BigDecimal>) -> String {
    price.map_or_else(|| "N/A".to_string(), format_price)
}

/// Exactly two decimal places
fn format_price(value: &BigDecimal) -> String {
    value.with_scale(2).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn mismatch(line: u32, model: &str, po: &str, book: &str, row: Option<u32>) -> MatchResult {
        let mut result = MatchResult::new(line, model, MatchStatus::Mismatch);
        result.po_price = Some(RawValue::Text(po.to_string()));
        result.book_price = Some(BigDecimal::from_str(book).unwrap());
        result.price_book_row = row;
        result.discrepancy = Some((BigDecimal::from_str(po).unwrap() - result.book_price.clone().unwrap()).abs());
        result
    }

    #[test]
    fn test_problem_lines_in_po_order() {
        let results = vec![
            MatchResult::new(1, "ABC-123", MatchStatus::Match),
            mismatch(2, "BWXYZ1", "55.00", "50.00", Some(14)),
            MatchResult::new(3, "OK-1", MatchStatus::Match),
            MatchResult::new(5, "QQQ999", MatchStatus::ModelNotFound),
        ];
        let text = build_report(&results, "2024 Dealer Pricing", "PO-000123.pdf");

        assert!(text.contains("Purchase Order 123"));
        assert!(text.contains("PO Line 2 - BWXYZ1 - PO Price $55.00 - Price Book $50.00 (row 14)"));
        assert!(text.contains("PO Line 5 - QQQ999 - Model not found in price book"));
        assert!(!text.contains("PO Line 1"));
        assert!(!text.contains("PO Line 3"));

        let line2 = text.find("PO Line 2").unwrap();
        let line5 = text.find("PO Line 5").unwrap();
        assert!(line2 < line5);
    }

    #[test]
    fn test_full_agreement_report() {
        let results = vec![MatchResult::new(1, "ABC-123", MatchStatus::Match)];
        let text = build_report(&results, "Book", "PO-1.pdf");

        assert!(text.contains(FULL_AGREEMENT));
        assert!(text.contains(CLOSING));
        assert!(!text.contains("PO Line"));
    }

    #[test]
    fn test_closing_always_present() {
        let with_problems = build_report(
            &[MatchResult::new(1, "X", MatchStatus::ModelNotFound)],
            "Book",
            "PO-1.pdf",
        );
        let without = build_report(&[], "Book", "PO-1.pdf");
        assert!(with_problems.contains(CLOSING));
        assert!(without.contains(CLOSING));
    }

    #[test]
    fn test_two_decimal_formatting() {
        let results = vec![mismatch(1, "M-1", "55.5", "50", Some(3))];
        let text = build_report(&results, "Book", "PO-1.pdf");
        assert!(text.contains("PO Price $55.50 - Price Book $50.00 (row 3)"));
    }

    #[test]
    fn test_column_provenance_when_row_missing() {
        let mut result = mismatch(1, "M-1", "55.00", "50.00", None);
        result.source_column = Some("Correct Base Price".to_string());
        let text = build_report(&[result], "Book", "PO-1.pdf");
        assert!(text.contains("(column Correct Base Price)"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let results = vec![
            mismatch(1, "M-1", "55.00", "50.00", Some(3)),
            MatchResult::new(2, "GONE", MatchStatus::ModelNotFound),
        ];
        let first = build_report(&results, "Book", "PO-42.pdf");
        let second = build_report(&results, "Book", "PO-42.pdf");
        assert_eq!(first, second);
    }

    #[test]
    fn test_report_struct_pairs_results_and_text() {
        let results = vec![MatchResult::new(1, "GONE", MatchStatus::ModelNotFound)];
        let report = ReconciliationReport::new(results, "Book", "PO-9.pdf");
        assert_eq!(report.problem_items().count(), 1);
        assert!(report.text.contains("PO Line 1 - GONE"));
    }
}
