use crate::book::index::PriceBookIndex;
use crate::core::line_item::POLineItem;
use crate::core::result::{MatchResult, MatchStatus};
use crate::matching::cascade::ModelMatch;

/// Sentinel shown when a line carries no usable model string at all
pub const UNKNOWN_ITEM: &str = "Unknown Item";

/// Classify one PO line given its cascade outcome.
///
/// Pure computation, rules in order:
///
/// 1. missing `raw_price` -> `DataExtractionIssue`, comparison skipped;
/// 2. no model match -> `ModelNotFound`;
/// 3. unparseable PO price -> `PriceFormatError`;
/// 4. exact decimal equality -> `Match`;
/// 5. otherwise `Mismatch` with `discrepancy = |po - book|` and
///    `error_value = discrepancy * quantity`.
pub fn classify(
    line: &POLineItem,
    matched: Option<&ModelMatch>,
    index: &PriceBookIndex,
) -> MatchResult {
    // No comparison is attempted without a price, and no match output may
    // leak into the result: the displayed model is always the raw field.
    let Some(raw_price) = line.raw_price.as_ref() else {
        let mut result = MatchResult::new(
            line.line_number,
            fallback_model(line),
            MatchStatus::DataExtractionIssue,
        );
        result.description = line.raw_description.clone();
        return result;
    };

    let displayed_model = matched
        .map(|m| m.displayed_model.clone())
        .unwrap_or_else(|| fallback_model(line));

    let mut result = MatchResult::new(line.line_number, displayed_model, MatchStatus::Match);
    result.po_price = line.raw_price.clone();
    result.description = line.raw_description.clone();

    let Some(entry) = matched.and_then(|m| index.get(&m.lookup_model)) else {
        result.status = MatchStatus::ModelNotFound;
        return result;
    };

    result.book_price = Some(entry.price.clone());
    result.price_book_row = entry.source_row;
    result.source_column = entry.source_column.clone();

    let Some(po_price) = raw_price.as_decimal() else {
        result.status = MatchStatus::PriceFormatError;
        return result;
    };

    if po_price == entry.price {
        result.status = MatchStatus::Match;
    } else {
        let discrepancy = (&po_price - &entry.price).abs();
        result.error_value = &discrepancy * line.quantity_or_default();
        result.discrepancy = Some(discrepancy);
        result.status = MatchStatus::Mismatch;
    }

    result
}

fn fallback_model(line: &POLineItem) -> String {
    match line.raw_model.as_deref().map(str::trim) {
        Some(model) if !model.is_empty() => model.to_string(),
        _ => UNKNOWN_ITEM.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::PriceBookEntry;
    use crate::matching::cascade::run_cascade;
    use crate::matching::candidates::extract_candidates;
    use bigdecimal::{BigDecimal, Zero};
    use std::str::FromStr;

    fn index_one(model: &str, price: &str) -> PriceBookIndex {
        PriceBookIndex::build(vec![
            PriceBookEntry::new(model, BigDecimal::from_str(price).unwrap()).with_source_row(14)
        ])
    }

    fn reconcile_line(line: &POLineItem, index: &PriceBookIndex) -> MatchResult {
        let candidates = extract_candidates(line, index);
        let matched = run_cascade(&candidates, index);
        classify(line, matched.as_ref(), index)
    }

    #[test]
    fn test_exact_price_match() {
        let index = index_one("ABC-123", "100.00");
        let line = POLineItem::new(1).with_model("ABC-123").with_price("100.00");
        let result = reconcile_line(&line, &index);

        assert_eq!(result.status, MatchStatus::Match);
        assert_eq!(
            result.book_price,
            Some(BigDecimal::from_str("100.00").unwrap())
        );
        assert_eq!(result.price_book_row, Some(14));
        assert_eq!(result.error_value, BigDecimal::zero());
    }

    #[test]
    fn test_mismatch_discrepancy_and_error_value() {
        let index = index_one("XYZ1", "50.00");
        let line = POLineItem::new(2)
            .with_model("BWXYZ1")
            .with_price("55.00")
            .with_quantity(2.0);
        let result = reconcile_line(&line, &index);

        assert_eq!(result.status, MatchStatus::Mismatch);
        assert_eq!(result.displayed_model, "BWXYZ1");
        assert_eq!(
            result.discrepancy,
            Some(BigDecimal::from_str("5.00").unwrap())
        );
        assert_eq!(result.error_value, BigDecimal::from_str("10.00").unwrap());
    }

    #[test]
    fn test_discrepancy_is_non_negative_both_directions() {
        let index = index_one("XYZ1", "50.00");
        let cheap = POLineItem::new(1).with_model("XYZ1").with_price("45.00");
        let result = reconcile_line(&cheap, &index);
        assert_eq!(
            result.discrepancy,
            Some(BigDecimal::from_str("5.00").unwrap())
        );
    }

    #[test]
    fn test_missing_price_is_extraction_issue() {
        let index = index_one("ABC-123", "100.00");
        let line = POLineItem::new(3).with_model("ABC123");
        let result = reconcile_line(&line, &index);

        assert_eq!(result.status, MatchStatus::DataExtractionIssue);
        assert_eq!(result.displayed_model, "ABC123");
        assert!(result.book_price.is_none());
        assert!(result.price_book_row.is_none());
    }

    #[test]
    fn test_missing_price_ignores_description_mined_match() {
        let index = index_one("ABC-123", "100.00");
        // the cascade matches "ABC-123" out of the description, but with no
        // price the result must still display the raw model field
        let line = POLineItem::new(3).with_description("spindle kit ABC-123 hardware");
        let result = reconcile_line(&line, &index);

        assert_eq!(result.status, MatchStatus::DataExtractionIssue);
        assert_eq!(result.displayed_model, UNKNOWN_ITEM);
        assert!(result.book_price.is_none());
    }

    #[test]
    fn test_missing_price_and_model_uses_sentinel() {
        let index = index_one("ABC-123", "100.00");
        let result = reconcile_line(&POLineItem::new(4), &index);

        assert_eq!(result.status, MatchStatus::DataExtractionIssue);
        assert_eq!(result.displayed_model, UNKNOWN_ITEM);
    }

    #[test]
    fn test_model_not_found() {
        let index = index_one("ABC-123", "100.00");
        let line = POLineItem::new(5).with_model("QQQ999").with_price("10.00");
        let result = reconcile_line(&line, &index);

        assert_eq!(result.status, MatchStatus::ModelNotFound);
        assert_eq!(result.displayed_model, "QQQ999");
        assert!(result.book_price.is_none());
        assert_eq!(result.error_value, BigDecimal::zero());
    }

    #[test]
    fn test_unparseable_price_is_format_error() {
        let index = index_one("ABC-123", "100.00");
        let line = POLineItem::new(6).with_model("ABC-123").with_price("CALL");
        let result = reconcile_line(&line, &index);

        assert_eq!(result.status, MatchStatus::PriceFormatError);
        // a match was found, so book-side fields are still populated
        assert!(result.book_price.is_some());
        assert_eq!(result.price_book_row, Some(14));
        assert_eq!(result.error_value, BigDecimal::zero());
    }

    #[test]
    fn test_numeric_price_forms_compare_equal() {
        let index = index_one("ABC-123", "100.00");
        let line = POLineItem::new(7).with_model("ABC-123").with_price(100.0);
        let result = reconcile_line(&line, &index);
        assert_eq!(result.status, MatchStatus::Match);
    }

    #[test]
    fn test_quantity_defaults_to_one() {
        let index = index_one("XYZ1", "50.00");
        let line = POLineItem::new(8).with_model("XYZ1").with_price("55.00");
        let result = reconcile_line(&line, &index);
        assert_eq!(result.error_value, BigDecimal::from_str("5.00").unwrap());
    }
}
