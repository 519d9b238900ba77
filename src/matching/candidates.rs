use std::sync::OnceLock;

use indexmap::IndexSet;
use regex::Regex;

use crate::book::index::PriceBookIndex;
use crate::core::line_item::POLineItem;

static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Alphanumeric/hyphen runs of at least six characters. The pattern only
/// finds runs; [`looks_like_part_number`] applies the shape filter.
fn token_pattern() -> &'static Regex {
    TOKEN_PATTERN.get_or_init(|| {
        Regex::new(r"[A-Za-z0-9][A-Za-z0-9-]{4,}[A-Za-z0-9]").expect("token pattern is valid")
    })
}

/// Part-number shape heuristic: long enough, and either hyphenated or a
/// mixed letter/digit run. Plain words and bare numbers fail this.
fn looks_like_part_number(token: &str) -> bool {
    if token.len() < 6 {
        return false;
    }
    if token.contains('-') {
        return true;
    }
    token.chars().any(|c| c.is_ascii_alphabetic()) && token.chars().any(|c| c.is_ascii_digit())
}

/// Derive an ordered, deduplicated list of candidate model strings for one
/// PO line.
///
/// Construction order, first occurrence kept:
///
/// 1. the line's `raw_model` (trimmed), if non-empty. The primary field is
///    the most authoritative.
/// 2. part-number-shaped tokens in `raw_description`, scanned left to
///    right. Description mining is a fallback for OCR/extraction noise.
/// 3. indexed model numbers appearing as literal substrings of
///    `raw_description`, scanned in price-book ingestion order.
///
/// The order is part of the contract: it decides which model wins when a
/// line carries several plausible identifiers.
pub fn extract_candidates(line: &POLineItem, index: &PriceBookIndex) -> Vec<String> {
    let mut candidates: IndexSet<String> = IndexSet::new();

    if let Some(model) = line.raw_model.as_deref() {
        let model = model.trim();
        if !model.is_empty() {
            candidates.insert(model.to_string());
        }
    }

    if let Some(description) = line.raw_description.as_deref() {
        for token in token_pattern().find_iter(description) {
            let token = token.as_str();
            if looks_like_part_number(token) {
                candidates.insert(token.to_string());
            }
        }

        for model in index.models() {
            if description.contains(model) {
                candidates.insert(model.to_string());
            }
        }
    }

    candidates.into_iter().collect()
}
