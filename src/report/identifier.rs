use std::sync::OnceLock;

use regex::Regex;

static IDENTIFIER_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

/// Patterns tried in priority order; capture group 1 is the identifier.
/// `0*` soaks up zero-padding so "PO-000123" yields "123".
fn identifier_patterns() -> &'static [Regex] {
    IDENTIFIER_PATTERNS.get_or_init(|| {
        [
            r"(?i)P0*(\d+)",
            r"(?i)PO[-_]?0*(\d+)",
            r"(?i)Purchase[-_]?Order[-_]?0*(\d+)",
            r"(?i)Order[-_]?0*(\d+)",
            r"(\d{5,})",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("identifier pattern is valid"))
        .collect()
    })
}

/// Extract a human PO identifier from a filename or reference string.
///
/// The path is stripped first, then the patterns are tried in order against
/// the bare filename; the first match wins. When nothing matches, the
/// filename stem (extension stripped) is returned as-is.
pub fn extract_po_identifier(source: &str) -> String {
    let name = file_name(source);

    for pattern in identifier_patterns() {
        if let Some(captures) = pattern.captures(name) {
            if let Some(id) = captures.get(1) {
                return id.as_str().to_string();
            }
        }
    }

    stem(name).to_string()
}

fn file_name(source: &str) -> &str {
    source
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(source)
}

fn stem(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}
