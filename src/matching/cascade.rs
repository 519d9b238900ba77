use serde::{Deserialize, Serialize};

use crate::book::index::{strip_dashes, PriceBookIndex};

/// Cascade stage that produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStage {
    /// Candidate is an index key as-is
    Exact,
    /// Candidate matched after stripping a literal "BW" prefix
    BwPrefix,
    /// Candidate matched after stripping a single "B" prefix
    BPrefix,
    /// Candidate matched its canonical dashed model after dash removal
    DashRemoval,
}

impl std::fmt::Display for MatchStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::BwPrefix => write!(f, "BW prefix"),
            Self::BPrefix => write!(f, "B prefix"),
            Self::DashRemoval => write!(f, "dash removal"),
        }
    }
}

/// A successful model match.
///
/// `displayed_model` is the candidate as it appeared on the PO (prefixes and
/// dashes intact) and is what reports show; `lookup_model` is the index key
/// the price comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMatch {
    pub displayed_model: String,
    pub lookup_model: String,
    pub stage: MatchStage,
}

/// Run the fixed-priority matching cascade over an ordered candidate list.
///
/// Each stage scans the *entire* candidate list before falling through to
/// the next, so an exact match on a later candidate beats a prefix match on
/// an earlier one. Returns `None` when no stage succeeds; the caller assigns
/// `ModelNotFound`.
pub fn run_cascade(candidates: &[String], index: &PriceBookIndex) -> Option<ModelMatch> {
    // Stage 1: exact key
    for candidate in candidates {
        if index.contains(candidate) {
            return Some(ModelMatch {
                displayed_model: candidate.clone(),
                lookup_model: candidate.clone(),
                stage: MatchStage::Exact,
            });
        }
    }

    // Stage 2: "BW" prefix stripped
    for candidate in candidates {
        if let Some(base) = candidate.strip_prefix("BW") {
            if index.contains(base) {
                return Some(ModelMatch {
                    displayed_model: candidate.clone(),
                    lookup_model: base.to_string(),
                    stage: MatchStage::BwPrefix,
                });
            }
        }
    }

    // Stage 3: single "B" prefix stripped (not "BW")
    for candidate in candidates {
        if candidate.starts_with("BW") {
            continue;
        }
        if let Some(base) = candidate.strip_prefix('B') {
            if index.contains(base) {
                return Some(ModelMatch {
                    displayed_model: candidate.clone(),
                    lookup_model: base.to_string(),
                    stage: MatchStage::BPrefix,
                });
            }
        }
    }

    // Stage 4: dash removal, over the candidate and its prefix-stripped
    // variants, against the canonical dashed model
    for candidate in candidates {
        for variant in prefix_variants(candidate) {
            let stripped = strip_dashes(variant);
            if let Some(canonical) = index.canonical_for_dedashed(&stripped) {
                // Accept only on exact dash-stripped equality so unrelated
                // models that coincidentally share digits never conflate.
                if strip_dashes(canonical) == stripped {
                    return Some(ModelMatch {
                        displayed_model: candidate.clone(),
                        lookup_model: canonical.to_string(),
                        stage: MatchStage::DashRemoval,
                    });
                }
            }
        }
    }

    None
}

/// The candidate itself plus its BW-stripped or B-stripped form
fn prefix_variants(candidate: &str) -> Vec<&str> {
    let mut variants = vec![candidate];
    if let Some(base) = candidate.strip_prefix("BW") {
        variants.push(base);
    } else if let Some(base) = candidate.strip_prefix('B') {
        variants.push(base);
    }
    variants
}
