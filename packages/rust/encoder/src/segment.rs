//! Clause segmentation.
//!
//! A clause is a substring expected to describe at most one weekday rule.
//! Boundaries are periods and line breaks; runs of boundary characters and
//! blank segments collapse away. The final clause of the input may be
//! unterminated. Segmentation does no validation — clauses that turn out to
//! be noise are discarded later by the extractor.

/// Split normalized text into trimmed, non-empty clause candidates, in
/// input order.
pub(crate) fn clauses(text: &str) -> Vec<&str> {
    text.split(['.', '\n', '\r'])
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .collect()
}
