//! Text normalization for schedule parsing.
//!
//! Two small, separate concerns:
//! - [`normalize_superscripts`] rewrites the Unicode ordinal-suffix glyphs
//!   people paste from word processors ("2ᵉ", "1ᵉʳ") into plain ASCII so the
//!   rest of the pipeline can match them. Nothing else is touched.
//! - [`fold`] builds the accent-folded, lower-cased working copy that all
//!   keyword detection runs on. The original clause text is never mutated.

/// Rewrite superscript "e" (U+1D49) and "r" (U+02B3) to plain ASCII.
///
/// Accents, case, and punctuation are deliberately preserved; downstream
/// matching handles those via [`fold`].
pub fn normalize_superscripts(text: &str) -> String {
    text.replace('\u{1D49}', "e").replace('\u{2B3}', "r")
}

/// Lower-case the text and strip French diacritics, yielding an ASCII-safe
/// copy for keyword scanning.
///
/// The fold is per-character, so positions found in the folded copy line up
/// with the folded copy itself; all detection indexes only into this copy.
pub(crate) fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}
