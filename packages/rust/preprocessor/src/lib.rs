//! Info-field preprocessor: free text to machine-parsable tags.
//!
//! The "Informations complémentaires" field of a membership form mixes prose
//! with two pieces of structured data volunteers type by hand: a unit count
//! ("UD: 12" or "100 UD.") and a delivery planning block ("Planning: Tous les
//! lundis 8h30: Frais."). Each rewrite pass is a function `&str -> String`
//! applied in sequence; recognized fragments become `$ud:<n>$` and
//! `$planning:<encoded>$` tags in place, everything else passes through
//! untouched.

use std::sync::LazyLock;

use plantag_encoder::{encode_schedule, normalize_superscripts};
use regex::Regex;
use tracing::{debug, instrument};

/// Run the full preprocessing pipeline on an info-field text.
///
/// Total like the encoder itself: text without recognizable labels comes
/// back unchanged, and empty input yields empty output.
#[instrument(skip(text), fields(len = text.len()))]
pub fn preprocess_info(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // Superscript glyphs would otherwise defeat the planning label match.
    let mut result = normalize_superscripts(text);

    result = rewrite_ud_labels(&result);
    result = rewrite_ud_suffixes(&result);
    result = rewrite_planning_blocks(&result);

    debug!(out_len = result.len(), "info field preprocessed");
    result
}

// ---------------------------------------------------------------------------
// Pass 1: "UD: <n>" labels
// ---------------------------------------------------------------------------

/// Rewrite "UD: 1" or "UD : 5." into `$ud:1$` / `$ud:5$`.
fn rewrite_ud_labels(text: &str) -> String {
    static UD_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?i)UD\s*:\s*(\d+)\W*").expect("valid regex")
    });

    UD_LABEL_RE.replace_all(text, "$$ud:$1$$").to_string()
}

// ---------------------------------------------------------------------------
// Pass 2: "<n> UD" suffix form
// ---------------------------------------------------------------------------

/// Rewrite "100 UD." into `$ud:100$`.
fn rewrite_ud_suffixes(text: &str) -> String {
    static UD_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?i)(\d+)\s*UD\W*").expect("valid regex")
    });

    UD_SUFFIX_RE.replace_all(text, "$$ud:$1$$").to_string()
}

// ---------------------------------------------------------------------------
// Pass 3: "Planning: ..." blocks
// ---------------------------------------------------------------------------

/// Rewrite a planning block into its encoded tag form.
///
/// The label must introduce one or more well-formed
/// `<ordinal?><weekday> <time>: <categories>.` segments; the whole captured
/// block is handed to the schedule encoder.
fn rewrite_planning_blocks(text: &str) -> String {
    static PLANNING_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?i)Planning\s*:((?:\s*[0-4]*[a-z ]+[0-9]+h[0-9]*\s*:\s*[^.]+\.)+)")
            .expect("valid regex")
    });

    PLANNING_RE
        .replace_all(text, |caps: &regex::Captures| {
            format!("$planning:{}$", encode_schedule(caps[1].trim()))
        })
        .to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ud_label_form() {
        assert_eq!(preprocess_info("UD: 1"), "$ud:1$");
        assert_eq!(preprocess_info("UD : 5."), "$ud:5$");
    }

    #[test]
    fn ud_suffix_form() {
        assert_eq!(preprocess_info("100 UD."), "$ud:100$");
    }

    #[test]
    fn ud_case_insensitive() {
        assert_eq!(preprocess_info("ud: 3"), "$ud:3$");
    }

    #[test]
    fn planning_single_segment() {
        assert_eq!(
            preprocess_info("Planning: Tous les lundis 8h30: Frais."),
            "$planning:0LuMdFr$"
        );
    }

    #[test]
    fn planning_multiple_segments() {
        assert_eq!(
            preprocess_info("Planning: 1er mercredi 10h: Frais, Sec. 2e lundi 14h: Surgelé."),
            "$planning:1MeMfFr1MeMfSe2LuApSu$"
        );
    }

    #[test]
    fn planning_with_superscript_ordinal() {
        assert_eq!(
            preprocess_info("Planning: 2\u{1D49} vendredi 10h: Frais."),
            "$planning:2VeMfFr$"
        );
    }

    #[test]
    fn mixed_labels_in_one_field() {
        assert_eq!(
            preprocess_info("UD : 12. Planning: Tous les jeudis 14h: Surgelé."),
            "$ud:12$$planning:0JeApSu$"
        );
    }

    #[test]
    fn prose_passes_through_unchanged() {
        let text = "Accès par la cour intérieure, sonner deux fois.";
        assert_eq!(preprocess_info(text), text);
    }

    #[test]
    fn planning_label_without_wellformed_segment_is_left_alone() {
        let text = "Planning: à définir";
        assert_eq!(preprocess_info(text), text);
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(preprocess_info(""), "");
    }
}
