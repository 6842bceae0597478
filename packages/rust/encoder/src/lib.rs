//! Schedule-text encoder: French free-text delivery schedules to tag strings.
//!
//! Turns prose like `"2e vendredi 10h: Frais, Sec, Surgelé."` into the
//! compact form `"2VeMfFr2VeMfSe2VeMfSu"` — one fixed 7-character tag per
//! (rule, category) pair, fit for storage in a single spreadsheet cell.
//!
//! The pipeline is strictly left to right:
//! raw text → superscript normalization → clause segmentation → per-clause
//! rule extraction (with the last explicit time slot carried across clauses)
//! → tag emission.
//!
//! [`encode_schedule`] is total: anything it cannot recognize is omitted from
//! the output rather than reported. [`decode_schedule`] goes the other way
//! and is the fallible half, since a stored tag string can be corrupt.

mod extract;
mod normalize;
mod segment;

use plantag_shared::{Category, PlantagError, Result, ScheduleRule, TimeSlot, Weekday};
use tracing::{debug, instrument};

pub use normalize::normalize_superscripts;

/// Byte length of one encoded tag: ordinal digit + three 2-letter codes.
pub const TAG_LEN: usize = 7;

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Encode a free-text French schedule description into concatenated
/// 7-character tags.
///
/// Clauses are split at periods and line breaks. Each clause needs a weekday
/// to count; the n-th-occurrence ordinal defaults to 0 ("every"), the time
/// slot defaults to the last explicitly stated one (08:30 before any is
/// seen), and at least one product category must be named for tags to be
/// emitted. Unrecognizable text is skipped silently — the empty string is a
/// normal result, not an error.
///
/// ```
/// use plantag_encoder::encode_schedule;
///
/// assert_eq!(
///     encode_schedule("Tous les mercredis 10h: Sec."),
///     "0MeMfSe"
/// );
/// assert_eq!(encode_schedule(""), "");
/// ```
#[instrument(skip(text), fields(len = text.len()))]
pub fn encode_schedule(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let normalized = normalize_superscripts(text);
    let clauses = segment::clauses(&normalized);

    // Single mutable piece of state, scoped to this call: the last explicit
    // time slot, consulted by clauses that omit one.
    let mut last_slot = TimeSlot::Early;
    let mut out = String::new();
    let mut n_rules = 0usize;

    for clause in &clauses {
        let reading = extract::read_clause(clause, last_slot);
        if let Some(explicit) = reading.explicit_slot {
            last_slot = explicit;
        }
        if let Some(rule) = reading.rule {
            emit_tags(&rule, &mut out);
            n_rules += 1;
        }
    }

    debug!(clauses = clauses.len(), rules = n_rules, tags = out.len() / TAG_LEN, "schedule encoded");
    out
}

/// Append one tag per category of the rule, in canonical category order.
fn emit_tags(rule: &ScheduleRule, out: &mut String) {
    for category in &rule.categories {
        out.push_str(&format!(
            "{}{}{}{}",
            rule.ordinal,
            rule.weekday.code(),
            rule.slot.code(),
            category.code()
        ));
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode a tag string back into schedule rules.
///
/// Consecutive tags sharing ordinal, weekday and slot regroup into a single
/// rule, so decoding an encoder output restores the rules the extractor saw.
/// Unlike encoding, this is fallible: stored cells can hold truncated or
/// hand-edited strings.
#[instrument(skip(code), fields(len = code.len()))]
pub fn decode_schedule(code: &str) -> Result<Vec<ScheduleRule>> {
    if !code.is_ascii() {
        return Err(PlantagError::decode("tag string must be ASCII"));
    }
    if code.len() % TAG_LEN != 0 {
        return Err(PlantagError::decode(format!(
            "tag string length {} is not a multiple of {TAG_LEN}",
            code.len()
        )));
    }

    let mut rules: Vec<ScheduleRule> = Vec::new();

    for tag in code.as_bytes().chunks(TAG_LEN) {
        // Safe: verified ASCII above.
        let tag = std::str::from_utf8(tag).expect("ascii chunk");

        let ordinal = tag[..1]
            .parse::<u8>()
            .map_err(|_| PlantagError::decode(format!("'{tag}': ordinal is not a digit")))?;
        let weekday = Weekday::from_code(&tag[1..3])
            .ok_or_else(|| PlantagError::decode(format!("'{tag}': unknown weekday code")))?;
        let slot = TimeSlot::from_code(&tag[3..5])
            .ok_or_else(|| PlantagError::decode(format!("'{tag}': unknown time-slot code")))?;
        let category = Category::from_code(&tag[5..])
            .ok_or_else(|| PlantagError::decode(format!("'{tag}': unknown category code")))?;

        match rules.last_mut() {
            Some(last) if last.ordinal == ordinal && last.weekday == weekday && last.slot == slot => {
                last.categories.insert(category);
            }
            _ => rules.push(ScheduleRule::new(ordinal, weekday, slot, [category])),
        }
    }

    Ok(rules)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- Literal scenarios (the behavioral contract) ---

    /// (input, expected) pairs covering the whole grammar: ordinals and their
    /// suffix spellings, superscripts, defaults, time carry-over, category
    /// spelling tolerance, and noise clauses.
    const SAMPLES: &[(&str, &str)] = &[
        (
            "2e vendredi 10h: Frais, Sec, Surgelé.",
            "2VeMfFr2VeMfSe2VeMfSu",
        ),
        (
            "2e vendredi 10h: Frais, Sec, Surgelé.\n\n4e vendredi 10h: Frais, Sec, Surgelé.",
            "2VeMfFr2VeMfSe2VeMfSu4VeMfFr4VeMfSe4VeMfSu",
        ),
        // Categories re-order to canonical Fresh, Dry, Frozen.
        (
            "2e vendredi 10h: Sec, frais, Surgelé.",
            "2VeMfFr2VeMfSe2VeMfSu",
        ),
        ("Tous les mercredis 10h: Sec.", "0MeMfSe"),
        // No time at all: defaults to the early round.
        ("4 mercredi frais+surgeles", "4MeMdFr4MeMdSu"),
        // Second clause carries the 10h slot from the first.
        (
            "1er mercredi 10h: Frais, Sec. 2ème lundi : surgelés\n2e mercredi 10h: Frais, Sec.",
            "1MeMfFr1MeMfSe2LuMfSu2MeMfFr2MeMfSe",
        ),
        // Misspelled filler word is ignored, ordinal defaults to 0.
        ("Tois les jeudi frais, surgeles", "0JeMdFr0JeMdSu"),
        // Missing space between weekday and time.
        ("4e mardi8h30: Frais, Sec.", "4MaMdFr4MaMdSe"),
        (
            "2e vendredi 14h: Surgelé.\n3e jeudi 8h30: Frais, Sec, Surgelé.",
            "2VeApSu3JeMdFr3JeMdSe3JeMdSu",
        ),
        // Middle clause has no time and inherits 8h30 from the first.
        (
            "Tous les lundi 8h30:  Sec, Surgelé.\nTois les jeudi frais, surgeles\nTous les vendredis 8h30:  Sec,",
            "0LuMdSe0LuMdSu0JeMdFr0JeMdSu0VeMdSe",
        ),
        ("4e vendredi 8h30: Frais, Sec, Surgelé.", "4VeMdFr4VeMdSe4VeMdSu"),
        (
            "1er mercredi 10h: Frais, Sec, Surgelé.\n3e mercredi 10h: Frais, Sec, Surgelé.",
            "1MeMfFr1MeMfSe1MeMfSu3MeMfFr3MeMfSe3MeMfSu",
        ),
        ("1er lundi 8h30:  Sec", "1LuMdSe"),
        ("1er mardi 8h30: Frais, Sec, Surgelé.", "1MaMdFr1MaMdSe1MaMdSu"),
        (
            "1er jeudi 8h30: Frais, Sec, Surgelé.\n3e jeudi 8h30: Frais, Sec, Surgelé.",
            "1JeMdFr1JeMdSe1JeMdSu3JeMdFr3JeMdSe3JeMdSu",
        ),
        ("\n4e vendredi 8h30: Frais, Sec.", "4VeMdFr4VeMdSe"),
        ("2e jeudi 10h: Sec.", "2JeMfSe"),
        ("2e mercredi 10h: Frais, Sec, Surgelé.", "2MeMfFr2MeMfSe2MeMfSu"),
        ("3e vendredi 8h30: Frais, Sec, Surgelé.", "3VeMdFr3VeMdSe3VeMdSu"),
        ("2e lundi 8h30: Frais, Sec, Surgelé.", "2LuMdFr2LuMdSe2LuMdSu"),
        ("3e mercredi 8h30: sec", "3MeMdSe"),
        ("1er mercredi 8h30: Sec.", "1MeMdSe"),
        ("1er mardi 8h30: Sec.", "1MaMdSe"),
        ("2e jeudi 10h: Frais, Sec", "2JeMfFr2JeMfSe"),
        ("3e mardi 8h30: Frais, Sec, Surgelé.", "3MaMdFr3MaMdSe3MaMdSu"),
        // Trailing incomplete clause still encodes what it names.
        (
            "3e mardi 8h30: Frais, Sec, Surgelé.\n4e mardi 8h30: Frais, Sec, ",
            "3MaMdFr3MaMdSe3MaMdSu4MaMdFr4MaMdSe",
        ),
        ("2e mardi 8h30: Frais, Sec, Surgelé.", "2MaMdFr2MaMdSe2MaMdSu"),
        // 10h30 snaps to the 10:00 round; minutes are ignored.
        ("3e mardi 10h30: Frais, Sec, Surgelé.", "3MaMfFr3MaMfSe3MaMfSu"),
        ("1er lundi 8h30: Frais, Sec, Surgelé.", "1LuMdFr1LuMdSe1LuMdSu"),
        (
            "2e lundi 8h30: Frais, Sec, Surgelé.\n4e lundi 8h30: Frais, Sec, Surgelé.",
            "2LuMdFr2LuMdSe2LuMdSu4LuMdFr4LuMdSe4LuMdSu",
        ),
        (
            "\n2e lundi 8h30: Sec, Frais, Surgelé.\n4e lundi 8h30: Sec, Frais, Surgelé.",
            "2LuMdFr2LuMdSe2LuMdSu4LuMdFr4LuMdSe4LuMdSu",
        ),
        ("\n4e vendredi 10h: Frais, Sec, Surgelé.", "4VeMfFr4VeMfSe4VeMfSu"),
        // Superscript ordinal glyphs.
        ("2\u{1D49} vendredi 10h: Frais.", "2VeMfFr"),
        ("1\u{1D49}\u{2B3} mercredi 14h: Surgelés.", "1MeApSu"),
        // A period ends the clause; the fragment after it has no weekday and
        // is dropped.
        ("3e jeudi 8h30: Sec., Frais, Surgelés", "3JeMdSe"),
        // Restating the same ordinal+weekday yields both rules, in order.
        (
            "3 eme mercredi frais sec surgele\n3e mercredi 10h: Frais, Sec, Surgelé.",
            "3MeMdFr3MeMdSe3MeMdSu3MeMfFr3MeMfSe3MeMfSu",
        ),
        // Pure noise.
        ("", ""),
        ("   \n  ", ""),
        ("Livraison soumise à validation", ""),
    ];

    #[test]
    fn encode_samples() {
        for &(input, expected) in SAMPLES {
            let actual = encode_schedule(input);
            assert_eq!(
                &actual, expected,
                "input: {:?}",
                input.lines().next().unwrap_or("")
            );
        }
    }

    // --- Structural invariants ---

    #[test]
    fn output_is_whole_tags() {
        for &(input, _) in SAMPLES {
            let out = encode_schedule(input);
            assert_eq!(out.len() % TAG_LEN, 0, "input: {input:?}");
        }
    }

    #[test]
    fn category_codes_are_canonical() {
        for &(input, _) in SAMPLES {
            let out = encode_schedule(input);
            for tag in out.as_bytes().chunks(TAG_LEN) {
                let cat = std::str::from_utf8(&tag[5..7]).unwrap();
                assert!(matches!(cat, "Fr" | "Se" | "Su"), "tag: {tag:?}");
            }
        }
    }

    #[test]
    fn clause_without_category_still_updates_time_state() {
        // First clause names 14h but no category; second inherits it.
        assert_eq!(encode_schedule("2e lundi 14h\n3e mardi: frais"), "3MaApFr");
    }

    #[test]
    fn carry_over_resets_between_calls() {
        assert_eq!(encode_schedule("2e lundi 14h: sec"), "2LuApSe");
        // A fresh call starts from the early-round default again.
        assert_eq!(encode_schedule("2e lundi: sec"), "2LuMdSe");
    }

    // --- Decoding ---

    #[test]
    fn decode_regroups_rules() {
        let rules = decode_schedule("2VeMfFr2VeMfSe2VeMfSu4MaMdSe").expect("decode");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].ordinal, 2);
        assert_eq!(rules[0].weekday, Weekday::Friday);
        assert_eq!(rules[0].slot, TimeSlot::Mid);
        assert_eq!(rules[0].categories.len(), 3);
        assert_eq!(rules[1].ordinal, 4);
        assert_eq!(rules[1].categories.len(), 1);
    }

    #[test]
    fn decode_empty_is_no_rules() {
        assert!(decode_schedule("").expect("decode").is_empty());
    }

    #[test]
    fn decode_inverts_encode() {
        let text = "1er mercredi 10h: Frais, Sec. 2ème lundi : surgelés";
        let rules = decode_schedule(&encode_schedule(text)).expect("decode");
        assert_eq!(
            rules,
            vec![
                ScheduleRule::new(
                    1,
                    Weekday::Wednesday,
                    TimeSlot::Mid,
                    [Category::Fresh, Category::Dry]
                ),
                ScheduleRule::new(2, Weekday::Monday, TimeSlot::Mid, [Category::Frozen]),
            ]
        );
    }

    #[test]
    fn decode_rejects_ragged_length() {
        let err = decode_schedule("2VeMf").expect_err("ragged length");
        assert!(err.to_string().contains("multiple of 7"));
    }

    #[test]
    fn decode_rejects_unknown_codes() {
        assert!(decode_schedule("2SaMfFr").is_err()); // weekend day
        assert!(decode_schedule("2VeXxFr").is_err()); // bad slot
        assert!(decode_schedule("2VeMfZz").is_err()); // bad category
        assert!(decode_schedule("xVeMfFr").is_err()); // bad ordinal
    }
}
