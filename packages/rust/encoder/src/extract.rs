//! Rule extraction from a single clause.
//!
//! Detection is table-driven: each enum has a list of accepted normalized
//! spellings, and matching is a substring scan over the accent-folded,
//! lower-cased copy of the clause. Substring matching is what buys the
//! tolerance the input needs — trailing plurals ("mercredis", "surgelés")
//! and missing spaces ("mardi8h30") match for free, and filler words before
//! the ordinal ("Tous les", or misspellings like "Tois les") are simply
//! never inspected.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use plantag_shared::{Category, ScheduleRule, TimeSlot, Weekday};
use regex::Regex;
use tracing::trace;

use crate::normalize::fold;

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

/// Folded weekday spellings. Plural forms match via substring.
const WEEKDAY_SPELLINGS: [(Weekday, &str); 5] = [
    (Weekday::Monday, "lundi"),
    (Weekday::Tuesday, "mardi"),
    (Weekday::Wednesday, "mercredi"),
    (Weekday::Thursday, "jeudi"),
    (Weekday::Friday, "vendredi"),
];

/// Folded category keywords. "surgele" covers "surgelé", "surgeles",
/// "surgelés" once accents are folded.
const CATEGORY_SPELLINGS: [(Category, &str); 3] = [
    (Category::Fresh, "frais"),
    (Category::Dry, "sec"),
    (Category::Frozen, "surgele"),
];

/// A digit directly before the weekday, optionally followed by an ordinal
/// suffix ("1er", "2e", "3 eme", "2ème" after folding), anchored to the end
/// of the prefix.
static ORDINAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d)\s*(?:eme|er|e)?\s*$").expect("valid regex")
});

/// A time expression `<hour>h<minutes?>`, whitespace-tolerant.
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})\s*h\s*(\d{2})?").expect("valid regex")
});

// ---------------------------------------------------------------------------
// Clause reading
// ---------------------------------------------------------------------------

/// What one clause contributed.
///
/// The two fields are deliberately independent: a clause that names a weekday
/// and a time but no category yields no rule, yet its explicit time must
/// still be committed to the carried state.
pub(crate) struct ClauseReading {
    /// The recognized rule, if the clause named at least one category.
    pub rule: Option<ScheduleRule>,
    /// The explicit time slot the clause named, if any.
    pub explicit_slot: Option<TimeSlot>,
}

/// Read one clause against the carried time slot.
///
/// A clause without a recognizable weekday contributes nothing at all — no
/// rule and no time-state update.
pub(crate) fn read_clause(clause: &str, carried_slot: TimeSlot) -> ClauseReading {
    let folded = fold(clause);

    let Some((weekday, at)) = find_weekday(&folded) else {
        trace!(clause, "no weekday, clause dropped");
        return ClauseReading {
            rule: None,
            explicit_slot: None,
        };
    };

    let ordinal = find_ordinal(&folded[..at]);
    let explicit_slot = find_time(&folded);
    let slot = explicit_slot.unwrap_or(carried_slot);
    let categories = find_categories(&folded);

    trace!(clause, ?weekday, ordinal, ?slot, n_categories = categories.len(), "clause read");

    let rule = (!categories.is_empty()).then(|| ScheduleRule {
        ordinal,
        weekday,
        slot,
        categories,
    });

    ClauseReading {
        rule,
        explicit_slot,
    }
}

// ---------------------------------------------------------------------------
// Field detection
// ---------------------------------------------------------------------------

/// Earliest weekday name in the folded clause, with its byte position.
fn find_weekday(folded: &str) -> Option<(Weekday, usize)> {
    WEEKDAY_SPELLINGS
        .iter()
        .filter_map(|&(day, name)| folded.find(name).map(|at| (day, at)))
        .min_by_key(|&(_, at)| at)
}

/// Ordinal from the folded text before the weekday; 0 unless a digit
/// (optionally suffixed "er"/"e"/"eme") sits directly in front of it.
fn find_ordinal(prefix: &str) -> u8 {
    ORDINAL_RE
        .captures(prefix)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// First time expression whose hour maps to a canonical slot.
///
/// Hours 8, 10 and 14 snap to the three delivery rounds; minutes are
/// irrelevant ("10h30" still means the 10:00 round). Any other hour is not a
/// time for our purposes and leaves the carried slot in charge.
fn find_time(folded: &str) -> Option<TimeSlot> {
    TIME_RE
        .captures_iter(folded)
        .filter_map(|caps| caps[1].parse::<u8>().ok())
        .find_map(slot_for_hour)
}

fn slot_for_hour(hour: u8) -> Option<TimeSlot> {
    match hour {
        8 => Some(TimeSlot::Early),
        10 => Some(TimeSlot::Mid),
        14 => Some(TimeSlot::Afternoon),
        _ => None,
    }
}

/// Category keywords in the clause remainder — after the first colon if there
/// is one, the whole clause otherwise. Matching is independent per category
/// and separator-agnostic; duplicates collapse in the set.
fn find_categories(folded: &str) -> BTreeSet<Category> {
    let remainder = match folded.split_once(':') {
        Some((_, after)) => after,
        None => folded,
    };

    CATEGORY_SPELLINGS
        .iter()
        .filter(|(_, keyword)| remainder.contains(keyword))
        .map(|&(category, _)| category)
        .collect()
}
