//! Core domain types for delivery-schedule tags.
//!
//! A schedule tag is a fixed 6-character group: ordinal digit, weekday code,
//! time-slot code, category code (e.g. `2VeMfFr`). The 2-letter codes defined
//! here are the compatibility contract with the spreadsheet cells that store
//! encoded schedules.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Weekday
// ---------------------------------------------------------------------------

/// A delivery weekday. Only Monday through Friday exist; weekend deliveries
/// are not part of the schedule vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays in calendar order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// The canonical 2-letter tag code (French initials).
    pub fn code(self) -> &'static str {
        match self {
            Weekday::Monday => "Lu",
            Weekday::Tuesday => "Ma",
            Weekday::Wednesday => "Me",
            Weekday::Thursday => "Je",
            Weekday::Friday => "Ve",
        }
    }

    /// Parse a tag code back into a weekday.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }
}

// ---------------------------------------------------------------------------
// TimeSlot
// ---------------------------------------------------------------------------

/// One of the three canonical delivery instants. Arbitrary times do not
/// exist in the schedule vocabulary; free text is snapped to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    /// 08:30 — early morning round ("Md").
    Early,
    /// 10:00 — late morning round ("Mf").
    Mid,
    /// 14:00 — afternoon round ("Ap").
    Afternoon,
}

impl TimeSlot {
    /// All slots in chronological order.
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Early, TimeSlot::Mid, TimeSlot::Afternoon];

    /// The canonical 2-letter tag code.
    pub fn code(self) -> &'static str {
        match self {
            TimeSlot::Early => "Md",
            TimeSlot::Mid => "Mf",
            TimeSlot::Afternoon => "Ap",
        }
    }

    /// Parse a tag code back into a slot.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// The clock time this slot stands for, as `(hour, minute)`.
    pub fn clock(self) -> (u8, u8) {
        match self {
            TimeSlot::Early => (8, 30),
            TimeSlot::Mid => (10, 0),
            TimeSlot::Afternoon => (14, 0),
        }
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// A delivery product class.
///
/// Declaration order is the canonical emission order (Fresh before Dry before
/// Frozen), so an ordered set of categories lists them exactly as the encoded
/// output must.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// "Frais" — chilled goods.
    Fresh,
    /// "Sec" — dry goods.
    Dry,
    /// "Surgelé" — frozen goods.
    Frozen,
}

impl Category {
    /// All categories in canonical emission order.
    pub const ALL: [Category; 3] = [Category::Fresh, Category::Dry, Category::Frozen];

    /// The canonical 2-letter tag code.
    pub fn code(self) -> &'static str {
        match self {
            Category::Fresh => "Fr",
            Category::Dry => "Se",
            Category::Frozen => "Su",
        }
    }

    /// Parse a tag code back into a category.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

// ---------------------------------------------------------------------------
// ScheduleRule
// ---------------------------------------------------------------------------

/// One recognized recurring delivery rule: "the n-th (or every) WEEKDAY at
/// SLOT, delivering CATEGORIES".
///
/// Rules are transient — built per clause by the extractor, turned into tags
/// by the encoder. Only the encoded string is stored by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRule {
    /// Which occurrence of the weekday in a month; 0 means every occurrence.
    pub ordinal: u8,
    /// The delivery weekday.
    pub weekday: Weekday,
    /// The delivery time slot.
    pub slot: TimeSlot,
    /// Delivered product classes; iteration order is the canonical tag order.
    pub categories: BTreeSet<Category>,
}

impl ScheduleRule {
    /// Build a rule from its parts; duplicate categories collapse.
    pub fn new(
        ordinal: u8,
        weekday: Weekday,
        slot: TimeSlot,
        categories: impl IntoIterator<Item = Category>,
    ) -> Self {
        Self {
            ordinal,
            weekday,
            slot,
            categories: categories.into_iter().collect(),
        }
    }
}
