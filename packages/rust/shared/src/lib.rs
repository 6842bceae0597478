//! Shared types and error model for plantag.
//!
//! This crate is the foundation depended on by all other plantag crates.
//! It provides:
//! - [`PlantagError`] — the unified error type
//! - Domain types ([`Weekday`], [`TimeSlot`], [`Category`], [`ScheduleRule`])

pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use error::{PlantagError, Result};
pub use types::{Category, ScheduleRule, TimeSlot, Weekday};
