//! Conflict detection for calendar events.
//!
//! Events arrive from two places with different timing shapes: records
//! loaded from the store carry separate date and time fields, while
//! calendar-widget callbacks carry a combined timestamp or a start
//! moment. [`EventTiming`] is the union of those shapes and
//! [`EventTiming::normalize`] reduces them to one canonical [`Slot`] at
//! the boundary, so the conflict check itself only ever compares
//! canonical pairs.

pub mod conflict;
pub mod timing;

pub use conflict::{TimedEntry, has_conflict};
pub use timing::{EventTiming, Slot, StartMoment};
