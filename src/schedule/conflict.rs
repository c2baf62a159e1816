//! Point-in-time conflict detection

use super::timing::Slot;

/// An existing event reduced to its identifier and canonical slot.
/// Entries with no slot carry no usable timing and never conflict.
#[derive(Debug, Clone)]
pub struct TimedEntry {
    pub id: String,
    pub slot: Option<Slot>,
}

/// Decide whether the candidate (date, time) collides with any other
/// event. The entry matching `candidate_id` is skipped so an event never
/// conflicts with itself during edit or move; a new event passes `None`
/// and excludes nothing. A conflict is an exact slot match, not a range
/// overlap.
pub fn has_conflict(candidate_id: Option<&str>, target: &Slot, entries: &[TimedEntry]) -> bool {
    entries.iter().any(|entry| {
        if candidate_id.is_some_and(|id| id == entry.id) {
            return false;
        }
        entry.slot.as_ref().is_some_and(|slot| slot == target)
    })
}
