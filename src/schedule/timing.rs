//! Normalization of event timing representations

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Canonical (date, time) pair: a `YYYY-MM-DD` date and an `HH:MM` time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub date: String,
    pub time: String,
}

impl Slot {
    pub fn new(date: &str, time: &str) -> Self {
        Self {
            date: date.to_string(),
            time: time.to_string(),
        }
    }
}

/// A widget `start` value, either a raw string or a structured instant.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StartMoment {
    Instant(DateTime<Utc>),
    Text(String),
}

/// The possible representations of an event's timing. Store records use
/// separate fields; widget interaction callbacks expose a combined
/// timestamp string or a start moment.
#[derive(Debug, Clone)]
pub enum EventTiming {
    /// Combined ISO-like timestamp, e.g. `2024-06-01T09:00:00`
    Combined(String),
    /// Separate date and time fields as persisted
    Fields { date: String, time: String },
    /// A start moment from a widget payload
    Start(StartMoment),
    /// No usable timing information
    Unknown,
}

impl EventTiming {
    /// Classify a loosely-shaped payload by priority: a combined
    /// timestamp wins, then the date+time field pair (both must be
    /// present), then a start moment.
    pub fn from_parts(
        start_str: Option<&str>,
        date: Option<&str>,
        time: Option<&str>,
        start: Option<StartMoment>,
    ) -> Self {
        if let Some(combined) = start_str {
            return Self::Combined(combined.to_string());
        }
        if let (Some(date), Some(time)) = (date, time) {
            return Self::Fields {
                date: date.to_string(),
                time: time.to_string(),
            };
        }
        if let Some(moment) = start {
            return Self::Start(moment);
        }
        Self::Unknown
    }

    /// Reduce to the canonical pair. Returns `None` when there is no
    /// usable timing, in which case the event can never conflict.
    pub fn normalize(&self) -> Option<Slot> {
        match self {
            Self::Combined(combined) => Some(split_timestamp(combined)),
            Self::Fields { date, time } => Some(Slot::new(date, time)),
            Self::Start(StartMoment::Text(text)) => Some(split_timestamp(text)),
            Self::Start(StartMoment::Instant(instant)) => Some(Slot {
                date: instant.format("%Y-%m-%d").to_string(),
                time: instant.format("%H:%M").to_string(),
            }),
            Self::Unknown => None,
        }
    }
}

/// Split a combined timestamp on the date/time separator, keeping only
/// hour and minute from the time portion. A string with no separator is
/// all date and an empty time.
fn split_timestamp(combined: &str) -> Slot {
    match combined.split_once('T') {
        Some((date, time)) => Slot {
            date: date.to_string(),
            time: time.get(..5).unwrap_or(time).to_string(),
        },
        None => Slot {
            date: combined.to_string(),
            time: String::new(),
        },
    }
}
