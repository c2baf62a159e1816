//! Public types for the events API
use serde::{Deserialize, Serialize};

/// Color applied to an event when none was chosen.
pub const DEFAULT_CATEGORY_COLOR: &str = "#004D40";

/// How an event repeats. Stored as advisory metadata only; never
/// expanded into actual repeated occurrences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Custom,
}

impl Recurrence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Custom => "Custom",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "None" => Some(Self::None),
            "Daily" => Some(Self::Daily),
            "Weekly" => Some(Self::Weekly),
            "Monthly" => Some(Self::Monthly),
            "Custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

/// Unit for the custom repeat interval, meaningful only when
/// recurrence is `Custom`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomUnit {
    #[default]
    #[serde(rename = "Day(s)")]
    Days,
    #[serde(rename = "Week(s)")]
    Weeks,
    #[serde(rename = "Month(s)")]
    Months,
}

impl CustomUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Days => "Day(s)",
            Self::Weeks => "Week(s)",
            Self::Months => "Month(s)",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Day(s)" => Some(Self::Days),
            "Week(s)" => Some(Self::Weeks),
            "Month(s)" => Some(Self::Months),
            _ => None,
        }
    }
}

/// A stored event record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recurrence: Recurrence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_frequency: Option<u32>,
    #[serde(default)]
    pub custom_unit: CustomUnit,
    #[serde(default = "default_category_color")]
    pub category_color: String,
}

/// Event fields for creation, before the store assigns an identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAttrs {
    pub title: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recurrence: Recurrence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_frequency: Option<u32>,
    #[serde(default)]
    pub custom_unit: CustomUnit,
    #[serde(default = "default_category_color")]
    pub category_color: String,
}

/// Partial update; only the provided fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_frequency: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_unit: Option<CustomUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_color: Option<String>,
}

fn default_category_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}
