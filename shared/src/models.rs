use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status shown on an event card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Today,
    Live,
    Past,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Today => "today",
            EventStatus::Live => "live",
            EventStatus::Past => "past",
        }
    }

    /// Human-readable badge text
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Today => "Today",
            EventStatus::Live => "Live now",
            EventStatus::Past => "Past",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display data for a single event.
///
/// `date` is a preformatted display string and is never parsed.
/// `attendees` is expected to stay within `capacity`, but nothing enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub image_url: String,
    pub status: EventStatus,
    pub capacity: u32,
    pub attendees: u32,
}
