use serde::{Deserialize, Serialize};

use crate::models::EventRecord;

// ============================================================================
// Event API Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEventsResponse {
    pub events: Vec<EventRecord>,
    pub total: usize,
}
