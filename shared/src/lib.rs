pub mod api;
pub mod models;

pub use api::ListEventsResponse;
pub use models::{EventRecord, EventStatus};
