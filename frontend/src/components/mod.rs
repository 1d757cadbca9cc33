pub mod button;
pub mod event_card;
pub mod events_grid;
pub mod events_section;
pub mod header;
pub mod skeleton;
