pub mod events;
pub mod home;
pub mod not_found;
