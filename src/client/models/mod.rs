pub mod analysis;
pub mod app_state;
pub mod messages;
