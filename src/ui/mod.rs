pub mod events;
pub mod setup;
