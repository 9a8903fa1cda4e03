pub mod book;
pub mod interaction_event;
