pub mod event;
pub mod event_participant;
pub mod feedback;
pub mod user;
