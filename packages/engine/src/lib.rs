pub mod access;
pub mod analytics;
pub mod clock;
pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod events;
pub mod feedback;
pub mod models;
pub mod participation;
pub mod seed;
pub mod telemetry;
pub mod users;

pub use error::EngineError;
pub use feedback::FeedbackResult;
pub use participation::RegistrationResult;
