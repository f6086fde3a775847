pub mod access;
pub mod rating;
pub mod schedule;

pub use access::AccessView;
pub use schedule::{Phase, Schedule};
