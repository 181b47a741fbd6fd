// Service exports
pub mod tracker;

pub use tracker::{ApplicationTracker, TrackerError};
