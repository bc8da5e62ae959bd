// common helpers
pub mod config;
pub mod errors;
pub mod report;

// searches
pub mod stationary;
pub mod zeros;
pub mod classify;

// orchestration
pub mod range;
pub mod window;
