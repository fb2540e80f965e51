//! Utility modules shared across the application.

pub mod logger;
