pub mod config;
pub mod error;
pub mod hiring;
pub mod telemetry;
