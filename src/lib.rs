pub mod access;
pub mod configuration;
pub mod connectors;
pub mod errors;
pub mod models;
pub mod services;
pub mod telemetry;
