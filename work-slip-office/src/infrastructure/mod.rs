pub mod config;
pub mod database;
mod repository;
mod service_provider;
pub mod telemetry;

pub use service_provider::ServiceProvider;
