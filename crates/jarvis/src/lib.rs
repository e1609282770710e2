pub mod agent;
pub mod connectors;
pub mod errors;
pub mod models;
pub mod providers;
