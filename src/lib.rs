pub mod dataset;
pub mod models;
pub mod query;
pub mod scoring;
pub mod system;
pub mod types;
