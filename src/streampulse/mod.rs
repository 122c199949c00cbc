pub mod analytics;
pub mod config;
pub mod error;
pub mod generator;
pub mod kafka;
pub mod publisher;
pub mod records;
pub mod serialization;
pub mod shutdown;
pub mod subscriber;
