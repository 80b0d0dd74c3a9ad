//! Configuration and shared data types

pub mod config;
pub mod models;

pub use config::{AppConfig, ListenerConfig, ListenerConfigBuilder};
