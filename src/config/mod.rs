//! Application configuration.

pub mod settings;

pub use settings::{GenerationDefaults, Settings};
