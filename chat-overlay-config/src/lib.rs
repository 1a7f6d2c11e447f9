//! Configuration system for the chat-overlay plugin.
//!
//! This crate provides configuration loading, saving, and default values
//! for the overlay. It includes:
//!
//! - The persisted [`Config`] store and its YAML persistence
//! - User-defined chat [`Tab`]s and their filtering rules
//! - Chat type, chat source and input channel enumerations
//! - Packed colour helpers

pub mod config;
pub mod defaults;
pub mod error;
pub mod tab;
mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use tab::Tab;

pub use types::{
    ChatSource, ChatType, InputChannel, rgb_to_rgba, rgba_components, rgba_to_rgb,
};
