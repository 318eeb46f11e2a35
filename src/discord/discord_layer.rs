// Discord layer - commands and event handlers.

#[path = "commands/command_catalog.rs"]
pub mod commands;

#[path = "builds/build_embed.rs"]
pub mod build_embed;

#[path = "moderation/command_cleanup.rs"]
pub mod moderation;

// Re-export command types for convenience
pub use commands::{Context, Data, Error};
