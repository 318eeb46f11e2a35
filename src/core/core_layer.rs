// The core module contains all business logic.
// Each feature gets its own submodule.

#[path = "champions/champion_catalog.rs"]
pub mod champions;

#[path = "builds/mod.rs"]
pub mod builds;

#[path = "thumbnails/thumbnail_resolver.rs"]
pub mod thumbnails;

#[path = "moderation/command_moderator.rs"]
pub mod moderation;
