// Discord commands module.
// Each feature gets its own command file.

use crate::core::builds::BuildCommand;
use crate::core::moderation::CommandModerator;
use crate::infra::builds::OpggScraper;
use crate::infra::champions::DataDragonClient;
use std::sync::Arc;

pub mod build;

// Bot presence management
pub mod presence;

pub mod quit;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Shared state handed to every command and event.
pub struct Data {
    pub builds: Arc<BuildCommand<DataDragonClient, OpggScraper>>,
    pub moderator: Arc<CommandModerator>,
    pub prefix: char,
}
