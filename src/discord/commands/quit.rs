use crate::discord::{Context, Error};
use std::time::Duration;

/// Log the bot out.
#[poise::command(prefix_command, rename = "q", owners_only, hide_in_help)]
pub async fn quit(ctx: Context<'_>) -> Result<(), Error> {
    tracing::info!(author = %ctx.author().name, "Shutdown requested");

    // Give the moderator a moment to clean up the `q` message.
    tokio::time::sleep(Duration::from_secs(1)).await;
    ctx.framework().shard_manager().shutdown_all().await;

    Ok(())
}
