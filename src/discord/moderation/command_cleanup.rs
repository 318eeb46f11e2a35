// Discord-side command cleanup - translates the moderator's decision into
// a message deletion.

use crate::core::moderation::{Author, CommandModerator};
use poise::serenity_prelude as serenity;

/// Deletes the message if it starts with the command prefix.
///
/// Only guild messages are considered; in DMs the bot can't delete the
/// other side's messages.
pub async fn handle_message(
    ctx: &serenity::Context,
    msg: &serenity::Message,
    moderator: &CommandModerator,
) {
    if msg.guild_id.is_none() {
        return;
    }

    let bot_id = ctx.cache.current_user().id;
    let author = if msg.author.id == bot_id {
        Author::OwnBot
    } else {
        Author::Other
    };

    if !moderator.should_delete(&msg.content, author) {
        return;
    }

    if let Err(e) = msg.delete(&ctx.http).await {
        tracing::warn!(
            message_id = msg.id.get(),
            channel_id = msg.channel_id.get(),
            "Failed to delete command message: {}",
            e
        );
    }
}
