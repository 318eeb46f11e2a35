// This module handles bot presence.
//
// Discord-layer glue only: we work with Discord SDK types (Context,
// ActivityData, OnlineStatus) and keep the logic short.

use poise::serenity_prelude as serenity;

/// Called once the bot is ready; advertises the build command in the member list.
pub fn on_ready(ctx: &serenity::Context, prefix: char) {
    let activity = serenity::ActivityData::playing(format!("{prefix}build <champion>"));
    ctx.set_presence(Some(activity), serenity::OnlineStatus::Online);
}
