use crate::core::builds::BuildCard;
use poise::serenity_prelude as serenity;

/// Maps the platform-agnostic build card onto a Discord embed.
pub fn build_embed(card: &BuildCard) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::new()
        .title(&card.title)
        .color(card.color)
        .thumbnail(&card.thumbnail)
        .timestamp(serenity::Timestamp::now());

    for field in &card.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }

    embed.footer(serenity::CreateEmbedFooter::new(&card.footer))
}
