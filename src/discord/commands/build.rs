// The build command. Thin on purpose: the flow lives in core::builds, this
// file only adapts poise's reply API to the ReplyChannel port.

use crate::core::builds::{BuildCard, ReplyChannel, ReplyError};
use crate::discord::build_embed::build_embed;
use crate::discord::{Context, Error};
use async_trait::async_trait;

/// Show the recommended build for a champion.
#[poise::command(prefix_command, slash_command)]
pub async fn build(
    ctx: Context<'_>,
    #[description = "Champion name, e.g. Miss Fortune"]
    #[rest]
    champion: String,
) -> Result<(), Error> {
    // Scraping can outlast the 3 second interaction deadline.
    ctx.defer().await?;

    let reply = CommandReply { ctx };
    let outcome = ctx.data().builds.handle(&champion, &reply).await?;

    tracing::debug!(?outcome, author = %ctx.author().name, "Build command finished");
    Ok(())
}

struct CommandReply<'a> {
    ctx: Context<'a>,
}

#[async_trait]
impl<'a> ReplyChannel for CommandReply<'a> {
    async fn send_card(&self, card: BuildCard) -> Result<(), ReplyError> {
        self.ctx
            .send(poise::CreateReply::default().embed(build_embed(&card)))
            .await?;
        Ok(())
    }

    async fn send_text(&self, text: String) -> Result<(), ReplyError> {
        self.ctx.say(text).await?;
        Ok(())
    }
}
