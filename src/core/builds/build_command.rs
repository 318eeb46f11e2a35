// The build command flow, independent of the chat platform.
//
// Validating -> Fetching -> Presenting, or Validating -> Rejecting.
// Every call sends exactly one reply through the injected ReplyChannel:
// a build card, a rejection, or an error message.

use super::build_presenter::{patch_label, render_build, BuildCard};
use super::build_source::{BuildError, BuildSource};
use crate::core::champions::{
    champion_argument, CatalogError, ChampionCatalog, ChampionDataSource, ChampionId,
};
use crate::core::thumbnails::ThumbnailResolver;
use async_trait::async_trait;

pub type ReplyError = Box<dyn std::error::Error + Send + Sync>;

/// Where the command's single reply goes.
#[async_trait]
pub trait ReplyChannel: Send + Sync {
    async fn send_card(&self, card: BuildCard) -> Result<(), ReplyError>;
    async fn send_text(&self, text: String) -> Result<(), ReplyError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    Delivered { champion: ChampionId, patch: String },
    Rejected { candidate: String },
    Failed,
}

pub struct BuildCommand<C: ChampionDataSource, B: BuildSource> {
    catalog: ChampionCatalog<C>,
    source: B,
    thumbnails: ThumbnailResolver,
    prefix: char,
}

impl<C: ChampionDataSource, B: BuildSource> BuildCommand<C, B> {
    pub fn new(
        catalog: ChampionCatalog<C>,
        source: B,
        thumbnails: ThumbnailResolver,
        prefix: char,
    ) -> Self {
        Self {
            catalog,
            source,
            thumbnails,
            prefix,
        }
    }

    /// Runs the command for the raw user argument and sends the reply.
    ///
    /// Only a failure to deliver the reply itself is returned as an error;
    /// upstream failures become an error message to the user.
    pub async fn handle(
        &self,
        raw_argument: &str,
        reply: &dyn ReplyChannel,
    ) -> Result<BuildOutcome, ReplyError> {
        let candidate = champion_argument(raw_argument);
        if candidate.is_empty() {
            reply
                .send_text(format!(
                    "❌ Tell me which champion, e.g. `{}build jinx`.",
                    self.prefix
                ))
                .await?;
            return Ok(BuildOutcome::Rejected {
                candidate: String::new(),
            });
        }

        // Validating
        let (version, roster) = match self.load_roster().await {
            Ok(loaded) => loaded,
            Err(e) => {
                match &e {
                    CatalogError::MalformedResponse(_) => {
                        tracing::warn!(champion = %candidate, "Champion catalog lookup failed: {}", e)
                    }
                    CatalogError::UpstreamUnavailable(_) => {
                        tracing::error!(champion = %candidate, "Champion catalog lookup failed: {}", e)
                    }
                }
                reply
                    .send_text(
                        "⚠️ Couldn't reach the champion data service. Try again later."
                            .to_string(),
                    )
                    .await?;
                return Ok(BuildOutcome::Failed);
            }
        };

        let Some(display_name) = roster.get(&candidate) else {
            tracing::debug!(champion = %candidate, "Rejected unknown champion");
            reply
                .send_text(format!("❌ `{candidate}` is not a valid champion."))
                .await?;
            return Ok(BuildOutcome::Rejected {
                candidate: candidate.to_string(),
            });
        };

        // Fetching
        let thumbnail = self.thumbnails.resolve(&candidate);
        let build = match self.source.fetch_build(&candidate).await {
            Ok(build) => build,
            Err(e) => {
                match &e {
                    BuildError::MalformedPage {
                        url,
                        champion,
                        group,
                        reason,
                    } => tracing::warn!(
                        url = %url,
                        champion = %champion,
                        group = %group,
                        "Build page layout not recognized: {}",
                        reason
                    ),
                    BuildError::UpstreamUnavailable { url, reason } => tracing::error!(
                        url = %url,
                        champion = %candidate,
                        "Build source unavailable: {}",
                        reason
                    ),
                }
                reply
                    .send_text(format!(
                        "⚠️ Couldn't load the build for {display_name} right now."
                    ))
                    .await?;
                return Ok(BuildOutcome::Failed);
            }
        };

        // Presenting
        let patch = patch_label(&version);
        let card = render_build(
            &build,
            display_name,
            &thumbnail,
            &patch,
            self.source.source_name(),
        );
        reply.send_card(card).await?;

        tracing::info!(champion = %candidate, patch = %patch, "Delivered build");
        Ok(BuildOutcome::Delivered {
            champion: candidate,
            patch,
        })
    }

    async fn load_roster(
        &self,
    ) -> Result<(String, std::collections::BTreeMap<ChampionId, String>), CatalogError> {
        let version = self.catalog.current_version().await?;
        let roster = self.catalog.champion_roster(&version).await?;
        Ok((version, roster))
    }
}
