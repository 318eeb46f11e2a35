use super::build_models::{BuildData, BuildGroupKind};
use crate::core::champions::ChampionId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("build page unavailable at {url}: {reason}")]
    UpstreamUnavailable { url: String, reason: String },

    #[error("unexpected page layout at {url} for {champion} ({group}): {reason}")]
    MalformedPage {
        url: String,
        champion: String,
        group: BuildGroupKind,
        reason: String,
    },
}

/// Anything that can produce a recommended build for a champion.
#[async_trait]
pub trait BuildSource: Send + Sync {
    /// Host name shown to users as the data source.
    fn source_name(&self) -> &str;

    async fn fetch_build(&self, champion: &ChampionId) -> Result<BuildData, BuildError>;
}
