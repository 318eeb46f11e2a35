// The champion catalog knows which champions exist in the current patch.
// It owns name normalization so every layer agrees on what a champion
// identifier looks like. The actual data comes from a ChampionDataSource,
// which the infra layer implements on top of Data Dragon.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use thiserror::Error;

/// The catalog key Riot uses for Wukong.
const SIMIAN_CATALOG_KEY: &str = "monkeyking";
/// The name players actually type.
const SIMIAN_ALIAS: &str = "wukong";

// ============================================================================
// DOMAIN MODELS
// ============================================================================

/// A normalized, lowercase champion key such as `missfortune` or `wukong`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChampionId(String);

impl ChampionId {
    /// Normalizes a catalog name into an identifier.
    pub fn from_catalog_name(name: &str) -> Self {
        Self(normalize_champion_name(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ChampionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry from the remote champion list: the catalog key (e.g. `MonkeyKing`)
/// and the human display name (e.g. `Wukong`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionEntry {
    pub key: String,
    pub name: String,
}

/// Normalizes a champion name the way the catalog does: strip spaces and
/// apostrophes, lowercase, then apply the Wukong alias.
///
/// Normalizing an already-normalized identifier is a no-op.
pub fn normalize_champion_name(name: &str) -> String {
    let formatted: String = name
        .chars()
        .filter(|c| *c != ' ' && *c != '\'')
        .collect::<String>()
        .to_lowercase();

    if formatted == SIMIAN_CATALOG_KEY {
        SIMIAN_ALIAS.to_string()
    } else {
        formatted
    }
}

/// Turns the free-text command argument into a candidate identifier.
///
/// Users type `-build miss fortune` or `-build Kai'Sa`; the tokens are
/// concatenated, apostrophes stripped and the result lowercased.
pub fn champion_argument(raw: &str) -> ChampionId {
    let joined: String = raw.split_whitespace().collect();
    ChampionId(joined.replace('\'', "").to_lowercase())
}

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("champion data API unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("malformed champion data response: {0}")]
    MalformedResponse(String),
}

// ============================================================================
// DATA SOURCE TRAIT (PORT)
// ============================================================================

/// Remote source of version and champion data.
#[async_trait]
pub trait ChampionDataSource: Send + Sync {
    /// Current version string for the configured region, e.g. `10.10.3216176`.
    async fn current_version(&self) -> Result<String, CatalogError>;

    /// Every champion in the given version.
    async fn champions(&self, version: &str) -> Result<Vec<ChampionEntry>, CatalogError>;
}

// ============================================================================
// SERVICE
// ============================================================================

pub struct ChampionCatalog<S: ChampionDataSource> {
    source: S,
}

impl<S: ChampionDataSource> ChampionCatalog<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn current_version(&self) -> Result<String, CatalogError> {
        let version = self.source.current_version().await?;
        if version.trim().is_empty() {
            return Err(CatalogError::MalformedResponse(
                "version field is empty".to_string(),
            ));
        }
        Ok(version)
    }

    /// Maps every normalized identifier to the champion's display name.
    pub async fn champion_roster(
        &self,
        version: &str,
    ) -> Result<BTreeMap<ChampionId, String>, CatalogError> {
        let entries = self.source.champions(version).await?;

        let roster: BTreeMap<ChampionId, String> = entries
            .into_iter()
            .map(|entry| (ChampionId::from_catalog_name(&entry.key), entry.name))
            .collect();

        tracing::debug!(version, champions = roster.len(), "Loaded champion roster");
        Ok(roster)
    }

    /// The set of valid identifiers for a version: exactly the key set of
    /// [`Self::champion_roster`]. The build command validates against the
    /// roster directly because it also needs the display name.
    #[allow(dead_code)]
    pub async fn champion_identifiers(
        &self,
        version: &str,
    ) -> Result<HashSet<ChampionId>, CatalogError> {
        Ok(self.champion_roster(version).await?.into_keys().collect())
    }
}
