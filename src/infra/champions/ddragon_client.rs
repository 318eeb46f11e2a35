use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::core::champions::{CatalogError, ChampionDataSource, ChampionEntry};

/// Data Dragon client for the current version and the champion list.
pub struct DataDragonClient {
    client: Client,
    base_url: String,
    realm: String,
}

impl DataDragonClient {
    pub fn new(
        api_key: &str,
        base_url: impl Into<String>,
        realm: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "User-Agent",
            HeaderValue::from_static("ChampionBuildBot/0.1"),
        );
        headers.insert(
            "X-Riot-Token",
            HeaderValue::from_str(api_key)
                .map_err(|e| CatalogError::UpstreamUnavailable(e.to_string()))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::UpstreamUnavailable(e.to_string()))?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            realm: realm.into(),
        })
    }

    async fn get_text(&self, url: &str) -> Result<String, CatalogError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::UpstreamUnavailable(format!("{url}: {e}")))?;

        check_status(url, resp.status())?;

        resp.text()
            .await
            .map_err(|e| CatalogError::UpstreamUnavailable(format!("{url}: {e}")))
    }
}

#[async_trait]
impl ChampionDataSource for DataDragonClient {
    async fn current_version(&self) -> Result<String, CatalogError> {
        let url = format!("{}/realms/{}.json", self.base_url, self.realm);
        let body = self.get_text(&url).await?;
        parse_realm_version(&body)
    }

    async fn champions(&self, version: &str) -> Result<Vec<ChampionEntry>, CatalogError> {
        let url = format!(
            "{}/cdn/{}/data/en_US/champion.json",
            self.base_url, version
        );
        let body = self.get_text(&url).await?;
        parse_champion_list(&body)
    }
}

// ============================================================================
// PAYLOADS
// ============================================================================

#[derive(Deserialize)]
struct ApiRealm {
    v: Option<String>,
}

#[derive(Deserialize)]
struct ApiChampionList {
    data: Option<BTreeMap<String, ApiChampion>>,
}

#[derive(Deserialize)]
struct ApiChampion {
    id: Option<String>,
    name: Option<String>,
}

/// Any non-2xx answer means the catalog cannot be consulted right now.
fn check_status(url: &str, status: StatusCode) -> Result<(), CatalogError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(CatalogError::UpstreamUnavailable(format!("{url} returned {status}")))
    }
}

fn parse_realm_version(body: &str) -> Result<String, CatalogError> {
    let realm: ApiRealm = serde_json::from_str(body)
        .map_err(|e| CatalogError::MalformedResponse(format!("realm payload: {e}")))?;

    realm
        .v
        .ok_or_else(|| CatalogError::MalformedResponse("realm payload has no `v` field".to_string()))
}

fn parse_champion_list(body: &str) -> Result<Vec<ChampionEntry>, CatalogError> {
    let list: ApiChampionList = serde_json::from_str(body)
        .map_err(|e| CatalogError::MalformedResponse(format!("champion payload: {e}")))?;

    let data = list.data.ok_or_else(|| {
        CatalogError::MalformedResponse("champion payload has no `data` field".to_string())
    })?;

    Ok(data
        .into_iter()
        .map(|(key, champion)| {
            let name = champion
                .name
                .or(champion.id)
                .unwrap_or_else(|| key.clone());
            ChampionEntry { key, name }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_is_upstream_unavailable() {
        let url = "http://127.0.0.1:9/realms/na.json";

        for status in [StatusCode::SERVICE_UNAVAILABLE, StatusCode::NOT_FOUND] {
            match check_status(url, status) {
                Err(CatalogError::UpstreamUnavailable(reason)) => {
                    assert!(reason.starts_with(url), "unexpected reason: {reason}");
                    assert!(reason.contains(status.as_str()), "unexpected reason: {reason}");
                }
                other => panic!("expected UpstreamUnavailable for {status}, got {other:?}"),
            }
        }
        assert!(check_status(url, StatusCode::OK).is_ok());
    }

    #[test]
    fn test_parse_realm_version() {
        let body = r#"{"n":{"item":"10.10.1","champion":"10.10.1"},"v":"10.10.1","l":"en_US","cdn":"https://ddragon.leagueoflegends.com/cdn"}"#;
        assert_eq!(parse_realm_version(body).unwrap(), "10.10.1");
    }

    #[test]
    fn test_realm_without_version_is_malformed() {
        let body = r#"{"l":"en_US"}"#;
        assert!(matches!(
            parse_realm_version(body),
            Err(CatalogError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_champion_list() {
        let body = r#"{
            "type": "champion",
            "version": "10.10.1",
            "data": {
                "MonkeyKing": {"id": "MonkeyKing", "key": "62", "name": "Wukong"},
                "MissFortune": {"id": "MissFortune", "key": "21", "name": "Miss Fortune"},
                "Ahri": {"id": "Ahri", "key": "103"}
            }
        }"#;
        let entries = parse_champion_list(body).unwrap();

        assert_eq!(entries.len(), 3);
        assert!(entries.contains(&ChampionEntry {
            key: "MonkeyKing".to_string(),
            name: "Wukong".to_string(),
        }));
        assert!(entries.contains(&ChampionEntry {
            key: "Ahri".to_string(),
            name: "Ahri".to_string(),
        }));
    }

    #[test]
    fn test_champion_list_without_data_is_malformed() {
        assert!(matches!(
            parse_champion_list(r#"{"type":"champion"}"#),
            Err(CatalogError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_champion_list("<html>"),
            Err(CatalogError::MalformedResponse(_))
        ));
    }
}
