// Scrapes recommended builds from op.gg champion pages.
//
// Each data group is pulled from a fixed position in a CSS match set. This
// is tied to the page layout: if op.gg reorders its images the slices below
// silently pick the wrong ones, and only a page with too few images fails.
// Every positional rule lives in one `extract_*` function so a layout change
// means editing one place. Prefer structural selectors if the page ever
// exposes stable identifiers.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use scraper::{ElementRef, Html, Selector};
use std::ops::Range;
use std::time::Duration;

use crate::core::builds::image_refs::{item_image, skill_image, spell_image, ImageRefError};
use crate::core::builds::{
    BuildData, BuildError, BuildGroup, BuildGroupKind, BuildImage, BuildSource,
};
use crate::core::champions::ChampionId;

const SPELL_IMAGES: &str = ".champion-overview__table--summonerspell td ul li img";
const STATS_LIST_IMAGES: &str = ".champion-stats__list__item img";
const FIRST_ROW_IMAGES: &str = ".champion-overview__row--first td ul li img";

const SPELLS: Range<usize> = 0..2;
const SKILLS: Range<usize> = 4..7;
const STARTING_ITEMS: Range<usize> = 7..9;
const CORE_ITEMS: Range<usize> = 11..14;
const BOOTS: Range<usize> = 7..8;

/// A layout problem found while extracting one group.
#[derive(Debug)]
pub struct PageError {
    pub group: BuildGroupKind,
    pub reason: String,
}

impl PageError {
    fn new(group: BuildGroupKind, reason: impl Into<String>) -> Self {
        Self {
            group,
            reason: reason.into(),
        }
    }
}

pub struct OpggScraper {
    client: Client,
    base_url: String,
    host: String,
}

impl OpggScraper {
    /// `base_url` is the site root including its scheme, e.g. `https://na.op.gg`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "User-Agent",
            HeaderValue::from_static("Mozilla/5.0 (compatible; ChampionBuildBot/0.1)"),
        );
        headers.insert("Accept-Language", HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        let host = match base_url.split_once("://") {
            Some((_, host)) => host.to_string(),
            None => base_url.clone(),
        };

        Ok(Self {
            client,
            base_url,
            host,
        })
    }

    pub fn champion_url(&self, champion: &ChampionId) -> String {
        format!("{}/champion/{}", self.base_url, champion)
    }
}

#[async_trait]
impl BuildSource for OpggScraper {
    fn source_name(&self) -> &str {
        &self.host
    }

    async fn fetch_build(&self, champion: &ChampionId) -> Result<BuildData, BuildError> {
        let url = self.champion_url(champion);
        let unavailable = |reason: String| BuildError::UpstreamUnavailable {
            url: url.clone(),
            reason,
        };

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| unavailable(e.to_string()))?;

        // Html is not Send, so parsing stays in a sync call with no await inside.
        build_from_response(&url, champion, status, &body)
    }
}

/// Maps a fetched page onto a build: non-success statuses are upstream
/// failures, layout problems become `MalformedPage` for this url and champion.
fn build_from_response(
    url: &str,
    champion: &ChampionId,
    status: StatusCode,
    body: &str,
) -> Result<BuildData, BuildError> {
    if !status.is_success() {
        return Err(BuildError::UpstreamUnavailable {
            url: url.to_string(),
            reason: format!("status {status}"),
        });
    }

    extract_build(body).map_err(|e| BuildError::MalformedPage {
        url: url.to_string(),
        champion: champion.to_string(),
        group: e.group,
        reason: e.reason,
    })
}

/// Parses a champion page and extracts all five groups.
pub fn extract_build(html: &str) -> Result<BuildData, PageError> {
    let document = Html::parse_document(html);

    Ok(BuildData {
        spells: extract_spells(&document)?,
        skills: extract_skills(&document)?,
        starting_items: extract_starting_items(&document)?,
        core_items: extract_core_items(&document)?,
        boots: extract_boots(&document)?,
    })
}

/// First two images of the summoner spell table.
fn extract_spells(document: &Html) -> Result<BuildGroup, PageError> {
    extract_group(document, BuildGroupKind::Spells, SPELL_IMAGES, SPELLS, spell_image)
}

/// Stats list images 4..7, in skill priority order.
fn extract_skills(document: &Html) -> Result<BuildGroup, PageError> {
    extract_group(document, BuildGroupKind::Skills, STATS_LIST_IMAGES, SKILLS, skill_image)
}

/// Stats list images 7..9.
fn extract_starting_items(document: &Html) -> Result<BuildGroup, PageError> {
    extract_group(
        document,
        BuildGroupKind::StartingItems,
        STATS_LIST_IMAGES,
        STARTING_ITEMS,
        item_image,
    )
}

/// Stats list images 11..14.
fn extract_core_items(document: &Html) -> Result<BuildGroup, PageError> {
    extract_group(
        document,
        BuildGroupKind::CoreItems,
        STATS_LIST_IMAGES,
        CORE_ITEMS,
        item_image,
    )
}

/// The 8th image of the first overview row.
fn extract_boots(document: &Html) -> Result<BuildGroup, PageError> {
    extract_group(document, BuildGroupKind::Boots, FIRST_ROW_IMAGES, BOOTS, item_image)
}

fn extract_group(
    document: &Html,
    group: BuildGroupKind,
    css: &str,
    range: Range<usize>,
    decode: fn(&str) -> Result<BuildImage, ImageRefError>,
) -> Result<BuildGroup, PageError> {
    let selector = Selector::parse(css)
        .map_err(|e| PageError::new(group, format!("invalid selector `{css}`: {e}")))?;

    let images: Vec<ElementRef> = document.select(&selector).collect();
    tracing::debug!(group = %group, matches = images.len(), "Matched build images");

    let slice = images.get(range.clone()).ok_or_else(|| {
        PageError::new(
            group,
            format!(
                "expected at least {} images for `{css}`, found {}",
                range.end,
                images.len()
            ),
        )
    })?;

    slice
        .iter()
        .map(|image| {
            let src = attribute(image, "src").ok_or_else(|| {
                PageError::new(group, "image without a `src` attribute")
            })?;
            decode(src).map_err(|e| PageError::new(group, e.to_string()))
        })
        .collect()
}

/// Typed attribute lookup; `None` when the node doesn't carry it.
fn attribute<'a>(node: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    node.value().attr(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CDN: &str = "//opgg-static.akamaized.net/images/lol";

    fn img(path: &str) -> String {
        format!(r#"<img src="{CDN}/{path}.png?image=q_auto,w_42&amp;v=1">"#)
    }

    fn spells_table(spells: &[&str]) -> String {
        let items: String = spells
            .iter()
            .map(|s| format!("<li>{}</li>", img(&format!("spell/Summoner{s}"))))
            .collect();
        format!(
            r#"<table class="champion-overview__table champion-overview__table--summonerspell">
                <tbody><tr><td><ul>{items}</ul></td></tr></tbody>
            </table>"#
        )
    }

    /// Stats list with filler images around the positional slots.
    fn stats_list(skills: &[&str]) -> String {
        let mut paths: Vec<String> = (0..4).map(|i| format!("spell/Passive{i}")).collect();
        paths.extend(skills.iter().map(|s| format!("spell/Jinx{s}")));
        paths.extend(["item/1055", "item/2003"].map(String::from));
        paths.extend(["item/3340", "item/3363"].map(String::from));
        paths.extend(["item/3031", "item/3046", "item/3094"].map(String::from));
        paths.push("item/3363".to_string());

        let items: String = paths
            .iter()
            .map(|p| format!(r#"<li class="champion-stats__list__item">{}</li>"#, img(p)))
            .collect();
        format!(r#"<ul class="champion-stats__list">{items}</ul>"#)
    }

    fn first_row(count: usize) -> String {
        let items: String = (0..count)
            .map(|i| format!("<li>{}</li>", img(&format!("item/300{i}"))))
            .collect();
        format!(
            r#"<table><tbody><tr class="champion-overview__row champion-overview__row--first">
                <td><ul>{items}</ul></td>
            </tr></tbody></table>"#
        )
    }

    fn page(spells: &[&str], skills: &[&str], boots_row: usize) -> String {
        format!(
            "<html><body>{}{}{}</body></html>",
            spells_table(spells),
            stats_list(skills),
            first_row(boots_row)
        )
    }

    #[test]
    fn test_extracts_full_build() {
        let build = extract_build(&page(&["Flash", "Heal"], &["Q", "W", "E"], 8)).unwrap();

        assert_eq!(build.spells.keys().collect::<Vec<_>>(), vec!["flash", "heal"]);
        assert_eq!(
            build.spells.get("flash"),
            Some("opgg-static.akamaized.net/images/lol/spell/SummonerFlash.png")
        );
        assert_eq!(
            build.starting_items.keys().collect::<Vec<_>>(),
            vec!["1055", "2003"]
        );
        assert_eq!(
            build.core_items.keys().collect::<Vec<_>>(),
            vec!["3031", "3046", "3094"]
        );
        assert_eq!(build.boots.keys().collect::<Vec<_>>(), vec!["3007"]);
    }

    #[test]
    fn test_exactly_two_spells() {
        let build = extract_build(&page(&["Flash", "Ignite", "Teleport"], &["Q", "W", "E"], 8))
            .unwrap();
        assert_eq!(build.spells.keys().count(), 2);
    }

    #[test]
    fn test_one_spell_is_malformed() {
        let err = extract_build(&page(&["Flash"], &["Q", "W", "E"], 8)).unwrap_err();
        assert_eq!(err.group, BuildGroupKind::Spells);
    }

    #[test]
    fn test_skill_order_is_preserved() {
        let build = extract_build(&page(&["Flash", "Heal"], &["Q", "E", "W"], 8)).unwrap();
        assert_eq!(build.skills.keys().collect::<Vec<_>>(), vec!["Q", "E", "W"]);
    }

    #[test]
    fn test_short_first_row_fails_on_boots() {
        let err = extract_build(&page(&["Flash", "Heal"], &["Q", "W", "E"], 7)).unwrap_err();
        assert_eq!(err.group, BuildGroupKind::Boots);
        assert!(err.reason.contains("found 7"));
    }

    #[test]
    fn test_empty_page_is_malformed() {
        let err = extract_build("<html><body><p>Access denied</p></body></html>").unwrap_err();
        assert_eq!(err.group, BuildGroupKind::Spells);
    }

    #[test]
    fn test_image_without_src_fails_closed() {
        let html = page(&["Flash", "Heal"], &["Q", "W", "E"], 8).replacen(
            &format!(r#"<img src="{CDN}/spell/SummonerFlash.png?image=q_auto,w_42&amp;v=1">"#),
            r#"<img data-src="lazy">"#,
            1,
        );
        let err = extract_build(&html).unwrap_err();
        assert_eq!(err.group, BuildGroupKind::Spells);
        assert!(err.reason.contains("src"));
    }

    #[test]
    fn test_champion_url() {
        let scraper = OpggScraper::new("https://na.op.gg/", Duration::from_secs(5)).unwrap();
        assert_eq!(
            scraper.champion_url(&ChampionId::from_catalog_name("missfortune")),
            "https://na.op.gg/champion/missfortune"
        );
        assert_eq!(scraper.source_name(), "na.op.gg");
    }

    #[test]
    fn test_error_status_is_upstream_unavailable() {
        let ahri = ChampionId::from_catalog_name("Ahri");
        let url = "http://127.0.0.1:9/champion/ahri";

        let err = build_from_response(url, &ahri, StatusCode::SERVICE_UNAVAILABLE, "").unwrap_err();
        match err {
            BuildError::UpstreamUnavailable { url: failed, reason } => {
                assert_eq!(failed, url);
                assert!(reason.contains("503"), "unexpected reason: {reason}");
            }
            other => panic!("expected UpstreamUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_page_carries_url_and_champion() {
        let ahri = ChampionId::from_catalog_name("Ahri");
        let url = "http://127.0.0.1:9/champion/ahri";

        let err = build_from_response(url, &ahri, StatusCode::OK, "<html></html>").unwrap_err();
        match err {
            BuildError::MalformedPage {
                url: failed,
                champion,
                group,
                ..
            } => {
                assert_eq!(failed, url);
                assert_eq!(champion, "ahri");
                assert_eq!(group, BuildGroupKind::Spells);
            }
            other => panic!("expected MalformedPage, got {other:?}"),
        }
    }

    #[test]
    fn test_ok_response_yields_build() {
        let jinx = ChampionId::from_catalog_name("Jinx");
        let body = page(&["Flash", "Heal"], &["Q", "W", "E"], 8);

        let build = build_from_response("http://localhost/champion/jinx", &jinx, StatusCode::OK, &body)
            .unwrap();
        assert_eq!(build.skills.keys().collect::<Vec<_>>(), vec!["Q", "W", "E"]);
    }
}
