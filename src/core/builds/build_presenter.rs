// Turns a scraped build into a platform-agnostic card.
// The Discord layer maps BuildCard onto an embed; nothing here knows about
// serenity.

use super::build_models::{BuildData, BuildGroup};

/// Red accent for build cards.
pub const BUILD_CARD_COLOR: u32 = 0xff0000;

/// Shown in place of an empty group; Discord rejects blank field values.
const EMPTY_GROUP: &str = "None";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl CardField {
    fn new(name: &str, value: String, inline: bool) -> Self {
        Self {
            name: name.to_string(),
            value: if value.is_empty() {
                EMPTY_GROUP.to_string()
            } else {
                value
            },
            inline,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCard {
    pub title: String,
    pub color: u32,
    pub thumbnail: String,
    pub fields: Vec<CardField>,
    pub footer: String,
}

/// `10.10.3216176` becomes `10.10`. A version without a minor part is used as is.
pub fn patch_label(version: &str) -> String {
    let mut parts = version.split('.');
    match (parts.next(), parts.next()) {
        (Some(major), Some(minor)) => format!("{major}.{minor}"),
        _ => version.to_string(),
    }
}

pub fn render_build(
    build: &BuildData,
    champion_name: &str,
    thumbnail_url: &str,
    patch: &str,
    source_name: &str,
) -> BuildCard {
    let spells = build
        .spells
        .iter()
        .map(|spell| format!("[{}]({})", capitalize(&spell.key), spell.link()))
        .collect::<Vec<_>>()
        .join(" + ");

    let skills = build.skills.keys().collect::<Vec<_>>().join(" > ");

    BuildCard {
        title: format!("{champion_name} Build For Patch {patch}"),
        color: BUILD_CARD_COLOR,
        thumbnail: thumbnail_url.to_string(),
        fields: vec![
            CardField::new("Summoner Spells", spells, true),
            CardField::new("Skill Priority", skills, true),
            CardField::new("Starting Items", item_links(&build.starting_items, ", "), false),
            CardField::new("Core Items", item_links(&build.core_items, " → "), false),
            CardField::new("Boots", item_links(&build.boots, ", "), true),
        ],
        footer: format!("Data from {source_name}"),
    }
}

fn item_links(group: &BuildGroup, separator: &str) -> String {
    group
        .iter()
        .map(|item| format!("[{}]({})", item.key, item.link()))
        .collect::<Vec<_>>()
        .join(separator)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
