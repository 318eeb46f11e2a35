// Maps champion identifiers to portrait image URLs.
//
// Image file names use the champion's catalog key (`MissFortune.png`,
// `MonkeyKing.png`). For most champions title-casing the identifier gives
// that key; the table below covers the ones where it does not.

use crate::core::champions::ChampionId;

/// Identifiers whose image name cannot be recovered by title-casing.
const IMAGE_NAME_EXCEPTIONS: &[(&str, &str)] = &[
    ("aurelionsol", "AurelionSol"),
    ("drmundo", "DrMundo"),
    ("jarvan", "JarvanIV"),
    ("jarvaniv", "JarvanIV"),
    ("kogmaw", "KogMaw"),
    ("ksante", "KSante"),
    ("leesin", "LeeSin"),
    ("masteryi", "MasterYi"),
    ("missfortune", "MissFortune"),
    ("wukong", "MonkeyKing"),
    ("reksai", "RekSai"),
    ("tahmkench", "TahmKench"),
    ("twistedfate", "TwistedFate"),
    ("xinzhao", "XinZhao"),
];

pub struct ThumbnailResolver {
    base_url: String,
}

impl ThumbnailResolver {
    /// `base_url` is the directory holding `{Name}.png` images, without a
    /// trailing slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Never fails and never touches the network; the URL is not checked.
    pub fn resolve(&self, champion: &ChampionId) -> String {
        format!("{}/{}.png", self.base_url, image_name(champion.as_str()))
    }
}

fn image_name(identifier: &str) -> String {
    IMAGE_NAME_EXCEPTIONS
        .iter()
        .find(|(id, _)| *id == identifier)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| title_case(identifier))
}

/// Uppercases every letter that follows a non-letter (or starts the string)
/// and lowercases the rest.
fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut at_word_start = true;

    for c in value.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = true;
        }
    }

    result
}
