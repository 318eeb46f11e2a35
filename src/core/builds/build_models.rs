use std::fmt;

/// One scraped image: the short descriptor it stands for (spell name, skill
/// letter or item id) and the image URL with the leading `//` trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildImage {
    pub key: String,
    pub url: String,
}

impl BuildImage {
    pub fn new(key: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            url: url.into(),
        }
    }

    /// Absolute link to the image. Stored URLs are protocol-relative with the
    /// slashes already removed, so the scheme is added back here.
    pub fn link(&self) -> String {
        format!("https://{}", self.url)
    }
}

/// An insertion-ordered map from descriptor to image.
///
/// Order matters: for skills it is the levelling priority. Inserting a key
/// that already exists replaces its URL but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildGroup {
    entries: Vec<BuildImage>,
}

impl BuildGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, image: BuildImage) {
        match self.entries.iter_mut().find(|e| e.key == image.key) {
            Some(existing) => existing.url = image.url,
            None => self.entries.push(image),
        }
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.url.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuildImage> {
        self.entries.iter()
    }
}

impl FromIterator<BuildImage> for BuildGroup {
    fn from_iter<I: IntoIterator<Item = BuildImage>>(iter: I) -> Self {
        let mut group = BuildGroup::new();
        for image in iter {
            group.insert(image);
        }
        group
    }
}

/// The five data groups making up a recommended build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildGroupKind {
    Spells,
    Skills,
    StartingItems,
    CoreItems,
    Boots,
}

impl BuildGroupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildGroupKind::Spells => "spells",
            BuildGroupKind::Skills => "skills",
            BuildGroupKind::StartingItems => "starting_items",
            BuildGroupKind::CoreItems => "core_items",
            BuildGroupKind::Boots => "boots",
        }
    }
}

impl fmt::Display for BuildGroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete build for one champion. All groups are always present; a
/// scrape that cannot fill one fails as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildData {
    pub spells: BuildGroup,
    pub skills: BuildGroup,
    pub starting_items: BuildGroup,
    pub core_items: BuildGroup,
    pub boots: BuildGroup,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_preserves_insertion_order() {
        let group: BuildGroup = ["Q", "E", "W"]
            .into_iter()
            .map(|k| BuildImage::new(k, format!("cdn/{k}.png")))
            .collect();

        assert_eq!(group.keys().collect::<Vec<_>>(), vec!["Q", "E", "W"]);
    }

    #[test]
    fn test_duplicate_key_keeps_position() {
        let mut group = BuildGroup::new();
        group.insert(BuildImage::new("2003", "a.png"));
        group.insert(BuildImage::new("1055", "b.png"));
        group.insert(BuildImage::new("2003", "c.png"));

        assert_eq!(group.keys().count(), 2);
        assert_eq!(group.keys().collect::<Vec<_>>(), vec!["2003", "1055"]);
        assert_eq!(group.get("2003"), Some("c.png"));
    }

    #[test]
    fn test_link_adds_scheme() {
        let image = BuildImage::new("flash", "opgg-static.akamaized.net/images/lol/spell/SummonerFlash.png");
        assert_eq!(
            image.link(),
            "https://opgg-static.akamaized.net/images/lol/spell/SummonerFlash.png"
        );
    }
}
