// Decoding of scraped image `src` attributes into build entries.
//
// The stats site serves protocol-relative URLs such as
// `//opgg-static.akamaized.net/images/lol/item/1055.png?image=q_auto`.
// The descriptor is sliced out from between a marker and the `.png`
// extension, and the stored URL is the source with its first two characters
// dropped, cut just after the extension.

use super::build_models::BuildImage;
use thiserror::Error;

const EXTENSION: &str = ".png";
const SPELL_MARKER: &str = "Summoner";
const ITEM_MARKER: &str = "item/";
/// Length of the `//` prefix on protocol-relative sources.
const PREFIX_LEN: usize = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageRefError {
    #[error("marker `{marker}` not found in image source `{src}`")]
    MissingMarker { marker: &'static str, src: String },

    #[error("no descriptor between markers in image source `{src}`")]
    EmptyDescriptor { src: String },
}

fn find_marker(src: &str, marker: &'static str) -> Result<usize, ImageRefError> {
    src.find(marker).ok_or_else(|| ImageRefError::MissingMarker {
        marker,
        src: src.to_string(),
    })
}

/// Slices `src[start..end]`, failing on an empty or inverted range.
fn descriptor(src: &str, start: usize, end: usize) -> Result<&str, ImageRefError> {
    match src.get(start..end) {
        Some(slice) if !slice.is_empty() => Ok(slice),
        _ => Err(ImageRefError::EmptyDescriptor {
            src: src.to_string(),
        }),
    }
}

/// `//host/path/file.png?query` becomes `host/path/file.png`.
pub fn trimmed_image_url(src: &str) -> Result<String, ImageRefError> {
    let extension = find_marker(src, EXTENSION)?;
    src.get(PREFIX_LEN..extension + EXTENSION.len())
        .map(str::to_string)
        .ok_or_else(|| ImageRefError::EmptyDescriptor {
            src: src.to_string(),
        })
}

/// `.../spell/SummonerFlash.png` decodes to `flash`.
pub fn spell_image(src: &str) -> Result<BuildImage, ImageRefError> {
    let name_index = find_marker(src, SPELL_MARKER)?;
    let extension = find_marker(src, EXTENSION)?;
    let name = descriptor(src, name_index + SPELL_MARKER.len(), extension)?;
    Ok(BuildImage::new(name.to_lowercase(), trimmed_image_url(src)?))
}

/// `.../spell/JinxQ.png` decodes to `Q`: the character right before the extension.
pub fn skill_image(src: &str) -> Result<BuildImage, ImageRefError> {
    let extension = find_marker(src, EXTENSION)?;
    let letter = src[..extension]
        .chars()
        .last()
        .ok_or_else(|| ImageRefError::EmptyDescriptor {
            src: src.to_string(),
        })?;
    Ok(BuildImage::new(letter.to_string(), trimmed_image_url(src)?))
}

/// `.../item/1055.png` decodes to `1055`.
pub fn item_image(src: &str) -> Result<BuildImage, ImageRefError> {
    let start = find_marker(src, ITEM_MARKER)? + ITEM_MARKER.len();
    let extension = find_marker(src, EXTENSION)?;
    let item_id = descriptor(src, start, extension)?;
    Ok(BuildImage::new(item_id, trimmed_image_url(src)?))
}
