// Build lookup: models, image decoding, the scraper port, presentation
// and the command flow that ties them together.

pub mod build_command;
pub mod build_models;
pub mod build_presenter;
pub mod build_source;
pub mod image_refs;

pub use build_command::{BuildCommand, ReplyChannel, ReplyError};
pub use build_models::{BuildData, BuildGroup, BuildGroupKind, BuildImage};
pub use build_presenter::BuildCard;
pub use build_source::{BuildError, BuildSource};
