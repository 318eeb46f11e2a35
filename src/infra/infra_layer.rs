// The infra module contains implementations of core traits.
// Each feature implementation goes in its own submodule.

#[path = "champions/ddragon_client.rs"]
pub mod champions;

#[path = "builds/opgg_scraper.rs"]
pub mod builds;
