//! Bundled episode catalog.

use crate::api::models::Episode;
use crate::error::Result;
use serde::Deserialize;

const BUNDLED_CATALOG: &str = include_str!("../../assets/episodes.json");

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    episodes: Vec<Episode>,
}

/// Parse a catalog document of the form `{"episodes": [...]}`.
pub fn parse_catalog(json: &str) -> Result<Vec<Episode>> {
    let document: CatalogDocument = serde_json::from_str(json)?;
    Ok(document.episodes)
}

/// Episodes shipped with the app.
pub fn bundled_episodes() -> Result<Vec<Episode>> {
    parse_catalog(BUNDLED_CATALOG)
}
