//! Error types for the player crate

use thiserror::Error;

/// Errors raised outside the player view itself.
///
/// The view never surfaces these; they come from loading the episode
/// catalog, selecting episodes in the store, and reading settings.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Episode catalog could not be parsed
    #[error("Invalid episode catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    /// Tried to start a playlist with no episodes in it
    #[error("Episode list is empty")]
    EmptyEpisodeList,

    /// Requested episode does not exist in the list
    #[error("Episode index {index} out of bounds for list of {len}")]
    EpisodeIndexOutOfBounds { index: usize, len: usize },

    /// Browser storage failure
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
