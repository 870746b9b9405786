//! Playback session state shared by the player and the episode list.
//!
//! `PlaybackSession` holds the plain state and its rules; `PlaybackStore`
//! is the reactive handle components receive as a prop.

mod handle;
mod session;

pub use handle::{use_playback_store, PlaybackStore};
pub use session::PlaybackSession;

/// What the player view reads from and asks of the playback store.
pub trait PlaybackActions {
    fn is_playing(&self) -> bool;
    fn has_next(&self) -> bool;
    fn has_previous(&self) -> bool;

    fn toggle_play(&mut self);
    fn toggle_loop(&mut self);
    fn toggle_shuffle(&mut self);
    fn set_playing_state(&mut self, playing: bool);
    fn play_next(&mut self);
    fn play_previous(&mut self);
    fn clear_player_state(&mut self);
}
