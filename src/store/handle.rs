use crate::api::Episode;
use crate::error::Result;
use crate::store::{PlaybackActions, PlaybackSession};
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

/// Reactive handle to the playback session.
///
/// Cheap to copy; pass it to the components that need playback state
/// instead of reaching for it through context.
#[derive(Clone, Copy, PartialEq)]
pub struct PlaybackStore {
    session: Signal<PlaybackSession>,
}

impl PlaybackStore {
    pub fn new(session: Signal<PlaybackSession>) -> Self {
        Self { session }
    }

    /// Clone of the current session; subscribes the caller to changes.
    pub fn snapshot(&self) -> PlaybackSession {
        self.session.read().clone()
    }

    pub fn has_episode(&self) -> bool {
        self.session.read().current_episode().is_some()
    }

    pub fn play_list(&mut self, episodes: Vec<Episode>, index: usize) -> Result<()> {
        // Validate on a copy so a rejected selection does not notify subscribers.
        let mut next = PlaybackSession::clone(&self.session.peek());
        next.play_list(episodes, index)?;
        debug!(index, "playing from episode list");
        self.session.set(next);
        Ok(())
    }
}

impl PlaybackActions for PlaybackStore {
    fn is_playing(&self) -> bool {
        self.session.read().is_playing()
    }

    fn has_next(&self) -> bool {
        self.session.read().has_next()
    }

    fn has_previous(&self) -> bool {
        self.session.read().has_previous()
    }

    fn toggle_play(&mut self) {
        self.session.write().toggle_play();
    }

    fn toggle_loop(&mut self) {
        self.session.write().toggle_loop();
    }

    fn toggle_shuffle(&mut self) {
        self.session.write().toggle_shuffle();
    }

    fn set_playing_state(&mut self, playing: bool) {
        // Element events echo our own play/pause calls; only real changes notify.
        if self.session.peek().is_playing() != playing {
            self.session.write().set_playing_state(playing);
        }
    }

    fn play_next(&mut self) {
        self.session.write().play_next();
    }

    fn play_previous(&mut self) {
        self.session.write().play_previous();
    }

    fn clear_player_state(&mut self) {
        debug!("clearing player state");
        self.session.write().clear_player_state();
    }
}

/// Create a fresh playback store owned by the calling component.
pub fn use_playback_store() -> PlaybackStore {
    PlaybackStore::new(use_signal(PlaybackSession::new))
}
