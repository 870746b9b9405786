use super::media::{MediaController, MediaEvent, TransportCommand};
use crate::store::PlaybackActions;
use dioxus::logger::tracing::debug;

/// What the player did when an episode finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndedOutcome {
    Advanced,
    Cleared,
}

/// Player state that does not belong to the store: elapsed seconds of the
/// loaded episode and whether time updates are being followed yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerCore {
    progress: u32,
    tracking: bool,
}

impl PlayerCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whole seconds elapsed in the current episode.
    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Route an element notification to the matching handler.
    pub fn handle_event<M, S>(&mut self, event: MediaEvent, media: &M, store: &mut S)
    where
        M: MediaController + ?Sized,
        S: PlaybackActions + ?Sized,
    {
        match event {
            MediaEvent::MetadataLoaded => self.on_metadata_loaded(media, store.is_playing()),
            MediaEvent::TimeUpdated(position) => self.on_time_update(position),
            MediaEvent::Ended => {
                self.on_ended(store);
            }
            MediaEvent::Played => store.set_playing_state(true),
            MediaEvent::Paused => store.set_playing_state(false),
        }
    }

    /// A new source is ready: rewind, start following time updates and make
    /// sure a store that wants playback gets it even without autoplay.
    pub fn on_metadata_loaded<M>(&mut self, media: &M, should_play: bool)
    where
        M: MediaController + ?Sized,
    {
        media.seek(0.0);
        self.progress = 0;
        self.tracking = true;

        if should_play && media.is_paused() {
            debug!("starting playback after metadata load");
            media.play();
        }
    }

    pub fn on_time_update(&mut self, position: f64) {
        if !self.tracking || !position.is_finite() {
            return;
        }
        self.progress = position.max(0.0).floor() as u32;
    }

    /// Jump to `amount` seconds. Progress follows immediately rather than
    /// waiting for the next time update.
    pub fn seek<M>(&mut self, amount: u32, media: &M)
    where
        M: MediaController + ?Sized,
    {
        media.seek(f64::from(amount));
        self.progress = amount;
    }

    pub fn on_ended<S>(&self, store: &mut S) -> EndedOutcome
    where
        S: PlaybackActions + ?Sized,
    {
        if store.has_next() {
            debug!("episode ended, advancing");
            store.play_next();
            EndedOutcome::Advanced
        } else {
            debug!("episode ended, nothing queued");
            store.clear_player_state();
            EndedOutcome::Cleared
        }
    }

    /// Forget the unloaded episode's position.
    pub fn reset(&mut self) {
        self.progress = 0;
        self.tracking = false;
    }
}

/// Bring the element in line with the store's `is_playing` flag.
///
/// Issues a call only when the element disagrees, so element events that
/// echo back into the store cannot start a play/pause loop.
pub fn reconcile_transport<M>(should_play: bool, media: &M) -> Option<TransportCommand>
where
    M: MediaController + ?Sized,
{
    let paused = media.is_paused();
    let command = if should_play && paused {
        media.play();
        TransportCommand::Play
    } else if !should_play && !paused {
        media.pause();
        TransportCommand::Pause
    } else {
        return None;
    };
    debug!(?command, "reconciled audio element with store");
    Some(command)
}
