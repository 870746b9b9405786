//! Audio Manager - keeps the audio element in step with the playback store.
//! The element is driven through `MediaController`; the reactive wiring lives
//! in the player component and the rules live in `PlayerCore`.

mod media;
mod player_core;
mod web_audio;

pub use media::{MediaController, MediaEvent, TransportCommand};
pub use player_core::{reconcile_transport, EndedOutcome, PlayerCore};
pub use web_audio::{AudioHandle, AUDIO_ELEMENT_ID};
