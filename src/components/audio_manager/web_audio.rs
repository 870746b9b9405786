use super::media::MediaController;

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;
#[cfg(target_arch = "wasm32")]
use dioxus::prelude::spawn;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

/// DOM id of the audio element rendered by the player.
pub const AUDIO_ELEMENT_ID: &str = "podcastr-audio";

/// Handle to the player's `<audio>` element.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, PartialEq)]
pub struct AudioHandle {
    element: HtmlAudioElement,
}

#[cfg(target_arch = "wasm32")]
impl AudioHandle {
    /// Look up the rendered audio element. `None` while the player shows no
    /// episode, since the element is only rendered alongside one.
    pub fn bind() -> Option<Self> {
        let document = window()?.document()?;
        let element = document
            .get_element_by_id(AUDIO_ELEMENT_ID)?
            .dyn_into::<HtmlAudioElement>()
            .ok()?;
        Some(Self { element })
    }
}

#[cfg(target_arch = "wasm32")]
impl MediaController for AudioHandle {
    fn play(&self) {
        // play() resolves once playback starts; autoplay policy may reject it.
        if let Ok(promise) = self.element.play() {
            spawn(async move {
                if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    warn!(?err, "audio element refused to play");
                }
            });
        }
    }

    fn pause(&self) {
        if let Err(err) = self.element.pause() {
            warn!(?err, "failed to pause audio element");
        }
    }

    fn is_paused(&self) -> bool {
        self.element.paused()
    }

    fn seek(&self, position: f64) {
        self.element.set_current_time(position);
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn set_volume(&self, volume: f64) {
        self.element.set_volume(volume);
    }
}

/// Off the web there is no audio element to bind to.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, PartialEq)]
pub struct AudioHandle;

#[cfg(not(target_arch = "wasm32"))]
impl AudioHandle {
    pub fn bind() -> Option<Self> {
        None
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl MediaController for AudioHandle {
    fn play(&self) {}

    fn pause(&self) {}

    fn is_paused(&self) -> bool {
        true
    }

    fn seek(&self, _position: f64) {}

    fn current_time(&self) -> f64 {
        0.0
    }

    fn set_volume(&self, _volume: f64) {}
}
