use crate::components::audio_manager::{
    reconcile_transport, AudioHandle, MediaController, MediaEvent, PlayerCore, AUDIO_ELEMENT_ID,
};
use crate::components::{Icon, IconKind};
use crate::db::load_settings;
use crate::store::{PlaybackActions, PlaybackStore};
use dioxus::prelude::*;

mod controls;
mod view_model;

use controls::{NextButton, PlayPauseButton, PrevButton, RepeatButton, ShuffleButton};
pub use view_model::{PlayerViewModel, SliderModel};

/// Now-playing panel: episode details, scrub bar, transport controls and
/// the audio element they drive.
#[component]
pub fn Player(store: PlaybackStore) -> Element {
    let settings = use_hook(load_settings);
    let mut core = use_signal(PlayerCore::new);
    let mut media_handle = use_signal(|| None::<AudioHandle>);

    let is_playing = use_memo(move || store.is_playing());
    let has_episode = use_memo(move || store.has_episode());

    // Store -> element. Runs when the flag flips or a new element binds.
    use_effect(move || {
        let should_play = is_playing();
        if let Some(media) = media_handle.read().as_ref() {
            reconcile_transport(should_play, media);
        }
    });

    // The element goes away with the episode; so does its handle.
    use_effect(move || {
        if !has_episode() {
            if media_handle.peek().is_some() {
                media_handle.set(None);
            }
            core.write().reset();
        }
    });

    // Element -> store.
    let mut dispatch = move |event: MediaEvent| {
        let Some(media) = media_handle.peek().clone() else {
            return;
        };
        let mut store = store;
        core.write().handle_event(event, &media, &mut store);
    };

    let volume = settings.volume;
    let on_mounted = move |_: Event<MountedData>| {
        let handle = AudioHandle::bind();
        if let Some(media) = handle.as_ref() {
            media.set_volume(volume);
        }
        media_handle.set(handle);
    };

    let on_time_update = move |_: Event<MediaData>| {
        let position = media_handle.peek().as_ref().map(|media| media.current_time());
        if let Some(position) = position {
            dispatch(MediaEvent::TimeUpdated(position));
        }
    };

    let on_seek = move |e: Event<FormData>| {
        let Ok(amount) = e.value().parse::<f64>() else {
            return;
        };
        if let Some(media) = media_handle.peek().clone() {
            core.write().seek(amount.max(0.0) as u32, &media);
        }
    };

    let session = store.snapshot();
    let vm = PlayerViewModel::new(&session, core.read().progress());

    rsx! {
        div { class: "player-container",
            header {
                Icon { kind: IconKind::Headphones, class: "icon".to_string() }
                strong { "Now playing" }
            }

            if let Some(episode) = vm.episode.as_ref() {
                div { class: "current-episode",
                    img {
                        src: "{episode.thumbnail}",
                        alt: "{episode.title}",
                        width: "592",
                        height: "592",
                    }
                    strong { "{episode.title}" }
                    span { "{episode.members}" }
                }
            } else {
                div { class: "empty-player",
                    strong { "Select a podcast to listen to" }
                }
            }

            footer { class: if vm.episode.is_some() { "player-footer" } else { "player-footer empty" },
                div { class: "progress",
                    span { "{vm.elapsed_label}" }
                    div { class: "slider",
                        if let Some(slider) = vm.slider {
                            input {
                                r#type: "range",
                                min: "0",
                                max: "{slider.max}",
                                value: "{slider.value}",
                                oninput: on_seek,
                            }
                        } else {
                            div { class: "empty-slider" }
                        }
                    }
                    span { "{vm.duration_label}" }
                }

                if let Some(episode) = vm.episode.as_ref() {
                    audio {
                        id: AUDIO_ELEMENT_ID,
                        src: "{episode.url}",
                        autoplay: settings.autoplay,
                        r#loop: vm.loop_active,
                        onmounted: on_mounted,
                        onloadedmetadata: move |_| dispatch(MediaEvent::MetadataLoaded),
                        ontimeupdate: on_time_update,
                        onended: move |_| dispatch(MediaEvent::Ended),
                        onplay: move |_| dispatch(MediaEvent::Played),
                        onpause: move |_| dispatch(MediaEvent::Paused),
                    }
                }

                div { class: "buttons",
                    ShuffleButton {
                        store: store,
                        enabled: vm.shuffle_enabled,
                        active: vm.shuffle_active,
                    }
                    PrevButton { store: store, enabled: vm.previous_enabled }
                    PlayPauseButton {
                        store: store,
                        enabled: vm.play_enabled,
                        icon: vm.play_icon,
                    }
                    NextButton { store: store, enabled: vm.next_enabled }
                    RepeatButton {
                        store: store,
                        enabled: vm.loop_enabled,
                        active: vm.loop_active,
                    }
                }
            }
        }
    }
}
