use crate::components::{Icon, IconKind};
use crate::store::{PlaybackActions, PlaybackStore};
use dioxus::prelude::*;

/// Shared shape of the five transport buttons.
#[component]
fn TransportButton(
    id: &'static str,
    icon: IconKind,
    enabled: bool,
    #[props(default)] active: bool,
    #[props(default)] primary: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let class = match (primary, active) {
        (true, _) => "play-button",
        (false, true) => "is-active",
        (false, false) => "",
    };

    rsx! {
        button {
            id: id,
            r#type: "button",
            class: class,
            title: icon.label(),
            disabled: !enabled,
            onclick: move |evt| onclick.call(evt),
            Icon { kind: icon, class: "icon".to_string() }
        }
    }
}

/// Shuffle button - highlighted while shuffling
#[component]
pub(super) fn ShuffleButton(store: PlaybackStore, enabled: bool, active: bool) -> Element {
    let mut store = store;
    rsx! {
        TransportButton {
            id: "shuffle-btn",
            icon: IconKind::Shuffle,
            enabled: enabled,
            active: active,
            onclick: move |_| store.toggle_shuffle(),
        }
    }
}

#[component]
pub(super) fn PrevButton(store: PlaybackStore, enabled: bool) -> Element {
    let mut store = store;
    rsx! {
        TransportButton {
            id: "prev-btn",
            icon: IconKind::Previous,
            enabled: enabled,
            onclick: move |_| store.play_previous(),
        }
    }
}

/// Play/Pause button - the icon shows what a click will do
#[component]
pub(super) fn PlayPauseButton(store: PlaybackStore, enabled: bool, icon: IconKind) -> Element {
    let mut store = store;
    rsx! {
        TransportButton {
            id: "play-pause-btn",
            icon: icon,
            enabled: enabled,
            primary: true,
            onclick: move |_| store.toggle_play(),
        }
    }
}

#[component]
pub(super) fn NextButton(store: PlaybackStore, enabled: bool) -> Element {
    let mut store = store;
    rsx! {
        TransportButton {
            id: "next-btn",
            icon: IconKind::Next,
            enabled: enabled,
            onclick: move |_| store.play_next(),
        }
    }
}

/// Repeat button - loops the current episode
#[component]
pub(super) fn RepeatButton(store: PlaybackStore, enabled: bool, active: bool) -> Element {
    let mut store = store;
    rsx! {
        TransportButton {
            id: "repeat-btn",
            icon: IconKind::Repeat,
            enabled: enabled,
            active: active,
            onclick: move |_| store.toggle_loop(),
        }
    }
}
