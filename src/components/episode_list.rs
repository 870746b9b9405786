use crate::api::models::{format_duration, Episode};
use crate::components::{Icon, IconKind};
use crate::store::PlaybackStore;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

/// Catalog listing; picking an episode queues the whole list from there.
#[component]
pub fn EpisodeList(
    store: PlaybackStore,
    episodes: Vec<Episode>,
    #[props(!optional)] error: Option<String>,
) -> Element {
    let current_id = store.snapshot().current_episode().map(|e| e.id.clone());

    rsx! {
        section { class: "episode-list",
            h2 { "Latest episodes" }

            if let Some(message) = error.as_ref() {
                p { class: "catalog-error", "Could not load episodes: {message}" }
            }

            for (index, episode) in episodes.iter().enumerate() {
                div { key: "{episode.id}", class: "episode-row",
                    img { src: "{episode.thumbnail}", alt: "{episode.title}" }
                    div { class: "details",
                        strong { "{episode.title}" }
                        p { "{episode.members}" }
                        span { "{format_duration(episode.duration)}" }
                    }
                    button {
                        r#type: "button",
                        title: "Play episode",
                        disabled: current_id.as_deref() == Some(episode.id.as_str()),
                        onclick: {
                            let episodes = episodes.clone();
                            let mut store = store;
                            move |_| {
                                if let Err(err) = store.play_list(episodes.clone(), index) {
                                    warn!(%err, "could not start episode");
                                }
                            }
                        },
                        Icon { kind: IconKind::Play, class: "icon".to_string() }
                    }
                }
            }
        }
    }
}
