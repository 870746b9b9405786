use crate::api::{bundled_episodes, Episode};
use crate::components::{EpisodeList, Player};
use crate::store::use_playback_store;
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

/// Page layout: episode list on the left, player on the right.
#[component]
pub fn AppShell() -> Element {
    let store = use_playback_store();
    let (episodes, catalog_error) = use_hook(load_catalog);

    rsx! {
        div { class: "app-shell",
            main { class: "app-main",
                EpisodeList { store: store, episodes: episodes, error: catalog_error }
            }
            Player { store: store }
        }
    }
}

fn load_catalog() -> (Vec<Episode>, Option<String>) {
    match bundled_episodes() {
        Ok(episodes) => {
            info!(count = episodes.len(), "loaded episode catalog");
            (episodes, None)
        }
        Err(err) => {
            warn!(%err, "failed to load episode catalog");
            (Vec::new(), Some(err.to_string()))
        }
    }
}
