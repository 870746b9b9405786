//! Everything the player renders, derived from the session and progress.

use crate::api::models::{format_duration, Episode};
use crate::components::IconKind;
use crate::store::{PlaybackActions, PlaybackSession};

/// Scrub bar bounds; only present while an episode is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderModel {
    pub max: u32,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerViewModel {
    pub episode: Option<Episode>,
    pub elapsed_label: String,
    pub duration_label: String,
    pub slider: Option<SliderModel>,
    pub shuffle_enabled: bool,
    pub previous_enabled: bool,
    pub play_enabled: bool,
    pub next_enabled: bool,
    pub loop_enabled: bool,
    pub shuffle_active: bool,
    pub loop_active: bool,
    pub play_icon: IconKind,
}

impl PlayerViewModel {
    pub fn new(session: &PlaybackSession, progress: u32) -> Self {
        let episode = session.current_episode().cloned();
        let has_episode = episode.is_some();
        // Stale progress from a cleared episode must not leak into the empty player.
        let progress = if has_episode { progress } else { 0 };
        let duration = episode.as_ref().map(|e| e.duration).unwrap_or(0);

        Self {
            elapsed_label: format_duration(progress),
            duration_label: format_duration(duration),
            slider: episode.as_ref().map(|e| SliderModel {
                max: e.duration,
                value: progress,
            }),
            shuffle_enabled: has_episode && session.episodes().len() > 1,
            previous_enabled: has_episode && session.has_previous(),
            play_enabled: has_episode,
            next_enabled: has_episode && session.has_next(),
            loop_enabled: has_episode,
            shuffle_active: session.is_shuffling(),
            loop_active: session.is_looping(),
            play_icon: if session.is_playing() {
                IconKind::Pause
            } else {
                IconKind::Play
            },
            episode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episodes(n: usize, duration: u32) -> Vec<Episode> {
        (0..n)
            .map(|i| Episode {
                id: format!("ep-{i}"),
                title: format!("Episode {i}"),
                members: "Diego e Richard".to_string(),
                thumbnail: format!("/media/{i}.jpg"),
                duration,
                url: format!("/media/{i}.mp3"),
            })
            .collect()
    }

    #[test]
    fn empty_player_is_zeroed_and_disabled() {
        let session = PlaybackSession::new();
        let vm = PlayerViewModel::new(&session, 93);

        assert!(vm.episode.is_none());
        assert_eq!(vm.elapsed_label, "00:00");
        assert_eq!(vm.duration_label, "00:00");
        assert!(vm.slider.is_none());
        assert!(!vm.shuffle_enabled);
        assert!(!vm.previous_enabled);
        assert!(!vm.play_enabled);
        assert!(!vm.next_enabled);
        assert!(!vm.loop_enabled);
    }

    #[test]
    fn labels_and_slider_follow_episode() {
        let mut session = PlaybackSession::new();
        session.play_list(episodes(2, 125), 0).unwrap();
        let vm = PlayerViewModel::new(&session, 0);

        assert_eq!(vm.elapsed_label, "00:00");
        assert_eq!(vm.duration_label, "02:05");
        assert_eq!(vm.slider, Some(SliderModel { max: 125, value: 0 }));

        let vm = PlayerViewModel::new(&session, 61);
        assert_eq!(vm.elapsed_label, "01:01");
        assert_eq!(vm.slider.map(|s| s.value), Some(61));
    }

    #[test]
    fn play_icon_tracks_is_playing() {
        let mut session = PlaybackSession::new();
        session.play_list(episodes(1, 60), 0).unwrap();
        assert_eq!(PlayerViewModel::new(&session, 0).play_icon, IconKind::Pause);

        session.toggle_play();
        assert_eq!(PlayerViewModel::new(&session, 0).play_icon, IconKind::Play);
    }

    #[test]
    fn navigation_buttons_follow_store_flags() {
        let mut session = PlaybackSession::new();
        session.play_list(episodes(3, 60), 0).unwrap();
        let vm = PlayerViewModel::new(&session, 0);
        assert!(!vm.previous_enabled);
        assert!(vm.next_enabled);
        assert!(vm.play_enabled);
        assert!(vm.loop_enabled);

        session.play_list(episodes(3, 60), 2).unwrap();
        let vm = PlayerViewModel::new(&session, 0);
        assert!(vm.previous_enabled);
        assert!(!vm.next_enabled);
    }

    #[test]
    fn single_episode_disables_shuffle_even_when_shuffling() {
        let mut session = PlaybackSession::new();
        session.toggle_shuffle();
        session.play_list(episodes(1, 60), 0).unwrap();
        let vm = PlayerViewModel::new(&session, 0);

        assert!(!vm.shuffle_enabled);
        assert!(vm.shuffle_active);
    }

    #[test]
    fn shuffle_enabled_with_several_episodes() {
        let mut session = PlaybackSession::new();
        session.play_list(episodes(2, 60), 0).unwrap();
        assert!(PlayerViewModel::new(&session, 0).shuffle_enabled);
    }

    #[test]
    fn loop_highlight_follows_flag() {
        let mut session = PlaybackSession::new();
        session.play_list(episodes(1, 60), 0).unwrap();
        assert!(!PlayerViewModel::new(&session, 0).loop_active);
        session.toggle_loop();
        assert!(PlayerViewModel::new(&session, 0).loop_active);
    }
}
