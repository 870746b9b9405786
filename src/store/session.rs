use crate::api::Episode;
use crate::error::{PlayerError, Result};
use crate::store::PlaybackActions;
use rand::Rng;

/// Episode list, selection and transport flags for one listening session.
///
/// `current_index` is `None` when nothing is selected and otherwise always
/// points inside `episodes`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackSession {
    episodes: Vec<Episode>,
    current_index: Option<usize>,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
}

impl PlaybackSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.current_index.and_then(|idx| self.episodes.get(idx))
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// Play a single episode on its own.
    pub fn play(&mut self, episode: Episode) {
        self.episodes = vec![episode];
        self.current_index = Some(0);
        self.is_playing = true;
    }

    /// Replace the list and start playing the episode at `index`.
    pub fn play_list(&mut self, episodes: Vec<Episode>, index: usize) -> Result<()> {
        if episodes.is_empty() {
            return Err(PlayerError::EmptyEpisodeList);
        }
        if index >= episodes.len() {
            return Err(PlayerError::EpisodeIndexOutOfBounds {
                index,
                len: episodes.len(),
            });
        }
        self.episodes = episodes;
        self.current_index = Some(index);
        self.is_playing = true;
        Ok(())
    }

    /// Advance to the next episode, drawing from `rng` while shuffling.
    ///
    /// Shuffle never picks the episode that is already playing unless it is
    /// the only one in the list.
    pub fn play_next_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let Some(idx) = self.current_index else {
            return;
        };
        let len = self.episodes.len();

        if self.is_shuffling {
            if len > 1 {
                let mut next = rng.gen_range(0..len - 1);
                if next >= idx {
                    next += 1;
                }
                self.current_index = Some(next);
            }
        } else if idx + 1 < len {
            self.current_index = Some(idx + 1);
        }
    }
}

impl PlaybackActions for PlaybackSession {
    fn is_playing(&self) -> bool {
        self.is_playing
    }

    fn has_next(&self) -> bool {
        match self.current_index {
            Some(idx) => self.is_shuffling || idx + 1 < self.episodes.len(),
            None => false,
        }
    }

    fn has_previous(&self) -> bool {
        matches!(self.current_index, Some(idx) if idx > 0)
    }

    fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    fn set_playing_state(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    fn play_next(&mut self) {
        self.play_next_with(&mut rand::thread_rng());
    }

    fn play_previous(&mut self) {
        if let Some(idx) = self.current_index {
            if idx > 0 {
                self.current_index = Some(idx - 1);
            }
        }
    }

    fn clear_player_state(&mut self) {
        self.episodes.clear();
        self.current_index = None;
        self.is_playing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn episode(id: &str) -> Episode {
        Episode {
            id: id.to_string(),
            title: format!("Episode {id}"),
            members: "Host".to_string(),
            thumbnail: format!("/media/{id}.jpg"),
            duration: 125,
            url: format!("/media/{id}.mp3"),
        }
    }

    fn list(n: usize) -> Vec<Episode> {
        (0..n).map(|i| episode(&i.to_string())).collect()
    }

    #[test]
    fn empty_session_has_nothing_selected() {
        let session = PlaybackSession::new();
        assert!(session.current_episode().is_none());
        assert!(!session.has_next());
        assert!(!session.has_previous());
        assert!(!session.is_playing());
    }

    #[test]
    fn play_selects_a_single_episode() {
        let mut session = PlaybackSession::new();
        session.play(episode("solo"));
        assert_eq!(session.current_episode().map(|e| e.id.as_str()), Some("solo"));
        assert!(session.is_playing());
        assert!(!session.has_next());
        assert!(!session.has_previous());
    }

    #[test]
    fn play_list_rejects_bad_selection() {
        let mut session = PlaybackSession::new();
        assert!(matches!(
            session.play_list(Vec::new(), 0),
            Err(PlayerError::EmptyEpisodeList)
        ));
        assert!(matches!(
            session.play_list(list(2), 2),
            Err(PlayerError::EpisodeIndexOutOfBounds { index: 2, len: 2 })
        ));
        assert!(session.current_episode().is_none());
    }

    #[test]
    fn navigation_flags_follow_position() {
        let mut session = PlaybackSession::new();
        session.play_list(list(3), 0).unwrap();
        assert!(session.has_next());
        assert!(!session.has_previous());

        session.play_next();
        assert_eq!(session.current_index(), Some(1));
        assert!(session.has_next());
        assert!(session.has_previous());

        session.play_next();
        assert_eq!(session.current_index(), Some(2));
        assert!(!session.has_next());

        // At the end without shuffle, next is a no-op.
        session.play_next();
        assert_eq!(session.current_index(), Some(2));

        session.play_previous();
        assert_eq!(session.current_index(), Some(1));
    }

    #[test]
    fn play_previous_at_start_stays_put() {
        let mut session = PlaybackSession::new();
        session.play_list(list(2), 0).unwrap();
        session.play_previous();
        assert_eq!(session.current_index(), Some(0));
    }

    #[test]
    fn shuffle_always_has_next_and_moves_elsewhere() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = PlaybackSession::new();
        session.play_list(list(4), 3).unwrap();
        session.toggle_shuffle();
        assert!(session.has_next());

        for _ in 0..50 {
            let before = session.current_index();
            session.play_next_with(&mut rng);
            let after = session.current_index();
            assert_ne!(before, after);
            assert!(after.unwrap() < 4);
        }
    }

    #[test]
    fn shuffle_with_one_episode_keeps_it() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = PlaybackSession::new();
        session.play(episode("only"));
        session.toggle_shuffle();
        session.play_next_with(&mut rng);
        assert_eq!(session.current_index(), Some(0));
    }

    #[test]
    fn toggles_flip_flags() {
        let mut session = PlaybackSession::new();
        session.toggle_play();
        session.toggle_loop();
        session.toggle_shuffle();
        assert!(session.is_playing());
        assert!(session.is_looping());
        assert!(session.is_shuffling());

        session.set_playing_state(false);
        assert!(!session.is_playing());
    }

    #[test]
    fn clear_stops_and_deselects() {
        let mut session = PlaybackSession::new();
        session.play_list(list(3), 1).unwrap();
        session.toggle_loop();
        session.clear_player_state();

        assert!(session.episodes().is_empty());
        assert!(session.current_episode().is_none());
        assert!(!session.is_playing());
        // Loop and shuffle preferences survive a clear.
        assert!(session.is_looping());
    }
}
