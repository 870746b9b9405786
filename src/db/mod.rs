use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use crate::error::PlayerError;
#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;
#[cfg(target_arch = "wasm32")]
use gloo_storage::{errors::StorageError, LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "podcastr.player_settings";

const DEFAULT_VOLUME: f64 = 0.8;

/// Player settings stored in the browser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
    #[serde(default = "default_volume")]
    pub volume: f64,
}

fn default_autoplay() -> bool {
    true
}

fn default_volume() -> f64 {
    DEFAULT_VOLUME
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            volume: default_volume(),
        }
    }
}

impl PlayerSettings {
    /// Settings with the volume brought into `0.0..=1.0`.
    pub fn normalized(mut self) -> Self {
        self.volume = normalize_volume(self.volume);
        self
    }
}

/// Accept volumes saved as percentages as well as fractions.
pub fn normalize_volume(mut value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_VOLUME;
    }
    let mut passes = 0;
    while value > 1.0 && passes < 4 {
        value /= 100.0;
        passes += 1;
    }
    value.clamp(0.0, 1.0)
}

#[cfg(target_arch = "wasm32")]
pub fn load_settings() -> PlayerSettings {
    match LocalStorage::get::<PlayerSettings>(SETTINGS_KEY) {
        Ok(settings) => settings.normalized(),
        Err(StorageError::KeyNotFound(_)) => PlayerSettings::default(),
        Err(err) => {
            let err = PlayerError::Storage(err.to_string());
            warn!(%err, "ignoring stored player settings");
            PlayerSettings::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_settings() -> PlayerSettings {
    PlayerSettings::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: PlayerSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, PlayerSettings::default());

        let settings: PlayerSettings = serde_json::from_str(r#"{"autoplay": false}"#).unwrap();
        assert!(!settings.autoplay);
        assert_eq!(settings.volume, 0.8);
    }

    #[test]
    fn percentage_volumes_are_scaled_down() {
        assert_eq!(normalize_volume(80.0), 0.8);
        assert_eq!(normalize_volume(0.5), 0.5);
        assert_eq!(normalize_volume(-1.0), 0.0);
        assert_eq!(normalize_volume(f64::NAN), 0.8);
    }

    #[test]
    fn normalized_settings_keep_autoplay() {
        let settings = PlayerSettings {
            autoplay: false,
            volume: 50.0,
        }
        .normalized();
        assert!(!settings.autoplay);
        assert_eq!(settings.volume, 0.5);
    }
}
