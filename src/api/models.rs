use serde::{Deserialize, Serialize};

/// A single podcast episode as supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub members: String,
    #[serde(default)]
    pub thumbnail: String,
    /// Length in whole seconds
    #[serde(default)]
    pub duration: u32,
    pub url: String,
}

/// Format a second count as `MM:SS`.
///
/// Minutes are not folded into hours, so an hour-long episode reads `60:00`.
pub fn format_duration(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_pads_both_fields() {
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(9), "00:09");
        assert_eq!(format_duration(125), "02:05");
        assert_eq!(format_duration(600), "10:00");
    }

    #[test]
    fn format_duration_keeps_counting_minutes_past_an_hour() {
        assert_eq!(format_duration(3725), "62:05");
    }

    #[test]
    fn episode_optional_fields_default() {
        let episode: Episode =
            serde_json::from_str(r#"{"id": "a", "title": "A", "url": "/a.mp3"}"#).unwrap();
        assert_eq!(episode.duration, 0);
        assert!(episode.members.is_empty());
        assert!(episode.thumbnail.is_empty());
    }
}
