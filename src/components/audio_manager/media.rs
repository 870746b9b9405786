/// Imperative surface of a media element.
///
/// All methods take `&self`: the element is a platform object and the
/// player only ever holds a handle to it.
pub trait MediaController {
    fn play(&self);
    fn pause(&self);
    fn is_paused(&self) -> bool;
    /// Move the playback position, in seconds. Out-of-range values are left
    /// for the element to clamp.
    fn seek(&self, position: f64);
    fn current_time(&self) -> f64;
    fn set_volume(&self, volume: f64);
}

/// Notifications coming back from the media element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Metadata for a new source finished loading
    MetadataLoaded,
    /// Playback position advanced, in seconds
    TimeUpdated(f64),
    /// Reached the end of the source
    Ended,
    /// Element started playing (our call, autoplay, or native controls)
    Played,
    /// Element paused (our call, end of media, or native controls)
    Paused,
}

/// Play/pause call issued to the element while reconciling with the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportCommand {
    Play,
    Pause,
}
