//! Podcastr - podcast player widget for the web.
//!
//! The player view reads a [`store::PlaybackStore`] handed to it as a prop
//! and drives the page's audio element through
//! [`components::audio_manager::MediaController`].

pub mod api;
pub mod components;
pub mod db;
pub mod error;
pub mod store;

pub use error::{PlayerError, Result};
