//! The components module contains all shared components for our app.

mod app;
pub mod audio_manager;
mod episode_list;
mod icons;
mod player;

pub use app::*;
pub use episode_list::*;
pub use icons::*;
pub use player::*;
