mod element;
mod player;
mod playlist;
mod rodio_element;
mod types;

pub use element::{MediaElement, MediaError, MediaEvent};
pub use player::{AudioPlayer, PlayerOptions};
pub use playlist::build_playlist;
pub use rodio_element::RodioElement;
pub use types::{Phase, PlaybackState, Track, Volume};
