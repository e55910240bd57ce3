pub mod playlists;
pub mod status;
pub mod tracks;

pub use playlists::render_playlists;
pub use status::render_status;
pub use tracks::render_tracks;
