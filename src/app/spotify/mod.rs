use thiserror::Error;

pub mod client;
pub mod models;

pub use client::SpotifyClient;
pub use models::{PlayerState, Playlist, Token, Track, UserProfile};

/// Errors from the remote playback API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },
    #[error("token refresh failed with HTTP {0}")]
    TokenRefresh(u16),
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("malformed response from {endpoint}: {message}")]
    Malformed {
        endpoint: &'static str,
        message: String,
    },
}

/// Capability interface over the remote playback service.
///
/// The dashboard state machine only sees this trait; tests substitute a
/// scripted fake for the HTTP client.
pub trait PlaybackApi {
    async fn player_state(&self) -> Result<PlayerState, ApiError>;
    async fn playlists(&self) -> Result<Vec<Playlist>, ApiError>;
    async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Track>, ApiError>;
    async fn play(&self) -> Result<(), ApiError>;
    async fn pause(&self) -> Result<(), ApiError>;
    async fn set_volume(&self, percent: u8) -> Result<(), ApiError>;
    async fn play_track(&self, uri: &str) -> Result<(), ApiError>;
}
