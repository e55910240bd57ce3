use std::time::{Duration, Instant};

use serde::Deserialize;

/// A playlist owned or followed by the current user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub id: String,
    pub name: String,
}

/// A playable track inside a playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub uri: String,
    pub name: String,
}

/// Snapshot of the remote player. The default value (paused, volume 0)
/// stands in when no device is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub playing: bool,
    pub volume: u8,
}

/// The authenticated user, fetched once after login.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: String,
}

/// In-memory OAuth token. Never persisted.
#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: Instant,
}

impl Token {
    /// Build a token from a token-endpoint response. Spotify may omit the
    /// refresh token on refresh grants; the previous one is kept then.
    pub(crate) fn from_response(response: TokenResponse, previous_refresh: Option<String>) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token.or(previous_refresh),
            expires_at: Instant::now() + Duration::from_secs(response.expires_in),
        }
    }
}

// Wire DTOs below; the rest of the crate only sees the types above.

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub expires_in: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

// An absent page is an empty page, whatever the item type is.
impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistDto {
    pub id: String,
    pub name: String,
}

impl From<PlaylistDto> for Playlist {
    fn from(dto: PlaylistDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}

/// One entry of a playlist's items page. `track` is null for entries
/// whose track was removed or is otherwise unavailable.
#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistItemDto {
    #[serde(default)]
    pub track: Option<TrackDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrackDto {
    pub uri: String,
    pub name: String,
}

impl From<TrackDto> for Track {
    fn from(dto: TrackDto) -> Self {
        Self {
            uri: dto.uri,
            name: dto.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayerStateDto {
    #[serde(default)]
    pub is_playing: bool,
    #[serde(default)]
    pub device: Option<DeviceDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeviceDto {
    #[serde(default)]
    pub volume_percent: Option<u8>,
}

impl From<PlayerStateDto> for PlayerState {
    fn from(dto: PlayerStateDto) -> Self {
        Self {
            playing: dto.is_playing,
            volume: dto
                .device
                .and_then(|d| d.volume_percent)
                .unwrap_or(0)
                .min(100),
        }
    }
}
