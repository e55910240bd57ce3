use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::app::spotify::models::{Page, PlayerStateDto, PlaylistDto, PlaylistItemDto};
use crate::app::spotify::{ApiError, PlaybackApi, PlayerState, Playlist, Token, Track, UserProfile};

const API_BASE: &str = "https://api.spotify.com/v1";
pub(crate) const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Refresh the access token when it is this close to expiry.
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// HTTP client for the Spotify Web API, holding the in-memory token.
///
/// The token sits behind a mutex so the refresh check can run from `&self`
/// receivers; there is only ever one caller (the event loop).
pub struct SpotifyClient {
    http: reqwest::Client,
    client_id: String,
    token: Mutex<Token>,
}

impl SpotifyClient {
    pub fn new(client_id: String, token: Token) -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id,
            token: Mutex::new(token),
        }
    }

    /// Current access token, refreshed first if it is about to expire.
    async fn access_token(&self) -> Result<String, ApiError> {
        let mut token = self.token.lock().await;

        if token.expires_at <= Instant::now() + REFRESH_MARGIN
            && let Some(refresh) = token.refresh_token.clone()
        {
            let response = self
                .http
                .post(TOKEN_URL)
                .form(&[
                    ("grant_type", "refresh_token"),
                    ("refresh_token", refresh.as_str()),
                    ("client_id", self.client_id.as_str()),
                ])
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(ApiError::TokenRefresh(response.status().as_u16()));
            }

            *token = Token::from_response(response.json().await?, Some(refresh));
            log::debug!("Refreshed access token");
        }

        Ok(token.access_token.clone())
    }

    /// GET an endpoint and decode its JSON body. HTTP 204 maps to `None`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: String,
    ) -> Result<Option<T>, ApiError> {
        let token = self.access_token().await?;
        let response = self.http.get(url).bearer_auth(token).send().await?;

        if response.status() == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint,
                status: response.status().as_u16(),
            });
        }

        Ok(Some(response.json().await?))
    }

    /// PUT a player command. Spotify answers 200 or 204 on success.
    async fn put_command(
        &self,
        endpoint: &'static str,
        url: String,
        body: Option<serde_json::Value>,
    ) -> Result<(), ApiError> {
        let token = self.access_token().await?;
        let mut request = self.http.put(url).bearer_auth(token);
        request = match body {
            Some(json) => request.json(&json),
            None => request.header(reqwest::header::CONTENT_LENGTH, 0),
        };

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint,
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }

    /// Fetch the authenticated user's profile.
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.get_json("user profile", format!("{API_BASE}/me"))
            .await?
            .ok_or(ApiError::Malformed {
                endpoint: "user profile",
                message: "empty response".to_string(),
            })
    }
}

impl PlaybackApi for SpotifyClient {
    async fn player_state(&self) -> Result<PlayerState, ApiError> {
        // 204 means no active device; fall back to the zero-value state.
        let dto: Option<PlayerStateDto> = self
            .get_json("player state", format!("{API_BASE}/me/player"))
            .await?;
        Ok(dto.map(PlayerState::from).unwrap_or_default())
    }

    async fn playlists(&self) -> Result<Vec<Playlist>, ApiError> {
        let page: Option<Page<PlaylistDto>> = self
            .get_json("playlists", format!("{API_BASE}/me/playlists?limit=50"))
            .await?;
        Ok(page
            .unwrap_or_default()
            .items
            .into_iter()
            .map(Playlist::from)
            .collect())
    }

    async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Track>, ApiError> {
        let page: Option<Page<PlaylistItemDto>> = self
            .get_json(
                "playlist tracks",
                format!("{API_BASE}/playlists/{playlist_id}/tracks?limit=100"),
            )
            .await?;
        Ok(page
            .unwrap_or_default()
            .items
            .into_iter()
            .filter_map(|item| item.track.map(Track::from))
            .collect())
    }

    async fn play(&self) -> Result<(), ApiError> {
        self.put_command("play", format!("{API_BASE}/me/player/play"), None)
            .await
    }

    async fn pause(&self) -> Result<(), ApiError> {
        self.put_command("pause", format!("{API_BASE}/me/player/pause"), None)
            .await
    }

    async fn set_volume(&self, percent: u8) -> Result<(), ApiError> {
        self.put_command(
            "set volume",
            format!("{API_BASE}/me/player/volume?volume_percent={percent}"),
            None,
        )
        .await
    }

    async fn play_track(&self, uri: &str) -> Result<(), ApiError> {
        self.put_command(
            "play track",
            format!("{API_BASE}/me/player/play"),
            Some(serde_json::json!({ "uris": [uri] })),
        )
        .await
    }
}
