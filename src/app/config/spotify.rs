use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpotifyConfig {
    /// OAuth client id of a registered Spotify application
    #[serde(default = "SpotifyConfig::default_client_id")]
    pub client_id: String,
    /// Local port the login callback listens on
    #[serde(default = "SpotifyConfig::default_redirect_port")]
    pub redirect_port: u16,
    /// Seconds to wait for the login callback before giving up
    #[serde(default = "SpotifyConfig::default_login_timeout")]
    pub login_timeout: u64,
    /// Volume change per keypress, in percent
    #[serde(default = "SpotifyConfig::default_volume_step")]
    pub volume_step: u8,
}

impl SpotifyConfig {
    fn default_client_id() -> String {
        String::new()
    }
    fn default_redirect_port() -> u16 {
        8080
    }
    fn default_login_timeout() -> u64 {
        120
    }
    fn default_volume_step() -> u8 {
        10
    }

    /// Client id from the config file, falling back to the SPOTIFY_ID
    /// environment variable.
    pub fn resolved_client_id(&self) -> color_eyre::Result<String> {
        if !self.client_id.is_empty() {
            return Ok(self.client_id.clone());
        }

        match std::env::var("SPOTIFY_ID") {
            Ok(id) if !id.is_empty() => Ok(id),
            _ => Err(color_eyre::eyre::eyre!(
                "no Spotify client id configured; set client_id in the [spotify] \
                 section of the config file or the SPOTIFY_ID environment variable"
            )),
        }
    }

    /// Redirect URI registered with the application.
    pub fn redirect_uri(&self) -> String {
        format!("http://127.0.0.1:{}/callback", self.redirect_port)
    }
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        Self {
            client_id: Self::default_client_id(),
            redirect_port: Self::default_redirect_port(),
            login_timeout: Self::default_login_timeout(),
            volume_step: Self::default_volume_step(),
        }
    }
}
