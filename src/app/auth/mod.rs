use std::{sync::Arc, time::Duration};

use tokio::sync::{Mutex, oneshot};

use crate::app::config::SpotifyConfig;
use crate::app::logging::log_auth_event;
use crate::app::spotify::SpotifyClient;

mod pkce;
mod server;

const AUTHORIZE_URL: &str = "https://accounts.spotify.com/authorize";
const SCOPES: &str = "user-read-playback-state user-modify-playback-state playlist-read-private";

/// Run the OAuth authorization-code flow with PKCE and return an
/// authenticated API client.
///
/// Spawns the local callback server, opens the authorization URL in the
/// user's browser (logging it as a fallback), and blocks on the one-shot
/// session handoff until the callback delivers a token or the configured
/// login timeout expires.
pub async fn login(config: &SpotifyConfig) -> color_eyre::Result<SpotifyClient> {
    let client_id = config.resolved_client_id()?;
    let redirect_uri = config.redirect_uri();

    let code_verifier = pkce::generate_code_verifier();
    let code_challenge = pkce::generate_code_challenge(&code_verifier);
    let state = pkce::generate_state();

    let (session_tx, session_rx) = oneshot::channel();
    let context = Arc::new(server::CallbackContext {
        client_id: client_id.clone(),
        redirect_uri: redirect_uri.clone(),
        code_verifier,
        expected_state: state.clone(),
        session_tx: Mutex::new(Some(session_tx)),
    });

    server::spawn_callback_server(config.redirect_port, context).await?;

    let auth_url = reqwest::Url::parse_with_params(
        AUTHORIZE_URL,
        &[
            ("client_id", client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri.as_str()),
            ("code_challenge_method", "S256"),
            ("code_challenge", code_challenge.as_str()),
            ("state", state.as_str()),
            ("scope", SCOPES),
        ],
    )?;

    // The alternate screen is not entered yet, keep the URL reachable on
    // the plain terminal even with file-only logging.
    log::info!("Log into Spotify by visiting the URL: {}", auth_url);
    eprintln!("Log into Spotify by visiting the URL:\n{auth_url}");

    if webbrowser::open(auth_url.as_str()).is_err() {
        log::warn!("Failed to open browser; visit the URL manually: {}", auth_url);
    }

    let token = tokio::time::timeout(Duration::from_secs(config.login_timeout), session_rx)
        .await
        .map_err(|_| {
            color_eyre::eyre::eyre!(
                "login timed out after {} seconds without a callback",
                config.login_timeout
            )
        })?
        .map_err(|_| color_eyre::eyre::eyre!("login callback closed without delivering a session"))??;

    let client = SpotifyClient::new(client_id, token);

    // User lookup failure is fatal: without it the session is unusable.
    let user = client.current_user().await?;
    log_auth_event(&format!("logged in as {}", user.id), true, None);

    Ok(client)
}
