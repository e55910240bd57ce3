use std::{collections::HashMap, sync::Arc};

use axum::{Extension, Router, extract::Query, routing::get};
use tokio::{
    net::TcpListener,
    sync::{Mutex, oneshot},
};

use crate::app::logging::log_auth_event;
use crate::app::spotify::client::TOKEN_URL;
use crate::app::spotify::models::TokenResponse;
use crate::app::spotify::{ApiError, Token};

/// Everything the callback handler needs to finish the login: the PKCE
/// material to exchange the code, the expected `state`, and the one-shot
/// sender the session is delivered through. The sender is taken exactly
/// once; later callbacks find it gone and are ignored.
pub(super) struct CallbackContext {
    pub client_id: String,
    pub redirect_uri: String,
    pub code_verifier: String,
    pub expected_state: String,
    pub session_tx: Mutex<Option<oneshot::Sender<Result<Token, ApiError>>>>,
}

/// Bind the local callback listener and serve it on a background task.
pub(super) async fn spawn_callback_server(
    port: u16,
    context: Arc<CallbackContext>,
) -> color_eyre::Result<()> {
    let app = Router::new().route("/callback", get(callback).layer(Extension(context)));

    let listener = TcpListener::bind(("127.0.0.1", port)).await?;
    log_auth_event(&format!("callback server listening on port {port}"), true, None);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            log::error!("Callback server stopped: {}", e);
        }
    });

    Ok(())
}

async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(context): Extension<Arc<CallbackContext>>,
) -> String {
    if params.get("state").map(String::as_str) != Some(context.expected_state.as_str()) {
        log_auth_event("callback", false, Some("state mismatch"));
        return "State mismatch".to_string();
    }

    let Some(code) = params.get("code") else {
        let reason = params
            .get("error")
            .map(String::as_str)
            .unwrap_or("missing authorization code");
        log_auth_event("callback", false, Some(reason));
        deliver(&context, Err(ApiError::Auth(reason.to_string()))).await;
        return format!("Login failed: {reason}");
    };

    match exchange_code(&context, code).await {
        Ok(token) => {
            log_auth_event("token exchange", true, None);
            deliver(&context, Ok(token)).await;
            "Login Completed".to_string()
        }
        Err(e) => {
            log_auth_event("token exchange", false, Some(&e.to_string()));
            let body = format!("Login failed: {e}");
            deliver(&context, Err(e)).await;
            body
        }
    }
}

/// Hand the result to the waiting startup routine, first callback wins.
async fn deliver(context: &CallbackContext, result: Result<Token, ApiError>) {
    if let Some(tx) = context.session_tx.lock().await.take() {
        let _ = tx.send(result);
    }
}

async fn exchange_code(context: &CallbackContext, code: &str) -> Result<Token, ApiError> {
    let response = reqwest::Client::new()
        .post(TOKEN_URL)
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", context.client_id.as_str()),
            ("code", code),
            ("code_verifier", context.code_verifier.as_str()),
            ("redirect_uri", context.redirect_uri.as_str()),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ApiError::Status {
            endpoint: "token exchange",
            status: response.status().as_u16(),
        });
    }

    let body: TokenResponse = response.json().await?;
    Ok(Token::from_response(body, None))
}
