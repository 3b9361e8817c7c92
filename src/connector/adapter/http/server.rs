//! Inbound HTTP surface used by chat front-ends.
//!
//! | Method | Path            | 200 body               | failure                         |
//! |--------|-----------------|------------------------|---------------------------------|
//! | GET    | `/user-profile` | `{ "profile": "..." }` | 500 `{ "error": ... }`          |
//! | POST   | `/chat`         | `{ "message": "..." }` | 500 (provider) / 400 (body)     |
//!
//! Both routes are also mounted under `/api`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::connector::api::Container;

use super::dto::{ChatRequest, ChatResponse, ErrorResponse, ProfileResponse};

const PROFILE_ERROR: &str = "Error loading user profile";
const CHAT_ERROR: &str = "Error processing request";

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

/// Build the axum application for `container`.
pub fn app(container: Arc<Container>) -> Router {
    let routes = Router::new()
        .route("/user-profile", get(handle_user_profile))
        .route("/chat", post(handle_chat));

    Router::new()
        .merge(routes.clone())
        .nest("/api", routes)
        .with_state(container)
}

/// Serve on `listener` until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    container: Arc<Container>,
    shutdown: F,
) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = listener.local_addr()?;
    info!("Chat server listening on http://{}", addr);

    axum::serve(listener, app(container))
        .with_graceful_shutdown(shutdown)
        .await
}

/// GET /user-profile: the raw profile text, or 500 when it cannot be read.
async fn handle_user_profile(State(container): State<Arc<Container>>) -> Response {
    match container.profile_use_case().load_strict().await {
        Ok(profile) => Json(ProfileResponse {
            profile: profile.into_inner(),
        })
        .into_response(),
        Err(e) => {
            warn!("Error reading user profile: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, PROFILE_ERROR)
        }
    }
}

/// POST /chat: relay the posted history and return the reply.
async fn handle_chat(
    State(container): State<Arc<Container>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            warn!("Rejected chat request: {}", rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    match container.relay_use_case().execute(&request.messages).await {
        Ok(message) => Json(ChatResponse { message }).into_response(),
        // already logged by the relay
        Err(_) => error_response(StatusCode::INTERNAL_SERVER_ERROR, CHAT_ERROR),
    }
}
