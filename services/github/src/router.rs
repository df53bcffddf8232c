use axum::{
    Json, Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

use relmock_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{download::download, release::latest_release};
use crate::mode::SimulationMode;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/repos/{owner}/{repo}/releases/latest", get(latest_release))
        .route("/releases/download/{*path}", get(download))
        .fallback(fallback)
        .layer(middleware::from_fn_with_state(state.clone(), simulate))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}

/// Mode overrides that take priority over path routing, plus the per-request
/// log line. `timeout`, `rate_limit`, and `server_error` answer every path
/// the same way; the remaining modes fall through to the handlers.
async fn simulate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    tracing::info!(
        method = %request.method(),
        path = %request.uri().path(),
        mode = %state.mode,
        "request"
    );

    match state.mode {
        SimulationMode::Timeout => {
            // Hold this request past any reasonable client timeout, then
            // complete with nothing. Other connections keep being served
            // while this one stalls.
            tokio::time::sleep(state.stall).await;
            StatusCode::OK.into_response()
        }
        SimulationMode::RateLimit => (
            StatusCode::FORBIDDEN,
            Json(serde_json::json!({"message": "API rate limit exceeded"})),
        )
            .into_response(),
        SimulationMode::ServerError => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"message": "Internal server error"})),
        )
            .into_response(),
        _ => next.run(request).await,
    }
}

/// Unrecognized paths degrade to an empty 404; nothing ever crashes the
/// server.
async fn fallback() -> StatusCode {
    StatusCode::NOT_FOUND
}
