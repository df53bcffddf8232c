use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::mode::SimulationMode;
use crate::state::AppState;

/// Body served in `malformed_json` mode: an unquoted token where a string
/// is expected, so any JSON parser rejects it.
const MALFORMED_BODY: &str = r#"{"invalid": json}"#;

// ── GET /repos/{owner}/{repo}/releases/latest ────────────────────────────────

/// Serve the fixed release descriptor. The owner/repo segments are accepted
/// but ignored; the mock publishes one release no matter who asks for it.
pub async fn latest_release(State(state): State<AppState>) -> Response {
    if state.mode == SimulationMode::MalformedJson {
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            MALFORMED_BODY,
        )
            .into_response();
    }
    Json((*state.release).clone()).into_response()
}
