use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::GithubMockError;
use crate::mode::SimulationMode;
use crate::state::AppState;

/// Bytes served in `corrupted_binary` mode: advertised as gzip but not a
/// valid archive, so extraction on the client side must fail.
fn corrupted_body() -> Vec<u8> {
    b"corrupted data".repeat(10)
}

// ── GET /releases/download/{*path} ───────────────────────────────────────────

/// Serve a binary payload from the data directory. Only the final path
/// segment matters; the tag and any intermediate segments are ignored, so
/// the mock never has to know which tag a file belongs to.
pub async fn download(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, GithubMockError> {
    let filename = path.rsplit('/').next().unwrap_or(path.as_str());

    match state.mode {
        SimulationMode::CorruptedBinary => {
            return Ok((
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/gzip")],
                corrupted_body(),
            )
                .into_response());
        }
        SimulationMode::MissingBinary => return Err(GithubMockError::AssetNotFound),
        _ => {}
    }

    // Read fresh on every request. Missing and unreadable files both come
    // back as a bare 404.
    let payload_path = state.data_dir.join(filename);
    let content = match tokio::fs::read(&payload_path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(filename, error = %e, "payload not served");
            return Err(GithubMockError::AssetNotFound);
        }
    };

    tracing::info!(filename, bytes = content.len(), "serving binary payload");
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/gzip")],
        content,
    )
        .into_response())
}
