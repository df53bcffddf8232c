use std::time::Instant;

use axum::http::StatusCode;
use serde_json::{Value, json};

use relmock_github::mode::SimulationMode;

use crate::helpers::{
    LATEST_PATH, LINUX_ASSET_PATH, TEST_STALL, seed_payload, test_server, test_server_with_stall,
};

// ── rate_limit / server_error: override every path ───────────────────────────

#[tokio::test]
async fn should_rate_limit_every_path() {
    let (server, _data_dir) = test_server(SimulationMode::RateLimit);

    for path in [LATEST_PATH, LINUX_ASSET_PATH, "/foo/bar"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::FORBIDDEN, "path {path}");
        assert_eq!(
            response.json::<Value>(),
            json!({"message": "API rate limit exceeded"}),
            "path {path}"
        );
    }
}

#[tokio::test]
async fn should_serve_internal_error_on_every_path() {
    let (server, _data_dir) = test_server(SimulationMode::ServerError);

    for path in [LATEST_PATH, LINUX_ASSET_PATH, "/foo/bar"] {
        let response = server.get(path).await;
        assert_eq!(
            response.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "path {path}"
        );
        assert_eq!(
            response.json::<Value>(),
            json!({"message": "Internal server error"}),
            "path {path}"
        );
    }
}

// ── malformed_json ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_serve_unparseable_json_on_releases_endpoint() {
    let (server, _data_dir) = test_server(SimulationMode::MalformedJson);

    let response = server.get(LATEST_PATH).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header("content-type"), "application/json");
    assert!(serde_json::from_str::<Value>(&response.text()).is_err());
}

#[tokio::test]
async fn should_leave_downloads_untouched_in_malformed_json_mode() {
    let (server, data_dir) = test_server(SimulationMode::MalformedJson);
    seed_payload(&data_dir, "km-x86_64-unknown-linux-gnu.tar.gz", b"payload");

    let response = server.get(LINUX_ASSET_PATH).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.as_bytes().as_ref(), b"payload".as_slice());
}

// ── missing_binary ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_hide_downloads_even_when_the_file_exists() {
    let (server, data_dir) = test_server(SimulationMode::MissingBinary);
    seed_payload(&data_dir, "km-x86_64-unknown-linux-gnu.tar.gz", b"payload");

    let response = server.get(LINUX_ASSET_PATH).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(response.as_bytes().is_empty());
}

#[tokio::test]
async fn should_leave_release_metadata_untouched_in_missing_binary_mode() {
    let (server, _data_dir) = test_server(SimulationMode::MissingBinary);

    let response = server.get(LATEST_PATH).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["tag_name"], "v2024.1.1");
}

// ── corrupted_binary ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_serve_bytes_that_are_not_a_valid_archive() {
    let (server, data_dir) = test_server(SimulationMode::CorruptedBinary);
    seed_payload(&data_dir, "km-x86_64-unknown-linux-gnu.tar.gz", b"real payload");

    let response = server.get(LINUX_ASSET_PATH).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header("content-type"), "application/gzip");

    let body = response.as_bytes();
    assert!(!body.is_empty());
    // Not a gzip stream: the 0x1f 0x8b magic is absent, so extraction fails.
    assert_ne!(&body[..2], &[0x1f, 0x8b]);
}

// ── timeout ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_stall_before_completing_with_an_empty_body() {
    let (server, _data_dir) = test_server(SimulationMode::Timeout);

    let started = Instant::now();
    let response = server.get(LATEST_PATH).await;
    assert!(
        started.elapsed() >= TEST_STALL,
        "response completed before the stall elapsed"
    );
    assert!(response.as_bytes().is_empty());
}

#[tokio::test]
async fn should_stall_requests_in_parallel_rather_than_serially() {
    let stall = std::time::Duration::from_millis(200);
    let (server, _data_dir) = test_server_with_stall(SimulationMode::Timeout, stall);

    let started = Instant::now();
    let (first, second) = tokio::join!(server.get(LATEST_PATH), server.get("/foo/bar"));
    let elapsed = started.elapsed();

    assert!(first.as_bytes().is_empty());
    assert!(second.as_bytes().is_empty());
    assert!(elapsed >= stall, "both requests must stall");
    // Serial handling would take at least two full stalls.
    assert!(
        elapsed < stall * 2,
        "stalled requests were handled serially: {elapsed:?}"
    );
}
