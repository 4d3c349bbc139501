//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors; the admin guard is covered by the
//! router tests.

mod outpost;
mod sync;

use axum::{
    body::to_bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pulsepoint_test_utils::prelude::*;
use serde::de::DeserializeOwned;

use crate::util::TestContextExt;

/// Reads a JSON response body.
async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
