//! HTTP layer for the walker backend.
//!
//! Two request paths share one base URL: `public_*` for the
//! unauthenticated user endpoints and `authed_*` for everything that
//! carries a bearer token. A 401 on any response clears the stored
//! token before the error is surfaced; other failures pass through
//! untouched. No retries and no timeouts.

use gloo::net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::storage;

const DEFAULT_API_URL: &str = "http://localhost:8000";

pub fn api_base_url() -> String {
    option_env!("ODONTO_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}

fn endpoint(path: &str) -> String {
    format!("{}{}", api_base_url(), path)
}

/// Attaches `Authorization: Bearer <token>` when a token is stored.
/// When storage is unavailable or empty the request goes out bare.
fn with_bearer(builder: RequestBuilder) -> RequestBuilder {
    match storage::load_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

pub async fn public_post<R, B>(path: &str, body: &B) -> Result<R, String>
where
    R: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let request = Request::post(&endpoint(path))
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| format!("failed to encode body: {e}"))?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("network error: {e}"))?;
    decode_json(response).await
}

pub async fn authed_post<R, B>(path: &str, body: &B) -> Result<R, String>
where
    R: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let request = with_bearer(Request::post(&endpoint(path)))
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| format!("failed to encode body: {e}"))?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("network error: {e}"))?;
    decode_json(response).await
}

/// Authenticated POST with an empty body, decoding the reply.
pub async fn authed_post_empty<R>(path: &str) -> Result<R, String>
where
    R: DeserializeOwned,
{
    let response = with_bearer(Request::post(&endpoint(path)))
        .send()
        .await
        .map_err(|e| format!("network error: {e}"))?;
    decode_json(response).await
}

/// Authenticated POST with an empty body, ignoring the reply body.
pub async fn authed_post_unit(path: &str) -> Result<(), String> {
    let response = with_bearer(Request::post(&endpoint(path)))
        .send()
        .await
        .map_err(|e| format!("network error: {e}"))?;
    check_status(response).await
}

pub async fn authed_delete(path: &str) -> Result<(), String> {
    let response = with_bearer(Request::delete(&endpoint(path)))
        .send()
        .await
        .map_err(|e| format!("network error: {e}"))?;
    check_status(response).await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusClass {
    Success,
    Unauthorized,
    Failure,
}

fn classify_status(status: u16) -> StatusClass {
    match status {
        200..=299 => StatusClass::Success,
        401 => StatusClass::Unauthorized,
        _ => StatusClass::Failure,
    }
}

async fn decode_json<R: DeserializeOwned>(response: Response) -> Result<R, String> {
    match classify_status(response.status()) {
        StatusClass::Success => response
            .json::<R>()
            .await
            .map_err(|e| format!("decode error: {e}")),
        StatusClass::Unauthorized => Err(reject_unauthorized()),
        StatusClass::Failure => Err(failure_message(response).await),
    }
}

async fn check_status(response: Response) -> Result<(), String> {
    match classify_status(response.status()) {
        StatusClass::Success => Ok(()),
        StatusClass::Unauthorized => Err(reject_unauthorized()),
        StatusClass::Failure => Err(failure_message(response).await),
    }
}

fn reject_unauthorized() -> String {
    tracing::warn!("401 response; clearing stored token");
    storage::clear_token();
    "session expired; please sign in again".to_string()
}

async fn failure_message(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if body.is_empty() {
        format!("request failed with status {status}")
    } else {
        format!("request failed with status {status}: {body}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_401_is_classified_unauthorized() {
        assert_eq!(classify_status(200), StatusClass::Success);
        assert_eq!(classify_status(204), StatusClass::Success);
        assert_eq!(classify_status(401), StatusClass::Unauthorized);
        assert_eq!(classify_status(400), StatusClass::Failure);
        assert_eq!(classify_status(403), StatusClass::Failure);
        assert_eq!(classify_status(500), StatusClass::Failure);
    }
}
