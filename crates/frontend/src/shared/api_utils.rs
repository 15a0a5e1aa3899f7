//! API utilities for talking to the tour platform API
//!
//! Provides helper functions for constructing API URLs and unwrapping the
//! `{success, message, data}` envelope the API answers with.

use super::config::config;
use contracts::shared::api_response::ApiResponse;
use gloo_net::http::{Request, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};

/// Get the base URL for API requests
///
/// Uses the configured base if there is one, otherwise the current window's
/// scheme and host with the configured port and prefix.
///
/// # Returns
/// - API base URL like "http://localhost:3002/api"
pub fn api_base() -> String {
    let (protocol, hostname) = match web_sys::window() {
        Some(w) => {
            let location = w.location();
            (
                location.protocol().unwrap_or_else(|_| "http:".to_string()),
                location
                    .hostname()
                    .unwrap_or_else(|_| "127.0.0.1".to_string()),
            )
        }
        None => ("http:".to_string(), "127.0.0.1".to_string()),
    };
    config().api.base_for_host(&protocol, &hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/add-ons/12");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Decode an enveloped response body.
///
/// Non-2xx statuses become an error carrying the server's `message` when the
/// body has one.
pub fn parse_envelope<T: DeserializeOwned>(status: u16, text: &str) -> Result<ApiResponse<T>, String> {
    if !(200..300).contains(&status) {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            message: Option<String>,
        }
        if let Ok(ErrorResponse { message: Some(msg) }) = serde_json::from_str::<ErrorResponse>(text) {
            if !msg.is_empty() {
                return Err(format!("HTTP {}: {}", status, msg));
            }
        }
        return Err(format!("HTTP {}", status));
    }
    serde_json::from_str(text).map_err(|e| format!("Failed to parse response: {}", e))
}

async fn send_builder<T: DeserializeOwned>(request: RequestBuilder) -> Result<ApiResponse<T>, String> {
    let response = request
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to fetch: {}", e))?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    parse_envelope(status, &text)
}

async fn send_with_body<B: Serialize, T: DeserializeOwned>(
    request: RequestBuilder,
    body: &B,
) -> Result<ApiResponse<T>, String> {
    let response = request
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to fetch: {}", e))?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    parse_envelope(status, &text)
}

/// `GET {api}{path}` and return the envelope payload
pub async fn get_data<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    send_builder::<T>(Request::get(&api_url(path))).await?.into_data()
}

/// `POST {api}{path}` with a JSON body
pub async fn post_data<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    send_with_body::<B, T>(Request::post(&api_url(path)), body)
        .await?
        .into_data()
}

/// `PUT {api}{path}` with a JSON body
pub async fn put_data<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    send_with_body::<B, T>(Request::put(&api_url(path)), body)
        .await?
        .into_data()
}

/// `DELETE {api}{path}`
pub async fn delete(path: &str) -> Result<(), String> {
    send_builder::<serde_json::Value>(Request::delete(&api_url(path)))
        .await?
        .into_unit()
}
