//! HTTP API Client
//!
//! Functions for communicating with the quote-serving REST API.

use gloo_net::http::Request;

use crate::state::session::{AuthEndpoint, Credentials};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:3001";

/// Get the API base URL. A `quoteboard_api_url` localStorage entry overrides
/// the compiled-in default.
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("quoteboard_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// What can go wrong talking to the API. Only the display string survives
/// past the runner; the variants exist so failures fold predictably.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

#[derive(Debug, serde::Deserialize)]
struct AuthResponse {
    id_token: String,
}

/// Fetch a public random quote as plain text.
pub async fn fetch_public_quote() -> Result<String, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/random-quote", api_base))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Register or log in; on success the API's `id_token` comes back.
pub async fn authenticate(
    credentials: &Credentials,
    endpoint: AuthEndpoint,
) -> Result<String, ApiError> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/{}", api_base, endpoint.path()))
        .json(credentials)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let body: AuthResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    Ok(body.id_token)
}

/// Fetch the authenticated-only random quote as plain text.
pub async fn fetch_protected_quote(token: &str) -> Result<String, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/protected/random-quote", api_base))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_endpoints_map_to_api_paths() {
        assert_eq!(AuthEndpoint::Register.path(), "users");
        assert_eq!(AuthEndpoint::Login.path(), "sessions/create");
    }

    #[test]
    fn test_error_descriptions_are_never_empty() {
        assert!(!ApiError::Network("refused".to_string()).to_string().is_empty());
        assert!(!ApiError::Status(401).to_string().is_empty());
        assert!(!ApiError::Decode("bad json".to_string()).to_string().is_empty());
    }

    #[test]
    fn test_auth_response_extracts_id_token() {
        let body: AuthResponse =
            serde_json::from_str("{\"id_token\":\"tok-abc\",\"access_token\":\"x\"}").unwrap();
        assert_eq!(body.id_token, "tok-abc");

        assert!(serde_json::from_str::<AuthResponse>("{\"token\":\"nope\"}").is_err());
    }
}
