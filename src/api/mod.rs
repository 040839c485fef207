//! REST API Client
//!
//! Thin reqwest wrapper over the backend's food endpoints. Under wasm32
//! reqwest rides the browser's fetch API.

mod food;

use reqwest::{Client, Response};
use thiserror::Error;

/// Default backend address when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

/// A failed backend round trip.
///
/// Transport failures and non-2xx responses are distinguished here so the
/// console line says which it was; callers treat both as one failure.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with status {status}")]
    Status { status: u16 },
}

/// Shared handle to the backend API.
#[derive(Debug, Clone)]
pub struct Api {
    client: Client,
    base_url: String,
}

impl Api {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn client(&self) -> &Client {
        &self.client
    }
}

impl Default for Api {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let api = Api::new("http://localhost:3333");
        assert_eq!(api.url("/foods"), "http://localhost:3333/foods");
        assert_eq!(api.url("/foods/2"), "http://localhost:3333/foods/2");
    }

    #[test]
    fn test_default_points_at_localhost() {
        let api = Api::default();
        assert_eq!(api.url("/foods"), format!("{DEFAULT_BASE_URL}/foods"));
    }
}
