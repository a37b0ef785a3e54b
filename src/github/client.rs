use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::error::{LintCheckError, Result};

const USER_AGENT: &str = concat!("lint-check-run/", env!("CARGO_PKG_VERSION"));
const API_VERSION: &str = "2022-11-28";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Patch,
}

/// A JSON request against the check run API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: String,
}

/// HTTP client abstraction for dependency injection.
pub trait HttpClient {
    /// Send `request` authenticated with the bearer `token`; return the
    /// response body of a 2xx response.
    ///
    /// # Errors
    /// Returns an error if the request fails or the status is not 2xx.
    fn send(&self, request: &ApiRequest, token: &str) -> Result<String>;
}

/// Production HTTP client using reqwest.
///
/// No request timeout is set; calls run until they complete or fail.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// # Errors
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| LintCheckError::Transport(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[cfg(not(tarpaulin_include))]
impl HttpClient for ReqwestClient {
    fn send(&self, request: &ApiRequest, token: &str) -> Result<String> {
        let builder = match request.method {
            Method::Post => self.client.post(&request.url),
            Method::Patch => self.client.patch(&request.url),
        };

        let response = builder
            .bearer_auth(token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .header(CONTENT_TYPE, "application/json")
            .body(request.body.clone())
            .send()
            .map_err(|e| {
                let url = &request.url;
                if e.is_connect() {
                    LintCheckError::Transport(format!("Failed to connect to {url}"))
                } else {
                    LintCheckError::Transport(format!("Request to {url} failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| {
            LintCheckError::Transport(format!("Failed to read response from {}: {e}", request.url))
        })?;

        if !status.is_success() {
            return Err(LintCheckError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}
