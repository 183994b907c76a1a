//! HTTP client for the remote user-management service. Every call returns a
//! uniform `ApiResponse`; transport and HTTP failures are folded into that
//! shape so callers only ever branch on `success`.
//!
//! The bearer credential is read from the persisted session right before each
//! request, so a login or logout takes effect on the next call without
//! rebuilding the client.

use crate::{
    config::ClientConfig,
    error::{Error, Result},
    storage::{self, KeyValueStore},
    types::{ApiResponse, LoginCredentials, RegisterData},
};
use reqwest::{header::AUTHORIZATION, Client, Method, RequestBuilder, StatusCode};
use tracing::{debug, info_span, warn, Instrument};

pub const USERS_PATH: &str = "/api/users";
pub const LOGIN_PATH: &str = "/api/users/login";
pub const REGISTER_PATH: &str = "/api/users/register";

/// Message used when no response was received at all.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again later.";
/// Message used when a 2xx body cannot be decoded.
pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "Unexpected response from server.";
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Operations offered by the remote service. One request per call; no retries.
#[allow(async_fn_in_trait)]
pub trait UserService {
    async fn fetch_users(&self) -> ApiResponse;
    async fn login(&self, credentials: &LoginCredentials) -> ApiResponse;
    async fn register(&self, data: &RegisterData) -> ApiResponse;
}

#[derive(Clone, Debug)]
pub struct HttpClient<S> {
    http: Client,
    config: ClientConfig,
    storage: S,
}

impl<S: KeyValueStore> HttpClient<S> {
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be initialized.
    pub fn new(config: ClientConfig, storage: S) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|err| Error::Config(format!("http client: {err}")))?;
        Ok(Self {
            http,
            config,
            storage,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds a request and attaches the persisted bearer credential, if any.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.config.endpoint(path));
        match storage::persisted_token(&self.storage, self.config.storage_key()) {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn send(&self, method: Method, path: &str, builder: RequestBuilder) -> ApiResponse {
        let span = info_span!("api.request", http.method = %method, path);
        async move {
            debug!("sending request");
            let response = match builder.send().await {
                Ok(response) => response,
                Err(err) => {
                    warn!(error = %err, "request failed before a response");
                    return ApiResponse::failure(NETWORK_ERROR_MESSAGE);
                }
            };

            let status = response.status();
            match response.text().await {
                Ok(body) => {
                    debug!(status = status.as_u16(), "response received");
                    decode_response(status, &body)
                }
                Err(err) => {
                    warn!(status = status.as_u16(), error = %err, "failed to read response body");
                    ApiResponse::failure(NETWORK_ERROR_MESSAGE)
                }
            }
        }
        .instrument(span)
        .await
    }
}

impl<S: KeyValueStore> UserService for HttpClient<S> {
    async fn fetch_users(&self) -> ApiResponse {
        let builder = self.request(Method::GET, USERS_PATH);
        self.send(Method::GET, USERS_PATH, builder).await
    }

    async fn login(&self, credentials: &LoginCredentials) -> ApiResponse {
        let builder = self.request(Method::POST, LOGIN_PATH).json(credentials);
        self.send(Method::POST, LOGIN_PATH, builder).await
    }

    async fn register(&self, data: &RegisterData) -> ApiResponse {
        let builder = self.request(Method::POST, REGISTER_PATH).json(data);
        self.send(Method::POST, REGISTER_PATH, builder).await
    }
}

/// Maps a received response onto `ApiResponse`. Structured bodies are
/// forwarded as-is whatever the status; anything else becomes a failure.
#[must_use]
pub fn decode_response(status: StatusCode, body: &str) -> ApiResponse {
    match serde_json::from_str::<ApiResponse>(body) {
        Ok(parsed) => parsed,
        Err(_) if status.is_success() => ApiResponse::failure(UNEXPECTED_RESPONSE_MESSAGE),
        Err(_) => ApiResponse::failure(sanitize_body(status, body)),
    }
}

/// Trims and truncates an unstructured error body for display.
fn sanitize_body(status: StatusCode, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Request failed ({}).", status.as_u16())
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
