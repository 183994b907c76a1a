//! Client configuration shared by the API client and the session store.
//! Values are public; never put credentials here.

use crate::error::{Error, Result};
use url::Url;

/// Storage key holding the serialized session.
pub const DEFAULT_STORAGE_KEY: &str = "authState";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    api_base_url: Url,
    storage_key: String,
}

impl ClientConfig {
    /// Builds a config from an absolute `http`/`https` base URL.
    ///
    /// # Errors
    /// Returns an error if `api_base_url` cannot be parsed, has no host, or
    /// uses an unsupported scheme.
    pub fn new(api_base_url: &str) -> Result<Self> {
        let trimmed = api_base_url.trim();
        let url = Url::parse(trimmed)
            .map_err(|err| Error::Config(format!("api base url {trimmed:?}: {err}")))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(Error::Config(format!(
                    "api base url: unsupported scheme {scheme}"
                )))
            }
        }

        if url.host_str().is_none() {
            return Err(Error::Config("api base url: no host specified".to_string()));
        }

        Ok(Self {
            api_base_url: url,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        })
    }

    /// Resolves the configured base URL, falling back to `page_origin` when
    /// none is configured so the API is reached on the app's own origin.
    ///
    /// # Errors
    /// Returns an error if neither value is set or the chosen URL is invalid.
    pub fn resolve(configured: &str, page_origin: Option<&str>, storage_key: &str) -> Result<Self> {
        let base = Some(configured.trim())
            .filter(|value| !value.is_empty())
            .or_else(|| page_origin.map(str::trim).filter(|value| !value.is_empty()))
            .ok_or_else(|| Error::Config("API base URL is not configured.".to_string()))?;
        Ok(Self::new(base)?.with_storage_key(storage_key))
    }

    #[must_use]
    pub fn with_storage_key(mut self, key: &str) -> Self {
        let key = key.trim();
        if !key.is_empty() {
            self.storage_key = key.to_string();
        }
        self
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    #[must_use]
    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    /// Joins `path` onto the base URL, keeping any path prefix of the base.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base_url.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim().trim_start_matches('/'))
    }
}
