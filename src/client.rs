//! Blocking HTTP client for the SonarQube web API.
//!
//! Every call is a basic-auth GET returning a JSON body. A non-2xx status or
//! a transport failure is returned as an error immediately; there is no retry.

use crate::config::Settings;
use crate::error::{Error, Result};
use serde_json::Value as Json;

pub struct SonarClient {
    http: reqwest::blocking::Client,
    base_url: String,
    username: String,
    password: String,
}

impl SonarClient {
    /// Build a client for the server and credentials in `settings`.
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("sonar-mitigate/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| Error::Transport {
                url: settings.url.clone(),
                source,
            })?;
        Ok(Self {
            http,
            base_url: settings.url.clone(),
            username: settings.username.clone(),
            password: settings.password.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}{path}` with `query` and decode the body as JSON.
    pub fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Json> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, ?query, "GET");

        let resp = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .query(query)
            .send()
            .map_err(|source| Error::Transport {
                url: url.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(%url, %status, "request rejected");
            return Err(Error::Http { url, status });
        }

        let body = resp.text().map_err(|source| Error::Transport {
            url: url.clone(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|e| Error::Decode {
            url,
            reason: format!("body is not valid JSON: {e}"),
        })
    }
}
