use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use ureq::http::Response;
use ureq::tls::{TlsConfig, TlsProvider};
use ureq::{Agent, Body};
use url::Url;

use crate::error::ClientError;

// Longest server message carried into an error.
const MAX_MESSAGE_LEN: usize = 512;

pub fn get_ureq_agent(timeout: Duration) -> Agent {
    let config = Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .tls_config(TlsConfig::builder().provider(TlsProvider::NativeTls).build())
        .build();
    Agent::new_with_config(config)
}

/// JSON request/response exchange against one collection URL.
///
/// Holds nothing mutable: the agent is shared and the base URL is fixed at
/// construction, so a transport can be cloned and used from any thread.
#[derive(Clone)]
pub struct HttpTransport {
    agent: Agent,
    base: Url,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport").field("base", &self.base.as_str()).finish()
    }
}

impl HttpTransport {
    pub fn new(base: Url, timeout: Duration) -> Self {
        HttpTransport {
            agent: get_ureq_agent(timeout),
            base,
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Appends each segment to the base path, percent-encoding it as a whole.
    pub fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        let url = self.url(segments);
        log::debug!("GET {url}");
        let response = self
            .agent
            .get(url.as_str())
            .header("Accept", "application/json")
            .call()?;
        let body = read_success(response)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Creates an entity; the service answers with the new id as a bare string.
    pub fn post<B: Serialize>(&self, entity: &B) -> Result<String, ClientError> {
        let url = self.url(&[]);
        log::debug!("POST {url}");
        let response = self.agent.post(url.as_str()).send_json(entity)?;
        let body = read_success(response)?;
        Ok(bare_string(&body))
    }

    pub fn put<B: Serialize>(&self, segments: &[&str], entity: &B) -> Result<bool, ClientError> {
        let url = self.url(segments);
        log::debug!("PUT {url}");
        let response = self.agent.put(url.as_str()).send_json(entity)?;
        parse_bool(&read_success(response)?)
    }

    /// PUT for updates whose target and value are carried in the path.
    pub fn put_empty(&self, segments: &[&str]) -> Result<bool, ClientError> {
        let url = self.url(segments);
        log::debug!("PUT {url}");
        let response = self
            .agent
            .put(url.as_str())
            .header("Content-Type", "application/json")
            .send_empty()?;
        parse_bool(&read_success(response)?)
    }

    pub fn delete(&self, segments: &[&str]) -> Result<bool, ClientError> {
        let url = self.url(segments);
        log::debug!("DELETE {url}");
        let response = self.agent.delete(url.as_str()).call()?;
        parse_bool(&read_success(response)?)
    }
}

fn read_success(mut response: Response<Body>) -> Result<String, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.body_mut().read_to_string().unwrap_or_default();
        let message = match body.trim() {
            "" => status.canonical_reason().unwrap_or_default().to_string(),
            text => text.chars().take(MAX_MESSAGE_LEN).collect(),
        };
        log::debug!("HTTP {} from service: {}", status.as_u16(), message);
        return Err(ClientError::from_status(status.as_u16(), message));
    }
    Ok(response.body_mut().read_to_string()?)
}

// An empty body from a boolean operation means success.
fn parse_bool(body: &str) -> Result<bool, ClientError> {
    match body.trim() {
        "" => Ok(true),
        text => Ok(serde_json::from_str(text)?),
    }
}

fn bare_string(body: &str) -> String {
    serde_json::from_str::<String>(body).unwrap_or_else(|_| body.trim().to_string())
}
