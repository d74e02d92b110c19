use crate::domain::entities::AnonymousSessionGrant;
use crate::domain::ports::AnonymousSessionApi;
use crate::interface_adapters::protocol::{AnonymousSessionEnvelope, ErrorResponse};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::fmt;
use std::time::Duration;
use url::Url;

const ANONYMOUS_SESSION_PATH: &str = "/api/v1/auth/anonymous-session";

// Thin wrapper around reqwest for the FHIR backend's auth endpoints.
// The cookie store lets the backend tie a guest to the caller's cookies.
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    pub base_url: String,
}

#[derive(Debug)]
pub enum BackendClientError {
    InvalidUrl(url::ParseError),
    Transport(reqwest::Error),
    Upstream {
        status: StatusCode,
        message: Option<String>,
    },
    Decode(reqwest::Error),
}

impl fmt::Display for BackendClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendClientError::InvalidUrl(err) => write!(f, "backend url is invalid: {err}"),
            BackendClientError::Transport(err) => write!(f, "backend transport error: {err}"),
            BackendClientError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "backend upstream error {status}: {message}")
                } else {
                    write!(f, "backend upstream error {status}")
                }
            }
            BackendClientError::Decode(err) => write!(f, "backend response decode error: {err}"),
        }
    }
}

impl std::error::Error for BackendClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BackendClientError::InvalidUrl(err) => Some(err),
            BackendClientError::Transport(err) | BackendClientError::Decode(err) => Some(err),
            BackendClientError::Upstream { .. } => None,
        }
    }
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn anonymous_session_url(&self, force_new: bool) -> Result<Url, BackendClientError> {
        let base = self.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{ANONYMOUS_SESSION_PATH}"))
            .map_err(BackendClientError::InvalidUrl)?;
        if force_new {
            url.query_pairs_mut().append_pair("force_new", "true");
        }
        Ok(url)
    }
}

#[async_trait]
impl AnonymousSessionApi for BackendClient {
    async fn request_anonymous_session(
        &self,
        force_new: bool,
    ) -> Result<AnonymousSessionGrant, Box<dyn std::error::Error + Send + Sync>> {
        let url = self.anonymous_session_url(force_new)?;
        tracing::debug!(%url, "requesting anonymous session");

        let res = self
            .http
            .post(url)
            .send()
            .await
            .map_err(BackendClientError::Transport)?;
        let status = res.status();

        // Keep upstream status/message so callers can tell 4xx from 5xx.
        if !status.is_success() {
            let message = res
                .json::<ErrorResponse>()
                .await
                .ok()
                .map(|payload| payload.message);
            return Err(Box::new(BackendClientError::Upstream { status, message }));
        }

        let envelope = res
            .json::<AnonymousSessionEnvelope>()
            .await
            .map_err(BackendClientError::Decode)?;

        Ok(envelope.into())
    }
}
