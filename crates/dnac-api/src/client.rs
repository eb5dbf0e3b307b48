// DNA Center HTTP client
//
// Wraps `reqwest::Client` with controller URL construction, the
// `X-Auth-Token` header, and `{ response: [...] }` envelope unwrapping.
// Endpoint groups (auth, pools, sites) are implemented as inherent
// methods in separate files to keep this module focused on transport.

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::ListResponse;
use crate::transport::TransportConfig;

/// Header carrying the bearer token on every authenticated request.
pub(crate) const AUTH_HEADER: &str = "X-Auth-Token";

/// Raw outcome of a DELETE call.
///
/// The controller answers deletes asynchronously: `202 Accepted` means a
/// task was queued. Classification is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResponse {
    pub status: u16,
    pub body: String,
}

impl DeleteResponse {
    /// `true` when the controller accepted the delete (HTTP 202).
    pub fn is_accepted(&self) -> bool {
        self.status == reqwest::StatusCode::ACCEPTED.as_u16()
    }
}

/// HTTP client for the controller's intent API.
///
/// Holds the bearer token for the lifetime of a run. All list methods
/// return unwrapped `response` payloads.
pub struct DnacClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<SecretString>,
}

impl DnacClient {
    /// Create a client from a `TransportConfig`.
    ///
    /// `base_url` is the controller root, e.g. `https://198.18.129.100`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            token: None,
        }
    }

    /// The controller base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The underlying HTTP client (for the token exchange).
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Whether a token has been obtained.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn set_token(&mut self, token: SecretString) {
        debug!("storing auth token");
        self.token = Some(token);
    }

    fn token(&self) -> Result<&SecretString, Error> {
        self.token.as_ref().ok_or(Error::NotAuthenticated)
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for an absolute API path (may include a query).
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    /// Build `{collection}/{id}` with `id` escaped as one path segment.
    pub(crate) fn resource_url(&self, collection: &str, id: &str) -> Result<Url, Error> {
        if matches!(id, "" | "." | "..") {
            return Err(Error::InvalidId { id: id.to_owned() });
        }
        let mut url = self.api_url(collection)?;
        url.path_segments_mut()
            .map_err(|()| Error::InvalidId { id: id.to_owned() })?
            .push(id);
        Ok(url)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send an authenticated GET and unwrap the `response` envelope.
    ///
    /// Anything other than HTTP 200 is an [`Error::Api`].
    pub(crate) async fn get_list<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, Error> {
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .header(AUTH_HEADER, self.token()?.expose_secret())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if status != reqwest::StatusCode::OK {
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: ListResponse<T> = serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })?;

        trace!(count = envelope.response.len(), "list response unwrapped");
        Ok(envelope.response)
    }

    /// Send an authenticated DELETE and hand back the raw status and body.
    ///
    /// Only transport failures are errors here; a non-202 status is a
    /// regular [`DeleteResponse`].
    pub(crate) async fn delete(&self, url: Url) -> Result<DeleteResponse, Error> {
        debug!("DELETE {}", url);

        let resp = self
            .http
            .delete(url)
            .header(AUTH_HEADER, self.token()?.expose_secret())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(DeleteResponse { status, body })
    }
}
