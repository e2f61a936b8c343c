// AXAPI HTTP client
//
// Wraps `reqwest::Client` with AXAPI v3 URL construction, lazy session
// authentication, and fail-envelope unwrapping. Endpoint families (slb,
// system) are implemented as inherent methods via separate modules to keep
// this one focused on transport mechanics.

use std::sync::RwLock;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::auth::Credentials;
use crate::error::Error;
use crate::transport::TransportConfig;

/// AXAPI reports logical failures as HTTP 200 with a fail envelope:
/// `{"response": {"status": "fail", "err": {"code": N, "msg": "..."}}}`.
#[derive(serde::Deserialize)]
struct FailWrapper {
    #[serde(default)]
    response: Option<FailResponse>,
}

#[derive(serde::Deserialize)]
struct FailResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    err: Option<FailErr>,
}

#[derive(serde::Deserialize)]
struct FailErr {
    code: u64,
    #[serde(default)]
    msg: Option<String>,
}

/// Extract `(code, msg)` if the body is a fail envelope, `None` otherwise.
///
/// Success bodies may also carry a `response` object (`{"status": "OK"}`);
/// only `status == "fail"` with an `err` block counts.
pub(crate) fn fail_envelope(body: &str) -> Option<(u64, String)> {
    let wrapper: FailWrapper = serde_json::from_str(body).ok()?;
    let resp = wrapper.response?;
    if resp.status.as_deref() != Some("fail") {
        return None;
    }
    let err = resp.err?;
    Some((err.code, err.msg.unwrap_or_default()))
}

/// Raw HTTP client for the AXAPI v3 management interface.
///
/// Authenticates lazily on the first request and attaches the session id to
/// everything after that. Fail envelopes are mapped to typed errors before
/// the caller sees them; success bodies are returned as decoded JSON,
/// unchanged.
pub struct AxapiClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
    /// Session id from the auth endpoint. `None` until the first request
    /// authenticates; cleared when the appliance reports it invalid.
    session: RwLock<Option<String>>,
}

impl AxapiClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the appliance management root, e.g.
    /// `https://10.0.0.1:443`. No request is made until the first operation.
    pub fn new(
        base_url: Url,
        credentials: Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            credentials,
            session: RwLock::new(None),
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url, credentials: Credentials) -> Self {
        Self {
            http,
            base_url,
            credentials,
            session: RwLock::new(None),
        }
    }

    /// The underlying HTTP client (for the auth flow).
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The appliance base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    // ── Session id management ────────────────────────────────────────

    /// The cached session id, if this client has authenticated.
    pub fn session_id(&self) -> Option<String> {
        self.session.read().expect("session lock poisoned").clone()
    }

    pub(crate) fn set_session_id(&self, id: String) {
        debug!("storing session id");
        *self.session.write().expect("session lock poisoned") = Some(id);
    }

    pub(crate) fn clear_session_id(&self) {
        *self.session.write().expect("session lock poisoned") = None;
    }

    /// Return the session id, authenticating first if none is cached.
    ///
    /// Authentication happens at most once per client lifetime in sequential
    /// use: N operations on a fresh client cost exactly N+1 HTTP calls.
    async fn ensure_session(&self) -> Result<String, Error> {
        if let Some(id) = self.session_id() {
            return Ok(id);
        }
        debug!("no session cached, authenticating");
        self.authenticate().await
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a full URL for an API path: `{base}/axapi/v3/{path}`.
    ///
    /// Collection paths keep their trailing slash (`slb/virtual-server/`);
    /// per-object paths have none.
    pub(crate) fn api_url(&self, path: &str) -> Url {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = format!("{base}/axapi/v3/{path}");
        Url::parse(&full).expect("invalid API URL")
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send an authenticated GET request and decode the body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let session_id = self.ensure_session().await?;
        let url = self.api_url(path);
        debug!("GET {url}");

        let resp = self
            .http
            .get(url)
            .header("Authorization", format!("A10 {session_id}"))
            .send()
            .await
            .map_err(Error::Transport)?;

        self.parse_body(resp).await
    }

    /// Send an authenticated POST request with a JSON body.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        let session_id = self.ensure_session().await?;
        let url = self.api_url(path);
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .header("Authorization", format!("A10 {session_id}"))
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;

        self.parse_body(resp).await
    }

    /// Send an authenticated DELETE request.
    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let session_id = self.ensure_session().await?;
        let url = self.api_url(path);
        debug!("DELETE {url}");

        let resp = self
            .http
            .delete(url)
            .header("Authorization", format!("A10 {session_id}"))
            .send()
            .await
            .map_err(Error::Transport)?;

        self.parse_body(resp).await
    }

    /// Decode a response body, mapping fail envelopes to typed errors.
    ///
    /// The appliance answers HTTP 200 even for logical failures, so status
    /// codes other than 401 are only a transport-level safety net. An invalid
    /// session id drops the cached id so the next call re-authenticates; the
    /// failed call itself is not retried.
    async fn parse_body<T: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            self.clear_session_id();
            return Err(Error::Authentication {
                message: "session rejected (HTTP 401)".into(),
            });
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let preview: String = body.chars().take(200).collect();
            return Err(Error::Appliance {
                code: 0,
                message: format!("HTTP {status}: {preview}"),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        if let Some((code, msg)) = fail_envelope(&body) {
            let err = Error::from_appliance(code, msg);
            if matches!(err, Error::SessionExpired) {
                trace!("appliance invalidated the session id");
                self.clear_session_id();
            }
            return Err(err);
        }

        // Some write endpoints answer 200 with an empty body.
        if body.trim().is_empty() {
            return serde_json::from_str("{}").map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })
    }
}
