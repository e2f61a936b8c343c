// AXAPI authentication
//
// Session login/logoff. `POST /axapi/v3/auth` exchanges admin credentials for
// a session id; every subsequent request carries it as `Authorization: A10
// {id}`. The appliance signals bad credentials through the same fail envelope
// it uses everywhere else, still with HTTP 200.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::client::{AxapiClient, fail_envelope};
use crate::error::Error;

/// Username/password pair for the appliance's management interface.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<SecretString>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Success body of the auth endpoint.
///
/// Current firmware returns `{"authresponse": {"signature": "..."}}`; older
/// builds emit a top-level `session_id`. Both shapes are accepted, the
/// signature form preferred.
#[derive(Deserialize)]
struct AuthResponse {
    #[serde(default)]
    authresponse: Option<AuthResponseBody>,
    #[serde(default)]
    session_id: Option<String>,
}

#[derive(Deserialize)]
struct AuthResponseBody {
    #[serde(default)]
    signature: Option<String>,
}

impl AuthResponse {
    fn into_session_id(self) -> Option<String> {
        self.authresponse
            .and_then(|body| body.signature)
            .or(self.session_id)
    }
}

impl AxapiClient {
    /// Authenticate with the appliance and cache the session id.
    ///
    /// Called lazily by the request helpers; normally there is no reason to
    /// invoke it directly. The auth request itself carries no session header.
    pub(crate) async fn authenticate(&self) -> Result<String, Error> {
        let url = self.api_url("auth");
        debug!("authenticating at {url}");

        let body = json!({
            "credentials": {
                "username": self.credentials().username,
                "password": self.credentials().password.expose_secret(),
            }
        });

        let resp = self
            .http()
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("login failed (HTTP {status}): {body}"),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        // Bad credentials come back as a fail envelope with HTTP 200.
        if let Some((code, msg)) = fail_envelope(&body) {
            return Err(Error::Authentication {
                message: format!("{msg} (code {code})"),
            });
        }

        let parsed: AuthResponse =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: format!("malformed auth response: {e}"),
                body: body.clone(),
            })?;

        let session_id = parsed.into_session_id().ok_or_else(|| Error::Authentication {
            message: "auth response carried no session id".into(),
        })?;

        self.set_session_id(session_id.clone());
        debug!("authentication successful");
        Ok(session_id)
    }

    /// End the current session.
    ///
    /// `POST /axapi/v3/logoff` with the session header. The cached session id
    /// is dropped regardless of what the appliance answers; a client without
    /// a session is a no-op.
    pub async fn logoff(&self) -> Result<(), Error> {
        let Some(session_id) = self.session_id() else {
            return Ok(());
        };

        let url = self.api_url("logoff");
        debug!("logging off at {url}");

        let _resp = self
            .http()
            .post(url)
            .header("Authorization", format!("A10 {session_id}"))
            .send()
            .await
            .map_err(Error::Transport)?;

        self.clear_session_id();
        debug!("logoff complete");
        Ok(())
    }
}
