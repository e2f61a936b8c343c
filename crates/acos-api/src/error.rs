use thiserror::Error;

/// Appliance error codes that mean "the named object does not exist".
///
/// `67239937` is the SLB object family ("No such Virtual Server" et al.);
/// `1023` is the generic configuration-object form.
const NOT_FOUND_CODES: &[u64] = &[1023, 67239937, 67305473];

/// Appliance error codes that mean "an object with that key already exists".
const EXISTS_CODES: &[u64] = &[1405, 1406, 2941];

/// Appliance error code for an invalid or expired session id.
const INVALID_SESSION_CODE: u64 = 1009;

/// Top-level error type for the `acos-api` crate.
///
/// Covers every failure mode: authentication, transport, and the appliance's
/// JSON fail envelope. AXAPI reports logical failures with HTTP 200 and a
/// `{"response": {"status": "fail", "err": {...}}}` body, so most variants
/// here originate from envelope classification rather than status codes.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login failed (wrong credentials, account locked, etc.)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// The appliance rejected the session id (expired or revoked).
    #[error("Session expired -- re-authentication required")]
    SessionExpired,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Appliance fail envelope ─────────────────────────────────────
    /// The named object does not exist on the appliance.
    #[error("Object not found (code {code}): {message}")]
    NotFound { code: u64, message: String },

    /// An object with that key already exists. Raised either by the
    /// appliance or client-side by create's existence pre-check
    /// (in which case `code` is 0).
    #[error("Object already exists (code {code}): {message}")]
    Exists { code: u64, message: String },

    /// Any other fail envelope, carrying the appliance's numeric code
    /// and message verbatim.
    #[error("Appliance error (code {code}): {message}")]
    Appliance { code: u64, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Classify a fail-envelope `(code, msg)` pair into a typed error.
    ///
    /// Unknown codes fall through to [`Error::Appliance`]. Messages are kept
    /// verbatim -- the appliance emits them with leading whitespace.
    pub(crate) fn from_appliance(code: u64, message: String) -> Self {
        if NOT_FOUND_CODES.contains(&code) {
            Self::NotFound { code, message }
        } else if EXISTS_CODES.contains(&code) {
            Self::Exists { code, message }
        } else if code == INVALID_SESSION_CODE {
            Self::SessionExpired
        } else {
            Self::Appliance { code, message }
        }
    }

    /// Returns `true` if this error indicates auth has expired
    /// and re-authentication might resolve it.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Authentication { .. } | Self::SessionExpired)
    }

    /// Returns `true` if this is a "no such object" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Extract the appliance error code, if this error carries one.
    pub fn appliance_code(&self) -> Option<u64> {
        match self {
            Self::NotFound { code, .. }
            | Self::Exists { code, .. }
            | Self::Appliance { code, .. } => Some(*code),
            _ => None,
        }
    }
}
