//! Per-request JWT authentication.
//!
//! The Advanced Trade API authenticates with a self-issued ES256 JWT: the
//! API key name goes into `kid`/`sub`, the EC private key signs, and the
//! `uri` claim binds the token to one method + path. Tokens are short
//! lived and rebuilt for every request.
//!
//! Security notes:
//! - The private key PEM is held in zeroizing memory and never logged.
//! - Keys are loaded once at startup; no runtime rotation.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use zeroize::Zeroizing;

use crate::error::{ExchangeError, ExchangeResult};

/// Token lifetime in seconds.
const TOKEN_TTL_SECS: i64 = 120;

/// Claims carried by every request token.
#[derive(Debug, Serialize)]
pub(crate) struct RequestClaims {
    /// Fixed issuer expected by the exchange.
    iss: &'static str,
    /// API key name.
    sub: String,
    /// Not-before (Unix seconds).
    nbf: i64,
    /// Expiry (Unix seconds).
    exp: i64,
    /// "<METHOD> <host><path>" of the request this token authorizes.
    uri: String,
}

impl RequestClaims {
    pub(crate) fn new(api_key: &str, uri: String) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            iss: "cdp",
            sub: api_key.to_string(),
            nbf: now,
            exp: now + TOKEN_TTL_SECS,
            uri,
        }
    }

    #[cfg(test)]
    pub(crate) fn lifetime(&self) -> i64 {
        self.exp - self.nbf
    }

    #[cfg(test)]
    pub(crate) fn uri(&self) -> &str {
        &self.uri
    }
}

/// Signs request tokens with the configured EC private key.
pub(crate) struct JwtSigner {
    api_key: String,
    private_key_pem: Zeroizing<String>,
}

impl JwtSigner {
    pub(crate) fn new(api_key: String, private_key_pem: String) -> Self {
        Self {
            api_key,
            private_key_pem: Zeroizing::new(private_key_pem),
        }
    }

    /// Build a bearer token authorizing `method` on `host_and_path`.
    pub(crate) fn bearer_token(&self, method: &str, host_and_path: &str) -> ExchangeResult<String> {
        let claims = RequestClaims::new(&self.api_key, format!("{method} {host_and_path}"));

        let key = EncodingKey::from_ec_pem(self.private_key_pem.as_bytes())
            .map_err(|e| ExchangeError::Auth(format!("Invalid EC private key: {e}")))?;

        let mut header = Header::new(Algorithm::ES256);
        header.kid = Some(self.api_key.clone());

        encode(&header, &claims, &key)
            .map_err(|e| ExchangeError::Auth(format!("Failed to sign token: {e}")))
    }
}
